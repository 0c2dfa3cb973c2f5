use std::path::PathBuf;

use anyhow::Context as _;

use crate::assets::svg_raster::{parse_svg_in, rasterize_all};
use crate::encode::ico::{encode_ico, write_output};
use crate::foundation::config::{ICON_SIZES, IconJob};
use crate::foundation::error::IconResult;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConvertOutcome {
    /// The icon was written with one frame per entry of `sizes`.
    Created { output: PathBuf, sizes: Vec<u32> },
    /// Nothing was written.
    InputMissing { input: PathBuf },
}

/// Render `job.input` at every [`ICON_SIZES`] entry and write the icon to `job.output`.
///
/// A missing input is an outcome, not an error. Parse, encode and IO failures are returned.
#[tracing::instrument(skip_all, fields(input = %job.input().display(), output = %job.output().display()))]
pub fn convert(job: &IconJob) -> IconResult<ConvertOutcome> {
    let input = job.input();
    if !input.exists() {
        tracing::info!("input svg missing");
        return Ok(ConvertOutcome::InputMissing {
            input: input.to_path_buf(),
        });
    }

    let bytes =
        std::fs::read(input).with_context(|| format!("read svg '{}'", input.display()))?;
    let svg = parse_svg_in(&bytes, input.parent())?;
    tracing::debug!(?svg, len = bytes.len(), "parsed svg");

    let frames = rasterize_all(&svg, &ICON_SIZES)?;
    let ico = encode_ico(&frames)?;
    write_output(job.output(), &ico)?;

    tracing::info!(frames = frames.len(), bytes = ico.len(), "wrote icon");
    Ok(ConvertOutcome::Created {
        output: job.output().to_path_buf(),
        sizes: frames.iter().map(|f| f.size).collect(),
    })
}
