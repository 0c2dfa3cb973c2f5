//! Startup check that the rasterizer and the ICO encoder are usable.

use crate::assets::svg_raster::{parse_svg, rasterize_square};
use crate::encode::ico::encode_ico;
use crate::foundation::error::IconResult;

const PROBE_SVG: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"><rect width="1" height="1" fill="#000"/></svg>"##;
const PROBE_SIZE: u32 = 16;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Capability {
    Available,
    Unavailable(String),
}

impl Capability {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Render and encode a tiny built-in icon in memory.
pub fn probe() -> Capability {
    match self_test() {
        Ok(()) => Capability::Available,
        Err(e) => {
            tracing::warn!(error = %e, "capability probe failed");
            Capability::Unavailable(e.to_string())
        }
    }
}

fn self_test() -> IconResult<()> {
    let svg = parse_svg(PROBE_SVG)?;
    let frame = rasterize_square(&svg, PROBE_SIZE)?;
    encode_ico(std::slice::from_ref(&frame))?;
    Ok(())
}
