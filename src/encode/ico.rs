use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::ExtendedColorType;
use image::codecs::ico::{IcoEncoder, IcoFrame};

use crate::assets::frame::Frame;
use crate::foundation::error::{IconError, IconResult};

/// Largest side an ICO directory entry can declare.
const MAX_ICO_DIM: u32 = 256;

/// Encode `frames` into one ICO container, in order.
///
/// Each frame is stored as a PNG entry tagged with its `(size, size)`. The first frame becomes the
/// first directory entry, so callers pass the smallest size first.
pub fn encode_ico(frames: &[Frame]) -> IconResult<Vec<u8>> {
    validate_frames(frames)?;

    let mut entries = Vec::with_capacity(frames.len());
    for frame in frames {
        let entry = IcoFrame::as_png(
            frame.rgba.as_raw(),
            frame.size,
            frame.size,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| IconError::encode(format!("png entry {0}x{0}: {e}", frame.size)))?;
        entries.push(entry);
    }

    let mut buf = Vec::new();
    IcoEncoder::new(Cursor::new(&mut buf))
        .encode_images(&entries)
        .map_err(|e| IconError::encode(format!("ico container: {e}")))?;
    Ok(buf)
}

fn validate_frames(frames: &[Frame]) -> IconResult<()> {
    if frames.is_empty() {
        return Err(IconError::encode("no frames to encode"));
    }

    for frame in frames {
        if !frame.is_square() {
            let (w, h) = frame.dimensions();
            return Err(IconError::encode(format!(
                "frame tagged {} is {w}x{h}, expected square",
                frame.size
            )));
        }
        if frame.size == 0 || frame.size > MAX_ICO_DIM {
            return Err(IconError::encode(format!(
                "frame size {} out of range (1..={MAX_ICO_DIM})",
                frame.size
            )));
        }
    }

    if let Some(w) = frames.windows(2).find(|w| w[0].size >= w[1].size) {
        return Err(IconError::encode(format!(
            "frames must be strictly ascending by size (got {} then {})",
            w[0].size, w[1].size
        )));
    }

    Ok(())
}

/// Write `bytes` to `path`, replacing any previous file.
///
/// The data goes to a sibling `<name>.<pid>.tmp` first and is renamed into place, so a failed write never
/// leaves a truncated icon at `path`.
#[tracing::instrument(level = "debug", skip(bytes), fields(len = bytes.len()))]
pub fn write_output(path: &Path, bytes: &[u8]) -> IconResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let tmp = temp_path(path);
    let res = fs::write(&tmp, bytes)
        .with_context(|| format!("write temp icon '{}'", tmp.display()))
        .and_then(|()| {
            fs::rename(&tmp, path).with_context(|| {
                format!("rename '{}' -> '{}'", tmp.display(), path.display())
            })
        });

    if let Err(e) = res {
        if let Err(rm) = fs::remove_file(&tmp) {
            tracing::debug!(path = %tmp.display(), error = %rm, "temp icon not removed");
        }
        return Err(e.into());
    }
    Ok(())
}

/// `<name>.<pid>.tmp` in the same directory, so the final rename stays on one filesystem.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}
