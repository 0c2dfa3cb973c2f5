use std::path::Path;

use rayon::prelude::*;

use crate::assets::frame::Frame;
use crate::foundation::error::{IconError, IconResult};

// Avoid pathological allocations; icons never get near this.
#[cfg(feature = "svg")]
const MAX_DIM: u32 = 16_384;

/// Parsed source icon.
#[derive(Clone)]
pub struct SourceSvg {
    #[cfg(feature = "svg")]
    tree: std::sync::Arc<usvg::Tree>,
}

impl std::fmt::Debug for SourceSvg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("SourceSvg");
        #[cfg(feature = "svg")]
        s.field("width", &self.tree.size().width())
            .field("height", &self.tree.size().height());
        s.finish()
    }
}

/// Parse `bytes` with system fonts only and no base directory for relative `href`s.
pub fn parse_svg(bytes: &[u8]) -> IconResult<SourceSvg> {
    parse_svg_in(bytes, None)
}

/// Parse `bytes`, resolving relative images and a sibling `fonts/` dir against `resources_dir`.
#[cfg(feature = "svg")]
pub fn parse_svg_in(bytes: &[u8], resources_dir: Option<&Path>) -> IconResult<SourceSvg> {
    let resources_dir = resources_dir.map(Path::to_path_buf);
    let fontdb = build_svg_fontdb(resources_dir.as_deref());
    let opts = usvg::Options {
        resources_dir,
        fontdb,
        ..Default::default()
    };

    let tree = usvg::Tree::from_data(bytes, &opts)
        .map_err(|e| IconError::svg(format!("parse svg tree: {e}")))?;
    Ok(SourceSvg {
        tree: std::sync::Arc::new(tree),
    })
}

#[cfg(not(feature = "svg"))]
pub fn parse_svg_in(_bytes: &[u8], _resources_dir: Option<&Path>) -> IconResult<SourceSvg> {
    Err(not_built())
}

#[cfg(feature = "svg")]
pub(crate) fn build_svg_fontdb(
    resources_dir: Option<&Path>,
) -> std::sync::Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();

    if let Some(dir) = resources_dir {
        let fonts = dir.join("fonts");
        if fonts.is_dir() {
            db.load_fonts_dir(&fonts);
        }
    }

    let faces = db.faces().count();
    if faces == 0 {
        // <text> elements render as nothing without a single face.
        tracing::warn!("no fonts found; svg text will not be drawn");
    } else {
        tracing::debug!(faces, "loaded svg fonts");
    }
    std::sync::Arc::new(db)
}

/// Render `svg` into a `size x size` frame, stretching the intrinsic size to fill it.
#[cfg(feature = "svg")]
pub fn rasterize_square(svg: &SourceSvg, size: u32) -> IconResult<Frame> {
    if size == 0 || size > MAX_DIM {
        return Err(IconError::raster(format!(
            "frame size {size} out of range (1..={MAX_DIM})"
        )));
    }

    let tree = svg.tree.as_ref();
    let (tw, th) = (tree.size().width(), tree.size().height());
    if !tw.is_finite() || !th.is_finite() || tw <= 0.0 || th <= 0.0 {
        return Err(IconError::raster("svg has invalid width/height"));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)
        .ok_or_else(|| IconError::raster("failed to allocate svg pixmap"))?;

    let sx = (size as f32) / tw;
    let sy = (size as f32) / th;
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(tree, xform, &mut pixmap.as_mut());

    let mut straight = Vec::with_capacity((size as usize) * (size as usize) * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        straight.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let rgba = image::RgbaImage::from_raw(size, size, straight)
        .ok_or_else(|| IconError::raster("pixmap buffer does not match frame size"))?;
    Ok(Frame::new(rgba))
}

#[cfg(not(feature = "svg"))]
pub fn rasterize_square(_svg: &SourceSvg, _size: u32) -> IconResult<Frame> {
    Err(not_built())
}

/// Render one frame per entry in `sizes`. Output order matches `sizes`.
#[tracing::instrument(level = "debug", skip(svg))]
pub fn rasterize_all(svg: &SourceSvg, sizes: &[u32]) -> IconResult<Vec<Frame>> {
    sizes
        .par_iter()
        .map(|&size| {
            let frame = rasterize_square(svg, size)?;
            tracing::debug!(size, "rasterized frame");
            Ok(frame)
        })
        .collect()
}

#[cfg(not(feature = "svg"))]
fn not_built() -> IconError {
    IconError::unavailable("built without the `svg` feature")
}
