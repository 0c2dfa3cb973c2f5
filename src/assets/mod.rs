pub mod frame;
pub mod svg_raster;
