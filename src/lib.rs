//! Render the GlobalAudio application icon from SVG into a multi-resolution `.ico`.
//!
//! The pipeline is `probe` -> `convert`: [`probe`] checks that the rasterizer and encoder work,
//! then [`convert`] reads the SVG, renders every size in [`ICON_SIZES`] and writes one container.
#![forbid(unsafe_code)]

pub mod assets;
pub mod capability;
pub mod convert;
pub mod encode;
pub mod foundation;
pub mod guide;

pub use assets::frame::Frame;
pub use assets::svg_raster::{
    SourceSvg, parse_svg, parse_svg_in, rasterize_all, rasterize_square,
};
pub use capability::{Capability, probe};
pub use convert::{ConvertOutcome, convert};
pub use encode::ico::{encode_ico, write_output};
pub use foundation::config::{ICON_SIZES, INPUT_PATH, IconJob, OUTPUT_PATH};
pub use foundation::error::{IconError, IconResult};
