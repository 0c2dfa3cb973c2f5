/// One square raster rendering of the source icon.
///
/// Pixels are straight (non-premultiplied) RGBA8, which is what PNG-in-ICO expects.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub size: u32,
    pub rgba: image::RgbaImage,
}

impl Frame {
    pub fn new(rgba: image::RgbaImage) -> Self {
        let size = rgba.width();
        Self { size, rgba }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.rgba.dimensions()
    }

    pub fn is_square(&self) -> bool {
        let (w, h) = self.dimensions();
        w == h && w == self.size
    }
}
