/// Owned RGBA raster handed back to the caller after a render.
use std::path::Path;

use image::RgbaImage;
use tiny_skia::Pixmap;

use crate::config::Rgba;
use crate::error::{Error, Result};

#[derive(Clone)]
pub struct ClockImage {
    pixmap: Pixmap,
}

impl ClockImage {
    pub(crate) fn from_pixmap(pixmap: Pixmap) -> Self {
        Self { pixmap }
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight-alpha color at (x, y), or None outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            Rgba(c.red(), c.green(), c.blue(), c.alpha())
        })
    }

    /// Premultiplied RGBA bytes, row major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Convert to a straight-alpha `image` buffer for hosts that take
    /// `image` types.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let (w, h) = (self.width(), self.height());
        RgbaImage::from_fn(w, h, |x, y| {
            let Rgba(r, g, b, a) = self.pixel(x, y).unwrap_or(Rgba::TRANSPARENT);
            image::Rgba([r, g, b, a])
        })
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|e| Error::Image(e.to_string()))
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.pixmap
            .save_png(path)
            .map_err(|e| Error::Image(format!("{}: {}", path.display(), e)))
    }
}

impl PartialEq for ClockImage {
    fn eq(&self, other: &Self) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.data() == other.data()
    }
}

impl std::fmt::Debug for ClockImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClockImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiny_skia::Color;

    #[test]
    fn test_to_rgba_image_demultiplies() {
        let mut pixmap = Pixmap::new(4, 2).unwrap();
        pixmap.fill(Color::from_rgba8(200, 100, 50, 128));
        let image = ClockImage::from_pixmap(pixmap);

        let rgba = image.to_rgba_image();
        assert_eq!(rgba.dimensions(), (4, 2));
        let px = rgba.get_pixel(3, 1);
        assert_eq!(px[3], 128);
        assert!((px[0] as i32 - 200).abs() <= 2);
        assert!((px[1] as i32 - 100).abs() <= 2);
    }

    #[test]
    fn test_encode_png_signature() {
        let image = ClockImage::from_pixmap(Pixmap::new(8, 8).unwrap());
        let png = image.encode_png().unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
