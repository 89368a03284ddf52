//! Procedural drawing of the book icon.
//!
//! An icon is a horizontal gradient background with a white open book
//! (two pages and a spine) centered on it. Everything here is pure: the
//! same size always produces the same pixels.

use image::{Rgb, RgbImage};

/// Left edge color of the background gradient (`#667eea`), also used for the spine.
pub const GRADIENT_START: Rgb<u8> = Rgb([0x66, 0x7e, 0xea]);

/// Right edge color of the background gradient (`#764ba2`).
pub const GRADIENT_END: Rgb<u8> = Rgb([0x76, 0x4b, 0xa2]);

/// Fill color of both book pages.
pub const PAGE_COLOR: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);

/// Geometry of the book glyph for one icon size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookLayout {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Width of each page; both pages are the same width.
    pub page_width: u32,
    /// Column where the left page ends and the right page begins.
    pub spine_x: u32,
    /// Width of the spine line in pixels, never less than 1.
    pub stroke: u32,
}

impl BookLayout {
    /// Compute the centered book geometry for a `size`×`size` icon.
    ///
    /// The book spans 60% of the icon width and 40% of its height, both
    /// rounded down.
    pub fn for_size(size: u32) -> Self {
        let width = (size as f64 * 0.6) as u32;
        let height = (size as f64 * 0.4) as u32;
        let x = (size - width) / 2;
        let y = (size - height) / 2;
        let page_width = width / 2;

        Self {
            x,
            y,
            width,
            height,
            page_width,
            spine_x: x + page_width,
            stroke: (size / 32).max(1),
        }
    }

    /// Whether pixel `(px, py)` falls inside the book's bounding box.
    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Columns `[start, end)` covered by the spine, clipped to the book.
    pub fn spine_columns(&self) -> (u32, u32) {
        let start = self.spine_x.saturating_sub(self.stroke / 2).max(self.x);
        let end = (start + self.stroke).min(self.x + self.width);
        (start, end)
    }
}

/// Color of gradient column `column` in an icon `size` pixels wide.
///
/// Channels are interpolated independently and truncated toward zero, so
/// column 0 is exactly [`GRADIENT_START`] and the last column lands just short
/// of [`GRADIENT_END`].
pub fn gradient_color(column: u32, size: u32) -> Rgb<u8> {
    let ratio = column as f64 / size as f64;
    let lerp = |start: u8, end: u8| (start as f64 + (end as f64 - start as f64) * ratio) as u8;

    Rgb([
        lerp(GRADIENT_START[0], GRADIENT_END[0]),
        lerp(GRADIENT_START[1], GRADIENT_END[1]),
        lerp(GRADIENT_START[2], GRADIENT_END[2]),
    ])
}

/// Draw the book glyph described by `layout` onto `img`.
pub fn draw_book(img: &mut RgbImage, layout: &BookLayout) {
    // Left page, then right page
    fill_rect(img, layout.x, layout.y, layout.page_width, layout.height, PAGE_COLOR);
    fill_rect(img, layout.spine_x, layout.y, layout.page_width, layout.height, PAGE_COLOR);

    let (spine_start, spine_end) = layout.spine_columns();
    fill_rect(
        img,
        spine_start,
        layout.y,
        spine_end - spine_start,
        layout.height,
        GRADIENT_START,
    );
}

/// Render a complete `size`×`size` icon.
pub fn render_icon(size: u32) -> RgbImage {
    let mut img = RgbImage::from_fn(size, size, |x, _| gradient_color(x, size));
    draw_book(&mut img, &BookLayout::for_size(size));
    img
}

fn fill_rect(img: &mut RgbImage, x: u32, y: u32, width: u32, height: u32, color: Rgb<u8>) {
    let x_end = (x + width).min(img.width());
    let y_end = (y + height).min(img.height());

    for py in y..y_end {
        for px in x..x_end {
            img.put_pixel(px, py, color);
        }
    }
}
