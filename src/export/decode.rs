use std::io::Cursor;

use resvg::tiny_skia::{IntSize, Pixmap, Transform};

use crate::foundation::error::{ElfError, ElfResult};
use crate::foundation::math::{demultiply_rgba8_in_place, premultiply_rgba8_in_place};

/// Decode PNG/JPEG/... bytes into a premultiplied pixmap.
pub(crate) fn decode_image(bytes: &[u8]) -> ElfResult<Pixmap> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| ElfError::image_load(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    let size = IntSize::from_wh(width, height)
        .ok_or_else(|| ElfError::image_load("decoded image has zero size"))?;
    Pixmap::from_vec(rgba8_premul, size)
        .ok_or_else(|| ElfError::image_load(format!("image {width}x{height} does not fit a pixmap")))
}

pub(crate) fn parse_svg(svg: &str) -> ElfResult<usvg::Tree> {
    let opts = usvg::Options::default();
    usvg::Tree::from_str(svg, &opts)
        .map_err(|e| ElfError::image_load(format!("parse scene svg: {e}")))
}

/// Rasterize `tree` stretched to exactly `width` x `height`.
pub(crate) fn rasterize_svg(tree: &usvg::Tree, width: u32, height: u32) -> ElfResult<Pixmap> {
    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| ElfError::image_load(format!("failed to allocate {width}x{height} pixmap")))?;

    let size = tree.size();
    if !(size.width() > 0.0 && size.height() > 0.0) {
        return Err(ElfError::image_load("svg has invalid width/height"));
    }
    let sx = (width as f32) / size.width();
    let sy = (height as f32) / size.height();

    resvg::render(tree, Transform::from_scale(sx, sy), &mut pixmap.as_mut());
    Ok(pixmap)
}

/// Encode a premultiplied pixmap as PNG.
pub(crate) fn encode_png(pixmap: &Pixmap) -> ElfResult<Vec<u8>> {
    let mut rgba = pixmap.data().to_vec();
    demultiply_rgba8_in_place(&mut rgba);
    let img = image::RgbaImage::from_raw(pixmap.width(), pixmap.height(), rgba)
        .ok_or_else(|| ElfError::render("pixmap buffer size mismatch"))?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| ElfError::render(format!("encode png: {e}")))?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/export/decode.rs"]
mod tests;
