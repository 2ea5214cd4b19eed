use super::*;

fn png_bytes(img: image::RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_image_png_dimensions_and_premul() {
    let img = image::RgbaImage::from_raw(1, 1, vec![100u8, 50u8, 200u8, 128u8]).unwrap();

    let pixmap = decode_image(&png_bytes(img)).unwrap();
    assert_eq!(pixmap.width(), 1);
    assert_eq!(pixmap.height(), 1);
    assert_eq!(
        pixmap.data(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn decode_image_rejects_garbage() {
    assert!(matches!(
        decode_image(b"definitely not an image"),
        Err(ElfError::ImageLoad(_))
    ));
}

#[test]
fn parse_svg_ok_and_err() {
    parse_svg(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"></svg>"#).unwrap();
    assert!(matches!(parse_svg("<svg"), Err(ElfError::ImageLoad(_))));
}

#[test]
fn rasterize_stretches_to_requested_size() {
    let tree = parse_svg(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10" viewBox="0 0 10 10">
            <rect x="0" y="0" width="5" height="10" fill="#ff0000"/>
        </svg>"##,
    )
    .unwrap();
    let pixmap = rasterize_svg(&tree, 40, 20).unwrap();
    assert_eq!((pixmap.width(), pixmap.height()), (40, 20));

    let px = |x: u32, y: u32| {
        let i = ((y * 40 + x) * 4) as usize;
        pixmap.data()[i..i + 4].to_vec()
    };
    assert_eq!(px(5, 10), vec![255, 0, 0, 255]);
    assert_eq!(px(35, 10), vec![0, 0, 0, 0]);
}

#[test]
fn encode_png_demultiplies() {
    let img = image::RgbaImage::from_raw(2, 1, vec![200, 100, 50, 255, 0, 0, 0, 0]).unwrap();
    let pixmap = decode_image(&png_bytes(img)).unwrap();

    let encoded = encode_png(&pixmap).unwrap();
    let back = image::load_from_memory(&encoded).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (2, 1));
    assert_eq!(back.as_raw().as_slice(), &[200, 100, 50, 255, 0, 0, 0, 0]);
}
