use super::*;

#[test]
fn premultiply_scales_color_by_alpha() {
    let mut px = [100u8, 50, 200, 128];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(
        px,
        [
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128
        ]
    );
}

#[test]
fn premultiply_zeroes_transparent_pixels() {
    let mut px = [9u8, 9, 9, 0];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px, [0, 0, 0, 0]);
}

#[test]
fn demultiply_approximately_inverts_premultiply() {
    let src = [100u8, 50, 200, 128];
    let mut px = src;
    premultiply_rgba8_in_place(&mut px);
    demultiply_rgba8_in_place(&mut px);
    for i in 0..3 {
        assert!((i16::from(px[i]) - i16::from(src[i])).abs() <= 1);
    }
    assert_eq!(px[3], 128);
}

#[test]
fn demultiply_leaves_opaque_pixels_untouched() {
    let mut px = [1u8, 2, 3, 255];
    demultiply_rgba8_in_place(&mut px);
    assert_eq!(px, [1, 2, 3, 255]);
}
