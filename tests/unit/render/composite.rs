use super::*;

#[test]
fn unpremultiply_restores_straight_channels() {
    let premul = Rgba8Premul::from_straight_rgba(200, 100, 0, 128);
    let [r, g, b, a] = unpremultiply(premul);
    assert_eq!(a, 128);
    assert!(r.abs_diff(200) <= 2);
    assert!(g.abs_diff(100) <= 2);
    assert_eq!(b, 0);
}

#[test]
fn unpremultiply_keeps_opaque_and_clears_transparent() {
    let opaque = Rgba8Premul::from_straight_rgba(15, 23, 42, 255);
    assert_eq!(unpremultiply(opaque), [15, 23, 42, 255]);
    assert_eq!(unpremultiply(Rgba8Premul::transparent()), [0, 0, 0, 0]);
}
