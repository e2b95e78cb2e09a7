use super::*;

fn solid(width: u32, height: u32, rgba: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data: rgba.repeat(width as usize * height as usize),
    }
}

#[test]
fn save_png_writes_a_decodable_image() {
    let dir = std::env::temp_dir().join(format!("vision-explainer-png-{}", std::process::id()));
    let path = dir.join("nested").join("frame.png");
    let mut frame = solid(4, 3, [15, 23, 42, 255]);
    frame.data[..4].copy_from_slice(&[255, 0, 0, 255]);
    frame.save_png(&path).unwrap();

    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (4, 3));
    assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(decoded.get_pixel(3, 2).0, [15, 23, 42, 255]);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn save_png_unpremultiplies_translucent_pixels() {
    let dir = std::env::temp_dir().join(format!("vision-explainer-alpha-{}", std::process::id()));
    let path = dir.join("frame.png");
    let p = Rgba8Premul::from_straight_rgba(200, 100, 0, 128);
    solid(1, 1, [p.r, p.g, p.b, p.a]).save_png(&path).unwrap();

    let [r, g, b, a] = image::open(&path).unwrap().to_rgba8().get_pixel(0, 0).0;
    assert_eq!(a, 128);
    assert!(r.abs_diff(200) <= 2, "r = {r}");
    assert!(g.abs_diff(100) <= 2, "g = {g}");
    assert_eq!(b, 0);
    let _ = std::fs::remove_dir_all(&dir);
}
