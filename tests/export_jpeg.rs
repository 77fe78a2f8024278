use inkboard::export::{encode_jpeg, save_jpeg};
use inkboard::{SurfacePair, CANVAS_HEIGHT, CANVAS_WIDTH};

fn decoded_pixel(bytes: &[u8], x: u32, y: u32) -> [u8; 3] {
    let img = image::load_from_memory(bytes).unwrap().to_rgb8();
    assert_eq!(img.width(), CANVAS_WIDTH);
    assert_eq!(img.height(), CANVAS_HEIGHT);
    img.get_pixel(x, y).0
}

#[test]
fn blank_export_is_the_background_fill() {
    let surfaces = SurfacePair::new(CANVAS_WIDTH, CANVAS_HEIGHT).unwrap();
    let bytes = encode_jpeg(surfaces.ink()).unwrap();

    // JPEG is lossy; allow a small tolerance around pure white.
    let [r, g, b] = decoded_pixel(&bytes, 300, 300);
    assert!(r >= 250 && g >= 250 && b >= 250);
}

#[test]
fn export_reflects_committed_strokes() {
    let mut surfaces = SurfacePair::new(CANVAS_WIDTH, CANVAS_HEIGHT).unwrap();
    surfaces.commit_segment((100.0, 300.0), (500.0, 300.0), "#000000", 10.0);

    let bytes = encode_jpeg(surfaces.ink()).unwrap();
    let [r, g, b] = decoded_pixel(&bytes, 300, 300);
    assert!(r <= 60 && g <= 60 && b <= 60);

    let [r, g, b] = decoded_pixel(&bytes, 300, 100);
    assert!(r >= 250 && g >= 250 && b >= 250);
}

#[test]
fn export_reflects_a_clear() {
    let mut surfaces = SurfacePair::new(CANVAS_WIDTH, CANVAS_HEIGHT).unwrap();
    surfaces.commit_segment((100.0, 300.0), (500.0, 300.0), "#000000", 10.0);
    surfaces.clear_ink();

    let bytes = encode_jpeg(surfaces.ink()).unwrap();
    let [r, g, b] = decoded_pixel(&bytes, 300, 300);
    assert!(r >= 250 && g >= 250 && b >= 250);
}

#[test]
fn save_jpeg_writes_a_jpeg_file() {
    let surfaces = SurfacePair::new(CANVAS_WIDTH, CANVAS_HEIGHT).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drawing.jpg");

    save_jpeg(surfaces.ink(), &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.len() > 2);
    // JPEG magic number.
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
}
