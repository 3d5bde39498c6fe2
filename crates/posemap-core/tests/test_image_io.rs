use ndarray::Array2;

use posemap_core::error::PosemapError;
use posemap_core::io::image_io::{load_rgb_tensor, save_map_png};

#[test]
fn test_save_load_roundtrip_png() {
    let mut map = Array2::<f32>::zeros((6, 4));
    map[[0, 1]] = 0.5;
    map[[5, 3]] = 1.0;
    map[[2, 0]] = 2.0;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.png");
    save_map_png(map.view(), &path).unwrap();

    let loaded = load_rgb_tensor(&path).unwrap();
    assert_eq!(loaded.dim(), (3, 6, 4));
    for c in 0..3 {
        assert_eq!(loaded[[c, 0, 0]], 0.0);
        assert!((loaded[[c, 0, 1]] - 0.5).abs() < 1e-2);
        assert_eq!(loaded[[c, 5, 3]], 1.0);
        // Values above 1 are clamped.
        assert_eq!(loaded[[c, 2, 0]], 1.0);
    }
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("000001.jpg");
    let err = load_rgb_tensor(&path).unwrap_err();
    match err {
        PosemapError::ImageLoad { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_load_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("000001.jpg");
    std::fs::write(&path, b"not a jpeg").unwrap();
    assert!(matches!(
        load_rgb_tensor(&path),
        Err(PosemapError::ImageLoad { .. })
    ));
}
