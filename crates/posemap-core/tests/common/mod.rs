use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use posemap_core::record::VideoRecord;

/// Build a record where every frame carries the same joints.
///
/// `joints` lists `(x, y, visibility)` for the leading columns; the remaining
/// columns up to `raw_joint_count` are unannotated at the origin.
pub fn build_record(
    frame_dir: &Path,
    frames: usize,
    width: usize,
    height: usize,
    raw_joint_count: usize,
    joints: &[(f64, f64, i32)],
) -> VideoRecord {
    let mut x = vec![0.0f64; raw_joint_count];
    let mut y = vec![0.0f64; raw_joint_count];
    let mut v = vec![0i32; raw_joint_count];
    for (j, &(jx, jy, jv)) in joints.iter().enumerate() {
        x[j] = jx;
        y[j] = jy;
        v[j] = jv;
    }

    VideoRecord {
        frame_count: frames,
        frame_dir: frame_dir.to_path_buf(),
        dimensions: [height, width],
        x: vec![x; frames],
        y: vec![y; frames],
        visibility: vec![v; frames],
        bbox: (0..frames)
            .map(|f| [f as f32, 0.0, width as f32, height as f32])
            .collect(),
    }
}

/// Write `count` solid-color JPEG frames named `000001.jpg`, `000002.jpg`, ...
pub fn write_frames(dir: &Path, count: usize, width: u32, height: u32) {
    fs::create_dir_all(dir).expect("create frame dir");
    for i in 0..count {
        let shade = (i * 20 % 256) as u8;
        let img = RgbImage::from_pixel(width, height, Rgb([shade, 128, 255]));
        img.save(dir.join(format!("{:06}.jpg", i + 1)))
            .expect("write frame");
    }
}

/// Serialize `record` as `<split_dir>/<name>.json`.
pub fn write_record(split_dir: &Path, name: &str, record: &VideoRecord) -> PathBuf {
    fs::create_dir_all(split_dir).expect("create split dir");
    let path = split_dir.join(format!("{name}.json"));
    let json = serde_json::to_string(record).expect("serialize record");
    fs::write(&path, json).expect("write record");
    path
}

/// Head at (50, 50), shoulders at (40, 50) and (60, 50), all visible.
pub const UPPER_BODY: [(f64, f64, i32); 3] = [(50.0, 50.0, 1), (40.0, 50.0, 1), (60.0, 50.0, 1)];
