use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PosemapError, Result};

/// Per-video annotation record, one JSON file per video.
///
/// Joint matrices are indexed `[frame][joint]`. Columns follow the dataset's
/// joint ordering: 0 = head, 1 = left shoulder, 2 = right shoulder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    #[serde(rename = "nframes")]
    pub frame_count: usize,
    #[serde(rename = "framepath")]
    pub frame_dir: PathBuf,
    /// `[height, width]` of every frame.
    pub dimensions: [usize; 2],
    pub x: Vec<Vec<f64>>,
    pub y: Vec<Vec<f64>>,
    pub visibility: Vec<Vec<i32>>,
    #[serde(default)]
    pub bbox: Vec<[f32; 4]>,
}

/// Person bounding box in frame pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<[f32; 4]> for BoundingBox {
    fn from(v: [f32; 4]) -> Self {
        Self {
            x: v[0],
            y: v[1],
            width: v[2],
            height: v[3],
        }
    }
}

impl VideoRecord {
    /// Read a record from a JSON file. Shapes are not checked here.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let record = serde_json::from_reader(BufReader::new(file))?;
        Ok(record)
    }

    pub fn height(&self) -> usize {
        self.dimensions[0]
    }

    pub fn width(&self) -> usize {
        self.dimensions[1]
    }

    /// Number of joint columns, taken from the first annotated frame.
    pub fn joint_columns(&self) -> usize {
        self.x.first().map_or(0, Vec::len)
    }

    /// Check that every joint matrix is `frame_count × raw_joint_count`.
    pub fn validate(&self, raw_joint_count: usize) -> Result<()> {
        if self.height() == 0 || self.width() == 0 {
            return Err(PosemapError::InvalidRecord(format!(
                "zero frame dimensions {}x{}",
                self.width(),
                self.height()
            )));
        }

        let matrices: [(&str, usize, Vec<usize>); 3] = [
            ("x", self.x.len(), self.x.iter().map(Vec::len).collect()),
            ("y", self.y.len(), self.y.iter().map(Vec::len).collect()),
            (
                "visibility",
                self.visibility.len(),
                self.visibility.iter().map(Vec::len).collect(),
            ),
        ];
        for (name, rows, cols) in &matrices {
            if *rows != self.frame_count {
                return Err(PosemapError::InvalidRecord(format!(
                    "{name} has {rows} rows, expected {}",
                    self.frame_count
                )));
            }
            if let Some((frame, n)) = cols
                .iter()
                .enumerate()
                .find(|&(_, &n)| n != raw_joint_count)
            {
                return Err(PosemapError::InvalidRecord(format!(
                    "{name}[{frame}] has {n} joints, expected {raw_joint_count}"
                )));
            }
        }
        Ok(())
    }

    /// Path of the JPEG for zero-based `frame`; files are numbered from 1.
    pub fn frame_path(&self, frame: usize) -> PathBuf {
        self.frame_dir.join(format!("{:06}.jpg", frame + 1))
    }

    /// Bounding box of `frame`, if the record has one for it.
    pub fn bbox_at(&self, frame: usize) -> Option<BoundingBox> {
        self.bbox.get(frame).copied().map(BoundingBox::from)
    }
}
