use std::fs;
use std::path::{Path, PathBuf};

use ndarray::{s, Array2, Array3, Array4, ArrayView2, Axis};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::SampleConfig;
use crate::consts::{COLOR_CHANNEL_COUNT, PARALLEL_SAMPLE_THRESHOLD};
use crate::error::{PosemapError, Result};
use crate::heatmap::{center_map, label_map};
use crate::io::image_io::load_rgb_tensor;
use crate::labels::FrameLabels;
use crate::record::{BoundingBox, VideoRecord};
use crate::sampler::{sample_window, FrameWindow};

/// One training sample: a frame window with its supervision targets.
#[derive(Clone, Debug)]
pub struct Sample {
    /// Frames of the window, shape `(seq_len, 3, height, width)`, values in [0.0, 1.0].
    pub images: Array4<f32>,
    /// Shape `(seq_len, label_channels, label_size, label_size)`; last channel is background.
    pub label_map: Array4<f32>,
    /// Shape `(1, boxsize, boxsize)`.
    pub center_map: Array3<f32>,
    /// Joint labels per frame after neck synthesis and masking.
    pub labels: Vec<FrameLabels>,
    /// Bounding box per frame, where the record has one.
    pub bboxes: Vec<Option<BoundingBox>>,
    pub window: FrameWindow,
}

impl Sample {
    pub fn seq_len(&self) -> usize {
        self.images.len_of(Axis(0))
    }

    /// Per-cell maximum over the joint channels of window frame `k`, indexed `[x, y]`.
    pub fn joint_max(&self, k: usize) -> Array2<f32> {
        let channels = self.label_map.len_of(Axis(1));
        self.label_map
            .slice(s![k, ..channels.saturating_sub(1), .., ..])
            .fold_axis(Axis(0), 0.0f32, |&acc, &v| acc.max(v))
    }

    /// Background channel of window frame `k`.
    pub fn background(&self, k: usize) -> ArrayView2<'_, f32> {
        let last = self.label_map.len_of(Axis(1)) - 1;
        self.label_map.slice(s![k, last, .., ..])
    }

    pub fn center(&self) -> ArrayView2<'_, f32> {
        self.center_map.index_axis(Axis(0), 0)
    }

    /// The `(images, label_map, center_map)` triple a model consumes.
    pub fn into_triple(self) -> (Array4<f32>, Array4<f32>, Array3<f32>) {
        (self.images, self.label_map, self.center_map)
    }
}

/// Index over the per-video records of one split (`train/` or `test/`).
pub struct PoseDataset {
    records: Vec<PathBuf>,
    config: SampleConfig,
    center: Array2<f32>,
}

impl PoseDataset {
    /// Index the split under `root` selected by `config.train`.
    pub fn open(root: &Path, config: SampleConfig) -> Result<Self> {
        config.validate()?;
        let split = root.join(config.split_dir());

        let mut records = Vec::new();
        for entry in fs::read_dir(&split)? {
            let path = entry?.path();
            if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("json") {
                records.push(path);
            }
        }
        records.sort();

        info!(
            split = %split.display(),
            videos = records.len(),
            train = config.train,
            "Indexed pose dataset"
        );

        let center = center_map(config.boxsize, config.center_sigma);
        Ok(Self {
            records,
            config,
            center,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn config(&self) -> &SampleConfig {
        &self.config
    }

    pub fn record_path(&self, index: usize) -> Result<&Path> {
        self.records
            .get(index)
            .map(PathBuf::as_path)
            .ok_or(PosemapError::IndexOutOfRange {
                index,
                total: self.records.len(),
            })
    }

    /// Load and shape-check the record at `index`.
    pub fn load_record(&self, index: usize) -> Result<VideoRecord> {
        let record = VideoRecord::load(self.record_path(index)?)?;
        record.validate(self.config.raw_joint_count)?;
        Ok(record)
    }

    /// Produce the sample for video `index` with a thread-local RNG.
    pub fn get(&self, index: usize) -> Result<Sample> {
        self.get_with_rng(index, &mut rand::thread_rng())
    }

    /// Produce the sample for video `index`, drawing the window from `rng`.
    pub fn get_with_rng<R: Rng>(&self, index: usize, rng: &mut R) -> Result<Sample> {
        let record = self.load_record(index)?;
        let window = sample_window(record.frame_count, self.config.seq_len, rng)?;
        debug!(index, start = window.start, frames = window.len, "Sampling window");
        self.encode(&record, window)
    }

    /// Produce samples for `indices` on the rayon pool.
    ///
    /// Each sample draws from its own RNG seeded by `seed` and its index, so the
    /// output does not depend on scheduling. The first error aborts the batch.
    pub fn load_batch(&self, indices: &[usize], seed: u64) -> Result<Vec<Sample>> {
        let produce = |&index: &usize| {
            let mut rng = StdRng::seed_from_u64(sample_seed(seed, index));
            self.get_with_rng(index, &mut rng)
        };

        if indices.len() >= PARALLEL_SAMPLE_THRESHOLD {
            indices.par_iter().map(produce).collect()
        } else {
            indices.iter().map(produce).collect()
        }
    }

    /// Encode a fixed window of `record`: load frames, build labels and maps.
    pub fn encode(&self, record: &VideoRecord, window: FrameWindow) -> Result<Sample> {
        if window.start + window.len > record.frame_count {
            return Err(PosemapError::InvalidRecord(format!(
                "window {:?} exceeds {} frames",
                window.frames(),
                record.frame_count
            )));
        }

        let images = load_window_images(record, window)?;

        let labels = window
            .frames()
            .map(|f| FrameLabels::from_record(record, f, self.config.train))
            .collect::<Result<Vec<_>>>()?;
        let bboxes = window.frames().map(|f| record.bbox_at(f)).collect();

        let label_map = label_map(&labels, &self.config);
        let center_map = self.center.clone().insert_axis(Axis(0));

        Ok(Sample {
            images,
            label_map,
            center_map,
            labels,
            bboxes,
            window,
        })
    }
}

/// Per-sample seed; the multiplier spreads consecutive indices over the seed space.
fn sample_seed(seed: u64, index: usize) -> u64 {
    seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

fn load_window_images(record: &VideoRecord, window: FrameWindow) -> Result<Array4<f32>> {
    let (h, w) = (record.height(), record.width());
    let mut images = Array4::<f32>::zeros((window.len, COLOR_CHANNEL_COUNT, h, w));

    for (i, f) in window.frames().enumerate() {
        let path = record.frame_path(f);
        let frame = load_rgb_tensor(&path)?;
        let (_, fh, fw) = frame.dim();
        if (fh, fw) != (h, w) {
            return Err(PosemapError::FrameDimensions {
                path,
                width: w,
                height: h,
                actual_width: fw,
                actual_height: fh,
            });
        }
        images.index_axis_mut(Axis(0), i).assign(&frame);
    }

    Ok(images)
}
