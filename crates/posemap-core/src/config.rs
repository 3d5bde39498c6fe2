use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BOXSIZE, DEFAULT_CENTER_SIGMA, DEFAULT_JOINT_SIGMA, DEFAULT_LABEL_STRIDE,
    DEFAULT_RAW_JOINT_COUNT, DEFAULT_SEQ_LEN, RIGHT_SHOULDER_JOINT,
};
use crate::error::{PosemapError, Result};

/// Immutable parameters shared by every sample a dataset produces.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    /// Side length of the network input and of the center map.
    pub boxsize: usize,
    /// Downsampling factor from `boxsize` to the label grid.
    pub label_stride: usize,
    /// Gaussian sigma for joint label maps.
    pub joint_sigma: f32,
    /// Gaussian sigma for the center map.
    pub center_sigma: f32,
    /// Consecutive frames per sample.
    pub seq_len: usize,
    /// Joints annotated per frame in the records.
    pub raw_joint_count: usize,
    /// Training mode: reads the `train/` split and synthesizes the neck joint.
    pub train: bool,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            boxsize: DEFAULT_BOXSIZE,
            label_stride: DEFAULT_LABEL_STRIDE,
            joint_sigma: DEFAULT_JOINT_SIGMA,
            center_sigma: DEFAULT_CENTER_SIGMA,
            seq_len: DEFAULT_SEQ_LEN,
            raw_joint_count: DEFAULT_RAW_JOINT_COUNT,
            train: true,
        }
    }
}

impl SampleConfig {
    /// Default configuration for the evaluation split.
    pub fn eval() -> Self {
        Self {
            train: false,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.label_stride == 0 {
            return Err(PosemapError::InvalidConfig(
                "label_stride must be positive".into(),
            ));
        }
        if self.boxsize < self.label_stride {
            return Err(PosemapError::InvalidConfig(format!(
                "boxsize {} is smaller than label_stride {}",
                self.boxsize, self.label_stride
            )));
        }
        if self.seq_len == 0 {
            return Err(PosemapError::InvalidConfig("seq_len must be positive".into()));
        }
        if self.raw_joint_count <= RIGHT_SHOULDER_JOINT {
            return Err(PosemapError::InvalidConfig(format!(
                "raw_joint_count {} leaves no room for head and shoulders",
                self.raw_joint_count
            )));
        }
        if !(self.joint_sigma > 0.0) || !(self.center_sigma > 0.0) {
            return Err(PosemapError::InvalidConfig(
                "Gaussian sigmas must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Side length of the label grid (`boxsize / label_stride`).
    pub fn label_size(&self) -> usize {
        self.boxsize / self.label_stride
    }

    /// Joint slots per frame, including the neck in training mode.
    pub fn joint_count(&self) -> usize {
        if self.train {
            self.raw_joint_count + 1
        } else {
            self.raw_joint_count
        }
    }

    /// Channels in the label map: one per raw joint plus background.
    pub fn label_channels(&self) -> usize {
        self.raw_joint_count + 1
    }

    /// Name of the split directory this configuration reads.
    pub fn split_dir(&self) -> &'static str {
        if self.train {
            "train"
        } else {
            "test"
        }
    }
}
