//! Gaussian confidence maps.
//!
//! Joint maps are stored transposed relative to [`render_gaussian`]: a joint
//! channel is indexed `[x][y]`, while the raw Gaussian and the center map are
//! indexed `[y][x]`. Joint coordinates are used as given, in frame pixels, on
//! the label grid; they are not divided by the label stride.

use ndarray::{s, Array2, Array3, Array4, ArrayView2, ArrayView3, Axis};

use crate::config::SampleConfig;
use crate::labels::{FrameLabels, JointLabel};

/// Render `exp(-d² / 2σ²)` around `(cx, cy)` on a `height × width` grid,
/// indexed `[gy, gx]`. The value at the center is exactly 1.
pub fn render_gaussian(
    cx: f32,
    cy: f32,
    sigma: f32,
    width: usize,
    height: usize,
) -> Array2<f32> {
    let denom = 2.0 * sigma * sigma;
    Array2::from_shape_fn((height, width), |(gy, gx)| {
        let dx = gx as f32 - cx;
        let dy = gy as f32 - cy;
        (-(dx * dx + dy * dy) / denom).exp()
    })
}

/// Confidence map of one joint on a `size × size` label grid, indexed `[x, y]`.
/// Joints without a label produce an all-zero map.
pub fn joint_heatmap(joint: &JointLabel, sigma: f32, size: usize) -> Array2<f32> {
    if !joint.visibility.is_labeled() {
        return Array2::zeros((size, size));
    }
    render_gaussian(joint.x, joint.y, sigma, size, size).reversed_axes()
}

/// Background channel: `max(1 - max_c maps[c, m, n], 0)` per cell.
pub fn background_channel(joint_maps: ArrayView3<f32>) -> Array2<f32> {
    joint_maps
        .fold_axis(Axis(0), 0.0f32, |&acc, &v| acc.max(v))
        .mapv(|m| (1.0 - m).max(0.0))
}

/// All channels of one frame: `channels - 1` joint maps followed by background.
///
/// Joint channel `c` renders `labels.joints[c]`; labels beyond the joint
/// channels (the synthesized neck) are not rendered.
pub fn frame_label_map(
    labels: &FrameLabels,
    channels: usize,
    size: usize,
    sigma: f32,
) -> Array3<f32> {
    let joint_channels = channels.saturating_sub(1);
    let mut maps = Array3::<f32>::zeros((channels, size, size));

    for (c, joint) in labels.joints.iter().take(joint_channels).enumerate() {
        maps.index_axis_mut(Axis(0), c)
            .assign(&joint_heatmap(joint, sigma, size));
    }

    if channels > 0 {
        let background = background_channel(maps.slice(s![..joint_channels, .., ..]));
        maps.index_axis_mut(Axis(0), joint_channels).assign(&background);
    }
    maps
}

/// Label maps for a window, shape `(frames, label_channels, size, size)`.
pub fn label_map(frames: &[FrameLabels], config: &SampleConfig) -> Array4<f32> {
    let size = config.label_size();
    let channels = config.label_channels();
    let mut out = Array4::<f32>::zeros((frames.len(), channels, size, size));

    for (k, labels) in frames.iter().enumerate() {
        out.index_axis_mut(Axis(0), k)
            .assign(&frame_label_map(labels, channels, size, config.joint_sigma));
    }
    out
}

/// Fixed Gaussian at the middle of a `boxsize × boxsize` grid.
pub fn center_map(boxsize: usize, sigma: f32) -> Array2<f32> {
    let c = boxsize as f32 / 2.0;
    render_gaussian(c, c, sigma, boxsize, boxsize)
}

/// Position and value of the largest entry, first in row-major order on ties.
pub fn peak(map: ArrayView2<f32>) -> Option<((usize, usize), f32)> {
    map.indexed_iter()
        .fold(None, |best, (idx, &v)| match best {
            Some((_, bv)) if bv >= v => best,
            _ => Some((idx, v)),
        })
}
