/// Side length of the square network input, in pixels.
pub const DEFAULT_BOXSIZE: usize = 368;

/// Downsampling factor between the network input and the label maps.
pub const DEFAULT_LABEL_STRIDE: usize = 8;

/// Gaussian sigma for per-joint label maps (label-grid units).
pub const DEFAULT_JOINT_SIGMA: f32 = 7.0;

/// Gaussian sigma for the center map (box-size units).
pub const DEFAULT_CENTER_SIGMA: f32 = 21.0;

/// Number of consecutive frames per sample.
pub const DEFAULT_SEQ_LEN: usize = 5;

/// Joints annotated per frame in the source records.
pub const DEFAULT_RAW_JOINT_COUNT: usize = 12;

/// Annotation column of the head joint.
pub const HEAD_JOINT: usize = 0;

/// Annotation column of the left shoulder.
pub const LEFT_SHOULDER_JOINT: usize = 1;

/// Annotation column of the right shoulder.
pub const RIGHT_SHOULDER_JOINT: usize = 2;

/// Coordinates below this on either axis count as "not on the image plane".
pub const OFF_PLANE_EPSILON: f64 = 0.001;

/// Number of channels in a decoded frame tensor (R, G, B).
pub const COLOR_CHANNEL_COUNT: usize = 3;

/// Minimum batch size before samples are produced on the rayon pool.
pub const PARALLEL_SAMPLE_THRESHOLD: usize = 2;
