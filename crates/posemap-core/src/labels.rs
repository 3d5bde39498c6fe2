use crate::consts::{HEAD_JOINT, LEFT_SHOULDER_JOINT, OFF_PLANE_EPSILON, RIGHT_SHOULDER_JOINT};
use crate::error::{PosemapError, Result};
use crate::record::VideoRecord;

/// Tri-state joint visibility flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Not annotated, or outside the image plane. No label map is rendered.
    Absent,
    /// Present but occluded.
    Occluded,
    Visible,
}

impl Visibility {
    /// Interpret a raw annotation flag: negative is absent, zero occluded,
    /// positive visible.
    pub fn from_flag(flag: i32) -> Self {
        match flag {
            f if f < 0 => Self::Absent,
            0 => Self::Occluded,
            _ => Self::Visible,
        }
    }

    pub fn flag(self) -> i32 {
        match self {
            Self::Absent => -1,
            Self::Occluded => 0,
            Self::Visible => 1,
        }
    }

    /// Whether a Gaussian should be rendered for this joint.
    pub fn is_labeled(self) -> bool {
        self != Self::Absent
    }
}

/// One joint annotation in one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointLabel {
    pub x: f32,
    pub y: f32,
    pub visibility: Visibility,
}

impl JointLabel {
    pub fn new(x: f32, y: f32, visibility: Visibility) -> Self {
        Self { x, y, visibility }
    }

    /// Same joint with visibility forced to `Absent` if it lies off the
    /// `width × height` image plane.
    pub fn masked(self, width: f64, height: f64) -> Self {
        if is_off_plane(self.x.into(), self.y.into(), width, height) {
            Self {
                visibility: Visibility::Absent,
                ..self
            }
        } else {
            self
        }
    }
}

/// Whether `(x, y)` falls outside `[ε, width] × [ε, height]`.
pub fn is_off_plane(x: f64, y: f64, width: f64, height: f64) -> bool {
    x < OFF_PLANE_EPSILON || y < OFF_PLANE_EPSILON || x > width || y > height
}

/// Annotated position at record precision, before masking and narrowing.
#[derive(Clone, Copy)]
struct RawJoint {
    x: f64,
    y: f64,
    visibility: Visibility,
}

impl RawJoint {
    fn neck(head: Self, left: Self, right: Self) -> Self {
        let sum = head.visibility.flag() + left.visibility.flag() + right.visibility.flag();
        Self {
            x: 0.5 * head.x + 0.25 * (left.x + right.x),
            y: 0.5 * head.y + 0.25 * (left.y + right.y),
            visibility: Visibility::from_flag(sum.div_euclid(3)),
        }
    }

    fn into_label(self, width: f64, height: f64) -> JointLabel {
        let visibility = if is_off_plane(self.x, self.y, width, height) {
            Visibility::Absent
        } else {
            self.visibility
        };
        JointLabel::new(self.x as f32, self.y as f32, visibility)
    }
}

impl From<JointLabel> for RawJoint {
    fn from(j: JointLabel) -> Self {
        Self {
            x: j.x.into(),
            y: j.y.into(),
            visibility: j.visibility,
        }
    }
}

/// Interpolate the neck from the head and both shoulders.
///
/// Position is `0.5·head + 0.25·(left + right)`. The neck is visible only if
/// all three are: its flag is the floor of their mean.
pub fn synthesize_neck(head: JointLabel, left: JointLabel, right: JointLabel) -> JointLabel {
    let neck = RawJoint::neck(head.into(), left.into(), right.into());
    JointLabel::new(neck.x as f32, neck.y as f32, neck.visibility)
}

/// Joint annotations of a single frame after neck synthesis and masking.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameLabels {
    pub frame_index: usize,
    pub joints: Vec<JointLabel>,
}

impl FrameLabels {
    /// Build the labels of `frame` from a record.
    ///
    /// With `with_neck` a synthesized neck is appended after the raw joints.
    /// Every joint is then masked against the record's frame dimensions.
    pub fn from_record(record: &VideoRecord, frame: usize, with_neck: bool) -> Result<Self> {
        let (xs, ys, vis) = match (
            record.x.get(frame),
            record.y.get(frame),
            record.visibility.get(frame),
        ) {
            (Some(x), Some(y), Some(v)) => (x, y, v),
            _ => {
                return Err(PosemapError::InvalidRecord(format!(
                    "no annotation for frame {frame}"
                )))
            }
        };

        let mut joints: Vec<RawJoint> = xs
            .iter()
            .zip(ys)
            .zip(vis)
            .map(|((&x, &y), &v)| RawJoint {
                x,
                y,
                visibility: Visibility::from_flag(v),
            })
            .collect();

        if with_neck {
            if joints.len() <= RIGHT_SHOULDER_JOINT {
                return Err(PosemapError::InvalidRecord(format!(
                    "frame {frame} has {} joints, neck needs head and both shoulders",
                    joints.len()
                )));
            }
            let neck = RawJoint::neck(
                joints[HEAD_JOINT],
                joints[LEFT_SHOULDER_JOINT],
                joints[RIGHT_SHOULDER_JOINT],
            );
            joints.push(neck);
        }

        // Masking runs on record precision; labels are narrowed afterwards.
        let (w, h) = (record.width() as f64, record.height() as f64);
        let joints = joints.into_iter().map(|j| j.into_label(w, h)).collect();

        Ok(Self {
            frame_index: frame,
            joints,
        })
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.joints
            .iter()
            .filter(|j| j.visibility == Visibility::Visible)
            .count()
    }
}
