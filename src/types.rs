//! Pose data model consumed by the segmentation and metrics stages.
//!
//! Coordinates are normalized image coordinates: origin top-left, `y`
//! growing downward, nominally in `[0, 1]` but never clamped.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw sentinel used at serialization boundaries for an unresolved frame.
pub const NOT_FOUND: i64 = -1;

/// Body landmarks reported by the upstream pose model (33-point topology).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LandmarkName {
    Nose,
    LeftEyeInner,
    LeftEye,
    LeftEyeOuter,
    RightEyeInner,
    RightEye,
    RightEyeOuter,
    LeftEar,
    RightEar,
    MouthLeft,
    MouthRight,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftPinky,
    RightPinky,
    LeftIndex,
    RightIndex,
    LeftThumb,
    RightThumb,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
    LeftHeel,
    RightHeel,
    LeftFootIndex,
    RightFootIndex,
}

impl LandmarkName {
    /// Landmarks forming the torso pose vector, in concatenation order.
    pub const TORSO: [LandmarkName; 4] = [
        LandmarkName::LeftShoulder,
        LandmarkName::RightShoulder,
        LandmarkName::LeftHip,
        LandmarkName::RightHip,
    ];
}

/// One detected keypoint. Coordinates are only observable through
/// [`Landmark::position`], which hides them when the detection is invalid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    #[serde(default)]
    x: Option<f64>,
    #[serde(default)]
    y: Option<f64>,
    valid: bool,
}

impl Landmark {
    pub fn new(x: f64, y: f64, valid: bool) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            valid,
        }
    }

    /// A valid detection at `(x, y)`.
    pub fn at(x: f64, y: f64) -> Self {
        Self::new(x, y, true)
    }

    /// A landmark the pose model did not report.
    pub fn missing() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Position of a valid landmark, `None` otherwise.
    #[inline]
    pub fn position(&self) -> Option<Vector2<f64>> {
        if !self.valid {
            return None;
        }
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some(Vector2::new(x, y)),
            _ => None,
        }
    }
}

/// Landmarks estimated for a single decoded video frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub frame_index: usize,
    pub landmarks: HashMap<LandmarkName, Landmark>,
}

impl Frame {
    pub fn new(frame_index: usize) -> Self {
        Self {
            frame_index,
            landmarks: HashMap::new(),
        }
    }

    pub fn with_landmark(mut self, name: LandmarkName, landmark: Landmark) -> Self {
        self.landmarks.insert(name, landmark);
        self
    }

    pub fn landmark(&self, name: LandmarkName) -> Option<&Landmark> {
        self.landmarks.get(&name)
    }

    /// Position of `name` if it is present and valid in this frame.
    #[inline]
    pub fn point(&self, name: LandmarkName) -> Option<Vector2<f64>> {
        self.landmark(name).and_then(Landmark::position)
    }
}

/// Ordered per-frame landmark estimates for one swing video.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoseSequence {
    frames: Vec<Frame>,
}

impl PoseSequence {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Bounds-checked lookup of a resolved frame reference.
    pub fn get(&self, index: Option<usize>) -> Option<&Frame> {
        index.and_then(|i| self.frames.get(i))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }
}

impl From<Vec<Frame>> for PoseSequence {
    fn from(frames: Vec<Frame>) -> Self {
        Self::new(frames)
    }
}

impl<'a> IntoIterator for &'a PoseSequence {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

/// Key frames of the swing. `None` means the phase could not be located;
/// it serializes as [`NOT_FOUND`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwingSegments {
    #[serde(with = "sentinel")]
    pub address: Option<usize>,
    #[serde(with = "sentinel")]
    pub backswing: Option<usize>,
    #[serde(with = "sentinel")]
    pub impact: Option<usize>,
}

impl SwingSegments {
    /// Raw `[address, backswing, impact]` with [`NOT_FOUND`] for unresolved phases.
    pub fn to_raw(&self) -> [i64; 3] {
        [
            sentinel::to_raw(self.address),
            sentinel::to_raw(self.backswing),
            sentinel::to_raw(self.impact),
        ]
    }
}

/// Conversion between `Option<usize>` and the `-1` wire sentinel.
pub mod sentinel {
    use super::NOT_FOUND;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn to_raw(index: Option<usize>) -> i64 {
        index.map_or(NOT_FOUND, |i| i as i64)
    }

    /// Any negative value maps to `None`.
    pub fn from_raw(raw: i64) -> Option<usize> {
        usize::try_from(raw).ok()
    }

    pub fn serialize<S: Serializer>(index: &Option<usize>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_i64(to_raw(*index))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<usize>, D::Error> {
        i64::deserialize(d).map(from_raw)
    }
}
