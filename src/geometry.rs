//! Geometric helpers shared by the segmentation and metrics stages.

use crate::types::{Frame, LandmarkName};
use nalgebra::{SVector, Vector2};

/// Concatenated `(x, y)` of the torso landmarks, see [`LandmarkName::TORSO`].
pub type PoseVector = SVector<f64, 8>;

/// Builds the torso pose vector, or `None` unless all four landmarks are valid.
pub fn pose_vector(frame: &Frame) -> Option<PoseVector> {
    let mut v = PoseVector::zeros();
    for (slot, name) in LandmarkName::TORSO.iter().enumerate() {
        let p = frame.point(*name)?;
        v[2 * slot] = p.x;
        v[2 * slot + 1] = p.y;
    }
    Some(v)
}

/// Mean of the two wrists' vertical coordinates.
#[inline]
pub fn mean_wrist_y(frame: &Frame) -> Option<f64> {
    let left = frame.point(LandmarkName::LeftWrist)?;
    let right = frame.point(LandmarkName::RightWrist)?;
    Some((left.y + right.y) / 2.0)
}

/// Mean distance of both wrists from the image origin.
#[inline]
pub fn hands_position(frame: &Frame) -> Option<f64> {
    let left = frame.point(LandmarkName::LeftWrist)?;
    let right = frame.point(LandmarkName::RightWrist)?;
    Some((left.norm() + right.norm()) / 2.0)
}

/// Orientation in degrees of the segment `left → right`.
///
/// Returns 0.0 when either landmark is invalid; the frame still counts as a
/// sample in the caller's aggregate.
pub fn rotation_deg(frame: &Frame, left: LandmarkName, right: LandmarkName) -> f64 {
    match (frame.point(left), frame.point(right)) {
        (Some(l), Some(r)) => {
            let d = r - l;
            d.y.atan2(d.x).to_degrees()
        }
        _ => 0.0,
    }
}

/// Tilt in degrees of the hip-midpoint → shoulder-midpoint axis.
///
/// Computed as `atan2(dx, dy)`, so an upright torso (shoulders straight above
/// hips) reads ±180° and a horizontal one reads ±90°. 0.0 unless all four
/// torso landmarks are valid.
pub fn spine_tilt_deg(frame: &Frame) -> f64 {
    let [ls, rs, lh, rh] = LandmarkName::TORSO;
    let points = (
        frame.point(ls),
        frame.point(rs),
        frame.point(lh),
        frame.point(rh),
    );
    match points {
        (Some(ls), Some(rs), Some(lh), Some(rh)) => {
            let d: Vector2<f64> = midpoint(&ls, &rs) - midpoint(&lh, &rh);
            d.x.atan2(d.y).to_degrees()
        }
        _ => 0.0,
    }
}

#[inline]
fn midpoint(a: &Vector2<f64>, b: &Vector2<f64>) -> Vector2<f64> {
    (a + b) * 0.5
}

/// Arithmetic mean, 0.0 for no samples.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Maximum minus minimum, 0.0 for no samples.
pub fn peak_to_peak(samples: &[f64]) -> f64 {
    let mut iter = samples.iter().copied();
    let Some(first) = iter.next() else {
        return 0.0;
    };
    let (lo, hi) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    hi - lo
}
