use swing_coach::{Frame, Landmark, LandmarkName, PoseSequence};

/// Frames the synthetic golfer shuffles before settling at address.
pub const ADDRESS_FRAME: usize = 5;
/// Frame with the largest mean wrist `y`.
pub const BACKSWING_FRAME: usize = 15;
/// First frame after the backswing where the hands return to address height.
pub const IMPACT_FRAME: usize = 21;
pub const SWING_FRAMES: usize = 30;

/// Mean wrist `y` of the synthetic swing at frame `i`.
pub fn wrist_y(i: usize) -> f64 {
    match i {
        0..=9 => 0.60,
        10..=15 => 0.60 + 0.05 * (i - 9) as f64,
        16..=21 => 0.90 - 0.05 * (i - 15) as f64,
        _ => 0.60 - 0.05 * (i - 21) as f64,
    }
}

/// Vertical offset of the right shoulder, a crude stand-in for turn.
fn shoulder_turn(i: usize) -> f64 {
    match i {
        0..=9 => 0.0,
        10..=15 => 0.02 * (i - 9) as f64,
        16..=21 => 0.12 - 0.02 * (i - 15) as f64,
        _ => -0.03,
    }
}

pub fn swing_frame(i: usize) -> Frame {
    let dx = i.min(ADDRESS_FRAME) as f64 * 0.02;
    let turn = shoulder_turn(i);
    let y = wrist_y(i);
    Frame::new(i)
        .with_landmark(LandmarkName::Nose, Landmark::at(0.50 + dx + 0.001 * i as f64, 0.20))
        .with_landmark(LandmarkName::LeftShoulder, Landmark::at(0.40 + dx, 0.30))
        .with_landmark(LandmarkName::RightShoulder, Landmark::at(0.60 + dx, 0.30 + turn))
        .with_landmark(LandmarkName::LeftHip, Landmark::at(0.42 + dx, 0.60))
        .with_landmark(LandmarkName::RightHip, Landmark::at(0.58 + dx, 0.60 + turn / 2.0))
        .with_landmark(LandmarkName::LeftWrist, Landmark::at(0.48, y))
        .with_landmark(LandmarkName::RightWrist, Landmark::at(0.52, y))
}

/// A full synthetic swing with known key frames.
pub fn synthetic_swing() -> PoseSequence {
    (0..SWING_FRAMES).map(swing_frame).collect::<Vec<_>>().into()
}

/// `n` frames of a golfer who never moves.
pub fn still_golfer(n: usize) -> PoseSequence {
    (0..n)
        .map(|i| {
            let mut f = swing_frame(ADDRESS_FRAME);
            f.frame_index = i;
            f
        })
        .collect::<Vec<_>>()
        .into()
}
