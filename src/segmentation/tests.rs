use super::*;
use crate::types::{Frame, Landmark, LandmarkName};

const TORSO_BASE: [(f64, f64); 4] = [(0.40, 0.30), (0.60, 0.30), (0.42, 0.60), (0.58, 0.60)];

/// Frame with the torso shifted by `dx` and both wrists at `wrist` (if any).
fn frame(index: usize, dx: f64, wrist: Option<(f64, f64)>) -> Frame {
    let mut f = Frame::new(index);
    for (name, (x, y)) in LandmarkName::TORSO.iter().zip(TORSO_BASE) {
        f = f.with_landmark(*name, Landmark::at(x + dx, y));
    }
    let (lw, rw) = match wrist {
        Some((x, y)) => (Landmark::at(x, y), Landmark::at(x, y)),
        None => (Landmark::missing(), Landmark::missing()),
    };
    f.with_landmark(LandmarkName::LeftWrist, lw)
        .with_landmark(LandmarkName::RightWrist, rw)
}

fn sequence_from_offsets(offsets: &[f64]) -> PoseSequence {
    offsets
        .iter()
        .enumerate()
        .map(|(i, dx)| frame(i, *dx, Some((0.5, 0.6))))
        .collect::<Vec<_>>()
        .into()
}

#[test]
fn still_sequence_addresses_first_frame() {
    let params = SegmenterParams::default();
    let short = sequence_from_offsets(&[0.0; 3]);
    assert_eq!(detect_address(&short, &params).frame, Some(0));

    let long = sequence_from_offsets(&[0.0; 12]);
    let det = detect_address(&long, &params);
    assert_eq!(det.frame, Some(0));
    assert_eq!(det.pose_vectors, 12);
    assert_eq!(det.longest_still_run, 12);
}

#[test]
fn constant_motion_has_no_address() {
    let offsets: Vec<f64> = (0..10).map(|i| i as f64 * 0.01).collect();
    let seq = sequence_from_offsets(&offsets);
    let det = detect_address(&seq, &SegmenterParams::default());
    assert_eq!(det.frame, None);
    assert_eq!(det.longest_still_run, 1);
}

#[test]
fn missing_torso_has_no_address() {
    let seq: PoseSequence = (0..6)
        .map(|i| {
            frame(i, 0.0, None)
                .with_landmark(LandmarkName::LeftHip, Landmark::new(0.4, 0.6, false))
        })
        .collect::<Vec<_>>()
        .into();
    let det = detect_address(&seq, &SegmenterParams::default());
    assert_eq!(det.frame, None);
    assert_eq!(det.pose_vectors, 0);
}

#[test]
fn address_is_first_frame_of_still_run() {
    // Moving for frames 0..=5, still from frame 5 onward.
    let offsets: Vec<f64> = (0..10).map(|i| i.min(5) as f64 * 0.01).collect();
    let seq = sequence_from_offsets(&offsets);
    assert_eq!(
        detect_address(&seq, &SegmenterParams::default()).frame,
        Some(5)
    );
}

#[test]
fn movement_at_threshold_is_not_still() {
    // Each of the four torso landmarks moves 0.0015 in x: norm = 0.003.
    let offsets: Vec<f64> = (0..6).map(|i| i as f64 * 0.0015).collect();
    let seq = sequence_from_offsets(&offsets);
    let params = SegmenterParams {
        movement_threshold: 0.0031,
        ..Default::default()
    };
    assert_eq!(detect_address(&seq, &params).frame, Some(0));
    let strict = SegmenterParams {
        movement_threshold: 0.0029,
        ..Default::default()
    };
    assert_eq!(detect_address(&seq, &strict).frame, None);
}

#[test]
fn window_counts_still_frames_not_movements() {
    // Frames 3..=5 are still: three frames, two sub-threshold movements.
    let seq = sequence_from_offsets(&[0.0, 0.01, 0.02, 0.03, 0.03, 0.03, 0.04, 0.05]);
    let det = detect_address(&seq, &SegmenterParams::default());
    assert_eq!(det.frame, Some(3));
    assert_eq!(det.longest_still_run, 3);
}

#[test]
fn invalid_frame_breaks_still_run() {
    let mut frames: Vec<Frame> = (0..6).map(|i| frame(i, 0.0, Some((0.5, 0.6)))).collect();
    frames[2] = frames[2]
        .clone()
        .with_landmark(LandmarkName::RightShoulder, Landmark::missing());
    let seq = PoseSequence::new(frames);
    assert_eq!(
        detect_address(&seq, &SegmenterParams::default()).frame,
        Some(3)
    );
}

#[test]
fn backswing_takes_largest_mean_wrist_y_and_first_on_ties() {
    let wrists = [0.5, 0.7, 0.9, 0.6, 0.9, 0.4];
    let seq: PoseSequence = wrists
        .iter()
        .enumerate()
        .map(|(i, y)| frame(i, 0.0, Some((0.5, *y))))
        .collect::<Vec<_>>()
        .into();
    let det = detect_backswing(&seq);
    assert_eq!(det.frame, Some(2));
    assert_eq!(det.wrist_frames, 6);
    assert_eq!(det.mean_wrist_y, Some(0.9));
}

#[test]
fn backswing_skips_frames_without_both_wrists() {
    let mut frames = vec![
        frame(0, 0.0, Some((0.5, 0.3))),
        frame(1, 0.0, Some((0.5, 0.95))),
        frame(2, 0.0, Some((0.5, 0.5))),
    ];
    frames[1] = frames[1]
        .clone()
        .with_landmark(LandmarkName::LeftWrist, Landmark::new(0.5, 0.95, false));
    let det = detect_backswing(&PoseSequence::new(frames));
    assert_eq!(det.frame, Some(2));
    assert_eq!(det.wrist_frames, 2);

    let no_wrists: PoseSequence = vec![frame(0, 0.0, None), frame(1, 0.0, None)].into();
    assert_eq!(detect_backswing(&no_wrists).frame, None);
}

fn swing_sequence() -> PoseSequence {
    let wrists = [
        (0.5, 0.6),
        (0.5, 0.6),
        (0.5, 0.6),
        (0.5, 0.9),
        (0.5, 0.8),
        (0.5, 0.7),
        (0.5, 0.6),
        (0.5, 0.5),
    ];
    wrists
        .iter()
        .enumerate()
        .map(|(i, w)| frame(i, 0.0, Some(*w)))
        .collect::<Vec<_>>()
        .into()
}

#[test]
fn impact_is_nearest_return_after_backswing() {
    let details = PhaseSegmenter::default().segment_detailed(&swing_sequence());
    let segments = details.segments();
    assert_eq!(segments.address, Some(0));
    assert_eq!(segments.backswing, Some(3));
    assert_eq!(segments.impact, Some(6));
    assert!(!details.impact.fell_back);
    assert_eq!(details.impact.min_delta, Some(0.0));
    assert_eq!(details.impact.scanned, 5);
}

#[test]
fn impact_ties_keep_earliest_frame() {
    let mut frames = swing_sequence().frames().to_vec();
    frames[7] = frame(7, 0.0, Some((0.5, 0.6)));
    let seq = PoseSequence::new(frames);
    assert_eq!(segment(&seq).impact, Some(6));
}

#[test]
fn impact_skips_frames_without_both_wrists() {
    // Frame 6 is the exact return; without wrists the nearest is frame 7
    // (|0.7071 - 0.7810| beats frame 5's |0.8602 - 0.7810|).
    let mut frames = swing_sequence().frames().to_vec();
    frames[6] = frame(6, 0.0, None);
    let details = PhaseSegmenter::default().segment_detailed(&PoseSequence::new(frames));
    assert_eq!(details.segments().backswing, Some(3));
    assert_eq!(details.impact.frame, Some(7));
    assert_eq!(details.impact.scanned, 4);
    assert!(!details.impact.fell_back);
}

#[test]
fn address_without_wrists_falls_back_to_address() {
    let mut frames = swing_sequence().frames().to_vec();
    frames[0] = frame(0, 0.0, None);
    let details = PhaseSegmenter::default().segment_detailed(&PoseSequence::new(frames));
    let segments = details.segments();
    assert_eq!(segments.address, Some(0));
    assert_eq!(segments.backswing, Some(3));
    assert_eq!(segments.impact, Some(0));
    assert!(details.impact.fell_back);
    assert_eq!(details.impact.reference_hands, None);
    assert_eq!(details.impact.scanned, 0);
}

#[test]
fn unresolved_address_never_reads_last_frame() {
    // Torso never settles; the last frame's hands match the first frame's.
    let seq: PoseSequence = (0..8)
        .map(|i| {
            let y = if i == 3 { 0.9 } else { 0.6 };
            frame(i, i as f64 * 0.05, Some((0.5, y)))
        })
        .collect::<Vec<_>>()
        .into();
    let details = PhaseSegmenter::default().segment_detailed(&seq);
    assert_eq!(details.address.frame, None);
    assert_eq!(details.backswing.frame, Some(3));
    assert_eq!(details.impact.frame, None);
    assert!(details.impact.fell_back);
    assert_eq!(details.impact.reference_hands, None);
}

#[test]
fn missing_backswing_falls_back_to_address() {
    let seq: PoseSequence = (0..5).map(|i| frame(i, 0.0, None)).collect::<Vec<_>>().into();
    let segments = segment(&seq);
    assert_eq!(segments.address, Some(0));
    assert_eq!(segments.backswing, None);
    assert_eq!(segments.impact, Some(0));
}

#[test]
fn empty_sequence_resolves_nothing() {
    let segments = segment(&PoseSequence::default());
    assert_eq!(segments, SwingSegments::default());
    assert_eq!(segments.to_raw(), [-1, -1, -1]);
}
