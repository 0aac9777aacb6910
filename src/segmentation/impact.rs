use crate::geometry::hands_position;
use crate::types::PoseSequence;
use log::warn;
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactDetection {
    #[serde(with = "crate::types::sentinel")]
    pub frame: Option<usize>,
    /// Hands position at the address frame, if it could be measured.
    pub reference_hands: Option<f64>,
    /// `|hands - reference|` at the chosen frame.
    pub min_delta: Option<f64>,
    /// Frames in `[backswing, N-1]` that had both wrists valid.
    pub scanned: usize,
    /// True when no frame qualified and `frame` was copied from the address.
    pub fell_back: bool,
}

/// Finds the first frame at or after the backswing whose hands position is
/// closest to the one measured at address.
///
/// An unresolved address never indexes the sequence: the reference is then
/// unavailable. Whenever no candidate frame exists the result falls back to
/// `address`.
pub fn detect_impact(
    sequence: &PoseSequence,
    address: Option<usize>,
    backswing: Option<usize>,
) -> ImpactDetection {
    let mut out = ImpactDetection {
        reference_hands: sequence.get(address).and_then(hands_position),
        ..Default::default()
    };

    if let (Some(reference), Some(start)) = (out.reference_hands, backswing) {
        let mut best = f64::INFINITY;
        for (i, frame) in sequence.frames().iter().enumerate().skip(start) {
            let Some(hands) = hands_position(frame) else {
                continue;
            };
            out.scanned += 1;
            let delta = (hands - reference).abs();
            if delta < best {
                best = delta;
                out.frame = Some(i);
                out.min_delta = Some(delta);
            }
        }
    }

    if out.frame.is_none() {
        warn!(
            "impact: no candidate frame (address={:?} backswing={:?}), falling back to address",
            address, backswing
        );
        out.frame = address;
        out.fell_back = true;
    }
    out
}
