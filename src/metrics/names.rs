use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of swing metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricName {
    #[serde(rename = "shoulder_rotation_range_deg_backswing")]
    ShoulderRotationBackswing,
    #[serde(rename = "shoulder_rotation_range_deg")]
    ShoulderRotationRange,
    #[serde(rename = "hip_rotation_range_deg_backswing")]
    HipRotationBackswing,
    #[serde(rename = "hip_rotation_range_deg")]
    HipRotationRange,
    #[serde(rename = "spine_tilt_mean_deg")]
    SpineTiltMean,
    #[serde(rename = "spine_tilt_range_deg")]
    SpineTiltRange,
    HeadMovementX,
    HeadMovementY,
}

impl MetricName {
    pub const ALL: [MetricName; 8] = [
        MetricName::ShoulderRotationBackswing,
        MetricName::ShoulderRotationRange,
        MetricName::HipRotationBackswing,
        MetricName::HipRotationRange,
        MetricName::SpineTiltMean,
        MetricName::SpineTiltRange,
        MetricName::HeadMovementX,
        MetricName::HeadMovementY,
    ];

    /// Stable key used in serialized reports.
    pub fn key(self) -> &'static str {
        match self {
            MetricName::ShoulderRotationBackswing => "shoulder_rotation_range_deg_backswing",
            MetricName::ShoulderRotationRange => "shoulder_rotation_range_deg",
            MetricName::HipRotationBackswing => "hip_rotation_range_deg_backswing",
            MetricName::HipRotationRange => "hip_rotation_range_deg",
            MetricName::SpineTiltMean => "spine_tilt_mean_deg",
            MetricName::SpineTiltRange => "spine_tilt_range_deg",
            MetricName::HeadMovementX => "head_movement_x",
            MetricName::HeadMovementY => "head_movement_y",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            MetricName::ShoulderRotationBackswing => "Shoulder rotation backswing",
            MetricName::ShoulderRotationRange => "Shoulder rotation range",
            MetricName::HipRotationBackswing => "Hip rotation backswing",
            MetricName::HipRotationRange => "Hip rotation range",
            MetricName::SpineTiltMean => "Spine tilt (mean)",
            MetricName::SpineTiltRange => "Spine tilt (range)",
            MetricName::HeadMovementX => "Head movement (X)",
            MetricName::HeadMovementY => "Head movement (Y)",
        }
    }

    /// Suffix appended after the formatted value.
    pub fn unit(self) -> &'static str {
        match self {
            MetricName::HeadMovementX => "% (lateral)",
            MetricName::HeadMovementY => "% (vertical)",
            _ => "°",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// All eight swing metrics. Every field is always populated and finite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub shoulder_rotation_range_deg_backswing: f64,
    pub shoulder_rotation_range_deg: f64,
    pub hip_rotation_range_deg_backswing: f64,
    pub hip_rotation_range_deg: f64,
    pub spine_tilt_mean_deg: f64,
    pub spine_tilt_range_deg: f64,
    pub head_movement_x: f64,
    pub head_movement_y: f64,
}

impl Metrics {
    pub fn get(&self, name: MetricName) -> f64 {
        match name {
            MetricName::ShoulderRotationBackswing => self.shoulder_rotation_range_deg_backswing,
            MetricName::ShoulderRotationRange => self.shoulder_rotation_range_deg,
            MetricName::HipRotationBackswing => self.hip_rotation_range_deg_backswing,
            MetricName::HipRotationRange => self.hip_rotation_range_deg,
            MetricName::SpineTiltMean => self.spine_tilt_mean_deg,
            MetricName::SpineTiltRange => self.spine_tilt_range_deg,
            MetricName::HeadMovementX => self.head_movement_x,
            MetricName::HeadMovementY => self.head_movement_y,
        }
    }

    fn get_mut(&mut self, name: MetricName) -> &mut f64 {
        match name {
            MetricName::ShoulderRotationBackswing => &mut self.shoulder_rotation_range_deg_backswing,
            MetricName::ShoulderRotationRange => &mut self.shoulder_rotation_range_deg,
            MetricName::HipRotationBackswing => &mut self.hip_rotation_range_deg_backswing,
            MetricName::HipRotationRange => &mut self.hip_rotation_range_deg,
            MetricName::SpineTiltMean => &mut self.spine_tilt_mean_deg,
            MetricName::SpineTiltRange => &mut self.spine_tilt_range_deg,
            MetricName::HeadMovementX => &mut self.head_movement_x,
            MetricName::HeadMovementY => &mut self.head_movement_y,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (MetricName, f64)> + '_ {
        MetricName::ALL
            .into_iter()
            .map(move |name| (name, self.get(name)))
    }

    /// Replaces non-finite values by 0.0, returning the affected metrics.
    pub fn sanitize(&mut self) -> Vec<MetricName> {
        let mut replaced = Vec::new();
        for name in MetricName::ALL {
            let value = self.get_mut(name);
            if !value.is_finite() {
                *value = 0.0;
                replaced.push(name);
            }
        }
        replaced
    }

    /// `- Label : 12.34°` lines in [`MetricName::ALL`] order.
    pub fn summary_lines(&self) -> Vec<String> {
        let width = MetricName::ALL
            .iter()
            .map(|n| n.label().chars().count())
            .max()
            .unwrap_or(0);
        self.iter()
            .map(|(name, value)| {
                format!(
                    "- {:<width$} : {:.2}{}",
                    name.label(),
                    value,
                    name.unit(),
                    width = width
                )
            })
            .collect()
    }
}
