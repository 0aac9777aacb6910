//! Coaching prompt rendered from the swing metrics.
//!
//! The prompt is plain text meant for a language model acting as a golf
//! coach. Only the text is produced here; sending it anywhere is left to the
//! caller.

use crate::error::SwingError;
use crate::metrics::Metrics;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DELIMITER: &str = "-----";

const CONTEXT: &str = "\
**Context**
You are an experienced golf coach with additional background in biomechanics.
You use your expertise and knowledge of human movement to provide insightful, actionable feedback to golfers aiming to improve their swing technique.
Analyze the following golf swing metrics and provide feedback on the player's movement and technique.";

const TASKS: &str = "\
**Task**
1. Interpret what these values suggest about the golfer's swing mechanics.
2. Identify potential issues or inefficiencies.
3. Offer 2-3 specific, actionable coaching tips for improvement.
    - If the swing metrics and outcome indicate a successful shot, it is acceptable if fewer than 3 issues are noted.
4. Keep the tone supportive, concise, and practical.
5. Tailor your language and depth of explanation to the golfer's experience level: beginner, intermediate, or advanced.
6. Give a letter grade (A+ -> F) for the swing based on the metrics and overall analysis.";

const EXPECTED_OUTPUT: &str = r#"Return your feedback in this format:
{
    "swingAnalysis" : (summary paragraph),
    "keyObservations" : [
        (bullet 1),
        (bullet 2),
        ...
        ],
    "coachingTips" : [
        (tip 1),
        (tip 2),
        ...
        ],
    "LetterGrade" : (letter grade)
}"#;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = SwingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(ExperienceLevel::Beginner),
            "intermediate" => Ok(ExperienceLevel::Intermediate),
            "advanced" => Ok(ExperienceLevel::Advanced),
            _ => Err(SwingError::UnknownOption {
                kind: "experience level",
                value: s.to_string(),
            }),
        }
    }
}

/// Where the camera stood relative to the golfer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraAngle {
    #[default]
    #[serde(alias = "down the line")]
    DownTheLine,
    #[serde(alias = "face on")]
    FaceOn,
}

impl CameraAngle {
    pub fn as_str(self) -> &'static str {
        match self {
            CameraAngle::DownTheLine => "down the line",
            CameraAngle::FaceOn => "face on",
        }
    }
}

impl fmt::Display for CameraAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CameraAngle {
    type Err = SwingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "down the line" => Ok(CameraAngle::DownTheLine),
            "face on" => Ok(CameraAngle::FaceOn),
            _ => Err(SwingError::UnknownOption {
                kind: "camera angle",
                value: s.to_string(),
            }),
        }
    }
}

/// Golfer context that frames the metrics in the prompt.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptOptions {
    pub experience_level: ExperienceLevel,
    pub camera_angle: CameraAngle,
    /// Free-form notes from the golfer (club, shot outcome, ...).
    pub metadata: String,
}

#[derive(Clone, Debug, Default)]
pub struct PromptBuilder {
    options: PromptOptions,
}

impl PromptBuilder {
    pub fn new(options: PromptOptions) -> Self {
        Self { options }
    }

    pub fn build(&self, metrics: &Metrics) -> String {
        let sections = [
            CONTEXT.to_string(),
            self.situation(),
            self.metadata(),
            metrics_section(metrics),
            TASKS.to_string(),
            EXPECTED_OUTPUT.to_string(),
        ];
        let mut out = String::new();
        for section in sections {
            out.push_str(&section);
            out.push('\n');
            out.push_str(DELIMITER);
            out.push_str("\n\n");
        }
        out
    }

    fn situation(&self) -> String {
        format!(
            "**Situation**\nThe golfer's experience level is {}.\nThe swing video was recorded from a {} camera angle.",
            self.options.experience_level, self.options.camera_angle
        )
    }

    fn metadata(&self) -> String {
        format!("**Metadata**\n{}", self.options.metadata.trim())
    }
}

/// The `**Pose Metrics**` block on its own.
pub fn metrics_section(metrics: &Metrics) -> String {
    let mut out = String::from("**Pose Metrics**");
    for line in metrics.summary_lines() {
        out.push('\n');
        out.push_str(&line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_every_metric_and_context() {
        let metrics = Metrics {
            shoulder_rotation_range_deg: 87.5,
            head_movement_x: 0.15,
            ..Default::default()
        };
        let prompt = PromptBuilder::new(PromptOptions {
            experience_level: ExperienceLevel::Beginner,
            camera_angle: CameraAngle::FaceOn,
            metadata: "7 iron, slight slice".to_string(),
        })
        .build(&metrics);

        assert!(prompt.contains("experience level is beginner."));
        assert!(prompt.contains("from a face on camera angle"));
        assert!(prompt.contains("7 iron, slight slice"));
        assert!(prompt.contains(": 87.50°"));
        assert!(prompt.contains(": 0.15% (lateral)"));
        assert_eq!(prompt.matches("**Pose Metrics**").count(), 1);
        assert_eq!(metrics_section(&metrics).lines().count(), 9);
    }

    #[test]
    fn options_parse_from_form_values() {
        assert_eq!("Advanced".parse::<ExperienceLevel>().unwrap(), ExperienceLevel::Advanced);
        assert_eq!("down the line".parse::<CameraAngle>().unwrap(), CameraAngle::DownTheLine);
        assert_eq!("face_on".parse::<CameraAngle>().unwrap(), CameraAngle::FaceOn);
        assert!("pro".parse::<ExperienceLevel>().is_err());

        let opts: PromptOptions =
            serde_json::from_str(r#"{"camera_angle": "face on", "experience_level": "advanced"}"#)
                .unwrap();
        assert_eq!(opts.camera_angle, CameraAngle::FaceOn);
        assert_eq!(opts.experience_level, ExperienceLevel::Advanced);
        assert!(opts.metadata.is_empty());
    }
}
