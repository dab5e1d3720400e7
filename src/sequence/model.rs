use crate::foundation::error::{EdubuilderError, EdubuilderResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Animation-type tag attached to a step.
///
/// The wire form is the kebab-case tag used by authored JSON (`"fade-in"`,
/// `"slide-left"`, ...). Tags this crate does not know deserialize to
/// [`AnimationType::Custom`], which plays back with the fade profile, so
/// malformed authored content degrades instead of failing the load.
pub enum AnimationType {
    /// Fade from transparent.
    FadeIn,
    /// Slide in from the right edge.
    SlideLeft,
    /// Slide in from the left edge.
    SlideRight,
    /// Slide in from below.
    SlideUp,
    /// Slide in from above.
    SlideDown,
    /// Grow from zero scale.
    Scale,
    /// Rotate in from -180 degrees.
    Rotate,
    /// Slide up with a spring settle.
    Bounce,
    /// Fade/scale with a short reverse-repeat.
    Pulse,
    /// Progressive path draw.
    Draw,
    /// Morph placeholder; currently renders as a fade.
    Morph,
    /// Unrecognized or author-defined tag; renders as a fade.
    #[serde(other)]
    Custom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// How a step is meant to be triggered. Only `Auto` and `Click` are consumed
/// by the sequencer; the rest are accepted for authoring compatibility.
pub enum TriggerType {
    /// Advance on explicit user action.
    Click,
    /// Advance on the auto-play timer.
    Auto,
    /// Reserved: hover trigger.
    Hover,
    /// Reserved: scroll trigger.
    Scroll,
    /// Reserved: voice trigger.
    Voice,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Difficulty tier shown in the gallery.
pub enum Difficulty {
    /// Introductory material.
    Beginner,
    /// Assumes prior exposure.
    Intermediate,
    /// Assumes solid fundamentals.
    Advanced,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Kind of a positioned visual atom.
pub enum ElementKind {
    /// Glyph-like shape rendered as literal content.
    Shape,
    /// Text rendered as literal content.
    Text,
    /// Icon reference. Accepted by the model, not rendered (see
    /// [`crate::player::scene`]).
    Icon,
    /// Raster image reference. Accepted by the model, not rendered.
    Image,
    /// Vector-graphic reference. Accepted by the model, not rendered.
    Svg,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A positioned visual atom within a step. Immutable once authored.
pub struct AnimationElement {
    /// Element identifier (stable within its step).
    pub id: String,
    /// Element kind.
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// Literal content for text/shape elements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Horizontal position as a percentage of the canvas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Vertical position as a percentage of the canvas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// CSS-style color string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Opacity in `[0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Rotation in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Multiple-choice quiz embedded in a step. While present, the sequencer
/// gates advancement past the step until the correct option is chosen.
pub struct StepQuiz {
    /// Question text.
    pub question: String,
    /// Ordered option strings.
    pub options: Vec<String>,
    /// Index of the correct option.
    pub correct: usize,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One unit of a presentation: visuals, narration, and an optional quiz.
pub struct AnimationStep {
    /// Step identifier (stable within its sequence).
    pub id: String,
    /// 1-based sequence position; must match the step's place in the owning
    /// sequence's list.
    pub step: u32,
    /// Step title.
    pub title: String,
    /// Step description.
    pub description: String,
    /// Optional narration text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narration: Option<String>,
    /// Animation-type tag resolved through the transition catalog.
    pub animation_type: AnimationType,
    /// Trigger-type tag.
    pub trigger: TriggerType,
    /// Transition duration in seconds (default 1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Delay before the transition starts, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    /// Ordered visual elements.
    pub elements: Vec<AnimationElement>,
    /// Optional embedded quiz.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz: Option<StepQuiz>,
}

impl AnimationStep {
    /// Transition duration in seconds, defaulting to 1.
    pub fn duration_secs(&self) -> f64 {
        self.duration.unwrap_or(1.0)
    }
}

/// Default auto-play delay in seconds.
pub const DEFAULT_AUTO_PLAY_DELAY_SECS: f64 = 3.0;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// The top-level authored artifact: an ordered set of steps forming one
/// educational presentation.
///
/// A sequence is a pure data model: built from a template or authored JSON,
/// serialized via Serde, and treated as read-only input by the player. Its
/// serialized camelCase shape is the interchange format between the exporter
/// and any importer.
pub struct AnimationSequence {
    /// Sequence identifier.
    pub id: String,
    /// Title, also the source of export filenames.
    pub title: String,
    /// Topic label.
    pub topic: String,
    /// Optional thumbnail reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Total step count; must equal `steps.len()`.
    pub total_steps: usize,
    /// Ordered steps.
    pub steps: Vec<AnimationStep>,
    /// Whether playback should start in auto-play.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_play: Option<bool>,
    /// Auto-play delay between steps in seconds (default 3).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_play_delay: Option<f64>,
    /// Optional difficulty tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Optional free-text tags consumed by the gallery filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl AnimationSequence {
    /// Validate authoring invariants.
    ///
    /// Called when a sequence is loaded into a player so violations surface
    /// at load time rather than mid-playback.
    pub fn validate(&self) -> EdubuilderResult<()> {
        if self.id.trim().is_empty() {
            return Err(EdubuilderError::validation("sequence id must be non-empty"));
        }
        if self.title.trim().is_empty() {
            return Err(EdubuilderError::validation(
                "sequence title must be non-empty",
            ));
        }
        if self.steps.is_empty() {
            return Err(EdubuilderError::validation(
                "sequence must contain at least one step",
            ));
        }
        if self.total_steps != self.steps.len() {
            return Err(EdubuilderError::validation(format!(
                "totalSteps ({}) does not match steps.len() ({})",
                self.total_steps,
                self.steps.len()
            )));
        }
        if let Some(delay) = self.auto_play_delay
            && (!delay.is_finite() || delay <= 0.0)
        {
            return Err(EdubuilderError::validation(
                "autoPlayDelay must be finite and > 0 when set",
            ));
        }

        for (i, step) in self.steps.iter().enumerate() {
            if step.id.trim().is_empty() {
                return Err(EdubuilderError::validation(format!(
                    "step at position {i} has an empty id"
                )));
            }
            // Step numbers must be dense 1..N in list order.
            if step.step as usize != i + 1 {
                return Err(EdubuilderError::validation(format!(
                    "step '{}' has step number {} but occupies position {}",
                    step.id,
                    step.step,
                    i + 1
                )));
            }
            for (name, value) in [("duration", step.duration), ("delay", step.delay)] {
                if let Some(v) = value
                    && (!v.is_finite() || v < 0.0)
                {
                    return Err(EdubuilderError::validation(format!(
                        "step '{}' {name} must be finite and >= 0 when set",
                        step.id
                    )));
                }
            }
            if let Some(quiz) = &step.quiz {
                if quiz.options.is_empty() {
                    return Err(EdubuilderError::validation(format!(
                        "step '{}' quiz must have at least one option",
                        step.id
                    )));
                }
                if quiz.correct >= quiz.options.len() {
                    return Err(EdubuilderError::validation(format!(
                        "step '{}' quiz correct index {} is out of range (options: {})",
                        step.id,
                        quiz.correct,
                        quiz.options.len()
                    )));
                }
            }
            for element in &step.elements {
                if element.id.trim().is_empty() {
                    return Err(EdubuilderError::validation(format!(
                        "step '{}' contains an element with an empty id",
                        step.id
                    )));
                }
                for (name, value) in [
                    ("x", element.x),
                    ("y", element.y),
                    ("width", element.width),
                    ("height", element.height),
                    ("opacity", element.opacity),
                    ("rotation", element.rotation),
                ] {
                    if let Some(v) = value
                        && !v.is_finite()
                    {
                        return Err(EdubuilderError::validation(format!(
                            "element '{}' {name} must be finite when set",
                            element.id
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Auto-play delay in seconds, defaulting to
    /// [`DEFAULT_AUTO_PLAY_DELAY_SECS`].
    pub fn auto_play_delay_secs(&self) -> f64 {
        self.auto_play_delay
            .unwrap_or(DEFAULT_AUTO_PLAY_DELAY_SECS)
    }

    /// Number of steps carrying an embedded quiz.
    pub fn quiz_step_count(&self) -> usize {
        self.steps.iter().filter(|s| s.quiz.is_some()).count()
    }

    /// Mean step duration in seconds (each step defaults to 1 second).
    pub fn average_step_duration_secs(&self) -> f64 {
        if self.steps.is_empty() {
            return 0.0;
        }
        let total: f64 = self.steps.iter().map(AnimationStep::duration_secs).sum();
        total / self.steps.len() as f64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/model.rs"]
mod tests;
