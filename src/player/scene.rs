//! Step renderer: step data to a declarative scene.
//!
//! Rendering here means producing the visible layout as data, the crate's
//! equivalent of an evaluated frame graph; an embedding UI walks the nodes
//! and drives the actual pixels.

use crate::{
    player::transitions::{TransitionProfile, VisualState, profile_for},
    sequence::model::{AnimationStep, ElementKind},
};

/// Base per-element reveal stagger in seconds.
pub const REVEAL_STAGGER_SECS: f64 = 0.2;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Rendered form of one step: positioned nodes plus step-level context.
pub struct StepScene {
    /// Owning step identifier.
    pub step_id: String,
    /// Whether the step is the active one.
    pub active: bool,
    /// Whether the learner already completed this step.
    pub completed: bool,
    /// Positioned content nodes in authored order.
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One positioned content node within a rendered step.
pub struct SceneNode {
    /// Source element identifier.
    pub element_id: String,
    /// Source element kind.
    pub kind: ElementKind,
    /// Literal content; only text and shape elements carry any.
    pub content: Option<String>,
    /// Horizontal position as a percentage of the canvas.
    pub x_pct: f64,
    /// Vertical position as a percentage of the canvas.
    pub y_pct: f64,
    /// Width in pixels, when authored.
    pub width_px: Option<f64>,
    /// Height in pixels, when authored.
    pub height_px: Option<f64>,
    /// CSS-style color string, when authored.
    pub color: Option<String>,
    /// Seconds to wait before revealing this node once the step activates.
    pub reveal_delay_secs: f64,
    /// Transition profile resolved from the step's animation-type tag.
    pub profile: TransitionProfile,
    /// Target state: the profile's visible state when active, hidden
    /// otherwise.
    pub target: VisualState,
}

/// Render one step into a [`StepScene`].
///
/// Elements reveal staggered by [`REVEAL_STAGGER_SECS`] per list position.
/// Elements with id `"sun"` or `"projectile"` get one extra stagger slot, a
/// convention inherited from specific authored sequences (see the solar
/// system and projectile templates); do not extend the list without new
/// authored content that needs it.
///
/// Icon, image, and svg elements are accepted but produce nodes with no
/// content: this renderer has no media pipeline, and keeping the nodes (as
/// positioned, content-free placeholders) is the documented behavior rather
/// than silently dropping them.
#[tracing::instrument(skip(step), fields(step_id = %step.id))]
pub fn render_step(step: &AnimationStep, is_active: bool, is_completed: bool) -> StepScene {
    let profile = profile_for(step.animation_type, step.duration_secs());

    let nodes = step
        .elements
        .iter()
        .enumerate()
        .map(|(idx, element)| {
            let extra = if element.id == "sun" || element.id == "projectile" {
                REVEAL_STAGGER_SECS
            } else {
                0.0
            };
            let content = match element.kind {
                ElementKind::Text | ElementKind::Shape => element.content.clone(),
                ElementKind::Icon | ElementKind::Image | ElementKind::Svg => None,
            };
            SceneNode {
                element_id: element.id.clone(),
                kind: element.kind,
                content,
                x_pct: element.x.unwrap_or(0.0),
                y_pct: element.y.unwrap_or(0.0),
                width_px: element.width,
                height_px: element.height,
                color: element.color.clone(),
                reveal_delay_secs: extra + idx as f64 * REVEAL_STAGGER_SECS,
                profile,
                target: if is_active {
                    profile.visible
                } else {
                    profile.hidden
                },
            }
        })
        .collect();

    StepScene {
        step_id: step.id.clone(),
        active: is_active,
        completed: is_completed,
        nodes,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/scene.rs"]
mod tests;
