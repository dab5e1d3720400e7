//! Declarative transition catalog.
//!
//! Maps an [`AnimationType`] tag to a [`TransitionProfile`]: a hidden and a
//! visible visual state plus a timing spec. The catalog is a data table, not
//! control flow; adding a transition kind is a new table entry. Unrecognized
//! tags (and the not-yet-designed `Morph`) fall back to the fade profile so
//! malformed authored content degrades gracefully during playback.

use crate::sequence::model::AnimationType;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Easing curve applied to tween progress.
pub enum Ease {
    /// Constant rate.
    Linear,
    /// Quadratic ease-in-out.
    InOutQuad,
    /// Cubic ease-in-out, the catalog default.
    InOutCubic,
}

impl Ease {
    /// Map linear progress `t` (clamped to `[0, 1]`) through the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A presentation state an element animates between.
///
/// `x`/`y` are translation offsets in canvas percentage points relative to
/// the element's authored position; `path_length` is the drawn fraction of a
/// vector path.
pub struct VisualState {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Drawn fraction of a vector path in `[0, 1]`.
    pub path_length: f64,
}

impl VisualState {
    /// The fully-presented state: opaque, in place, unscaled, fully drawn.
    pub fn visible() -> Self {
        Self {
            opacity: 1.0,
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            rotation: 0.0,
            path_length: 1.0,
        }
    }

    /// Linear interpolation between two states. `t` is intentionally not
    /// clamped so spring timing can overshoot the visible state.
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self {
            opacity: mix(a.opacity, b.opacity),
            x: mix(a.x, b.x),
            y: mix(a.y, b.y),
            scale: mix(a.scale, b.scale),
            rotation: mix(a.rotation, b.rotation),
            path_length: mix(a.path_length, b.path_length),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Timing spec for a transition profile.
pub enum Timing {
    /// Single eased run over a fixed duration.
    Tween {
        /// Duration in seconds.
        duration_secs: f64,
        /// Easing curve.
        ease: Ease,
    },
    /// Damped spring settle toward the visible state. Used only by the
    /// `bounce` profile.
    Spring {
        /// Spring stiffness.
        stiffness: f64,
        /// Damping coefficient.
        damping: f64,
    },
    /// Eased run replayed in alternating directions. Used only by the
    /// `pulse` profile.
    Repeat {
        /// Duration of one cycle in seconds.
        duration_secs: f64,
        /// Easing curve per cycle.
        ease: Ease,
        /// Number of repeats after the first run.
        cycles: u32,
        /// Reverse direction on every other run.
        reverse: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Hidden/visible state pair plus timing for one animation-type tag.
pub struct TransitionProfile {
    /// State while the owning step is inactive.
    pub hidden: VisualState,
    /// State once the owning step is active and settled.
    pub visible: VisualState,
    /// Interpolation timing.
    pub timing: Timing,
}

/// Bounce spring stiffness.
pub const BOUNCE_STIFFNESS: f64 = 200.0;
/// Bounce spring damping.
pub const BOUNCE_DAMPING: f64 = 20.0;
/// Pulse repeat count (runs after the first).
pub const PULSE_CYCLES: u32 = 2;

/// Resolve the transition profile for an animation-type tag.
///
/// `duration_secs` scales the tween-based profiles; the bounce spring runs on
/// its own physical clock.
pub fn profile_for(kind: AnimationType, duration_secs: f64) -> TransitionProfile {
    let visible = VisualState::visible();
    let tween = Timing::Tween {
        duration_secs,
        ease: Ease::InOutCubic,
    };

    match kind {
        AnimationType::SlideLeft => TransitionProfile {
            hidden: VisualState {
                x: 100.0,
                opacity: 0.0,
                ..visible
            },
            visible,
            timing: tween,
        },
        AnimationType::SlideRight => TransitionProfile {
            hidden: VisualState {
                x: -100.0,
                opacity: 0.0,
                ..visible
            },
            visible,
            timing: tween,
        },
        AnimationType::SlideUp => TransitionProfile {
            hidden: VisualState {
                y: 100.0,
                opacity: 0.0,
                ..visible
            },
            visible,
            timing: tween,
        },
        AnimationType::SlideDown => TransitionProfile {
            hidden: VisualState {
                y: -100.0,
                opacity: 0.0,
                ..visible
            },
            visible,
            timing: tween,
        },
        AnimationType::Scale => TransitionProfile {
            hidden: VisualState {
                scale: 0.0,
                opacity: 0.0,
                ..visible
            },
            visible,
            timing: tween,
        },
        AnimationType::Rotate => TransitionProfile {
            hidden: VisualState {
                rotation: -180.0,
                opacity: 0.0,
                ..visible
            },
            visible,
            timing: tween,
        },
        AnimationType::Bounce => TransitionProfile {
            hidden: VisualState {
                y: 100.0,
                opacity: 0.0,
                ..visible
            },
            visible,
            timing: Timing::Spring {
                stiffness: BOUNCE_STIFFNESS,
                damping: BOUNCE_DAMPING,
            },
        },
        AnimationType::Pulse => TransitionProfile {
            hidden: VisualState {
                opacity: 0.0,
                scale: 0.8,
                ..visible
            },
            visible,
            timing: Timing::Repeat {
                duration_secs,
                ease: Ease::InOutCubic,
                cycles: PULSE_CYCLES,
                reverse: true,
            },
        },
        AnimationType::Draw => TransitionProfile {
            hidden: VisualState {
                path_length: 0.0,
                opacity: 0.0,
                ..visible
            },
            visible,
            timing: tween,
        },
        // Fade is also the fallback for tags with no dedicated profile.
        AnimationType::FadeIn | AnimationType::Morph | AnimationType::Custom => TransitionProfile {
            hidden: VisualState {
                opacity: 0.0,
                ..visible
            },
            visible,
            timing: tween,
        },
    }
}

impl TransitionProfile {
    /// Sample the transition at `elapsed_secs` since it started.
    ///
    /// Tween and repeat profiles normalize elapsed time against their
    /// duration; the spring profile evaluates the damped response on the
    /// physical clock and may overshoot the visible state before settling.
    pub fn sample(&self, elapsed_secs: f64) -> VisualState {
        let elapsed = elapsed_secs.max(0.0);
        let progress = match self.timing {
            Timing::Tween {
                duration_secs,
                ease,
            } => {
                if duration_secs <= 0.0 {
                    1.0
                } else {
                    ease.apply(elapsed / duration_secs)
                }
            }
            Timing::Spring { stiffness, damping } => spring_progress(stiffness, damping, elapsed),
            Timing::Repeat {
                duration_secs,
                ease,
                cycles,
                reverse,
            } => {
                if duration_secs <= 0.0 {
                    1.0
                } else {
                    let run = (elapsed / duration_secs).floor().min(f64::from(cycles)) as u32;
                    let local = ((elapsed - f64::from(run) * duration_secs) / duration_secs)
                        .clamp(0.0, 1.0);
                    let eased = ease.apply(local);
                    if reverse && run % 2 == 1 {
                        1.0 - eased
                    } else {
                        eased
                    }
                }
            }
        };
        VisualState::lerp(self.hidden, self.visible, progress)
    }
}

/// Unit-mass damped spring step response from 0 toward 1.
fn spring_progress(stiffness: f64, damping: f64, t: f64) -> f64 {
    let omega0 = stiffness.max(f64::EPSILON).sqrt();
    let zeta = damping / (2.0 * omega0);
    if zeta < 1.0 {
        // Underdamped: decaying oscillation around the target.
        let omega_d = omega0 * (1.0 - zeta * zeta).sqrt();
        let envelope = (-zeta * omega0 * t).exp();
        1.0 - envelope * ((omega_d * t).cos() + (zeta * omega0 / omega_d) * (omega_d * t).sin())
    } else {
        // Critically damped or overdamped: monotonic approach.
        let envelope = (-omega0 * t).exp();
        1.0 - envelope * (1.0 + omega0 * t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/transitions.rs"]
mod tests;
