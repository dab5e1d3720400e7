//! EduBuilder is an engine for interactive, step-based educational
//! animations: authored sequences of illustrated steps with optional
//! embedded quizzes, played back by a small state machine.
//!
//! # Pipeline overview
//!
//! 1. **Author/load**: an [`AnimationSequence`] is built from a template or
//!    deserialized from JSON, and validated once at load time.
//! 2. **Play**: a [`Sequencer`] owns the ephemeral playback state (current
//!    step, completed set, quiz gate, auto-play timer) for one sequence.
//! 3. **Render**: [`render_step`] turns the active step into a declarative
//!    [`StepScene`], resolving each element's [`TransitionProfile`] from the
//!    transition catalog; an embedding UI draws the nodes.
//! 4. **Share** (optional): [`to_json_document`] / [`to_standalone_viewer`]
//!    export the sequence in memory; an [`AnimationStore`] persists it.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Playback is total**: sequencer operations clamp or no-op on any input
//!   in any state; learner interaction never raises an error.
//! - **Sequences are read-only during playback**: only explicit store calls
//!   mutate persisted state.
//! - **At most one auto-play timer per sequencer**, cancelled and re-armed
//!   on every timing-relevant change, and dropped with the instance.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod export;
mod foundation;
mod gallery;
mod player;
mod sequence;
mod store;

pub use export::document::{
    EMBED_URL_BASE, ExportDocument, embed_code, export_file_stem, sequence_json, to_json_document,
    to_standalone_viewer,
};
pub use foundation::error::{EdubuilderError, EdubuilderResult};
pub use gallery::filter::{ALL_TAG, distinct_tags, filter_by_tag};
pub use player::scene::{REVEAL_STAGGER_SECS, SceneNode, StepScene, render_step};
pub use player::sequencer::{PlaybackPhase, Sequencer, StepOutcome};
pub use player::transitions::{
    BOUNCE_DAMPING, BOUNCE_STIFFNESS, Ease, PULSE_CYCLES, Timing, TransitionProfile, VisualState,
    profile_for,
};
pub use sequence::model::{
    AnimationElement, AnimationSequence, AnimationStep, AnimationType,
    DEFAULT_AUTO_PLAY_DELAY_SECS, Difficulty, ElementKind, StepQuiz, TriggerType,
};
pub use sequence::templates::builtin_templates;
pub use store::attempts::{
    KeyValueStorage, MemoryStorage, QUIZ_ATTEMPTS_KEY, QuizAttempt, attempts, record_attempt,
};
pub use store::client::{AnimationStore, MemoryStore, Session, StoredAnimation, UserId};
