//! Playback state machine for one animation sequence.
//!
//! The sequencer owns the ephemeral playback state (step index, completed
//! set, play flag, quiz gate) for exactly one sequence; the sequence itself
//! is read-only input and is never mutated by playback. Every operation is
//! total: invalid input is clamped or ignored, never an error, so learner
//! interaction can never crash playback.
//!
//! Auto-play is an explicit deadline owned by the instance. It is cancelled
//! and rescheduled on every state change that affects timing, so at most one
//! timer is ever pending, and it dies with the instance. The host drives it
//! by calling [`Sequencer::tick`] with the current time.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use crate::{
    foundation::error::EdubuilderResult,
    sequence::model::{AnimationSequence, AnimationStep},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Coarse playback phase derived from the sequencer's state.
pub enum PlaybackPhase {
    /// Initial state: at the first step, nothing completed, not playing.
    Idle,
    /// Auto-advance timer armed.
    Playing,
    /// Stopped mid-sequence.
    Paused,
    /// A quiz overlay is blocking advancement.
    QuizGate,
    /// The final step was completed.
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What an advancement-style operation did.
pub enum StepOutcome {
    /// Moved to the next step.
    Advanced,
    /// Opened the current step's quiz gate instead of advancing.
    GateOpened,
    /// Completed the sequence.
    Finished,
    /// Nothing changed.
    NoOp,
}

/// State machine driving playback of one [`AnimationSequence`].
pub struct Sequencer {
    sequence: AnimationSequence,
    index: usize,
    completed: BTreeSet<usize>,
    playing: bool,
    quiz_visible: bool,
    quiz_selection: Option<usize>,
    muted: bool,
    finished: bool,
    deadline: Option<Instant>,
    on_complete: Option<Box<dyn FnMut()>>,
}

impl Sequencer {
    /// Take ownership of a sequence and start in [`PlaybackPhase::Idle`].
    ///
    /// Authoring invariants are checked here so violations surface at load
    /// time, not during playback.
    pub fn new(sequence: AnimationSequence) -> EdubuilderResult<Self> {
        sequence.validate()?;
        Ok(Self {
            sequence,
            index: 0,
            completed: BTreeSet::new(),
            playing: false,
            quiz_visible: false,
            quiz_selection: None,
            muted: false,
            finished: false,
            deadline: None,
            on_complete: None,
        })
    }

    /// Register a callback invoked once each time the sequence completes.
    pub fn set_on_complete(&mut self, callback: impl FnMut() + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    /// The sequence under playback.
    pub fn sequence(&self) -> &AnimationSequence {
        &self.sequence
    }

    /// Current 0-based step index.
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// The step at the current index.
    pub fn current_step(&self) -> &AnimationStep {
        &self.sequence.steps[self.index]
    }

    /// Indices of completed steps, ascending.
    pub fn completed_steps(&self) -> impl Iterator<Item = usize> + '_ {
        self.completed.iter().copied()
    }

    /// Whether the step at `index` has been completed.
    pub fn is_step_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    /// Whether auto-play is engaged.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether narration is muted. Orthogonal to every transition.
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Currently selected quiz option, if any.
    pub fn selected_option(&self) -> Option<usize> {
        self.quiz_selection
    }

    /// The pending auto-advance deadline, if one is armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Derive the coarse playback phase.
    pub fn phase(&self) -> PlaybackPhase {
        if self.finished {
            PlaybackPhase::Completed
        } else if self.quiz_visible {
            PlaybackPhase::QuizGate
        } else if self.playing {
            PlaybackPhase::Playing
        } else if self.index == 0 && self.completed.is_empty() {
            PlaybackPhase::Idle
        } else {
            PlaybackPhase::Paused
        }
    }

    /// Progress through the sequence in percent, always in `(0, 100]`.
    pub fn progress(&self) -> f64 {
        (self.index + 1) as f64 / self.sequence.total_steps as f64 * 100.0
    }

    /// Engage auto-play. No-op when the sequence already completed or the
    /// last step is reached and marked completed.
    pub fn play(&mut self, now: Instant) {
        if self.finished {
            return;
        }
        if self.index == self.last_index() && self.completed.contains(&self.index) {
            return;
        }
        self.playing = true;
        tracing::debug!(index = self.index, "auto-play engaged");
        self.reschedule(now);
    }

    /// Disengage auto-play and cancel any pending timer.
    pub fn pause(&mut self) {
        self.playing = false;
        self.deadline = None;
    }

    /// Toggle between play and pause.
    pub fn toggle_play(&mut self, now: Instant) {
        if self.playing {
            self.pause();
        } else {
            self.play(now);
        }
    }

    /// Advance to the next step.
    ///
    /// Marks the current step completed (idempotently). If the current step
    /// carries a quiz whose overlay is not yet showing, the call spends
    /// itself opening the gate and the index does not move; a second call
    /// bypasses the gate. At the last index the sequence completes instead
    /// of advancing.
    pub fn next(&mut self, now: Instant) -> StepOutcome {
        if self.finished {
            return StepOutcome::NoOp;
        }
        self.completed.insert(self.index);

        if self.current_step().quiz.is_some() && !self.quiz_visible {
            self.quiz_visible = true;
            self.quiz_selection = None;
            tracing::debug!(index = self.index, "quiz gate opened");
            return StepOutcome::GateOpened;
        }

        if self.index < self.last_index() {
            self.index += 1;
            self.clear_quiz_state();
            tracing::debug!(index = self.index, "advanced");
            self.reschedule(now);
            StepOutcome::Advanced
        } else {
            self.finish();
            StepOutcome::Finished
        }
    }

    /// Step back one index, clearing quiz-gate state. No-op at the first
    /// step. Leaves a completed sequence by re-entering its last step.
    pub fn previous(&mut self, now: Instant) {
        if self.index == 0 {
            return;
        }
        self.index -= 1;
        self.finished = false;
        self.clear_quiz_state();
        self.reschedule(now);
    }

    /// Jump directly to a step, clamped to the valid index range.
    ///
    /// Used for out-of-order step-indicator navigation; intervening steps
    /// are not marked completed and the completed set is left untouched.
    pub fn jump_to(&mut self, index: usize, now: Instant) {
        self.index = index.min(self.last_index());
        self.finished = false;
        self.clear_quiz_state();
        self.reschedule(now);
    }

    /// Answer the open quiz gate.
    ///
    /// A correct answer behaves exactly like [`Sequencer::next`]; a wrong
    /// (or out-of-range) answer clears the selection and leaves the gate
    /// open for another try. There is no attempt limit or penalty. No-op
    /// when no gate is open.
    pub fn submit_quiz_answer(&mut self, option: usize, now: Instant) -> StepOutcome {
        if !self.quiz_visible {
            return StepOutcome::NoOp;
        }
        let Some(correct) = self.current_step().quiz.as_ref().map(|q| q.correct) else {
            return StepOutcome::NoOp;
        };
        self.quiz_selection = Some(option);
        if option == correct {
            tracing::debug!(index = self.index, option, "quiz answered correctly");
            self.next(now)
        } else {
            tracing::debug!(index = self.index, option, "quiz answered incorrectly");
            self.quiz_selection = None;
            StepOutcome::NoOp
        }
    }

    /// Return to [`PlaybackPhase::Idle`]: first step, empty completed set,
    /// paused, quiz gate cleared. The mute flag is unaffected.
    pub fn reset(&mut self) {
        self.index = 0;
        self.completed.clear();
        self.playing = false;
        self.finished = false;
        self.deadline = None;
        self.clear_quiz_state();
    }

    /// Toggle narration mute. Affects no other state.
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Drive the auto-advance timer.
    ///
    /// Fires at most once per armed deadline: when `now` has reached it, the
    /// same logic as [`Sequencer::next`] runs (which re-arms the timer when
    /// playback continues). Returns what the firing did, or `None` when no
    /// deadline was due.
    pub fn tick(&mut self, now: Instant) -> Option<StepOutcome> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;
        if !self.playing {
            return None;
        }
        Some(self.next(now))
    }

    fn last_index(&self) -> usize {
        self.sequence.total_steps - 1
    }

    fn clear_quiz_state(&mut self) {
        self.quiz_visible = false;
        self.quiz_selection = None;
    }

    // Cancel-then-reschedule: the single place the timer is armed.
    fn reschedule(&mut self, now: Instant) {
        self.deadline = None;
        if self.playing && !self.finished {
            let delay = Duration::from_secs_f64(self.sequence.auto_play_delay_secs());
            self.deadline = Some(now + delay);
        }
    }

    fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        self.playing = false;
        self.deadline = None;
        self.clear_quiz_state();
        tracing::debug!(sequence = %self.sequence.id, "sequence completed");
        if let Some(callback) = &mut self.on_complete {
            callback();
        }
    }
}

impl std::fmt::Debug for Sequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequencer")
            .field("sequence", &self.sequence.id)
            .field("index", &self.index)
            .field("phase", &self.phase())
            .field("completed", &self.completed)
            .field("muted", &self.muted)
            .field("deadline", &self.deadline)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/sequencer.rs"]
mod tests;
