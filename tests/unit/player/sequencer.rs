use super::*;
use std::{cell::Cell, rc::Rc, time::Duration};

use crate::sequence::model::{
    AnimationElement, AnimationType, ElementKind, StepQuiz, TriggerType,
};

fn step(number: u32, quiz: Option<StepQuiz>) -> AnimationStep {
    AnimationStep {
        id: format!("s{number}"),
        step: number,
        title: format!("Step {number}"),
        description: "desc".to_string(),
        narration: None,
        animation_type: AnimationType::FadeIn,
        trigger: TriggerType::Auto,
        duration: None,
        delay: None,
        elements: vec![AnimationElement {
            id: format!("e{number}"),
            kind: ElementKind::Text,
            content: Some("x".to_string()),
            x: Some(50.0),
            y: Some(50.0),
            width: None,
            height: None,
            color: None,
            opacity: None,
            rotation: None,
        }],
        quiz,
    }
}

fn quiz(correct: usize) -> StepQuiz {
    StepQuiz {
        question: "?".to_string(),
        options: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        correct,
    }
}

/// `n` steps, an optional quiz at one 0-based position, auto-play delay 1s.
fn sequencer(n: u32, quiz_at: Option<(usize, usize)>) -> Sequencer {
    let steps = (1..=n)
        .map(|i| {
            let q = quiz_at
                .filter(|(pos, _)| *pos == (i - 1) as usize)
                .map(|(_, correct)| quiz(correct));
            step(i, q)
        })
        .collect::<Vec<_>>();
    let sequence = AnimationSequence {
        id: "seq".to_string(),
        title: "Seq".to_string(),
        topic: "Testing".to_string(),
        thumbnail: None,
        description: None,
        total_steps: n as usize,
        steps,
        auto_play: None,
        auto_play_delay: Some(1.0),
        difficulty: None,
        tags: None,
    };
    Sequencer::new(sequence).unwrap()
}

fn t0() -> Instant {
    Instant::now()
}

fn secs(s: f64) -> Duration {
    Duration::from_secs_f64(s)
}

#[test]
fn new_rejects_invalid_sequences() {
    let mut seq = sequencer(2, None).sequence().clone();
    seq.total_steps = 5;
    assert!(Sequencer::new(seq).is_err());
}

#[test]
fn starts_idle_at_first_step() {
    let s = sequencer(3, None);
    assert_eq!(s.phase(), PlaybackPhase::Idle);
    assert_eq!(s.current_index(), 0);
    assert_eq!(s.completed_steps().count(), 0);
    assert!(!s.is_playing());
    assert!(!s.is_muted());
}

#[test]
fn progress_is_monotonic_and_in_range() {
    let now = t0();
    let mut s = sequencer(4, None);
    let mut last = 0.0;
    loop {
        let p = s.progress();
        assert!(p > 0.0 && p <= 100.0);
        assert!(p >= last);
        last = p;
        if s.next(now) == StepOutcome::Finished {
            break;
        }
    }
    assert_eq!(s.progress(), 100.0);
}

#[test]
fn progress_hits_100_only_at_last_index() {
    let now = t0();
    let mut s = sequencer(4, None);
    for expected in [25.0, 50.0, 75.0, 100.0] {
        assert_eq!(s.progress(), expected);
        s.next(now);
    }
}

#[test]
fn next_is_idempotent_on_the_completed_set() {
    let now = t0();
    let mut s = sequencer(3, None);
    s.next(now);
    s.previous(now);
    s.next(now);
    s.previous(now);
    s.next(now);
    assert_eq!(s.completed_steps().collect::<Vec<_>>(), vec![0]);
}

#[test]
fn step_without_quiz_is_never_gated() {
    let now = t0();
    let mut s = sequencer(3, None);
    assert_eq!(s.next(now), StepOutcome::Advanced);
    assert_eq!(s.current_index(), 1);
    assert_eq!(s.phase(), PlaybackPhase::Paused);
}

#[test]
fn quiz_gates_exactly_once() {
    let now = t0();
    let mut s = sequencer(3, Some((1, 2)));
    s.next(now); // 0 -> 1
    // First call spends itself opening the gate.
    assert_eq!(s.next(now), StepOutcome::GateOpened);
    assert_eq!(s.current_index(), 1);
    assert_eq!(s.phase(), PlaybackPhase::QuizGate);
    // Second call bypasses the open gate.
    assert_eq!(s.next(now), StepOutcome::Advanced);
    assert_eq!(s.current_index(), 2);
    assert_eq!(s.phase(), PlaybackPhase::Paused);
}

#[test]
fn wrong_answer_keeps_the_gate_open_and_clears_selection() {
    let now = t0();
    let mut s = sequencer(2, Some((0, 2)));
    assert_eq!(s.next(now), StepOutcome::GateOpened);
    assert_eq!(s.submit_quiz_answer(0, now), StepOutcome::NoOp);
    assert_eq!(s.current_index(), 0);
    assert_eq!(s.phase(), PlaybackPhase::QuizGate);
    assert_eq!(s.selected_option(), None);
    // No attempt limit: another wrong try, then the right one.
    assert_eq!(s.submit_quiz_answer(1, now), StepOutcome::NoOp);
    assert_eq!(s.submit_quiz_answer(2, now), StepOutcome::Advanced);
    assert_eq!(s.current_index(), 1);
}

#[test]
fn out_of_range_answer_is_a_wrong_answer_not_a_panic() {
    let now = t0();
    let mut s = sequencer(2, Some((0, 1)));
    s.next(now);
    assert_eq!(s.submit_quiz_answer(99, now), StepOutcome::NoOp);
    assert_eq!(s.phase(), PlaybackPhase::QuizGate);
}

#[test]
fn answer_without_open_gate_is_a_no_op() {
    let now = t0();
    let mut s = sequencer(2, Some((0, 1)));
    assert_eq!(s.submit_quiz_answer(1, now), StepOutcome::NoOp);
    assert_eq!(s.current_index(), 0);
}

#[test]
fn single_step_quiz_completes_on_correct_answer() {
    let now = t0();
    let mut s = sequencer(1, Some((0, 2)));
    assert_eq!(s.next(now), StepOutcome::GateOpened);
    assert_eq!(s.submit_quiz_answer(0, now), StepOutcome::NoOp);
    assert_eq!(s.current_index(), 0);
    assert_eq!(s.selected_option(), None);
    assert_eq!(s.submit_quiz_answer(2, now), StepOutcome::Finished);
    assert_eq!(s.phase(), PlaybackPhase::Completed);
}

#[test]
fn previous_clamps_at_zero_and_clears_the_gate() {
    let now = t0();
    let mut s = sequencer(3, Some((1, 0)));
    s.previous(now);
    assert_eq!(s.current_index(), 0);
    s.next(now); // 0 -> 1
    s.next(now); // gate opens
    assert_eq!(s.phase(), PlaybackPhase::QuizGate);
    s.previous(now);
    assert_eq!(s.current_index(), 0);
    assert_eq!(s.phase(), PlaybackPhase::Paused);
}

#[test]
fn jump_to_never_mutates_the_completed_set() {
    let now = t0();
    let mut s = sequencer(4, None);
    s.next(now);
    let before: Vec<_> = s.completed_steps().collect();
    s.jump_to(3, now);
    assert_eq!(s.current_index(), 3);
    assert_eq!(s.completed_steps().collect::<Vec<_>>(), before);
    // Out-of-range jumps clamp to the last valid index.
    s.jump_to(99, now);
    assert_eq!(s.current_index(), 3);
    assert_eq!(s.completed_steps().collect::<Vec<_>>(), before);
}

#[test]
fn jump_to_clears_quiz_gate_state() {
    let now = t0();
    let mut s = sequencer(3, Some((0, 1)));
    s.next(now);
    assert_eq!(s.phase(), PlaybackPhase::QuizGate);
    s.jump_to(2, now);
    assert_eq!(s.phase(), PlaybackPhase::Paused);
    assert_eq!(s.selected_option(), None);
}

#[test]
fn reset_restores_idle_from_any_state_but_keeps_mute() {
    let now = t0();
    let mut s = sequencer(3, Some((1, 0)));
    s.toggle_mute();
    s.play(now);
    s.next(now);
    s.next(now); // gate opens
    s.reset();
    assert_eq!(s.phase(), PlaybackPhase::Idle);
    assert_eq!(s.current_index(), 0);
    assert_eq!(s.completed_steps().count(), 0);
    assert!(!s.is_playing());
    assert_eq!(s.deadline(), None);
    assert!(s.is_muted());
}

#[test]
fn mute_is_orthogonal_to_playback() {
    let now = t0();
    let mut s = sequencer(2, None);
    s.toggle_mute();
    assert!(s.is_muted());
    assert_eq!(s.phase(), PlaybackPhase::Idle);
    s.next(now);
    s.toggle_mute();
    assert!(!s.is_muted());
    assert_eq!(s.current_index(), 1);
}

#[test]
fn play_arms_one_timer_and_pause_cancels_it() {
    let now = t0();
    let mut s = sequencer(3, None);
    assert_eq!(s.deadline(), None);
    s.play(now);
    assert_eq!(s.deadline(), Some(now + secs(1.0)));
    // Manual advance re-arms from the new now (cancel-then-reschedule).
    let later = now + secs(0.4);
    s.next(later);
    assert_eq!(s.deadline(), Some(later + secs(1.0)));
    s.pause();
    assert_eq!(s.deadline(), None);
}

#[test]
fn tick_before_the_deadline_does_nothing() {
    let now = t0();
    let mut s = sequencer(3, None);
    s.play(now);
    assert_eq!(s.tick(now + secs(0.5)), None);
    assert_eq!(s.current_index(), 0);
}

#[test]
fn auto_play_runs_to_completion_exactly_once() {
    let now = t0();
    let completions = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&completions);

    let mut s = sequencer(3, None);
    s.set_on_complete(move || counter.set(counter.get() + 1));
    s.play(now);

    assert_eq!(s.tick(now + secs(1.0)), Some(StepOutcome::Advanced));
    assert_eq!(s.tick(now + secs(2.0)), Some(StepOutcome::Advanced));
    assert_eq!(s.tick(now + secs(3.0)), Some(StepOutcome::Finished));

    assert_eq!(s.phase(), PlaybackPhase::Completed);
    assert_eq!(s.completed_steps().collect::<Vec<_>>(), vec![0, 1, 2]);
    assert!(!s.is_playing());
    assert_eq!(s.deadline(), None);
    assert_eq!(completions.get(), 1);

    // Nothing further fires.
    assert_eq!(s.tick(now + secs(10.0)), None);
    assert_eq!(s.next(now + secs(10.0)), StepOutcome::NoOp);
    assert_eq!(completions.get(), 1);
}

#[test]
fn auto_play_stalls_at_an_open_gate_until_answered() {
    let now = t0();
    let mut s = sequencer(3, Some((1, 1)));
    s.play(now);
    assert_eq!(s.tick(now + secs(1.0)), Some(StepOutcome::Advanced));
    // Timer fire opens the gate and does not re-arm.
    assert_eq!(s.tick(now + secs(2.0)), Some(StepOutcome::GateOpened));
    assert_eq!(s.deadline(), None);
    assert_eq!(s.tick(now + secs(5.0)), None);
    // A correct answer advances and resumes the timer.
    let answered = now + secs(6.0);
    assert_eq!(s.submit_quiz_answer(1, answered), StepOutcome::Advanced);
    assert_eq!(s.deadline(), Some(answered + secs(1.0)));
}

#[test]
fn play_is_a_no_op_on_a_completed_last_step() {
    let now = t0();
    let mut s = sequencer(2, None);
    s.next(now);
    s.next(now); // completes
    assert_eq!(s.phase(), PlaybackPhase::Completed);
    s.play(now);
    assert!(!s.is_playing());
    assert_eq!(s.deadline(), None);
}

#[test]
fn previous_leaves_the_completed_phase() {
    let now = t0();
    let mut s = sequencer(2, None);
    s.next(now);
    s.next(now);
    assert_eq!(s.phase(), PlaybackPhase::Completed);
    s.previous(now);
    assert_eq!(s.current_index(), 0);
    assert_ne!(s.phase(), PlaybackPhase::Completed);
}

#[test]
fn stale_tick_after_pause_does_not_advance() {
    let now = t0();
    let mut s = sequencer(3, None);
    s.play(now);
    s.pause();
    assert_eq!(s.tick(now + secs(5.0)), None);
    assert_eq!(s.current_index(), 0);
}

#[test]
fn playback_never_mutates_the_sequence() {
    let now = t0();
    let mut s = sequencer(3, Some((1, 0)));
    let before = s.sequence().clone();
    s.play(now);
    s.next(now);
    s.next(now);
    s.submit_quiz_answer(0, now);
    s.submit_quiz_answer(0, now);
    s.jump_to(2, now);
    s.reset();
    assert_eq!(s.sequence(), &before);
}
