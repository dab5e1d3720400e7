pub mod scene;
pub mod sequencer;
pub mod transitions;
