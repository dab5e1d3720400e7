//! Quiz-attempt log over namespaced key-value storage.
//!
//! Attempts are appended to a single list stored whole under
//! [`QUIZ_ATTEMPTS_KEY`]: each append reads the list, pushes, and writes it
//! back, matching the browser-localStorage behavior this abstracts. The list
//! is never pruned and grows without bound; hosts that care should prune on
//! their own schedule.

use std::collections::BTreeMap;

use crate::foundation::error::EdubuilderResult;

/// Fixed namespaced key the attempt list lives under.
pub const QUIZ_ATTEMPTS_KEY: &str = "edubuilder_quizzes";

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One recorded quiz attempt.
pub struct QuizAttempt {
    /// Quiz topic.
    pub topic: String,
    /// Correct answers.
    pub score: u32,
    /// Question count.
    pub total: u32,
    /// Attempt date, as the host formats it.
    pub date: String,
}

/// String key-value storage, the shape of browser `localStorage`.
pub trait KeyValueStorage {
    /// Read a value. `None` when the key is absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value. May fail (storage quota, backend IO).
    fn set(&mut self, key: &str, value: String) -> EdubuilderResult<()>;
}

/// All recorded attempts, oldest first. A missing key is an empty list.
pub fn attempts(storage: &dyn KeyValueStorage) -> EdubuilderResult<Vec<QuizAttempt>> {
    match storage.get(QUIZ_ATTEMPTS_KEY) {
        None => Ok(Vec::new()),
        Some(raw) => Ok(serde_json::from_str(&raw)?),
    }
}

/// Append one attempt to the log.
#[tracing::instrument(skip(storage, attempt), fields(topic = %attempt.topic))]
pub fn record_attempt(
    storage: &mut dyn KeyValueStorage,
    attempt: QuizAttempt,
) -> EdubuilderResult<()> {
    let mut list = attempts(storage)?;
    list.push(attempt);
    storage.set(QUIZ_ATTEMPTS_KEY, serde_json::to_string(&list)?)
}

#[derive(Debug, Default)]
/// In-memory [`KeyValueStorage`].
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    /// Empty storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> EdubuilderResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/attempts.rs"]
mod tests;
