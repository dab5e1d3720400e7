//! Persisted-sequence store.
//!
//! [`AnimationStore`] is the capability set the studio needs from its
//! backing table: create, read, list-by-owner, list-public, search, update,
//! delete. Every operation takes the caller's [`Session`] explicitly rather
//! than consulting ambient state, so authentication-required failures are
//! explicit and testable without a real backend. Calls are fire-and-once:
//! no retries, no dedup; failures propagate unchanged to the caller.
//!
//! [`MemoryStore`] is the in-crate implementation, used as the offline
//! library and as a test double for remote backends.

use std::collections::BTreeMap;

use crate::{
    foundation::error::{EdubuilderError, EdubuilderResult},
    sequence::model::{AnimationSequence, Difficulty},
};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Opaque owner identity.
pub struct UserId(pub String);

#[derive(Clone, Debug, Default)]
/// Caller session. `user` is `None` when nobody is signed in.
pub struct Session {
    /// Authenticated user, if any.
    pub user: Option<UserId>,
}

impl Session {
    /// Session for a signed-in user.
    pub fn authenticated(user_id: impl Into<String>) -> Self {
        Self {
            user: Some(UserId(user_id.into())),
        }
    }

    /// Session with nobody signed in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// The signed-in user, or [`EdubuilderError::NotAuthenticated`].
    pub fn require_user(&self) -> EdubuilderResult<&UserId> {
        self.user.as_ref().ok_or(EdubuilderError::NotAuthenticated)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One persisted sequence record.
///
/// Title, description, topic, difficulty, and tags are denormalized from the
/// sequence for listing and search; `data` holds the full sequence.
pub struct StoredAnimation {
    /// Record identifier (the sequence id).
    pub id: String,
    /// Owning user.
    pub owner: UserId,
    /// Denormalized title.
    pub title: String,
    /// Denormalized description.
    pub description: Option<String>,
    /// Denormalized topic.
    pub topic: String,
    /// Denormalized difficulty.
    pub difficulty: Option<Difficulty>,
    /// Denormalized tags.
    pub tags: Option<Vec<String>>,
    /// Whether the record is publicly listed and searchable.
    pub is_public: bool,
    /// Full sequence payload.
    pub data: AnimationSequence,
    /// Creation stamp (monotonic per store).
    pub created_at: u64,
    /// Last-update stamp (monotonic per store).
    pub updated_at: u64,
}

/// Capability set over the persisted-sequence table.
pub trait AnimationStore {
    /// Persist a new sequence owned by the session user.
    fn create(
        &mut self,
        session: &Session,
        sequence: &AnimationSequence,
        is_public: bool,
    ) -> EdubuilderResult<StoredAnimation>;

    /// Fetch one record by id, public or not. `Ok(None)` when absent.
    fn get(&self, id: &str) -> EdubuilderResult<Option<StoredAnimation>>;

    /// All records owned by the session user, newest first.
    fn list_by_owner(&self, session: &Session) -> EdubuilderResult<Vec<StoredAnimation>>;

    /// All public records, newest first.
    fn list_public(&self) -> EdubuilderResult<Vec<StoredAnimation>>;

    /// Public records whose title, description, or topic contains `query`
    /// (case-insensitive substring), newest first.
    fn search(&self, query: &str) -> EdubuilderResult<Vec<StoredAnimation>>;

    /// Public records with an exact topic match, newest first.
    fn list_by_topic(&self, topic: &str) -> EdubuilderResult<Vec<StoredAnimation>>;

    /// Replace the sequence payload of a record owned by the session user.
    fn update(
        &mut self,
        session: &Session,
        id: &str,
        sequence: &AnimationSequence,
    ) -> EdubuilderResult<StoredAnimation>;

    /// Delete a record owned by the session user.
    fn delete(&mut self, session: &Session, id: &str) -> EdubuilderResult<()>;
}

#[derive(Debug, Default)]
/// In-memory [`AnimationStore`].
///
/// Stamps use a per-store logical clock, so "newest first" orderings are
/// deterministic under test.
pub struct MemoryStore {
    records: BTreeMap<String, StoredAnimation>,
    clock: u64,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records, public and private.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn newest_first(mut records: Vec<StoredAnimation>) -> Vec<StoredAnimation> {
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records
    }
}

impl AnimationStore for MemoryStore {
    #[tracing::instrument(skip(self, session, sequence), fields(sequence_id = %sequence.id))]
    fn create(
        &mut self,
        session: &Session,
        sequence: &AnimationSequence,
        is_public: bool,
    ) -> EdubuilderResult<StoredAnimation> {
        let owner = session.require_user()?.clone();
        sequence.validate()?;
        if self.records.contains_key(&sequence.id) {
            return Err(EdubuilderError::store(format!(
                "record '{}' already exists",
                sequence.id
            )));
        }
        let stamp = self.tick();
        let record = StoredAnimation {
            id: sequence.id.clone(),
            owner,
            title: sequence.title.clone(),
            description: sequence.description.clone(),
            topic: sequence.topic.clone(),
            difficulty: sequence.difficulty,
            tags: sequence.tags.clone(),
            is_public,
            data: sequence.clone(),
            created_at: stamp,
            updated_at: stamp,
        };
        self.records.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn get(&self, id: &str) -> EdubuilderResult<Option<StoredAnimation>> {
        Ok(self.records.get(id).cloned())
    }

    fn list_by_owner(&self, session: &Session) -> EdubuilderResult<Vec<StoredAnimation>> {
        let user = session.require_user()?;
        Ok(Self::newest_first(
            self.records
                .values()
                .filter(|r| &r.owner == user)
                .cloned()
                .collect(),
        ))
    }

    fn list_public(&self) -> EdubuilderResult<Vec<StoredAnimation>> {
        Ok(Self::newest_first(
            self.records
                .values()
                .filter(|r| r.is_public)
                .cloned()
                .collect(),
        ))
    }

    fn search(&self, query: &str) -> EdubuilderResult<Vec<StoredAnimation>> {
        let needle = query.to_lowercase();
        Ok(Self::newest_first(
            self.records
                .values()
                .filter(|r| r.is_public)
                .filter(|r| {
                    r.title.to_lowercase().contains(&needle)
                        || r.description
                            .as_deref()
                            .is_some_and(|d| d.to_lowercase().contains(&needle))
                        || r.topic.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect(),
        ))
    }

    fn list_by_topic(&self, topic: &str) -> EdubuilderResult<Vec<StoredAnimation>> {
        Ok(Self::newest_first(
            self.records
                .values()
                .filter(|r| r.is_public && r.topic == topic)
                .cloned()
                .collect(),
        ))
    }

    #[tracing::instrument(skip(self, session, sequence), fields(record_id = id))]
    fn update(
        &mut self,
        session: &Session,
        id: &str,
        sequence: &AnimationSequence,
    ) -> EdubuilderResult<StoredAnimation> {
        let user = session.require_user()?.clone();
        sequence.validate()?;
        let stamp = self.tick();
        let record = self
            .records
            .get_mut(id)
            .filter(|r| r.owner == user)
            .ok_or_else(|| {
                EdubuilderError::store(format!("no record '{id}' owned by '{}'", user.0))
            })?;
        record.title = sequence.title.clone();
        record.description = sequence.description.clone();
        record.topic = sequence.topic.clone();
        record.difficulty = sequence.difficulty;
        record.tags = sequence.tags.clone();
        record.data = sequence.clone();
        record.updated_at = stamp;
        Ok(record.clone())
    }

    #[tracing::instrument(skip(self, session), fields(record_id = id))]
    fn delete(&mut self, session: &Session, id: &str) -> EdubuilderResult<()> {
        let user = session.require_user()?;
        let owned = self
            .records
            .get(id)
            .is_some_and(|record| &record.owner == user);
        if !owned {
            return Err(EdubuilderError::store(format!(
                "no record '{id}' owned by '{}'",
                user.0
            )));
        }
        self.records.remove(id);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/client.rs"]
mod tests;
