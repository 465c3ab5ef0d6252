//! Session Repository
//!
//! Single-slot session storage: login overwrites, logout clears. The slot
//! key is fixed; there is never more than one session record.

use super::{BaseRepository, RepoResult, SESSION};
use crate::db::models::Session;
use crate::store::RecordStore;

const SLOT: &str = "current";

#[derive(Clone)]
pub struct SessionRepository {
    base: BaseRepository,
}

impl SessionRepository {
    pub fn new(store: RecordStore) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Overwrite the session slot
    pub fn set(&self, session: &Session) -> RepoResult<()> {
        self.base.store().put(SESSION, SLOT, session)?;
        Ok(())
    }

    /// Current session, if any
    pub fn get(&self) -> RepoResult<Option<Session>> {
        Ok(self.base.store().get(SESSION, SLOT)?)
    }

    /// Clear the slot unconditionally (idempotent)
    pub fn clear(&self) -> RepoResult<()> {
        self.base.store().remove(SESSION, SLOT)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::UserRole;

    fn test_session(user_id: &str) -> Session {
        Session {
            user_id: user_id.to_string(),
            email: "a@demo.com".into(),
            role: UserRole::Consumer,
            name: "Test".into(),
            login_time: shared::util::now_iso(),
        }
    }

    #[test]
    fn test_single_slot_overwrite() {
        let repo = SessionRepository::new(RecordStore::open_in_memory().unwrap());
        assert!(repo.get().unwrap().is_none());

        repo.set(&test_session("user_1")).unwrap();
        repo.set(&test_session("user_2")).unwrap();

        let session = repo.get().unwrap().unwrap();
        assert_eq!(session.user_id, "user_2");
    }

    #[test]
    fn test_clear_idempotent() {
        let repo = SessionRepository::new(RecordStore::open_in_memory().unwrap());
        repo.set(&test_session("user_1")).unwrap();

        repo.clear().unwrap();
        assert!(repo.get().unwrap().is_none());
        // Second clear is a no-op, not an error
        repo.clear().unwrap();
    }
}
