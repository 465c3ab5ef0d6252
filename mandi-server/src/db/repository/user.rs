//! User Repository

use super::{BaseRepository, RepoError, RepoResult, USERS};
use crate::db::models::{User, UserUpdate};
use crate::store::RecordStore;

// =============================================================================
// User Repository
// =============================================================================

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(store: RecordStore) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// All registered users
    pub fn find_all(&self) -> RepoResult<Vec<User>> {
        Ok(self.base.store().list(USERS)?)
    }

    /// Find user by id
    pub fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        Ok(self.base.store().get(USERS, id)?)
    }

    /// Find user by email (case-sensitive exact match, linear scan)
    pub fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self.find_all()?.into_iter().find(|u| u.email == email))
    }

    /// Whether an email is already registered
    pub fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.find_by_email(email)?.is_some())
    }

    /// Insert a new user, enforcing email uniqueness
    pub fn create(&self, user: User) -> RepoResult<User> {
        if self.email_exists(&user.email)? {
            return Err(RepoError::Duplicate("Email already registered".into()));
        }
        self.base.store().put(USERS, &user.id, &user)?;
        Ok(user)
    }

    /// Apply a partial update to an existing user
    pub fn update(&self, id: &str, update: UserUpdate) -> RepoResult<User> {
        let mut user = self
            .find_by_id(id)?
            .ok_or_else(|| RepoError::NotFound("User not found".into()))?;
        user.apply(update);
        self.base.store().put(USERS, id, &user)?;
        Ok(user)
    }

    /// Replace the stored password hash for the first user matching email
    pub fn set_password_hash(&self, email: &str, password_hash: String) -> RepoResult<User> {
        let mut user = self
            .find_by_email(email)?
            .ok_or_else(|| RepoError::NotFound("Email not found".into()))?;
        user.password_hash = password_hash;
        self.base.store().put(USERS, &user.id, &user)?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::Documents;
    use shared::{UserRole, VerificationStatus};

    fn test_user(id: &str, email: &str) -> User {
        User {
            id: id.to_string(),
            email: email.to_string(),
            password_hash: "hash".into(),
            name: "Test".into(),
            phone: "9876543210".into(),
            role: UserRole::Consumer,
            business_name: None,
            gst_number: None,
            address: None,
            city: None,
            state: None,
            pincode: None,
            documents: Documents::default(),
            is_verified: false,
            verification_status: VerificationStatus::Pending,
            created_at: shared::util::now_iso(),
            profile_image: None,
        }
    }

    #[test]
    fn test_create_and_find() {
        let repo = UserRepository::new(RecordStore::open_in_memory().unwrap());
        repo.create(test_user("user_1", "a@demo.com")).unwrap();

        assert!(repo.find_by_id("user_1").unwrap().is_some());
        assert!(repo.find_by_email("a@demo.com").unwrap().is_some());
        // Case-sensitive match
        assert!(repo.find_by_email("A@demo.com").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let repo = UserRepository::new(RecordStore::open_in_memory().unwrap());
        repo.create(test_user("user_1", "a@demo.com")).unwrap();

        let err = repo.create(test_user("user_2", "a@demo.com")).unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
        assert_eq!(repo.find_all().unwrap().len(), 1);
    }

    #[test]
    fn test_update_missing_user() {
        let repo = UserRepository::new(RecordStore::open_in_memory().unwrap());
        let err = repo.update("nope", UserUpdate::default()).unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }
}
