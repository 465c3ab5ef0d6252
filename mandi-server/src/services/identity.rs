//! Identity Service
//!
//! Registration, credential check, session lifecycle and the simulated
//! verification workflow. Passwords are argon2-hashed at rest; the login
//! failure message is uniform so emails cannot be enumerated.

use crate::core::{AppError, AppResult, Config};
use crate::db::models::{Session, User, UserCreate, UserUpdate};
use crate::db::repository::{SessionRepository, UserRepository};
use crate::store::RecordStore;
use shared::{UserRole, VerificationStatus};
use validator::Validate;

#[derive(Clone)]
pub struct IdentityService {
    users: UserRepository,
    sessions: SessionRepository,
    config: Config,
}

impl IdentityService {
    pub fn new(store: RecordStore, config: Config) -> Self {
        Self {
            users: UserRepository::new(store.clone()),
            sessions: SessionRepository::new(store),
            config,
        }
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Register a new account
    ///
    /// Fails with a conflict if the email is already registered; the new
    /// account starts unverified with a pending verification state.
    pub fn register(&self, payload: UserCreate) -> AppResult<User> {
        payload.validate()?;

        let user = User {
            id: shared::util::generate_id("user"),
            email: payload.email,
            password_hash: User::hash_password(&payload.password)
                .map_err(|e| AppError::internal(format!("Password hashing failed: {}", e)))?,
            name: payload.name,
            phone: payload.phone,
            role: payload.role,
            business_name: payload.business_name,
            gst_number: payload.gst_number,
            address: payload.address,
            city: payload.city,
            state: payload.state,
            pincode: payload.pincode,
            documents: payload.documents,
            is_verified: false,
            verification_status: VerificationStatus::Pending,
            created_at: shared::util::now_iso(),
            profile_image: None,
        };

        let user = self.users.create(user)?;

        tracing::info!(
            user_id = %user.id,
            email = %user.email,
            role = %user.role,
            "User registered"
        );

        Ok(user)
    }

    /// Whether an email is already registered
    pub fn email_exists(&self, email: &str) -> AppResult<bool> {
        Ok(self.users.email_exists(email)?)
    }

    // =========================================================================
    // Sessions
    // =========================================================================

    /// Authenticate and open a session
    ///
    /// Overwrites the single session slot on success. Failure creates no
    /// session and reports the same message for unknown email and wrong
    /// password.
    pub fn login(&self, email: &str, password: &str) -> AppResult<Session> {
        let user = self
            .users
            .find_by_email(email)?
            .ok_or_else(AppError::invalid_credentials)?;

        let password_valid = user
            .verify_password(password)
            .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

        if !password_valid {
            return Err(AppError::invalid_credentials());
        }

        let session = Session {
            user_id: user.id.clone(),
            email: user.email.clone(),
            role: user.role,
            name: user.name.clone(),
            login_time: shared::util::now_iso(),
        };
        self.sessions.set(&session)?;

        tracing::info!(
            user_id = %user.id,
            email = %user.email,
            role = %user.role,
            "User logged in"
        );

        Ok(session)
    }

    /// Clear the session slot (idempotent)
    pub fn logout(&self) -> AppResult<()> {
        self.sessions.clear()?;
        tracing::info!("Session cleared");
        Ok(())
    }

    /// Current session, if any
    pub fn current_session(&self) -> AppResult<Option<Session>> {
        Ok(self.sessions.get()?)
    }

    /// User behind the current session
    ///
    /// `None` if no session exists or the referenced user is gone (users
    /// are never deleted, so in practice the latter cannot happen).
    pub fn current_user(&self) -> AppResult<Option<User>> {
        match self.sessions.get()? {
            Some(session) => Ok(self.users.find_by_id(&session.user_id)?),
            None => Ok(None),
        }
    }

    /// Dashboard route for a role
    pub fn dashboard_route(role: UserRole) -> &'static str {
        role.dashboard_route()
    }

    // =========================================================================
    // Verification workflow (simulated)
    // =========================================================================

    /// Schedule the pending→approved transition after the configured delay
    ///
    /// Simulates the document review workflow. Not cancellable and not
    /// idempotency-checked: scheduling twice performs two redundant writes.
    pub fn auto_verify(&self, user_id: &str) -> tokio::task::JoinHandle<()> {
        let users = self.users.clone();
        let user_id = user_id.to_string();
        let delay = self.config.verification_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let update = UserUpdate {
                is_verified: Some(true),
                verification_status: Some(VerificationStatus::Approved),
                ..Default::default()
            };
            match users.update(&user_id, update) {
                Ok(_) => tracing::info!(user_id = %user_id, "Verification approved"),
                Err(e) => tracing::warn!(user_id = %user_id, error = %e, "Auto-verify failed"),
            }
        })
    }

    /// Poll until the user's verification state turns terminal
    ///
    /// Re-reads the store on the configured interval; the only recurring
    /// behavior in the system.
    pub async fn watch_verification(&self, user_id: &str) -> AppResult<VerificationStatus> {
        loop {
            let user = self
                .users
                .find_by_id(user_id)?
                .ok_or_else(|| AppError::not_found("User not found"))?;

            if user.verification_status.is_terminal() {
                return Ok(user.verification_status);
            }
            tokio::time::sleep(self.config.verification_poll_interval).await;
        }
    }

    // =========================================================================
    // Account maintenance
    // =========================================================================

    /// Overwrite the password for the first user matching email
    pub fn reset_password(&self, email: &str, new_password: &str) -> AppResult<()> {
        if new_password.len() < 6 {
            return Err(AppError::validation(
                "Password must be at least 6 characters",
            ));
        }

        let hash = User::hash_password(new_password)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {}", e)))?;
        let user = self.users.set_password_hash(email, hash)?;

        tracing::info!(user_id = %user.id, "Password reset");
        Ok(())
    }

    /// Apply a partial profile update
    pub fn update_profile(&self, user_id: &str, update: UserUpdate) -> AppResult<User> {
        Ok(self.users.update(user_id, update)?)
    }

    /// Look up a user by id
    pub fn user_by_id(&self, user_id: &str) -> AppResult<Option<User>> {
        Ok(self.users.find_by_id(user_id)?)
    }
}
