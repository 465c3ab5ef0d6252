//! User Model

use serde::{Deserialize, Serialize};
use shared::{UserRole, VerificationStatus};
use validator::Validate;

/// Registered platform account
///
/// Users are mutated in place by profile updates and password resets and
/// are never deleted. The password is stored as an argon2 hash only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub phone: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
    #[serde(default, skip_serializing_if = "Documents::is_empty")]
    pub documents: Documents,
    pub is_verified: bool,
    pub verification_status: VerificationStatus,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

/// Uploaded document references (string placeholders, not real files)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Documents {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aadhaar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub land_documents: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fssai: Option<String>,
}

impl Documents {
    pub fn is_empty(&self) -> bool {
        self.aadhaar.is_none()
            && self.land_documents.is_none()
            && self.business_license.is_none()
            && self.gst.is_none()
            && self.fssai.is_none()
    }
}

/// Registration payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserCreate {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 10, message = "Phone number must be at least 10 digits"))]
    pub phone: String,
    pub role: UserRole,
    pub business_name: Option<String>,
    pub gst_number: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    #[serde(default)]
    pub documents: Documents,
}

/// Partial profile update
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub business_name: Option<String>,
    pub gst_number: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub documents: Option<Documents>,
    pub is_verified: Option<bool>,
    pub verification_status: Option<VerificationStatus>,
    pub profile_image: Option<String>,
}

impl User {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.password_hash)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }

    /// Apply a partial update in place
    pub fn apply(&mut self, update: UserUpdate) {
        if let Some(v) = update.name {
            self.name = v;
        }
        if let Some(v) = update.phone {
            self.phone = v;
        }
        if let Some(v) = update.business_name {
            self.business_name = Some(v);
        }
        if let Some(v) = update.gst_number {
            self.gst_number = Some(v);
        }
        if let Some(v) = update.address {
            self.address = Some(v);
        }
        if let Some(v) = update.city {
            self.city = Some(v);
        }
        if let Some(v) = update.state {
            self.state = Some(v);
        }
        if let Some(v) = update.pincode {
            self.pincode = Some(v);
        }
        if let Some(v) = update.documents {
            self.documents = v;
        }
        if let Some(v) = update.is_verified {
            self.is_verified = v;
        }
        if let Some(v) = update.verification_status {
            self.verification_status = v;
        }
        if let Some(v) = update.profile_image {
            self.profile_image = Some(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let hash = User::hash_password("demo123").unwrap();
        assert_ne!(hash, "demo123");

        let user = User {
            id: "user_1".into(),
            email: "a@b.com".into(),
            password_hash: hash,
            name: "A".into(),
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
        };

        assert!(user.verify_password("demo123").unwrap());
        assert!(!user.verify_password("wrong").unwrap());
    }

    #[test]
    fn test_apply_partial_update() {
        let mut user = User {
            id: "user_1".into(),
            email: "a@b.com".into(),
            password_hash: "hash".into(),
            name: "Old Name".into(),
            phone: "9876543210".into(),
            role: UserRole::Farmer,
            business_name: Some("Green Fields Farm".into()),
            gst_number: None,
            address: None,
            city: Some("Dharwad".into()),
            state: Some("Karnataka".into()),
            pincode: None,
            documents: Documents::default(),
            is_verified: false,
            verification_status: VerificationStatus::Pending,
            created_at: shared::util::now_iso(),
            profile_image: None,
        };

        user.apply(UserUpdate {
            name: Some("New Name".into()),
            city: Some("Hubli".into()),
            ..Default::default()
        });

        // Set fields are applied
        assert_eq!(user.name, "New Name");
        assert_eq!(user.city.as_deref(), Some("Hubli"));
        // Unset fields survive untouched
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.phone, "9876543210");
        assert_eq!(user.business_name.as_deref(), Some("Green Fields Farm"));
        assert_eq!(user.state.as_deref(), Some("Karnataka"));
        assert!(!user.is_verified);
        assert_eq!(user.verification_status, VerificationStatus::Pending);
    }

    #[test]
    fn test_create_validation() {
        use validator::Validate;

        let mut payload = UserCreate {
            email: "farmer@example.com".into(),
            password: "secret1".into(),
            name: "Farmer".into(),
            phone: "9876543210".into(),
            role: UserRole::Farmer,
            business_name: None,
            gst_number: None,
            address: None,
            city: None,
            state: None,
            pincode: None,
            documents: Documents::default(),
        };
        assert!(payload.validate().is_ok());

        payload.email = "not-an-email".into();
        assert!(payload.validate().is_err());
    }
}
