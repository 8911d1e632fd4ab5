//! Author Entity
//!
//! The platform's identity entity. Local accounts carry a password hash,
//! federation-only accounts carry a provider subject id; both may coexist.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::value_object::{
    author_id::AuthorId, author_password::AuthorPassword, author_role::AuthorRole, avatar,
    email::Email,
};

/// Author entity
///
/// `role` is only ever changed through [`Author::set_role`]; the
/// self-service profile update path does not call it.
#[derive(Debug, Clone)]
pub struct Author {
    /// Internal UUID identifier, immutable
    pub author_id: AuthorId,
    /// Display name
    pub name: String,
    /// Login key, unique across authors
    pub email: Email,
    /// Argon2id hash; None for federation-only accounts
    pub password_hash: Option<AuthorPassword>,
    /// External provider subject id
    pub federated_id: Option<String>,
    /// Role (Author, Admin)
    pub role: AuthorRole,
    /// Birth date
    pub birth_date: Option<NaiveDate>,
    /// Avatar URL
    pub avatar: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Author {
    /// Create a locally-registered author
    pub fn new_local(
        name: String,
        email: Email,
        password_hash: AuthorPassword,
        birth_date: Option<NaiveDate>,
        avatar_url: Option<String>,
    ) -> Self {
        let now = Utc::now();
        let avatar = avatar_url.unwrap_or_else(|| avatar::default_avatar_url(&name));

        Self {
            author_id: AuthorId::new(),
            name,
            email,
            password_hash: Some(password_hash),
            federated_id: None,
            role: AuthorRole::default(),
            birth_date,
            avatar,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create an author from a first federated sign-in
    pub fn new_federated(
        name: String,
        email: Email,
        federated_id: String,
        avatar_url: Option<String>,
    ) -> Self {
        let now = Utc::now();
        let avatar = avatar_url.unwrap_or_else(|| avatar::default_avatar_url(&name));

        Self {
            author_id: AuthorId::new(),
            name,
            email,
            password_hash: None,
            federated_id: Some(federated_id),
            role: AuthorRole::default(),
            birth_date: None,
            avatar,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the account can sign in with email + password
    pub fn has_local_credentials(&self) -> bool {
        self.password_hash.is_some()
    }

    /// Update display name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.touch();
    }

    /// Update login email
    pub fn set_email(&mut self, email: Email) {
        self.email = email;
        self.touch();
    }

    /// Replace the password hash (already re-derived by the caller)
    pub fn set_password(&mut self, password_hash: AuthorPassword) {
        self.password_hash = Some(password_hash);
        self.touch();
    }

    /// Update role. Admin-only operation; never reachable from
    /// self-service updates.
    pub fn set_role(&mut self, role: AuthorRole) {
        self.role = role;
        self.touch();
    }

    /// Update birth date
    pub fn set_birth_date(&mut self, birth_date: NaiveDate) {
        self.birth_date = Some(birth_date);
        self.touch();
    }

    /// Update avatar URL
    pub fn set_avatar(&mut self, avatar: String) {
        self.avatar = avatar;
        self.touch();
    }

    /// Attach a federated identity to an existing account
    pub fn link_federated_id(&mut self, federated_id: String) {
        self.federated_id = Some(federated_id);
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
