//! Author entity: the identity record behind every credential check.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::claims::IdentityClaim;

/// Access level of an author
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Regular author, may only manage their own record
    #[default]
    User,
    /// Administrator, may manage every author
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Admin => "Admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Author entity representing a registered blog author
///
/// The password hash is private: it can be read by storage adapters but only
/// replaced through the credential store, and it is never part of any
/// serialized form. Use [`Author::profile`] to externalize an author.
#[derive(Clone, PartialEq, Eq)]
pub struct Author {
    /// Unique identifier for the author
    pub id: Uuid,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Unique login name
    pub user_name: String,

    /// Access level
    pub role: Role,

    /// Timestamp when the author was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the author was last updated
    pub updated_at: DateTime<Utc>,

    password_hash: String,
}

impl Author {
    /// Creates a new author with role `User`
    pub(crate) fn new(
        first_name: String,
        last_name: String,
        user_name: String,
        password_hash: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            user_name,
            role: Role::User,
            created_at: now,
            updated_at: now,
            password_hash,
        }
    }

    /// Rebuilds an author from persisted fields
    ///
    /// Intended for storage adapters mapping rows back into entities.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: Uuid,
        first_name: String,
        last_name: String,
        user_name: String,
        password_hash: String,
        role: Role,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            user_name,
            role,
            created_at,
            updated_at,
            password_hash,
        }
    }

    /// The stored bcrypt hash
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Replaces the stored hash; only the credential store computes hashes
    pub(crate) fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.touch();
    }

    /// Updates the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Checks if the author is an administrator
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// The identity claim carried by requests authenticated as this author
    pub fn claim(&self) -> IdentityClaim {
        IdentityClaim {
            id: self.id,
            role: self.role,
        }
    }

    /// Externalized form without any credential material
    pub fn profile(&self) -> AuthorProfile {
        AuthorProfile::from(self)
    }
}

impl std::fmt::Debug for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Author")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("user_name", &self.user_name)
            .field("role", &self.role)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// Public view of an author, safe to return to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorProfile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Author> for AuthorProfile {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id,
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
            user_name: author.user_name.clone(),
            role: author.role,
            created_at: author.created_at,
            updated_at: author.updated_at,
        }
    }
}

impl From<Author> for AuthorProfile {
    fn from(author: Author) -> Self {
        Self::from(&author)
    }
}
