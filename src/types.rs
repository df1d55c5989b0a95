use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::Error;

/// Access tier assigned to a user.
///
/// A closed set with a total order: `Customer < Admin`. The authorization
/// rule is asymmetric — an `Admin` requirement is satisfied only by an
/// admin, while a `Customer` requirement (the default) is satisfied by any
/// authenticated user.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Role {
    /// Least-privileged role; the default for new accounts.
    #[default]
    Customer,
    /// Full access, including inventory and order management.
    Admin,
}

impl Role {
    /// Whether a user holding `self` satisfies a `required` role.
    #[must_use]
    pub fn satisfies(self, required: Role) -> bool {
        match required {
            Role::Admin => self == Role::Admin,
            Role::Customer => true,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Role::Customer => "Customer",
            Role::Admin => "Admin",
        })
    }
}

impl std::str::FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Customer" => Ok(Role::Customer),
            "Admin" => Ok(Role::Admin),
            other => Err(Error::UnknownRole(other.to_owned())),
        }
    }
}

/// Validated email address — the session's identity claim and the unique
/// user lookup key.
///
/// Guaranteed well-formed by construction: holding an `Email` proves there
/// is exactly one `@` with a non-empty local part and domain, and no
/// whitespace. Lowercased on construction so lookups are case-insensitive.
/// Use `"a@x.com".parse::<Email>()` or `Email::try_from(string)` to create.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for Email {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        let normalized = s.to_ascii_lowercase();
        if is_well_formed(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(Error::InvalidEmail(s))
        }
    }
}

impl From<Email> for String {
    fn from(e: Email) -> Self {
        e.0
    }
}

fn is_well_formed(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    s.len() <= 254
        && !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && s.bytes().all(|b| !b.is_ascii_whitespace() && !b.is_ascii_control())
}

/// Persistent user identifier (ULID).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, FromStr, From, Into,
)]
#[serde(transparent)]
pub struct UserId(pub Ulid);

/// Consumer-defined session identifier (opaque string).
///
/// Returned by [`SessionStore::create`](crate::middleware::SessionStore::create).
/// The consumer chooses the format (ULID, UUID, etc.).
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into,
)]
#[serde(transparent)]
pub struct SessionId(pub String);
