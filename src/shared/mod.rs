//! Shared types used across all domain modules.
//!
//! Newtypes here serialize identically to the raw values the backend sends,
//! so they can be used directly in wire types without conversion.

pub mod query;
pub mod serde_util;

pub use query::{QueryParams, QueryValue};

use serde::{Deserialize, Serialize};

// ─── Role ────────────────────────────────────────────────────────────────────

/// Which side of the application a session belongs to.
///
/// Each role owns its own pair of persisted keys; see
/// [`SessionKeys`](crate::session::SessionKeys).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Back-office administrator.
    Admin,
    /// End user: member, agent, or referrer.
    #[default]
    Member,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }

    /// The other namespace.
    pub fn alternate(&self) -> Self {
        match self {
            Self::Admin => Self::Member,
            Self::Member => Self::Admin,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "member" | "user" => Ok(Self::Member),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

// ─── PromoCode ───────────────────────────────────────────────────────────────

/// Referral code identifying a user in the referral hierarchy.
///
/// Admin endpoints address members and agents by promo code rather than by
/// numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromoCode(String);

impl PromoCode {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PromoCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PromoCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PromoCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ─── Page ────────────────────────────────────────────────────────────────────

/// One page of a list endpoint.
///
/// `list` is always present. Paged endpoints add `total`, `page` and
/// `pageSize`; dashboard lists add a `stats` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<serde_json::Value>,
}

impl<T> Page<T> {
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

/// Percent-encode a caller-supplied identifier for use as one path segment.
pub(crate) fn path_segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}
