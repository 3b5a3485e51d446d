//! Wire types for the member's downline: non-members and subordinates.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::shared::serde_util::local_datetime_opt;

/// Body of `POST /users/nonmembers`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct AddNonMemberRequest<'a> {
    pub name: &'a str,
    /// Sent as `""` when there is none.
    pub link: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpgradeToOrdinaryRequest<'a> {
    pub non_member_id: i64,
    pub phone: &'a str,
}

/// A referred person who has not registered. Orders are submitted on
/// their behalf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonMember {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub owner_id: Option<i64>,
    #[serde(default, with = "local_datetime_opt")]
    pub created_at: Option<NaiveDateTime>,
}

/// `data` of `GET /users/nonmembers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NonMemberList {
    #[serde(default)]
    pub list: Vec<NonMember>,
}
