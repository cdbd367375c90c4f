//! Wire models for the checklist API.

use serde::{Deserialize, Serialize};

/// A named, user-owned collection of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    pub id: i64,
    pub name: String,
}

/// A unit of work inside a checklist, with a binary completion state.
///
/// The server is inconsistent about item field names, so both spellings are
/// accepted on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: i64,
    #[serde(rename = "itemName", alias = "name")]
    pub name: String,
    #[serde(rename = "itemCompletionStatus", alias = "completionStatus", default)]
    pub done: bool,
}

/// The `{ "data": … }` envelope every read endpoint wraps its payload in.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenPayload {
    pub token: String,
}

/// Error bodies may carry a human-readable message; everything else in them
/// is ignored.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RegisterRequest<'a> {
    pub email: &'a str,
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewChecklist<'a> {
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ItemName<'a> {
    #[serde(rename = "itemName")]
    pub item_name: &'a str,
}

/// The toggle endpoint expects an empty JSON object; the server flips the
/// completion state itself.
#[derive(Debug, Serialize)]
pub(crate) struct Empty {}
