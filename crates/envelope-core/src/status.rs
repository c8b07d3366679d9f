// Rust guideline compliant 2026-10-18

//! Status table for response envelopes.
//!
//! The set of status classes is closed. Name lookup is two-stage: the input
//! is lowercased and passed through the alias table, then matched against the
//! symbolic names of the classes. Anything else is rejected.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A well-known HTTP status with a fixed code and default phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusClass {
    /// 200 OK.
    Ok,
    /// 201 Created.
    Created,
    /// 202 Accepted.
    Accepted,
    /// 204 No Content.
    NoContent,
    /// 301 Moved Permanently.
    MovedPermanently,
    /// 302 Found.
    Found,
    /// 304 Not Modified.
    NotModified,
    /// 400 Bad Request.
    BadRequest,
    /// 401 Unauthorized.
    Unauthorized,
    /// 403 Forbidden.
    Forbidden,
    /// 404 Not Found.
    NotFound,
    /// 500 Internal Server Error.
    InternalServerError,
}

/// Alternate names accepted during lookup, mapped to their canonical
/// lowercase symbolic name.
const ALIASES: &[(&str, &str)] = &[
    ("unauth", "unauthorized"),
    ("redirect", "found"),
    ("server_err", "internal_server_error"),
    ("server_error", "internal_server_error"),
];

impl StatusClass {
    /// Every status class, ordered by code.
    pub const ALL: [StatusClass; 12] = [
        StatusClass::Ok,
        StatusClass::Created,
        StatusClass::Accepted,
        StatusClass::NoContent,
        StatusClass::MovedPermanently,
        StatusClass::Found,
        StatusClass::NotModified,
        StatusClass::BadRequest,
        StatusClass::Unauthorized,
        StatusClass::Forbidden,
        StatusClass::NotFound,
        StatusClass::InternalServerError,
    ];

    /// Returns the numeric HTTP status code.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            StatusClass::Ok => 200,
            StatusClass::Created => 201,
            StatusClass::Accepted => 202,
            StatusClass::NoContent => 204,
            StatusClass::MovedPermanently => 301,
            StatusClass::Found => 302,
            StatusClass::NotModified => 304,
            StatusClass::BadRequest => 400,
            StatusClass::Unauthorized => 401,
            StatusClass::Forbidden => 403,
            StatusClass::NotFound => 404,
            StatusClass::InternalServerError => 500,
        }
    }

    /// Returns the default human-readable phrase.
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            StatusClass::Ok => "OK",
            StatusClass::Created => "Created",
            StatusClass::Accepted => "Accepted",
            StatusClass::NoContent => "No Content",
            StatusClass::MovedPermanently => "Moved Permanently",
            StatusClass::Found => "Found",
            StatusClass::NotModified => "Not Modified",
            StatusClass::BadRequest => "Bad Request",
            StatusClass::Unauthorized => "Unauthorized",
            StatusClass::Forbidden => "Forbidden",
            StatusClass::NotFound => "Not Found",
            StatusClass::InternalServerError => "Internal Server Error",
        }
    }

    /// Returns the symbolic name, e.g. `BAD_REQUEST`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            StatusClass::Ok => "OK",
            StatusClass::Created => "CREATED",
            StatusClass::Accepted => "ACCEPTED",
            StatusClass::NoContent => "NO_CONTENT",
            StatusClass::MovedPermanently => "MOVED_PERMANENTLY",
            StatusClass::Found => "FOUND",
            StatusClass::NotModified => "NOT_MODIFIED",
            StatusClass::BadRequest => "BAD_REQUEST",
            StatusClass::Unauthorized => "UNAUTHORIZED",
            StatusClass::Forbidden => "FORBIDDEN",
            StatusClass::NotFound => "NOT_FOUND",
            StatusClass::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Looks a class up by numeric code.
    #[must_use]
    pub fn from_code(code: u16) -> Option<StatusClass> {
        StatusClass::ALL.into_iter().find(|class| class.code() == code)
    }

    /// Resolves a status name, case-insensitively and alias-aware.
    ///
    /// # Arguments
    ///
    /// * `name` - Symbolic name (`not_found`, `NOT_FOUND`) or alias (`unauth`)
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStatus`] carrying the original name if it is
    /// neither a symbolic name nor an alias.
    pub fn resolve(name: &str) -> Result<StatusClass> {
        let lowered = name.trim().to_ascii_lowercase();
        let canonical = ALIASES
            .iter()
            .find(|(alias, _)| *alias == lowered)
            .map_or(lowered.as_str(), |(_, target)| *target);

        StatusClass::ALL
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(canonical))
            .ok_or_else(|| Error::UnknownStatus(name.to_string()))
    }
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.phrase())
    }
}

impl FromStr for StatusClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        StatusClass::resolve(s)
    }
}
