//! Employee Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Employment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

impl EmployeeStatus {
    /// All selectable statuses, in display order
    pub const ALL: [EmployeeStatus; 2] = [EmployeeStatus::Active, EmployeeStatus::Inactive];

    /// Wire value (`"active"` / `"inactive"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Human-readable label for selectors
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a known status
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown employee status: {0:?}")]
pub struct ParseStatusError(pub String);

impl FromStr for EmployeeStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// Employee record as returned by `GET /employees/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: EmployeeStatus,
}

/// Create / full-replacement update payload
///
/// Always carries all four fields; `PUT` replaces the whole record.
pub type EmployeePayload = Employee;
