//! Post-login redirect targets per user role.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Instructor,
    Student,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown role: {0}")]
pub struct RoleParseError(pub String);

impl Role {
    /// Resolves a role from profile flags. Admin wins over instructor.
    pub fn from_flags(is_admin: bool, is_instructor: bool) -> Self {
        if is_admin {
            Role::Admin
        } else if is_instructor {
            Role::Instructor
        } else {
            Role::Student
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Instructor => "instructor",
            Role::Student => "student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "instructor" => Ok(Role::Instructor),
            "student" => Ok(Role::Student),
            _ => Err(RoleParseError(s.to_string())),
        }
    }
}

/// Route a user lands on after signing in.
pub fn redirect_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin",
        Role::Instructor => "/instructor/dashboard",
        Role::Student => "/dashboard",
    }
}
