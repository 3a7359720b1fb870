//! User model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub nickname: String,
    pub is_enable: bool,
    pub is_admin: bool,
    pub phone: Option<String>,
    pub qq: Option<String>,
    pub t_shirt: Option<String>,
}

/// Minimal user identity used in rosters and standings
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UserSimple {
    pub username: String,
    pub nickname: String,
}

/// T-shirt size enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TShirtSize {
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
    Xxxl,
}

impl TShirtSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xs => "XS",
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::Xl => "XL",
            Self::Xxl => "XXL",
            Self::Xxxl => "XXXL",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "XS" => Some(Self::Xs),
            "S" => Some(Self::S),
            "M" => Some(Self::M),
            "L" => Some(Self::L),
            "XL" => Some(Self::Xl),
            "XXL" => Some(Self::Xxl),
            "XXXL" => Some(Self::Xxxl),
            _ => None,
        }
    }
}

impl std::fmt::Display for TShirtSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_shirt_round_trip() {
        for s in ["XS", "S", "M", "L", "XL", "XXL", "XXXL"] {
            assert_eq!(TShirtSize::from_str(s).unwrap().as_str(), s);
        }
        assert!(TShirtSize::from_str("HUGE").is_none());
    }
}
