/// User domain types
use super::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of account on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// Publishes releases and tracks
    Artist,
    /// Browses and streams the catalog
    Fan,
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserType::Artist => write!(f, "artist"),
            UserType::Fan => write!(f, "fan"),
        }
    }
}

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier
    pub user_id: UserId,

    /// Account email address
    pub email: String,

    /// Account kind
    pub user_type: UserType,

    /// Optional artist/fan biography
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_type_wire_format_is_lowercase() {
        assert_eq!(serde_json::to_string(&UserType::Artist).unwrap(), "\"artist\"");
        assert_eq!(serde_json::to_string(&UserType::Fan).unwrap(), "\"fan\"");

        let parsed: UserType = serde_json::from_str("\"artist\"").unwrap();
        assert_eq!(parsed, UserType::Artist);
    }

    #[test]
    fn user_round_trips_camel_case() {
        let json = r#"{"userId":"u-1","email":"a@b.c","userType":"fan"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.user_id.as_str(), "u-1");
        assert_eq!(user.user_type, UserType::Fan);
        assert!(user.bio.is_none());
    }
}
