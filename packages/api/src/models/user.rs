//! # User records and profile payloads
//!
//! [`User`] mirrors the backend's user response. It is replaced wholesale
//! whenever the backend returns a fresh copy (profile edit, mode toggle) and
//! never patched field by field on the client.
//!
//! `skills` and `interests` are kept exactly as received (JSON text); use
//! [`User::skills`] / [`User::interests`] for the decoded lists.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::decode_list;

/// Which side of the marketplace a user is acting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Posts opportunities.
    Builder,
    /// Applies to opportunities.
    Hustler,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Builder => Mode::Hustler,
            Mode::Hustler => Mode::Builder,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Builder => "builder",
            Mode::Hustler => "hustler",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Builder => "Builder",
            Mode::Hustler => "Hustler",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User identity and profile as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub full_name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub interests: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    pub mode: Mode,
    pub created_at: String,
}

impl User {
    pub fn skills(&self) -> Vec<String> {
        decode_list(self.skills.as_deref())
    }

    pub fn interests(&self) -> Vec<String> {
        decode_list(self.interests.as_deref())
    }

    /// Full name, falling back to the username when blank.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.username
        } else {
            &self.full_name
        }
    }
}

/// Body of `PUT /profile/me`. Unset fields are left untouched by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

/// Body of `POST /profile/mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeToggle {
    pub mode: Mode,
}

/// Query parameters of `GET /network`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NetworkQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
}

impl NetworkQuery {
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode: Some(mode),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json(skills: &str) -> String {
        format!(
            r#"{{
                "id": 7,
                "email": "ada@uni.edu",
                "username": "ada",
                "full_name": "Ada Lovelace",
                "bio": null,
                "skills": {skills},
                "interests": null,
                "profile_image": null,
                "mode": "builder",
                "created_at": "2025-01-15T10:00:00"
            }}"#
        )
    }

    #[test]
    fn test_deserialize_user() {
        let user: User = serde_json::from_str(&sample_json(r#""[\"rust\",\"sql\"]""#)).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.mode, Mode::Builder);
        assert_eq!(user.skills(), vec!["rust", "sql"]);
        assert!(user.interests().is_empty());
        assert_eq!(user.display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_null_and_empty_skills_decode_empty() {
        let user: User = serde_json::from_str(&sample_json("null")).unwrap();
        assert!(user.skills().is_empty());

        let user: User = serde_json::from_str(&sample_json(r#""[]""#)).unwrap();
        assert!(user.skills().is_empty());
    }

    #[test]
    fn test_mode_wire_format() {
        assert_eq!(serde_json::to_string(&ModeToggle { mode: Mode::Hustler }).unwrap(), r#"{"mode":"hustler"}"#);
        assert_eq!(Mode::Builder.toggled(), Mode::Hustler);
        assert_eq!(Mode::Hustler.toggled(), Mode::Builder);
    }

    #[test]
    fn test_profile_update_omits_unset_fields() {
        let update = ProfileUpdate {
            bio: Some("Hi".to_string()),
            skills: Some(vec!["a".to_string(), "b".to_string()]),
            ..ProfileUpdate::default()
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"bio":"Hi","skills":["a","b"]}"#
        );
    }
}
