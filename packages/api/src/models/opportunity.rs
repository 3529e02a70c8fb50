use std::fmt;

use serde::{Deserialize, Serialize};

use super::decode_list;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityStatus {
    Open,
    InProgress,
    Completed,
    Closed,
}

impl OpportunityStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OpportunityStatus::Open => "open",
            OpportunityStatus::InProgress => "in_progress",
            OpportunityStatus::Completed => "completed",
            OpportunityStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for OpportunityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An opportunity (bounty) posted by a builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub required_skills: Option<String>,
    #[serde(default)]
    pub bounty_amount: Option<i64>,
    pub status: OpportunityStatus,
    pub creator_id: i64,
    pub created_at: String,
    #[serde(default)]
    pub deadline: Option<String>,
}

impl Opportunity {
    pub fn required_skills(&self) -> Vec<String> {
        decode_list(self.required_skills.as_deref())
    }

    pub fn is_open(&self) -> bool {
        self.status == OpportunityStatus::Open
    }
}

/// Body of `POST /opportunities`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityCreate {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounty_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

/// Body of `PUT /opportunities/{id}`; only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpportunityUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounty_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OpportunityStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

/// Query parameters of `GET /opportunities`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OpportunityQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OpportunityStatus>,
}
