use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl BadgeTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeTier::Bronze => "bronze",
            BadgeTier::Silver => "silver",
            BadgeTier::Gold => "gold",
            BadgeTier::Platinum => "platinum",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "bronze" => Some(BadgeTier::Bronze),
            "silver" => Some(BadgeTier::Silver),
            "gold" => Some(BadgeTier::Gold),
            "platinum" => Some(BadgeTier::Platinum),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeCriteria {
    Hours,
    Projects,
    Leadership,
    Event,
    Special,
}

impl BadgeCriteria {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeCriteria::Hours => "hours",
            BadgeCriteria::Projects => "projects",
            BadgeCriteria::Leadership => "leadership",
            BadgeCriteria::Event => "event",
            BadgeCriteria::Special => "special",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "hours" => Some(BadgeCriteria::Hours),
            "projects" => Some(BadgeCriteria::Projects),
            "leadership" => Some(BadgeCriteria::Leadership),
            "event" => Some(BadgeCriteria::Event),
            "special" => Some(BadgeCriteria::Special),
            _ => None,
        }
    }
}

/// A static achievement definition. Nothing in the API awards badges; the
/// catalogue only backs the frontend's display.
#[derive(Debug, Clone, Serialize)]
pub struct Badge {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub tier: BadgeTier,
    pub criteria_type: BadgeCriteria,
    pub criteria_value: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
