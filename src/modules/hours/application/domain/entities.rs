use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::Rank;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursStatus {
    Pending,
    Verified,
    Rejected,
}

impl HoursStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HoursStatus::Pending => "pending",
            HoursStatus::Verified => "verified",
            HoursStatus::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(HoursStatus::Pending),
            "verified" => Some(HoursStatus::Verified),
            "rejected" => Some(HoursStatus::Rejected),
            _ => None,
        }
    }
}

/// One logged block of volunteer work, pending until staff verifies it.
#[derive(Debug, Clone, Serialize)]
pub struct VolunteerHours {
    pub id: Uuid,
    pub volunteer_id: Uuid,
    pub project_id: Uuid,
    pub hours: f64,
    pub description: String,
    pub date_worked: NaiveDate,
    pub status: HoursStatus,
    pub verified_by: Option<Uuid>,
    pub verified_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Rank for a cumulative verified-hours total. Thresholds are inclusive.
pub fn rank_for_hours(total_hours: f64) -> Rank {
    if total_hours >= 500.0 {
        Rank::ImpactAmbassador
    } else if total_hours >= 200.0 {
        Rank::RegionalMobilizer
    } else if total_hours >= 100.0 {
        Rank::CommunityLeader
    } else if total_hours >= 25.0 {
        Rank::ActiveVolunteer
    } else {
        Rank::Starter
    }
}
