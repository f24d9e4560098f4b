use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What triggered a notification. The frontend switches icon and link
/// behavior on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ProjectUpdate,
    RequestApproved,
    RequestRejected,
    HoursVerified,
    HoursRejected,
    BadgeEarned,
    ProjectCompleted,
    NewProject,
    System,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::ProjectUpdate => "project_update",
            NotificationKind::RequestApproved => "request_approved",
            NotificationKind::RequestRejected => "request_rejected",
            NotificationKind::HoursVerified => "hours_verified",
            NotificationKind::HoursRejected => "hours_rejected",
            NotificationKind::BadgeEarned => "badge_earned",
            NotificationKind::ProjectCompleted => "project_completed",
            NotificationKind::NewProject => "new_project",
            NotificationKind::System => "system",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "project_update" => Some(NotificationKind::ProjectUpdate),
            "request_approved" => Some(NotificationKind::RequestApproved),
            "request_rejected" => Some(NotificationKind::RequestRejected),
            "hours_verified" => Some(NotificationKind::HoursVerified),
            "hours_rejected" => Some(NotificationKind::HoursRejected),
            "badge_earned" => Some(NotificationKind::BadgeEarned),
            "project_completed" => Some(NotificationKind::ProjectCompleted),
            "new_project" => Some(NotificationKind::NewProject),
            "system" => Some(NotificationKind::System),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub link: String,
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
