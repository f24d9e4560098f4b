use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Platform roles. "Staff" (admin or mobilizer) review join requests and
/// hour submissions; the remaining roles only widen the volunteer hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Volunteer,
    Admin,
    Mobilizer,
    ChiefMobilizer,
    GeneralMobilizer,
    CommunityLead,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Volunteer => "volunteer",
            Role::Admin => "admin",
            Role::Mobilizer => "mobilizer",
            Role::ChiefMobilizer => "chief_mobilizer",
            Role::GeneralMobilizer => "general_mobilizer",
            Role::CommunityLead => "community_lead",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "volunteer" => Some(Role::Volunteer),
            "admin" => Some(Role::Admin),
            "mobilizer" => Some(Role::Mobilizer),
            "chief_mobilizer" => Some(Role::ChiefMobilizer),
            "general_mobilizer" => Some(Role::GeneralMobilizer),
            "community_lead" => Some(Role::CommunityLead),
            _ => None,
        }
    }

    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Admin | Role::Mobilizer)
    }
}

/// Five-tier ladder derived from cumulative verified hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    Starter,
    ActiveVolunteer,
    CommunityLeader,
    RegionalMobilizer,
    ImpactAmbassador,
}

impl Rank {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Starter => "starter",
            Rank::ActiveVolunteer => "active_volunteer",
            Rank::CommunityLeader => "community_leader",
            Rank::RegionalMobilizer => "regional_mobilizer",
            Rank::ImpactAmbassador => "impact_ambassador",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "starter" => Some(Rank::Starter),
            "active_volunteer" => Some(Rank::ActiveVolunteer),
            "community_leader" => Some(Rank::CommunityLeader),
            "regional_mobilizer" => Some(Rank::RegionalMobilizer),
            "impact_ambassador" => Some(Rank::ImpactAmbassador),
            _ => None,
        }
    }

    /// Human-readable form used in notification copy ("Active Volunteer").
    pub fn display_name(&self) -> &'static str {
        match self {
            Rank::Starter => "Starter",
            Rank::ActiveVolunteer => "Active Volunteer",
            Rank::CommunityLeader => "Community Leader",
            Rank::RegionalMobilizer => "Regional Mobilizer",
            Rank::ImpactAmbassador => "Impact Ambassador",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub address: String,
    pub bio: String,
    pub country: String,
    pub skills: Vec<String>,
    pub other_skills: String,
    pub interests: Vec<String>,
    pub availability: Vec<String>,
    pub role: Role,
    pub is_approved: bool,
    pub is_banned: bool,
    pub profile_picture: String,
    pub email_verified: bool,
    pub total_hours: f64,
    pub rank: Rank,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

/// Everything a client may see: `User` minus the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub address: String,
    pub bio: String,
    pub country: String,
    pub skills: Vec<String>,
    pub other_skills: String,
    pub interests: Vec<String>,
    pub availability: Vec<String>,
    pub role: Role,
    pub is_approved: bool,
    pub is_banned: bool,
    pub profile_picture: String,
    pub email_verified: bool,
    pub total_hours: f64,
    pub rank: Rank,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            firstname: user.firstname,
            lastname: user.lastname,
            username: user.username,
            email: user.email,
            phone: user.phone,
            date_of_birth: user.date_of_birth,
            gender: user.gender,
            address: user.address,
            bio: user.bio,
            country: user.country,
            skills: user.skills,
            other_skills: user.other_skills,
            interests: user.interests,
            availability: user.availability,
            role: user.role,
            is_approved: user.is_approved,
            is_banned: user.is_banned,
            profile_picture: user.profile_picture,
            email_verified: user.email_verified,
            total_hours: user.total_hours,
            rank: user.rank,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
