//! Database row models for the Outreach CMS backend
//!
//! Classification columns are stored as plain text; the string values
//! match the serde representation of the enums in `outreach_core::types`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row for events
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventDb {
    /// Unique identifier
    pub id: Uuid,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,

    /// Event title
    pub title: String,

    /// Event description
    pub description: String,

    /// Display date
    #[serde(rename = "date")]
    pub event_date: String,

    /// Display time range
    #[serde(rename = "time")]
    pub event_time: String,

    /// Venue
    pub location: String,

    /// Classification
    pub category: String,

    /// Registration counter
    pub registrations: i32,

    /// Shown on the public site
    pub visible: bool,

    /// Highlighted on the landing page
    pub featured: bool,
}

/// Database row for newsletter subscribers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SubscriberDb {
    /// Unique identifier
    pub id: Uuid,

    /// When the subscription was created
    pub subscribed_at: DateTime<Utc>,

    /// Email address
    pub email: String,

    /// Display name
    pub name: String,

    /// Subscription status
    pub status: String,
}

/// Database row for volunteer opportunities
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OpportunityDb {
    /// Unique identifier
    pub id: Uuid,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,

    /// Opportunity title
    pub title: String,

    /// What the volunteer will do
    pub description: String,

    /// Where the work happens
    pub location: String,

    /// Expected time commitment
    pub commitment: String,

    /// Category label
    pub category: String,

    /// Applicant counter
    pub applicants: i32,

    /// Shown on the public site
    pub visible: bool,

    /// Flagged as urgently needed
    pub urgent: bool,
}

/// Database row for skill-training courses
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CourseDb {
    /// Unique identifier
    pub id: Uuid,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,

    /// Course title
    pub title: String,

    /// Course description
    pub description: String,

    /// Category label
    pub category: String,

    /// Difficulty level
    pub level: String,

    /// Display duration
    pub duration: String,

    /// Enrollment counter
    pub enrollments: i32,

    /// Shown on the public site
    pub visible: bool,

    /// Highlighted on the landing page
    pub featured: bool,
}

/// Database row for legal-aid cases
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LegalCaseDb {
    /// Unique identifier
    pub id: Uuid,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,

    /// Case number
    pub case_number: String,

    /// Short case title
    pub title: String,

    /// Client name
    pub client_name: String,

    /// Case summary
    pub summary: String,

    /// Tracking status
    pub status: String,

    /// Next hearing date, display string
    pub next_hearing: Option<String>,

    /// Flagged as urgent
    pub urgent: bool,
}

/// Database row for law lookup entries
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LawDb {
    /// Unique identifier
    pub id: Uuid,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,

    /// Law title
    pub title: String,

    /// Act or section reference
    pub act_reference: String,

    /// Plain-language summary
    pub summary: String,

    /// Category label
    pub category: String,

    /// Year of enactment
    pub year: i32,

    /// Link to the authoritative text
    pub source_url: Option<String>,

    /// Shown on the public site
    pub visible: bool,
}

/// Database row for testimonials
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TestimonialDb {
    /// Unique identifier
    pub id: Uuid,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,

    /// Author name
    pub author: String,

    /// Author role or affiliation
    pub role: String,

    /// The testimonial text
    pub quote: String,

    /// Star rating (1-5)
    pub rating: i32,

    /// Shown on the public site
    pub visible: bool,

    /// Checked by staff as genuine
    pub verified: bool,
}

/// Database row for video lectures
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LectureDb {
    /// Unique identifier
    pub id: Uuid,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,

    /// Lecture title
    pub title: String,

    /// Speaker name
    pub speaker: String,

    /// Video URL
    pub video_url: String,

    /// Display duration
    pub duration: String,

    /// Category label
    pub category: String,

    /// View counter
    pub views: i64,

    /// Shown on the public site
    pub visible: bool,

    /// Highlighted on the landing page
    pub featured: bool,
}

/// Database row for per-page section settings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SectionSettingsDb {
    /// Page slug the settings belong to
    pub page: String,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,

    /// Section title
    pub title: String,

    /// Section subtitle
    pub subtitle: String,

    /// Layout choice
    pub layout: String,

    /// Items shown per page
    pub items_per_page: i32,

    /// Render the stats panel
    pub show_stats: bool,
}
