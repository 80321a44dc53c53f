//! Core data types for the Outreach CMS backend
//!
//! One record shape per admin collection: scalar display fields are
//! strings, classification fields are string-backed enums, counters are
//! integers and flags are booleans. Identifiers are assigned by the
//! persistence layer, so the payload types here carry no id.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Page slug type for section settings
pub type PageSlug = String;

/// Event category enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    /// Fundraising event
    Fundraiser,
    /// Training workshop
    Workshop,
    /// Community gathering
    Community,
    /// Awareness campaign
    Awareness,
}

impl Default for EventCategory {
    fn default() -> Self {
        Self::Community
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fundraiser => write!(f, "fundraiser"),
            Self::Workshop => write!(f, "workshop"),
            Self::Community => write!(f, "community"),
            Self::Awareness => write!(f, "awareness"),
        }
    }
}

/// Newsletter subscriber status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubscriberStatus {
    /// Receiving the newsletter
    Active,
    /// Opted out
    Unsubscribed,
}

impl Default for SubscriberStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl std::fmt::Display for SubscriberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Unsubscribed => write!(f, "unsubscribed"),
        }
    }
}

/// Skill-training course level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CourseLevel {
    /// No prior experience required
    Beginner,
    /// Some prior experience expected
    Intermediate,
    /// For experienced participants
    Advanced,
}

impl Default for CourseLevel {
    fn default() -> Self {
        Self::Beginner
    }
}

impl std::fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

/// Legal-aid case status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    /// Newly opened
    Open,
    /// Being worked on
    InProgress,
    /// Resolved and closed
    Closed,
}

impl Default for CaseStatus {
    fn default() -> Self {
        Self::Open
    }
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// An event listing as submitted by the admin form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Event {
    /// Event title
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    /// Event description
    #[validate(length(min = 1, max = 5000))]
    pub description: String,

    /// Display date, e.g. "April 15, 2025"
    #[validate(length(min = 1, max = 100))]
    pub date: String,

    /// Display time range, e.g. "7:00 PM - 10:00 PM"
    #[validate(length(min = 1, max = 100))]
    pub time: String,

    /// Venue
    #[validate(length(min = 1, max = 255))]
    pub location: String,

    /// Classification
    #[serde(default)]
    pub category: EventCategory,

    /// Registration counter
    #[serde(default)]
    pub registrations: i32,

    /// Shown on the public site
    #[serde(default = "default_true")]
    pub visible: bool,

    /// Highlighted on the landing page
    #[serde(default)]
    pub featured: bool,
}

impl Default for Event {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            date: String::new(),
            time: String::new(),
            location: String::new(),
            category: EventCategory::default(),
            registrations: 0,
            visible: true,
            featured: false,
        }
    }
}

/// A newsletter subscriber
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Subscriber {
    /// Subscriber email address
    #[validate(email, length(max = 255))]
    pub email: String,

    /// Display name
    #[validate(length(max = 255))]
    #[serde(default)]
    pub name: String,

    /// Subscription status
    #[serde(default)]
    pub status: SubscriberStatus,
}

/// A volunteer opportunity listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Opportunity {
    /// Opportunity title
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    /// What the volunteer will do
    #[validate(length(min = 1, max = 5000))]
    pub description: String,

    /// Where the work happens
    #[validate(length(min = 1, max = 255))]
    pub location: String,

    /// Expected time commitment, e.g. "4 hrs/week"
    #[validate(length(max = 100))]
    #[serde(default)]
    pub commitment: String,

    /// Free-form category label
    #[validate(length(max = 100))]
    #[serde(default)]
    pub category: String,

    /// Applicant counter
    #[serde(default)]
    pub applicants: i32,

    /// Shown on the public site
    #[serde(default = "default_true")]
    pub visible: bool,

    /// Flagged as urgently needed
    #[serde(default)]
    pub urgent: bool,
}

/// A freelance / skill-training course listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Course {
    /// Course title
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    /// Course description
    #[validate(length(min = 1, max = 5000))]
    pub description: String,

    /// Free-form category label
    #[validate(length(max = 100))]
    #[serde(default)]
    pub category: String,

    /// Difficulty level
    #[serde(default)]
    pub level: CourseLevel,

    /// Display duration, e.g. "6 weeks"
    #[validate(length(max = 100))]
    #[serde(default)]
    pub duration: String,

    /// Enrollment counter
    #[serde(default)]
    pub enrollments: i32,

    /// Shown on the public site
    #[serde(default = "default_true")]
    pub visible: bool,

    /// Highlighted on the landing page
    #[serde(default)]
    pub featured: bool,
}

/// A legal-aid case record
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LegalCase {
    /// Case number assigned by the legal team
    #[validate(length(min = 1, max = 100))]
    pub case_number: String,

    /// Short case title
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    /// Client name
    #[validate(length(max = 255))]
    #[serde(default)]
    pub client_name: String,

    /// Case summary
    #[validate(length(min = 1, max = 5000))]
    pub summary: String,

    /// Tracking status
    #[serde(default)]
    pub status: CaseStatus,

    /// Next hearing date, display string
    pub next_hearing: Option<String>,

    /// Flagged as urgent
    #[serde(default)]
    pub urgent: bool,
}

/// A law lookup entry
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Law {
    /// Law title
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    /// Act or section reference, e.g. "RTI Act 2005, s.6"
    #[validate(length(max = 255))]
    #[serde(default)]
    pub act_reference: String,

    /// Plain-language summary
    #[validate(length(min = 1, max = 5000))]
    pub summary: String,

    /// Free-form category label
    #[validate(length(max = 100))]
    #[serde(default)]
    pub category: String,

    /// Year of enactment
    #[validate(range(min = 1800, max = 2100))]
    #[serde(default = "default_law_year")]
    pub year: i32,

    /// Link to the authoritative text
    #[validate(url)]
    pub source_url: Option<String>,

    /// Shown on the public site
    #[serde(default = "default_true")]
    pub visible: bool,
}

/// A testimonial record
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Testimonial {
    /// Author name
    #[validate(length(min = 1, max = 255))]
    pub author: String,

    /// Author role or affiliation
    #[validate(length(max = 255))]
    #[serde(default)]
    pub role: String,

    /// The testimonial text
    #[validate(length(min = 1, max = 5000))]
    pub quote: String,

    /// Star rating (1-5)
    #[validate(range(min = 1, max = 5))]
    #[serde(default = "default_rating")]
    pub rating: i32,

    /// Shown on the public site
    #[serde(default = "default_true")]
    pub visible: bool,

    /// Checked by staff as genuine
    #[serde(default)]
    pub verified: bool,
}

/// A video lecture record
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Lecture {
    /// Lecture title
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    /// Speaker name
    #[validate(length(min = 1, max = 255))]
    pub speaker: String,

    /// Where the video is hosted
    #[validate(url)]
    pub video_url: String,

    /// Display duration, e.g. "42 min"
    #[validate(length(max = 100))]
    #[serde(default)]
    pub duration: String,

    /// Free-form category label
    #[validate(length(max = 100))]
    #[serde(default)]
    pub category: String,

    /// View counter
    #[serde(default)]
    pub views: i64,

    /// Shown on the public site
    #[serde(default = "default_true")]
    pub visible: bool,

    /// Highlighted on the landing page
    #[serde(default)]
    pub featured: bool,
}

/// Per-page display configuration, edited in place by each admin page
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SectionSettings {
    /// Section title shown above the list
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    /// Section subtitle
    #[validate(length(max = 500))]
    #[serde(default)]
    pub subtitle: String,

    /// Layout choice, e.g. "grid" or "list"
    #[validate(length(max = 50))]
    #[serde(default = "default_layout")]
    pub layout: String,

    /// Items shown per page
    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_items_per_page")]
    pub items_per_page: i32,

    /// Render the stats panel
    #[serde(default = "default_true")]
    pub show_stats: bool,
}

impl Default for SectionSettings {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            layout: default_layout(),
            items_per_page: default_items_per_page(),
            show_stats: true,
        }
    }
}

/// Pagination information for list responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationInfo {
    /// Current page number (1-based)
    pub page: u32,

    /// Number of items per page
    pub per_page: u32,

    /// Total number of items matching the filter
    pub total_count: u64,

    /// Total number of pages
    pub total_pages: u32,

    /// Whether there are more pages
    pub has_next: bool,

    /// Whether there are previous pages
    pub has_prev: bool,
}

impl PaginationInfo {
    /// Derive pagination info from a LIMIT/OFFSET query and a total count
    #[must_use]
    pub fn from_limit_offset(limit: i64, offset: i64, total: i64) -> Self {
        let limit = limit.max(1);
        let offset = offset.max(0);
        let total = total.max(0);

        let per_page = u32::try_from(limit).unwrap_or(u32::MAX);
        let page = u32::try_from((offset / limit).saturating_add(1)).unwrap_or(u32::MAX);
        let total_pages =
            u32::try_from(total.saturating_add(limit - 1) / limit).unwrap_or(u32::MAX);

        Self {
            page,
            per_page,
            total_count: u64::try_from(total).unwrap_or(0),
            total_pages,
            has_next: offset.saturating_add(limit) < total,
            has_prev: offset > 0,
        }
    }
}

/// Uniform success envelope for acknowledgement-style responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response payload
    pub data: T,

    /// Optional human-readable message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Wrap a payload without a message
    pub const fn new(data: T) -> Self {
        Self {
            data,
            message: None,
        }
    }

    /// Wrap a payload with a message
    pub fn with_message<S: Into<String>>(data: T, message: S) -> Self {
        Self {
            data,
            message: Some(message.into()),
        }
    }
}

const fn default_true() -> bool {
    true
}

const fn default_rating() -> i32 {
    5
}

const fn default_law_year() -> i32 {
    2000
}

fn default_layout() -> String {
    "grid".to_string()
}

const fn default_items_per_page() -> i32 {
    10
}
