//! Database query operations for the Outreach CMS backend
//!
//! Every collection gets the same resource interface: filtered
//! list/count, find by id, insert with a server-assigned id, full-row
//! update, delete, and single-statement flag toggles. Updates and
//! toggles return `None` for a missing id so the API layer can surface
//! 404 instead of silently ignoring the call.

use crate::models::{
    CourseDb, EventDb, LawDb, LectureDb, LegalCaseDb, OpportunityDb, SectionSettingsDb,
    SubscriberDb, TestimonialDb,
};
use outreach_core::types::{
    Course, Event, Law, Lecture, LegalCase, Opportunity, SectionSettings, Subscriber, Testimonial,
};
use outreach_core::{Error, Result};
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Map a sqlx error into our error type, folding unique violations into
/// a validation error on the offending field.
fn map_db_error(err: sqlx::Error, unique_field: &str) -> Error {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.code().as_deref() == Some("23505") {
            return Error::Validation {
                field: unique_field.to_string(),
                message: "value already exists".to_string(),
            };
        }
    }
    Error::Database(err.to_string())
}

/// Filter for event listings
#[derive(Debug, Clone, Default)]
pub struct EventFilter<'a> {
    /// ILIKE pattern over title/description/location
    pub search: Option<&'a str>,
    /// Exact category match
    pub category: Option<&'a str>,
    /// Visibility flag filter
    pub visible: Option<bool>,
    /// Maximum rows to return
    pub limit: i64,
    /// Rows to skip
    pub offset: i64,
}

/// Event database operations
#[derive(Debug)]
pub struct EventQueries;

impl EventQueries {
    /// List events matching the filter, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(pool: &PgPool, filter: &EventFilter<'_>) -> Result<Vec<EventDb>> {
        let query = r"
            SELECT * FROM events
            WHERE ($1::text IS NULL OR title ILIKE $1 OR description ILIKE $1 OR location ILIKE $1)
              AND ($2::text IS NULL OR category = $2)
              AND ($3::boolean IS NULL OR visible = $3)
            ORDER BY created_at DESC
            LIMIT $4 OFFSET $5
        ";

        sqlx::query_as::<_, EventDb>(query)
            .bind(filter.search)
            .bind(filter.category)
            .bind(filter.visible)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Count events matching the filter (limit/offset ignored)
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(pool: &PgPool, filter: &EventFilter<'_>) -> Result<i64> {
        let query = r"
            SELECT COUNT(*) AS count FROM events
            WHERE ($1::text IS NULL OR title ILIKE $1 OR description ILIKE $1 OR location ILIKE $1)
              AND ($2::text IS NULL OR category = $2)
              AND ($3::boolean IS NULL OR visible = $3)
        ";

        let row = sqlx::query(query)
            .bind(filter.search)
            .bind(filter.category)
            .bind(filter.visible)
            .fetch_one(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(row.get("count"))
    }

    /// Find an event by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<EventDb>> {
        sqlx::query_as::<_, EventDb>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Insert a new event; the id is assigned by the database
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn insert(pool: &PgPool, event: &Event) -> Result<EventDb> {
        let query = r"
            INSERT INTO events (
                title, description, event_date, event_time, location,
                category, registrations, visible, featured
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
        ";

        sqlx::query_as::<_, EventDb>(query)
            .bind(&event.title)
            .bind(&event.description)
            .bind(&event.date)
            .bind(&event.time)
            .bind(&event.location)
            .bind(event.category.to_string())
            .bind(event.registrations)
            .bind(event.visible)
            .bind(event.featured)
            .fetch_one(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Replace an event's fields; `None` when the id does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn update(pool: &PgPool, id: Uuid, event: &Event) -> Result<Option<EventDb>> {
        let query = r"
            UPDATE events
            SET title = $1, description = $2, event_date = $3, event_time = $4,
                location = $5, category = $6, registrations = $7,
                visible = $8, featured = $9, updated_at = NOW()
            WHERE id = $10
            RETURNING *
        ";

        sqlx::query_as::<_, EventDb>(query)
            .bind(&event.title)
            .bind(&event.description)
            .bind(&event.date)
            .bind(&event.time)
            .bind(&event.location)
            .bind(event.category.to_string())
            .bind(event.registrations)
            .bind(event.visible)
            .bind(event.featured)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Delete an event, returning the number of rows removed
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(result.rows_affected())
    }

    /// Flip the visibility flag in place
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn toggle_visible(pool: &PgPool, id: Uuid) -> Result<Option<EventDb>> {
        sqlx::query_as::<_, EventDb>(
            "UPDATE events SET visible = NOT visible, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| Error::Database(e.to_string()))
    }

    /// Flip the featured flag in place
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn toggle_featured(pool: &PgPool, id: Uuid) -> Result<Option<EventDb>> {
        sqlx::query_as::<_, EventDb>(
            "UPDATE events SET featured = NOT featured, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| Error::Database(e.to_string()))
    }

    /// Bump the registration counter by one
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn increment_registrations(pool: &PgPool, id: Uuid) -> Result<Option<EventDb>> {
        sqlx::query_as::<_, EventDb>(
            "UPDATE events SET registrations = registrations + 1, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| Error::Database(e.to_string()))
    }
}

/// Filter for subscriber listings
#[derive(Debug, Clone, Default)]
pub struct SubscriberFilter<'a> {
    /// ILIKE pattern over email/name
    pub search: Option<&'a str>,
    /// Exact status match
    pub status: Option<&'a str>,
    /// Maximum rows to return
    pub limit: i64,
    /// Rows to skip
    pub offset: i64,
}

/// Newsletter subscriber database operations
#[derive(Debug)]
pub struct SubscriberQueries;

impl SubscriberQueries {
    /// List subscribers matching the filter, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(pool: &PgPool, filter: &SubscriberFilter<'_>) -> Result<Vec<SubscriberDb>> {
        let query = r"
            SELECT * FROM subscribers
            WHERE ($1::text IS NULL OR email ILIKE $1 OR name ILIKE $1)
              AND ($2::text IS NULL OR status = $2)
            ORDER BY subscribed_at DESC
            LIMIT $3 OFFSET $4
        ";

        sqlx::query_as::<_, SubscriberDb>(query)
            .bind(filter.search)
            .bind(filter.status)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Count subscribers matching the filter
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(pool: &PgPool, filter: &SubscriberFilter<'_>) -> Result<i64> {
        let query = r"
            SELECT COUNT(*) AS count FROM subscribers
            WHERE ($1::text IS NULL OR email ILIKE $1 OR name ILIKE $1)
              AND ($2::text IS NULL OR status = $2)
        ";

        let row = sqlx::query(query)
            .bind(filter.search)
            .bind(filter.status)
            .fetch_one(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(row.get("count"))
    }

    /// Find a subscriber by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<SubscriberDb>> {
        sqlx::query_as::<_, SubscriberDb>("SELECT * FROM subscribers WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Insert a new subscriber
    ///
    /// # Errors
    ///
    /// Returns a validation error when the email is already subscribed,
    /// or a database error if the query fails.
    pub async fn insert(pool: &PgPool, subscriber: &Subscriber) -> Result<SubscriberDb> {
        let query = r"
            INSERT INTO subscribers (email, name, status)
            VALUES ($1, $2, $3)
            RETURNING *
        ";

        sqlx::query_as::<_, SubscriberDb>(query)
            .bind(&subscriber.email)
            .bind(&subscriber.name)
            .bind(subscriber.status.to_string())
            .fetch_one(pool)
            .await
            .map_err(|e| map_db_error(e, "email"))
    }

    /// Replace a subscriber's fields; `None` when the id does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        subscriber: &Subscriber,
    ) -> Result<Option<SubscriberDb>> {
        let query = r"
            UPDATE subscribers
            SET email = $1, name = $2, status = $3
            WHERE id = $4
            RETURNING *
        ";

        sqlx::query_as::<_, SubscriberDb>(query)
            .bind(&subscriber.email)
            .bind(&subscriber.name)
            .bind(subscriber.status.to_string())
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| map_db_error(e, "email"))
    }

    /// Delete a subscriber, returning the number of rows removed
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM subscribers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(result.rows_affected())
    }
}

/// Filter for opportunity listings
#[derive(Debug, Clone, Default)]
pub struct OpportunityFilter<'a> {
    /// ILIKE pattern over title/description/location
    pub search: Option<&'a str>,
    /// Exact category match
    pub category: Option<&'a str>,
    /// Visibility flag filter
    pub visible: Option<bool>,
    /// Urgency flag filter
    pub urgent: Option<bool>,
    /// Maximum rows to return
    pub limit: i64,
    /// Rows to skip
    pub offset: i64,
}

/// Volunteer opportunity database operations
#[derive(Debug)]
pub struct OpportunityQueries;

impl OpportunityQueries {
    /// List opportunities matching the filter, urgent first then newest
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(pool: &PgPool, filter: &OpportunityFilter<'_>) -> Result<Vec<OpportunityDb>> {
        let query = r"
            SELECT * FROM opportunities
            WHERE ($1::text IS NULL OR title ILIKE $1 OR description ILIKE $1 OR location ILIKE $1)
              AND ($2::text IS NULL OR category = $2)
              AND ($3::boolean IS NULL OR visible = $3)
              AND ($4::boolean IS NULL OR urgent = $4)
            ORDER BY urgent DESC, created_at DESC
            LIMIT $5 OFFSET $6
        ";

        sqlx::query_as::<_, OpportunityDb>(query)
            .bind(filter.search)
            .bind(filter.category)
            .bind(filter.visible)
            .bind(filter.urgent)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Count opportunities matching the filter
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(pool: &PgPool, filter: &OpportunityFilter<'_>) -> Result<i64> {
        let query = r"
            SELECT COUNT(*) AS count FROM opportunities
            WHERE ($1::text IS NULL OR title ILIKE $1 OR description ILIKE $1 OR location ILIKE $1)
              AND ($2::text IS NULL OR category = $2)
              AND ($3::boolean IS NULL OR visible = $3)
              AND ($4::boolean IS NULL OR urgent = $4)
        ";

        let row = sqlx::query(query)
            .bind(filter.search)
            .bind(filter.category)
            .bind(filter.visible)
            .bind(filter.urgent)
            .fetch_one(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(row.get("count"))
    }

    /// Find an opportunity by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<OpportunityDb>> {
        sqlx::query_as::<_, OpportunityDb>("SELECT * FROM opportunities WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Insert a new opportunity
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn insert(pool: &PgPool, opportunity: &Opportunity) -> Result<OpportunityDb> {
        let query = r"
            INSERT INTO opportunities (
                title, description, location, commitment, category,
                applicants, visible, urgent
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
        ";

        sqlx::query_as::<_, OpportunityDb>(query)
            .bind(&opportunity.title)
            .bind(&opportunity.description)
            .bind(&opportunity.location)
            .bind(&opportunity.commitment)
            .bind(&opportunity.category)
            .bind(opportunity.applicants)
            .bind(opportunity.visible)
            .bind(opportunity.urgent)
            .fetch_one(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Replace an opportunity's fields; `None` when the id does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        opportunity: &Opportunity,
    ) -> Result<Option<OpportunityDb>> {
        let query = r"
            UPDATE opportunities
            SET title = $1, description = $2, location = $3, commitment = $4,
                category = $5, applicants = $6, visible = $7, urgent = $8,
                updated_at = NOW()
            WHERE id = $9
            RETURNING *
        ";

        sqlx::query_as::<_, OpportunityDb>(query)
            .bind(&opportunity.title)
            .bind(&opportunity.description)
            .bind(&opportunity.location)
            .bind(&opportunity.commitment)
            .bind(&opportunity.category)
            .bind(opportunity.applicants)
            .bind(opportunity.visible)
            .bind(opportunity.urgent)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Delete an opportunity, returning the number of rows removed
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM opportunities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(result.rows_affected())
    }

    /// Flip the visibility flag in place
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn toggle_visible(pool: &PgPool, id: Uuid) -> Result<Option<OpportunityDb>> {
        sqlx::query_as::<_, OpportunityDb>(
            "UPDATE opportunities SET visible = NOT visible, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| Error::Database(e.to_string()))
    }

    /// Flip the urgency flag in place
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn toggle_urgent(pool: &PgPool, id: Uuid) -> Result<Option<OpportunityDb>> {
        sqlx::query_as::<_, OpportunityDb>(
            "UPDATE opportunities SET urgent = NOT urgent, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| Error::Database(e.to_string()))
    }
}

/// Filter for course listings
#[derive(Debug, Clone, Default)]
pub struct CourseFilter<'a> {
    /// ILIKE pattern over title/description
    pub search: Option<&'a str>,
    /// Exact category match
    pub category: Option<&'a str>,
    /// Exact level match
    pub level: Option<&'a str>,
    /// Visibility flag filter
    pub visible: Option<bool>,
    /// Maximum rows to return
    pub limit: i64,
    /// Rows to skip
    pub offset: i64,
}

/// Skill-training course database operations
#[derive(Debug)]
pub struct CourseQueries;

impl CourseQueries {
    /// List courses matching the filter, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(pool: &PgPool, filter: &CourseFilter<'_>) -> Result<Vec<CourseDb>> {
        let query = r"
            SELECT * FROM courses
            WHERE ($1::text IS NULL OR title ILIKE $1 OR description ILIKE $1)
              AND ($2::text IS NULL OR category = $2)
              AND ($3::text IS NULL OR level = $3)
              AND ($4::boolean IS NULL OR visible = $4)
            ORDER BY created_at DESC
            LIMIT $5 OFFSET $6
        ";

        sqlx::query_as::<_, CourseDb>(query)
            .bind(filter.search)
            .bind(filter.category)
            .bind(filter.level)
            .bind(filter.visible)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Count courses matching the filter
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(pool: &PgPool, filter: &CourseFilter<'_>) -> Result<i64> {
        let query = r"
            SELECT COUNT(*) AS count FROM courses
            WHERE ($1::text IS NULL OR title ILIKE $1 OR description ILIKE $1)
              AND ($2::text IS NULL OR category = $2)
              AND ($3::text IS NULL OR level = $3)
              AND ($4::boolean IS NULL OR visible = $4)
        ";

        let row = sqlx::query(query)
            .bind(filter.search)
            .bind(filter.category)
            .bind(filter.level)
            .bind(filter.visible)
            .fetch_one(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(row.get("count"))
    }

    /// Find a course by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<CourseDb>> {
        sqlx::query_as::<_, CourseDb>("SELECT * FROM courses WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Insert a new course
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn insert(pool: &PgPool, course: &Course) -> Result<CourseDb> {
        let query = r"
            INSERT INTO courses (
                title, description, category, level, duration,
                enrollments, visible, featured
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
        ";

        sqlx::query_as::<_, CourseDb>(query)
            .bind(&course.title)
            .bind(&course.description)
            .bind(&course.category)
            .bind(course.level.to_string())
            .bind(&course.duration)
            .bind(course.enrollments)
            .bind(course.visible)
            .bind(course.featured)
            .fetch_one(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Replace a course's fields; `None` when the id does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn update(pool: &PgPool, id: Uuid, course: &Course) -> Result<Option<CourseDb>> {
        let query = r"
            UPDATE courses
            SET title = $1, description = $2, category = $3, level = $4,
                duration = $5, enrollments = $6, visible = $7, featured = $8,
                updated_at = NOW()
            WHERE id = $9
            RETURNING *
        ";

        sqlx::query_as::<_, CourseDb>(query)
            .bind(&course.title)
            .bind(&course.description)
            .bind(&course.category)
            .bind(course.level.to_string())
            .bind(&course.duration)
            .bind(course.enrollments)
            .bind(course.visible)
            .bind(course.featured)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Delete a course, returning the number of rows removed
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(result.rows_affected())
    }

    /// Flip the visibility flag in place
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn toggle_visible(pool: &PgPool, id: Uuid) -> Result<Option<CourseDb>> {
        sqlx::query_as::<_, CourseDb>(
            "UPDATE courses SET visible = NOT visible, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| Error::Database(e.to_string()))
    }

    /// Flip the featured flag in place
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn toggle_featured(pool: &PgPool, id: Uuid) -> Result<Option<CourseDb>> {
        sqlx::query_as::<_, CourseDb>(
            "UPDATE courses SET featured = NOT featured, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| Error::Database(e.to_string()))
    }
}

/// Filter for legal case listings
#[derive(Debug, Clone, Default)]
pub struct LegalCaseFilter<'a> {
    /// ILIKE pattern over case number/title/client/summary
    pub search: Option<&'a str>,
    /// Exact status match
    pub status: Option<&'a str>,
    /// Urgency flag filter
    pub urgent: Option<bool>,
    /// Maximum rows to return
    pub limit: i64,
    /// Rows to skip
    pub offset: i64,
}

/// Legal-aid case database operations
#[derive(Debug)]
pub struct LegalCaseQueries;

impl LegalCaseQueries {
    /// List cases matching the filter, urgent first then newest
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(pool: &PgPool, filter: &LegalCaseFilter<'_>) -> Result<Vec<LegalCaseDb>> {
        let query = r"
            SELECT * FROM legal_cases
            WHERE ($1::text IS NULL OR case_number ILIKE $1 OR title ILIKE $1
                   OR client_name ILIKE $1 OR summary ILIKE $1)
              AND ($2::text IS NULL OR status = $2)
              AND ($3::boolean IS NULL OR urgent = $3)
            ORDER BY urgent DESC, created_at DESC
            LIMIT $4 OFFSET $5
        ";

        sqlx::query_as::<_, LegalCaseDb>(query)
            .bind(filter.search)
            .bind(filter.status)
            .bind(filter.urgent)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Count cases matching the filter
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(pool: &PgPool, filter: &LegalCaseFilter<'_>) -> Result<i64> {
        let query = r"
            SELECT COUNT(*) AS count FROM legal_cases
            WHERE ($1::text IS NULL OR case_number ILIKE $1 OR title ILIKE $1
                   OR client_name ILIKE $1 OR summary ILIKE $1)
              AND ($2::text IS NULL OR status = $2)
              AND ($3::boolean IS NULL OR urgent = $3)
        ";

        let row = sqlx::query(query)
            .bind(filter.search)
            .bind(filter.status)
            .bind(filter.urgent)
            .fetch_one(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(row.get("count"))
    }

    /// Find a case by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<LegalCaseDb>> {
        sqlx::query_as::<_, LegalCaseDb>("SELECT * FROM legal_cases WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Insert a new case
    ///
    /// # Errors
    ///
    /// Returns a validation error when the case number already exists,
    /// or a database error if the query fails.
    pub async fn insert(pool: &PgPool, case: &LegalCase) -> Result<LegalCaseDb> {
        let query = r"
            INSERT INTO legal_cases (
                case_number, title, client_name, summary, status,
                next_hearing, urgent
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
        ";

        sqlx::query_as::<_, LegalCaseDb>(query)
            .bind(&case.case_number)
            .bind(&case.title)
            .bind(&case.client_name)
            .bind(&case.summary)
            .bind(case.status.to_string())
            .bind(&case.next_hearing)
            .bind(case.urgent)
            .fetch_one(pool)
            .await
            .map_err(|e| map_db_error(e, "case_number"))
    }

    /// Replace a case's fields; `None` when the id does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn update(pool: &PgPool, id: Uuid, case: &LegalCase) -> Result<Option<LegalCaseDb>> {
        let query = r"
            UPDATE legal_cases
            SET case_number = $1, title = $2, client_name = $3, summary = $4,
                status = $5, next_hearing = $6, urgent = $7, updated_at = NOW()
            WHERE id = $8
            RETURNING *
        ";

        sqlx::query_as::<_, LegalCaseDb>(query)
            .bind(&case.case_number)
            .bind(&case.title)
            .bind(&case.client_name)
            .bind(&case.summary)
            .bind(case.status.to_string())
            .bind(&case.next_hearing)
            .bind(case.urgent)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| map_db_error(e, "case_number"))
    }

    /// Delete a case, returning the number of rows removed
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM legal_cases WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(result.rows_affected())
    }

    /// Flip the urgency flag in place
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn toggle_urgent(pool: &PgPool, id: Uuid) -> Result<Option<LegalCaseDb>> {
        sqlx::query_as::<_, LegalCaseDb>(
            "UPDATE legal_cases SET urgent = NOT urgent, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| Error::Database(e.to_string()))
    }

    /// Move a case to a new status
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn set_status(
        pool: &PgPool,
        id: Uuid,
        status: &str,
    ) -> Result<Option<LegalCaseDb>> {
        sqlx::query_as::<_, LegalCaseDb>(
            "UPDATE legal_cases SET status = $1, updated_at = NOW() WHERE id = $2 RETURNING *",
        )
        .bind(status)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| Error::Database(e.to_string()))
    }
}

/// Filter for law listings
#[derive(Debug, Clone, Default)]
pub struct LawFilter<'a> {
    /// ILIKE pattern over title/reference/summary
    pub search: Option<&'a str>,
    /// Exact category match
    pub category: Option<&'a str>,
    /// Visibility flag filter
    pub visible: Option<bool>,
    /// Maximum rows to return
    pub limit: i64,
    /// Rows to skip
    pub offset: i64,
}

/// Law lookup database operations
#[derive(Debug)]
pub struct LawQueries;

impl LawQueries {
    /// List laws matching the filter, alphabetical by title
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(pool: &PgPool, filter: &LawFilter<'_>) -> Result<Vec<LawDb>> {
        let query = r"
            SELECT * FROM laws
            WHERE ($1::text IS NULL OR title ILIKE $1 OR act_reference ILIKE $1 OR summary ILIKE $1)
              AND ($2::text IS NULL OR category = $2)
              AND ($3::boolean IS NULL OR visible = $3)
            ORDER BY title ASC
            LIMIT $4 OFFSET $5
        ";

        sqlx::query_as::<_, LawDb>(query)
            .bind(filter.search)
            .bind(filter.category)
            .bind(filter.visible)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Count laws matching the filter
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(pool: &PgPool, filter: &LawFilter<'_>) -> Result<i64> {
        let query = r"
            SELECT COUNT(*) AS count FROM laws
            WHERE ($1::text IS NULL OR title ILIKE $1 OR act_reference ILIKE $1 OR summary ILIKE $1)
              AND ($2::text IS NULL OR category = $2)
              AND ($3::boolean IS NULL OR visible = $3)
        ";

        let row = sqlx::query(query)
            .bind(filter.search)
            .bind(filter.category)
            .bind(filter.visible)
            .fetch_one(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(row.get("count"))
    }

    /// Find a law by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<LawDb>> {
        sqlx::query_as::<_, LawDb>("SELECT * FROM laws WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Insert a new law entry
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn insert(pool: &PgPool, law: &Law) -> Result<LawDb> {
        let query = r"
            INSERT INTO laws (
                title, act_reference, summary, category, year, source_url, visible
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
        ";

        sqlx::query_as::<_, LawDb>(query)
            .bind(&law.title)
            .bind(&law.act_reference)
            .bind(&law.summary)
            .bind(&law.category)
            .bind(law.year)
            .bind(&law.source_url)
            .bind(law.visible)
            .fetch_one(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Replace a law's fields; `None` when the id does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn update(pool: &PgPool, id: Uuid, law: &Law) -> Result<Option<LawDb>> {
        let query = r"
            UPDATE laws
            SET title = $1, act_reference = $2, summary = $3, category = $4,
                year = $5, source_url = $6, visible = $7, updated_at = NOW()
            WHERE id = $8
            RETURNING *
        ";

        sqlx::query_as::<_, LawDb>(query)
            .bind(&law.title)
            .bind(&law.act_reference)
            .bind(&law.summary)
            .bind(&law.category)
            .bind(law.year)
            .bind(&law.source_url)
            .bind(law.visible)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Delete a law, returning the number of rows removed
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM laws WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(result.rows_affected())
    }

    /// Flip the visibility flag in place
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn toggle_visible(pool: &PgPool, id: Uuid) -> Result<Option<LawDb>> {
        sqlx::query_as::<_, LawDb>(
            "UPDATE laws SET visible = NOT visible, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| Error::Database(e.to_string()))
    }
}

/// Filter for testimonial listings
#[derive(Debug, Clone, Default)]
pub struct TestimonialFilter<'a> {
    /// ILIKE pattern over author/quote
    pub search: Option<&'a str>,
    /// Visibility flag filter
    pub visible: Option<bool>,
    /// Verification flag filter
    pub verified: Option<bool>,
    /// Maximum rows to return
    pub limit: i64,
    /// Rows to skip
    pub offset: i64,
}

/// Testimonial database operations
#[derive(Debug)]
pub struct TestimonialQueries;

impl TestimonialQueries {
    /// List testimonials matching the filter, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(pool: &PgPool, filter: &TestimonialFilter<'_>) -> Result<Vec<TestimonialDb>> {
        let query = r"
            SELECT * FROM testimonials
            WHERE ($1::text IS NULL OR author ILIKE $1 OR quote ILIKE $1)
              AND ($2::boolean IS NULL OR visible = $2)
              AND ($3::boolean IS NULL OR verified = $3)
            ORDER BY created_at DESC
            LIMIT $4 OFFSET $5
        ";

        sqlx::query_as::<_, TestimonialDb>(query)
            .bind(filter.search)
            .bind(filter.visible)
            .bind(filter.verified)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Count testimonials matching the filter
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(pool: &PgPool, filter: &TestimonialFilter<'_>) -> Result<i64> {
        let query = r"
            SELECT COUNT(*) AS count FROM testimonials
            WHERE ($1::text IS NULL OR author ILIKE $1 OR quote ILIKE $1)
              AND ($2::boolean IS NULL OR visible = $2)
              AND ($3::boolean IS NULL OR verified = $3)
        ";

        let row = sqlx::query(query)
            .bind(filter.search)
            .bind(filter.visible)
            .bind(filter.verified)
            .fetch_one(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(row.get("count"))
    }

    /// Find a testimonial by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<TestimonialDb>> {
        sqlx::query_as::<_, TestimonialDb>("SELECT * FROM testimonials WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Insert a new testimonial
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn insert(pool: &PgPool, testimonial: &Testimonial) -> Result<TestimonialDb> {
        let query = r"
            INSERT INTO testimonials (author, role, quote, rating, visible, verified)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
        ";

        sqlx::query_as::<_, TestimonialDb>(query)
            .bind(&testimonial.author)
            .bind(&testimonial.role)
            .bind(&testimonial.quote)
            .bind(testimonial.rating)
            .bind(testimonial.visible)
            .bind(testimonial.verified)
            .fetch_one(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Replace a testimonial's fields; `None` when the id does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        testimonial: &Testimonial,
    ) -> Result<Option<TestimonialDb>> {
        let query = r"
            UPDATE testimonials
            SET author = $1, role = $2, quote = $3, rating = $4,
                visible = $5, verified = $6, updated_at = NOW()
            WHERE id = $7
            RETURNING *
        ";

        sqlx::query_as::<_, TestimonialDb>(query)
            .bind(&testimonial.author)
            .bind(&testimonial.role)
            .bind(&testimonial.quote)
            .bind(testimonial.rating)
            .bind(testimonial.visible)
            .bind(testimonial.verified)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Delete a testimonial, returning the number of rows removed
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(result.rows_affected())
    }

    /// Flip the visibility flag in place
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn toggle_visible(pool: &PgPool, id: Uuid) -> Result<Option<TestimonialDb>> {
        sqlx::query_as::<_, TestimonialDb>(
            "UPDATE testimonials SET visible = NOT visible, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| Error::Database(e.to_string()))
    }

    /// Flip the verified flag in place
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn toggle_verified(pool: &PgPool, id: Uuid) -> Result<Option<TestimonialDb>> {
        sqlx::query_as::<_, TestimonialDb>(
            "UPDATE testimonials SET verified = NOT verified, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| Error::Database(e.to_string()))
    }
}

/// Filter for lecture listings
#[derive(Debug, Clone, Default)]
pub struct LectureFilter<'a> {
    /// ILIKE pattern over title/speaker
    pub search: Option<&'a str>,
    /// Exact category match
    pub category: Option<&'a str>,
    /// Visibility flag filter
    pub visible: Option<bool>,
    /// Maximum rows to return
    pub limit: i64,
    /// Rows to skip
    pub offset: i64,
}

/// Video lecture database operations
#[derive(Debug)]
pub struct LectureQueries;

impl LectureQueries {
    /// List lectures matching the filter, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(pool: &PgPool, filter: &LectureFilter<'_>) -> Result<Vec<LectureDb>> {
        let query = r"
            SELECT * FROM lectures
            WHERE ($1::text IS NULL OR title ILIKE $1 OR speaker ILIKE $1)
              AND ($2::text IS NULL OR category = $2)
              AND ($3::boolean IS NULL OR visible = $3)
            ORDER BY created_at DESC
            LIMIT $4 OFFSET $5
        ";

        sqlx::query_as::<_, LectureDb>(query)
            .bind(filter.search)
            .bind(filter.category)
            .bind(filter.visible)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Count lectures matching the filter
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(pool: &PgPool, filter: &LectureFilter<'_>) -> Result<i64> {
        let query = r"
            SELECT COUNT(*) AS count FROM lectures
            WHERE ($1::text IS NULL OR title ILIKE $1 OR speaker ILIKE $1)
              AND ($2::text IS NULL OR category = $2)
              AND ($3::boolean IS NULL OR visible = $3)
        ";

        let row = sqlx::query(query)
            .bind(filter.search)
            .bind(filter.category)
            .bind(filter.visible)
            .fetch_one(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(row.get("count"))
    }

    /// Find a lecture by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<LectureDb>> {
        sqlx::query_as::<_, LectureDb>("SELECT * FROM lectures WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Insert a new lecture
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn insert(pool: &PgPool, lecture: &Lecture) -> Result<LectureDb> {
        let query = r"
            INSERT INTO lectures (
                title, speaker, video_url, duration, category,
                views, visible, featured
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
        ";

        sqlx::query_as::<_, LectureDb>(query)
            .bind(&lecture.title)
            .bind(&lecture.speaker)
            .bind(&lecture.video_url)
            .bind(&lecture.duration)
            .bind(&lecture.category)
            .bind(lecture.views)
            .bind(lecture.visible)
            .bind(lecture.featured)
            .fetch_one(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Replace a lecture's fields; `None` when the id does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn update(pool: &PgPool, id: Uuid, lecture: &Lecture) -> Result<Option<LectureDb>> {
        let query = r"
            UPDATE lectures
            SET title = $1, speaker = $2, video_url = $3, duration = $4,
                category = $5, views = $6, visible = $7, featured = $8,
                updated_at = NOW()
            WHERE id = $9
            RETURNING *
        ";

        sqlx::query_as::<_, LectureDb>(query)
            .bind(&lecture.title)
            .bind(&lecture.speaker)
            .bind(&lecture.video_url)
            .bind(&lecture.duration)
            .bind(&lecture.category)
            .bind(lecture.views)
            .bind(lecture.visible)
            .bind(lecture.featured)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Delete a lecture, returning the number of rows removed
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM lectures WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(result.rows_affected())
    }

    /// Flip the visibility flag in place
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn toggle_visible(pool: &PgPool, id: Uuid) -> Result<Option<LectureDb>> {
        sqlx::query_as::<_, LectureDb>(
            "UPDATE lectures SET visible = NOT visible, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| Error::Database(e.to_string()))
    }

    /// Flip the featured flag in place
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn toggle_featured(pool: &PgPool, id: Uuid) -> Result<Option<LectureDb>> {
        sqlx::query_as::<_, LectureDb>(
            "UPDATE lectures SET featured = NOT featured, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| Error::Database(e.to_string()))
    }

    /// Bump the view counter by one
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn increment_views(pool: &PgPool, id: Uuid) -> Result<Option<LectureDb>> {
        sqlx::query_as::<_, LectureDb>(
            "UPDATE lectures SET views = views + 1 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| Error::Database(e.to_string()))
    }
}

/// Section settings database operations
#[derive(Debug)]
pub struct SectionSettingsQueries;

impl SectionSettingsQueries {
    /// Fetch the settings row for a page
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get(pool: &PgPool, page: &str) -> Result<Option<SectionSettingsDb>> {
        sqlx::query_as::<_, SectionSettingsDb>("SELECT * FROM section_settings WHERE page = $1")
            .bind(page)
            .fetch_optional(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Create or replace the settings row for a page
    ///
    /// Settings are edited in place by each admin page; the first save
    /// creates the row.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn upsert(
        pool: &PgPool,
        page: &str,
        settings: &SectionSettings,
    ) -> Result<SectionSettingsDb> {
        let query = r"
            INSERT INTO section_settings (page, title, subtitle, layout, items_per_page, show_stats)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (page) DO UPDATE
            SET title = EXCLUDED.title,
                subtitle = EXCLUDED.subtitle,
                layout = EXCLUDED.layout,
                items_per_page = EXCLUDED.items_per_page,
                show_stats = EXCLUDED.show_stats,
                updated_at = NOW()
            RETURNING *
        ";

        sqlx::query_as::<_, SectionSettingsDb>(query)
            .bind(page)
            .bind(&settings.title)
            .bind(&settings.subtitle)
            .bind(&settings.layout)
            .bind(settings.items_per_page)
            .bind(settings.show_stats)
            .fetch_one(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }
}

/// Per-collection totals for the dashboard stats panel
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CollectionCounts {
    /// Total records in the collection
    pub total: i64,
    /// Records currently visible on the public site
    pub visible: i64,
}

/// Aggregated counts across all collections
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DashboardCounts {
    /// Events collection
    pub events: CollectionCounts,
    /// Subscribers collection (visible = active)
    pub subscribers: CollectionCounts,
    /// Opportunities collection
    pub opportunities: CollectionCounts,
    /// Courses collection
    pub courses: CollectionCounts,
    /// Legal cases collection (visible = open or in progress)
    pub legal_cases: CollectionCounts,
    /// Laws collection
    pub laws: CollectionCounts,
    /// Testimonials collection
    pub testimonials: CollectionCounts,
    /// Lectures collection
    pub lectures: CollectionCounts,
}

/// Dashboard statistics operations
#[derive(Debug)]
pub struct StatsQueries;

impl StatsQueries {
    /// Gather totals and visible counts for every collection in one pass
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn dashboard(pool: &PgPool) -> Result<DashboardCounts> {
        let query = r"
            SELECT
                (SELECT COUNT(*) FROM events) AS events_total,
                (SELECT COUNT(*) FROM events WHERE visible) AS events_visible,
                (SELECT COUNT(*) FROM subscribers) AS subscribers_total,
                (SELECT COUNT(*) FROM subscribers WHERE status = 'active') AS subscribers_active,
                (SELECT COUNT(*) FROM opportunities) AS opportunities_total,
                (SELECT COUNT(*) FROM opportunities WHERE visible) AS opportunities_visible,
                (SELECT COUNT(*) FROM courses) AS courses_total,
                (SELECT COUNT(*) FROM courses WHERE visible) AS courses_visible,
                (SELECT COUNT(*) FROM legal_cases) AS legal_cases_total,
                (SELECT COUNT(*) FROM legal_cases WHERE status <> 'closed') AS legal_cases_open,
                (SELECT COUNT(*) FROM laws) AS laws_total,
                (SELECT COUNT(*) FROM laws WHERE visible) AS laws_visible,
                (SELECT COUNT(*) FROM testimonials) AS testimonials_total,
                (SELECT COUNT(*) FROM testimonials WHERE visible) AS testimonials_visible,
                (SELECT COUNT(*) FROM lectures) AS lectures_total,
                (SELECT COUNT(*) FROM lectures WHERE visible) AS lectures_visible
        ";

        let row = sqlx::query(query)
            .fetch_one(pool)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(DashboardCounts {
            events: CollectionCounts {
                total: row.get("events_total"),
                visible: row.get("events_visible"),
            },
            subscribers: CollectionCounts {
                total: row.get("subscribers_total"),
                visible: row.get("subscribers_active"),
            },
            opportunities: CollectionCounts {
                total: row.get("opportunities_total"),
                visible: row.get("opportunities_visible"),
            },
            courses: CollectionCounts {
                total: row.get("courses_total"),
                visible: row.get("courses_visible"),
            },
            legal_cases: CollectionCounts {
                total: row.get("legal_cases_total"),
                visible: row.get("legal_cases_open"),
            },
            laws: CollectionCounts {
                total: row.get("laws_total"),
                visible: row.get("laws_visible"),
            },
            testimonials: CollectionCounts {
                total: row.get("testimonials_total"),
                visible: row.get("testimonials_visible"),
            },
            lectures: CollectionCounts {
                total: row.get("lectures_total"),
                visible: row.get("lectures_visible"),
            },
        })
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_filter_defaults_are_unfiltered() {
        let filter = EventFilter::default();
        assert!(filter.search.is_none());
        assert!(filter.category.is_none());
        assert!(filter.visible.is_none());
        assert_eq!(filter.limit, 0);
        assert_eq!(filter.offset, 0);
    }

    #[test]
    fn test_filters_carry_borrowed_search_patterns() {
        let pattern = "%gala%".to_string();
        let filter = EventFilter {
            search: Some(pattern.as_str()),
            limit: 50,
            ..Default::default()
        };
        assert_eq!(filter.search, Some("%gala%"));
        assert_eq!(filter.limit, 50);
    }

    #[test]
    fn test_collection_counts_serde() {
        let counts = CollectionCounts {
            total: 10,
            visible: 7,
        };
        let json = serde_json::to_string(&counts).unwrap();
        let parsed: CollectionCounts = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.total, 10);
        assert_eq!(parsed.visible, 7);
    }

    #[test]
    fn test_dashboard_counts_shape() {
        let counts = DashboardCounts {
            events: CollectionCounts {
                total: 4,
                visible: 3,
            },
            subscribers: CollectionCounts {
                total: 100,
                visible: 98,
            },
            opportunities: CollectionCounts {
                total: 6,
                visible: 6,
            },
            courses: CollectionCounts {
                total: 2,
                visible: 1,
            },
            legal_cases: CollectionCounts {
                total: 9,
                visible: 5,
            },
            laws: CollectionCounts {
                total: 30,
                visible: 30,
            },
            testimonials: CollectionCounts {
                total: 12,
                visible: 8,
            },
            lectures: CollectionCounts {
                total: 5,
                visible: 4,
            },
        };

        // Visible subsets never exceed their totals
        for pair in [
            &counts.events,
            &counts.subscribers,
            &counts.opportunities,
            &counts.courses,
            &counts.legal_cases,
            &counts.laws,
            &counts.testimonials,
            &counts.lectures,
        ] {
            assert!(pair.visible <= pair.total);
        }

        let json = serde_json::to_value(&counts).unwrap();
        assert_eq!(json["events"]["total"], 4);
        assert_eq!(json["legal_cases"]["visible"], 5);
    }
}
