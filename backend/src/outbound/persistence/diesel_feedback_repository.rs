//! PostgreSQL-backed `FeedbackRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::{PageEnvelope, PageRequest};

use crate::domain::ports::{FeedbackRepository, RepositoryError};
use crate::domain::{Feedback, NewFeedback};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{FeedbackRow, NewFeedbackRow};
use super::pool::DbPool;
use super::schema::feedback;

/// Diesel-backed implementation of the feedback repository port.
#[derive(Clone)]
pub struct DieselFeedbackRepository {
    pool: DbPool,
}

impl DieselFeedbackRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_feedback(row: FeedbackRow) -> Feedback {
    Feedback {
        id: row.id,
        visual_design: row.visual_design,
        ease_of_navigation: row.ease_of_navigation,
        mobile_responsiveness: row.mobile_responsiveness,
        overall_satisfaction: row.overall_satisfaction,
        ease_of_tasks: row.ease_of_tasks,
        quality_of_services: row.quality_of_services,
        visual_design_issue: row.visual_design_issue,
        ease_of_navigation_issue: row.ease_of_navigation_issue,
        mobile_responsiveness_issue: row.mobile_responsiveness_issue,
        overall_satisfaction_issue: row.overall_satisfaction_issue,
        ease_of_tasks_issue: row.ease_of_tasks_issue,
        quality_of_services_issue: row.quality_of_services_issue,
        like_most: row.like_most,
        improvements: row.improvements,
        features: row.features,
        legal_challenges: row.legal_challenges,
        additional_comments: row.additional_comments,
        contact_willing: row.contact_willing,
        contact_email: row.contact_email,
        submitted_at: row.submitted_at,
        ip_address: row.ip_address,
        user_agent: row.user_agent,
    }
}

#[async_trait]
impl FeedbackRepository for DieselFeedbackRepository {
    async fn insert(&self, new: NewFeedback) -> Result<Feedback, RepositoryError> {
        use diesel_async::AsyncConnection as _;
        use diesel_async::scoped_futures::ScopedFutureExt as _;

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewFeedbackRow {
            visual_design: new.visual_design,
            ease_of_navigation: new.ease_of_navigation,
            mobile_responsiveness: new.mobile_responsiveness,
            overall_satisfaction: new.overall_satisfaction,
            ease_of_tasks: new.ease_of_tasks,
            quality_of_services: new.quality_of_services,
            visual_design_issue: new.visual_design_issue.as_deref(),
            ease_of_navigation_issue: new.ease_of_navigation_issue.as_deref(),
            mobile_responsiveness_issue: new.mobile_responsiveness_issue.as_deref(),
            overall_satisfaction_issue: new.overall_satisfaction_issue.as_deref(),
            ease_of_tasks_issue: new.ease_of_tasks_issue.as_deref(),
            quality_of_services_issue: new.quality_of_services_issue.as_deref(),
            like_most: new.like_most.as_deref(),
            improvements: new.improvements.as_deref(),
            features: new.features.as_deref(),
            legal_challenges: new.legal_challenges.as_deref(),
            additional_comments: new.additional_comments.as_deref(),
            contact_willing: new.contact_willing.as_deref(),
            contact_email: new.contact_email.as_deref(),
            ip_address: new.client.ip_address.as_deref(),
            user_agent: new.client.user_agent.as_deref(),
        };

        // Submissions persist atomically; a failed write leaves no row.
        let row: FeedbackRow = conn
            .transaction(|conn| {
                async move {
                    diesel::insert_into(feedback::table)
                        .values(&new_row)
                        .returning(FeedbackRow::as_returning())
                        .get_result(conn)
                        .await
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_feedback(row))
    }

    async fn list(&self, page: PageRequest) -> Result<PageEnvelope<Feedback>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = feedback::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let rows: Vec<FeedbackRow> = feedback::table
            .order(feedback::submitted_at.desc())
            .then_order_by(feedback::id.desc())
            .limit(i64::try_from(page.per_page()).unwrap_or(i64::MAX))
            .offset(i64::try_from(page.offset()).unwrap_or(i64::MAX))
            .select(FeedbackRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let items = rows.into_iter().map(row_to_feedback).collect();

        Ok(PageEnvelope::new(
            items,
            u64::try_from(total).unwrap_or_default(),
            page,
        ))
    }

    async fn list_all(&self) -> Result<Vec<Feedback>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<FeedbackRow> = feedback::table
            .order(feedback::submitted_at.desc())
            .then_order_by(feedback::id.desc())
            .select(FeedbackRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_feedback).collect())
    }
}
