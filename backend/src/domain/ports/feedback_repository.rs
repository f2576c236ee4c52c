//! Driven port for feedback persistence.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use pagination::{PageEnvelope, PageRequest};

use super::RepositoryError;
use crate::domain::{Feedback, NewFeedback};

/// Store of feedback records.
///
/// Reads are newest-first by submission timestamp; writes are transactional
/// in production adapters.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Persist a feedback submission, returning the stored record with its
    /// assigned identity and timestamp.
    async fn insert(&self, new: NewFeedback) -> Result<Feedback, RepositoryError>;

    /// Return one page of feedback, newest first.
    async fn list(&self, page: PageRequest) -> Result<PageEnvelope<Feedback>, RepositoryError>;

    /// Return every feedback record, newest first, for report generation.
    async fn list_all(&self) -> Result<Vec<Feedback>, RepositoryError>;
}

/// Deterministic in-memory feedback store for tests.
#[derive(Debug, Default)]
pub struct InMemoryFeedbackRepository {
    rows: Mutex<Vec<Feedback>>,
}

impl InMemoryFeedbackRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, Vec<Feedback>> {
        self.rows
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn newest_first(rows: &[Feedback]) -> Vec<Feedback> {
        let mut ordered = rows.to_vec();
        ordered.sort_by(|a, b| {
            b.submitted_at
                .cmp(&a.submitted_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        ordered
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryFeedbackRepository {
    async fn insert(&self, new: NewFeedback) -> Result<Feedback, RepositoryError> {
        let mut rows = self.guard();
        let feedback = Feedback {
            id: rows.len() as i64 + 1,
            visual_design: new.visual_design,
            ease_of_navigation: new.ease_of_navigation,
            mobile_responsiveness: new.mobile_responsiveness,
            overall_satisfaction: new.overall_satisfaction,
            ease_of_tasks: new.ease_of_tasks,
            quality_of_services: new.quality_of_services,
            visual_design_issue: new.visual_design_issue,
            ease_of_navigation_issue: new.ease_of_navigation_issue,
            mobile_responsiveness_issue: new.mobile_responsiveness_issue,
            overall_satisfaction_issue: new.overall_satisfaction_issue,
            ease_of_tasks_issue: new.ease_of_tasks_issue,
            quality_of_services_issue: new.quality_of_services_issue,
            like_most: new.like_most,
            improvements: new.improvements,
            features: new.features,
            legal_challenges: new.legal_challenges,
            additional_comments: new.additional_comments,
            contact_willing: new.contact_willing,
            contact_email: new.contact_email,
            submitted_at: Utc::now(),
            ip_address: new.client.ip_address,
            user_agent: new.client.user_agent,
        };
        rows.push(feedback.clone());
        Ok(feedback)
    }

    async fn list(&self, page: PageRequest) -> Result<PageEnvelope<Feedback>, RepositoryError> {
        let rows = self.guard();
        let ordered = Self::newest_first(&rows);
        let total = ordered.len() as u64;
        let items = ordered
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(page.per_page()).unwrap_or(usize::MAX))
            .collect();
        Ok(PageEnvelope::new(items, total, page))
    }

    async fn list_all(&self) -> Result<Vec<Feedback>, RepositoryError> {
        let rows = self.guard();
        Ok(Self::newest_first(&rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_preserves_unanswered_questions_as_none() {
        let repo = InMemoryFeedbackRepository::new();
        let stored = repo
            .insert(NewFeedback {
                overall_satisfaction: Some(4),
                ..NewFeedback::default()
            })
            .await
            .expect("insert");

        assert_eq!(stored.id, 1);
        assert_eq!(stored.overall_satisfaction, Some(4));
        assert_eq!(stored.visual_design, None);
        assert_eq!(stored.like_most, None);
        assert_eq!(stored.contact_willing, None);
    }

    #[tokio::test]
    async fn pagination_clamps_and_pages_correctly() {
        let repo = InMemoryFeedbackRepository::new();
        for _ in 0..3 {
            repo.insert(NewFeedback::default()).await.expect("insert");
        }

        let request = PageRequest::from_params(Some(2), Some(2));
        let page = repo.list(request).await.expect("list");
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 3);
        assert_eq!(page.pages, 2);
        assert_eq!(page.current_page, 2);
    }
}
