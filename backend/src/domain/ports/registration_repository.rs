//! Driven port for registration persistence.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use pagination::{PageEnvelope, PageRequest};

use super::RepositoryError;
use crate::domain::{NewRegistration, Registration};

/// Store of registration records.
///
/// Reads are newest-first by submission timestamp; writes are transactional
/// in production adapters.
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Persist a registration, returning the stored record with its
    /// assigned identity and timestamp.
    async fn insert(&self, new: NewRegistration) -> Result<Registration, RepositoryError>;

    /// Return one page of registrations, newest first.
    async fn list(&self, page: PageRequest) -> Result<PageEnvelope<Registration>, RepositoryError>;

    /// Return every registration, newest first, for report generation.
    async fn list_all(&self) -> Result<Vec<Registration>, RepositoryError>;
}

/// Deterministic in-memory registration store for tests.
#[derive(Debug, Default)]
pub struct InMemoryRegistrationRepository {
    rows: Mutex<Vec<Registration>>,
}

impl InMemoryRegistrationRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, Vec<Registration>> {
        self.rows
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn newest_first(rows: &[Registration]) -> Vec<Registration> {
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
impl RegistrationRepository for InMemoryRegistrationRepository {
    async fn insert(&self, new: NewRegistration) -> Result<Registration, RepositoryError> {
        let mut rows = self.guard();
        let registration = Registration {
            id: rows.len() as i64 + 1,
            name: new.name,
            email: new.email,
            phone: new.phone,
            gender: new.gender,
            profession: new.profession,
            user_type: new.user_type,
            submitted_at: Utc::now(),
            ip_address: new.client.ip_address,
            user_agent: new.client.user_agent,
        };
        rows.push(registration.clone());
        Ok(registration)
    }

    async fn list(&self, page: PageRequest) -> Result<PageEnvelope<Registration>, RepositoryError> {
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

    async fn list_all(&self) -> Result<Vec<Registration>, RepositoryError> {
        let rows = self.guard();
        Ok(Self::newest_first(&rows))
    }
}
