//! PostgreSQL-backed `RegistrationRepository` implementation using Diesel ORM.

use std::str::FromStr;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::{PageEnvelope, PageRequest};

use crate::domain::ports::{RegistrationRepository, RepositoryError};
use crate::domain::{NewRegistration, Registration, UserType};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewRegistrationRow, RegistrationRow};
use super::pool::DbPool;
use super::schema::user_registrations;

/// Diesel-backed implementation of the registration repository port.
#[derive(Clone)]
pub struct DieselRegistrationRepository {
    pool: DbPool,
}

impl DieselRegistrationRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Convert a database row into a domain registration.
///
/// Fails if the stored `user_type` is outside the enumeration, which means
/// the row predates the current constraints or was written out of band.
fn row_to_registration(row: RegistrationRow) -> Result<Registration, RepositoryError> {
    let user_type = UserType::from_str(&row.user_type)
        .map_err(|err| RepositoryError::query(err.to_string()))?;

    Ok(Registration {
        id: row.id,
        name: row.name,
        email: row.email,
        phone: row.phone,
        gender: row.gender,
        profession: row.profession,
        user_type,
        submitted_at: row.submitted_at,
        ip_address: row.ip_address,
        user_agent: row.user_agent,
    })
}

#[async_trait]
impl RegistrationRepository for DieselRegistrationRepository {
    async fn insert(&self, new: NewRegistration) -> Result<Registration, RepositoryError> {
        use diesel_async::AsyncConnection as _;
        use diesel_async::scoped_futures::ScopedFutureExt as _;

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewRegistrationRow {
            name: &new.name,
            email: &new.email,
            phone: &new.phone,
            gender: new.gender.as_deref(),
            profession: new.profession.as_deref(),
            user_type: new.user_type.as_str(),
            ip_address: new.client.ip_address.as_deref(),
            user_agent: new.client.user_agent.as_deref(),
        };

        // Submissions persist atomically; a failed write leaves no row.
        let row: RegistrationRow = conn
            .transaction(|conn| {
                async move {
                    diesel::insert_into(user_registrations::table)
                        .values(&new_row)
                        .returning(RegistrationRow::as_returning())
                        .get_result(conn)
                        .await
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        row_to_registration(row)
    }

    async fn list(&self, page: PageRequest) -> Result<PageEnvelope<Registration>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = user_registrations::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let rows: Vec<RegistrationRow> = user_registrations::table
            .order(user_registrations::submitted_at.desc())
            .then_order_by(user_registrations::id.desc())
            .limit(i64::try_from(page.per_page()).unwrap_or(i64::MAX))
            .offset(i64::try_from(page.offset()).unwrap_or(i64::MAX))
            .select(RegistrationRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let items = rows
            .into_iter()
            .map(row_to_registration)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageEnvelope::new(
            items,
            u64::try_from(total).unwrap_or_default(),
            page,
        ))
    }

    async fn list_all(&self) -> Result<Vec<Registration>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<RegistrationRow> = user_registrations::table
            .order(user_registrations::submitted_at.desc())
            .then_order_by(user_registrations::id.desc())
            .select(RegistrationRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_registration).collect()
    }
}
