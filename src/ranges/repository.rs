//! Repository trait and PostgreSQL implementation for range sets.
//!
//! Every operation takes the authenticated user id explicitly; there is
//! no ambient or default user anywhere in this crate. Ownership is
//! enforced inside each SQL predicate, so a row that exists but belongs
//! to another user is reported exactly like a missing row.

use async_trait::async_trait;
use log::debug;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::errors::{RangeError, RangeResult};
use super::models::{
    RangeSet, RangeSetFilter, RangeSetId, RangeSetInput, RangeSetUpdate, TableType, UserId,
};

/// Trait for ownership-scoped range set persistence.
///
/// Each operation executes as a single atomic statement; updates are
/// last-writer-wins with no version column (a record is assumed to have
/// one concurrent writer, its owner). Reads are idempotent; a repeated
/// `create` produces a second row.
#[async_trait]
pub trait RangeSetRepository: Send + Sync {
    /// Validate and persist a new range set, assigning its id and
    /// timestamps.
    async fn create(&self, user_id: UserId, input: RangeSetInput) -> RangeResult<RangeSet>;

    /// Replace a set's chart document whole, optionally renaming it.
    /// Fails with `NotFound` when `(id, user_id)` matches no row.
    async fn update(
        &self,
        id: RangeSetId,
        user_id: UserId,
        update: RangeSetUpdate,
    ) -> RangeResult<RangeSet>;

    /// Delete a set. Returns whether a row was deleted; absent and
    /// foreign ids both come back `false`.
    async fn delete(&self, id: RangeSetId, user_id: UserId) -> RangeResult<bool>;

    /// Fetch one set owned by `user_id`.
    async fn get(&self, id: RangeSetId, user_id: UserId) -> RangeResult<RangeSet>;

    /// List the user's sets matching a conjunctive partial filter,
    /// most recently updated first.
    async fn list(&self, user_id: UserId, filter: RangeSetFilter) -> RangeResult<Vec<RangeSet>>;
}

/// Default PostgreSQL implementation of `RangeSetRepository`
pub struct PgRangeSetRepository {
    pool: PgPool,
}

impl PgRangeSetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_range_set(row: &PgRow) -> Result<RangeSet, sqlx::Error> {
    let raw_type: String = row.get("table_type");
    let table_type = TableType::parse(&raw_type)
        .ok_or_else(|| sqlx::Error::Decode(format!("unknown table type {raw_type:?}").into()))?;

    Ok(RangeSet {
        id: row.get("id"),
        user_id: row.get("user_id"),
        name: row.get("name"),
        table_type,
        category: row.get("category"),
        starting_stack: row.get("starting_stack"),
        bounty: row.get("bounty"),
        range_data: row.get("range_data"),
        created_at: row.get::<chrono::NaiveDateTime, _>("created_at").and_utc(),
        updated_at: row.get::<chrono::NaiveDateTime, _>("updated_at").and_utc(),
    })
}

#[async_trait]
impl RangeSetRepository for PgRangeSetRepository {
    async fn create(&self, user_id: UserId, input: RangeSetInput) -> RangeResult<RangeSet> {
        input.validate()?;

        let row = sqlx::query(
            r#"
            INSERT INTO range_sets (user_id, name, table_type, category, starting_stack, bounty, range_data)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, name, table_type, category, starting_stack, bounty, range_data, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(input.name.trim())
        .bind(input.table_type.as_str())
        .bind(input.category.trim())
        .bind(input.starting_stack)
        .bind(input.bounty)
        .bind(&input.range_data)
        .fetch_one(&self.pool)
        .await?;

        let set = row_to_range_set(&row)?;
        debug!("created range set {} for user {user_id}", set.id);
        Ok(set)
    }

    async fn update(
        &self,
        id: RangeSetId,
        user_id: UserId,
        update: RangeSetUpdate,
    ) -> RangeResult<RangeSet> {
        update.validate()?;

        let row = sqlx::query(
            r#"
            UPDATE range_sets
            SET range_data = $3, name = COALESCE($4, name), updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, name, table_type, category, starting_stack, bounty, range_data, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&update.range_data)
        .bind(update.normalized_name())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RangeError::NotFound)?;

        Ok(row_to_range_set(&row)?)
    }

    async fn delete(&self, id: RangeSetId, user_id: UserId) -> RangeResult<bool> {
        let result = sqlx::query("DELETE FROM range_sets WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            debug!("deleted range set {id} for user {user_id}");
        }
        Ok(deleted)
    }

    async fn get(&self, id: RangeSetId, user_id: UserId) -> RangeResult<RangeSet> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, name, table_type, category, starting_stack, bounty, range_data, created_at, updated_at
            FROM range_sets
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RangeError::NotFound)?;

        Ok(row_to_range_set(&row)?)
    }

    async fn list(&self, user_id: UserId, filter: RangeSetFilter) -> RangeResult<Vec<RangeSet>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, name, table_type, category, starting_stack, bounty, range_data, created_at, updated_at
            FROM range_sets
            WHERE user_id = $1
              AND ($2::TEXT IS NULL OR table_type = $2)
              AND ($3::TEXT IS NULL OR category = $3)
              AND ($4::BIGINT IS NULL OR starting_stack = $4)
              AND ($5::BOOLEAN IS NULL OR bounty = $5)
            ORDER BY updated_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .bind(filter.table_type.map(TableType::as_str))
        .bind(filter.category.as_deref())
        .bind(filter.starting_stack)
        .bind(filter.bounty)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| row_to_range_set(row).map_err(Into::into))
            .collect()
    }
}
