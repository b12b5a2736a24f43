// src/infrastructure/repositories/slugs.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::slug::{Slug, SlugAvailability};
use async_trait::async_trait;
use sqlx::PgConnection;

#[derive(Debug, Clone, Copy)]
pub(super) enum SlugTable {
    Posts,
    Categories,
}

impl SlugTable {
    const fn lookup_sql(self) -> &'static str {
        match self {
            Self::Posts => "SELECT id FROM posts WHERE slug = $1 LIMIT 1",
            Self::Categories => "SELECT id FROM categories WHERE slug = $1 LIMIT 1",
        }
    }

    /// Key for the transaction-scoped advisory lock serialising slug writers.
    const fn lock_key(self) -> i64 {
        match self {
            Self::Posts => 0x5155_494c_0001,
            Self::Categories => 0x5155_494c_0002,
        }
    }
}

/// Probes slug candidates on the connection of an open transaction.
pub(super) struct SlugProbe<'c> {
    conn: &'c mut PgConnection,
    table: SlugTable,
    owner: Option<i64>,
}

impl<'c> SlugProbe<'c> {
    /// Take the table's slug lock for the rest of the transaction and return a
    /// probe. `owner` is the row being renamed, whose own slug counts as free.
    pub(super) async fn lock(
        conn: &'c mut PgConnection,
        table: SlugTable,
        owner: Option<i64>,
    ) -> DomainResult<Self> {
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(table.lock_key())
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx)?;
        Ok(Self { conn, table, owner })
    }
}

#[async_trait]
impl SlugAvailability for SlugProbe<'_> {
    async fn is_available(&mut self, candidate: &Slug) -> DomainResult<bool> {
        let existing: Option<i64> = sqlx::query_scalar(self.table.lookup_sql())
            .bind(candidate.as_str())
            .fetch_optional(&mut *self.conn)
            .await
            .map_err(map_sqlx)?;

        Ok(match existing {
            None => true,
            Some(id) => self.owner == Some(id),
        })
    }
}
