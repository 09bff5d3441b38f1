//! Members repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::member::{Member, UpdateMember},
};

#[derive(Clone)]
pub struct MembersRepository {
    pool: Pool<Postgres>,
}

impl MembersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get member by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Member> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE member_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))
    }

    /// Create a standalone member, not yet associated with any library
    pub async fn create(&self, name: &str) -> AppResult<Member> {
        let member =
            sqlx::query_as::<_, Member>("INSERT INTO members (name) VALUES ($1) RETURNING *")
                .bind(name)
                .fetch_one(&self.pool)
                .await?;
        Ok(member)
    }

    /// Create a member and associate it with a library in one transaction
    pub async fn create_in_library(&self, library_id: i32, name: &str) -> AppResult<Member> {
        let mut tx = self.pool.begin().await?;

        let member =
            sqlx::query_as::<_, Member>("INSERT INTO members (name) VALUES ($1) RETURNING *")
                .bind(name)
                .fetch_one(&mut *tx)
                .await?;

        sqlx::query("INSERT INTO library_members (library_id, member_id) VALUES ($1, $2)")
            .bind(library_id)
            .bind(member.member_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(member)
    }

    /// Apply a partial update; absent fields keep their current value
    pub async fn update(&self, id: i32, update: &UpdateMember) -> AppResult<Member> {
        sqlx::query_as::<_, Member>(
            r#"
            UPDATE members
            SET name = COALESCE($1::text, name)
            WHERE member_id = $2
            RETURNING *
            "#,
        )
        .bind(update.name.as_deref())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Member not found".to_string()))
    }

    /// Delete a member entity. Outstanding loan references trip the
    /// store's foreign keys and surface as a store failure.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM members WHERE member_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Member not found".to_string()));
        }
        Ok(())
    }
}
