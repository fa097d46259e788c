use sqlx::PgPool;

use crate::database::models::user::UserEntity;

/// 用户表查询操作
pub struct UserOperation;

impl UserOperation {
    /// 根据ID查找用户
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: i64,
    ) -> Result<Option<UserEntity>, sqlx::Error> {
        let user = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, name, email
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// 批量读取用户，最多 limit 条
    pub async fn list_users(pool: &PgPool, limit: i64) -> Result<Vec<UserEntity>, sqlx::Error> {
        tracing::debug!("Loading up to {} users from database", limit);

        let users = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, name, email
            FROM users
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(users)
    }
}
