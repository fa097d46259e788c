// 缓存预热模块

use std::sync::Arc;
use std::time::Duration;

use redis::Client as RedisClient;
use sqlx::PgPool;

use crate::cache::models::user::CachedUser;
use crate::cache::operations::user::UserCacheOperations;
use crate::database::operations::user::UserOperation;
use crate::error::AppError;

/// 批量预热用户缓存
/// 一次批量查询读取用户表，逐条写入 Redis，返回预热条数
/// 只写不读，已有条目会被直接覆盖
pub async fn warm_user_cache(
    pool: &PgPool,
    redis: &Arc<RedisClient>,
    limit: i64,
    ttl: Duration,
) -> Result<usize, AppError> {
    tracing::info!("Preloading Redis with user data...");

    let users = UserOperation::list_users(pool, limit).await?;

    for user in &users {
        let cached = CachedUser::from(user);
        UserCacheOperations::cache_user(redis, &cached, ttl).await?;
    }

    tracing::info!("Preloaded {} users into Redis", users.len());

    Ok(users.len())
}
