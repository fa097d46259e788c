use std::sync::Arc;
use std::time::Duration;

use redis::Client as RedisClient;
use sqlx::PgPool;

use crate::cache::models::user::CachedUser;
use crate::cache::operations::user::UserCacheOperations;
use crate::database::operations::user::UserOperation;
use crate::error::AppError;

/// 缓存读取结果标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    Hit,
    Miss,
}

/// 根据ID解析用户：先查缓存，未命中时回退数据库并回写缓存
/// 用户不存在时返回未命中且不写缓存
pub async fn get_user(
    pool: &PgPool,
    redis: &Arc<RedisClient>,
    user_id: i64,
    ttl: Duration,
) -> Result<(CacheOutcome, Option<CachedUser>), AppError> {
    // 先查 Redis
    if let Some(cached) = UserCacheOperations::get_cached_user(redis, user_id).await? {
        tracing::debug!("Cache hit for user {}", user_id);
        return Ok((CacheOutcome::Hit, Some(cached)));
    }

    // 缓存未命中，回退数据库
    let user = match UserOperation::find_by_id(pool, user_id).await? {
        Some(user) => user,
        None => return Ok((CacheOutcome::Miss, None)),
    };

    // 回写缓存
    let cached = CachedUser::from(&user);
    UserCacheOperations::cache_user(redis, &cached, ttl).await?;

    Ok((CacheOutcome::Miss, Some(cached)))
}
