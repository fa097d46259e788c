use std::sync::Arc;
use std::time::Duration;

use redis::{AsyncCommands, Client as RedisClient};

use crate::cache::keys::user_keys;
use crate::cache::models::user::CachedUser;
use crate::error::AppError;

/// 用户缓存操作
pub struct UserCacheOperations;

impl UserCacheOperations {
    /// 将用户信息写入 Redis，带过期时间
    pub async fn cache_user(
        redis: &Arc<RedisClient>,
        user: &CachedUser,
        ttl: Duration,
    ) -> Result<(), AppError> {
        let mut conn = redis.get_multiplexed_async_connection().await?;

        let key = user_keys::user_key(user.id);
        let json = serde_json::to_string(user)?;

        let _: () = conn.set_ex(key, json, ttl.as_secs()).await?;

        Ok(())
    }

    /// 从 Redis 读取用户信息，不存在时返回 None
    pub async fn get_cached_user(
        redis: &Arc<RedisClient>,
        user_id: i64,
    ) -> Result<Option<CachedUser>, AppError> {
        let mut conn = redis.get_multiplexed_async_connection().await?;

        let key = user_keys::user_key(user_id);
        let result: Option<String> = conn.get(key).await?;

        match result {
            Some(json) => {
                let cached_user = serde_json::from_str(&json)?;
                Ok(Some(cached_user))
            }
            None => Ok(None),
        }
    }
}
