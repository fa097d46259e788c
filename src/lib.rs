use config::Config;
use sqlx::PgPool;
use std::sync::Arc;
use redis::Client as RedisClient;

pub mod access;
pub mod bench;
pub mod cache;
pub mod config;
pub mod database;
pub mod error;
pub mod preload;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
    pub redis: Arc<RedisClient>,
}
