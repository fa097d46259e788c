use std::env;
use std::time::Duration;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    pub cache_ttl_secs: u64,
    pub preload_limit: i64,
    pub bench_requests: u32,
    pub user_id_range: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        Ok(Config {
            database_url: env::var("DATABASE_URL")?,
            redis_url: env::var("REDIS_URL")?,
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            preload_limit: env::var("PRELOAD_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            bench_requests: env::var("BENCH_REQUESTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            user_id_range: env::var("USER_ID_RANGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
        })
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use std::time::Duration;

    #[test]
    fn cache_ttl_converts_seconds() {
        let config = Config {
            database_url: "postgres://localhost/app".to_string(),
            redis_url: "redis://localhost".to_string(),
            cache_ttl_secs: 300,
            preload_limit: 10_000,
            bench_requests: 10_000,
            user_id_range: 10_000,
        };

        assert_eq!(config.cache_ttl(), Duration::from_secs(300));
    }
}
