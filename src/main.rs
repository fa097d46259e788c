use std::sync::Arc;

use cachebench::{
    AppState, bench::run_benchmark, config::Config, error::AppError, preload::warm_user_cache,
};
use sqlx::Executor;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env()?;

    // 设置数据库连接池
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                conn.execute("SET application_name = 'cachebench';").await?;
                Ok(())
            })
        })
        .connect(&config.database_url)
        .await?;

    // 设置 Redis 客户端
    let redis_client = redis::Client::open(config.redis_url.clone())?;
    let redis_arc = Arc::new(redis_client);

    // 设置应用状态
    let state = AppState {
        pool,
        config: config.clone(),
        redis: redis_arc,
    };

    // 预热缓存，提高后续命中率
    warm_user_cache(
        &state.pool,
        &state.redis,
        state.config.preload_limit,
        state.config.cache_ttl(),
    )
    .await?;

    // 两阶段基准测试
    let report = run_benchmark(&state.pool, &state.redis, &state.config).await?;
    report.print();

    Ok(())
}
