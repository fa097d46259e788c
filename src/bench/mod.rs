// 基准测试模块
// 对比纯数据库读取与缓存优先读取的总耗时

use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use redis::Client as RedisClient;
use sqlx::PgPool;

use crate::access::{self, CacheOutcome};
use crate::config::Config;
use crate::database::operations::user::UserOperation;
use crate::error::AppError;

/// 基准测试结果
#[derive(Debug)]
pub struct BenchReport {
    pub without_cache: Duration,
    pub with_cache: Duration,
}

impl BenchReport {
    /// 将两个阶段的总耗时输出到标准输出
    pub fn print(&self) {
        println!(
            "Without Redis: {} seconds",
            self.without_cache.as_secs_f64()
        );
        println!("With Redis: {} seconds", self.with_cache.as_secs_f64());
    }
}

/// 运行两阶段基准测试
/// 两个阶段各自独立抽取随机ID，ID序列不保证一致
pub async fn run_benchmark(
    pool: &PgPool,
    redis: &Arc<RedisClient>,
    config: &Config,
) -> Result<BenchReport, AppError> {
    let requests = config.bench_requests;
    let id_range = config.user_id_range;
    let ttl = config.cache_ttl();

    // 第一阶段：只查数据库
    tracing::info!("Running {} requests without cache", requests);
    let start = Instant::now();
    for _ in 0..requests {
        let user_id = rand::thread_rng().gen_range(1..=id_range);
        UserOperation::find_by_id(pool, user_id).await?;
    }
    let without_cache = start.elapsed();

    // 第二阶段：先缓存后数据库
    tracing::info!("Running {} requests with cache", requests);
    let mut hits: u32 = 0;
    let start = Instant::now();
    for _ in 0..requests {
        let user_id = rand::thread_rng().gen_range(1..=id_range);
        let (outcome, _) = access::get_user(pool, redis, user_id, ttl).await?;
        if outcome == CacheOutcome::Hit {
            hits += 1;
        }
    }
    let with_cache = start.elapsed();

    tracing::info!("Cache hits: {}/{}", hits, requests);

    Ok(BenchReport {
        without_cache,
        with_cache,
    })
}
