// 用户缓存操作
pub mod user;

// 重新导出常用类型
pub use user::UserCacheOperations;
