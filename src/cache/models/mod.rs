// 缓存数据模型
// 定义缓存数据的结构体

pub mod user;

// 重新导出常用类型
pub use user::CachedUser;
