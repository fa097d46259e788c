// 读取访问模块
// 实现先缓存后数据库的读取路径

pub mod user;

// 重新导出常用类型和函数
pub use user::{CacheOutcome, get_user};
