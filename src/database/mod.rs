// 数据库模块
// 包含数据库实体定义和查询操作

pub mod models; // 数据库实体定义
pub mod operations; // 数据库操作实现

// 重新导出常用类型和函数，方便其他模块使用
pub use models::user::UserEntity;
pub use operations::user::UserOperation;
