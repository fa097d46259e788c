// 用户表查询操作
pub mod user;

// 重新导出常用类型
pub use user::UserOperation;
