// 用户数据库模型
pub mod user;

// 重新导出常用类型
pub use user::UserEntity;
