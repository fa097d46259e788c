use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 用户数据库实体
/// 本工具只读取用户表，不存在更新路径
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct UserEntity {
    pub id: i64,
    pub name: String,
    pub email: String,
}
