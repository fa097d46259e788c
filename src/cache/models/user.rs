use serde::{Deserialize, Serialize};

use crate::database::models::user::UserEntity;

/// 用户缓存数据模型
/// 缓存中的副本是用户记录的定时快照，过期后自动失效
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CachedUser {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<&UserEntity> for CachedUser {
    fn from(user: &UserEntity) -> Self {
        CachedUser {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CachedUser;
    use crate::database::models::user::UserEntity;

    #[test]
    fn serde_round_trip_preserves_fields() {
        let cached = CachedUser {
            id: 42,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };

        let json = serde_json::to_string(&cached).unwrap();
        let parsed: CachedUser = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, cached);
    }

    #[test]
    fn from_entity_copies_all_fields() {
        let entity = UserEntity {
            id: 7,
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
        };

        let cached = CachedUser::from(&entity);

        assert_eq!(cached.id, 7);
        assert_eq!(cached.name, "Grace");
        assert_eq!(cached.email, "grace@example.com");
    }
}
