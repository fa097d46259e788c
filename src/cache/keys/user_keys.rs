/// 用户信息缓存键前缀
const USER_KEY_PREFIX: &str = "user:";

/// 生成用户信息缓存键
pub fn user_key(user_id: i64) -> String {
    format!("{}{}", USER_KEY_PREFIX, user_id)
}

#[cfg(test)]
mod tests {
    use super::user_key;

    #[test]
    fn user_key_uses_fixed_prefix() {
        assert_eq!(user_key(42), "user:42");
        assert_eq!(user_key(999999), "user:999999");
    }
}
