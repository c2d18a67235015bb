/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_millis_is_recent() {
        // 2024-01-01 00:00:00 UTC
        assert!(now_millis() > 1_704_067_200_000);
    }
}
