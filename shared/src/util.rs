/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a UUID v4 string for use as a resource ID.
///
/// Used for admin, employee, category, and leave IDs so that IDs are
/// unguessable and safe to mint on any node.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
