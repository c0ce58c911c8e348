use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 一次图标备份的记录 (manifest.json)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupRecord {
    /// 备份时应用包的路径
    pub app_path: String,
    pub bundle_id: Option<String>,
    pub display_name: String,
    /// 图标相对于应用包根目录的路径
    pub icon_relpath: String,
    /// 备份图标的绝对路径
    pub backup_path: String,
    /// UTC 时间，`Z` 结尾
    pub timestamp: String,
}

/// 记录使用的时间格式
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}
