//! Info.plist 读取
//!
//! plist 的值类型不固定，这里的访问器遇到类型不符一律当作缺失处理。

use plist::{Dictionary, Value};

use crate::modules::common::error::IconkeepError;
use crate::modules::locator::models::ApplicationBundle;

pub const KEY_BUNDLE_IDENTIFIER: &str = "CFBundleIdentifier";
pub const KEY_BUNDLE_NAME: &str = "CFBundleName";
pub const KEY_ICON_FILE: &str = "CFBundleIconFile";
pub const KEY_ICON_FILES: &str = "CFBundleIconFiles";
pub const KEY_ICONS: &str = "CFBundleIcons";
pub const KEY_PRIMARY_ICON: &str = "CFBundlePrimaryIcon";

/// 应用包的元数据
#[derive(Debug, Clone, Default)]
pub struct BundleMetadata {
    entries: Dictionary,
}

impl BundleMetadata {
    pub fn from_dictionary(entries: Dictionary) -> Self {
        Self { entries }
    }

    pub fn string(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_string)
    }

    /// 字符串数组，非字符串元素和空串会被跳过
    pub fn string_list(&self, key: &str) -> Vec<&str> {
        string_entries(self.entries.get(key))
    }

    pub fn bundle_identifier(&self) -> Option<&str> {
        self.string(KEY_BUNDLE_IDENTIFIER).filter(|s| !s.is_empty())
    }

    pub fn bundle_name(&self) -> Option<&str> {
        self.string(KEY_BUNDLE_NAME).filter(|s| !s.is_empty())
    }

    pub fn icon_file(&self) -> Option<&str> {
        self.string(KEY_ICON_FILE).filter(|s| !s.is_empty())
    }

    pub fn icon_files(&self) -> Vec<&str> {
        self.string_list(KEY_ICON_FILES)
    }

    /// `CFBundleIcons.CFBundlePrimaryIcon.CFBundleIconFiles`
    pub fn primary_icon_files(&self) -> Vec<&str> {
        let primary = self
            .entries
            .get(KEY_ICONS)
            .and_then(Value::as_dictionary)
            .and_then(|icons| icons.get(KEY_PRIMARY_ICON))
            .and_then(Value::as_dictionary);

        match primary {
            Some(primary) => string_entries(primary.get(KEY_ICON_FILES)),
            None => Vec::new(),
        }
    }
}

fn string_entries(value: Option<&Value>) -> Vec<&str> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_string)
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// 读取 `Contents/Info.plist`，支持 XML 和二进制格式
pub fn read_metadata(bundle: &ApplicationBundle) -> Result<BundleMetadata, IconkeepError> {
    let path = bundle.info_plist_path();
    if !path.is_file() {
        return Err(IconkeepError::MissingMetadata(path));
    }

    let value = Value::from_file(&path).map_err(|e| IconkeepError::MalformedMetadata {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let entries = value
        .into_dictionary()
        .ok_or_else(|| IconkeepError::MalformedMetadata {
            path: path.clone(),
            reason: "top-level value is not a dictionary".to_string(),
        })?;

    tracing::debug!("已读取 {} ({} 个键)", path.display(), entries.len());
    Ok(BundleMetadata::from_dictionary(entries))
}
