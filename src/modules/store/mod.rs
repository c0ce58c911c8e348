//! 备份记录存储
//!
//! 每个应用在备份根目录下占用一个 `<slug>/` 子目录，内含固定名称的
//! `icon.icns` 和 `manifest.json`。同一 slug 只保留最近一次备份。

pub mod models;

use std::path::{Component, Path, PathBuf};

use crate::modules::common::error::IconkeepError;
use crate::modules::common::utils;
use crate::modules::locator::models::ApplicationBundle;
use models::BackupRecord;

pub const MANIFEST_FILE: &str = "manifest.json";
pub const ICON_FILE: &str = "icon.icns";

/// slug 必须是单个普通路径分量，保证记录落在备份根目录之下
pub fn is_valid_slug(slug: &str) -> bool {
    let mut components = Path::new(slug).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// 备份时使用的 slug：优先 bundle id，否则为包名
pub fn slug_for(bundle: &ApplicationBundle, bundle_id: Option<&str>) -> String {
    match bundle_id.filter(|id| is_valid_slug(id)) {
        Some(id) => id.to_string(),
        None => bundle.stem(),
    }
}

/// 恢复时依次尝试的 slug
///
/// 1. 当前元数据中的 bundle id
/// 2. 包名
/// 3. 用户输入的规范化形式
///
/// 惰性求值，命中即停止。绝对路径或多级路径形式的候选被跳过。
pub fn restore_slug_candidates<'a>(
    bundle: &'a ApplicationBundle,
    bundle_id: Option<&'a str>,
    reference: &'a str,
) -> impl Iterator<Item = String> + 'a {
    bundle_id
        .map(str::to_string)
        .into_iter()
        .chain(std::iter::once_with(move || bundle.stem()))
        .chain(std::iter::once_with(move || utils::normalize_app_name(reference)))
        .filter(|slug| is_valid_slug(slug))
}

#[derive(Debug, Clone)]
pub struct RecordStore {
    root: PathBuf,
}

impl RecordStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn slot_dir(&self, slug: &str) -> PathBuf {
        self.root.join(slug)
    }

    pub fn manifest_path(&self, slug: &str) -> PathBuf {
        self.slot_dir(slug).join(MANIFEST_FILE)
    }

    pub fn icon_path(&self, slug: &str) -> PathBuf {
        self.slot_dir(slug).join(ICON_FILE)
    }

    /// 确保 slug 目录存在，返回备份图标的目标路径
    pub fn prepare_slot(&self, slug: &str) -> Result<PathBuf, IconkeepError> {
        std::fs::create_dir_all(self.slot_dir(slug))?;
        Ok(self.icon_path(slug))
    }

    /// 写入记录，manifest 与备份图标位于同一目录，已存在时直接覆盖
    pub fn write(&self, record: &BackupRecord) -> Result<PathBuf, IconkeepError> {
        let manifest_path = Path::new(&record.backup_path).with_file_name(MANIFEST_FILE);
        if let Some(parent) = manifest_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // 先转成 Value，键按字母序输出
        let value = serde_json::to_value(record).map_err(|e| IconkeepError::Serde(e.to_string()))?;
        let content =
            serde_json::to_string_pretty(&value).map_err(|e| IconkeepError::Serde(e.to_string()))?;
        std::fs::write(&manifest_path, content)?;

        tracing::info!("已写入备份记录: {}", manifest_path.display());
        Ok(manifest_path)
    }

    /// 按顺序尝试候选 manifest，返回第一个存在且可解析的记录
    pub fn read<I>(&self, candidates: I) -> Result<BackupRecord, IconkeepError>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut tried = Vec::new();
        let mut last_malformed = None;

        for path in candidates {
            if path.is_file() {
                match read_manifest(&path) {
                    Ok(record) => {
                        tracing::debug!("使用备份记录: {}", path.display());
                        return Ok(record);
                    }
                    Err(e) => {
                        tracing::warn!("跳过无法解析的备份记录: {}", e);
                        last_malformed = Some(e);
                    }
                }
            }
            tried.push(path.display().to_string());
        }

        Err(last_malformed.unwrap_or_else(|| IconkeepError::NoManifest(tried.join(", "))))
    }

    /// 按 slug 顺序查找记录
    pub fn find<I>(&self, slugs: I) -> Result<BackupRecord, IconkeepError>
    where
        I: IntoIterator<Item = String>,
    {
        self.read(slugs.into_iter().map(|slug| self.manifest_path(&slug)))
    }

    /// 列出所有可读的备份记录，按 slug 排序
    pub fn list(&self) -> Result<Vec<(String, BackupRecord)>, IconkeepError> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            let manifest_path = entry.path().join(MANIFEST_FILE);
            if !manifest_path.is_file() {
                continue;
            }

            match read_manifest(&manifest_path) {
                Ok(record) => {
                    records.push((entry.file_name().to_string_lossy().to_string(), record))
                }
                Err(e) => tracing::warn!("跳过无法解析的备份记录: {}", e),
            }
        }

        records.sort_by(|left, right| left.0.cmp(&right.0));
        Ok(records)
    }
}

fn read_manifest(path: &Path) -> Result<BackupRecord, IconkeepError> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| IconkeepError::MalformedManifest {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
