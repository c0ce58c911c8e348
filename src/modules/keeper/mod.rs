//! 备份与恢复流程
//!
//! 定位应用包 → 读取元数据 → 解析图标 → 读写备份记录。

pub mod batch;

use std::path::PathBuf;

use chrono::Utc;

use crate::modules::common::error::IconkeepError;
use crate::modules::common::utils;
use crate::modules::icon;
use crate::modules::locator::BundleLocator;
use crate::modules::metadata;
use crate::modules::store::models::{format_timestamp, BackupRecord};
use crate::modules::store::{self, RecordStore};

/// 单个应用上执行的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Backup,
    Restore,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Backup => write!(f, "backup"),
            Operation::Restore => write!(f, "restore"),
        }
    }
}

/// 恢复结果
#[derive(Debug, Clone)]
pub struct RestoreOutcome {
    pub record: BackupRecord,
    /// 实际写入的图标路径
    pub target: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Keeper {
    locator: BundleLocator,
    store: RecordStore,
}

impl Keeper {
    pub fn new(locator: BundleLocator, store: RecordStore) -> Self {
        Self { locator, store }
    }

    pub fn locator(&self) -> &BundleLocator {
        &self.locator
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// 执行操作并返回面向用户的结果行
    pub fn run(&self, operation: Operation, reference: &str) -> Result<String, IconkeepError> {
        match operation {
            Operation::Backup => {
                let record = self.backup(reference)?;
                Ok(format!(
                    "Backed up icon for {} -> {}",
                    record.display_name, record.backup_path
                ))
            }
            Operation::Restore => {
                let outcome = self.restore(reference)?;
                Ok(format!(
                    "Restored icon for {} -> {}",
                    outcome.record.display_name,
                    outcome.target.display()
                ))
            }
        }
    }

    /// 备份应用图标
    ///
    /// 图标复制成功后才写入 manifest，同一 slug 的旧备份被覆盖。
    pub fn backup(&self, reference: &str) -> Result<BackupRecord, IconkeepError> {
        let bundle = self.locator.locate(reference)?;
        let info = metadata::read_metadata(&bundle)?;
        let icon_path = icon::resolve_icon(&bundle, &info)?;

        let bundle_id = info.bundle_identifier();
        let display_name = info
            .bundle_name()
            .map(str::to_string)
            .unwrap_or_else(|| bundle.stem());

        let icon_relpath = icon_path
            .strip_prefix(bundle.path())
            .map_err(|_| IconkeepError::IconNotFound(icon_path.clone()))?
            .to_string_lossy()
            .to_string();

        let slug = store::slug_for(&bundle, bundle_id);
        let backup_icon_path = self.store.prepare_slot(&slug)?;
        utils::copy_preserving_times(&icon_path, &backup_icon_path)?;

        let record = BackupRecord {
            app_path: bundle.path().to_string_lossy().to_string(),
            bundle_id: bundle_id.map(str::to_string),
            display_name,
            icon_relpath,
            backup_path: backup_icon_path.to_string_lossy().to_string(),
            timestamp: format_timestamp(Utc::now()),
        };
        self.store.write(&record)?;

        tracing::info!("已备份 {} ({}) -> {}", record.display_name, slug, record.backup_path);
        Ok(record)
    }

    /// 恢复应用图标
    ///
    /// 目标路径由当前定位到的应用包加上记录中的相对路径得出，
    /// 不使用记录里保存的旧包路径。
    pub fn restore(&self, reference: &str) -> Result<RestoreOutcome, IconkeepError> {
        let bundle = self.locator.locate(reference)?;
        let info = metadata::read_metadata(&bundle)?;

        let record = self.store.find(store::restore_slug_candidates(
            &bundle,
            info.bundle_identifier(),
            reference,
        ))?;

        let backup_icon_path = PathBuf::from(&record.backup_path);
        if !backup_icon_path.is_file() {
            return Err(IconkeepError::MissingBackupFile(backup_icon_path));
        }

        let target = bundle.path().join(&record.icon_relpath);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        utils::copy_preserving_times(&backup_icon_path, &target)?;

        tracing::info!("已恢复 {} -> {}", record.display_name, target.display());
        Ok(RestoreOutcome { record, target })
    }
}
