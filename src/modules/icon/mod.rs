//! 图标文件解析
//!
//! 先按元数据中的候选名依次查找 `Contents/Resources`，全部落空时
//! 退回到目录中按字典序排列的第一个 `.icns` 文件。

use std::path::{Path, PathBuf};

use crate::modules::common::error::IconkeepError;
use crate::modules::locator::models::ApplicationBundle;
use crate::modules::metadata::BundleMetadata;

/// 标准图标文件扩展名
pub const ICON_EXTENSION: &str = "icns";

/// 按优先级产出候选图标名：单个图标文件 > 图标文件列表 > 主图标的文件列表
///
/// 不去重，先解析成功者胜出。
pub fn icon_candidates(metadata: &BundleMetadata) -> impl Iterator<Item = &str> {
    metadata
        .icon_file()
        .into_iter()
        .chain(metadata.icon_files())
        .chain(metadata.primary_icon_files())
}

/// 候选名对应的文件路径，没有扩展名时补上 `.icns`
pub fn candidate_path(resources: &Path, name: &str) -> PathBuf {
    let mut path = resources.join(name);
    if Path::new(name).extension().is_none() {
        path.set_extension(ICON_EXTENSION);
    }
    path
}

pub fn resolve_icon(
    bundle: &ApplicationBundle,
    metadata: &BundleMetadata,
) -> Result<PathBuf, IconkeepError> {
    let resources = bundle.resources_dir();

    for name in icon_candidates(metadata) {
        let path = candidate_path(&resources, name);
        if path.is_file() {
            tracing::debug!("图标候选 {:?} 命中: {}", name, path.display());
            return Ok(path);
        }
        tracing::debug!("图标候选 {:?} 不存在: {}", name, path.display());
    }

    match first_icns_file(&resources) {
        Some(path) => {
            tracing::info!("元数据未指明可用图标，使用回退文件: {}", path.display());
            Ok(path)
        }
        None => Err(IconkeepError::IconNotFound(resources)),
    }
}

/// Resources 目录中字典序最小的 `.icns` 文件
fn first_icns_file(resources: &Path) -> Option<PathBuf> {
    if !resources.is_dir() {
        return None;
    }

    let pattern = format!(
        "{}/*.{}",
        glob::Pattern::escape(&resources.to_string_lossy()),
        ICON_EXTENSION
    );

    let mut files: Vec<PathBuf> = glob::glob(&pattern)
        .ok()?
        .filter_map(|e| e.ok())
        .filter(|path| path.is_file())
        .collect();

    files.sort();
    files.into_iter().next()
}
