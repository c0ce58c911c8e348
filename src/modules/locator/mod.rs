//! 应用包定位
//!
//! 把用户输入（路径或名称）解析为磁盘上的 .app 目录。

pub mod models;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::modules::common::error::IconkeepError;
use crate::modules::common::utils;
use models::ApplicationBundle;

/// 默认的应用搜索根目录，按优先级排列
pub fn default_search_roots() -> Vec<PathBuf> {
    let mut roots = vec![
        PathBuf::from("/Applications"),
        PathBuf::from("/System/Applications"),
    ];
    roots.push(utils::expand_user("~/Applications"));
    roots
}

#[derive(Debug, Clone)]
pub struct BundleLocator {
    search_roots: Vec<PathBuf>,
}

impl BundleLocator {
    pub fn new(search_roots: Vec<PathBuf>) -> Self {
        Self { search_roots }
    }

    pub fn search_roots(&self) -> &[PathBuf] {
        &self.search_roots
    }

    /// 解析应用引用
    ///
    /// 引用指向已存在的路径时，返回该路径本身或其最近的 `.app` 祖先目录；
    /// 否则按名称在搜索根目录中递归查找。
    pub fn locate(&self, reference: &str) -> Result<ApplicationBundle, IconkeepError> {
        let candidate = utils::expand_user(reference);
        if candidate.exists() {
            return bundle_from_existing_path(reference, &candidate);
        }

        let target = utils::normalize_app_name(reference);
        for root in &self.search_roots {
            if !root.exists() {
                continue;
            }
            tracing::debug!("搜索目录: {}", root.display());

            if let Some(found) = find_in_root(root, &target) {
                tracing::debug!("{:?} 解析为 {}", reference, found.display());
                return Ok(ApplicationBundle::new(found));
            }
        }

        Err(IconkeepError::NotFound(reference.to_string()))
    }
}

impl Default for BundleLocator {
    fn default() -> Self {
        Self::new(default_search_roots())
    }
}

fn bundle_from_existing_path(
    reference: &str,
    candidate: &Path,
) -> Result<ApplicationBundle, IconkeepError> {
    let absolute = std::path::absolute(candidate)?;

    absolute
        .ancestors()
        .find(|path| utils::has_bundle_extension(path))
        .map(|path| ApplicationBundle::new(path.to_path_buf()))
        .ok_or_else(|| IconkeepError::InvalidBundle(reference.to_string()))
}

/// 在单个根目录中查找名称匹配的应用包，目录内遍历顺序由文件系统决定
fn find_in_root(root: &Path, target: &str) -> Option<PathBuf> {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .find(|path| {
            utils::has_bundle_extension(path)
                && path.is_dir()
                && path
                    .file_name()
                    .map(|name| utils::normalize_app_name(&name.to_string_lossy()) == target)
                    .unwrap_or(false)
        })
}
