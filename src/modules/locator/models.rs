use std::path::{Path, PathBuf};

use crate::modules::common::utils;

/// 磁盘上的一个 .app 应用包
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationBundle {
    path: PathBuf,
}

impl ApplicationBundle {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 不含 `.app` 的包名
    pub fn stem(&self) -> String {
        utils::file_stem_string(&self.path)
    }

    pub fn contents_dir(&self) -> PathBuf {
        self.path.join("Contents")
    }

    pub fn info_plist_path(&self) -> PathBuf {
        self.contents_dir().join("Info.plist")
    }

    pub fn resources_dir(&self) -> PathBuf {
        self.contents_dir().join("Resources")
    }
}

impl std::fmt::Display for ApplicationBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
