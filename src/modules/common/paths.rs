//! 基础目录解析
//!
//! 遵循 XDG 环境变量，未设置时回退到用户主目录下的约定位置，
//! 每个目录都以 `iconkeep` 作为命名空间。

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::utils::expand_user_with;

pub const APP_NAME: &str = "iconkeep";

/// 已解析的基础目录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
    pub state_dir: PathBuf,
    pub cache_dir: PathBuf,
}

impl AppDirs {
    pub fn from_env() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::from_lookup(&home, |key| std::env::var_os(key))
    }

    /// 通过注入的变量查询函数解析目录，测试中无需修改进程环境
    pub fn from_lookup<F>(home: &Path, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let resolve = |var: &str, fallback: &[&str]| -> PathBuf {
            let base = lookup(var)
                .filter(|value| !value.is_empty())
                .map(|value| expand_user_with(&value.to_string_lossy(), home))
                .unwrap_or_else(|| fallback.iter().fold(home.to_path_buf(), |acc, part| acc.join(part)));
            base.join(APP_NAME)
        };

        Self {
            config_dir: resolve("XDG_CONFIG_HOME", &[".config"]),
            data_dir: resolve("XDG_DATA_HOME", &[".local", "share"]),
            state_dir: resolve("XDG_STATE_HOME", &[".local", "state"]),
            cache_dir: resolve("XDG_CACHE_HOME", &[".cache"]),
        }
    }

    /// 备份根目录，每个应用一个子目录
    pub fn backup_root(&self) -> PathBuf {
        self.data_dir.join("backups")
    }

    /// 批量模式使用的应用列表
    pub fn app_list_path(&self) -> PathBuf {
        self.config_dir.join("apps")
    }

    pub fn log_dir(&self) -> PathBuf {
        self.state_dir.join("logs")
    }
}
