use std::fs::{self, File, FileTimes};
use std::path::{Path, PathBuf};

/// 应用包扩展名
pub const BUNDLE_EXTENSION: &str = "app";

/// 规范化应用名称，用作按名称搜索的匹配键
///
/// 去掉首尾空白和结尾的 `.app`（不区分大小写），再转小写。
pub fn normalize_app_name(name: &str) -> String {
    let trimmed = name.trim();
    let suffix = format!(".{}", BUNDLE_EXTENSION);
    let split = trimmed.len().saturating_sub(suffix.len());
    let stem = match trimmed.get(split..) {
        Some(tail) if tail.eq_ignore_ascii_case(&suffix) => &trimmed[..split],
        _ => trimmed,
    };
    stem.trim().to_lowercase()
}

/// 判断路径是否带有应用包扩展名
pub fn has_bundle_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == BUNDLE_EXTENSION)
        .unwrap_or(false)
}

/// 去掉扩展名后的文件名
pub fn file_stem_string(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// 展开 `~` 前缀
pub fn expand_user(raw: &str) -> PathBuf {
    match dirs::home_dir() {
        Some(home) => expand_user_with(raw, &home),
        None => PathBuf::from(raw),
    }
}

pub fn expand_user_with(raw: &str, home: &Path) -> PathBuf {
    if raw == "~" {
        return home.to_path_buf();
    }
    match raw.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(raw),
    }
}

/// 复制文件并保留权限位和访问/修改时间
pub fn copy_preserving_times(src: &Path, dst: &Path) -> std::io::Result<u64> {
    let bytes = fs::copy(src, dst)?;

    let metadata = fs::metadata(src)?;
    let times = FileTimes::new()
        .set_accessed(metadata.accessed()?)
        .set_modified(metadata.modified()?);
    // 目标可能继承了只读权限，只读句柄即可修改时间戳
    File::open(dst)?.set_times(times)?;

    tracing::debug!("已复制 {} -> {} ({} 字节)", src.display(), dst.display(), bytes);
    Ok(bytes)
}
