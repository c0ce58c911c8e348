//! 批量模式的应用列表
//!
//! 每行一个应用名称或路径，空行和 `#` 开头的注释行被忽略。

use std::path::Path;

use crate::modules::common::error::IconkeepError;

pub fn parse_app_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn load_app_list(path: &Path) -> Result<Vec<String>, IconkeepError> {
    if !path.is_file() {
        return Err(IconkeepError::MissingConfig(path.to_path_buf()));
    }

    let apps = parse_app_list(&std::fs::read_to_string(path)?);
    if apps.is_empty() {
        return Err(IconkeepError::EmptyConfig(path.to_path_buf()));
    }

    tracing::debug!("从 {} 读取到 {} 个应用", path.display(), apps.len());
    Ok(apps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::common::testing::TempRoot;
    use std::fs;

    #[test]
    fn parse_app_list_skips_comments_and_blank_lines() {
        let content = "# my apps\nSafari\n\n   \n  Visual Studio Code.app  \n#Terminal\n~/Applications/Foo.app\n";
        assert_eq!(
            parse_app_list(content),
            vec!["Safari", "Visual Studio Code.app", "~/Applications/Foo.app"]
        );
    }

    #[test]
    fn load_app_list_reports_missing_and_empty_files() {
        let root = TempRoot::new("config");
        let path = root.join("apps");

        let err = load_app_list(&path).unwrap_err();
        assert!(matches!(err, IconkeepError::MissingConfig(_)));

        assert!(fs::write(&path, "# nothing yet\n\n").is_ok());
        let err = load_app_list(&path).unwrap_err();
        assert!(matches!(err, IconkeepError::EmptyConfig(_)));

        assert!(fs::write(&path, "Safari\n").is_ok());
        assert_eq!(load_app_list(&path).unwrap(), vec!["Safari"]);
    }
}
