//! 测试用的应用包夹具

use std::fs;
use std::path::{Path, PathBuf};

pub struct TempRoot {
    pub path: PathBuf,
}

impl TempRoot {
    pub fn new(test_name: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "iconkeep-test-{}-{}",
            test_name,
            uuid::Uuid::new_v4()
        ));
        fs::create_dir_all(&path).unwrap_or_else(|e| panic!("failed to create temp root: {e}"));
        Self { path }
    }

    pub fn join(&self, part: impl AsRef<Path>) -> PathBuf {
        self.path.join(part)
    }
}

impl Drop for TempRoot {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// 把若干 `<key>..</key><value>` 片段包装成 XML plist
pub fn plist_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
{body}
</dict>
</plist>
"#
    )
}

/// 创建一个最小的 .app 目录结构，返回包路径
pub fn make_bundle(parent: &Path, name: &str, info_body: Option<&str>) -> PathBuf {
    let bundle = parent.join(format!("{name}.app"));
    let resources = bundle.join("Contents").join("Resources");
    fs::create_dir_all(&resources).unwrap_or_else(|e| panic!("failed to create bundle: {e}"));
    if let Some(body) = info_body {
        fs::write(bundle.join("Contents").join("Info.plist"), plist_xml(body))
            .unwrap_or_else(|e| panic!("failed to write Info.plist: {e}"));
    }
    bundle
}

/// 在包内按相对路径写入文件，自动创建父目录
pub fn write_bundle_file(bundle: &Path, relpath: &str, bytes: &[u8]) -> PathBuf {
    let path = bundle.join(relpath);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap_or_else(|e| panic!("failed to create dir: {e}"));
    }
    fs::write(&path, bytes).unwrap_or_else(|e| panic!("failed to write file: {e}"));
    path
}
