//! 批量模式：逐个处理应用列表，单个失败不影响其余条目

use crate::modules::common::error::IconkeepError;

#[derive(Debug)]
pub struct BatchFailure {
    pub app: String,
    pub error: IconkeepError,
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub succeeded: Vec<String>,
    pub failures: Vec<BatchFailure>,
}

impl BatchSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// 任一条目失败则返回 1
    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

/// 依次对每个应用执行 `op`，收集失败而不中断
pub fn run_batch<F>(apps: &[String], mut op: F) -> BatchSummary
where
    F: FnMut(&str) -> Result<(), IconkeepError>,
{
    let mut summary = BatchSummary::default();

    for app in apps {
        match op(app) {
            Ok(()) => summary.succeeded.push(app.clone()),
            Err(error) => {
                tracing::warn!("处理 {} 失败: {}", app, error);
                summary.failures.push(BatchFailure {
                    app: app.clone(),
                    error,
                });
            }
        }
    }

    tracing::info!(
        "批量处理完成: 成功 {}, 失败 {}",
        summary.succeeded.len(),
        summary.failures.len()
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::common::testing::{make_bundle, write_bundle_file, TempRoot};
    use crate::modules::keeper::{Keeper, Operation};
    use crate::modules::locator::BundleLocator;
    use crate::modules::store::RecordStore;
    use std::fs;

    #[test]
    fn run_batch_continues_after_failures() {
        let root = TempRoot::new("batch");
        let apps_dir = root.join("Applications");
        for name in ["Alpha", "Gamma"] {
            let bundle = make_bundle(
                &apps_dir,
                name,
                Some(&format!(
                    "<key>CFBundleIdentifier</key><string>com.example.{}</string>",
                    name.to_lowercase()
                )),
            );
            write_bundle_file(&bundle, "Contents/Resources/AppIcon.icns", name.as_bytes());
        }

        let keeper = Keeper::new(
            BundleLocator::new(vec![apps_dir]),
            RecordStore::new(root.join("backups")),
        );
        let apps: Vec<String> = ["Alpha", "Beta", "Gamma"].iter().map(|s| s.to_string()).collect();

        let mut lines = Vec::new();
        let summary = run_batch(&apps, |app| {
            lines.push(keeper.run(Operation::Backup, app)?);
            Ok(())
        });

        assert_eq!(summary.succeeded, vec!["Alpha", "Gamma"]);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].app, "Beta");
        assert!(matches!(summary.failures[0].error, IconkeepError::NotFound(_)));
        assert_eq!(summary.exit_code(), 1);

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Backed up icon for Alpha"));
        assert!(lines[1].starts_with("Backed up icon for Gamma"));
        assert_eq!(
            fs::read(keeper.store().icon_path("com.example.gamma")).unwrap(),
            b"Gamma"
        );
    }

    #[test]
    fn run_batch_succeeds_when_every_entry_succeeds() {
        let apps = vec!["one".to_string(), "two".to_string()];
        let summary = run_batch(&apps, |_| Ok(()));
        assert!(summary.is_success());
        assert_eq!(summary.exit_code(), 0);
    }
}
