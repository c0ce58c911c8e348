pub mod backup;
pub mod list;
pub mod paths;
pub mod restore;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::modules::common::paths::AppDirs;
use crate::modules::config;
use crate::modules::keeper::batch::run_batch;
use crate::modules::keeper::{Keeper, Operation};
use crate::modules::locator::BundleLocator;
use crate::modules::store::RecordStore;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 备份应用图标 (不指定应用时处理配置列表中的全部应用)
    Backup(backup::BackupCommand),

    /// 恢复应用图标 (不指定应用时处理配置列表中的全部应用)
    Restore(restore::RestoreCommand),

    /// 列出已有的备份
    List(list::ListCommand),

    /// 显示配置、备份和日志所在位置
    Paths(paths::PathsCommand),
}

/// 命令执行时共享的环境
pub struct Context {
    pub dirs: AppDirs,
    pub app_list: PathBuf,
    pub keeper: Keeper,
}

impl Context {
    pub fn new(dirs: AppDirs, app_list: Option<PathBuf>) -> Self {
        let app_list = app_list.unwrap_or_else(|| dirs.app_list_path());
        let keeper = Keeper::new(
            BundleLocator::default(),
            RecordStore::new(dirs.backup_root()),
        );
        Self {
            dirs,
            app_list,
            keeper,
        }
    }
}

/// 对单个应用或整个应用列表执行操作
pub(crate) fn run_operation(
    ctx: &Context,
    operation: Operation,
    app: Option<&str>,
) -> Result<ExitCode> {
    let code = run_operation_with(
        ctx,
        operation,
        app,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )?;
    Ok(ExitCode::from(code))
}

/// 结果行写入 `out`，批量失败写入 `err`，返回进程退出码
fn run_operation_with<O, E>(
    ctx: &Context,
    operation: Operation,
    app: Option<&str>,
    out: &mut O,
    err: &mut E,
) -> Result<u8>
where
    O: Write,
    E: Write,
{
    if let Some(app) = app {
        writeln!(out, "{}", ctx.keeper.run(operation, app)?)?;
        return Ok(0);
    }

    let apps = config::load_app_list(&ctx.app_list)?;
    tracing::info!("批量{}: {} 个应用", operation, apps.len());

    let summary = run_batch(&apps, |app| {
        writeln!(out, "{}", ctx.keeper.run(operation, app)?)?;
        Ok(())
    });

    for failure in &summary.failures {
        writeln!(err, "Error: {}: {}", failure.app, failure.error)?;
    }

    Ok(summary.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::common::error::IconkeepError;
    use crate::modules::common::testing::{make_bundle, write_bundle_file, TempRoot};
    use std::fs;

    fn fixture_context(root: &TempRoot, app_list_body: &str) -> Context {
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

        let app_list = root.join("apps");
        assert!(fs::write(&app_list, app_list_body).is_ok());

        let dirs = AppDirs::from_lookup(&root.path, |_| None);
        Context {
            keeper: Keeper::new(
                BundleLocator::new(vec![apps_dir]),
                RecordStore::new(root.join("backups")),
            ),
            dirs,
            app_list,
        }
    }

    #[test]
    fn batch_reports_failed_entries_and_exits_with_one() {
        let root = TempRoot::new("command-batch-failure");
        let ctx = fixture_context(&root, "# icons\nAlpha\nBeta\n\nGamma\n");

        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run_operation_with(&ctx, Operation::Backup, None, &mut out, &mut err).unwrap();
        assert_eq!(code, 1);

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Backed up icon for Alpha -> "));
        assert!(lines[1].starts_with("Backed up icon for Gamma -> "));

        let err = String::from_utf8(err).unwrap();
        assert_eq!(
            err,
            format!("Error: Beta: {}\n", IconkeepError::NotFound("Beta".to_string()))
        );
    }

    #[test]
    fn batch_exits_with_zero_when_all_entries_succeed() {
        let root = TempRoot::new("command-batch-success");
        let ctx = fixture_context(&root, "Alpha\nGamma\n");

        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run_operation_with(&ctx, Operation::Backup, None, &mut out, &mut err).unwrap();
        assert_eq!(code, 0);
        assert!(err.is_empty());

        let code = run_operation_with(&ctx, Operation::Restore, None, &mut out, &mut err).unwrap();
        assert_eq!(code, 0);
        assert!(String::from_utf8(out).unwrap().contains("Restored icon for Gamma -> "));
    }

    #[test]
    fn single_app_failure_propagates_as_error() {
        let root = TempRoot::new("command-single-failure");
        let ctx = fixture_context(&root, "Alpha\n");

        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = run_operation_with(&ctx, Operation::Restore, Some("Alpha"), &mut out, &mut err);
        let error = result.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<IconkeepError>(),
            Some(IconkeepError::NoManifest(_))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn batch_without_app_list_is_an_error() {
        let root = TempRoot::new("command-missing-list");
        let mut ctx = fixture_context(&root, "Alpha\n");
        ctx.app_list = root.join("missing-apps");

        let mut out = Vec::new();
        let mut err = Vec::new();
        let error = run_operation_with(&ctx, Operation::Backup, None, &mut out, &mut err).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<IconkeepError>(),
            Some(IconkeepError::MissingConfig(_))
        ));
    }
}
