use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use super::{run_operation, Context};
use crate::modules::keeper::Operation;

#[derive(Parser, Debug)]
pub struct BackupCommand {
    /// 应用名称或 .app 路径 (省略则使用配置列表)
    pub app: Option<String>,
}

pub fn execute(cmd: BackupCommand, ctx: &Context) -> Result<ExitCode> {
    run_operation(ctx, Operation::Backup, cmd.app.as_deref())
}
