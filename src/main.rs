use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use iconkeep_lib::commands::{self, Command, Context};
use iconkeep_lib::modules::common::{logging, paths::AppDirs};

#[derive(Parser, Debug)]
#[command(name = "iconkeep")]
#[command(about = "Back up and restore macOS application icons.", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// 批量模式使用的应用列表文件
    #[arg(long, global = true, env = "ICONKEEP_APP_LIST")]
    app_list: Option<PathBuf>,

    /// 详细输出模式
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let dirs = AppDirs::from_env();
    logging::init_logging(cli.verbose, &dirs.log_dir());

    let ctx = Context::new(dirs, cli.app_list);

    let result = match cli.command {
        Command::Backup(cmd) => commands::backup::execute(cmd, &ctx),
        Command::Restore(cmd) => commands::restore::execute(cmd, &ctx),
        Command::List(cmd) => commands::list::execute(cmd, &ctx),
        Command::Paths(cmd) => commands::paths::execute(cmd, &ctx),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!("{:#}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
