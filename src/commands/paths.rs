use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use super::Context;

#[derive(Parser, Debug)]
pub struct PathsCommand {}

pub fn execute(_cmd: PathsCommand, ctx: &Context) -> Result<ExitCode> {
    let dirs = &ctx.dirs;

    println!("config:   {}", dirs.config_dir.display());
    println!("app list: {}", ctx.app_list.display());
    println!("data:     {}", dirs.data_dir.display());
    println!("backups:  {}", ctx.keeper.store().root().display());
    println!("state:    {}", dirs.state_dir.display());
    println!("logs:     {}", dirs.log_dir().display());
    println!("cache:    {}", dirs.cache_dir.display());

    println!("\nsearch roots (in order):");
    for root in ctx.keeper.locator().search_roots() {
        let marker = if root.exists() { "" } else { " (missing)" };
        println!("  {}{}", root.display(), marker);
    }

    Ok(ExitCode::SUCCESS)
}
