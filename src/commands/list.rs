use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use super::Context;
use crate::modules::store::models::BackupRecord;

#[derive(Parser, Debug)]
pub struct ListCommand {
    /// 输出格式 (table/json)
    #[arg(long, default_value = "table")]
    pub format: String,
}

#[derive(Serialize)]
struct ListedBackup<'a> {
    slug: &'a str,
    #[serde(flatten)]
    record: &'a BackupRecord,
}

pub fn execute(cmd: ListCommand, ctx: &Context) -> Result<ExitCode> {
    let records = ctx.keeper.store().list()?;
    tracing::debug!("在 {} 下找到 {} 个备份", ctx.keeper.store().root().display(), records.len());

    match cmd.format.as_str() {
        "json" => {
            let listed: Vec<ListedBackup> = records
                .iter()
                .map(|(slug, record)| ListedBackup { slug, record })
                .collect();
            println!("{}", serde_json::to_string_pretty(&listed)?);
        }
        _ => print_table(&records),
    }

    Ok(ExitCode::SUCCESS)
}

fn print_table(records: &[(String, BackupRecord)]) {
    println!("\n{}", "=".repeat(100));
    println!("{:<30} {:<40} {:<28}", "Name", "Slug", "Backed up at");
    println!("{}", "=".repeat(100));

    for (slug, record) in records {
        println!(
            "{:<30} {:<40} {:<28}",
            truncate_string(&record.display_name, 29),
            truncate_string(slug, 39),
            record.timestamp
        );
    }

    println!("{}", "=".repeat(100));
    println!("Total: {} backups\n", records.len());
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let chars: String = s.chars().take(max_len - 2).collect();
        format!("{}..", chars)
    } else {
        s.to_string()
    }
}
