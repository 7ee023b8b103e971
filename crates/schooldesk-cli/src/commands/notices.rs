//! The `schooldesk notices` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use schooldesk_core::notice::{filter_notices, CategoryFilter, SortBy};
use schooldesk_storage::load_config_from;

use super::OutputFormat;

pub fn execute(
    category: String,
    search: String,
    sort: String,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let category: CategoryFilter = category.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let sort_by: SortBy = sort.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let format: OutputFormat = format.parse()?;

    let config = load_config_from(config_path.as_deref())?;
    let notices = config.load_notices()?;
    let shown = filter_notices(&notices, category, &search, sort_by);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    if shown.is_empty() {
        println!("No notices match.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Title", "Category", "Priority", "Department"]);
    for notice in &shown {
        table.add_row(vec![
            Cell::new(&notice.date),
            Cell::new(&notice.title),
            Cell::new(notice.category.label()),
            Cell::new(notice.priority.label()),
            Cell::new(notice.department),
        ]);
    }

    println!("{table}");
    println!("{} of {} notice(s)", shown.len(), notices.len());

    Ok(())
}
