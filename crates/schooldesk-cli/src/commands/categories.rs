//! The `schooldesk categories` command.

use anyhow::Result;
use comfy_table::Table;

use schooldesk_core::notice::{Department, NoticeCategory};

pub fn execute() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Category", "Label", "Description"]);
    for category in NoticeCategory::ALL {
        table.add_row(vec![
            category.to_string(),
            category.label().to_string(),
            category.description().to_string(),
        ]);
    }
    println!("{table}");

    let departments: Vec<String> = Department::ALL.iter().map(|d| d.to_string()).collect();
    println!("Departments: {}", departments.join(", "));

    Ok(())
}
