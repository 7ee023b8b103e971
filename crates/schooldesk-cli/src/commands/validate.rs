//! The `schooldesk validate` command.

use std::path::PathBuf;

use anyhow::Result;

use schooldesk_core::notice::validate_notices;
use schooldesk_storage::config::load_notices_file;

pub fn execute(path: PathBuf) -> Result<()> {
    let notices = load_notices_file(&path)?;
    println!("Notices: {} ({} entries)", path.display(), notices.len());

    let warnings = validate_notices(&notices);
    for w in &warnings {
        let prefix = w
            .notice_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("All notices valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
