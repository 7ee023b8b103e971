//! The `schooldesk init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("schooldesk.toml").exists() {
        println!("schooldesk.toml already exists, skipping.");
    } else {
        std::fs::write("schooldesk.toml", SAMPLE_CONFIG)?;
        println!("Created schooldesk.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: schooldesk subjects");
    println!("  2. Run: schooldesk generate --subject Mathematics");
    println!("  3. Run: schooldesk notices --sort priority");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# schooldesk configuration

# Where practice tests are stored (one JSON file per storage key).
data_dir = "./schooldesk-data"
storage_key = "practiceTests"

# Minutes allowed when `generate` is run without --time-limit.
default_time_limit = 30

# JSON array of notices to show instead of the built-in ones.
# notices_file = "./notices.json"
"#;
