//! The `schooldesk subjects` command.

use anyhow::Result;

use schooldesk_core::seed::available_subjects;

pub fn execute() -> Result<()> {
    for subject in available_subjects() {
        println!("{}", subject.subject);
        for chapter in &subject.chapters {
            println!("  - {chapter}");
        }
    }
    Ok(())
}
