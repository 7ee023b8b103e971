//! The `schooldesk start` and `schooldesk complete` commands.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;

use schooldesk_core::model::PracticeTest;
use schooldesk_core::TestStore;
use schooldesk_storage::FileStore;

fn find(store: &TestStore<FileStore>, id: &str) -> Result<PracticeTest> {
    store
        .tests()
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("practice test not found: {id}"))
}

pub fn start(id: String, config_path: Option<PathBuf>) -> Result<()> {
    let (_, mut store) = super::open_store(config_path.as_deref())?;

    let mut test = find(&store, &id)?;
    test.start(Utc::now());
    store.update_test(test)?;

    println!("Started practice test {id}");
    Ok(())
}

pub fn complete(id: String, score: f64, config_path: Option<PathBuf>) -> Result<()> {
    anyhow::ensure!(
        score.is_finite() && score >= 0.0,
        "score must be a non-negative number"
    );

    let (_, mut store) = super::open_store(config_path.as_deref())?;

    let mut test = find(&store, &id)?;
    test.complete(score, Utc::now());
    store.update_test(test)?;

    println!("Completed practice test {id} with score {score:.1}");
    Ok(())
}
