//! The `schooldesk generate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

use schooldesk_core::generate_questions;
use schooldesk_core::model::{PracticeTest, QuestionDistribution, TestConfig};
use schooldesk_core::seed::find_subject;

/// Upper bound on questions per test; every question is kept in memory and
/// in the stored collection.
const MAX_QUESTIONS: u64 = 10_000;

#[allow(clippy::too_many_arguments)]
pub fn execute(
    subject: String,
    chapters: Option<String>,
    easy: u32,
    medium: u32,
    hard: u32,
    time_limit: Option<u32>,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let (config, mut store) = super::open_store(config_path.as_deref())?;

    let chapters: Vec<String> = match chapters {
        Some(list) => list
            .split(',')
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect(),
        None => find_subject(&subject)
            .map(|s| s.chapters)
            .ok_or_else(|| {
                anyhow::anyhow!("unknown subject {subject:?}; pass --chapters explicitly")
            })?,
    };
    anyhow::ensure!(!chapters.is_empty(), "at least one chapter is required");

    let question_distribution = QuestionDistribution::new(easy, medium, hard);
    let total = question_distribution.total();
    anyhow::ensure!(total > 0, "a practice test needs at least one question");
    anyhow::ensure!(
        total <= MAX_QUESTIONS,
        "a practice test can have at most {MAX_QUESTIONS} questions, {total} requested"
    );
    let total_questions = u32::try_from(total).context("question count out of range")?;

    let test_config = TestConfig {
        subject,
        chapters,
        total_questions,
        time_limit: time_limit.unwrap_or(config.default_time_limit),
        question_distribution,
    };

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let questions = generate_questions(&test_config, &mut rng);
    let test = PracticeTest::new(&test_config, questions, Utc::now());
    let id = test.id.clone();
    let count = test.questions.len();

    store.add_test(test)?;
    tracing::info!(id = %id, subject = %test_config.subject, "saved practice test");

    println!(
        "Created practice test {id}: {} ({count} questions, {} min)",
        test_config.subject, test_config.time_limit
    );

    Ok(())
}
