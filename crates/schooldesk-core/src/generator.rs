//! Randomized practice-question generation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Question, TestConfig, OPTION_COUNT};

const OPTION_LABELS: [char; OPTION_COUNT] = ['A', 'B', 'C', 'D'];

/// Generate the questions for a practice test.
///
/// Produces exactly `count` questions per difficulty tier, walking the tiers
/// in `easy, medium, hard` order and numbering ids `q1, q2, ...` as they
/// are created. Each question draws its chapter uniformly (with replacement)
/// from `config.chapters` and a uniform correct answer. The full list is
/// shuffled before it is returned.
///
/// All randomness comes from `rng`; pass a seeded RNG for reproducible output.
pub fn generate_questions<R: Rng + ?Sized>(config: &TestConfig, rng: &mut R) -> Vec<Question> {
    let total = config.question_distribution.total() as usize;
    let mut questions = Vec::with_capacity(total);

    if config.chapters.is_empty() && total > 0 {
        tracing::warn!(subject = %config.subject, "generating questions without chapters");
    }

    for (difficulty, count) in config.question_distribution.iter() {
        for i in 1..=count {
            let chapter = config
                .chapters
                .choose(rng)
                .map(String::as_str)
                .unwrap_or_default();

            questions.push(Question {
                id: format!("q{}", questions.len() + 1),
                text: format!("Question {i} for {} - {chapter}", config.subject),
                options: OPTION_LABELS.map(|label| format!("Option {label} for question {i}")),
                correct_answer: rng.gen_range(0..OPTION_COUNT),
                selected_answer: None,
                difficulty,
            });
        }
    }

    questions.shuffle(rng);
    tracing::debug!(
        subject = %config.subject,
        count = questions.len(),
        "generated practice questions"
    );
    questions
}
