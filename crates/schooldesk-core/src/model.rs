//! Practice-test data model.
//!
//! Field names serialize in camelCase and enum values in snake_case so that
//! collections written by the dashboard front-end load unchanged.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of answer options on every question.
pub const OPTION_COUNT: usize = 4;

/// Question difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers in generation order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Identifier unique within its test (`q1`, `q2`, ...).
    pub id: String,
    /// Question text.
    pub text: String,
    /// The four answer options.
    pub options: [String; OPTION_COUNT],
    /// Index into `options` of the correct answer.
    pub correct_answer: usize,
    /// Answer picked by the student, filled in by grading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_answer: Option<usize>,
    /// Difficulty tier.
    pub difficulty: Difficulty,
}

/// Number of questions requested per difficulty tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDistribution {
    #[serde(default)]
    pub easy: u32,
    #[serde(default)]
    pub medium: u32,
    #[serde(default)]
    pub hard: u32,
}

impl QuestionDistribution {
    pub fn new(easy: u32, medium: u32, hard: u32) -> Self {
        Self { easy, medium, hard }
    }

    /// Requested count for one tier.
    pub fn count(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    /// `(difficulty, count)` pairs in generation order.
    pub fn iter(&self) -> impl Iterator<Item = (Difficulty, u32)> + '_ {
        Difficulty::ALL.into_iter().map(|d| (d, self.count(d)))
    }

    /// Sum of all tiers. Widened so that no `u32` counts can overflow it.
    pub fn total(&self) -> u64 {
        u64::from(self.easy) + u64::from(self.medium) + u64::from(self.hard)
    }
}

/// Input to question generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestConfig {
    pub subject: String,
    /// Chapters to draw questions from. Must be non-empty.
    pub chapters: Vec<String>,
    pub total_questions: u32,
    /// Time limit in minutes.
    pub time_limit: u32,
    pub question_distribution: QuestionDistribution,
}

impl TestConfig {
    /// Whether the distribution adds up to `total_questions`.
    ///
    /// Generation does not check this; callers that build configs from user
    /// input should.
    pub fn is_consistent(&self) -> bool {
        self.question_distribution.total() == u64::from(self.total_questions)
    }
}

/// Lifecycle state of a practice test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::NotStarted => write!(f, "not_started"),
            TestStatus::InProgress => write!(f, "in_progress"),
            TestStatus::Completed => write!(f, "completed"),
        }
    }
}

/// A generated practice test and its progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeTest {
    pub id: String,
    pub subject: String,
    pub chapters: Vec<String>,
    pub total_questions: u32,
    pub time_limit: u32,
    pub question_distribution: QuestionDistribution,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub status: TestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl PracticeTest {
    /// Build a not-started test from its config and generated questions.
    pub fn new(config: &TestConfig, questions: Vec<Question>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            subject: config.subject.clone(),
            chapters: config.chapters.clone(),
            total_questions: config.total_questions,
            time_limit: config.time_limit,
            question_distribution: config.question_distribution,
            questions,
            status: TestStatus::NotStarted,
            score: None,
            started_at: None,
            completed_at: None,
            created_at: now,
        }
    }

    /// Mark the test as in progress. Keeps an earlier start time if present.
    pub fn start(&mut self, now: DateTime<Utc>) {
        self.status = TestStatus::InProgress;
        self.started_at.get_or_insert(now);
    }

    /// Mark the test as completed with the given score.
    pub fn complete(&mut self, score: f64, now: DateTime<Utc>) {
        self.started_at.get_or_insert(now);
        self.status = TestStatus::Completed;
        self.score = Some(score);
        self.completed_at = Some(now);
    }
}
