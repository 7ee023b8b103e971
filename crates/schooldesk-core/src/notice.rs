//! Notice board model, filtering and validation.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Notice category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeCategory {
    Event,
    Examination,
    Emergency,
    Announcement,
}

impl NoticeCategory {
    pub const ALL: [NoticeCategory; 4] = [
        NoticeCategory::Event,
        NoticeCategory::Examination,
        NoticeCategory::Emergency,
        NoticeCategory::Announcement,
    ];

    /// Plural display label, e.g. "Events".
    pub fn label(self) -> &'static str {
        match self {
            NoticeCategory::Event => "Events",
            NoticeCategory::Examination => "Examinations",
            NoticeCategory::Emergency => "Emergency",
            NoticeCategory::Announcement => "Announcements",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            NoticeCategory::Event => "School and extracurricular events",
            NoticeCategory::Examination => "Test and assessment schedules",
            NoticeCategory::Emergency => "Urgent notices and alerts",
            NoticeCategory::Announcement => "General school announcements",
        }
    }
}

impl fmt::Display for NoticeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeCategory::Event => write!(f, "event"),
            NoticeCategory::Examination => write!(f, "examination"),
            NoticeCategory::Emergency => write!(f, "emergency"),
            NoticeCategory::Announcement => write!(f, "announcement"),
        }
    }
}

impl FromStr for NoticeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "event" => Ok(NoticeCategory::Event),
            "examination" => Ok(NoticeCategory::Examination),
            "emergency" => Ok(NoticeCategory::Emergency),
            "announcement" => Ok(NoticeCategory::Announcement),
            other => Err(format!("unknown notice category: {other}")),
        }
    }
}

/// Notice priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticePriority {
    Low,
    Medium,
    High,
}

impl NoticePriority {
    /// Sort rank: high = 3, medium = 2, low = 1.
    pub fn rank(self) -> u8 {
        match self {
            NoticePriority::Low => 1,
            NoticePriority::Medium => 2,
            NoticePriority::High => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NoticePriority::Low => "Low Priority",
            NoticePriority::Medium => "Medium Priority",
            NoticePriority::High => "High Priority",
        }
    }
}

impl fmt::Display for NoticePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticePriority::Low => write!(f, "low"),
            NoticePriority::Medium => write!(f, "medium"),
            NoticePriority::High => write!(f, "high"),
        }
    }
}

/// Department that issued a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Academics,
    Administration,
    Cultural,
    Library,
    Science,
    Sports,
}

impl Department {
    pub const ALL: [Department; 6] = [
        Department::Academics,
        Department::Administration,
        Department::Cultural,
        Department::Library,
        Department::Science,
        Department::Sports,
    ];
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Department::Academics => "Academics",
            Department::Administration => "Administration",
            Department::Cultural => "Cultural",
            Department::Library => "Library",
            Department::Science => "Science",
            Department::Sports => "Sports",
        };
        f.write_str(name)
    }
}

/// A notice on the school notice board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: NoticeCategory,
    /// Calendar date, `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    pub priority: NoticePriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<String>>,
    pub author: String,
    pub department: Department,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_read: Option<bool>,
}

impl Notice {
    /// The notice date as a timestamp, if it parses.
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        parse_notice_date(&self.date)
    }
}

/// Parse a notice date: plain `YYYY-MM-DD` (midnight) or RFC 3339.
pub fn parse_notice_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.naive_utc())
}

/// Category selector for [`filter_notices`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(NoticeCategory),
}

impl CategoryFilter {
    fn matches(self, notice: &Notice) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => notice.category == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

/// Sort order for [`filter_notices`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Most recent date first.
    #[default]
    Date,
    /// Highest priority first.
    Priority,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date" => Ok(SortBy::Date),
            "priority" => Ok(SortBy::Priority),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

/// Filter and order notices for display.
///
/// Keeps notices in `category` (any category for [`CategoryFilter::All`])
/// whose title or description contains `search_query` case-insensitively
/// (an empty query matches everything), then stable-sorts them by date or
/// priority, descending. Notices with unparsable dates sort after all dated
/// ones. The input is not modified.
pub fn filter_notices(
    notices: &[Notice],
    category: CategoryFilter,
    search_query: &str,
    sort_by: SortBy,
) -> Vec<Notice> {
    let query = search_query.to_lowercase();

    let mut filtered: Vec<Notice> = notices
        .iter()
        .filter(|n| category.matches(n))
        .filter(|n| {
            query.is_empty()
                || n.title.to_lowercase().contains(&query)
                || n.description.to_lowercase().contains(&query)
        })
        .cloned()
        .collect();

    match sort_by {
        SortBy::Date => filtered.sort_by_cached_key(|n| std::cmp::Reverse(n.parsed_date())),
        SortBy::Priority => filtered.sort_by_key(|n| std::cmp::Reverse(n.priority.rank())),
    }

    filtered
}

/// A warning from notice validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The notice ID (if applicable).
    pub notice_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate notices for missing text, bad dates and duplicate ids.
///
/// Category, priority and department membership is already enforced when
/// notices are deserialized.
pub fn validate_notices(notices: &[Notice]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut seen_ids = HashSet::new();

    for notice in notices {
        let mut warn = |message: String| {
            warnings.push(ValidationWarning {
                notice_id: Some(notice.id.clone()),
                message,
            })
        };

        if !seen_ids.insert(notice.id.as_str()) {
            warn(format!("duplicate notice ID: {}", notice.id));
        }
        if notice.title.trim().is_empty() {
            warn("title is required".into());
        }
        if notice.description.trim().is_empty() {
            warn("description is required".into());
        }
        if notice.parsed_date().is_none() {
            warn(format!("date is not a valid date: {:?}", notice.date));
        }
        if let Some(expires) = &notice.expires_at {
            if parse_notice_date(expires).is_none() {
                warn(format!("expiresAt is not a valid date: {expires:?}"));
            }
        }
    }

    warnings
}
