//! Built-in seed data: the subject catalog and the dashboard's notices.

use serde::{Deserialize, Serialize};

use crate::notice::{Department, Notice, NoticeCategory, NoticePriority};

/// A subject and the chapters practice tests can be drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectChapters {
    pub subject: String,
    pub chapters: Vec<String>,
}

const CATALOG: &[(&str, &[&str])] = &[
    (
        "Mathematics",
        &[
            "Numbers and Operations",
            "Algebra",
            "Geometry",
            "Data Handling",
            "Mensuration",
        ],
    ),
    (
        "Science",
        &[
            "Matter and Materials",
            "Living World",
            "Natural Phenomena",
            "Energy",
            "Environment",
        ],
    ),
    (
        "English",
        &[
            "Reading Comprehension",
            "Grammar",
            "Writing",
            "Literature",
            "Vocabulary",
        ],
    ),
];

/// Subjects available for practice tests.
pub fn available_subjects() -> Vec<SubjectChapters> {
    CATALOG
        .iter()
        .map(|(subject, chapters)| SubjectChapters {
            subject: subject.to_string(),
            chapters: chapters.iter().map(|c| c.to_string()).collect(),
        })
        .collect()
}

/// Look up a subject by name, ignoring ASCII case.
pub fn find_subject(name: &str) -> Option<SubjectChapters> {
    available_subjects()
        .into_iter()
        .find(|s| s.subject.eq_ignore_ascii_case(name))
}

#[allow(clippy::too_many_arguments)]
fn seed_notice(
    id: &str,
    title: &str,
    description: &str,
    category: NoticeCategory,
    date: &str,
    time: Option<&str>,
    venue: Option<&str>,
    priority: NoticePriority,
    author: &str,
    department: Department,
) -> Notice {
    Notice {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        category,
        date: date.into(),
        time: time.map(Into::into),
        venue: venue.map(Into::into),
        priority,
        attachments: None,
        author: author.into(),
        department,
        expires_at: None,
        is_read: None,
    }
}

/// The notices shipped with the dashboard.
pub fn seed_notices() -> Vec<Notice> {
    use NoticeCategory::*;
    use NoticePriority::*;

    let mut exam = seed_notice(
        "2",
        "First Term Examination Schedule",
        "First term examinations will commence from March 20th, 2025. Detailed schedule is attached.",
        Examination,
        "2025-03-20",
        None,
        None,
        High,
        "Examination Department",
        Department::Academics,
    );
    exam.attachments = Some(vec!["exam_schedule.pdf".into()]);

    let mut weather = seed_notice(
        "3",
        "Weather Advisory: Heavy Rain",
        "Due to heavy rain forecast, all outdoor activities are suspended until further notice.",
        Emergency,
        "2025-03-10",
        None,
        None,
        High,
        "Principal's Office",
        Department::Administration,
    );
    weather.expires_at = Some("2025-03-12".into());

    vec![
        seed_notice(
            "1",
            "Annual Sports Day",
            "Annual Sports Day will be held on March 15th, 2025. All students are required to participate in at least one event.",
            Event,
            "2025-03-15",
            Some("09:00 AM"),
            Some("School Sports Ground"),
            Medium,
            "Sports Department",
            Department::Sports,
        ),
        exam,
        weather,
        seed_notice(
            "4",
            "New Library Resources",
            "New digital resources have been added to the library. Students can access them through their portal.",
            Announcement,
            "2025-03-08",
            None,
            None,
            Low,
            "Library Department",
            Department::Library,
        ),
        seed_notice(
            "5",
            "Cultural Program",
            "Annual cultural program featuring dance, music, and drama performances.",
            Event,
            "2025-03-25",
            Some("05:30 PM"),
            Some("School Auditorium"),
            Medium,
            "Cultural Committee",
            Department::Cultural,
        ),
        seed_notice(
            "6",
            "Science Exhibition",
            "Inter-house science exhibition showcasing student projects.",
            Event,
            "2025-04-05",
            Some("10:00 AM"),
            Some("School Science Block"),
            Medium,
            "Science Department",
            Department::Science,
        ),
    ]
}
