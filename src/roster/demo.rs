use crate::model::{Status, StudentRecord};

fn record(
    id: &str,
    name: &str,
    class: &str,
    status: Status,
    avatar: &str,
    history: &[&str],
) -> StudentRecord {
    let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
    StudentRecord {
        id: id.to_string(),
        name: name.to_string(),
        class: class.to_string(),
        email,
        status,
        avatar: Some(avatar.to_string()),
        history: history.iter().map(|h| h.to_string()).collect(),
    }
}

/// The fixed dataset a fresh or reset roster starts from.
pub fn demo_students() -> Vec<StudentRecord> {
    vec![
        record(
            "S-1001",
            "Ava Johnson",
            "10A",
            Status::Active,
            "assets/avatars/ava.jpg",
            &["Joined class 10A", "Math quiz: 92%"],
        ),
        record(
            "S-1002",
            "Noah Chen",
            "10B",
            Status::Active,
            "assets/avatars/noah.jpg",
            &["Joined class 10B", "Science fair participant"],
        ),
        record(
            "S-1003",
            "Sophia Patel",
            "10A",
            Status::Alumni,
            "assets/avatars/sophia.jpg",
            &["Graduated 2024"],
        ),
        record(
            "S-1004",
            "Liam Garcia",
            "9C",
            Status::Inactive,
            "assets/avatars/liam.jpg",
            &["On leave since Jan"],
        ),
    ]
}
