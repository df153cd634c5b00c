//! Built-in seed fixtures, used by tests and as the CLI's default data
//! set when no JSON file is supplied.

use chrono::{NaiveDate, TimeZone, Utc};

use super::{
    AdminRecord, AdminStatus, GameStatRecord, Permission, Role, TopicRecord, TopicStatus,
    UserRecord, UserStatus,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("static fixture date")
}

pub fn users() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: 1,
            username: "test1".to_string(),
            email: "dsafsfd@gamol.com".to_string(),
            created_at: date(2023, 1, 1),
            modified_at: Some(date(2024, 1, 1)),
            status: UserStatus::Active,
            role: Role::Member,
        },
        UserRecord {
            id: 2,
            username: "test2".to_string(),
            email: "asdf@gamol.com".to_string(),
            created_at: date(2023, 2, 1),
            modified_at: Some(date(2024, 2, 1)),
            status: UserStatus::Active,
            role: Role::Member,
        },
        UserRecord {
            id: 3,
            username: "test3".to_string(),
            email: "eeeeee@gamol.com".to_string(),
            created_at: date(2024, 1, 4),
            modified_at: Some(date(2024, 3, 1)),
            status: UserStatus::Withdrawn,
            role: Role::Member,
        },
        UserRecord {
            id: 4,
            username: "admin1".to_string(),
            email: "admin@gamol.com".to_string(),
            created_at: date(2021, 1, 1),
            modified_at: Some(date(2024, 5, 1)),
            status: UserStatus::Active,
            role: Role::Admin,
        },
    ]
}

pub fn admins() -> Vec<AdminRecord> {
    vec![
        AdminRecord {
            id: 1,
            name: "staff1".to_string(),
            email: "staff1@gamol.com".to_string(),
            created_at: date(2022, 3, 15),
            modified_at: Some(date(2024, 2, 10)),
            status: AdminStatus::Active,
            permission: Permission::View,
        },
        AdminRecord {
            id: 2,
            name: "staff2".to_string(),
            email: "staff2@gamol.com".to_string(),
            created_at: date(2022, 7, 1),
            modified_at: None,
            status: AdminStatus::Active,
            permission: Permission::Edit,
        },
        AdminRecord {
            id: 3,
            name: "staff3".to_string(),
            email: "staff3@gamol.com".to_string(),
            created_at: date(2023, 1, 20),
            modified_at: Some(date(2023, 11, 5)),
            status: AdminStatus::Withdrawn,
            permission: Permission::View,
        },
        AdminRecord {
            id: 4,
            name: "root".to_string(),
            email: "root@gamol.com".to_string(),
            created_at: date(2021, 6, 1),
            modified_at: Some(date(2024, 5, 1)),
            status: AdminStatus::Active,
            permission: Permission::Admin,
        },
    ]
}

pub fn topics() -> Vec<TopicRecord> {
    vec![
        TopicRecord {
            id: 1,
            title: "Capital Cities".to_string(),
            created_at: date(2023, 5, 10),
            question_count: 30,
            status: TopicStatus::Active,
            deleted_at: None,
        },
        TopicRecord {
            id: 2,
            title: "World History".to_string(),
            created_at: date(2023, 8, 2),
            question_count: 45,
            status: TopicStatus::Active,
            deleted_at: None,
        },
        TopicRecord {
            id: 3,
            title: "Movie Quotes".to_string(),
            created_at: date(2024, 1, 15),
            question_count: 20,
            status: TopicStatus::Deleted,
            deleted_at: Some(
                Utc.with_ymd_and_hms(2024, 4, 2, 9, 30, 0)
                    .single()
                    .expect("static fixture timestamp"),
            ),
        },
    ]
}

pub fn game_stats() -> Vec<GameStatRecord> {
    vec![
        GameStatRecord {
            topic_id: 1,
            title: "Capital Cities".to_string(),
            usage_count: 1284,
            question_count: 30,
            completion_rate: 72.5,
        },
        GameStatRecord {
            topic_id: 2,
            title: "World History".to_string(),
            usage_count: 861,
            question_count: 45,
            completion_rate: 54.0,
        },
        GameStatRecord {
            topic_id: 3,
            title: "Movie Quotes".to_string(),
            usage_count: 2940,
            question_count: 20,
            completion_rate: 88.1,
        },
        GameStatRecord {
            topic_id: 4,
            title: "Science Basics".to_string(),
            usage_count: 97,
            question_count: 25,
            completion_rate: 41.3,
        },
    ]
}
