//! Backend rows and CLI responses validate against their generated schemas.

use chrono::{NaiveDate, TimeZone, Utc};
use deck_core::entities::{Category, Project, SyncState, Task};
use deck_core::enums::{CategoryStatus, Priority, ProjectStatus, TaskStatus};
use deck_core::progress::ProjectProgress;
use deck_core::responses::{DashboardSummary, ProjectDetail, SectionCounts};
use deck_core::stats::TaskStats;
use schemars::schema_for;

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(recovered, val, "serde roundtrip failed for {}", stringify!($ty));

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_task() -> Task {
    let created = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
    Task {
        id: "b7e2".into(),
        owner_id: "user-1".into(),
        title: "Ship release notes".into(),
        description: None,
        status: TaskStatus::Done,
        priority: Priority::Urgent,
        due_at: Some(created),
        category_id: Some("work".into()),
        project_id: Some("p1".into()),
        created_at: created,
        updated_at: created,
        completed_at: Some(created),
        sync: SyncState::Confirmed,
    }
}

fn sample_project() -> Project {
    let created = Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap();
    Project {
        id: "p1".into(),
        owner_id: "user-1".into(),
        name: "Spring launch".into(),
        description: Some("Marketing site and docs".into()),
        category_id: Some("work".into()),
        status: ProjectStatus::OnHold,
        start_date: NaiveDate::from_ymd_opt(2026, 1, 10),
        target_end_date: NaiveDate::from_ymd_opt(2026, 4, 30),
        created_at: created,
        updated_at: created,
    }
}

roundtrip_and_validate!(task_roundtrip, Task, sample_task());

roundtrip_and_validate!(
    pending_task_roundtrip,
    Task,
    Task {
        id: "local-0b8d".into(),
        sync: SyncState::PendingSync,
        ..sample_task()
    }
);

roundtrip_and_validate!(
    category_roundtrip,
    Category,
    Category {
        id: "work".into(),
        owner_id: "user-1".into(),
        name: "Work".into(),
        description: None,
        color: "#00B4D8".into(),
        status: CategoryStatus::Inactive,
        created_at: Utc.with_ymd_and_hms(2025, 11, 2, 8, 0, 0).unwrap(),
        sync: SyncState::Confirmed,
    }
);

roundtrip_and_validate!(project_roundtrip, Project, sample_project());

roundtrip_and_validate!(
    project_detail_roundtrip,
    ProjectDetail,
    ProjectDetail {
        project: sample_project(),
        progress: ProjectProgress::of([&sample_task()]),
        tasks: vec![sample_task()],
    }
);

roundtrip_and_validate!(
    dashboard_roundtrip,
    DashboardSummary,
    DashboardSummary {
        greeting_name: "Ada".into(),
        stats: TaskStats {
            total: 3,
            completion_rate: 33,
            ..TaskStats::default()
        },
        sections: SectionCounts {
            overdue: 1,
            completed: 1,
            other: 1,
            ..SectionCounts::default()
        },
        source: "cache".into(),
    }
);

#[test]
fn wire_strings_use_display_names() {
    let json = serde_json::to_value(sample_project()).unwrap();
    assert_eq!(json["status"], "On Hold");
    assert_eq!(json["type_id"], "work");
    assert_eq!(json["user_id"], "user-1");
    assert_eq!(json["start_date"], "2026-01-10");

    let task = serde_json::to_value(sample_task()).unwrap();
    assert_eq!(task["status"], "Done");
    assert_eq!(task["priority"], "Urgent");
    assert!(task.get("sync").is_none());
}
