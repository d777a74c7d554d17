//! Tests for the directory user model.

use super::*;
use crate::test_support::{fixture_timestamp, sample_user};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn employee() -> User {
    User::from(sample_user(3, Role::Employee, UserStatus::Active))
}

#[rstest]
fn accessors_expose_seeded_fields(employee: User) {
    assert_eq!(employee.id(), UserId::new(3));
    assert_eq!(employee.display_name(), "User 3");
    assert_eq!(employee.email(), "user3@company.com");
    assert_eq!(employee.role(), Role::Employee);
    assert_eq!(employee.department(), "Engineering");
    assert_eq!(employee.last_active(), fixture_timestamp());
    assert!(employee.is_active());
    assert_eq!(employee.notes(), None);
}

#[rstest]
fn replace_role_returns_previous_role(mut employee: User) {
    let previous = employee.replace_role(Role::Manager);

    assert_eq!(previous, Role::Employee);
    assert_eq!(employee.role(), Role::Manager);
}

#[rstest]
fn replace_role_accepts_the_current_role(mut employee: User) {
    let previous = employee.replace_role(Role::Employee);

    assert_eq!(previous, Role::Employee);
    assert_eq!(employee.role(), Role::Employee);
}

#[rstest]
fn serializes_to_camel_case(employee: User) {
    let value = serde_json::to_value(&employee).expect("serialize user");

    assert_eq!(
        value,
        json!({
            "id": 3,
            "displayName": "User 3",
            "email": "user3@company.com",
            "role": "Employee",
            "department": "Engineering",
            "joinDate": "2022-06-10",
            "lastActive": "2024-03-01T12:00:00Z",
            "status": "active"
        })
    );
}

#[rstest]
fn serializes_notes_when_present() {
    let mut draft = sample_user(6, Role::Employee, UserStatus::Inactive);
    draft.notes = Some("On leave".to_owned());

    let value = serde_json::to_value(User::from(draft)).expect("serialize user");

    assert_eq!(value["notes"], json!("On leave"));
    assert_eq!(value["status"], json!("inactive"));
}

#[rstest]
#[case("active", UserStatus::Active)]
#[case("Inactive", UserStatus::Inactive)]
#[case(" ACTIVE ", UserStatus::Active)]
fn parses_status_names(#[case] input: &str, #[case] expected: UserStatus) {
    assert_eq!(input.parse::<UserStatus>(), Ok(expected));
}

#[rstest]
fn rejects_unknown_status() {
    let err = "suspended".parse::<UserStatus>().expect_err("unknown status");
    assert_eq!(
        err.to_string(),
        "unknown status 'suspended': expected active or inactive"
    );
}

#[rstest]
fn user_id_displays_raw_number() {
    assert_eq!(UserId::from(42).to_string(), "42");
    assert_eq!(UserId::new(42).get(), 42);
}
