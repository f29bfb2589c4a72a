// staff-form/tests/form_view.rs
// Load, submit and clear flows of the employee form view

mod common;

use common::{Call, FakeApi, jane};
use staff_client::{ClientError, Employee, EmployeeStatus};
use staff_form::{
    EmployeeFormView, Field, FormError, FormFields, FormMode, FormPhase, HistoryNavigator, Route,
};

fn create_view(api: &FakeApi) -> EmployeeFormView<FakeApi, HistoryNavigator> {
    EmployeeFormView::new(api.clone(), HistoryNavigator::new(), FormMode::Create)
}

fn edit_view(api: &FakeApi, id: &str) -> EmployeeFormView<FakeApi, HistoryNavigator> {
    let route = Route::Edit {
        employee_id: id.into(),
    };
    EmployeeFormView::for_route(api.clone(), HistoryNavigator::new(), &route).unwrap()
}

#[tokio::test]
async fn test_create_flow_posts_fields_and_navigates() {
    let api = FakeApi::new();
    let mut view = create_view(&api);
    view.set_field(Field::Id, "7");
    view.set_field(Field::Name, "Jane");
    view.set_field(Field::Email, "a@b.com");
    view.set_field(Field::Status, "active");

    let route = view.submit().await.unwrap();

    assert_eq!(route, Route::List);
    assert_eq!(view.navigator().current(), Some(Route::List));
    assert_eq!(view.state().phase(), FormPhase::Submitted);
    assert!(view.errors().is_empty());
    assert_eq!(
        api.calls(),
        vec![Call::Create(Employee {
            id: "7".into(),
            name: "Jane".into(),
            email: "a@b.com".into(),
            status: EmployeeStatus::Active,
        })]
    );
}

#[tokio::test]
async fn test_invalid_email_blocks_submit() {
    let api = FakeApi::new();
    let mut view = create_view(&api);
    view.set_field(Field::Id, "7");
    view.set_field(Field::Name, "Jane");
    view.set_field(Field::Email, "not-an-email");
    view.set_field(Field::Status, "active");

    let err = view.submit().await.unwrap_err();

    let errors = err.field_errors().unwrap();
    assert_eq!(errors.get(Field::Email), Some("Email address is invalid."));
    assert_eq!(view.state().error(Field::Email), Some("Email address is invalid."));
    assert!(api.calls().is_empty());
    assert_eq!(view.navigator().current(), None);
    assert_eq!(view.state().phase(), FormPhase::Editing);
}

#[tokio::test]
async fn test_empty_name_and_status_both_reported() {
    let api = FakeApi::new();
    let mut view = create_view(&api);
    view.set_field(Field::Id, "7");
    view.set_field(Field::Email, "a@b.com");

    let err = view.submit().await.unwrap_err();

    assert!(matches!(err, FormError::Invalid(ref e) if e.len() == 2));
    assert_eq!(view.errors().get(Field::Name), Some("Name is required."));
    assert_eq!(view.errors().get(Field::Status), Some("Status selection is required."));
}

#[tokio::test]
async fn test_edit_flow_loads_and_disables_id() {
    let api = FakeApi::new().with_employee(jane());
    let mut view = edit_view(&api, "42");
    assert_eq!(view.title(), "Edit Employee");
    assert_eq!(view.submit_label(), "Update");

    let loaded = view.load().await.unwrap();

    assert_eq!(loaded, Some(jane()));
    assert_eq!(view.fields(), &FormFields::from(&jane()));
    assert!(view.is_field_disabled(Field::Id));
    assert_eq!(api.calls(), vec![Call::Get("42".into())]);
}

#[tokio::test]
async fn test_edit_submit_puts_to_route_id() {
    let api = FakeApi::new().with_employee(jane());
    let mut view = edit_view(&api, "42");
    view.load().await.unwrap();
    view.set_field(Field::Status, "inactive");
    // disabled input ignores edits
    view.set_field(Field::Id, "99");

    view.submit().await.unwrap();

    let expected = Employee {
        status: EmployeeStatus::Inactive,
        ..jane()
    };
    assert_eq!(
        api.calls(),
        vec![Call::Get("42".into()), Call::Update("42".into(), expected.clone())]
    );
    assert_eq!(api.record("42"), Some(expected));
    assert_eq!(view.navigator().history(), vec![Route::List]);
}

#[tokio::test]
async fn test_edit_with_blank_id_field_uses_route_id() {
    let api = FakeApi::new();
    let mut view = edit_view(&api, "42");
    view.set_field(Field::Name, "Jane");
    view.set_field(Field::Email, "a@b.com");
    view.set_field(Field::Status, "active");

    view.submit().await.unwrap();

    assert!(matches!(&api.calls()[0], Call::Update(id, payload) if id == "42" && payload.id == "42"));
}

#[tokio::test]
async fn test_clear_then_submit_in_edit_mode_keeps_id() {
    let api = FakeApi::new().with_employee(jane());
    let mut view = edit_view(&api, "42");
    view.load().await.unwrap();
    view.clear();
    view.set_field(Field::Id, "99");
    view.set_field(Field::Name, "Jane");
    view.set_field(Field::Email, "jane@example.com");
    view.set_field(Field::Status, "active");

    view.submit().await.unwrap();

    let expected = Employee {
        name: "Jane".into(),
        ..jane()
    };
    assert_eq!(
        api.calls().last(),
        Some(&Call::Update("42".into(), expected.clone()))
    );
    assert_eq!(api.record("42"), Some(expected));
}

#[tokio::test]
async fn test_load_failure_leaves_form_empty() {
    let api = FakeApi::new();
    let mut view = edit_view(&api, "404");

    let err = view.load().await.unwrap_err();

    assert!(matches!(err, ClientError::NotFound(_)));
    assert_eq!(view.fields(), &FormFields::default());
    assert_eq!(view.state().phase(), FormPhase::Editing);
}

#[tokio::test]
async fn test_load_in_create_mode_is_noop() {
    let api = FakeApi::new();
    let mut view = create_view(&api);

    assert_eq!(view.load().await.unwrap(), None);
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_submit_failure_keeps_fields() {
    let api = FakeApi::new().failing_writes();
    let mut view = create_view(&api);
    view.set_field(Field::Id, "7");
    view.set_field(Field::Name, "Jane");
    view.set_field(Field::Email, "a@b.com");
    view.set_field(Field::Status, "inactive");

    let err = view.submit().await.unwrap_err();

    assert!(matches!(err, FormError::Client(ClientError::Internal(_))));
    assert_eq!(view.fields().name, "Jane");
    assert_eq!(view.state().phase(), FormPhase::Editing);
    assert_eq!(view.navigator().current(), None);
}

#[tokio::test]
async fn test_clear_resets_everything() {
    let api = FakeApi::new().with_employee(jane());
    let mut view = edit_view(&api, "42");
    view.load().await.unwrap();
    view.set_field(Field::Email, "broken");
    let _ = view.submit().await;
    assert!(!view.errors().is_empty());

    view.clear();

    assert_eq!(view.fields(), &FormFields::default());
    assert!(view.errors().is_empty());
    assert_eq!(view.state().mode(), &FormMode::Edit { employee_id: "42".into() });
    assert_eq!(api.calls(), vec![Call::Get("42".into())]);
}

#[test]
fn test_list_route_has_no_form() {
    let view = EmployeeFormView::for_route(FakeApi::new(), HistoryNavigator::new(), &Route::List);
    assert!(view.is_none());
}
