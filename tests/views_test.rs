use user_console::avatar::{AvatarPool, RandomIndex};
use user_console::clients::mock::{Call, MockUserApi};
use user_console::clients::ApiError;
use user_console::model::{User, UserField, UserId};
use user_console::validation::{ImageFile, MAX_AVATAR_BYTES};
use user_console::views::{EditUserForm, UserForm, ViewError};

fn tracey() -> User {
    User {
        id: UserId(6),
        first_name: "Tracey".to_string(),
        last_name: "Ramos".to_string(),
        email: "tracey.ramos@reqres.in".to_string(),
        avatar: "https://reqres.in/img/faces/6-image.jpg".to_string(),
    }
}

/// Edit form against a mocked API: a rejected draft, a rejected image,
/// then a clean submit that reports every change.
#[tokio::test]
async fn test_edit_session_with_mocked_api() {
    let mock = MockUserApi::new();
    let pool = AvatarPool::new("https://reqres.in/img/faces");
    mock.expect_get(UserId(6)).return_ok(tracey());

    let mut form = EditUserForm::load(&mock, UserId(6), pool).await.unwrap();

    // Digits in a name are caught before the API sees anything
    form.set_field(UserField::FirstName, "Tr4cey");
    let rejected = form.submit(&mock).await.unwrap_err();
    match &rejected.error {
        ViewError::Invalid(errors) => assert_eq!(
            errors.get(UserField::FirstName),
            Some("First name must contain only letters and spaces")
        ),
        other => panic!("unexpected error {other:?}"),
    }
    let mut form = rejected.into_view();

    // One byte over the limit is refused, exactly at the limit is not
    let mut rng = RandomIndex::seeded(7);
    let big = ImageFile::new("big.jpg", "image/jpeg", MAX_AVATAR_BYTES + 1);
    assert!(!form.choose_image(big, &mut rng));
    assert_eq!(
        form.errors().get(UserField::Avatar),
        Some("Image must not exceed 500KB due to API limitations")
    );
    let ok = ImageFile::new("ok.jpg", "image/jpeg", MAX_AVATAR_BYTES);
    assert!(form.choose_image(ok, &mut rng));
    assert!(!form.errors().contains(UserField::Avatar));

    form.set_field(UserField::FirstName, "Tracy Ann");
    let mut updated = tracey();
    updated.first_name = "Tracy Ann".to_string();
    mock.expect_update(UserId(6)).return_ok(updated);

    let outcome = form.submit(&mock).await.unwrap();
    assert_eq!(
        outcome.summary,
        vec![
            "First name: Changed from \"Tracey\" to \"Tracy Ann\"".to_string(),
            "Avatar: Selected image: ok.jpg".to_string(),
        ]
    );

    let json = serde_json::to_value(&outcome.changes[0]).unwrap();
    assert_eq!(json["field"], "first_name");
    assert_eq!(json["from"], "Tracey");

    assert_eq!(mock.calls().len(), 2);
    assert!(matches!(mock.calls()[0], Call::Get(UserId(6))));
    mock.verify();
}

#[tokio::test]
async fn test_not_found_edit_surfaces_load_error() {
    let mock = MockUserApi::new();
    mock.expect_get(UserId(77)).return_err(ApiError::NotFound(UserId(77)));

    let pool = AvatarPool::new("https://reqres.in/img/faces");
    let err = EditUserForm::load(&mock, UserId(77), pool).await.unwrap_err();
    assert!(matches!(err, ViewError::Load(ref e) if e.is_not_found()));
    mock.verify();
}
