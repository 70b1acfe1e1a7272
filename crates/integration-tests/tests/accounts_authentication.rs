//! Integration tests for email/password authentication.

#![allow(clippy::unwrap_used)]

use jungle_data::models::NewUserRecord;
use jungle_data::services::accounts::password::hash_password;
use jungle_integration_tests::{accounts, register_john};

#[tokio::test]
async fn test_authenticates_with_exact_credentials() {
    let service = accounts();
    let user = register_john(&service).await;

    let found = service
        .authenticate_with_credentials("test@test.com", "password")
        .await
        .unwrap();
    assert_eq!(found, Some(user));
}

#[tokio::test]
async fn test_email_whitespace_and_case_are_ignored() {
    let service = accounts();
    let user = register_john(&service).await;

    for email in [
        "  test@test.com  ",
        "TeSt@TeSt.cOm",
        "TEST@TEST.COM",
        "\ttest@test.com\n",
    ] {
        let found = service
            .authenticate_with_credentials(email, "password")
            .await
            .unwrap();
        assert_eq!(found.map(|u| u.id), Some(user.id), "{email:?} should match");
    }
}

#[tokio::test]
async fn test_wrong_password_and_unknown_email_look_the_same() {
    let service = accounts();
    register_john(&service).await;

    let wrong_password = service
        .authenticate_with_credentials("test@test.com", "wrong_password")
        .await;
    let unknown_email = service
        .authenticate_with_credentials("wrong@test.com", "password")
        .await;

    assert!(matches!(wrong_password, Ok(None)));
    assert!(matches!(unknown_email, Ok(None)));
}

#[tokio::test]
async fn test_password_is_case_sensitive_and_not_trimmed() {
    let service = accounts();
    register_john(&service).await;

    for password in ["Password", "PASSWORD", " password", "password "] {
        let found = service
            .authenticate_with_credentials("test@test.com", password)
            .await
            .unwrap();
        assert!(found.is_none(), "{password:?} should be rejected");
    }
}

#[tokio::test]
async fn test_blank_email_rejected() {
    let service = accounts();
    register_john(&service).await;

    let found = service
        .authenticate_with_credentials("", "password")
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_empty_store() {
    let service = accounts();
    let found = service
        .authenticate_with_credentials("test@test.com", "password")
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_duplicate_matches_refuse_to_authenticate() {
    let service = accounts();
    register_john(&service).await;

    // A second row that predates the uniqueness constraint.
    service
        .store()
        .insert_unchecked(NewUserRecord {
            first_name: "Johnny".to_owned(),
            last_name: "Doe".to_owned(),
            email: "TEST@test.com".to_owned(),
            password_digest: hash_password("password").unwrap(),
        })
        .await;

    let found = service
        .authenticate_with_credentials("test@test.com", "password")
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_multiple_accounts_authenticate_independently() {
    let service = accounts();
    let john = register_john(&service).await;
    let jane = service
        .register(jungle_data::models::NewUserAccount::new(
            "Jane",
            "Doe",
            "jane@test.com",
            "jane-password",
        ))
        .await
        .unwrap();

    let as_jane = service
        .authenticate_with_credentials("jane@test.com", "jane-password")
        .await
        .unwrap();
    let cross = service
        .authenticate_with_credentials("jane@test.com", "password")
        .await
        .unwrap();
    let as_john = service
        .authenticate_with_credentials("test@test.com", "password")
        .await
        .unwrap();

    assert_eq!(as_jane.map(|u| u.id), Some(jane.id));
    assert!(cross.is_none());
    assert_eq!(as_john.map(|u| u.id), Some(john.id));
}
