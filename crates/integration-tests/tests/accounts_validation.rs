//! Integration tests for account validation, registration and updates.

#![allow(clippy::unwrap_used)]

use secrecy::SecretString;

use jungle_data::db::UserStore;
use jungle_data::models::{NewUserAccount, UserAccountChanges};
use jungle_data::services::AccountError;
use jungle_integration_tests::{accounts, john, register_john};

fn messages(err: &AccountError) -> Vec<String> {
    err.validation_errors().unwrap().full_messages()
}

// =============================================================================
// Sign-up Rules
// =============================================================================

#[tokio::test]
async fn test_valid_signup() {
    let service = accounts();
    let validation = service.validate(&john()).await.unwrap();
    assert!(validation.is_valid());
    assert!(validation.messages().is_empty());
}

#[tokio::test]
async fn test_each_blank_field_is_reported() {
    let service = accounts();
    let cases = [
        (
            NewUserAccount {
                first_name: String::new(),
                ..john()
            },
            "First name can't be blank",
        ),
        (
            NewUserAccount {
                last_name: String::new(),
                ..john()
            },
            "Last name can't be blank",
        ),
        (
            NewUserAccount {
                email: "   ".to_owned(),
                ..john()
            },
            "Email can't be blank",
        ),
    ];

    for (account, expected) in cases {
        let validation = service.validate(&account).await.unwrap();
        assert!(!validation.is_valid());
        assert_eq!(validation.messages(), vec![expected]);
    }
}

#[tokio::test]
async fn test_messages_follow_declaration_order() {
    let service = accounts();
    let account = NewUserAccount::new("", "", "", "pw").with_password_confirmation("px");
    let validation = service.validate(&account).await.unwrap();
    assert_eq!(
        validation.messages(),
        vec![
            "First name can't be blank",
            "Last name can't be blank",
            "Email can't be blank",
            "Password is too short (minimum is 6 characters)",
            "Password confirmation doesn't match Password",
        ]
    );
}

#[tokio::test]
async fn test_duplicate_email_any_case() {
    let service = accounts();
    register_john(&service).await;

    for email in ["test@test.com", "TEST@TEST.COM", "TeSt@TeSt.cOm", "  test@test.com "] {
        let account = NewUserAccount::new("Jane", "Doe", email, "password");
        let validation = service.validate(&account).await.unwrap();
        assert_eq!(
            validation.messages(),
            vec!["Email has already been taken"],
            "{email:?} should collide"
        );
    }

    let account = NewUserAccount::new("Jane", "Doe", "TEST@test.com", "password");
    let err = service.register(account).await.unwrap_err();
    assert_eq!(messages(&err), vec!["Email has already been taken"]);
    assert_eq!(service.store().len().await, 1);
}

#[tokio::test]
async fn test_password_length_boundary() {
    let service = accounts();

    let five = NewUserAccount::new("John", "Doe", "a@test.com", "12345");
    let validation = service.validate(&five).await.unwrap();
    assert_eq!(
        validation.messages(),
        vec!["Password is too short (minimum is 6 characters)"]
    );

    let six = NewUserAccount::new("John", "Doe", "a@test.com", "123456");
    assert!(service.validate(&six).await.unwrap().is_valid());
}

#[tokio::test]
async fn test_password_length_counts_characters() {
    let service = accounts();
    // Six characters, more than six bytes.
    let account = NewUserAccount::new("John", "Doe", "a@test.com", "pässwö");
    assert!(service.validate(&account).await.unwrap().is_valid());
}

#[tokio::test]
async fn test_missing_password() {
    let service = accounts();
    let err = service.register(john().without_password()).await.unwrap_err();
    assert_eq!(
        messages(&err),
        vec![
            "Password can't be blank",
            "Password is too short (minimum is 6 characters)",
        ]
    );
    assert!(service.store().is_empty().await);
}

#[tokio::test]
async fn test_missing_password_ignores_confirmation() {
    let service = accounts();
    let validation = service.validate(&john().without_password()).await.unwrap();
    assert!(
        !validation
            .messages()
            .contains(&"Password confirmation doesn't match Password".to_owned())
    );
}

#[tokio::test]
async fn test_confirmation_only_checked_when_supplied() {
    let service = accounts();

    let account = NewUserAccount {
        password_confirmation: None,
        ..john()
    };
    assert!(service.validate(&account).await.unwrap().is_valid());

    let account = NewUserAccount {
        password_confirmation: Some(SecretString::from("different".to_owned())),
        ..john()
    };
    let validation = service.validate(&account).await.unwrap();
    assert_eq!(
        validation.messages(),
        vec!["Password confirmation doesn't match Password"]
    );
}

#[tokio::test]
async fn test_errors_serialize_for_clients() {
    let service = accounts();
    let account = NewUserAccount::new("", "Doe", "test@test.com", "password");
    let validation = service.validate(&account).await.unwrap();

    let json = serde_json::to_value(validation.errors()).unwrap();
    assert_eq!(json[0]["field"], "first_name");
    assert_eq!(json[0]["violation"]["kind"], "blank");
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn test_register_hashes_password() {
    let service = accounts();
    let user = register_john(&service).await;
    assert_eq!(user.full_name(), "John Doe");
    assert_eq!(user.email, "test@test.com");

    let key = jungle_core::EmailKey::normalize("test@test.com").unwrap();
    let stored = service.store().find_by_email(&key).await.unwrap();
    let digest = stored.first().unwrap().password_digest.as_str();
    assert!(digest.starts_with("$argon2id$"));
    assert_ne!(digest, "password");
}

#[tokio::test]
async fn test_register_keeps_email_case_and_trims() {
    let service = accounts();
    let account = NewUserAccount::new("John", "Doe", "  Test@Test.com ", "password");
    let user = service.register(account).await.unwrap();
    assert_eq!(user.email, "Test@Test.com");
}

// =============================================================================
// Updates
// =============================================================================

#[tokio::test]
async fn test_update_own_email_is_not_taken() {
    let service = accounts();
    let user = register_john(&service).await;

    let updated = service
        .update(
            user.id,
            UserAccountChanges::default()
                .email("test@test.com")
                .first_name("Johnny"),
        )
        .await
        .unwrap();
    assert_eq!(updated.first_name, "Johnny");
    assert_eq!(updated.id, user.id);
}

#[tokio::test]
async fn test_update_to_other_accounts_email_is_taken() {
    let service = accounts();
    register_john(&service).await;
    let jane = service
        .register(NewUserAccount::new("Jane", "Doe", "jane@test.com", "password"))
        .await
        .unwrap();

    let err = service
        .update(jane.id, UserAccountChanges::default().email("TEST@test.com"))
        .await
        .unwrap_err();
    assert_eq!(messages(&err), vec!["Email has already been taken"]);
}

#[tokio::test]
async fn test_update_password_rehashes() {
    let service = accounts();
    let user = register_john(&service).await;

    let err = service
        .update(user.id, UserAccountChanges::default().password("short"))
        .await
        .unwrap_err();
    assert_eq!(
        messages(&err),
        vec!["Password is too short (minimum is 6 characters)"]
    );

    service
        .update(
            user.id,
            UserAccountChanges::default()
                .password("new-password")
                .password_confirmation("new-password"),
        )
        .await
        .unwrap();

    let old = service
        .authenticate_with_credentials("test@test.com", "password")
        .await
        .unwrap();
    let new = service
        .authenticate_with_credentials("test@test.com", "new-password")
        .await
        .unwrap();
    assert!(old.is_none());
    assert_eq!(new.map(|u| u.id), Some(user.id));
}

#[tokio::test]
async fn test_update_without_password_keeps_it() {
    let service = accounts();
    let user = register_john(&service).await;

    service
        .update(user.id, UserAccountChanges::default().last_name("Smith"))
        .await
        .unwrap();

    let found = service
        .authenticate_with_credentials("test@test.com", "password")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.last_name, "Smith");
}

#[tokio::test]
async fn test_update_blank_name_rejected() {
    let service = accounts();
    let user = register_john(&service).await;

    let err = service
        .update(user.id, UserAccountChanges::default().first_name(" "))
        .await
        .unwrap_err();
    assert_eq!(messages(&err), vec!["First name can't be blank"]);
}
