//! Session flow tests
//!
//! Sign-in, registration with phone verification, and sign-out against a
//! profile store in a temporary directory.

use mitra_backend::config::Config;
use mitra_backend::error::AppError;
use mitra_backend::services::{AuthService, ProfileStore};
use proptest::prelude::*;
use shared::RegisterData;
use tempfile::TempDir;

// ============================================================================
// Test Helpers
// ============================================================================

fn test_config(data_dir: &std::path::Path) -> Config {
    let mut config = Config::load().expect("default configuration");
    config.jwt.secret = "test-secret".to_string();
    config.storage.data_dir = data_dir.to_string_lossy().into_owned();
    config
}

fn service_in(dir: &TempDir) -> AuthService {
    let config = test_config(dir.path());
    AuthService::new(ProfileStore::new(dir.path()), &config)
}

fn registration() -> RegisterData {
    RegisterData {
        email: "asha@example.com".to_string(),
        password: "kheti123".to_string(),
        first_name: "Asha".to_string(),
        last_name: "Devi".to_string(),
        phone: Some("9876543210".to_string()),
    }
}

fn validation_field(err: AppError) -> String {
    match err {
        AppError::Validation { field, .. } => field,
        other => panic!("expected validation error, got {:?}", other),
    }
}

// ============================================================================
// Sign-in and sign-out
// ============================================================================

#[tokio::test]
async fn test_login_persists_mock_profile() {
    let dir = tempfile::tempdir().unwrap();
    let auth = service_in(&dir);

    let session = auth.login("farmer@example.com", "secret").await.unwrap();

    assert_eq!(session.token_type, "Bearer");
    assert_eq!(session.user.email, "farmer@example.com");
    assert_eq!(session.user.first_name, "Mitra");
    assert_eq!(session.user.last_name, "User");
    assert!(session.user.is_phone_verified);
    assert!(session.user.is_email_verified);

    let stored = auth.current_session().await.unwrap();
    assert_eq!(stored, Some(session.user));
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let dir = tempfile::tempdir().unwrap();
    let auth = service_in(&dir);

    let err = auth.login("", "secret").await.unwrap_err();
    assert_eq!(validation_field(err), "email");

    let err = auth.login("farmer@example.com", "  ").await.unwrap_err();
    assert_eq!(validation_field(err), "password");

    assert!(auth.current_session().await.unwrap().is_none());
}

#[tokio::test]
async fn test_session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let session = service_in(&dir).login("farmer@example.com", "secret").await.unwrap();

    let restarted = service_in(&dir);
    let profile = restarted.authenticate(&session.access_token).await.unwrap();
    assert_eq!(profile.id, session.user.id);
}

#[tokio::test]
async fn test_logout_ends_session_for_next_load() {
    let dir = tempfile::tempdir().unwrap();
    let auth = service_in(&dir);
    let session = auth.login("farmer@example.com", "secret").await.unwrap();

    auth.logout().await.unwrap();

    // A fresh load of the store finds no authenticated session
    let reloaded = service_in(&dir);
    assert!(reloaded.current_session().await.unwrap().is_none());
    assert!(matches!(
        reloaded.authenticate(&session.access_token).await,
        Err(AppError::Unauthorized { .. })
    ));
}

#[tokio::test]
async fn test_logout_without_session_is_ok() {
    let dir = tempfile::tempdir().unwrap();
    service_in(&dir).logout().await.unwrap();
}

#[tokio::test]
async fn test_new_login_replaces_previous_session() {
    let dir = tempfile::tempdir().unwrap();
    let auth = service_in(&dir);

    let first = auth.login("one@example.com", "secret").await.unwrap();
    let second = auth.login("two@example.com", "secret").await.unwrap();

    assert!(auth.authenticate(&first.access_token).await.is_err());
    assert_eq!(
        auth.authenticate(&second.access_token).await.unwrap().email,
        "two@example.com"
    );
}

#[tokio::test]
async fn test_garbage_token_is_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let auth = service_in(&dir);
    auth.login("farmer@example.com", "secret").await.unwrap();

    assert!(matches!(
        auth.authenticate("not-a-token").await,
        Err(AppError::InvalidToken)
    ));
}

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn test_registration_flow_creates_profile() {
    let dir = tempfile::tempdir().unwrap();
    let auth = service_in(&dir);

    let pending = auth.register(registration()).await.unwrap();
    assert!(auth.current_session().await.unwrap().is_none());

    auth.verify_phone(&pending.verification_id, "9123456780")
        .await
        .unwrap();

    let session = auth
        .confirm_otp(&pending.verification_id, "123456")
        .await
        .unwrap();

    assert_eq!(session.user.first_name, "Asha");
    assert_eq!(session.user.last_name, "Devi");
    assert_eq!(session.user.phone.as_deref(), Some("9123456780"));
    assert!(session.user.is_phone_verified);
    assert!(session.user.id.starts_with("user-"));

    assert_eq!(auth.current_session().await.unwrap(), Some(session.user));
}

#[tokio::test]
async fn test_pending_registration_is_single_use() {
    let dir = tempfile::tempdir().unwrap();
    let auth = service_in(&dir);

    let pending = auth.register(registration()).await.unwrap();
    auth.verify_phone(&pending.verification_id, "9876543210")
        .await
        .unwrap();
    auth.confirm_otp(&pending.verification_id, "000000")
        .await
        .unwrap();

    let again = auth.confirm_otp(&pending.verification_id, "000000").await;
    assert!(matches!(again, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_register_validates_fields() {
    let dir = tempfile::tempdir().unwrap();
    let auth = service_in(&dir);

    let mut data = registration();
    data.first_name = String::new();
    assert_eq!(validation_field(auth.register(data).await.unwrap_err()), "first_name");

    let mut data = registration();
    data.phone = None;
    assert_eq!(validation_field(auth.register(data).await.unwrap_err()), "phone");

    let mut data = registration();
    data.phone = Some("98765-43210".to_string());
    assert_eq!(validation_field(auth.register(data).await.unwrap_err()), "phone");
}

#[tokio::test]
async fn test_otp_requires_sent_code() {
    let dir = tempfile::tempdir().unwrap();
    let auth = service_in(&dir);
    let pending = auth.register(registration()).await.unwrap();

    let err = auth
        .confirm_otp(&pending.verification_id, "123456")
        .await
        .unwrap_err();
    assert_eq!(validation_field(err), "phone");
}

#[tokio::test]
async fn test_incomplete_otp_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let auth = service_in(&dir);
    let pending = auth.register(registration()).await.unwrap();
    auth.verify_phone(&pending.verification_id, "9876543210")
        .await
        .unwrap();

    let err = auth
        .confirm_otp(&pending.verification_id, "1234")
        .await
        .unwrap_err();
    assert_eq!(validation_field(err), "otp");

    // The registration is still pending after a bad code
    assert!(auth
        .confirm_otp(&pending.verification_id, "123456")
        .await
        .is_ok());
}

#[tokio::test]
async fn test_verify_unknown_registration() {
    let dir = tempfile::tempdir().unwrap();
    let auth = service_in(&dir);

    let result = auth.verify_phone("missing", "9876543210").await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_malformed_email_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let auth = service_in(&dir);

    let err = auth.login("farmer.example.com", "secret").await.unwrap_err();
    assert_eq!(validation_field(err), "email");

    let mut data = registration();
    data.email = "asha@example".to_string();
    let err = auth.register(data).await.unwrap_err();
    assert_eq!(validation_field(err), "email");
}

#[tokio::test]
async fn test_abandoned_registration_expires() {
    let dir = tempfile::tempdir().unwrap();
    let auth = service_in(&dir).with_pending_ttl(chrono::Duration::milliseconds(20));

    let abandoned = auth.register(registration()).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(60)).await;

    let result = auth
        .verify_phone(&abandoned.verification_id, "9876543210")
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    auth.register(registration()).await.unwrap();
    assert_eq!(auth.pending_count().await, 1);
}

// ============================================================================
// Profile store
// ============================================================================

#[tokio::test]
async fn test_store_write_leaves_no_staging_file() {
    let dir = tempfile::tempdir().unwrap();
    let auth = service_in(&dir);

    auth.login("farmer@example.com", "secret").await.unwrap();
    auth.logout().await.unwrap();
    auth.login("farmer@example.com", "secret").await.unwrap();

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["local_storage.json".to_string()]);
}

#[tokio::test]
async fn test_interrupted_write_keeps_previous_profile() {
    let dir = tempfile::tempdir().unwrap();
    let auth = service_in(&dir);
    let session = auth.login("farmer@example.com", "secret").await.unwrap();

    // A crash mid-write leaves only a truncated staging file behind
    std::fs::write(dir.path().join("local_storage.json.tmp"), b"{\"mitraUs").unwrap();

    let stored = auth.current_session().await.unwrap().unwrap();
    assert_eq!(stored.id, session.user.id);

    auth.logout().await.unwrap();
    assert!(auth.current_session().await.unwrap().is_none());
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Any phone number that is not exactly ten digits is refused at registration
    #[test]
    fn prop_register_rejects_bad_phones(phone in "[0-9]{0,9}|[0-9]{11,14}|[0-9]{4}[ -][0-9]{5}") {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let auth = service_in(&dir);

        let mut data = registration();
        data.phone = Some(phone);
        let result = runtime.block_on(auth.register(data));
        let is_validation_err = matches!(result, Err(AppError::Validation { .. }));
        prop_assert!(is_validation_err);
    }
}
