//! Scenario tests for the account lifecycle service

use chrono::{Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

use mailauth_shared::config::JwtConfig;

use crate::domain::entities::Account;
use crate::errors::DomainError;
use crate::repositories::{AccountRepository, MockAccountRepository};
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::mail::Mailer;
use crate::services::token::TokenService;

use super::mocks::{FailingMailer, RecordingMailer};

struct Harness<M: Mailer> {
    service: AuthService<MockAccountRepository, M>,
    accounts: Arc<MockAccountRepository>,
    mailer: Arc<M>,
    tokens: Arc<TokenService>,
}

fn harness() -> Harness<RecordingMailer> {
    harness_with(RecordingMailer::new())
}

fn harness_with<M: Mailer>(mailer: M) -> Harness<M> {
    let accounts = Arc::new(MockAccountRepository::new());
    let mailer = Arc::new(mailer);
    let tokens = Arc::new(TokenService::new(&JwtConfig::new("test-secret")));
    let service = AuthService::new(
        accounts.clone(),
        mailer.clone(),
        tokens.clone(),
        AuthServiceConfig::default(),
    );
    Harness {
        service,
        accounts,
        mailer,
        tokens,
    }
}

async fn register_ann<M: Mailer>(h: &Harness<M>) -> Uuid {
    h.service
        .register("Ann", "ann@x.com", "secret1")
        .await
        .expect("registration succeeds")
        .account
        .id
}

async fn stored_account<M: Mailer>(h: &Harness<M>, id: Uuid) -> Account {
    h.accounts.find_by_id(id).await.unwrap().unwrap()
}

#[tokio::test]
async fn test_register_then_login() {
    let h = harness();

    let response = h.service.register("Ann", "ann@x.com", "secret1").await.unwrap();
    assert_eq!(response.account.name, "Ann");
    assert_eq!(response.account.email, "ann@x.com");
    assert_eq!(
        h.tokens.verify_identity(&response.token).unwrap(),
        response.account.id
    );

    let token = h.service.login("ann@x.com", "secret1").await.unwrap();
    assert_eq!(h.tokens.verify_identity(&token).unwrap(), response.account.id);
}

#[tokio::test]
async fn test_duplicate_register_is_conflict() {
    let h = harness();
    register_ann(&h).await;

    let err = h
        .service
        .register("Ann Again", "ann@x.com", "other")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict { .. }));
}

#[tokio::test]
async fn test_register_requires_all_fields() {
    let h = harness();
    for (name, email, password) in [("", "ann@x.com", "pw"), ("Ann", "", "pw"), ("Ann", "ann@x.com", "")] {
        let err = h.service.register(name, email, password).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }
}

#[tokio::test]
async fn test_login_failures_share_one_message() {
    let h = harness();
    register_ann(&h).await;

    let unknown = h.service.login("bob@x.com", "secret1").await.unwrap_err();
    let wrong = h.service.login("ann@x.com", "wrong").await.unwrap_err();

    // Same generic message for both, so callers cannot probe for accounts
    assert_eq!(unknown.to_string(), "Invalid credentials");
    assert_eq!(wrong.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn test_verification_flow() {
    let h = harness();
    let id = register_ann(&h).await;

    h.service.send_verify_otp(id).await.unwrap();
    let code = stored_account(&h, id).await.verify_otp.code.unwrap();

    let err = h.service.verify_account(id, "000000").await.unwrap_err();
    assert!(matches!(err, DomainError::OtpInvalid));

    h.service.verify_account(id, &code).await.unwrap();
    let account = stored_account(&h, id).await;
    assert!(account.is_verified);
    assert!(account.verify_otp.is_empty());

    // Verification is monotonic: the flow is closed once it succeeds
    let err = h.service.verify_account(id, &code).await.unwrap_err();
    assert!(matches!(err, DomainError::Conflict { .. }));
    let err = h.service.send_verify_otp(id).await.unwrap_err();
    assert!(matches!(err, DomainError::Conflict { .. }));
}

#[tokio::test]
async fn test_new_verify_otp_discards_previous() {
    let h = harness();
    let id = register_ann(&h).await;

    h.service.send_verify_otp(id).await.unwrap();
    let first = stored_account(&h, id).await.verify_otp.code.unwrap();
    h.service.send_verify_otp(id).await.unwrap();
    let second = stored_account(&h, id).await.verify_otp.code.unwrap();

    if first != second {
        let err = h.service.verify_account(id, &first).await.unwrap_err();
        assert!(matches!(err, DomainError::OtpInvalid));
    }
    h.service.verify_account(id, &second).await.unwrap();
}

#[tokio::test]
async fn test_expired_verify_otp_clears_slot() {
    let h = harness();
    let id = register_ann(&h).await;

    h.service.send_verify_otp(id).await.unwrap();
    let mut account = stored_account(&h, id).await;
    let code = account.verify_otp.code.clone().unwrap();
    account.verify_otp.expires_at = Some(Utc::now() - Duration::minutes(1));
    h.accounts.update(account).await.unwrap();

    // Correct code, but past expiry
    let err = h.service.verify_account(id, &code).await.unwrap_err();
    assert!(matches!(err, DomainError::OtpExpired));
    assert!(stored_account(&h, id).await.verify_otp.is_empty());

    // With the slot cleared, the same code is now merely invalid
    let err = h.service.verify_account(id, &code).await.unwrap_err();
    assert!(matches!(err, DomainError::OtpInvalid));
}

#[tokio::test]
async fn test_password_reset_flow() {
    let h = harness();
    register_ann(&h).await;

    h.service.send_reset_otp("ann@x.com").await.unwrap();
    let account = h.accounts.find_by_email("ann@x.com").await.unwrap().unwrap();
    let code = account.reset_otp.code.unwrap();

    let err = h
        .service
        .reset_password("ann@x.com", "000000", "newpass")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::OtpInvalid));

    h.service
        .reset_password("ann@x.com", &code, "newpass")
        .await
        .unwrap();

    // Old password is gone, new one works, slot is cleared
    assert!(h.service.login("ann@x.com", "secret1").await.is_err());
    h.service.login("ann@x.com", "newpass").await.unwrap();
    let account = h.accounts.find_by_email("ann@x.com").await.unwrap().unwrap();
    assert!(account.reset_otp.is_empty());
}

#[tokio::test]
async fn test_expired_reset_otp() {
    let h = harness();
    let id = register_ann(&h).await;

    h.service.send_reset_otp("ann@x.com").await.unwrap();
    let mut account = stored_account(&h, id).await;
    let code = account.reset_otp.code.clone().unwrap();
    account.reset_otp.expires_at = Some(Utc::now() - Duration::minutes(1));
    h.accounts.update(account).await.unwrap();

    let err = h
        .service
        .reset_password("ann@x.com", &code, "newpass")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::OtpExpired));

    // Password unchanged
    h.service.login("ann@x.com", "secret1").await.unwrap();
}

#[tokio::test]
async fn test_reset_without_outstanding_otp_is_invalid() {
    let h = harness();
    register_ann(&h).await;

    let err = h
        .service
        .reset_password("ann@x.com", "123456", "newpass")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::OtpInvalid));
}

#[tokio::test]
async fn test_reset_otp_for_unknown_email() {
    let h = harness();
    let err = h.service.send_reset_otp("ghost@x.com").await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_otp_mails_carry_the_live_code() {
    let h = harness();
    let id = register_ann(&h).await;

    h.service.send_verify_otp(id).await.unwrap();
    let code = stored_account(&h, id).await.verify_otp.code.unwrap();

    let sent = h.mailer.sent().await;
    // Welcome mail first, then the OTP mail
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].to, "ann@x.com");
    assert!(sent[1].text_body.contains(&code));
}

#[tokio::test]
async fn test_welcome_mail_failure_is_swallowed() {
    let h = harness_with(FailingMailer);

    let response = h.service.register("Ann", "ann@x.com", "secret1").await;
    assert!(response.is_ok());
    h.service.login("ann@x.com", "secret1").await.unwrap();
}

#[tokio::test]
async fn test_verify_otp_mail_failure_surfaces() {
    let h = harness_with(FailingMailer);
    let account = Account::new(
        "Ann".to_string(),
        "ann@x.com".to_string(),
        "hash".to_string(),
    );
    let id = h.accounts.create(account).await.unwrap().id;

    let err = h.service.send_verify_otp(id).await.unwrap_err();
    assert!(matches!(err, DomainError::Internal { .. }));
}

#[tokio::test]
async fn test_profile() {
    let h = harness();
    let id = register_ann(&h).await;

    let profile = h.service.profile(id).await.unwrap();
    assert_eq!(profile.name, "Ann");
    assert!(!profile.is_verified);

    let err = h.service.profile(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_send_verify_otp_for_missing_account() {
    let h = harness();
    let err = h.service.send_verify_otp(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}
