//! Edit Workflow Integration Tests
//!
//! Signing in, editing a card and reading the result back.

use infocard_core::*;
use tempfile::TempDir;

use crate::common::fixtures::{signed_in_session, CountingStore};

/// Test: owner edits persist in SQLite
#[test]
fn test_edit_and_reload_workflow() {
    let dir = TempDir::new().unwrap();
    let store = SqliteProfileStore::open(dir.path().join("profiles.db")).unwrap();
    store.seed_if_empty(store::demo_profiles()).unwrap();
    let service = CardService::new(store);
    let session = signed_in_session();

    let mut draft = service.begin_edit("thien", &session).unwrap();
    draft.set_social(SocialPlatform::Instagram, "@ngocthien");
    draft.set_field(ProfileField::Bio, "Still vibes & code").unwrap();
    service.submit_edit("thien", &session, draft).unwrap();

    let reloaded = service
        .load_card("thien", &session, RequestedView::Private, DeviceClass::Desktop)
        .unwrap();
    assert_eq!(reloaded.text(ProfileField::Bio), Some("Still vibes & code"));
    assert_eq!(
        reloaded
            .profile()
            .socials
            .get(&SocialPlatform::Instagram)
            .map(String::as_str),
        Some("https://instagram.com/ngocthien")
    );
}

/// Test: an empty name never reaches the store
#[test]
fn test_empty_name_rejected_before_store() {
    let service = CardService::new(CountingStore::demo());
    let session = signed_in_session();

    let mut draft = service.begin_edit("daniel", &session).unwrap();
    draft.set_field(ProfileField::Name, "").unwrap();
    let err = service.submit_edit("daniel", &session, draft).unwrap_err();

    assert!(matches!(
        err,
        CardError::Validation(ValidationError::EmptyName)
    ));
    assert_eq!(service.store().update_count(), 0);
    assert_eq!(service.store().fetch("daniel").unwrap().name, "Daniel.Tuấn");
}

/// Test: signed-out visitors cannot start or submit edits
#[test]
fn test_edit_requires_sign_in() {
    let service = CardService::new(CountingStore::demo());
    let visitor = DemoSession::demo();

    assert!(matches!(
        service.begin_edit("daniel", &visitor),
        Err(CardError::Auth(AuthError::NotAuthenticated))
    ));

    let mut draft = ProfileDraft::default();
    draft.set_field(ProfileField::Name, "Mallory").unwrap();
    assert!(service.submit_edit("daniel", &visitor, draft).is_err());
    assert_eq!(service.store().update_count(), 0);
}

/// Test: after logout the owner view is gone
#[test]
fn test_logout_workflow() {
    let service = CardService::new(MemoryProfileStore::demo());
    let mut session = signed_in_session();

    session.logout().unwrap();

    let resolved = service
        .load_card("daniel", &session, RequestedView::Public, DeviceClass::Desktop)
        .unwrap();
    assert_eq!(resolved.mode(), ViewMode::Public);
}
