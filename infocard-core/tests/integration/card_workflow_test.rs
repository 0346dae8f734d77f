//! Card Workflow Integration Tests
//!
//! Loading a card from a store and turning it into every output.

use infocard_core::*;

use crate::common::fixtures::{signed_in_session, UnreachableStore};

/// Test: visitor and owner see different cards from the same store
#[test]
fn test_visitor_and_owner_workflow() {
    let service = CardService::new(MemoryProfileStore::demo());
    let visitor = DemoSession::demo();
    let owner = signed_in_session();

    let public = service
        .load_card("daniel", &visitor, RequestedView::Public, DeviceClass::Desktop)
        .unwrap();
    assert_eq!(public.mode(), ViewMode::Public);
    assert!(public.text(ProfileField::Email).is_none());
    assert!(!export_vcard(&public).contains("EMAIL:"));

    let full = service
        .load_card("daniel", &owner, RequestedView::Private, DeviceClass::Desktop)
        .unwrap();
    assert_eq!(full.mode(), ViewMode::Owner);
    assert!(export_vcard(&full).contains("EMAIL:qtuan1106@gmail.com"));
    assert!(export_summary(&full).contains("Tax Number: 123-45-6789"));
}

/// Test: a mobile tap always gets the full card
#[test]
fn test_mobile_tap_workflow() {
    let service = CardService::new(MemoryProfileStore::demo());
    let visitor = DemoSession::demo();

    let resolved = service
        .load_card(
            "thien",
            &visitor,
            RequestedView::Public,
            DeviceClass::from_viewport_width(390),
        )
        .unwrap();

    assert!(!resolved.public_only());
    assert_eq!(resolved.mode(), ViewMode::Full);
    assert_eq!(resolved.text(ProfileField::Phone), Some("+84 912345678"));
}

/// Test: share and NFC outputs point at the same link
#[test]
fn test_share_workflow() {
    let service = CardService::new(MemoryProfileStore::demo());
    let resolved = service
        .load_card(
            "daniel",
            &DemoSession::demo(),
            RequestedView::Public,
            DeviceClass::Desktop,
        )
        .unwrap();

    let config = CardConfig::default().with_share_base_url("https://cards.example/");
    let share = render_card(&resolved, CardView::Share, &config.share_base_url).unwrap();
    let nfc = render_card(&resolved, CardView::Nfc, &config.share_base_url).unwrap();

    let (render::CardBody::Share(share), render::CardBody::Nfc(nfc)) = (share.body, nfc.body)
    else {
        panic!("unexpected card bodies");
    };
    assert_eq!(share.url, "https://cards.example/contact/daniel?view=public");
    assert_eq!(share.url, nfc.url);
}

/// Test: backend failures surface as fetch errors
#[test]
fn test_unreachable_store() {
    let service = CardService::new(UnreachableStore);
    let err = service
        .load_card(
            "daniel",
            &DemoSession::demo(),
            RequestedView::Private,
            DeviceClass::Desktop,
        )
        .unwrap_err();

    assert!(matches!(err, CardError::Fetch(_)));
    assert!(err.to_string().starts_with("Failed to load contact information"));
}
