// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the card renderer

#[allow(dead_code)]
mod common;

use common::fixtures::full_profile;
use infocard_core::render::{placeholder_initial, CardBody, PLACEHOLDER_INITIAL};
use infocard_core::*;

const BASE: &str = "https://cards.example";

fn render(authenticated: bool, view: RequestedView, card: CardView) -> RenderedCard {
    let resolved = resolve(&full_profile(), authenticated, view, DeviceClass::Desktop);
    render_card(&resolved, card, BASE).unwrap()
}

#[test]
fn test_header() {
    let card = render(false, RequestedView::Private, CardView::Info);

    assert_eq!(card.header.display_name, "Ada Lovelace");
    assert_eq!(card.header.initial, 'A');
    assert_eq!(card.header.title.as_deref(), Some("Analyst"));
    assert_eq!(card.header.profile_image.as_deref(), Some("/images/ada.png"));
}

#[test]
fn test_empty_name_uses_placeholder() {
    assert_eq!(placeholder_initial(""), PLACEHOLDER_INITIAL);

    let resolved = resolve(
        &ContactProfile::default(),
        false,
        RequestedView::Private,
        DeviceClass::Desktop,
    );
    let card = render_card(&resolved, CardView::Info, BASE).unwrap();
    assert_eq!(card.header.initial, '?');
}

#[test]
fn test_info_rows_have_actions() {
    let card = render(true, RequestedView::Private, CardView::Info);
    let CardBody::Info(info) = card.body else {
        panic!("expected info body");
    };

    let actions: Vec<_> = info
        .contact_rows
        .iter()
        .map(|r| r.action.as_deref())
        .collect();
    assert_eq!(
        actions,
        vec![
            Some("mailto:ada@example.com"),
            Some("tel:+442079460000"),
            None,
            Some("https://ada.dev"),
        ]
    );
    assert_eq!(info.socials[0].label, "GitHub");
    assert_eq!(info.identification_rows.len(), 2);
    assert_eq!(info.bank_accounts.len(), 1);
    assert_eq!(info.bio.as_deref(), Some("First programmer"));
}

#[test]
fn test_public_info_is_gated() {
    let card = render(false, RequestedView::Public, CardView::Info);
    let CardBody::Info(info) = card.body else {
        panic!("expected info body");
    };

    assert_eq!(card.mode, ViewMode::Public);
    assert!(card.banner.is_some());
    assert_eq!(info.contact_rows.len(), 1);
    assert_eq!(info.contact_rows[0].field, ProfileField::Website);
    assert!(info.identification_rows.is_empty());
    assert!(info.bank_accounts.is_empty());
}

#[test]
fn test_preview_banner() {
    let card = render(true, RequestedView::Public, CardView::Info);
    assert_eq!(card.mode, ViewMode::Preview);
    assert_eq!(card.banner, ViewMode::Preview.banner());
}

#[test]
fn test_share_view() {
    let card = render(false, RequestedView::Public, CardView::Share);
    let CardBody::Share(share) = card.body else {
        panic!("expected share body");
    };

    assert_eq!(share.url, "https://cards.example/contact/ada?view=public");
    assert!(share.qr_svg.contains("<svg"));
    assert!(!share.summary.contains("Email:"));
}

#[test]
fn test_nfc_view() {
    let card = render(true, RequestedView::Private, CardView::Nfc);
    let CardBody::Nfc(nfc) = card.body else {
        panic!("expected nfc body");
    };

    assert_eq!(nfc.url, "https://cards.example/contact/ada");
    assert_eq!(nfc.ndef_message[3], b'U');
    assert!(nfc.ndef_message.ends_with(b"cards.example/contact/ada"));
    assert!(!nfc.instructions.is_empty());
}

#[test]
fn test_rendered_card_json_is_tagged() {
    let card = render(false, RequestedView::Private, CardView::Info);
    let json = serde_json::to_value(&card).unwrap();
    assert_eq!(json["body"]["view"], "info");
    assert_eq!(json["header"]["displayName"], "Ada Lovelace");
}
