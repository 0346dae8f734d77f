// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! InfoCard Core Library
//!
//! Digital business card model: a contact profile split into public and
//! private fields, a resolver that decides what a viewer may see, and the
//! renderers and exports built on the resolved result.

pub mod config;
pub mod error;
pub mod export;
pub mod profile;
pub mod render;
pub mod service;
pub mod session;
pub mod social;
pub mod store;
pub mod visibility;

pub use config::{CardConfig, DataMode, UnknownDataMode};
pub use error::{AuthError, CardError};
pub use export::{export_summary, export_vcard, vcard_file_name, VCARD_MIME_TYPE};
pub use profile::{
    AccountType, BankAccount, BankField, ContactProfile, DraftError, ProfileDraft, ProfileField,
    UnknownAccountType, UnknownField, ValidationError,
};
pub use render::{render_card, CardView, RenderedCard, ShareError, UnknownCardView};
pub use service::CardService;
pub use session::{
    Authenticator, CredentialStore, DemoAuthenticator, DemoSession, FileCredentialStore,
    MemoryCredentialStore, Password, Session, User, AUTH_HEADER,
};
#[cfg(feature = "remote")]
pub use session::RemoteAuthenticator;
pub use social::{SocialPlatform, UnknownPlatform};
#[cfg(feature = "remote")]
pub use store::RemoteProfileStore;
pub use store::{MemoryProfileStore, ProfileStore, SqliteProfileStore, StoreError};
pub use visibility::{
    resolve, DeviceClass, FieldPrivacy, RequestedView, ResolvedProfile, UnknownDevice,
    UnknownView, ViewMode,
};
