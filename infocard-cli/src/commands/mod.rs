//! CLI Commands

pub mod auth;
pub mod card;
pub mod edit;
pub mod share;

use std::fs;
use std::sync::Arc;

use anyhow::{bail, Context as _, Result};
use infocard_core::store::demo_profiles;
use infocard_core::{
    Authenticator, CardService, DataMode, DemoAuthenticator, DeviceClass, FileCredentialStore,
    ProfileStore, RemoteAuthenticator, RemoteProfileStore, RequestedView, ResolvedProfile,
    Session, SqliteProfileStore,
};

use crate::config::CliConfig;

/// Session type shared by every command.
pub type CliSession = Session<Arc<dyn Authenticator>, FileCredentialStore>;

/// Everything a command needs: the session and a service over the
/// configured store.
pub struct Context {
    pub session: CliSession,
    pub service: CardService<Arc<dyn ProfileStore>>,
    pub share_url: String,
}

/// Which card to show and how.
#[derive(Debug, Clone, Default)]
pub struct CardTarget {
    pub username: Option<String>,
    pub public: bool,
    pub device: DeviceClass,
}

impl Context {
    /// Restores the session and opens the store for the configured mode.
    pub fn open(config: &CliConfig) -> Result<Self> {
        fs::create_dir_all(&config.data_dir).with_context(|| {
            format!("Failed to create data directory {}", config.data_dir.display())
        })?;

        let card_config = config.card_config();
        let credentials = FileCredentialStore::new(&config.data_dir);

        let (session, store): (CliSession, Arc<dyn ProfileStore>) = match card_config.mode {
            DataMode::Remote => {
                let authenticator: Arc<dyn Authenticator> =
                    Arc::new(RemoteAuthenticator::new(&card_config)?);
                let session = Session::init(authenticator, credentials);
                let store = RemoteProfileStore::new(&card_config)?
                    .with_token(session.token().map(str::to_string));
                (session, Arc::new(store))
            }
            DataMode::Demo => {
                let authenticator: Arc<dyn Authenticator> = Arc::new(DemoAuthenticator);
                let session = Session::init(authenticator, credentials);
                let store = SqliteProfileStore::open(config.database_path())?;
                store.seed_if_empty(demo_profiles())?;
                (session, Arc::new(store))
            }
        };

        Ok(Context {
            session,
            service: CardService::new(store),
            share_url: card_config.share_base_url,
        })
    }

    /// Returns the named username, or the first one the store knows.
    pub fn username(&self, requested: Option<&str>) -> Result<String> {
        if let Some(username) = requested {
            return Ok(username.to_string());
        }
        match self.service.store().usernames()?.into_iter().next() {
            Some(username) => Ok(username),
            None => bail!("No contacts available"),
        }
    }

    /// Loads and resolves a card.
    pub fn load(&self, target: &CardTarget) -> Result<ResolvedProfile> {
        let username = self.username(target.username.as_deref())?;
        let requested = if target.public {
            RequestedView::Public
        } else {
            RequestedView::Private
        };
        Ok(self
            .service
            .load_card(&username, &self.session, requested, target.device)?)
    }
}
