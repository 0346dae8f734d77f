//! Auth Commands
//!
//! Sign in, sign out and show the session state.

use anyhow::{bail, Result};
use dialoguer::{Input, Password as PasswordPrompt};
use infocard_core::Password;

use super::Context;
use crate::config::CliConfig;
use crate::display;

/// Signs in and stores the session credential.
pub fn login(ctx: &mut Context, username: Option<String>, password: Option<String>) -> Result<()> {
    if let Some(user) = ctx.session.user() {
        display::warning(&format!("Already signed in as {}", user.username));
        return Ok(());
    }

    let username = match username {
        Some(username) => username,
        None => Input::<String>::new().with_prompt("Username").interact_text()?,
    };
    let password = match password {
        Some(password) => Password::from(password),
        None => Password::from(PasswordPrompt::new().with_prompt("Password").interact()?),
    };

    if let Err(err) = ctx.session.login(&username, &password) {
        let message = ctx.session.last_error().unwrap_or("Login failed").to_string();
        tracing::debug!("Login failed: {}", err);
        bail!(message);
    }

    display::success(&format!("Signed in as {}", username));
    Ok(())
}

/// Signs out and removes the stored credential.
pub fn logout(ctx: &mut Context) -> Result<()> {
    if !ctx.session.is_authenticated() {
        display::info("Not signed in");
        return Ok(());
    }

    ctx.session.logout()?;
    display::success("Signed out");
    Ok(())
}

/// Shows the data mode and who is signed in.
pub fn status(ctx: &Context, config: &CliConfig) -> Result<()> {
    match config.api_url.as_deref() {
        Some(api_url) => display::info(&format!("Mode: {} ({})", config.data_mode(), api_url)),
        None => display::info(&format!(
            "Mode: {} ({})",
            config.data_mode(),
            config.database_path().display()
        )),
    }
    display::info(&format!("Share links: {}", ctx.share_url));

    match ctx.session.user() {
        Some(user) => {
            display::success(&format!("Signed in as {}", user.username));
            display::info(&format!("Credential: {}", config.credential_path().display()));
        }
        None => display::info("Not signed in"),
    }
    Ok(())
}
