//! Edit Command
//!
//! Applies field changes to the owner's profile. Without any change flags
//! the fields are prompted for one by one.

use anyhow::{bail, Context as _, Result};
use console::Term;
use dialoguer::Input;
use infocard_core::{
    render_card, resolve, BankField, CardView, DeviceClass, ProfileDraft, ProfileField,
    RequestedView, SocialPlatform,
};

use super::Context;
use crate::display;

/// Changes requested on the command line.
#[derive(Debug, Default)]
pub struct EditArgs {
    pub username: Option<String>,
    /// `field=value` pairs.
    pub set: Vec<String>,
    /// `platform=handle-or-url` pairs.
    pub social: Vec<String>,
    /// `index.field=value` triples.
    pub bank: Vec<String>,
    pub add_bank: bool,
    pub remove_bank: Vec<usize>,
}

impl EditArgs {
    fn is_empty(&self) -> bool {
        self.set.is_empty()
            && self.social.is_empty()
            && self.bank.is_empty()
            && !self.add_bank
            && self.remove_bank.is_empty()
    }
}

/// Edits and saves a profile.
pub fn edit(ctx: &Context, args: EditArgs) -> Result<()> {
    if !ctx.session.is_authenticated() {
        bail!("Sign in first with `infocard login`");
    }

    let username = ctx.username(args.username.as_deref())?;
    let mut draft = ctx.service.begin_edit(&username, &ctx.session)?;

    if args.is_empty() {
        if !Term::stdout().is_term() {
            bail!("Nothing to change. Pass --set, --social or --bank");
        }
        prompt_fields(&mut draft)?;
    } else {
        apply(&mut draft, &args)?;
    }

    let profile = ctx.service.submit_edit(&username, &ctx.session, draft)?;
    display::success(&format!("Saved profile of {}", profile.name));

    let resolved = resolve(&profile, true, RequestedView::Private, DeviceClass::Desktop);
    display::display_card(&render_card(&resolved, CardView::Info, &ctx.share_url)?);
    Ok(())
}

fn apply(draft: &mut ProfileDraft, args: &EditArgs) -> Result<()> {
    let mut removals = args.remove_bank.clone();
    removals.sort_unstable_by(|a, b| b.cmp(a));
    removals.dedup();
    for index in removals {
        draft.remove_bank_account(index)?;
    }
    if args.add_bank {
        draft.add_bank_account();
    }

    for assignment in &args.set {
        let (key, value) = parse_assignment(assignment)?;
        let field: ProfileField = key.parse()?;
        draft.set_field(field, value)?;
    }

    for assignment in &args.social {
        let (key, value) = parse_assignment(assignment)?;
        let platform: SocialPlatform = key.parse()?;
        draft.set_social(platform, value);
    }

    for assignment in &args.bank {
        let (index, field, value) = parse_bank_assignment(assignment)?;
        draft.update_bank_account(index, field, value)?;
    }

    Ok(())
}

fn prompt_fields(draft: &mut ProfileDraft) -> Result<()> {
    for field in ProfileField::ALL.into_iter().filter(ProfileField::is_text) {
        let current = draft.profile().text(field).unwrap_or_default().to_string();
        let value: String = Input::new()
            .with_prompt(field.label())
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()?;
        draft.set_field(field, &value)?;
    }

    for platform in SocialPlatform::ALL {
        let current = draft
            .profile()
            .socials
            .get(&platform)
            .cloned()
            .unwrap_or_default();
        let value: String = Input::new()
            .with_prompt(platform.display_name())
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()?;
        draft.set_social(platform, &value);
    }

    Ok(())
}

/// Splits `key=value`. The value may itself contain `=`.
fn parse_assignment(s: &str) -> Result<(&str, &str)> {
    let (key, value) = s
        .split_once('=')
        .with_context(|| format!("Expected key=value, got `{}`", s))?;
    Ok((key.trim(), value))
}

/// Splits `index.field=value`.
fn parse_bank_assignment(s: &str) -> Result<(usize, BankField, &str)> {
    let (key, value) = parse_assignment(s)?;
    let (index, field) = key
        .split_once('.')
        .with_context(|| format!("Expected index.field=value, got `{}`", s))?;
    let index: usize = index
        .parse()
        .with_context(|| format!("Invalid bank account index `{}`", index))?;
    Ok((index, field.parse()?, value))
}
