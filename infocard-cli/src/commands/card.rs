//! Card Commands
//!
//! Show a card, export it as a vCard, or print the plain-text summary.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use infocard_core::{export_summary, export_vcard, render_card, vcard_file_name, CardView};

use super::{CardTarget, Context};
use crate::display;

/// Shows the contact info view of a card.
pub fn show(ctx: &Context, target: &CardTarget, json: bool) -> Result<()> {
    let resolved = ctx.load(target)?;
    let card = render_card(&resolved, CardView::Info, &ctx.share_url)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&card)?);
    } else {
        display::display_card(&card);
    }
    Ok(())
}

/// Writes the card as a vCard file, or to stdout with `-`.
pub fn vcard(ctx: &Context, target: &CardTarget, output: Option<PathBuf>) -> Result<()> {
    let resolved = ctx.load(target)?;
    let vcard = export_vcard(&resolved);

    let path = output.unwrap_or_else(|| PathBuf::from(vcard_file_name(&resolved)));
    if path.as_os_str() == "-" {
        print!("{}", vcard);
        return Ok(());
    }

    fs::write(&path, vcard).with_context(|| format!("Failed to write {}", path.display()))?;
    display::success(&format!("Saved vCard to {}", path.display()));
    Ok(())
}

/// Prints the plain-text summary of a card.
pub fn summary(ctx: &Context, target: &CardTarget) -> Result<()> {
    let resolved = ctx.load(target)?;
    println!("{}", export_summary(&resolved));
    Ok(())
}
