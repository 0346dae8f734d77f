//! Share Commands
//!
//! Link, QR code and NFC tag payload for a card.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use infocard_core::render::{qr_text, CardBody};
use infocard_core::{render_card, CardView};

use super::{CardTarget, Context};
use crate::display;

/// Prints the share link with a terminal QR code, or saves the SVG code.
pub fn share(ctx: &Context, target: &CardTarget, svg: Option<PathBuf>) -> Result<()> {
    let resolved = ctx.load(target)?;
    let card = render_card(&resolved, CardView::Share, &ctx.share_url)?;
    let CardBody::Share(share) = card.body else {
        bail!("Share view not available");
    };

    if let Some(path) = svg {
        fs::write(&path, &share.qr_svg)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        display::success(&format!("Saved QR code to {}", path.display()));
    } else {
        println!("{}", qr_text(&share.url)?);
    }

    display::info(&format!("Share link: {}", share.url));
    if resolved.public_only() {
        display::info("Link opens the public card.");
    }
    Ok(())
}

/// Prints what to write to an NFC tag.
pub fn nfc(ctx: &Context, target: &CardTarget) -> Result<()> {
    let resolved = ctx.load(target)?;
    let card = render_card(&resolved, CardView::Nfc, &ctx.share_url)?;
    let CardBody::Nfc(nfc) = card.body else {
        bail!("NFC view not available");
    };

    display::info(&format!("Tag URL: {}", nfc.url));
    let ndef: Vec<String> = nfc.ndef_message.iter().map(|b| format!("{:02X}", b)).collect();
    println!("NDEF: {}", ndef.join(" "));
    println!();
    for (i, step) in nfc.instructions.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    Ok(())
}
