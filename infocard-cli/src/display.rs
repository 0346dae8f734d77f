//! Display Helpers
//!
//! Terminal output formatting and styling.

use console::{style, Style};
use infocard_core::render::{CardBody, InfoSection, RenderedCard};
use infocard_core::ViewMode;

/// Prints a success message.
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Prints an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Prints a warning message.
pub fn warning(msg: &str) {
    println!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Prints an info message.
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Short tag printed next to the name.
fn mode_tag(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Owner => "owner",
        ViewMode::Preview => "preview",
        ViewMode::Public => "public",
        ViewMode::Full => "",
    }
}

/// Displays a card in a formatted box.
pub fn display_card(card: &RenderedCard) {
    let width = 48;

    if let Some(banner) = card.banner {
        warning(banner);
    }

    // Top border
    println!("{}", "─".repeat(width));

    // Header
    println!(
        "  {}  {} {}",
        style(format!("[{}]", card.header.initial)).bold(),
        style(&card.header.display_name).bold().cyan(),
        style(mode_tag(card.mode)).dim()
    );
    let role: Vec<&str> = [card.header.title.as_deref(), card.header.company.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !role.is_empty() {
        println!("       {}", role.join(" · "));
    }

    // Separator
    println!("{}", "─".repeat(width));

    match &card.body {
        CardBody::Info(info) => display_info(info),
        CardBody::Share(share) => {
            println!("  {}", share.url);
        }
        CardBody::Nfc(nfc) => {
            println!("  {}", nfc.url);
        }
    }

    // Bottom border
    println!("{}", "─".repeat(width));
}

fn display_info(info: &InfoSection) {
    let label_style = Style::new().dim();

    if info.contact_rows.is_empty() && info.socials.is_empty() {
        println!("  {}", style("(no contact details)").dim());
    }
    for row in &info.contact_rows {
        println!("  {:22} {}", label_style.apply_to(row.label), row.value);
    }
    for social in &info.socials {
        println!("  {:22} {}", label_style.apply_to(social.label), social.url);
    }

    if !info.identification_rows.is_empty() {
        println!();
        for row in &info.identification_rows {
            println!("  {:22} {}", label_style.apply_to(row.label), row.value);
        }
    }

    if !info.bank_accounts.is_empty() {
        println!();
        println!("  {}", style("Bank Accounts").bold());
        for account in &info.bank_accounts {
            let name = account.bank_name.as_deref().unwrap_or("(unnamed bank)");
            let number = account.account_number.as_deref().unwrap_or("-");
            println!("    {} · {} · {}", name, account.account_type, number);
            if let Some(routing) = account.routing_number.as_deref() {
                println!("      Routing {}", routing);
            }
            if let Some(swift) = account.swift.as_deref() {
                println!("      SWIFT {}", swift);
            }
        }
    }

    if let Some(bio) = info.bio.as_deref() {
        println!();
        println!("  {}", style("About Me").bold());
        println!("  {}", bio);
    }
}
