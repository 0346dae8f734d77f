//! InfoCard CLI
//!
//! Command-line interface for InfoCard - a shareable digital business card.

mod commands;
mod config;
mod display;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use infocard_core::DeviceClass;
use tracing_subscriber::EnvFilter;

use commands::edit::EditArgs;
use commands::{CardTarget, Context};
use config::CliConfig;

#[derive(Parser)]
#[command(name = "infocard")]
#[command(version, about = "Shareable digital business card")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Data directory (default: ~/.infocard)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Card backend API URL. Without it a local store is used.
    #[arg(long, global = true, env = "INFOCARD_API_URL")]
    api_url: Option<String>,

    /// Base URL of share links
    #[arg(
        long,
        global = true,
        env = "INFOCARD_SHARE_URL",
        default_value = "http://localhost:3000"
    )]
    share_url: String,
}

/// Which card to load and for what kind of viewer.
#[derive(Args)]
struct TargetArgs {
    /// Username of the card (default: the first known contact)
    username: Option<String>,

    /// Ask for the public view
    #[arg(long)]
    public: bool,

    /// Viewport width in pixels, used to pick the device class
    #[arg(long, conflicts_with = "device")]
    width: Option<u32>,

    /// Device class (desktop, mobile)
    #[arg(long)]
    device: Option<DeviceClass>,
}

impl From<TargetArgs> for CardTarget {
    fn from(args: TargetArgs) -> Self {
        let device = match (args.width, args.device) {
            (Some(width), _) => DeviceClass::from_viewport_width(width),
            (None, Some(device)) => device,
            (None, None) => DeviceClass::Desktop,
        };
        CardTarget {
            username: args.username,
            public: args.public,
            device,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show a contact card
    Show {
        #[command(flatten)]
        target: TargetArgs,

        /// Print the card view model as JSON
        #[arg(long)]
        json: bool,
    },

    /// Save a card as a vCard file
    Vcard {
        #[command(flatten)]
        target: TargetArgs,

        /// Output file path, `-` for stdout (default: <name>.vcf)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the plain-text contact summary
    Summary {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Show the share link and its QR code
    Share {
        #[command(flatten)]
        target: TargetArgs,

        /// Save the QR code as SVG instead of printing it
        #[arg(long, value_name = "PATH")]
        svg: Option<PathBuf>,
    },

    /// Show what to write to an NFC tag
    Nfc {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Sign in as the card owner
    Login {
        /// Username (prompted if omitted)
        #[arg(short, long)]
        username: Option<String>,

        /// Password (prompted if omitted)
        #[arg(long, env = "INFOCARD_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Sign out
    Logout,

    /// Show data mode and session state
    Status,

    /// Edit a profile (prompts for every field without change flags)
    Edit {
        /// Username of the profile (default: the first known contact)
        username: Option<String>,

        /// Set a field, e.g. `--set email=me@example.com`. Empty clears it.
        #[arg(long, value_name = "FIELD=VALUE")]
        set: Vec<String>,

        /// Set a social link, e.g. `--social github=me`. Empty removes it.
        #[arg(long, value_name = "PLATFORM=HANDLE")]
        social: Vec<String>,

        /// Set a bank account field, e.g. `--bank 0.swift=COUTGB22`
        #[arg(long, value_name = "INDEX.FIELD=VALUE")]
        bank: Vec<String>,

        /// Append a bank account row before applying `--bank`
        #[arg(long)]
        add_bank: bool,

        /// Remove a bank account row
        #[arg(long, value_name = "INDEX")]
        remove_bank: Vec<usize>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("infocard_cli=warn".parse()?),
        )
        .init();

    // Completions need no data directory
    if let Commands::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "infocard", &mut io::stdout());
        return Ok(());
    }

    let config = CliConfig {
        data_dir: cli.data_dir.unwrap_or_else(CliConfig::default_data_dir),
        api_url: cli.api_url,
        share_url: cli.share_url,
    };
    let mut ctx = Context::open(&config)?;

    let result = match cli.command {
        Commands::Show { target, json } => commands::card::show(&ctx, &target.into(), json),
        Commands::Vcard { target, output } => commands::card::vcard(&ctx, &target.into(), output),
        Commands::Summary { target } => commands::card::summary(&ctx, &target.into()),
        Commands::Share { target, svg } => commands::share::share(&ctx, &target.into(), svg),
        Commands::Nfc { target } => commands::share::nfc(&ctx, &target.into()),
        Commands::Login { username, password } => {
            commands::auth::login(&mut ctx, username, password)
        }
        Commands::Logout => commands::auth::logout(&mut ctx),
        Commands::Status => commands::auth::status(&ctx, &config),
        Commands::Edit {
            username,
            set,
            social,
            bank,
            add_bank,
            remove_bank,
        } => commands::edit::edit(
            &ctx,
            EditArgs {
                username,
                set,
                social,
                bank,
                add_bank,
                remove_bank,
            },
        ),
        Commands::Completions { .. } => Ok(()),
    };

    if let Err(err) = result {
        display::error(&format!("{:#}", err));
        ctx.session.dispose();
        std::process::exit(1);
    }
    Ok(())
}
