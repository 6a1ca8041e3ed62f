//! FOMO CLI
//!
//! ## Usage
//!
//! ```bash
//! # Register a wallet with an invite code
//! fomo register --wallet 0xabc... --invite VIP001 --accept-terms
//!
//! # Look up a wallet's registration
//! fomo check --wallet 0xabc...
//!
//! # Summarize landing page content in Russian
//! fomo content --lang ru
//!
//! # Admin session and FAQ management
//! fomo admin login --password secret
//! FOMO_ADMIN_TOKEN=... fomo admin faq add "Question?" "Answer."
//! fomo admin list evolution-levels --lang ru
//! FOMO_ADMIN_TOKEN=... fomo admin analytics stats --period 7
//!
//! # Local cookie consent flag
//! fomo consent accept
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::error;

use fomo_core::admin::AdminSession;
use fomo_core::analytics::AnalyticsPeriod;
use fomo_core::i18n::Language;
use fomo_core::wallet::WalletAddress;
use fomo_lib::bootstrap::{
    self,
    config::{logs_dir, site_language},
    tracing::init_tracing_subscriber,
};
use fomo_lib::commands::{self, admin::CollectionKind, register::RegisterArgs};

/// FOMO - wallet registration and site content client
#[derive(Parser)]
#[command(name = "fomo")]
#[command(version)]
#[command(about = "FOMO - wallet registration and site content client")]
struct Cli {
    /// Config file (default: <data dir>/config.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the registration flow for a wallet
    Register {
        #[arg(long)]
        wallet: String,
        /// Invite code to redeem
        #[arg(long)]
        invite: Option<String>,
        /// Referral code from a landing link; prefills the invite code
        #[arg(long)]
        referral: Option<String>,
        /// Link a social account instead of skipping that step
        #[arg(long)]
        link_social: bool,
        /// Accept the Terms and Privacy Policy
        #[arg(long)]
        accept_terms: bool,
    },

    /// Check whether a wallet is registered
    Check {
        #[arg(long)]
        wallet: String,
    },

    /// Load and summarize landing page content
    Content {
        /// Language (en, ru); defaults to the configured one
        #[arg(long)]
        lang: Option<Language>,
    },

    /// Admin panel operations
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },

    /// Cookie consent stored on this machine
    Consent {
        #[command(subcommand)]
        action: ConsentAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Exchange the admin password for a session token
    Login {
        #[arg(long, env = "FOMO_ADMIN_PASSWORD")]
        password: String,
    },

    /// FAQ entries
    Faq {
        #[command(subcommand)]
        action: FaqAction,
    },

    /// List an admin-managed collection
    List {
        #[arg(value_enum)]
        kind: CollectionKind,
        #[arg(long)]
        lang: Option<Language>,
    },

    /// Save a new utility card order
    ReorderUtilities {
        /// Utility ids in display order
        #[arg(required = true)]
        ids: Vec<String>,
        #[arg(long, env = "FOMO_ADMIN_TOKEN", hide_env_values = true)]
        token: String,
    },

    /// Visitor analytics
    Analytics {
        #[command(subcommand)]
        action: AnalyticsAction,
    },
}

#[derive(Subcommand)]
enum AnalyticsAction {
    /// Aggregated statistics
    Stats {
        /// Window in days: 7, 30 or 90
        #[arg(long, default_value = "30")]
        period: AnalyticsPeriod,
        #[arg(long, env = "FOMO_ADMIN_TOKEN", hide_env_values = true)]
        token: String,
    },
    /// Delete all collected events
    Clear {
        #[arg(long, env = "FOMO_ADMIN_TOKEN", hide_env_values = true)]
        token: String,
    },
}

#[derive(Subcommand)]
enum FaqAction {
    List,
    Add {
        question: String,
        answer: String,
        #[arg(long, env = "FOMO_ADMIN_TOKEN", hide_env_values = true)]
        token: String,
    },
    Delete {
        id: String,
        #[arg(long, env = "FOMO_ADMIN_TOKEN", hide_env_values = true)]
        token: String,
    },
}

#[derive(Subcommand)]
enum ConsentAction {
    Status,
    Accept,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        error!(error = %format!("{err:#}"), "command failed");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = bootstrap::resolve_config(cli.config).context("Failed to load configuration")?;
    init_tracing_subscriber(&logs_dir(&config))?;

    let wallet = match &cli.command {
        Commands::Register { wallet, .. } | Commands::Check { wallet } => {
            Some(WalletAddress::new(wallet.as_str()))
        }
        _ => None,
    };
    let default_lang = site_language(&config);
    let deps = bootstrap::wire_dependencies(config, wallet.clone())?;

    match cli.command {
        Commands::Register {
            invite,
            referral,
            link_social,
            accept_terms,
            ..
        } => {
            commands::register::run(
                &deps,
                RegisterArgs {
                    invite_code: invite,
                    referral_code: referral,
                    link_social,
                    accept_terms,
                },
            )
            .await?;
        }
        Commands::Check { .. } => {
            let wallet = wallet.context("wallet address is required")?;
            commands::check::run(&deps, &wallet).await?;
        }
        Commands::Content { lang } => {
            commands::content::run(&deps, lang.unwrap_or(default_lang)).await?;
        }
        Commands::Admin { action } => match action {
            AdminAction::Login { password } => {
                commands::admin::login(&deps, &password).await?;
            }
            AdminAction::Faq { action } => match action {
                FaqAction::List => {
                    commands::admin::list_faq(&deps).await?;
                }
                FaqAction::Add {
                    question,
                    answer,
                    token,
                } => {
                    let session = AdminSession::new(token);
                    commands::admin::add_faq(&deps, &session, question, answer).await?;
                }
                FaqAction::Delete { id, token } => {
                    let session = AdminSession::new(token);
                    commands::admin::delete_faq(&deps, &session, &id).await?;
                }
            },
            AdminAction::List { kind, lang } => {
                commands::admin::list_collection(&deps, kind, lang.unwrap_or(default_lang)).await?;
            }
            AdminAction::ReorderUtilities { ids, token } => {
                let session = AdminSession::new(token);
                commands::admin::reorder_utilities(&deps, &session, &ids).await?;
            }
            AdminAction::Analytics { action } => match action {
                AnalyticsAction::Stats { period, token } => {
                    let session = AdminSession::new(token);
                    commands::admin::analytics_stats(&deps, &session, period).await?;
                }
                AnalyticsAction::Clear { token } => {
                    let session = AdminSession::new(token);
                    commands::admin::analytics_clear(&deps, &session).await?;
                }
            },
        },
        Commands::Consent { action } => match action {
            ConsentAction::Status => {
                commands::consent::status(&deps).await?;
            }
            ConsentAction::Accept => {
                commands::consent::accept(&deps).await?;
            }
        },
    }

    Ok(())
}
