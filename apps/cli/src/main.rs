//! Contact Keeper CLI - manage your contacts from the terminal.

mod commands;
mod output;
mod validate;

use clap::{Parser, Subcommand};
use keeper_config::{init_logging, Config, Paths};
use keeper_contacts::ContactKind;
use tracing::debug;

/// Contact Keeper CLI - sign in and manage your contacts.
#[derive(Parser)]
#[command(name = "contact-keeper")]
#[command(about = "Contact Keeper CLI for accounts and contacts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text", global = true)]
    format: output::OutputFormat,

    /// Log level (trace, debug, info, warn, error); defaults to the configured level
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Login with email and password
    Login,

    /// Create an account
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,
    },

    /// Logout and clear session
    Logout,

    /// Check authentication status
    Status,

    /// Manage contacts
    Contacts {
        #[command(subcommand)]
        command: ContactCommands,
    },
}

#[derive(Subcommand)]
enum ContactCommands {
    /// List contacts
    List {
        /// Only show contacts whose name or email contains this text
        #[arg(short = 'F', long)]
        filter: Option<String>,
    },
    /// Add a contact
    Add {
        #[arg(short, long)]
        name: String,
        #[arg(short, long, default_value = "")]
        email: String,
        #[arg(short, long)]
        phone: Option<String>,
        /// personal or professional
        #[arg(short = 't', long = "type", default_value = "personal")]
        kind: ContactKind,
    },
    /// Update a contact
    Update {
        /// Contact ID
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        phone: Option<String>,
        /// personal or professional
        #[arg(short = 't', long = "type")]
        kind: Option<ContactKind>,
    },
    /// Delete a contact
    Delete {
        /// Contact ID
        id: String,
    },
}

async fn run(cli: Cli, config: Config, paths: Paths) -> anyhow::Result<()> {
    let app = commands::App::new(&config, &paths)?;
    let format = &cli.format;

    match cli.command {
        Commands::Login => commands::login(&app, format).await,
        Commands::Register { name } => commands::register(&app, &name, format).await,
        Commands::Logout => commands::logout(&app, format),
        Commands::Status => commands::status(&app, format).await,
        Commands::Contacts { command } => match command {
            ContactCommands::List { filter } => {
                commands::contacts_list(&app, filter.as_deref(), format).await
            }
            ContactCommands::Add {
                name,
                email,
                phone,
                kind,
            } => {
                let draft = commands::new_draft(name, email, phone, kind);
                commands::contacts_add(&app, draft, format).await
            }
            ContactCommands::Update {
                id,
                name,
                email,
                phone,
                kind,
            } => {
                let changes = commands::ContactChanges {
                    name,
                    email,
                    phone,
                    kind,
                };
                commands::contacts_update(&app, &id, changes, format).await
            }
            ContactCommands::Delete { id } => commands::contacts_delete(&app, &id, format).await,
        },
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let paths = match Paths::new() {
        Ok(paths) => paths,
        Err(e) => {
            output::print_error(&e.to_string(), &cli.format);
            std::process::exit(1);
        }
    };

    let config = match Config::load(&paths) {
        Ok(config) => config,
        Err(e) => {
            output::print_error(&format!("Invalid configuration: {}", e), &cli.format);
            std::process::exit(1);
        }
    };

    // Initialize logging via observability crate
    let level = cli.log_level.clone().unwrap_or_else(|| config.log_level.clone());
    match init_logging(&level, &paths) {
        Ok(log_path) => debug!(path = %log_path.display(), "Logging initialized"),
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }

    let format = cli.format;
    if let Err(e) = run(cli, config, paths).await {
        output::print_error(&e.to_string(), &format);
        std::process::exit(1);
    }
}
