//! Pet Haven CLI - a command-line storefront for the pet store.
//!
//! # Usage
//!
//! ```bash
//! # Pick a store and log in (any non-empty credentials work)
//! pethaven stores
//! pethaven login -u alice -p hunter2 --store <store-id>
//!
//! # Browse available pets
//! pethaven pets
//! pethaven pets --all
//!
//! # Build a cart and check out
//! pethaven cart add <pet-id>
//! pethaven cart show
//! pethaven checkout
//!
//! # Or buy a single pet directly
//! pethaven buy <pet-id>
//! ```
//!
//! # Environment Variables
//!
//! - `PETHAVEN_API_URL` - Pet store GraphQL endpoint (required)
//! - `PETHAVEN_DATA_DIR` - Where session and cart are persisted
//! - `PETHAVEN_PAGE_SIZE` - Pets fetched per listing page (default 12)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pethaven_storefront::state::AppState;

mod commands;

#[derive(Parser)]
#[command(name = "pethaven")]
#[command(author, version, about = "Pet Haven storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List stores
    Stores,
    /// Log in to a store
    Login {
        /// Username (becomes your customer name)
        #[arg(short, long)]
        username: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Store to shop at; omit to see the store list
        #[arg(short, long)]
        store: Option<String>,
    },
    /// Log out and forget the session
    Logout,
    /// Show the current session
    Whoami,
    /// List available pets at your store
    Pets {
        /// Keep fetching pages until the listing is exhausted
        #[arg(long)]
        all: bool,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Buy a single pet immediately
    Buy {
        /// ID of the pet to buy
        pet_id: String,
    },
    /// Purchase everything in the cart
    Checkout,
}

#[derive(Subcommand)]
enum CartAction {
    /// Add an available pet to the cart
    Add {
        /// ID of the pet to add
        pet_id: String,
    },
    /// Remove a pet from the cart
    Remove {
        /// ID of the pet to remove
        pet_id: String,
    },
    /// Show the cart contents
    Show,
    /// Empty the cart
    Clear,
}

#[tokio::main]
async fn main() {
    // Initialize tracing; user-facing output goes to stdout directly
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> pethaven_storefront::error::Result<()> {
    let mut state = AppState::load()?;

    match cli.command {
        Commands::Stores => commands::stores::list(&state).await?,
        Commands::Login {
            username,
            password,
            store,
        } => commands::auth::login(&mut state, &username, &password, store.as_deref()).await?,
        Commands::Logout => commands::auth::logout(&mut state)?,
        Commands::Whoami => commands::auth::whoami(&state)?,
        Commands::Pets { all } => commands::pets::list(&state, all).await?,
        Commands::Cart { action } => match action {
            CartAction::Add { pet_id } => commands::cart::add(&state, &pet_id).await?,
            CartAction::Remove { pet_id } => commands::cart::remove(&state, &pet_id)?,
            CartAction::Show => commands::cart::show(&state)?,
            CartAction::Clear => commands::cart::clear(&state)?,
        },
        Commands::Buy { pet_id } => commands::checkout::buy(&state, &pet_id).await?,
        Commands::Checkout => commands::checkout::checkout_cart(&state).await?,
    }
    Ok(())
}
