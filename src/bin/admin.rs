//! CLI administration tool for blogr.
//!
//! Provides commands for managing accounts and inspecting the database
//! without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create an account
//! cargo run --bin admin -- user create
//!
//! # List accounts
//! cargo run --bin admin -- user list
//!
//! # Content statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `BCRYPT_COST` (optional): password hashing work factor (default: 12)

use blogr::domain::entities::NewUser;
use blogr::domain::repositories::UserRepository;
use blogr::infrastructure::persistence::PgUserRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing blogr.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show content statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Account management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create an account
    Create {
        /// Username (prompted when omitted)
        #[arg(short, long)]
        username: Option<String>,

        /// Email address (prompted when omitted)
        #[arg(short, long)]
        email: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List accounts
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches account management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));

    match action {
        UserAction::Create {
            username,
            email,
            yes,
        } => {
            create_user(repo, username, email, yes).await?;
        }
        UserAction::List => {
            list_users(pool).await?;
        }
    }

    Ok(())
}

/// Creates an account with interactive prompts.
///
/// The password is read twice from the terminal, never from arguments,
/// and only its bcrypt hash is stored.
async fn create_user(
    repo: Arc<PgUserRepository>,
    username: Option<String>,
    email: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Create account".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    let password: String = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    if repo.email_or_username_taken(&email, &username).await? {
        println!(
            "{}",
            "A user with that email or username already exists".red()
        );
        return Ok(());
    }

    println!();
    println!("{}", "Account details:".bright_white().bold());
    println!("  Username: {}", username.cyan());
    println!("  Email:    {}", email.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this account?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let cost = std::env::var("BCRYPT_COST")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(bcrypt::DEFAULT_COST);

    let password_hash = bcrypt::hash(&password, cost)?;

    let user = repo
        .create(NewUser {
            username,
            email,
            password_hash,
            profile_image: None,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create account: {}", e))?;

    println!();
    println!(
        "{} {}",
        "Account created with id".green().bold(),
        user.id.to_string().bright_white().bold()
    );

    Ok(())
}

/// Row shape for the account listing.
#[derive(sqlx::FromRow)]
struct UserListRow {
    id: i64,
    username: String,
    email: String,
    created_at: chrono::DateTime<chrono::Utc>,
    posts: i64,
}

/// Lists accounts with their post counts.
async fn list_users(pool: &PgPool) -> Result<()> {
    println!("{}", "Accounts".bright_blue().bold());
    println!();

    let users = sqlx::query_as::<_, UserListRow>(
        r#"
        SELECT u.id, u.username, u.email, u.created_at,
               COUNT(p.id) AS posts
        FROM users u
        LEFT JOIN posts p ON p.author_id = u.id
        GROUP BY u.id
        ORDER BY u.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    if users.is_empty() {
        println!("{}", "  No accounts found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<20} {:<30} {:<17} {:<6}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Email".bright_white().bold(),
        "Created".bright_white().bold(),
        "Posts".bright_white().bold()
    );
    println!("  {}", "─".repeat(80).bright_black());

    for user in &users {
        println!(
            "  {:<4} {:<20} {:<30} {:<17} {:<6}",
            user.id.to_string().bright_black(),
            user.username.cyan(),
            user.email,
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            user.posts
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());

    Ok(())
}

/// Shows content statistics: accounts, posts, comments, likes, views.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    let posts: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await?;
    let comments: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
        .fetch_one(pool)
        .await?;
    let likes: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(likes), 0) FROM posts")
        .fetch_one(pool)
        .await?;
    let views: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(views), 0) FROM posts")
        .fetch_one(pool)
        .await?;

    println!("  Accounts: {}", users.to_string().bright_white().bold());
    println!("  Posts:    {}", posts.to_string().bright_white().bold());
    println!("  Comments: {}", comments.to_string().bright_white().bold());
    println!("  Likes:    {}", likes.to_string().bright_white().bold());
    println!("  Views:    {}", views.to_string().bright_white().bold());

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database connection OK".green().bold());
            println!("  {}", version.bright_black());
        }
    }

    Ok(())
}
