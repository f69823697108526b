//! designkit CLI
//!
//! Thin wrapper around designkit-core for inspecting the preference store
//! and checking permission gates from a terminal.
//!
//! ## Usage
//!
//! ```bash
//! # List demo accounts
//! designkit users
//!
//! # Check credentials
//! designkit login editor@partner.io editor123
//!
//! # Favorite projects
//! designkit favorites projects list
//! designkit favorites projects toggle design-tokens
//!
//! # Favorite content
//! designkit favorites content add tokens-101 "Design tokens 101" --category guide
//! designkit favorites content list
//!
//! # Recently visited content
//! designkit recent add tokens-101 "Design tokens 101"
//! designkit recent list --limit 5
//! designkit recent clear
//!
//! # Show which preference keys are stored
//! designkit keys
//!
//! # Evaluate a gate for a demo account
//! designkit gate --email client@acme.com --any view_content --level admin
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use designkit_core::config::default_data_dir;
use designkit_core::{
    AccessRule, AuthSession, ContentCardData, ContentFavorite, DesignKit, KitConfig,
    MockAuthenticator, Permission, PermissionGroup, PermissionLevel, ProjectId,
};

/// designkit - preference store and permission gate tooling
#[derive(Parser)]
#[command(name = "designkit")]
#[command(version = "0.1.0")]
#[command(about = "designkit - preference store and permission gate tooling")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Data directory (default: platform data dir /designkit)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the demo accounts
    Users,

    /// Check credentials against the demo accounts
    Login {
        email: String,
        password: String,
        /// Simulated network delay in milliseconds
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,
    },

    /// Favorite projects and content
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },

    /// Recently visited content
    Recent {
        #[command(subcommand)]
        action: RecentAction,
    },

    /// Evaluate a permission gate for a demo account
    Gate(GateArgs),

    /// List the keys held in the preference store
    Keys,
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// Favorite project ids
    Projects {
        #[command(subcommand)]
        action: ProjectsAction,
    },
    /// Favorite content items
    Content {
        #[command(subcommand)]
        action: ContentAction,
    },
}

#[derive(Subcommand)]
enum ProjectsAction {
    List,
    /// Add the project if missing, remove it otherwise
    Toggle { id: String },
    /// Store an empty favorites list
    Clear,
}

#[derive(Subcommand)]
enum ContentAction {
    List,
    Add {
        id: String,
        title: String,
        #[arg(long)]
        category: Option<String>,
    },
    Remove { id: String },
}

#[derive(Subcommand)]
enum RecentAction {
    List {
        /// Show at most this many entries
        #[arg(short, long)]
        limit: Option<usize>,
    },
    Add {
        id: String,
        title: String,
        #[arg(long)]
        category: Option<String>,
    },
    Clear,
}

#[derive(clap::Args)]
struct GateArgs {
    /// Demo account to evaluate as (omit for an anonymous session)
    #[arg(long)]
    email: Option<String>,
    /// Required permission (all must be held; repeatable)
    #[arg(long = "permission")]
    permissions: Vec<Permission>,
    /// Alternative permission (any suffices; repeatable)
    #[arg(long = "any")]
    any_permission: Vec<Permission>,
    #[arg(long = "group")]
    groups: Vec<PermissionGroup>,
    #[arg(long = "level")]
    levels: Vec<PermissionLevel>,
    #[arg(long = "project")]
    project: Option<String>,
    /// Let anonymous sessions through the authentication check
    #[arg(long)]
    no_auth_required: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    designkit_core::logging::init(cli.verbose);

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let config = KitConfig::default().with_data_dir(&data_dir);

    match cli.command {
        Commands::Users => cmd_users(),
        Commands::Login {
            email,
            password,
            delay_ms,
        } => cmd_login(&email, &password, delay_ms),
        Commands::Favorites { action } => {
            let kit = DesignKit::open(config)?;
            match action {
                FavoritesAction::Projects { action } => cmd_projects(&kit, action),
                FavoritesAction::Content { action } => cmd_content(&kit, action),
            }
        }
        Commands::Recent { action } => {
            let kit = DesignKit::open(config)?;
            cmd_recent(&kit, action)
        }
        Commands::Gate(args) => cmd_gate(args),
        Commands::Keys => {
            let kit = DesignKit::open(config)?;
            cmd_keys(&kit)
        }
    }
}

fn cmd_users() -> Result<()> {
    let auth = MockAuthenticator::default();
    println!("Demo accounts:");
    for account in auth.accounts() {
        println!(
            "  {:<24} {:<12} {:<10} {}",
            account.email,
            account.level.as_str(),
            account.group.as_str(),
            account.display_name
        );
    }
    Ok(())
}

fn cmd_login(email: &str, password: &str, delay_ms: u64) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let auth = MockAuthenticator::new(Duration::from_millis(delay_ms));
    let user = runtime.block_on(auth.login(email, password))?;

    println!("Signed in as {}", user.display_name);
    println!("  Email: {}", user.email);
    println!("  Level: {}", user.permission_level);
    println!("  Group: {}", user.permission_group);
    if let Some(projects) = &user.assigned_projects {
        let names: Vec<&str> = projects.iter().map(ProjectId::as_str).collect();
        println!("  Projects: {}", names.join(", "));
    }
    let permissions: Vec<&str> = user
        .effective_permissions()
        .into_iter()
        .map(|p| p.as_str())
        .collect();
    println!("  Permissions: {}", permissions.join(", "));
    Ok(())
}

fn cmd_projects(kit: &DesignKit, action: ProjectsAction) -> Result<()> {
    let favorites = kit.project_favorites();
    match action {
        ProjectsAction::List => {
            let ids = favorites.load();
            if ids.is_empty() {
                println!("No favorite projects.");
            }
            for id in ids {
                println!("  {}", id);
            }
        }
        ProjectsAction::Toggle { id } => {
            let id = ProjectId::new(id);
            if favorites.toggle(id.clone())? {
                println!("Added {} to favorites", id);
            } else {
                println!("Removed {} from favorites", id);
            }
        }
        ProjectsAction::Clear => {
            favorites.clear()?;
            println!("Cleared favorite projects");
        }
    }
    Ok(())
}

fn cmd_content(kit: &DesignKit, action: ContentAction) -> Result<()> {
    let favorites = kit.content_favorites();
    match action {
        ContentAction::List => {
            let items = favorites.load();
            if items.is_empty() {
                println!("No favorite content.");
            }
            for item in items {
                println!(
                    "  {}  {}  ({})",
                    item.id,
                    item.title,
                    item.favorited_at.format("%Y-%m-%d %H:%M")
                );
            }
        }
        ContentAction::Add {
            id,
            title,
            category,
        } => {
            let mut card = ContentCardData::new(id, title);
            card.category = category;
            let favorite = ContentFavorite::from_card(&card, chrono::Utc::now());
            if favorites.add(favorite)? {
                println!("Added {} to favorites", card.id);
            } else {
                println!("{} is already a favorite", card.id);
            }
        }
        ContentAction::Remove { id } => {
            if favorites.remove(&id)? {
                println!("Removed {} from favorites", id);
            } else {
                println!("{} was not a favorite", id);
            }
        }
    }
    Ok(())
}

fn cmd_recent(kit: &DesignKit, action: RecentAction) -> Result<()> {
    let recent = kit.recently_visited();
    match action {
        RecentAction::List { limit } => {
            let items = recent.contents(limit).to_vec();
            if items.is_empty() {
                println!("Nothing visited yet.");
            }
            for (i, item) in items.iter().enumerate() {
                println!(
                    "  {:>2}. {}  {}  ({})",
                    i + 1,
                    item.content.id,
                    item.content.title,
                    item.visited_at.to_rfc3339()
                );
            }
        }
        RecentAction::Add {
            id,
            title,
            category,
        } => {
            let mut card = ContentCardData::new(id, title);
            card.category = category;
            let id = card.id.clone();
            recent.add(card);
            println!("Visited {}", id);
        }
        RecentAction::Clear => {
            recent.clear()?;
            println!("Cleared recently visited contents");
        }
    }
    Ok(())
}

fn cmd_keys(kit: &DesignKit) -> Result<()> {
    let keys = kit.store().keys()?;
    if keys.is_empty() {
        println!("Preference store is empty.");
    }
    for key in keys {
        println!("  {}", key);
    }
    Ok(())
}

fn cmd_gate(args: GateArgs) -> Result<()> {
    let session = match &args.email {
        Some(email) => AuthSession::signed_in(MockAuthenticator::default().find_user(email)?),
        None => AuthSession::anonymous(),
    };

    let rule = AccessRule {
        require_auth: !args.no_auth_required,
        permissions: args.permissions,
        any_permission: args.any_permission,
        groups: args.groups,
        levels: args.levels,
        project_id: args.project.map(ProjectId::new),
    };

    let decision = rule.evaluate(&session);
    if let Some(category) = rule.deciding_category() {
        tracing::info!(deciding = category.as_str(), "gate evaluated");
    }
    println!("{}", if decision.is_render() { "render" } else { "fallback" });
    Ok(())
}
