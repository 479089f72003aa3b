use clap::{Args, Parser, Subcommand};
use registry_console_core::{Credentials, UserId};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "registry-console")]
#[command(version, about = "Administration console for a package registry")]
pub struct Cli {
    /// Registry server the API paths are resolved against
    #[arg(
        short = 's',
        long,
        global = true,
        env = "REGISTRY_URL",
        default_value = "http://localhost:8080"
    )]
    pub server: String,

    /// Login used when the registry asks for credentials
    #[arg(short = 'l', long, global = true, env = "REGISTRY_LOGIN")]
    pub login: Option<String>,

    /// Password used together with --login
    #[arg(long, global = true, env = "REGISTRY_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Answer yes to every confirmation
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Preset credentials, only when both halves are given
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.login, &self.password) {
            (Some(login), Some(password)) => Some(Credentials::new(login, password)),
            _ => None,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check the session and log in if needed
    Login,

    /// Browse and administer packages
    #[command(subcommand)]
    Packages(PackageCommand),

    /// Administer user accounts
    #[command(subcommand)]
    Users(UserCommand),

    /// Issue a raw API call through the gateway
    Call(CallArgs),

    /// Write JSON schemas of the API payloads
    Schema {
        /// Target directory
        #[arg(long, default_value = "schemas")]
        out: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub enum PackageCommand {
    /// List all packages
    List,

    /// Show a package with its versions
    Show { name: String },

    /// Show the detail of one version
    Version { name: String, version: String },

    /// Hide a version from the index
    Hide { name: String, version: String },

    /// Remove a package, or one of its versions
    Remove {
        name: String,
        version: Option<String>,
    },

    /// Reassign a package to another user (id or login)
    Chown { name: String, owner: String },
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List all users
    List,

    /// Show a user with the packages they own
    Show { id: UserId },

    /// Create a user
    Create {
        #[arg(long)]
        login: String,

        #[arg(long)]
        email: String,

        /// Prompted twice when missing
        #[arg(long)]
        password: Option<String>,

        #[arg(long)]
        admin: bool,
    },

    /// Change fields of a user
    Modify {
        id: UserId,

        #[arg(long)]
        login: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        password: Option<String>,

        #[arg(long)]
        admin: Option<bool>,
    },

    /// Disable a user
    Remove { id: UserId },
}

#[derive(Debug, Args)]
pub struct CallArgs {
    /// GET, POST, PUT or DELETE
    pub method: String,

    /// API path, e.g. /api/v1/packages
    pub endpoint: String,

    /// JSON request body
    #[arg(long)]
    pub body: Option<String>,

    /// Do not mark the endpoint busy
    #[arg(long)]
    pub background: bool,

    /// Do not report failures through the dialogs
    #[arg(long)]
    pub quiet: bool,
}
