// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! cloudctl - command-line client for the cloud management API

use anyhow::Result;
use clap::{Parser, Subcommand};
use cloud_client::TypedClient;
use tracing_subscriber::EnvFilter;

mod bulk;
mod commands;
mod config;
mod confirm;
mod error;
mod filter;
mod output;
mod waiter;

use commands::{
    BackupUnitCommand, CdromCommand, Context, ImageCommand, IpBlockCommand, IpConsumerCommand,
    PccCommand, RequestCommand, TemplateCommand,
};
use config::{Config, Overrides};
use output::{Output, OutputFormat};

/// Log filter used by `--verbose` when RUST_LOG is not set
const VERBOSE_FILTER: &str = "cloudctl=debug,cloud_client=debug";

#[derive(Parser)]
#[command(
    name = "cloudctl",
    version,
    about = "Cloud management CLI",
    long_about = "Command-line client for the cloud management REST API"
)]
struct Cli {
    /// API base URL
    #[arg(short = 'u', long, global = true, env = "CLOUDCTL_API_URL")]
    api_url: Option<String>,

    /// Username for basic authentication
    #[arg(long, global = true, env = "CLOUDCTL_USERNAME")]
    username: Option<String>,

    /// Password for basic authentication
    #[arg(long, global = true, env = "CLOUDCTL_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Bearer token; takes precedence over username and password
    #[arg(long, global = true, env = "CLOUDCTL_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Contract number, for users with access to several contracts
    #[arg(long, global = true, env = "CLOUDCTL_CONTRACT")]
    contract: Option<String>,

    /// Output format
    #[arg(short = 'o', long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Table columns to print (comma-separated)
    #[arg(long, global = true, value_delimiter = ',')]
    cols: Vec<String>,

    /// Omit the table header
    #[arg(long, global = true)]
    no_headers: bool,

    /// Skip confirmation prompts
    #[arg(short = 'f', long, global = true)]
    force: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print nothing but errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage backup units
    #[command(alias = "bu")]
    Backupunit {
        #[command(subcommand)]
        command: BackupUnitCommand,
    },

    /// Manage CD-ROMs attached to servers
    Cdrom {
        #[command(subcommand)]
        command: CdromCommand,
    },

    /// Manage images
    #[command(alias = "img")]
    Image {
        #[command(subcommand)]
        command: ImageCommand,
    },

    /// Manage IP blocks
    #[command(alias = "ipb")]
    Ipblock {
        #[command(subcommand)]
        command: IpBlockCommand,
    },

    /// Inspect resources using IP block addresses
    Ipconsumer {
        #[command(subcommand)]
        command: IpConsumerCommand,
    },

    /// Manage private cross-connects
    Pcc {
        #[command(subcommand)]
        command: PccCommand,
    },

    /// Inspect and wait for API requests
    #[command(alias = "req")]
    Request {
        #[command(subcommand)]
        command: RequestCommand,
    },

    /// Inspect server templates
    #[command(alias = "tpl")]
    Template {
        #[command(subcommand)]
        command: TemplateCommand,
    },

    /// Store credentials in the config file
    Login(commands::login::LoginArgs),

    /// Remove stored credentials
    Logout,

    /// Generate a shell completion script
    Completion(commands::completion::CompletionArgs),
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            api_url: self.api_url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            token: self.token.clone(),
            contract: self.contract.clone(),
        }
    }

    fn output(&self) -> Output {
        Output {
            format: self.output,
            cols: self.cols.clone(),
            no_headers: self.no_headers,
            quiet: self.quiet,
        }
    }
}

/// Build an authenticated client from flags, environment and config file
fn build_context(overrides: &Overrides, out: Output, force: bool) -> Result<Context> {
    let connection = config::resolve(overrides, &Config::load()?)?;
    tracing::debug!(api_url = %connection.api_url, "using API endpoint");
    let client = TypedClient::new(&connection.api_url, connection.auth)?;
    Ok(Context { client, out, force })
}

fn init_logging(verbose: bool) {
    let from_env = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    if !verbose && !from_env {
        return;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(VERBOSE_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // ring is the only rustls provider compiled in
    let _ = rustls::crypto::ring::default_provider().install_default();

    let overrides = cli.overrides();
    let out = cli.output();
    let force = cli.force;

    match cli.command {
        Commands::Login(args) => commands::login::login(args, &overrides, &out).await,
        Commands::Logout => commands::login::logout(&out),
        Commands::Completion(args) => {
            commands::completion::run(args);
            Ok(())
        }
        Commands::Backupunit { command } => {
            command.run(&build_context(&overrides, out, force)?).await
        }
        Commands::Cdrom { command } => command.run(&build_context(&overrides, out, force)?).await,
        Commands::Image { command } => command.run(&build_context(&overrides, out, force)?).await,
        Commands::Ipblock { command } => {
            command.run(&build_context(&overrides, out, force)?).await
        }
        Commands::Ipconsumer { command } => {
            command.run(&build_context(&overrides, out, force)?).await
        }
        Commands::Pcc { command } => command.run(&build_context(&overrides, out, force)?).await,
        Commands::Request { command } => {
            command.run(&build_context(&overrides, out, force)?).await
        }
        Commands::Template { command } => {
            command.run(&build_context(&overrides, out, force)?).await
        }
    }
}
