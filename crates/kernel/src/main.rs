//! CRM Admin command line
//!
//! Prints the sidebar menu derived from the route tree and checks form
//! payloads with the same validators the admin handlers use.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crm_admin_kernel::forms::{
    AuthorNameRequest, BannerRequest, RenewAccessTokenRequest, ResetPasswordRequest,
    SignInRequest, UpdateProfileRequest,
};
use crm_admin_kernel::menu::{self, RouteNode};
use crm_admin_kernel::{Config, Validator, Verify};

#[derive(Parser)]
#[command(name = "crm-admin")]
#[command(about = "CRM admin menu and form tooling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sidebar menu derived from the route tree as JSON.
    Menu {
        /// Route document (.json, .yaml, .yml). Falls back to CRM_ROUTES_FILE,
        /// then to the built-in admin routes.
        #[arg(long)]
        routes: Option<PathBuf>,

        /// Mount point of the route tree.
        #[arg(long)]
        root: Option<String>,

        /// Log the menu entries leading to this location.
        #[arg(long)]
        active: Option<String>,

        /// Pretty-print the menu JSON.
        #[arg(long)]
        pretty: bool,
    },

    /// Validate a JSON form payload read from a file or stdin.
    Verify {
        #[arg(value_enum)]
        form: FormKind,

        #[arg(short = 'i', long)]
        input: Option<PathBuf>,

        /// Pretty-print the verification report.
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormKind {
    SignIn,
    ResetPassword,
    UpdateProfile,
    RenewToken,
    Author,
    Banner,
}

#[derive(Serialize)]
struct VerifyReport<'a> {
    valid: bool,
    errors: &'a Validator,
}

fn main() -> Result<ExitCode> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing();

    let config = Config::from_env().context("failed to load configuration")?;
    debug!(?config, "Configuration loaded");

    match cli.cmd {
        Commands::Menu {
            routes,
            root,
            active,
            pretty,
        } => {
            let routes_file = routes.or_else(|| config.routes_file.clone());
            let route_tree = load_route_tree(routes_file.as_deref())?;
            let root = root.unwrap_or_else(|| config.menu_root.clone());

            let menu = menu::derive_menu(&route_tree, &root);
            info!(%root, entries = menu.len(), "Menu derived");

            if let Some(current) = active.as_deref() {
                let trail: Vec<&str> = menu::active_trail(&menu, current)
                    .iter()
                    .map(|node| node.path.as_str())
                    .collect();
                if trail.is_empty() {
                    warn!(%current, "no menu entry matches the active location");
                } else {
                    info!(%current, trail = ?trail, "Active trail");
                }
            }

            print_json(&menu, pretty || config.pretty_json)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Verify {
            form,
            input,
            pretty,
        } => {
            let text = read_input(input.as_deref())?;
            let validator = match form {
                FormKind::SignIn => verify_payload::<SignInRequest>(&text)?,
                FormKind::ResetPassword => verify_payload::<ResetPasswordRequest>(&text)?,
                FormKind::UpdateProfile => verify_payload::<UpdateProfileRequest>(&text)?,
                FormKind::RenewToken => verify_payload::<RenewAccessTokenRequest>(&text)?,
                FormKind::Author => verify_payload::<AuthorNameRequest>(&text)?,
                FormKind::Banner => verify_payload::<BannerRequest>(&text)?,
            };

            let report = VerifyReport {
                valid: validator.is_valid(),
                errors: &validator,
            };
            print_json(&report, pretty || config.pretty_json)?;

            if validator.is_valid() {
                Ok(ExitCode::SUCCESS)
            } else {
                info!(?form, first_error = validator.error_by(None), "Payload rejected");
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn load_route_tree(path: Option<&Path>) -> Result<Vec<RouteNode>> {
    match path {
        Some(path) => menu::load_routes(path)
            .with_context(|| format!("failed to load routes from {}", path.display())),
        None => {
            debug!("No routes file configured, using built-in admin routes");
            Ok(menu::builtin_routes())
        }
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read payload {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read payload from stdin")?;
            Ok(text)
        }
    }
}

fn verify_payload<T>(text: &str) -> Result<Validator>
where
    T: DeserializeOwned + Verify,
{
    let payload: T = serde_json::from_str(text).context("payload is not valid JSON")?;
    Ok(Validator::do_verify(&payload))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
