#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use intake_core::logging::LoggingBuilder;
use intake_core::{AgePolicy, HttpTransport, TransportConfig, DEFAULT_BASE_URL};

/// Settings resolved from the command line before the window opens
pub struct AppSettings {
    pub transport: Arc<HttpTransport>,
    pub age_policy: AgePolicy,
}

static SETTINGS: OnceLock<AppSettings> = OnceLock::new();

/// Settings set from command line; `None` only before launch
pub fn settings() -> Option<&'static AppSettings> {
    SETTINGS.get()
}

/// Patient intake form - desktop
#[derive(Parser, Debug)]
#[command(name = "intake-desktop")]
#[command(about = "Patient intake form - collects and submits patient records")]
struct Args {
    /// Base URL of the intake API
    #[arg(long, env = "INTAKE_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Request timeout in seconds (default: none)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Send ages the way a browser parseInt would instead of rejecting non-numeric text
    #[arg(long)]
    lenient_age: bool,

    /// Station name used for the audit log file
    #[arg(short, long)]
    station: Option<String>,

    /// Directory for JSONL audit logs (enables audit logging)
    #[arg(short, long)]
    logs_dir: Option<PathBuf>,
}

fn default_logs_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("intake")
        .join("logs")
}

fn main() {
    let args = Args::parse();

    if args.logs_dir.is_some() || args.station.is_some() {
        let logs_dir = args.logs_dir.clone().unwrap_or_else(default_logs_dir);
        let station = args.station.clone().unwrap_or_else(|| "default".to_string());
        match LoggingBuilder::new(logs_dir, station).init() {
            Ok(path) => tracing::info!("Audit log: {}", path.display()),
            Err(e) => {
                tracing_subscriber::fmt::init();
                tracing::error!("Failed to open audit log: {}", e);
            }
        }
    } else {
        tracing_subscriber::fmt::init();
    }

    let mut transport_config = TransportConfig::new(&args.api_url);
    if let Some(secs) = args.timeout_secs {
        transport_config = transport_config.with_timeout(Duration::from_secs(secs));
    }

    let transport = match HttpTransport::new(&transport_config) {
        Ok(transport) => transport,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    tracing::info!("Submitting to {}", transport.endpoint());

    let age_policy = if args.lenient_age {
        AgePolicy::Lenient
    } else {
        AgePolicy::Strict
    };

    let _ = SETTINGS.set(AppSettings {
        transport: Arc::new(transport),
        age_policy,
    });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Registro de Pacientes")
            .with_inner_size(dioxus::desktop::LogicalSize::new(640.0, 820.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
