//! Patient Intake CLI
//!
//! Fills the intake form from flags and submits it once, printing the same
//! status message the desktop form would show.
//!
//! ## Usage
//!
//! ```bash
//! # Submit a record
//! intake submit --nombres Ana --apellidos Lopez --sexo femenino --edad 34 --diagnostico gripe
//!
//! # Print the JSON body without sending it
//! intake preview --nombres Ana --apellidos Lopez --sexo femenino --edad 34 --diagnostico gripe
//!
//! # Point at another backend
//! intake --api-url http://clinic.local:3000 submit ...
//! ```

use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use intake_core::{
    AgePolicy, FieldUpdate, HttpTransport, IntakeForm, IntakeTransport, Sex, TransportConfig,
    DEFAULT_BASE_URL,
};

/// Patient intake form - command line
#[derive(Parser)]
#[command(name = "intake")]
#[command(version = "0.1.0")]
#[command(about = "Patient intake form - submit patient records from the command line")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Base URL of the intake API
    #[arg(long, env = "INTAKE_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    api_url: String,

    /// Request timeout in seconds (default: none)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Coerce age like a browser parseInt instead of rejecting non-numeric text
    #[arg(long, global = true)]
    lenient_age: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and submit one record
    Submit(RecordArgs),

    /// Validate and print the JSON body without sending it
    Preview(RecordArgs),
}

/// Form fields; any flag left out stays empty
#[derive(Args)]
struct RecordArgs {
    /// First names
    #[arg(long, default_value = "")]
    nombres: String,

    /// Last names
    #[arg(long, default_value = "")]
    apellidos: String,

    /// femenino or masculino
    #[arg(long, value_parser = parse_sex)]
    sexo: Option<Sex>,

    /// Age in years
    #[arg(long, default_value = "")]
    edad: String,

    /// Diagnosis
    #[arg(long, default_value = "")]
    diagnostico: String,
}

impl RecordArgs {
    /// Build a form holding these values, as if typed one by one
    fn into_form(self, age_policy: AgePolicy) -> IntakeForm {
        let mut form = IntakeForm::with_age_policy(age_policy);
        form.update_field(FieldUpdate::Nombres(self.nombres));
        form.update_field(FieldUpdate::Apellidos(self.apellidos));
        if let Some(sexo) = self.sexo {
            form.update_field(FieldUpdate::Sexo(sexo));
        }
        form.update_field(FieldUpdate::Edad(self.edad));
        form.update_field(FieldUpdate::Diagnostico(self.diagnostico));
        form
    }
}

fn parse_sex(s: &str) -> std::result::Result<Sex, String> {
    s.parse()
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let age_policy = if cli.lenient_age {
        AgePolicy::Lenient
    } else {
        AgePolicy::Strict
    };

    match cli.command {
        Commands::Preview(record_args) => {
            let mut form = record_args.into_form(age_policy);
            match form.begin_submit() {
                Ok(record) => {
                    println!("{}", serde_json::to_string_pretty(&record)?);
                }
                Err(e) => {
                    tracing::debug!("Preview blocked: {}", e);
                    anyhow::bail!("{}", form.message());
                }
            }
        }

        Commands::Submit(record_args) => {
            let mut form = record_args.into_form(age_policy);
            let record = match form.begin_submit() {
                Ok(record) => record,
                Err(e) => {
                    tracing::debug!("Submit blocked: {}", e);
                    anyhow::bail!("{}", form.message());
                }
            };

            let mut config = TransportConfig::new(&cli.api_url);
            if let Some(secs) = cli.timeout_secs {
                config = config.with_timeout(Duration::from_secs(secs));
            }
            let transport = match HttpTransport::new(&config) {
                Ok(transport) => transport,
                Err(e) => {
                    form.finish(Err(e.clone()));
                    return Err(e.into());
                }
            };
            tracing::info!("Submitting to {}", transport.endpoint());

            let outcome = transport.send(&record).await;
            form.finish(outcome.clone());

            if form.message().is_error() || outcome.is_err() {
                tracing::debug!("Submission failed: {:?}", outcome);
                anyhow::bail!("{}", form.message());
            }
            println!("{}", form.message());
        }
    }

    Ok(())
}
