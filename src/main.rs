use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tabled::{settings::Style, Table, Tabled};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use invoice_mailer::config::{default_config_file, init_config, load_config};
use invoice_mailer::invoice::{email_subject, invoice_filename, InvoiceData, LabeledLine};
use invoice_mailer::pdf::{Renderer, TypstRenderer};
use invoice_mailer::{
    handle_event, run_current_month, BillingPeriod, Config, InvoiceError, Profile, Result,
};

#[derive(Parser)]
#[command(name = "invoice-mailer")]
#[command(version, about = "Generate this month's invoice and email it", long_about = None)]
struct Cli {
    /// Read configuration from this TOML file instead of the environment
    #[arg(short = 'C', long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a config.toml template
    Init,

    /// Render the invoice and email it
    Send {
        /// Environment key names to read configuration from
        #[arg(short, long, value_enum, default_value_t = Profile::Local)]
        profile: Profile,
    },

    /// Event-triggered run: render, email, archive to S3 and print a JSON status
    Event,

    /// Show what this month's invoice will contain without sending anything
    Preview {
        /// Environment key names to read configuration from
        #[arg(short, long, value_enum, default_value_t = Profile::Local)]
        profile: Profile,
    },

    /// Render the invoice PDF locally without sending it
    Render {
        /// Environment key names to read configuration from
        #[arg(short, long, value_enum, default_value_t = Profile::Local)]
        profile: Profile,

        /// Output file (default: generated filename in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let dotenv = dotenvy::dotenv();
    init_tracing();
    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!(error = %e, "failed to load .env file");
        }
    }

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_file = cli.config.as_deref();

    match cli.command {
        Commands::Init => cmd_init(config_file),
        Commands::Send { profile } => cmd_send(&load(config_file, profile)?),
        Commands::Event => cmd_event(config_file),
        Commands::Preview { profile } => cmd_preview(&load(config_file, profile)?),
        Commands::Render { profile, output } => cmd_render(&load(config_file, profile)?, output),
    }
}

/// Config from the given TOML file, or from the environment using `profile`'s keys.
fn load(config_file: Option<&Path>, profile: Profile) -> Result<Config> {
    match config_file {
        Some(path) => load_config(path),
        None => Config::from_env(profile),
    }
}

/// Write the config template
fn cmd_init(config_file: Option<&Path>) -> Result<()> {
    let path = match config_file {
        Some(p) => p.to_path_buf(),
        None => default_config_file()?,
    };

    init_config(&path)?;

    println!("Initialized invoice-mailer config at: {}", path.display());
    println!();
    println!("Next steps:");
    println!("  1. Fill in your details:  $EDITOR {}", path.display());
    println!("  2. Check the invoice:     invoice-mailer -C {} preview", path.display());
    println!("  3. Send it:               invoice-mailer -C {} send", path.display());

    Ok(())
}

/// Direct run: render, email and archive when the config names a bucket
fn cmd_send(config: &Config) -> Result<()> {
    let status = run_current_month(config)?;

    println!("Invoice email sent successfully");
    if let Some(uri) = status.archived {
        println!("Saved a copy to {uri}");
    }
    Ok(())
}

/// Event run: print the status record as JSON
fn cmd_event(config_file: Option<&Path>) -> Result<()> {
    let status = match config_file {
        Some(path) => run_current_month(&load_config(path)?)?,
        None => handle_event()?,
    };
    let json = serde_json::to_string(&status).map_err(|e| InvoiceError::Io(e.into()))?;
    println!("{json}");
    Ok(())
}

// Table row structs for tabled
#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "FIELD")]
    field: String,
    #[tabled(rename = "VALUE")]
    value: String,
}

#[derive(Tabled)]
struct ChargeRowView {
    #[tabled(rename = "Service")]
    service: String,
    #[tabled(rename = "Document Date")]
    document_date: String,
    #[tabled(rename = "Due Date")]
    due_date: String,
    #[tabled(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Total Amount")]
    total_amount: String,
}

fn field_table(lines: &[LabeledLine]) -> String {
    let rows: Vec<FieldRow> = lines
        .iter()
        .map(|line| FieldRow {
            field: line.label.clone(),
            value: line.value.clone(),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Print the invoice contents
fn cmd_preview(config: &Config) -> Result<()> {
    let period = BillingPeriod::current();
    let data = InvoiceData::new(config, &period);

    println!("{} {}", data.title, data.heading);
    println!("{}", "-".repeat(50));
    println!("File:     {}", invoice_filename(&config.issuer.full_name, &period)?);
    println!("Subject:  {}", email_subject(&config.issuer.full_name, &period)?);
    println!("To:       {}", config.email.recipient);
    println!("Cc:       {}", config.email.cc);
    match &config.archive {
        Some(dest) => println!("Archive:  s3://{}/", dest.bucket),
        None => println!("Archive:  disabled"),
    }

    println!();
    println!("From:");
    println!("{}", field_table(&data.issuer));

    println!();
    println!("To: {}", data.recipient_name);
    println!("{}", field_table(&data.recipient));

    println!();
    println!("Invoice period: {}", data.period);
    let charge = ChargeRowView {
        service: data.charge.service.clone(),
        document_date: data.charge.document_date.clone(),
        due_date: data.charge.due_date.clone(),
        currency: data.charge.currency.clone(),
        total_amount: data.charge.total_amount.clone(),
    };
    let table = Table::new([charge]).with(Style::rounded()).to_string();
    println!("{table}");

    println!();
    println!("{}", data.bank_heading);
    println!("{}", field_table(&data.bank));

    Ok(())
}

/// Render the PDF without sending it
fn cmd_render(config: &Config, output: Option<PathBuf>) -> Result<()> {
    let period = BillingPeriod::current();
    let output_path = match output {
        Some(path) => path,
        None => PathBuf::from(invoice_filename(&config.issuer.full_name, &period)?),
    };

    TypstRenderer::new().render(&InvoiceData::new(config, &period), &output_path)?;

    println!("Rendered {}", period.label());
    println!("  Saved: {}", output_path.display());
    Ok(())
}
