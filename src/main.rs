use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use loctag::header::{negotiate, parse_accept_language};
use loctag::parser::{parse_locale_id, validate};

#[derive(Parser)]
#[command(
    name = "loctag",
    version,
    about = "Parse, validate, and negotiate BCP-47 language tags",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true, default_value = "text")]
    log_format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a tag into its components
    Parse {
        /// The language tag to parse
        tag: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check whether a tag is well-formed
    Validate {
        /// The language tag to check
        tag: String,
    },

    /// Pick the best supported tag for an Accept-Language header
    Negotiate {
        /// The Accept-Language header value
        accept: String,

        /// Supported tags, in preference order
        #[arg(short, long, required = true, num_args = 1..)]
        supported: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(&cli.log_format, cli.verbose)?;

    match cli.command {
        Commands::Parse { tag, format } => {
            tracing::debug!(tag = %tag, "parsing tag");
            match parse_locale_id(&tag) {
                Ok(locale) => {
                    if format == "json" {
                        println!("{}", serde_json::to_string_pretty(&locale)?);
                    } else {
                        print_breakdown(&locale);
                    }
                }
                Err(errors) => {
                    for error in errors.errors() {
                        eprintln!("error[{}]: {}", error.code(), error);
                    }
                    std::process::exit(1);
                }
            }
        }

        Commands::Validate { tag } => {
            if validate(&tag) {
                println!("{tag}: valid");
            } else {
                println!("{tag}: invalid");
                std::process::exit(1);
            }
        }

        Commands::Negotiate { accept, supported } => {
            let preferences = parse_accept_language(&accept);
            let supported: Vec<&str> = supported.iter().map(String::as_str).collect();
            match negotiate(&preferences, &supported) {
                Some(best) => println!("{best}"),
                None => {
                    eprintln!("no supported tag matches");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn print_breakdown(locale: &loctag::UnicodeLocaleId) {
    println!("tag:      {locale}");
    println!("language: {}", locale.lang.language);
    if let Some(script) = &locale.lang.script {
        println!("script:   {script}");
    }
    if let Some(region) = &locale.lang.region {
        println!("region:   {region}");
    }
    if !locale.lang.variants.is_empty() {
        println!("variants: {}", locale.lang.variants.join(", "));
    }
    for ext in &locale.extensions {
        println!("ext -{}-: {ext}", ext.singleton());
    }
}

fn setup_tracing(format: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("loctag=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new("loctag=info,warn")
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().compact())
                .init();
        }
    }

    Ok(())
}
