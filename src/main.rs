// SPDX-License-Identifier: PMPL-1.0-or-later

//! xslt-messages: inspect, resolve and audit the localized XSLT error catalogs.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use xslt_messages::audit::audit_source;
use xslt_messages::config::Settings;
use xslt_messages::i18n::{
    builtin_catalogs, language_name, locale_display_name, native_name, DirectorySource, SourceChain,
};
use xslt_messages::report::{self, ReportOutputFormat};
use xslt_messages::usage::render_usage;
use xslt_messages::{
    diagnostics, BuiltinCatalogs, CatalogLoader, CatalogSource, Locale, XSLT_ERROR_RESOURCES,
};

#[derive(Parser)]
#[command(name = "xslt-messages")]
#[command(version)]
#[command(about = "Localized XSLT error and warning message catalogs")]
#[command(long_about = None)]
struct Cli {
    /// Locale to load, e.g. ja_JP or zh-TW (default: LC_ALL / LC_MESSAGES / LANG)
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Locale used when the requested one has no catalog
    #[arg(long, global = true)]
    fallback_locale: Option<String>,

    /// Directory of YAML/JSON catalogs consulted before the built-in ones
    #[arg(long, global = true)]
    catalog_dir: Option<PathBuf>,

    /// YAML settings file (default: $XSLT_MESSAGES_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the formatted message for a key
    Show {
        /// Message key, e.g. ER_NO_CURLYBRACE
        #[arg(value_name = "KEY")]
        key: String,

        /// Positional arguments substituted for {0}, {1}, ...
        #[arg(value_name = "ARGS")]
        args: Vec<String>,

        /// Prefix the localized warning header
        #[arg(long, conflicts_with = "error")]
        warning: bool,

        /// Prefix the localized error header
        #[arg(long)]
        error: bool,
    },

    /// Show which bundle the locale resolves to
    Resolve,

    /// List the built-in catalogs
    Locales,

    /// Print the localized Process option summary
    Usage,

    /// Check every catalog against the root bundle
    Audit {
        /// Output format (default: text, or from the output file extension)
        #[arg(short, long, value_enum)]
        format: Option<ReportOutputFormat>,

        /// Write the report to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the keys of the resolved catalog
    Keys {
        /// Only keys starting with this prefix
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Run self-diagnostics
    Doctor,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = settings(&cli)?;
    tracing::debug!(?settings, "settings resolved");

    match cli.command {
        Commands::Show {
            key,
            args,
            warning,
            error,
        } => {
            let loader = loader(&settings)?;
            let locale = requested_locale(&settings, loader.fallback())?;
            let catalog = loader.load(XSLT_ERROR_RESOURCES, &locale)?;
            let text = if warning {
                catalog.create_warning(&key, &args)
            } else if error {
                catalog.create_error(&key, &args)
            } else {
                catalog.create_message(&key, &args)
            };
            println!("{}", text);
            if !catalog.contains(&key) {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Resolve => {
            let loader = loader(&settings)?;
            let locale = requested_locale(&settings, loader.fallback())?;
            let res = loader.resolve(XSLT_ERROR_RESOURCES, &locale)?;
            println!("  Requested locale: {}", res.requested);
            println!("  Requested bundle: {}", res.requested_bundle);
            println!("  Loaded bundle:    {}", res.catalog.bundle().bold());
            println!("  Step:             {}", res.step);
            println!("  Tried:            {}", res.attempts.join(", "));
            if res.step.is_fallback() {
                println!("  {}", format!("fell back to {}", loader.fallback()).yellow());
            }
            if !res.requested.has_known_language() {
                println!(
                    "  {}",
                    format!(
                        "{} is not an ISO 639-1 language code",
                        res.requested.language()
                    )
                    .yellow()
                );
            }
        }

        Commands::Locales => {
            println!("{}", "Built-in catalogs".bold().cyan());
            for catalog in builtin_catalogs() {
                let locale = catalog.locale();
                let suffix = catalog
                    .bundle()
                    .strip_prefix(XSLT_ERROR_RESOURCES)
                    .filter(|s| !s.is_empty())
                    .unwrap_or("(root)");
                let display = if catalog.bundle() == XSLT_ERROR_RESOURCES {
                    locale_display_name("", "")
                } else {
                    locale_display_name(locale.language(), locale.country())
                };
                let native = native_name(locale.language())
                    .or_else(|| language_name(locale.language()))
                    .unwrap_or("");
                println!(
                    "  {:28} {:8} {:22} {}",
                    catalog.bundle(),
                    suffix,
                    display,
                    native
                );
            }
            if let Some(dir) = &settings.catalog_dir {
                let source = DirectorySource::open(dir)?;
                println!();
                println!("{} {}", "Catalogs in".bold().cyan(), dir.display());
                for name in source.bundles() {
                    println!("  {}", name);
                }
            }
        }

        Commands::Usage => {
            let loader = loader(&settings)?;
            let locale = requested_locale(&settings, loader.fallback())?;
            let catalog = loader.load(XSLT_ERROR_RESOURCES, &locale)?;
            print!("{}", render_usage(catalog));
        }

        Commands::Audit { format, output } => {
            let source = source(&settings)?;
            let audit = audit_source(&source, XSLT_ERROR_RESOURCES)?;

            match &output {
                Some(path) => {
                    let format = format
                        .or_else(|| ReportOutputFormat::from_path(path))
                        .unwrap_or_default();
                    report::save_report(&audit, path, format)?;
                }
                None => match format.unwrap_or_default() {
                    ReportOutputFormat::Text => report::print_report(&audit),
                    other => println!("{}", other.serialize(&audit)?),
                },
            }

            if !audit.is_clean() {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Keys { prefix } => {
            let loader = loader(&settings)?;
            let locale = requested_locale(&settings, loader.fallback())?;
            let catalog = loader.load(XSLT_ERROR_RESOURCES, &locale)?;
            for key in catalog.keys() {
                if prefix.as_deref().is_none_or(|p| key.starts_with(p)) {
                    println!("{}", key);
                }
            }
        }

        Commands::Doctor => {
            diagnostics::run_self_diagnostics(&settings)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Config file and environment, then command-line flags on top.
fn settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::discover(cli.config.as_deref())?;
    if let Some(locale) = &cli.locale {
        settings.locale = Some(locale.clone());
    }
    if let Some(fallback) = &cli.fallback_locale {
        settings.fallback_locale = fallback.clone();
    }
    if let Some(dir) = &cli.catalog_dir {
        settings.catalog_dir = Some(dir.clone());
    }
    Ok(settings)
}

fn source(settings: &Settings) -> Result<SourceChain> {
    let mut chain = SourceChain::new();
    if let Some(dir) = &settings.catalog_dir {
        let directory = DirectorySource::open(dir)
            .with_context(|| format!("opening catalog directory {}", dir.display()))?;
        chain.push(directory);
    }
    chain.push(BuiltinCatalogs);
    Ok(chain)
}

fn loader(settings: &Settings) -> Result<CatalogLoader<SourceChain>> {
    Ok(CatalogLoader::new(source(settings)?).with_fallback(settings.fallback()?))
}

fn requested_locale(settings: &Settings, fallback: &Locale) -> Result<Locale> {
    Ok(settings
        .locale()?
        .or_else(Locale::from_env)
        .unwrap_or_else(|| fallback.clone()))
}
