use clap::{Parser, Subcommand};
use menu_site::{config, generate, output, scan};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "menu-site")]
#[command(about = "Static site generator for restaurant listings")]
#[command(long_about = "\
Static site generator for restaurant listings

Reads a restaurant CSV export and writes a static site: one index page with a
card per restaurant, one detail page per restaurant, and a shared stylesheet.

Output structure:

  docs/
  ├── index.html                   # Card grid of every restaurant
  ├── assets/
  │   └── style.css                # Written once, never overwritten
  └── restaurants/
      ├── noodle-house/index.html  # Detail page (slug from the name)
      └── noodle-house-2/index.html

Run 'menu-site gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Config file (stock defaults are used when it does not exist)
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// CSV export to read (overrides `input` in config)
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Output directory (overrides `output` in config)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Read the CSV and write the full site (default)
    Build,
    /// Read the CSV and list the records without writing anything
    Scan {
        /// Print records as JSON instead of the summary tree
        #[arg(long)]
        json: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut cli = Cli::parse();

    match cli.command.take().unwrap_or(Command::Build) {
        Command::Build => {
            let site_config = resolve_config(&cli)?;
            println!("==> Reading {}", site_config.input.display());
            let manifest = scan::scan(
                &site_config.input,
                &site_config.columns,
                site_config.strict_columns,
            )?;

            println!("==> Generating HTML → {}", site_config.output.display());
            let report = generate::generate(&manifest.restaurants, &site_config.output)?;
            output::print_generate_output(&report, &site_config.output);
        }
        Command::Scan { json } => {
            let site_config = resolve_config(&cli)?;
            let manifest = scan::scan(
                &site_config.input,
                &site_config.columns,
                site_config.strict_columns,
            )?;
            if json {
                println!("{}", serde_json::to_string_pretty(&manifest)?);
            } else {
                output::print_scan_output(&manifest);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load the config file, then apply `--input` / `--output` overrides.
fn resolve_config(cli: &Cli) -> Result<config::SiteConfig, config::ConfigError> {
    let mut site_config = config::load_config(&cli.config)?;
    if let Some(input) = &cli.input {
        site_config.input = input.clone();
    }
    if let Some(output) = &cli.output {
        site_config.output = output.clone();
    }
    site_config.validate()?;
    Ok(site_config)
}
