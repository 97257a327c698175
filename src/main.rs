use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wiki_site::{config, output, pipeline};

#[derive(Parser)]
#[command(name = "wiki-site")]
#[command(about = "Static site generator for markdown wikis")]
#[command(long_about = "\
Static site generator for markdown wikis

Every page in the source directory becomes one HTML file with a shared,
collapsible sidebar. Wiki links between pages are rewritten to the
generated files.

Source structure:

  readme/
  ├── config.toml                  # Site config (optional)
  ├── template.html                # Page template (optional, see config)
  ├── Home.md                      # → Home.html
  ├── Production-Install.md        # → Production-Install.html
  └── i2b2-Upgrade.readme          # → i2b2-Upgrade.html

Page order: titles listed in config.toml come first, the rest follow
sorted by file name.

Run 'wiki-site gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing the wiki pages
    #[arg(long, default_value = "readme", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "webpages", global = true)]
    output: PathBuf,

    /// Log pipeline progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert every page and write the site
    Build,
    /// Convert every page without writing anything
    Check {
        /// Print the site map as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Build => {
            let pages = pipeline::build_site(&cli.source, &cli.output, output::print_created)?;
            output::print_build_summary(&pages, &cli.output);
        }
        Command::Check { json } => {
            let (_, site) = pipeline::load_site(&cli.source)?;
            if json {
                println!("{}", output::format_check_json(&site)?);
            } else {
                output::print_check_output(&site);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// `--verbose` turns on info logging; otherwise `RUST_LOG` decides.
fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();
}
