//! apitree CLI - API documentation compiler
//!
//! Commands:
//! - `apitree extract` - Scrape documentation markup into the interchange JSON
//! - `apitree compile` - Compile interchange JSON into Go source
//! - `apitree build` - Run both stages on documentation markup
//! - `apitree outline` - Print the namespace tree of interchange JSON
//!
//! Every command writes its artifact to standard output in one piece, and only
//! after the whole run succeeded. Diagnostics go to standard error.

use anyhow::Result;
use apitree_core::{CollisionPolicy, CompileOptions};
use apitree_extract::{ExtractConfig, ExtractMode};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

mod build;
mod compile;
mod config;
mod extract;
mod logging;
mod outline;

use config::ApitreeConfig;

#[derive(Parser)]
#[command(name = "apitree")]
#[command(author, version, about = "Compile API documentation into a Go namespace tree", long_about = None)]
struct Cli {
    /// Path to an apitree.toml configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape documentation markup into interchange JSON
    Extract {
        /// Documentation markup file
        markup: PathBuf,

        #[command(flatten)]
        extract: ExtractArgs,
    },

    /// Compile interchange JSON into Go source
    Compile {
        /// Interchange JSON file
        mapping: PathBuf,

        #[command(flatten)]
        compile: CompileArgs,
    },

    /// Scrape documentation markup and compile it into Go source
    Build {
        /// Documentation markup file
        markup: PathBuf,

        #[command(flatten)]
        extract: ExtractArgs,

        #[command(flatten)]
        compile: CompileArgs,
    },

    /// Print the namespace tree of interchange JSON
    Outline {
        /// Interchange JSON file
        mapping: PathBuf,
    },
}

#[derive(Args)]
struct ExtractArgs {
    /// Extraction mode (lenient, strict)
    #[arg(short, long)]
    mode: Option<ExtractMode>,
}

impl ExtractArgs {
    fn apply(self, config: &mut ExtractConfig) {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
    }
}

#[derive(Args)]
struct CompileArgs {
    /// Go package name of the generated file
    #[arg(short, long)]
    package: Option<String>,

    /// Identifier collision handling (accept, warn, error)
    #[arg(long, value_name = "POLICY")]
    on_collision: Option<CollisionPolicy>,

    /// Also emit one argument struct per endpoint
    #[arg(long)]
    arg_structs: bool,
}

impl CompileArgs {
    fn apply(self, options: &mut CompileOptions) {
        if let Some(package) = self.package {
            options.package = package;
        }
        if let Some(policy) = self.on_collision {
            options.on_collision = policy;
        }
        if self.arg_structs {
            options.emit_arg_structs = true;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let mut config = ApitreeConfig::load(cli.config.as_deref())?;

    let artifact = match cli.command {
        Commands::Extract { markup, extract } => {
            extract.apply(&mut config.extract);
            extract::run(&markup, &config.extract)?
        }
        Commands::Compile { mapping, compile } => {
            compile.apply(&mut config.compile);
            compile::run(&mapping, &config.compile)?
        }
        Commands::Build {
            markup,
            extract,
            compile,
        } => {
            extract.apply(&mut config.extract);
            compile.apply(&mut config.compile);
            build::run(&markup, &config)?
        }
        Commands::Outline { mapping } => outline::run(&mapping, &config.compile)?,
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(artifact.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
