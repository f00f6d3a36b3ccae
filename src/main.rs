#![forbid(unsafe_code)]
//! Folio Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use tracing_subscriber::EnvFilter;

use folio::commands::{
    execute_content, execute_init, execute_render, execute_resolve, execute_session,
    execute_variants, ContentOptions, InitOptions, RenderOptions, ResolveOptions,
    SessionSubcommand, VariantsOptions,
};
use folio::config::DEFAULT_CONFIG_FILE;
use folio::{Config, ContentFormat};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio page renderer with session-sticky presentation variants")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Variants to enable, in order (can specify multiple)
        #[arg(long)]
        variant: Vec<String>,

        /// JSON/YAML content file to use instead of the built-in content
        #[arg(long)]
        content: Option<PathBuf>,
    },

    /// List registered variants
    Variants {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve which variant a page load would show
    Resolve {
        /// Page address, e.g. "https://example.com/?variant=b" or "?variant=b"
        #[arg(short, long)]
        address: Option<String>,

        /// Session id (see `folio session new`)
        #[arg(short, long, env = "FOLIO_SESSION")]
        session: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a variant and render the page
    Render {
        /// Page address, e.g. "https://example.com/?variant=b" or "?variant=b"
        #[arg(short, long)]
        address: Option<String>,

        /// Session id (see `folio session new`)
        #[arg(short, long, env = "FOLIO_SESSION")]
        session: Option<String>,

        /// Output HTML file (default: config output)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print HTML to stdout
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Print the content model
    Content {
        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: ContentFormatArg,
    },

    /// Manage variant sessions
    Session {
        #[command(subcommand)]
        cmd: SessionCommands,
    },
}

#[derive(Subcommand)]
enum SessionCommands {
    /// Start a new session and print its id
    New,
    /// Show the variant a session remembers
    Show {
        /// Session id
        id: String,
    },
    /// End a session, clearing its storage
    End {
        /// Session id
        id: String,
    },
    /// List sessions
    List,
}

#[derive(Clone, Copy, ValueEnum)]
enum ContentFormatArg {
    Json,
    Yaml,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load_or_default(&cli.config)?;

    let result = match cli.command {
        Commands::Init { force, variant, content } => {
            let options = InitOptions {
                path: cli.config.clone(),
                force,
                variants: variant,
                content,
            };
            execute_init(options)
        }

        Commands::Variants { json } => execute_variants(VariantsOptions { json }, &config),

        Commands::Resolve { address, session, json } => {
            let options = ResolveOptions { address, session, json };
            execute_resolve(options, &config)
        }

        Commands::Render { address, session, output, stdout } => {
            let options = RenderOptions {
                address,
                session,
                output,
                stdout,
            };
            execute_render(options, &config)
        }

        Commands::Content { format } => {
            let format = match format {
                ContentFormatArg::Json => ContentFormat::Json,
                ContentFormatArg::Yaml => ContentFormat::Yaml,
            };
            execute_content(ContentOptions { format }, &config)
        }

        Commands::Session { cmd } => {
            let subcommand = match cmd {
                SessionCommands::New => SessionSubcommand::New,
                SessionCommands::Show { id } => SessionSubcommand::Show { id },
                SessionCommands::End { id } => SessionSubcommand::End { id },
                SessionCommands::List => SessionSubcommand::List,
            };
            execute_session(subcommand, &config)
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("✗").red(), e);
        std::process::exit(1);
    }

    Ok(())
}
