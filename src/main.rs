mod commands;

use clap::{Parser, Subcommand};
use commands::CommandContext;
use factbook_core::{config, store, FactStore};

#[derive(Parser)]
#[command(
    name = "factbook",
    version,
    about = "factbook — facts about the history of artificial intelligence"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "factbook.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one fact (random unless --index is given).
    Fact {
        /// Language code, e.g. EN or en-US.
        #[arg(short, long)]
        lang: Option<String>,
        /// Zero-based fact index.
        #[arg(short, long, allow_negative_numbers = true)]
        index: Option<i64>,
    },
    /// Print the number of facts for a language.
    Count {
        /// Language code, e.g. EN or en-US.
        #[arg(short, long)]
        lang: Option<String>,
    },
    /// Print every fact for a language.
    List {
        /// Language code, e.g. EN or en-US.
        #[arg(short, long)]
        lang: Option<String>,
        /// Print a JSON array instead of numbered lines.
        #[arg(long)]
        json: bool,
    },
    /// Print the registered languages.
    Languages,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.factbook.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Logged here because `load` runs before the subscriber exists.
    match &cfg.source {
        Some(path) => tracing::info!("loaded config from {}", path.display()),
        None => tracing::info!("Config file not found at {}, using defaults", cli.config),
    }

    store::init(FactStore::from_config(&cfg)?)?;
    let ctx = CommandContext {
        store: store::global(),
        default_language: &cfg.factbook.default_language,
    };

    let out = match cli.command {
        Commands::Fact { lang, index } => commands::fact(&ctx, lang.as_deref(), index)?,
        Commands::Count { lang } => commands::count(&ctx, lang.as_deref())?,
        Commands::List { lang, json } => commands::list(&ctx, lang.as_deref(), json)?,
        Commands::Languages => commands::languages(&ctx),
    };
    println!("{out}");

    Ok(())
}
