use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chirp_insight::cli::commands::{art, config, feed, post};
use chirp_insight::cli::{CommandContext, LlmOverrides, read_input};
use chirp_insight::constants::limits;

#[derive(Parser)]
#[command(name = "chirp-insight")]
#[command(
    version,
    about = "LLM-backed content intelligence for social posts"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true, help = "Provider override: openai, ollama")]
    provider: Option<String>,

    #[arg(long, global = true, help = "Model override")]
    model: Option<String>,

    #[arg(long, short, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a post against the content policy
    Moderate {
        #[arg(help = "Post text (stdin when omitted)")]
        content: Option<String>,
    },

    /// Score a post for spam
    Spam {
        content: Option<String>,
        #[arg(long, help = "Posts previously published by the author")]
        post_count: Option<u32>,
    },

    /// Classify the sentiment of a post
    Sentiment { content: Option<String> },

    /// Suggest hashtags for a post
    Hashtags {
        content: Option<String>,
        #[arg(short = 'n', long, default_value_t = limits::DEFAULT_HASHTAGS)]
        count: usize,
    },

    /// Suggest replies to a post
    Replies {
        content: Option<String>,
        #[arg(short = 'n', long, default_value_t = limits::DEFAULT_REPLIES)]
        count: usize,
    },

    /// Extract trending topics from recent posts (one per line)
    Trends {
        #[arg(long, short, help = "Posts file (stdin when omitted)")]
        file: Option<PathBuf>,
        #[arg(short = 'n', long, default_value_t = limits::DEFAULT_TRENDING)]
        count: usize,
    },

    /// Summarize a conversation (`speaker: text` per line)
    Summarize {
        #[arg(long, short, help = "Transcript file (stdin when omitted)")]
        file: Option<PathBuf>,
    },

    /// Rewrite a post to be more engaging
    Enhance { content: Option<String> },

    /// Run the publishing gate and, if allowed, post analysis
    Screen {
        content: Option<String>,
        #[arg(long)]
        post_count: Option<u32>,
    },

    /// Generate ASCII art and render it to PNG
    AsciiArt {
        prompt: String,
        #[arg(long, short, help = "Output directory (config render.output_dir by default)")]
        out: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(short = 'g', long, help = "Show global config file only")]
        global: bool,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mchirp-insight encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // Backtrace when RUST_BACKTRACE=1
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let overrides = LlmOverrides {
        provider: cli.provider,
        model: cli.model,
    };

    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Show { global, format } => config::show(global, &format)?,
            ConfigAction::Path => config::path()?,
            ConfigAction::Init { global, force } => config::init(global, force)?,
        },
        command => {
            let ctx = CommandContext::load(overrides)?;
            let rt = Runtime::new()?;
            rt.block_on(run_insight(&ctx, command))?;
        }
    }

    Ok(())
}

async fn run_insight(ctx: &CommandContext, command: Commands) -> chirp_insight::Result<()> {
    match command {
        Commands::Moderate { content } => post::moderate(ctx, &read_input(content)?).await,
        Commands::Spam {
            content,
            post_count,
        } => post::spam(ctx, &read_input(content)?, post_count).await,
        Commands::Sentiment { content } => post::sentiment(ctx, &read_input(content)?).await,
        Commands::Hashtags { content, count } => {
            post::hashtags(ctx, &read_input(content)?, count).await
        }
        Commands::Replies { content, count } => {
            post::replies(ctx, &read_input(content)?, count).await
        }
        Commands::Trends { file, count } => feed::trends(ctx, file.as_deref(), count).await,
        Commands::Summarize { file } => feed::summarize(ctx, file.as_deref()).await,
        Commands::Enhance { content } => post::enhance(ctx, &read_input(content)?).await,
        Commands::Screen {
            content,
            post_count,
        } => post::screen(ctx, &read_input(content)?, post_count).await,
        Commands::AsciiArt { prompt, out } => art::run(ctx, &prompt, out.as_deref()).await,
        Commands::Config { .. } => Ok(()),
    }
}
