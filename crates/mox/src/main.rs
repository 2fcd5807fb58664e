mod commands;

use camino::Utf8PathBuf;
use clap::Parser;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Formatter and checker for Mox files.
///
/// Every command reads standard input when no path is given.
#[derive(Parser)]
#[command(name = "mox", version)]
enum Options {
    /// Print the canonical form of a file.
    Fmt {
        path: Option<Utf8PathBuf>,
        /// String written once per indentation level.
        #[arg(long, env = "MOX_INDENT", conflicts_with = "config")]
        indent: Option<String>,
        /// JSON file with formatting options.
        #[arg(long)]
        config: Option<Utf8PathBuf>,
        /// Only tidy whitespace and comments in the parsed tree.
        #[arg(long)]
        tree: bool,
    },
    /// Report syntax errors.
    Check { paths: Vec<Utf8PathBuf> },
    /// Print the token stream.
    Tokens {
        path: Option<Utf8PathBuf>,
        /// Leave out whitespace and comments.
        #[arg(long)]
        skip_trivia: bool,
    },
    /// Print the parsed node tree.
    Tree { path: Option<Utf8PathBuf> },
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    match Options::parse() {
        Options::Fmt { path, indent, config, tree } => {
            let options = commands::format_options(indent, config.as_deref())?;
            commands::fmt(path, &options, tree)
        }
        Options::Check { paths } => commands::check(paths),
        Options::Tokens { path, skip_trivia } => commands::tokens(path, skip_trivia),
        Options::Tree { path } => commands::tree(path),
    }
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

    let filter = EnvFilter::try_from_env("MOX_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
