use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use verb_sitemap::cli::generate_cmd::{self, GenerateArgs};

/// Generate sitemaps with hreflang alternates for the verb conjugation site.
#[derive(Parser, Debug)]
#[command(name = "verb-sitemap", version, about)]
struct Cli {
    #[command(flatten)]
    generate: GenerateArgs,

    /// Suppress the run summary
    #[arg(long)]
    quiet: bool,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Emit log lines as JSON
    #[arg(long, env = "VERB_SITEMAP_LOG_JSON")]
    log_json: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("verb_sitemap=info"));

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Output helpers read these flags from the environment.
    if cli.quiet {
        std::env::set_var("VERB_SITEMAP_QUIET", "1");
    }
    if cli.json {
        std::env::set_var("VERB_SITEMAP_JSON", "1");
    }
    if cli.no_color {
        std::env::set_var("VERB_SITEMAP_NO_COLOR", "1");
    }

    init_tracing(cli.log_json);

    generate_cmd::run(cli.generate)
}
