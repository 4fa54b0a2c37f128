//! kindlify - OCR documents into EPUB ebooks

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kindlify::config::Config;
use kindlify::pipeline::{DocumentSource, convert_to_epub};
use kindlify::server::{AppState, ServeConfig, serve};

#[derive(Parser)]
#[command(name = "kindlify")]
#[command(version, about = "Convert documents into EPUB ebooks via OCR", long_about = None)]
#[command(after_help = "EXAMPLES:
    kindlify convert scan.pdf book.epub --title \"My Book\"
    kindlify convert https://example.com/paper.pdf
    kindlify serve --port 3000")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document (local file or URL) into an EPUB
    Convert {
        /// Input document: a file path or an http(s) URL
        #[arg(value_name = "INPUT")]
        input: String,

        /// Output EPUB path (defaults to "<title>.epub")
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Ebook title (defaults to the input file stem)
        #[arg(short, long)]
        title: Option<String>,

        /// Suppress output messages
        #[arg(short, long)]
        quiet: bool,
    },
    /// Run the HTTP conversion service
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> kindlify::Result<()> {
    let config = Config::from_env()?;

    match cli.command {
        Commands::Convert {
            input,
            output,
            title,
            quiet,
        } => {
            let (source, default_title) = resolve_source(&input)?;
            let title = title.unwrap_or(default_title);
            let output = output.unwrap_or_else(|| PathBuf::from(format!("{title}.epub")));

            let bytes = convert_to_epub(&config, source, &title).await?;
            std::fs::write(&output, &bytes)?;

            if !quiet {
                println!("Wrote {} ({} bytes)", output.display(), bytes.len());
            }
            Ok(())
        }
        Commands::Serve { host, port } => {
            let state = Arc::new(AppState { config });
            serve(ServeConfig::new(host, port), state).await
        }
    }
}

/// Turn the CLI input into a document source plus a default title.
///
/// URLs are passed through for the OCR service to fetch; anything else is
/// read as a local file and uploaded.
fn resolve_source(input: &str) -> kindlify::Result<(DocumentSource, String)> {
    if input.starts_with("http://") || input.starts_with("https://") {
        return Ok((DocumentSource::Url(input.to_string()), "Document".to_string()));
    }

    let path = Path::new(input);
    let data = std::fs::read(path)?;
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("document")
        .to_string();
    let title = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("Document")
        .to_string();

    Ok((DocumentSource::File { name, data }, title))
}
