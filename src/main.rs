use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use lsp_structures::model::{
    Diagnostic, DiagnosticCode, DiagnosticSeverity, NotificationMessage, Params, Position, Range,
    RequestMessage, ResponseMessage,
};
use lsp_structures::schema;

/// LSP 3.17 basic JSON structures - examples and schema export
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print example instances of the core structures as JSON
    Demo,

    /// Write JSON Schema descriptions of the top-level structures
    Export {
        /// Output file path
        #[arg(long, short = 'o', default_value = "lsp-structures-schema.json")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging with RUST_LOG environment variable
    // Default to "warn" if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Commands::Demo => demo_command(),
        Commands::Export { out } => export_command(out),
    }
}

fn demo_command() -> Result<()> {
    let position = Position::new(10, 5);
    print_example("Position example", &position)?;

    let range = Range::new(Position::new(10, 5), Position::new(10, 15));
    print_example("Range example", &range)?;

    let diagnostic = Diagnostic::new(range, "Undefined method 'foo' for nil:NilClass")
        .with_severity(DiagnosticSeverity::Error)
        .with_code(DiagnosticCode::String("E001".to_string()))
        .with_source("ruby-lsp");
    print_example("Diagnostic example", &diagnostic)?;

    let request = RequestMessage::new(
        1,
        "textDocument/completion",
        Some(Params::try_from(json!({
            "textDocument": {"uri": "file:///path/to/mal_minimal.rb"},
            "position": {"line": 10, "character": 5}
        }))?),
    );
    print_example("Request message example", &request)?;

    let response = ResponseMessage::success(
        1,
        json!({
            "items": [
                {
                    "label": "cons",
                    "kind": 3,
                    "detail": "cons(car, cdr) -> Cons"
                }
            ]
        }),
    );
    print_example("Response message example", &response)?;

    let notification = NotificationMessage::new(
        "textDocument/publishDiagnostics",
        Some(Params::try_from(json!({
            "uri": "file:///path/to/mal_minimal.rb",
            "diagnostics": [serde_json::to_value(&diagnostic)?]
        }))?),
    );
    print_example("Notification message example", &notification)?;

    Ok(())
}

fn print_example<T: serde::Serialize>(title: &str, value: &T) -> Result<()> {
    println!("{title}:");
    println!("{}", serde_json::to_string_pretty(value)?);
    println!();
    Ok(())
}

fn export_command(out: PathBuf) -> Result<()> {
    info!("Exporting schema descriptions to: {}", out.display());
    schema::write_schema_file(&out)?;

    println!("JSON schemas exported to {}", out.display());
    Ok(())
}
