use std::path::PathBuf;

use clap::Parser as ClapParser;
use rds::dispatch::Parser;
use tokio::fs::File;
use tokio::io::{self, AsyncReadExt};
use tokio::sync::mpsc;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Decode a stream of RDS/RBDS groups and print the records produced.
#[derive(Debug, ClapParser)]
#[command(name = "rds-cli", version, about)]
struct Options {
    /// Path to a file of packed 8-byte groups; omit to read stdin.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Enable operational warnings (unsupported group/version, guarded
    /// out-of-range lookups).
    #[arg(long)]
    log: bool,

    /// Enable verbose per-group diagnostic traces.
    #[arg(long)]
    debug: bool,

    /// Print each record as a JSON object instead of plain text.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let options = Options::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut bytes = Vec::new();
    match &options.input {
        Some(path) => {
            File::open(path).await?.read_to_end(&mut bytes).await?;
        }
        None => {
            io::stdin().read_to_end(&mut bytes).await?;
        }
    }

    let parser = Parser::new(options.log, options.debug);
    let (in_tx, in_rx) = mpsc::channel(64);
    let (out_tx, mut out_rx) = mpsc::channel(256);

    let feeder = tokio::spawn(async move {
        for chunk in bytes.chunks(8) {
            if chunk.len() != 8 {
                warn!(len = chunk.len(), "trailing partial group, dropping");
                break;
            }
            if in_tx.send(chunk.to_vec()).await.is_err() {
                break;
            }
        }
    });

    let dispatcher = tokio::spawn(async move {
        parser.run(in_rx, out_tx).await;
    });

    while let Some(record) = out_rx.recv().await {
        if options.json {
            println!("{}", serde_json::to_string(&record).unwrap());
        } else {
            println!("{record}");
        }
    }

    let _ = feeder.await;
    let _ = dispatcher.await;
    Ok(())
}
