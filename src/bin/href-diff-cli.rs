use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use href_diff::relationships::{compare, UniqueHrefsReport};

#[derive(Parser)]
#[command(name = "href-diff-cli")]
#[command(about = "Compare relationship exports locally or through a running href-diff server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Diff two export files on this machine
    Diff {
        /// Export whose hrefs are reported (e.g. following.json)
        first: PathBuf,
        /// Export to subtract (e.g. followers.json)
        second: PathBuf,
        /// Print the same JSON payload the server returns
        #[arg(long)]
        json: bool,
    },
    /// Send two export files to a running server
    Remote {
        first: PathBuf,
        second: PathBuf,
        #[arg(short, long, default_value = "http://localhost:5000")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Diff { first, second, json } => run_local(&first, &second, json),
        Commands::Remote { first, second, url } => run_remote(&first, &second, &url).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn read_document(path: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    let value = serde_json::from_str(&content)
        .map_err(|e| format!("{} is not valid JSON: {}", path.display(), e))?;
    Ok(value)
}

fn run_local(first: &Path, second: &Path, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let report = compare(&read_document(first)?, &read_document(second)?)?;
    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

async fn run_remote(first: &Path, second: &Path, url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let payload = json!({
        "json1": read_document(first)?,
        "json2": read_document(second)?,
    });

    let res = reqwest::Client::new()
        .post(format!("{}/unique_hrefs", url.trim_end_matches('/')))
        .json(&payload)
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        let text = res.text().await.unwrap_or_default();
        return Err(format!("server returned {}: {}", status, text).into());
    }

    let report: UniqueHrefsReport = res.json().await?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &UniqueHrefsReport) {
    for href in &report.unique_hrefs {
        println!("{}", href);
    }
    println!("{} unique", report.count);
}
