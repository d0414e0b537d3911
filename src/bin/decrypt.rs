//! Command-line front end: load a page, decrypt it, write the article.
//!
//! The page comes from `--url` (with the `fetch` feature), `--input`, or
//! stdin. By default the article is saved as `<headline intro>.html` next to
//! the executable; `--json` prints the blocks instead.

use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use rs_decryptor::{decrypt_bytes_with_options, output, AnchorPolicy, Article, Cipher, Options};
use serde::Serialize;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "decrypt", about = "Decrypt rotation-obfuscated article pages")]
struct Cli {
    /// Page URL to fetch (needs the `fetch` feature)
    #[arg(short, long, conflicts_with = "input")]
    url: Option<String>,

    /// Saved HTML file to read (default: stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory for the output file (default: next to the executable)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Print the blocks as JSON instead of writing a file
    #[arg(long)]
    json: bool,

    /// Use the letters-only rot-25 cipher
    #[arg(long)]
    letters: bool,

    /// Only keep the last link label of each paragraph in clear text
    #[arg(long)]
    last_anchor_only: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    title: Option<&'a str>,
    header: &'a [String],
    body: &'a [String],
    decoded: &'a [String],
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    if let Err(err) = run(&Cli::parse()) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let options = Options {
        cipher: if cli.letters { Cipher::ROT25 } else { Cipher::default() },
        anchor_policy: if cli.last_anchor_only {
            AnchorPolicy::LastOnly
        } else {
            AnchorPolicy::Union
        },
        ..Options::default()
    };

    let html = load_page(cli)?;
    let article = decrypt_bytes_with_options(&html, &options)?;
    info!(
        body = article.body_len,
        decoded = article.decoded_len,
        "extracted {} blocks",
        article.blocks.len()
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&json_output(&article))?);
        return Ok(());
    }

    let dir = match &cli.out_dir {
        Some(dir) => dir.clone(),
        None => default_out_dir(),
    };
    let path = output::write_article(&article, &dir)?;
    println!("{}", path.display());
    Ok(())
}

fn json_output(article: &Article) -> JsonOutput<'_> {
    JsonOutput {
        title: article.title(),
        header: article.header(),
        body: article.body(),
        decoded: article.decoded(),
    }
}

fn load_page(cli: &Cli) -> Result<Vec<u8>, Box<dyn Error>> {
    if let Some(url) = &cli.url {
        return fetch(url);
    }

    if let Some(path) = &cli.input {
        return fs::read(path)
            .map_err(|e| Box::<dyn Error>::from(format!("failed to read {}: {e}", path.display())));
    }

    let mut html = Vec::new();
    io::stdin().read_to_end(&mut html)?;
    Ok(html)
}

#[cfg(feature = "fetch")]
fn fetch(raw: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    let url = url::Url::parse(raw)?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(format!("unsupported URL scheme: {}", url.scheme()).into());
    }

    info!(%url, "fetching page");
    let response = reqwest::blocking::get(url.as_str())?;
    let response = response
        .error_for_status()
        .map_err(|e| format!("URL could not be retrieved: {e}"))?;
    Ok(response.bytes()?.to_vec())
}

#[cfg(not(feature = "fetch"))]
fn fetch(_url: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    Err("built without the `fetch` feature; use --input or stdin".into())
}

/// Directory of the running executable, or the working directory.
fn default_out_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}
