use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use nst_sampa::symbols::{Category, SymbolTable};
use nst_sampa::{convert, segment, TokenKind};

#[derive(Parser)]
#[command(name = "sampatool", about = "NST X-SAMPA conversion diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert an X-SAMPA transcription to IPA
    Convert {
        /// Transcription in NST X-SAMPA, e.g. '""On$d@$%lE*u0s'
        transcription: String,
    },

    /// Show the token-by-token segmentation of a transcription
    Segment {
        /// Transcription in NST X-SAMPA
        transcription: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the symbol inventory
    Table,
}

/// One segmentation row (also the JSON shape).
#[derive(Debug, Serialize)]
struct TokenRecord {
    text: String,
    kind: &'static str,
    ipa: Option<String>,
}

fn kind_name(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Segment => "segment",
        TokenKind::Prosody => "prosody",
        TokenKind::Invalid => "invalid",
    }
}

fn main() {
    #[cfg(feature = "trace")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Convert { transcription } => convert_cmd(&transcription),
        Command::Segment {
            transcription,
            json,
        } => segment_cmd(&transcription, json),
        Command::Table => table_cmd(),
    }
}

fn convert_cmd(transcription: &str) {
    match convert(transcription) {
        Ok(ipa) => println!("{ipa}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

fn segment_cmd(transcription: &str, json: bool) {
    let table = SymbolTable::global();
    let records: Vec<TokenRecord> = segment(transcription)
        .iter()
        .map(|token| TokenRecord {
            text: token.text.to_string(),
            kind: kind_name(token.kind),
            ipa: table.lookup(token.text).map(str::to_string),
        })
        .collect();

    if json {
        let out = serde_json::to_string_pretty(&records).unwrap_or_else(|e| {
            eprintln!("Failed to serialize tokens: {e}");
            process::exit(1);
        });
        println!("{out}");
        return;
    }

    let text_width = records.iter().map(|r| r.text.width()).max().unwrap_or(0);
    for record in &records {
        let pad = text_width - record.text.width();
        println!(
            "{}{}  {:8} {}",
            record.text,
            " ".repeat(pad),
            record.kind,
            record.ipa.as_deref().unwrap_or("?"),
        );
    }
}

fn table_cmd() {
    let table = SymbolTable::global();

    let spelling_width = table
        .segments()
        .map(|(_, spelling, _)| spelling.width())
        .max()
        .unwrap_or(0);

    let mut current: Option<Category> = None;
    for (category, spelling, entry) in table.segments() {
        if current != Some(category) {
            match category {
                Category::Consonant => println!("consonants:"),
                Category::Vowel => println!("\nvowels:"),
                Category::Diphthong => println!("\ndiphthongs:"),
            }
            current = Some(category);
        }
        let pad = spelling_width - spelling.width();
        println!(
            "  {}{}  {:4} {}",
            spelling,
            " ".repeat(pad),
            entry.nofabet,
            entry.ipa
        );
    }

    println!("\nprosody:");
    for (spelling, ipa) in table.prosody() {
        let pad = spelling_width.saturating_sub(spelling.width());
        println!("  {}{}  {}", spelling, " ".repeat(pad), ipa);
    }
}
