// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use cardex::{
    build_index, build_thread_tree, normalize, Character, EngineOptions, MatchResult, Review,
    SearchEngine, Vocabulary,
};

mod cli;
use cli::display::{
    dim, ident, pad_right, row, score_value, section_bot, section_mid, section_top, tier_label,
    timing_ms, truncate, visible_len,
};
use cli::{Cli, Commands};

/// Exports come either as a bare array or wrapped in `{"items": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload<T> {
    List(Vec<T>),
    Wrapped { items: Vec<T> },
}

impl<T> Payload<T> {
    fn into_items(self) -> Vec<T> {
        match self {
            Payload::List(items) | Payload::Wrapped { items } => items,
        }
    }
}

/// JSON shape of one search hit.
#[derive(Serialize)]
struct SearchHit<'a> {
    id: &'a str,
    score: f64,
    name: &'a str,
    occupation: &'a str,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output stays clean. `RUST_LOG` overrides.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            file,
            query,
            limit,
            vocab,
            builtin,
            json,
        } => run_search(&file, &query, limit, vocab.as_deref(), builtin, json),
        Commands::Threads { file, json } => run_threads(&file, json),
        Commands::Variants { query, vocab } => run_variants(&query, vocab.as_deref()),
        Commands::Normalize { text } => {
            println!("{}", normalize(&text));
            Ok(())
        }
    }
}

fn load_items<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let payload: Payload<T> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(payload.into_items())
}

fn load_vocabulary(path: Option<&Path>) -> Result<Vocabulary> {
    match path {
        Some(path) => Vocabulary::from_path(path)
            .with_context(|| format!("failed to load vocabulary {}", path.display())),
        None => Ok(Vocabulary::default()),
    }
}

fn run_search(
    file: &Path,
    query: &str,
    limit: usize,
    vocab: Option<&Path>,
    builtin: bool,
    json: bool,
) -> Result<()> {
    let characters: Vec<Character> = load_items(file)?;
    let vocabulary = load_vocabulary(vocab)?;
    let options = EngineOptions {
        prefer_builtin: builtin,
        ..EngineOptions::default()
    };
    let engine = SearchEngine::new(vocabulary, options);

    let start = Instant::now();
    let index = build_index(&characters);
    let results = engine.search(&index, query);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    tracing::info!(
        records = index.len(),
        hits = results.len(),
        elapsed_ms,
        "search finished"
    );

    let shown: Vec<MatchResult> = results.iter().take(limit).cloned().collect();
    let records = engine.resolve(&index, &shown);

    if json {
        let hits: Vec<SearchHit> = shown
            .iter()
            .zip(&records)
            .map(|(result, record)| SearchHit {
                id: &result.id,
                score: result.score,
                name: &record.fields.name,
                occupation: &record.fields.occupation,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    let variants = engine.variants(query);
    section_top(&format!("SEARCH \"{}\"", truncate(query, 40)));
    row(&format!(
        " strategy: {}   records: {}   time: {}",
        ident(engine.strategy().name()),
        index.len(),
        timing_ms(elapsed_ms)
    ));
    let variant_list: Vec<&str> = variants.iter().collect();
    row(&format!(
        " variants: {}",
        dim(&truncate(&variant_list.join(", "), 66))
    ));
    section_mid(&format!("RESULTS ({} of {})", shown.len(), results.len()));
    if shown.is_empty() {
        row(&format!(" {}", dim("no matches")));
    }
    for (rank, (result, record)) in shown.iter().zip(&records).enumerate() {
        let label = format!(
            " {:>3}  {} {}  {}",
            rank + 1,
            score_value(result.score),
            pad_right(&tier_label(result.score), 5),
            ident(&truncate(&result.id, 12))
        );
        let detail = if record.fields.occupation.is_empty() {
            record.fields.name.clone()
        } else {
            format!("{} · {}", record.fields.name, record.fields.occupation)
        };
        row(&format!("{}  {}", pad_right(&label, 32), truncate(&detail, 46)));
    }
    section_bot();
    Ok(())
}

fn run_threads(file: &Path, json: bool) -> Result<()> {
    let reviews: Vec<Review> = load_items(file)?;
    let total = reviews.len();
    let tree = build_thread_tree(reviews);
    tracing::info!(reviews = total, threads = tree.len(), "threads rebuilt");

    if json {
        println!("{}", serde_json::to_string_pretty(&tree)?);
        return Ok(());
    }

    section_top(&format!("THREADS ({} from {} reviews)", tree.len(), total));
    for node in &tree {
        row(&format!(" {}", review_line(&node.review, 74)));
        for (i, reply) in node.replies.iter().enumerate() {
            let branch = if i + 1 == node.replies.len() {
                "└─"
            } else {
                "├─"
            };
            row(&format!("   {} {}", dim(branch), review_line(reply, 70)));
        }
    }
    section_bot();
    Ok(())
}

fn review_line(review: &Review, width: usize) -> String {
    let stamp = review.created_at.format("%Y-%m-%d %H:%M");
    let author = review.author.as_deref().unwrap_or("anonymous");
    let text = review.text.as_deref().unwrap_or("");
    let head = format!("{} {} {}", ident(&review.id), dim(&stamp.to_string()), author);
    let room = width.saturating_sub(visible_len(&head) + 2);
    format!("{}  {}", head, truncate(text, room))
}

fn run_variants(query: &str, vocab: Option<&Path>) -> Result<()> {
    let vocabulary = load_vocabulary(vocab)?;
    let engine = SearchEngine::builtin(vocabulary);
    for variant in engine.variants(query).iter() {
        println!("{}", variant);
    }
    Ok(())
}
