// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use tracing_subscriber::EnvFilter;

use lexline::{SearchEngine, Vocabulary};

mod cli;
use cli::display::{
    highlight_terms, line_label, row, score_value, section_bot, section_top, themed, BOLD, CYAN,
};
use cli::{Cli, Commands};

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Search {
            file,
            query,
            limit,
            json,
            scores,
        } => run_search(&file, &query, limit, json, scores),
        Commands::Inspect { file, terms, json } => run_inspect(&file, terms, json),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for results. `RUST_LOG` overrides
/// the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Read a whole file, or stdin when `path` is `-`.
fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read stdin")?;
        return Ok(raw);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
}

fn run_search(path: &str, query: &str, limit: usize, json: bool, scores: bool) -> Result<()> {
    let text = read_input(path)?;
    let mut engine = SearchEngine::new();
    engine.build_index(&text);

    let hits = engine.search_scored(query, limit);
    tracing::info!(path, query, hits = hits.len(), "search complete");

    if json {
        let out = serde_json::to_string_pretty(&hits).context("Failed to serialize results")?;
        println!("{}", out);
        return Ok(());
    }

    if hits.is_empty() {
        eprintln!("⚠️  No lines matched '{}'", query);
        return Ok(());
    }

    let terms = Vocabulary::from_text(query);
    let number = |pos: usize| engine.source_line(pos).unwrap_or(pos + 1);
    let width = hits
        .iter()
        .map(|hit| number(hit.line).to_string().len())
        .max()
        .unwrap_or(1);

    for hit in &hits {
        let line = highlight_terms(hit.text, &terms);
        if scores {
            println!(
                "{} {} {}",
                line_label(number(hit.line), width),
                score_value(hit.score),
                line
            );
        } else {
            println!("{}", line);
        }
    }

    Ok(())
}

fn run_inspect(path: &str, term_limit: usize, json: bool) -> Result<()> {
    let text = read_input(path)?;
    let mut engine = SearchEngine::new();
    engine.build_index(&text);
    let stats = engine.stats();

    if json {
        let terms: Vec<&str> = engine
            .vocabulary()
            .iter()
            .take(term_limit)
            .map(|t| t.as_str())
            .collect();
        let out = serde_json::json!({ "stats": stats, "terms": terms });
        let out = serde_json::to_string_pretty(&out).context("Failed to serialize stats")?;
        println!("{}", out);
        return Ok(());
    }

    section_top("INDEX");
    row(&format!(" source            {}", path));
    row(&format!(" bytes             {}", stats.text_bytes));
    row(&format!(" lines             {}", stats.lines));
    row(&format!(" indexed lines     {}", stats.indexed_lines()));
    row(&format!(" ignored lines     {}", stats.ignored_lines));
    row(&format!(" vocabulary        {}", stats.vocabulary_size));
    section_bot();

    if term_limit > 0 && !engine.vocabulary().is_empty() {
        section_top("VOCABULARY");
        for term in engine.vocabulary().iter().take(term_limit) {
            row(&format!(" {}", themed(CYAN, &[BOLD], term.as_str())));
        }
        let hidden = engine.vocabulary().len().saturating_sub(term_limit);
        if hidden > 0 {
            row(&format!(" … {} more", hidden));
        }
        section_bot();
    }

    Ok(())
}
