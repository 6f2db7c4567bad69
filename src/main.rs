// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use docsift::load::{categories, load_documents};
use docsift::{DocIndex, SearchSession, SessionConfig};

mod cli;
use cli::display::{format_results, stdout_is_tty};
use cli::{Cli, Commands, SessionArgs};

/// One line of a replay script.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct ScriptEvent {
    at: u64,
    #[serde(default)]
    input: Option<String>,
    #[serde(default)]
    click: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Search {
            file,
            query,
            filters,
            json,
            html,
            session,
        } => run_search(&file, &query, &filters, json, html, &session),
        Commands::Replay {
            file,
            script,
            html,
            session,
        } => run_replay(&file, &script, html, &session),
        Commands::Inspect { file } => run_inspect(&file),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Load config (file, then flag overrides) and build a session over `file`.
fn open_session(file: &Path, args: &SessionArgs) -> Result<SearchSession<DocIndex>> {
    let mut config = match &args.config {
        Some(path) => SessionConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SessionConfig::default(),
    };
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if args.escape_html {
        config.escape_html = true;
    }

    let docs = load_documents(file).with_context(|| format!("loading {}", file.display()))?;
    tracing::info!(docs = docs.len(), file = %file.display(), "documents loaded");
    SearchSession::from_documents(docs, config).context("building index")
}

fn run_search(
    file: &Path,
    query: &str,
    filters: &[String],
    json: bool,
    html: bool,
    args: &SessionArgs,
) -> Result<()> {
    let mut session = open_session(file, args)?;
    for category in filters {
        if !session.categories().contains(category) {
            tracing::warn!(category = category.as_str(), "unknown category, no result can match it");
        }
        session.on_filter_click(category, Duration::ZERO);
    }

    if json {
        let results = session.rendered_results(query);
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if !html && stdout_is_tty() {
        let results = session.rendered_results(query);
        print!("{}", format_results(&results, query));
        return Ok(());
    }

    session.on_input(query, Duration::ZERO);
    if let Some(view) = session.flush() {
        println!("{}", view.html());
    }
    Ok(())
}

fn parse_script(raw: &str) -> Result<Vec<ScriptEvent>> {
    let mut events = Vec::new();
    for (number, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        let event: ScriptEvent = serde_json::from_str(line)
            .with_context(|| format!("script line {}", number + 1))?;
        match (&event.input, &event.click) {
            (Some(_), None) | (None, Some(_)) => {}
            _ => bail!("script line {}: expected exactly one of \"input\" or \"click\"", number + 1),
        }
        if events.last().is_some_and(|prev: &ScriptEvent| prev.at > event.at) {
            bail!("script line {}: events must be in time order", number + 1);
        }
        events.push(event);
    }
    Ok(events)
}

/// Poll at `due` and print what dispatched.
fn report_dispatch(session: &mut SearchSession<DocIndex>, due: Duration, html: bool) {
    let query = session.query().to_string();
    if let Some(view) = session.poll(due) {
        println!(
            "[{:>6} ms] dispatch {:?} -> {} result(s)",
            due.as_millis(),
            query,
            view.count()
        );
        if html {
            println!("{}", view.html());
        }
    }
}

fn run_replay(file: &Path, script: &Path, html: bool, args: &SessionArgs) -> Result<()> {
    let raw = fs::read_to_string(script).with_context(|| format!("reading {}", script.display()))?;
    let events = parse_script(&raw)?;
    let mut session = open_session(file, args)?;

    for event in &events {
        let now = Duration::from_millis(event.at);
        if let Some(due) = session.next_deadline().filter(|due| *due <= now) {
            report_dispatch(&mut session, due, html);
        }
        match (&event.input, &event.click) {
            (Some(value), _) => session.on_input(value, now),
            (_, Some(category)) => session.on_filter_click(category, now),
            _ => unreachable!("validated in parse_script"),
        }
    }
    if let Some(due) = session.next_deadline() {
        report_dispatch(&mut session, due, html);
    }

    println!("{} event(s), {} search(es)", events.len(), session.searches());
    Ok(())
}

fn run_inspect(file: &Path) -> Result<()> {
    let docs = load_documents(file).with_context(|| format!("loading {}", file.display()))?;

    let mut per_category: BTreeMap<String, usize> = BTreeMap::new();
    for doc in &docs {
        *per_category.entry(doc.category.clone()).or_default() += 1;
    }
    let pages = docs
        .iter()
        .map(|doc| doc.page.as_str())
        .filter(|page| !page.is_empty())
        .collect::<std::collections::HashSet<_>>()
        .len();

    let order = categories(&docs);
    let index = DocIndex::from_documents(docs).context("building index")?;

    println!("documents:  {}", index.len());
    println!("pages:      {}", pages);
    println!("vocabulary: {} terms", index.term_count());
    println!("categories:");
    for category in &order {
        println!("  {:<16} {}", category, per_category.get(category.as_str()).copied().unwrap_or(0));
    }
    Ok(())
}
