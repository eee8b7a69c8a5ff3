//! Subcommand implementations.

use anyhow::Result;
use catalog_api_client::{ClientConfig, HttpCatalogStore};
use catalog_cli::{output, progress};
use catalog_core::config::ConfigSchema;
use catalog_core::error::exit_codes;
use catalog_search::{
    edit_distance, CatalogStore, MemoryCatalog, SearchEngine, SuggestionEngine,
};
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Options shared by every subcommand
pub struct Context<'a> {
    pub json: bool,
    pub schema: &'a ConfigSchema,
}

pub struct SearchRequest {
    pub query: String,
    pub page: usize,
    pub limit: usize,
    pub explain: bool,
}

/// Work that needs a catalog store
pub enum Action {
    Search(SearchRequest),
    Suggest { partial: String, limit: usize },
}

pub fn distance(ctx: &Context<'_>, a: &str, b: &str) -> Result<i32> {
    let d = edit_distance(a, b);

    if ctx.json {
        println!("{}", json!({ "a": a, "b": b, "distance": d }));
    } else {
        println!("{d}");
    }
    Ok(exit_codes::SUCCESS)
}

/// Exits with `FAILURE` when there is no match, like `grep`.
pub fn fuzzy_match(ctx: &Context<'_>, query: &str, text: &str, threshold: usize) -> Result<i32> {
    let matched = catalog_search::fuzzy_match(query, text, threshold);

    if ctx.json {
        println!(
            "{}",
            json!({ "query": query, "text": text, "threshold": threshold, "matched": matched })
        );
    } else if matched {
        output::Status::success(&format!("\"{query}\" matches within distance {threshold}"));
    } else {
        output::Status::warning(&format!("\"{query}\" does not match within distance {threshold}"));
    }

    Ok(if matched { exit_codes::SUCCESS } else { exit_codes::FAILURE })
}

/// Run `action` against the local catalog file, or the remote service when none is given
pub async fn with_store(catalog: Option<&Path>, ctx: &Context<'_>, action: Action) -> Result<i32> {
    match catalog {
        Some(path) => {
            let store = MemoryCatalog::from_path(path)?;
            tracing::debug!(items = store.len(), "Using local catalog");
            execute(Arc::new(store), ctx, action).await
        }
        None => {
            let config = ClientConfig::from_settings(&ctx.schema.store)?;
            tracing::debug!(base_url = %config.base_url, "Using remote catalog");
            execute(Arc::new(HttpCatalogStore::with_config(config)?), ctx, action).await
        }
    }
}

async fn execute<S: CatalogStore>(store: Arc<S>, ctx: &Context<'_>, action: Action) -> Result<i32> {
    match action {
        Action::Search(request) => search(store, ctx, request).await,
        Action::Suggest { partial, limit } => suggest(store, ctx, &partial, limit).await,
    }
}

async fn search<S: CatalogStore>(store: Arc<S>, ctx: &Context<'_>, request: SearchRequest) -> Result<i32> {
    let engine = SearchEngine::with_settings(store, ctx.schema.search.clone())?;

    let spinner = (!ctx.json).then(|| progress::spinner("Searching catalog..."));
    let start = Instant::now();
    let page = engine
        .search_scored(&request.query, request.page, request.limit)
        .await;
    if let Some(pb) = &spinner {
        progress::finish(pb);
    }

    if ctx.json {
        let body = if request.explain {
            serde_json::to_string_pretty(&page)?
        } else {
            serde_json::to_string_pretty(&page.map(|r| r.item))?
        };
        println!("{body}");
        return Ok(exit_codes::SUCCESS);
    }

    let limit = request.limit.min(engine.settings().max_page_size);
    output::print_page(&request.query, &page, limit, request.explain);
    println!("in {}", output::format_duration(start.elapsed()));

    Ok(exit_codes::SUCCESS)
}

async fn suggest<S: CatalogStore>(
    store: Arc<S>,
    ctx: &Context<'_>,
    partial: &str,
    limit: usize,
) -> Result<i32> {
    let engine = SuggestionEngine::with_settings(store, ctx.schema.suggest.clone())?;
    let suggestions = engine.suggest(partial, limit).await;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
    } else {
        output::print_suggestions(partial, &suggestions);
    }

    Ok(exit_codes::SUCCESS)
}
