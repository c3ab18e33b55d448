//! CLI Command Handlers
//!
//! Each handler takes its CLI args, the API client and Output, and returns
//! an ExitCode.

use serde::Serialize;

use crate::api::{ApiError, RecommendClient};
use crate::autocomplete;
use crate::cli::{validate_count, validate_title, ExitCode, Output, RecommendCmd, SearchCmd, SuggestCmd};
use crate::config::Config;
use crate::format::{format_number, format_rating, format_similarity};
use crate::models::SearchBy;
use crate::ui::cards;

/// Map an API failure to its exit code
pub fn exit_code_for(err: &ApiError) -> ExitCode {
    match err {
        ApiError::NotFound => ExitCode::NotFound,
        ApiError::Status(_) | ApiError::RequestFailed(_) => ExitCode::NetworkError,
        ApiError::InvalidResponse(_) => ExitCode::Error,
    }
}

fn finish<T: Serialize>(output: &Output, data: &T, lines: Vec<String>) -> ExitCode {
    if let Err(e) = output.print(data, lines) {
        return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
    }
    ExitCode::Success
}

// =============================================================================
// Health Command
// =============================================================================

pub async fn health_cmd(client: &RecommendClient, output: &Output) -> ExitCode {
    output.info(format!("Checking {}...", client.base_url()));

    match client.health().await {
        Ok(health) => {
            let mut lines = vec![format!("✓ API is up at {}", client.base_url())];
            if let Some(total) = health.total_movies {
                lines.push(format!("  {} movies indexed", format_number(total)));
            }
            if let Some(loaded) = health.model_loaded {
                lines.push(format!("  model loaded: {}", loaded));
            }
            finish(output, &health, lines)
        }
        Err(e) => output.error(
            format!(
                "API not responding at {} ({}). Make sure the server is running.",
                client.base_url(),
                e
            ),
            ExitCode::NetworkError,
        ),
    }
}

// =============================================================================
// Recommend Command
// =============================================================================

pub async fn recommend_cmd(
    cmd: RecommendCmd,
    client: &RecommendClient,
    config: &Config,
    output: &Output,
) -> ExitCode {
    let title = match validate_title(&cmd.title) {
        Ok(t) => t,
        Err(e) => return output.error(e, ExitCode::InvalidArgs),
    };
    let n = match validate_count(cmd.count.unwrap_or(config.recommend_count)) {
        Ok(n) => n,
        Err(e) => return output.error(e, ExitCode::InvalidArgs),
    };

    output.info(format!("Finding movies like: {}", title));

    match client.recommend(title, n).await {
        Ok(resp) if resp.recommendations.is_empty() => output.error(
            "No movie found. Try another search!",
            ExitCode::NotFound,
        ),
        Ok(resp) => {
            let mut lines = vec![format!("Because you liked {}:", resp.query_movie)];
            lines.extend(resp.recommendations.iter().enumerate().map(|(i, rec)| {
                format!(
                    "{:>2}. {} [{}] ⭐ {} · {} votes · {} match",
                    i + 1,
                    rec.title,
                    rec.genre,
                    format_rating(rec.rating),
                    format_number(rec.votes),
                    format_similarity(rec.similarity_score)
                )
            }));
            finish(output, &resp, lines)
        }
        Err(e) if e.is_not_found() => {
            output.error("No movie found. Try another search!", ExitCode::NotFound)
        }
        Err(e) => output.error(format!("Recommendation failed: {}", e), exit_code_for(&e)),
    }
}

// =============================================================================
// Search Command
// =============================================================================

pub async fn search_cmd(
    cmd: SearchCmd,
    client: &RecommendClient,
    config: &Config,
    output: &Output,
) -> ExitCode {
    if cmd.query.trim().is_empty() {
        return output.error("Search query must not be empty", ExitCode::InvalidArgs);
    }
    let limit = match validate_count(cmd.limit.unwrap_or(config.search_limit)) {
        Ok(n) => n,
        Err(e) => return output.error(e, ExitCode::InvalidArgs),
    };
    let by = SearchBy::from(cmd.by);

    output.info(format!("Searching by {}: {}", by, cmd.query));

    match client.search(cmd.query.trim(), by, limit).await {
        Ok(resp) => {
            let mut lines = vec![cards::search_count_label(&resp)];
            lines.extend(resp.results.iter().map(|m| m.to_string()));
            finish(output, &resp, lines)
        }
        Err(e) => output.error(format!("Error searching for movies: {}", e), exit_code_for(&e)),
    }
}

// =============================================================================
// Stats Command
// =============================================================================

pub async fn stats_cmd(client: &RecommendClient, output: &Output) -> ExitCode {
    match client.stats().await {
        Ok(stats) => {
            let summary = cards::stats_summary(&stats);
            let lines = vec![
                format!("Total movies:   {}", summary.total_movies),
                format!("Average rating: {}", summary.avg_rating),
                format!("Average votes:  {}", summary.avg_votes),
                format!("Rating range:   {}", summary.rating_range),
            ];
            finish(output, &stats, lines)
        }
        Err(e) => output.error(format!("Error loading statistics: {}", e), exit_code_for(&e)),
    }
}

// =============================================================================
// Suggest Command
// =============================================================================

pub fn suggest_cmd(cmd: SuggestCmd, config: &Config, output: &Output) -> ExitCode {
    let titles = config.suggestion_titles();
    let hits = autocomplete::filter(titles.as_slice(), &cmd.prefix);
    let lines = hits.iter().map(|t| format!("🎬 {}", t)).collect();
    finish(output, &hits, lines)
}
