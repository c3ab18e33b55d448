//! Runs UI actions against the API
//!
//! Every [`Action`] becomes one spawned task issuing its request; results
//! are sent back over an unbounded channel as [`ApiEvent`]s. Tasks are
//! never cancelled, so overlapping requests all complete and their events
//! arrive in completion order.

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::api::RecommendClient;
use crate::app::{Action, ApiEvent};
use crate::models::SearchBy;

/// Spawn the request for `action`
pub fn spawn_action(
    client: &RecommendClient,
    action: Action,
    tx: UnboundedSender<ApiEvent>,
) -> JoinHandle<()> {
    let client = client.clone();
    tokio::spawn(async move { run_action(&client, action, &tx).await })
}

/// Perform `action`, sending each result to `tx`
pub async fn run_action(client: &RecommendClient, action: Action, tx: &UnboundedSender<ApiEvent>) {
    tracing::debug!(?action, "dispatch");

    // A closed channel means the UI has exited; results are dropped
    match action {
        Action::CheckHealth => {
            let _ = tx.send(ApiEvent::Health(client.health().await));
        }
        Action::Recommend { title, n } => {
            let result = client.recommend(&title, n).await;
            // The queried movie's own card is looked up once results are shown
            let query_movie = result
                .as_ref()
                .ok()
                .filter(|r| !r.recommendations.is_empty())
                .map(|r| r.query_movie.clone());
            let _ = tx.send(ApiEvent::Recommendations(result));

            if let Some(query_movie) = query_movie {
                let movie = client.movie_info(&query_movie).await;
                let _ = tx.send(ApiEvent::QueryMovie(movie));
            }
        }
        Action::SearchGenre { genre, limit } => {
            let result = client.search(&genre, SearchBy::Genre, limit).await;
            let _ = tx.send(ApiEvent::SearchResults(result));
        }
        Action::LoadStats => {
            let _ = tx.send(ApiEvent::Stats(client.stats().await));
        }
    }
}
