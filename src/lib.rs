//! reeltui - terminal front end for a movie recommendation API
//!
//! Search a title and get similar movies, browse by genre, and view
//! catalogue statistics, over an animated particle backdrop with a 3D
//! torus-knot on the home page.
//!
//! # Modules
//!
//! - `models` - API payloads (movies, recommendations, stats)
//! - `api` - HTTP client for the recommendation service
//! - `app` - Application state, navigation and input handling
//! - `ui` - TUI rendering, particle field and hero scene
//! - `tasks` - Runs UI actions as background requests
//! - `cli` / `commands` - Scriptable subcommands

pub mod api;
pub mod app;
pub mod autocomplete;
pub mod cli;
pub mod commands;
pub mod config;
pub mod format;
pub mod models;
pub mod tasks;
pub mod toast;
pub mod ui;

// Re-export commonly used types
pub use models::{
    HealthResponse, MovieRecord, Recommendation, RecommendationResponse, SearchBy,
    SearchResponse, StatsResponse,
};

pub use api::{ApiError, RecommendClient};
pub use app::{Action, ApiEvent, App, Section};
pub use config::Config;
