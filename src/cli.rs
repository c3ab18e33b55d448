//! CLI - Command Line Interface for reeltui
//!
//! Every API operation the TUI performs is scriptable. Output is JSON when
//! asked for (or when stdout is not a terminal), plain lines otherwise.
//!
//! # Examples
//!
//! ```bash
//! reeltui recommend "Inception" -n 5
//! reeltui search drama --by genre --json
//! reeltui stats
//! reeltui suggest "the"
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::models::SearchBy;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// API unreachable or returned an error status
    NetworkError = 3,
    /// The API knows no matching movie
    NotFound = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// reeltui - terminal front end for a movie recommendation API
///
/// Run without arguments to launch the interactive TUI.
/// Use subcommands for scripting.
#[derive(Parser, Debug)]
#[command(
    name = "reeltui",
    version,
    about = "Terminal front end for a movie recommendation API",
    long_about = "Find movies similar to one you like, browse by genre and \
                  look at catalogue statistics.\n\n\
                  Run without arguments to launch the interactive TUI.\n\
                  Use subcommands for automation and scripting.",
    after_help = "EXAMPLES:\n\
                  reeltui                             Launch interactive TUI\n\
                  reeltui recommend \"Inception\"       Similar movies\n\
                  reeltui search drama --by genre     Browse a genre\n\
                  reeltui stats --json                Catalogue statistics"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Base URL of the recommendation API
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Draw the static home illustration instead of the 3D scene
    #[arg(long = "no-3d")]
    pub no_3d: bool,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that the API is reachable
    Health,

    /// Movies similar to a title
    #[command(visible_alias = "rec")]
    Recommend(RecommendCmd),

    /// Search movies by title or genre
    #[command(visible_alias = "s")]
    Search(SearchCmd),

    /// Catalogue statistics
    Stats,

    /// Autocomplete suggestions for a partial title (offline)
    Suggest(SuggestCmd),
}

/// Get recommendations for a movie
#[derive(Args, Debug)]
pub struct RecommendCmd {
    /// Movie title
    #[arg(required = true)]
    pub title: String,

    /// Number of recommendations (config `recommend_count` when omitted)
    #[arg(long, short = 'n')]
    pub count: Option<u32>,
}

/// Search field for the `search` subcommand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SearchField {
    #[default]
    Title,
    Genre,
}

impl From<SearchField> for SearchBy {
    fn from(field: SearchField) -> Self {
        match field {
            SearchField::Title => SearchBy::Title,
            SearchField::Genre => SearchBy::Genre,
        }
    }
}

/// Search for movies
#[derive(Args, Debug)]
pub struct SearchCmd {
    /// Search query (title text or genre name)
    #[arg(required = true)]
    pub query: String,

    /// Field to match against
    #[arg(long, value_enum, default_value_t = SearchField::Title)]
    pub by: SearchField,

    /// Maximum number of results (config `search_limit` when omitted)
    #[arg(long, short = 'l')]
    pub limit: Option<u32>,
}

/// Run the title autocomplete
#[derive(Args, Debug)]
pub struct SuggestCmd {
    /// Partial title
    pub prefix: String,
}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Standard JSON output wrapper
#[derive(Debug, Serialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data: the JSON envelope, or the given text lines
    pub fn print<T: Serialize>(&self, data: &T, lines: Vec<String>) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            for line in lines {
                println!("{}", line);
            }
        }
        Ok(())
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Validation
// =============================================================================

/// A title must contain something besides whitespace
pub fn validate_title(title: &str) -> Result<&str, &'static str> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        Err("Please enter a movie title")
    } else {
        Ok(trimmed)
    }
}

/// Counts and limits must be at least 1
pub fn validate_count(n: u32) -> Result<u32, &'static str> {
    if n == 0 {
        Err("Count must be at least 1")
    } else {
        Ok(n)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_is_tui_mode() {
        let cli = Cli::parse_from::<_, &str>([]);
        assert!(!cli.is_cli_mode());
        assert!(!cli.no_3d);
    }

    #[test]
    fn test_recommend_command() {
        let cli = Cli::parse_from(["reeltui", "recommend", "Inception", "-n", "5"]);
        assert!(cli.is_cli_mode());
        if let Some(Command::Recommend(cmd)) = cli.command {
            assert_eq!(cmd.title, "Inception");
            assert_eq!(cmd.count, Some(5));
        } else {
            panic!("Expected Recommend command");
        }
    }

    #[test]
    fn test_search_defaults_to_title() {
        let cli = Cli::parse_from(["reeltui", "search", "amadeus"]);
        if let Some(Command::Search(cmd)) = cli.command {
            assert_eq!(cmd.by, SearchField::Title);
            assert_eq!(cmd.limit, None);
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_search_by_genre() {
        let cli = Cli::parse_from(["reeltui", "search", "drama", "--by", "genre", "-l", "10"]);
        if let Some(Command::Search(cmd)) = cli.command {
            assert_eq!(SearchBy::from(cmd.by), SearchBy::Genre);
            assert_eq!(cmd.limit, Some(10));
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "reeltui",
            "--json",
            "--quiet",
            "--api-url",
            "http://movies.lan:5000",
            "stats",
        ]);
        assert!(cli.json);
        assert!(cli.quiet);
        assert_eq!(cli.api_url.as_deref(), Some("http://movies.lan:5000"));
    }

    #[test]
    fn test_no_3d_flag() {
        let cli = Cli::parse_from(["reeltui", "--no-3d"]);
        assert!(cli.no_3d);
        assert!(!cli.is_cli_mode());
    }

    #[test]
    fn test_validate_title() {
        assert_eq!(validate_title("  Heat "), Ok("Heat"));
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn test_validate_count() {
        assert_eq!(validate_count(8), Ok(8));
        assert!(validate_count(0).is_err());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::Error), 1);
        assert_eq!(i32::from(ExitCode::InvalidArgs), 2);
        assert_eq!(i32::from(ExitCode::NetworkError), 3);
        assert_eq!(i32::from(ExitCode::NotFound), 4);
    }

    #[test]
    fn test_json_output_shape() {
        let ok = serde_json::to_value(JsonOutput::success(vec![1, 2])).unwrap();
        assert_eq!(ok, serde_json::json!({"data": [1, 2]}));

        let err = serde_json::to_value(JsonOutput::<()>::error_msg("nope", ExitCode::NotFound)).unwrap();
        assert_eq!(err, serde_json::json!({"error": "nope", "exit_code": 4}));
    }
}
