//! Rendering tests for reeltui
//!
//! Draws full frames into a ratatui TestBackend and checks what ends up on
//! screen for each section, overlay and terminal size.

use ratatui::{backend::TestBackend, layout::Rect, Terminal};

use reeltui::app::{App, LoadingState, Section};
use reeltui::models::{
    MovieRecord, RatingRange, Recommendation, RecommendationResponse, SearchResponse, StatsResponse,
};
use reeltui::ui::render_ui;

// =============================================================================
// Helpers
// =============================================================================

fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).unwrap()
}

/// Render `app` and return the screen, one line per row
fn draw(app: &mut App, width: u16, height: u16) -> String {
    app.resize(Rect::new(0, 0, width, height));
    let mut terminal = test_terminal(width, height);
    terminal.draw(|frame| render_ui(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn sample_recommendations() -> RecommendationResponse {
    RecommendationResponse {
        query_movie: "Amadeus".into(),
        num_recommendations: Some(2),
        recommendations: vec![
            Recommendation {
                title: "The Pianist".into(),
                genre: "Drama".into(),
                rating: 8.5,
                votes: 850000,
                similarity_score: 0.87,
            },
            Recommendation {
                title: "Immortal Beloved".into(),
                genre: "Biography".into(),
                rating: 7.4,
                votes: 27000,
                similarity_score: 0.64,
            },
        ],
    }
}

// =============================================================================
// Header / status bar
// =============================================================================

#[test]
fn test_header_shows_all_tabs() {
    let mut app = App::new();
    let screen = draw(&mut app, 120, 40);

    for label in ["1 Home", "2 Recommend", "3 Search", "4 Stats"] {
        assert!(screen.contains(label), "missing tab {:?}", label);
    }
}

#[test]
fn test_status_bar_reflects_mode_and_api() {
    let mut app = App::new();
    let screen = draw(&mut app, 120, 40);
    assert!(screen.contains("NORMAL"));

    app.api_online = Some(false);
    app.navigate(Section::Recommend);
    app.focus_input();
    let screen = draw(&mut app, 120, 40);
    assert!(screen.contains("INSERT"));
    assert!(screen.contains("RECOMMEND"));
    assert!(screen.contains("API offline"));
}

// =============================================================================
// Home
// =============================================================================

#[test]
fn test_home_renders_tagline() {
    let mut app = App::new();
    let screen = draw(&mut app, 120, 40);
    assert!(screen.contains("Discover movies you'll love"));
}

#[test]
fn test_home_fallback_when_3d_disabled() {
    let mut app = App::new();
    app.hero_enabled = false;
    let screen = draw(&mut app, 120, 40);
    assert!(screen.contains("R E E L"));
}

#[test]
fn test_home_fallback_on_small_terminal() {
    let mut app = App::new();
    let screen = draw(&mut app, 60, 12);
    assert!(!app.hero_available());
    // Only the top of the reel fits
    assert!(screen.contains(".-------------------."));
}

#[test]
fn test_home_scene_draws_something() {
    let mut app = App::new();
    app.hero_enabled = false;
    let fallback = draw(&mut app, 120, 40);

    app.hero_enabled = true;
    let scene = draw(&mut app, 120, 40);
    assert_ne!(fallback, scene);
    assert!(!scene.contains("R E E L"));
}

// =============================================================================
// Recommend
// =============================================================================

#[test]
fn test_recommend_idle_prompt() {
    let mut app = App::new();
    app.navigate(Section::Recommend);
    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("FIND SIMILAR MOVIES"));
    assert!(screen.contains("Pick a movie you enjoyed"));
}

#[test]
fn test_recommend_loading_message() {
    let mut app = App::new();
    app.navigate(Section::Recommend);
    app.recommend.input.set("Heat");
    app.submit_recommend();
    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("Finding movies like Heat..."));
}

#[test]
fn test_recommend_results_render_cards() {
    let mut app = App::new();
    app.navigate(Section::Recommend);
    app.apply_recommendations(Ok(sample_recommendations()));
    app.apply_query_movie(Some(MovieRecord {
        title: "Amadeus".into(),
        genre: "Drama".into(),
        rating: 8.4,
        votes: 410000,
    }));

    let screen = draw(&mut app, 100, 40);
    assert!(screen.contains("Because you liked Amadeus"));
    assert!(screen.contains("The Pianist"));
    assert!(screen.contains("Immortal Beloved"));
    assert!(screen.contains("87%"));
    assert!(screen.contains("850.0K"));
}

#[test]
fn test_recommend_list_scrolls_to_selection() {
    let mut app = App::new();
    app.navigate(Section::Recommend);
    let recommendations = (0..12)
        .map(|i| Recommendation {
            title: format!("Sequel {}", i),
            genre: "Drama".into(),
            rating: 7.0,
            votes: 1000,
            similarity_score: 0.5,
        })
        .collect();
    app.apply_recommendations(Ok(RecommendationResponse {
        query_movie: "Original".into(),
        num_recommendations: Some(12),
        recommendations,
    }));
    app.recommend.list.selected = 11;

    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("Sequel 11"));
    assert!(!screen.contains("Sequel 0"));
}

#[test]
fn test_recommend_no_results_panel() {
    let mut app = App::new();
    app.navigate(Section::Recommend);
    app.apply_recommendations(Err(reeltui::ApiError::NotFound));
    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("No movie found"));
}

#[test]
fn test_suggestion_dropdown_rendered() {
    let mut app = App::new();
    app.navigate(Section::Recommend);
    app.focus_input();
    app.recommend.input.set("ince");
    app.recommend.autocomplete.update("ince");

    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains(" Inception "));
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_search_grid_and_count() {
    let mut app = App::new();
    app.navigate(Section::Search);
    app.apply_search_results(Ok(SearchResponse {
        query: Some("comedy".into()),
        search_by: None,
        total_results: 2,
        results: vec![
            MovieRecord {
                title: "Airplane!".into(),
                genre: "Comedy".into(),
                rating: 7.7,
                votes: 250000,
            },
            MovieRecord {
                title: "Groundhog Day".into(),
                genre: "Comedy".into(),
                rating: 8.0,
                votes: 680000,
            },
        ],
    }));

    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("BROWSE BY GENRE"));
    assert!(screen.contains("2 movies found"));
    assert!(screen.contains("Airplane!"));
    assert!(screen.contains("Groundhog Day"));
}

// =============================================================================
// Stats
// =============================================================================

#[test]
fn test_stats_loading_then_tiles() {
    let mut app = App::new();
    app.navigate(Section::Stats);
    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("Loading statistics"));

    app.apply_stats(Ok(StatsResponse {
        total_movies: 4803,
        avg_rating: 6.0921,
        avg_votes: 690.2,
        rating_range: RatingRange { min: 0.0, max: 10.0 },
    }));
    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("Total Movies"));
    assert!(screen.contains("4.8K"));
    assert!(screen.contains("6.09"));
    assert!(screen.contains("0.0 - 10.0"));
}

#[test]
fn test_stats_error_message() {
    let mut app = App::new();
    app.navigate(Section::Stats);
    app.stats.loading = LoadingState::Error("HTTP error! status: 500".into());
    let screen = draw(&mut app, 100, 30);
    assert!(screen.contains("Could not load statistics"));
}

// =============================================================================
// Toasts / sizes
// =============================================================================

#[test]
fn test_toast_drawn_bottom_right() {
    let mut app = App::new();
    app.toaster.success("Found 2 recommendations!");
    let screen = draw(&mut app, 100, 30);

    let row = screen
        .lines()
        .position(|l| l.contains("Found 2 recommendations!"))
        .expect("toast visible");
    // Content ends at row 28, toast box is three rows high
    assert_eq!(row, 27);
}

#[test]
fn test_tiny_terminals_do_not_panic() {
    for (w, h) in [(1, 1), (10, 4), (20, 6), (80, 24), (200, 60)] {
        for section in Section::ALL {
            let mut app = App::new();
            app.navigate(section);
            app.toaster.error("Error loading statistics");
            draw(&mut app, w, h);
        }
    }
}
