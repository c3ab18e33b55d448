//! App state and core application logic
//!
//! Manages the section state machine, text input, and the per-section view
//! state. Input handlers never perform I/O: they return an [`Action`] that the
//! event loop turns into an API request, and the request's result comes back
//! as an [`ApiEvent`] applied with [`App::apply`].

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use serde::{Deserialize, Serialize};

use crate::api::{ApiError, ApiResult};
use crate::autocomplete::Autocomplete;
use crate::config::Config;
use crate::models::{
    HealthResponse, MovieRecord, RecommendationResponse, SearchResponse, StatsResponse,
};
use crate::toast::Toaster;
use crate::ui::background::ParticleField;
use crate::ui::cards::{self, MovieCard, RecommendationCard, StatsSummary};
use crate::ui::hero::HeroScene;
use crate::ui::layout::AppLayout;

// =============================================================================
// Sections
// =============================================================================

/// Page section; exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Landing page with the hero scene
    #[default]
    Home,
    /// Title search with autocomplete and recommendation cards
    Recommend,
    /// Genre search grid
    Search,
    /// Catalogue statistics
    Stats,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Recommend,
        Section::Search,
        Section::Stats,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Recommend => "Recommend",
            Section::Search => "Search",
            Section::Stats => "Stats",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Section::Home => 0,
            Section::Recommend => 1,
            Section::Search => 2,
            Section::Stats => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Section> {
        Self::ALL.get(i).copied()
    }

    pub fn next(&self) -> Section {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Section {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether the section has a text input
    pub fn has_input(&self) -> bool {
        matches!(self, Section::Recommend | Section::Search)
    }
}

// =============================================================================
// Input Mode
// =============================================================================

/// Current input mode for keyboard handling
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Text input mode (search box focused)
    Editing,
}

// =============================================================================
// Loading State
// =============================================================================

/// Loading state for async operations
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadingState {
    /// Idle - no loading in progress
    #[default]
    Idle,
    /// Loading with optional message
    Loading(Option<String>),
    /// Error with message
    Error(String),
}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadingState::Error(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            LoadingState::Loading(Some(msg)) => Some(msg),
            LoadingState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Which result panel a section shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Results are displayed
    Results,
    /// The "no results" panel is displayed
    NoResults,
}

// =============================================================================
// Actions and API events
// =============================================================================

/// Request the event loop should perform on behalf of the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Probe `/health`
    CheckHealth,
    /// Fetch recommendations for a title
    Recommend { title: String, n: u32 },
    /// Search movies by genre
    SearchGenre { genre: String, limit: u32 },
    /// Fetch catalogue statistics
    LoadStats,
}

/// Completed API request, delivered back to the UI
#[derive(Debug)]
pub enum ApiEvent {
    Health(ApiResult<HealthResponse>),
    Recommendations(ApiResult<RecommendationResponse>),
    /// Details for the queried movie, looked up after recommendations arrive
    QueryMovie(Option<MovieRecord>),
    SearchResults(ApiResult<SearchResponse>),
    Stats(ApiResult<StatsResponse>),
}

// =============================================================================
// Selection State (per-view)
// =============================================================================

/// Selection state for list views
#[derive(Debug, Clone, Default)]
pub struct ListState {
    /// Currently selected index
    pub selected: usize,
    /// Scroll offset for viewport
    pub offset: usize,
    /// Total number of items
    pub len: usize,
}

impl ListState {
    pub fn new(len: usize) -> Self {
        Self {
            selected: 0,
            offset: 0,
            len,
        }
    }

    /// Move selection up
    pub fn up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            if self.selected < self.offset {
                self.offset = self.selected;
            }
        }
    }

    /// Move selection down
    pub fn down(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    /// Move selection up by a page
    pub fn page_up(&mut self, page_size: usize) {
        self.selected = self.selected.saturating_sub(page_size);
        if self.selected < self.offset {
            self.offset = self.selected;
        }
    }

    /// Move selection down by a page
    pub fn page_down(&mut self, page_size: usize) {
        if self.len > 0 {
            self.selected = (self.selected + page_size).min(self.len - 1);
        }
    }

    /// Jump to first item (scroll to top)
    pub fn first(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    /// Jump to last item
    pub fn last(&mut self) {
        if self.len > 0 {
            self.selected = self.len - 1;
        }
    }

    /// Replace the list contents, scrolled to the top
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.first();
    }
}

// =============================================================================
// Text Input
// =============================================================================

/// Single-line text input; `cursor` counts characters, not bytes
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Insert character at cursor
    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.value.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index(self.cursor);
            self.value.remove(idx);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let idx = self.byte_index(self.cursor);
            self.value.remove(idx);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Replace the whole value, cursor at the end
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor_end();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Text before and after the cursor, for drawing the caret
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.byte_index(self.cursor))
    }

    /// Apply an editing key; returns true if the value changed
    fn edit(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char(c) => {
                self.insert(c);
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete();
                true
            }
            KeyCode::Left => {
                self.cursor_left();
                false
            }
            KeyCode::Right => {
                self.cursor_right();
                false
            }
            KeyCode::Home => {
                self.cursor_home();
                false
            }
            KeyCode::End => {
                self.cursor_end();
                false
            }
            _ => false,
        }
    }
}

// =============================================================================
// View-Specific State
// =============================================================================

/// Recommend section state
#[derive(Debug, Clone, Default)]
pub struct RecommendState {
    /// Movie title input
    pub input: TextInput,
    /// Suggestions under the input
    pub autocomplete: Autocomplete,
    /// Request in flight
    pub loading: LoadingState,
    /// Which panel is visible
    pub outcome: Outcome,
    /// Title the displayed recommendations were requested for
    pub query_movie: String,
    /// Details of the queried movie, once looked up
    pub query_card: Option<MovieCard>,
    /// Rendered cards, in relevance order
    pub cards: Vec<RecommendationCard>,
    /// Card list state
    pub list: ListState,
}

/// Genre search section state
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Genre input
    pub input: TextInput,
    pub loading: LoadingState,
    pub outcome: Outcome,
    /// "N movies found"
    pub count_label: String,
    pub cards: Vec<MovieCard>,
    pub list: ListState,
}

/// Statistics section state
#[derive(Debug, Clone, Default)]
pub struct StatsState {
    pub loading: LoadingState,
    pub summary: Option<StatsSummary>,
}

/// Pointer position, normalized to [-1, 1] with y pointing up
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    /// Normalize a terminal cell position against the screen size
    pub fn from_cell(column: u16, row: u16, screen: Rect) -> Self {
        let w = f32::from(screen.width.max(1));
        let h = f32::from(screen.height.max(1));
        Self {
            x: (f32::from(column) / w) * 2.0 - 1.0,
            y: -(f32::from(row) / h) * 2.0 + 1.0,
        }
    }
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Active section
    pub section: Section,
    /// Whether the app is running
    pub running: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Transient notification
    pub toaster: Toaster,
    /// Result of the startup health probe
    pub api_online: Option<bool>,
    /// API base URL, for messages
    pub api_url: String,

    // Request sizing
    pub recommend_count: u32,
    pub search_limit: u32,

    // View-specific states
    pub recommend: RecommendState,
    pub search: SearchState,
    pub stats: StatsState,

    // Decoration
    pub pointer: Pointer,
    pub background: ParticleField,
    pub hero: HeroScene,
    /// 3D hero allowed by config / flags
    pub hero_enabled: bool,

    /// Last known terminal area
    pub screen: Rect,
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(&Config::default(), crate::api::DEFAULT_API_URL)
    }
}

impl App {
    /// Create a new App instance with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an App from configuration
    pub fn with_config(config: &Config, api_url: impl Into<String>) -> Self {
        Self {
            section: config.start_section,
            running: true,
            input_mode: InputMode::Normal,
            toaster: Toaster::default(),
            api_online: None,
            api_url: api_url.into(),

            recommend_count: config.recommend_count,
            search_limit: config.search_limit,

            recommend: RecommendState {
                autocomplete: Autocomplete::new(config.suggestion_titles()),
                ..RecommendState::default()
            },
            search: SearchState::default(),
            stats: StatsState::default(),

            pointer: Pointer::default(),
            background: ParticleField::new(config.particle_count),
            hero: HeroScene::new(),
            hero_enabled: config.hero_3d,

            screen: Rect::default(),
        }
    }

    /// Requests to issue when the UI starts
    pub fn startup_actions(&mut self) -> Vec<Action> {
        let mut actions = vec![Action::CheckHealth];
        if self.section == Section::Stats {
            self.stats.loading = LoadingState::Loading(None);
            actions.push(Action::LoadStats);
        }
        actions
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Activate a section. Scrolls the new section to the top; activating
    /// Stats always requests a fresh load.
    pub fn navigate(&mut self, section: Section) -> Option<Action> {
        tracing::debug!(from = ?self.section, to = ?section, "navigate");
        self.section = section;
        self.leave_input();

        match section {
            Section::Recommend => self.recommend.list.first(),
            Section::Search => self.search.list.first(),
            Section::Home | Section::Stats => {}
        }

        if section == Section::Stats {
            self.stats.loading = LoadingState::Loading(Some("Loading statistics...".into()));
            Some(Action::LoadStats)
        } else {
            None
        }
    }

    /// Focus the section's input, jumping to Recommend from Home
    pub fn focus_input(&mut self) -> Option<Action> {
        let action = if self.section == Section::Home {
            self.navigate(Section::Recommend)
        } else {
            None
        };
        if self.section.has_input() {
            self.input_mode = InputMode::Editing;
        }
        action
    }

    /// Leave the input; suggestions are dropped with it
    pub fn leave_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.recommend.autocomplete.clear();
    }

    // -------------------------------------------------------------------------
    // Submissions
    // -------------------------------------------------------------------------

    /// Request recommendations for the title in the input
    pub fn submit_recommend(&mut self) -> Option<Action> {
        let title = self.recommend.input.value.trim().to_string();
        if title.is_empty() {
            self.toaster.error("Please enter a movie title");
            return None;
        }

        tracing::info!(%title, "requesting recommendations");
        self.recommend.loading = LoadingState::Loading(Some(format!("Finding movies like {}...", title)));
        Some(Action::Recommend {
            title,
            n: self.recommend_count,
        })
    }

    /// Take a suggestion: fill the input, clear the list, and fetch
    pub fn select_suggestion(&mut self, index: usize) -> Option<Action> {
        let title = self.recommend.autocomplete.select(index)?;
        self.recommend.input.set(title);
        self.input_mode = InputMode::Normal;
        self.submit_recommend()
    }

    /// Search by the genre in the input
    pub fn submit_genre_search(&mut self) -> Option<Action> {
        let genre = self.search.input.value.trim().to_string();
        if genre.is_empty() {
            self.toaster.error("Please enter a genre");
            return None;
        }

        tracing::info!(%genre, "searching by genre");
        self.search.loading = LoadingState::Loading(Some(format!("Searching {}...", genre)));
        Some(Action::SearchGenre {
            genre,
            limit: self.search_limit,
        })
    }

    // -------------------------------------------------------------------------
    // Applying API results
    // -------------------------------------------------------------------------

    /// Apply a completed request. Results are applied in arrival order with
    /// no check for newer in-flight requests.
    pub fn apply(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Health(result) => self.apply_health(result),
            ApiEvent::Recommendations(result) => self.apply_recommendations(result),
            ApiEvent::QueryMovie(movie) => self.apply_query_movie(movie),
            ApiEvent::SearchResults(result) => self.apply_search_results(result),
            ApiEvent::Stats(result) => self.apply_stats(result),
        }
    }

    pub fn apply_health(&mut self, result: ApiResult<HealthResponse>) {
        match result {
            Ok(health) => {
                tracing::info!(status = %health.status, "API is connected");
                self.api_online = Some(true);
            }
            Err(e) => {
                tracing::warn!(error = %e, "API health check failed");
                self.api_online = Some(false);
                // Only an unreachable server gets the warning; error statuses stay quiet
                if matches!(e, ApiError::RequestFailed(_)) {
                    self.toaster.error(format!(
                        "⚠ API not responding. Make sure the server is running on {}",
                        self.api_url
                    ));
                }
            }
        }
    }

    pub fn apply_recommendations(&mut self, result: ApiResult<RecommendationResponse>) {
        self.recommend.loading = LoadingState::Idle;

        match result {
            Ok(resp) if resp.recommendations.is_empty() => self.show_no_results(),
            Ok(resp) => {
                let cards = cards::recommendation_cards(&resp);
                let count = cards.len();
                self.recommend.query_movie = resp.query_movie;
                self.recommend.query_card = None;
                self.recommend.list.reset(count);
                self.recommend.cards = cards;
                self.recommend.outcome = Outcome::Results;
                self.toaster.success(format!("✨ Found {} recommendations!", count));
            }
            Err(ApiError::NotFound) => self.show_no_results(),
            Err(e) => {
                tracing::warn!(error = %e, "recommendation request failed");
                self.toaster
                    .error("Error connecting to API. Make sure the server is running.");
            }
        }
    }

    fn show_no_results(&mut self) {
        self.recommend.outcome = Outcome::NoResults;
        self.recommend.cards.clear();
        self.recommend.query_card = None;
        self.recommend.list.reset(0);
        self.toaster.error("🔍 No movie found. Try another search!");
    }

    pub fn apply_query_movie(&mut self, movie: Option<MovieRecord>) {
        if let Some(movie) = movie {
            self.recommend.query_card = Some(cards::movie_card(&movie));
        }
    }

    pub fn apply_search_results(&mut self, result: ApiResult<SearchResponse>) {
        self.search.loading = LoadingState::Idle;

        match result {
            Ok(resp) if resp.results.is_empty() => {
                self.search.outcome = Outcome::NoResults;
                self.search.cards.clear();
                self.search.count_label.clear();
                self.search.list.reset(0);
            }
            Ok(resp) => {
                self.search.count_label = cards::search_count_label(&resp);
                self.search.cards = cards::search_cards(&resp);
                self.search.list.reset(self.search.cards.len());
                self.search.outcome = Outcome::Results;
            }
            Err(e) => {
                tracing::warn!(error = %e, "genre search failed");
                self.toaster.error("Error searching for movies");
            }
        }
    }

    pub fn apply_stats(&mut self, result: ApiResult<StatsResponse>) {
        match result {
            Ok(stats) => {
                self.stats.summary = Some(cards::stats_summary(&stats));
                self.stats.loading = LoadingState::Idle;
            }
            Err(e) => {
                tracing::warn!(error = %e, "stats request failed");
                self.stats.loading = LoadingState::Error(e.to_string());
                self.toaster.error("Error loading statistics");
            }
        }
    }

    // -------------------------------------------------------------------------
    // Frame / resize
    // -------------------------------------------------------------------------

    /// Track the terminal size; drawing surfaces follow it
    pub fn resize(&mut self, screen: Rect) {
        self.screen = screen;
        let layout = AppLayout::compute(screen, self);
        self.background.resize_to_area(layout.content);
        self.hero.resize_to_area(layout.hero);
    }

    /// Advance animations and expire the toast
    pub fn on_frame(&mut self, now: Instant) {
        self.toaster.tick(now);
        self.background.step();
        self.hero.update(now, self.pointer);
    }

    /// Whether the 3D hero can be drawn in the current layout
    pub fn hero_available(&self) -> bool {
        let layout = AppLayout::compute(self.screen, self);
        self.hero_enabled && HeroScene::supports(layout.hero)
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle keyboard event, returning the request it triggers, if any
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        // Global quit shortcut
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return None;
        }

        if self.input_mode == InputMode::Editing {
            self.handle_editing_key(key)
        } else {
            self.handle_normal_key(key)
        }
    }

    /// Handle keys in editing (text input) mode
    fn handle_editing_key(&mut self, key: KeyEvent) -> Option<Action> {
        match self.section {
            Section::Recommend => self.handle_recommend_input(key),
            Section::Search => self.handle_search_input(key),
            Section::Home | Section::Stats => {
                self.input_mode = InputMode::Normal;
                None
            }
        }
    }

    fn handle_recommend_input(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Tab => {
                self.leave_input();
                None
            }
            KeyCode::Enter => match self.recommend.autocomplete.highlighted {
                Some(i) => self.select_suggestion(i),
                None => {
                    self.leave_input();
                    self.submit_recommend()
                }
            },
            KeyCode::Down => {
                self.recommend.autocomplete.next();
                None
            }
            KeyCode::Up => {
                self.recommend.autocomplete.prev();
                None
            }
            code => {
                if self.recommend.input.edit(code) {
                    let value = self.recommend.input.value.clone();
                    self.recommend.autocomplete.update(&value);
                }
                None
            }
        }
    }

    fn handle_search_input(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Tab => {
                self.leave_input();
                None
            }
            KeyCode::Enter => {
                self.leave_input();
                self.submit_genre_search()
            }
            code => {
                self.search.input.edit(code);
                None
            }
        }
    }

    /// Handle keys in normal navigation mode
    fn handle_normal_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                None
            }
            KeyCode::Char(c @ '1'..='4') => {
                let idx = (c as usize) - ('1' as usize);
                Section::from_index(idx).and_then(|s| self.navigate(s))
            }
            KeyCode::Tab => self.navigate(self.section.next()),
            KeyCode::BackTab => self.navigate(self.section.prev()),
            KeyCode::Char('/') | KeyCode::Char('i') => self.focus_input(),
            KeyCode::Esc => {
                self.toaster.dismiss();
                None
            }
            KeyCode::Enter => match self.section {
                Section::Recommend => self.submit_recommend(),
                Section::Search => self.submit_genre_search(),
                Section::Home => self.navigate(Section::Recommend),
                Section::Stats => None,
            },
            _ => {
                self.scroll_key(key.code);
                None
            }
        }
    }

    /// Scroll the active result list
    fn scroll_key(&mut self, code: KeyCode) {
        let list = match self.section {
            Section::Recommend => &mut self.recommend.list,
            Section::Search => &mut self.search.list,
            Section::Home | Section::Stats => return,
        };
        match code {
            KeyCode::Up | KeyCode::Char('k') => list.up(),
            KeyCode::Down | KeyCode::Char('j') => list.down(),
            KeyCode::PageUp => list.page_up(10),
            KeyCode::PageDown => list.page_down(10),
            KeyCode::Home | KeyCode::Char('g') => list.first(),
            KeyCode::End | KeyCode::Char('G') => list.last(),
            _ => {}
        }
    }

    // -------------------------------------------------------------------------
    // Mouse Event Handling
    // -------------------------------------------------------------------------

    /// Handle a mouse event against the current layout
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        self.pointer = Pointer::from_cell(mouse.column, mouse.row, self.screen);

        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }

        let layout = AppLayout::compute(self.screen, self);
        let pos = Position::new(mouse.column, mouse.row);

        if let Some(section) = layout.tab_at(pos) {
            return self.navigate(section);
        }

        if self.section == Section::Recommend {
            if let Some(i) = layout.suggestion_at(pos) {
                return self.select_suggestion(i);
            }
        }

        if layout.input.is_some_and(|r| r.contains(pos)) {
            self.input_mode = InputMode::Editing;
            return None;
        }

        // Clicking anywhere else closes the suggestion list
        self.leave_input();
        None
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Recommendation;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    // -------------------------------------------------------------------------
    // ListState Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_list_state_navigation() {
        let mut list = ListState::new(5);
        list.down();
        list.down();
        list.down();
        list.down();
        list.down();
        assert_eq!(list.selected, 4);

        list.up();
        assert_eq!(list.selected, 3);

        list.first();
        assert_eq!(list.selected, 0);
        assert_eq!(list.offset, 0);
    }

    // -------------------------------------------------------------------------
    // TextInput Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_text_input_editing() {
        let mut input = TextInput::default();
        for c in "hello".chars() {
            input.insert(c);
        }
        input.cursor_left();
        input.cursor_left();
        input.insert('X');
        assert_eq!(input.value, "helXlo");

        input.backspace();
        assert_eq!(input.value, "hello");

        input.cursor_home();
        input.delete();
        assert_eq!(input.value, "ello");
    }

    #[test]
    fn test_text_input_multibyte() {
        let mut input = TextInput::default();
        input.set("Amélie");
        input.cursor_left();
        input.cursor_left();
        input.cursor_left();
        input.backspace();
        assert_eq!(input.value, "Amlie");
        assert_eq!(input.split_at_cursor(), ("Am", "lie"));
    }

    // -------------------------------------------------------------------------
    // Navigation Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_section_cycle() {
        assert_eq!(Section::Home.next(), Section::Recommend);
        assert_eq!(Section::Stats.next(), Section::Home);
        assert_eq!(Section::Home.prev(), Section::Stats);
    }

    #[test]
    fn test_navigate_stats_triggers_load() {
        let mut app = App::new();
        assert_eq!(app.navigate(Section::Stats), Some(Action::LoadStats));
        assert!(app.stats.loading.is_loading());

        // Re-activating loads again
        assert_eq!(app.navigate(Section::Stats), Some(Action::LoadStats));
    }

    #[test]
    fn test_navigate_other_sections_trigger_nothing() {
        let mut app = App::new();
        assert_eq!(app.navigate(Section::Recommend), None);
        assert_eq!(app.navigate(Section::Search), None);
        assert_eq!(app.navigate(Section::Home), None);
    }

    #[test]
    fn test_navigate_scrolls_to_top() {
        let mut app = App::new();
        app.recommend.list = ListState::new(10);
        app.recommend.list.selected = 7;
        app.recommend.list.offset = 3;

        app.navigate(Section::Recommend);
        assert_eq!(app.recommend.list.selected, 0);
        assert_eq!(app.recommend.list.offset, 0);
    }

    #[test]
    fn test_number_keys_navigate() {
        let mut app = App::new();
        assert_eq!(app.handle_key(key(KeyCode::Char('4'))), Some(Action::LoadStats));
        assert_eq!(app.section, Section::Stats);
        assert_eq!(app.handle_key(key(KeyCode::Char('3'))), None);
        assert_eq!(app.section, Section::Search);
    }

    #[test]
    fn test_startup_actions() {
        let mut app = App::new();
        assert_eq!(app.startup_actions(), vec![Action::CheckHealth]);

        let config = Config {
            start_section: Section::Stats,
            ..Config::default()
        };
        let mut app = App::with_config(&config, "http://x");
        assert_eq!(
            app.startup_actions(),
            vec![Action::CheckHealth, Action::LoadStats]
        );
    }

    // -------------------------------------------------------------------------
    // Autocomplete / Submit Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_typing_updates_suggestions() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('/')));
        assert_eq!(app.section, Section::Recommend);
        assert_eq!(app.input_mode, InputMode::Editing);

        type_text(&mut app, "in");
        assert!(app
            .recommend
            .autocomplete
            .suggestions
            .contains(&"Inception".to_string()));

        app.handle_key(key(KeyCode::Backspace));
        app.handle_key(key(KeyCode::Backspace));
        assert!(app.recommend.autocomplete.is_empty());
    }

    #[test]
    fn test_enter_submits_title() {
        let mut app = App::new();
        app.focus_input();
        type_text(&mut app, "Heat");

        let action = app.handle_key(key(KeyCode::Enter));
        assert_eq!(
            action,
            Some(Action::Recommend {
                title: "Heat".into(),
                n: 8
            })
        );
        assert!(app.recommend.loading.is_loading());
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_enter_on_highlighted_suggestion_selects_it() {
        let mut app = App::new();
        app.focus_input();
        type_text(&mut app, "wonk");
        app.handle_key(key(KeyCode::Down));

        let action = app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.recommend.input.value, "Wonka");
        assert!(app.recommend.autocomplete.is_empty());
        assert!(matches!(action, Some(Action::Recommend { ref title, .. }) if title == "Wonka"));
    }

    #[test]
    fn test_empty_title_raises_toast() {
        let mut app = App::new();
        app.focus_input();
        type_text(&mut app, "   ");
        assert_eq!(app.handle_key(key(KeyCode::Enter)), None);
        assert_eq!(
            app.toaster.current().map(|t| t.message.as_str()),
            Some("Please enter a movie title")
        );
    }

    #[test]
    fn test_escape_clears_suggestions() {
        let mut app = App::new();
        app.focus_input();
        type_text(&mut app, "the");
        assert!(!app.recommend.autocomplete.is_empty());

        app.handle_key(key(KeyCode::Esc));
        assert!(app.recommend.autocomplete.is_empty());
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.running);

        let mut app = App::new();
        app.focus_input();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    // -------------------------------------------------------------------------
    // Apply Tests
    // -------------------------------------------------------------------------

    fn rec(title: &str, score: f64) -> Recommendation {
        Recommendation {
            title: title.into(),
            genre: "Drama".into(),
            rating: 7.5,
            votes: 1200,
            similarity_score: score,
        }
    }

    #[test]
    fn test_apply_recommendations_results() {
        let mut app = App::new();
        app.apply_recommendations(Ok(RecommendationResponse {
            query_movie: "amadeus".into(),
            num_recommendations: Some(2),
            recommendations: vec![rec("A", 0.9), rec("B", 0.5)],
        }));

        assert_eq!(app.recommend.outcome, Outcome::Results);
        assert_eq!(app.recommend.cards.len(), 2);
        assert_eq!(app.recommend.cards[0].similarity, "90%");
        assert_eq!(app.recommend.list.len, 2);
    }

    #[test]
    fn test_apply_recommendations_not_found() {
        let mut app = App::new();
        app.apply_recommendations(Err(ApiError::NotFound));
        assert_eq!(app.recommend.outcome, Outcome::NoResults);
        assert!(app.toaster.current().is_some());
    }

    #[test]
    fn test_apply_recommendations_empty_list() {
        let mut app = App::new();
        app.apply_recommendations(Ok(RecommendationResponse {
            query_movie: "x".into(),
            num_recommendations: None,
            recommendations: vec![],
        }));
        assert_eq!(app.recommend.outcome, Outcome::NoResults);
    }

    #[test]
    fn test_apply_recommendations_generic_error_keeps_panel() {
        let mut app = App::new();
        app.apply_recommendations(Ok(RecommendationResponse {
            query_movie: "x".into(),
            num_recommendations: None,
            recommendations: vec![rec("A", 0.9)],
        }));
        app.apply_recommendations(Err(ApiError::Status(500)));

        assert_eq!(app.recommend.outcome, Outcome::Results);
        assert_eq!(app.recommend.cards.len(), 1);
        assert_eq!(
            app.toaster.current().map(|t| t.kind),
            Some(crate::toast::ToastKind::Error)
        );
    }

    #[test]
    fn test_apply_stats_error() {
        let mut app = App::new();
        app.apply_stats(Err(ApiError::Status(502)));
        assert!(app.stats.loading.is_error());
        assert!(app.stats.summary.is_none());
    }

    #[test]
    fn test_pointer_normalization() {
        let screen = Rect::new(0, 0, 100, 50);
        let p = Pointer::from_cell(0, 0, screen);
        assert_eq!(p, Pointer { x: -1.0, y: 1.0 });
        let p = Pointer::from_cell(50, 25, screen);
        assert_eq!(p, Pointer { x: 0.0, y: 0.0 });
    }
}
