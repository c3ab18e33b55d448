//! Frame rendering
//!
//! Draws the whole screen from [`App`] state: particle backdrop, header
//! with nav tabs, the active section, suggestion dropdown, toast and
//! status bar. Geometry comes from [`AppLayout`] so clicks and drawing
//! agree.

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap};

use crate::app::{App, InputMode, Outcome, Section, TextInput};
use crate::toast::ToastKind;
use crate::ui::cards::{self, CARD_HEIGHT};
use crate::ui::hero::{self, HeroScene};
use crate::ui::layout::{tab_label, AppLayout, LOGO_WIDTH};
use crate::ui::Theme;

/// Widest a search-grid card gets
const GRID_CARD_WIDTH: u16 = 32;

/// Main render function - dispatches to section renderers
pub fn render_ui(frame: &mut Frame, app: &App) {
    let area = frame.area();

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Style::default().bg(Theme::BACKGROUND)), area);

    let layout = AppLayout::compute(area, app);

    app.background.render(frame, layout.content);
    render_header(frame, &layout, app);

    match app.section {
        Section::Home => render_home(frame, &layout, app),
        Section::Recommend => render_recommend(frame, &layout, app),
        Section::Search => render_search(frame, &layout, app),
        Section::Stats => render_stats(frame, &layout, app),
    }

    if let Some(dropdown) = layout.suggestions {
        render_suggestions(frame, dropdown, app);
    }

    render_status_bar(frame, layout.status, app);
    render_toast(frame, layout.content, app);
}

// =============================================================================
// Header
// =============================================================================

fn render_header(frame: &mut Frame, layout: &AppLayout, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border());
    frame.render_widget(block, layout.header);

    let logo_area = Rect::new(
        layout.header.x + 1,
        layout.header.y + 1,
        LOGO_WIDTH.min(layout.header.width.saturating_sub(2)),
        1u16.min(layout.header.height.saturating_sub(2)),
    );
    let logo = Paragraph::new(Line::from(vec![
        Span::styled("🎬 REEL", Style::default().fg(Theme::PRIMARY).bold()),
        Span::styled("TUI", Style::default().fg(Theme::SECONDARY).bold()),
    ]));
    frame.render_widget(logo, logo_area);

    for (section, rect) in Section::ALL.iter().zip(&layout.tabs) {
        if rect.width == 0 || rect.height < 3 {
            continue;
        }
        let style = if *section == app.section {
            Theme::highlighted()
        } else {
            Theme::dimmed()
        };
        let label_area = Rect::new(rect.x, rect.y + 1, rect.width, 1);
        frame.render_widget(Paragraph::new(Span::styled(tab_label(*section), style)), label_area);
    }
}

// =============================================================================
// Home
// =============================================================================

fn render_home(frame: &mut Frame, layout: &AppLayout, app: &App) {
    let column = layout.column;

    let tagline = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("Discover movies you'll love", Theme::title())),
        Line::from(Span::styled(
            "Content-based recommendations from your favourite titles",
            Theme::dimmed(),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(tagline, Rect::new(column.x, column.y, column.width, 4u16.min(column.height)));

    if app.hero_enabled && HeroScene::supports(layout.hero) {
        app.hero.render(frame, layout.hero);
    } else {
        hero::render_fallback(frame, layout.hero);
    }

    let hints_y = layout.hero.bottom();
    let hints_height = column.bottom().saturating_sub(hints_y);
    let hints = Paragraph::new(Line::from(vec![
        Span::styled(" ↵ ", Theme::keybind()),
        Span::styled("get started  ", Theme::keybind_desc()),
        Span::styled(" 2 ", Theme::keybind()),
        Span::styled("recommend  ", Theme::keybind_desc()),
        Span::styled(" 3 ", Theme::keybind()),
        Span::styled("browse genres  ", Theme::keybind_desc()),
        Span::styled(" 4 ", Theme::keybind()),
        Span::styled("stats", Theme::keybind_desc()),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(
        hints,
        Rect::new(column.x, hints_y.saturating_add(1).min(column.bottom()), column.width, hints_height.saturating_sub(1)),
    );
}

// =============================================================================
// Inputs
// =============================================================================

fn render_input(
    frame: &mut Frame,
    area: Rect,
    input: &TextInput,
    editing: bool,
    title: &str,
    placeholder: &str,
) {
    let text = if editing {
        let (before, after) = input.split_at_cursor();
        Line::from(vec![
            Span::raw(format!("⌕ {}", before)),
            Span::styled("│", Theme::input_cursor()),
            Span::raw(after.to_string()),
        ])
    } else if input.value.is_empty() {
        Line::from(Span::styled(format!("⌕ {}", placeholder), Theme::dimmed()))
    } else {
        Line::from(format!("⌕ {}", input.value))
    };

    let paragraph = Paragraph::new(text)
        .style(if editing {
            Theme::input().fg(Theme::PRIMARY)
        } else {
            Theme::input()
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(if editing {
                    Theme::border_focused()
                } else {
                    Theme::border()
                })
                .title(Span::styled(title.to_string(), Theme::title())),
        );
    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn render_message(frame: &mut Frame, area: Rect, lines: Vec<Line>) {
    let message = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(message, area);
}

// =============================================================================
// Recommend
// =============================================================================

fn render_recommend(frame: &mut Frame, layout: &AppLayout, app: &App) {
    let state = &app.recommend;
    if let Some(input) = layout.input {
        render_input(
            frame,
            input,
            &state.input,
            app.input_mode == InputMode::Editing,
            " 🎬 FIND SIMILAR MOVIES ",
            "Type a movie title, e.g. Inception (press /)",
        );
    }

    let body = layout.body;
    if state.loading.is_loading() {
        let msg = state.loading.message().unwrap_or("Loading...");
        render_message(
            frame,
            body,
            vec![Line::from(""), Line::from(Span::styled(format!("⟳ {}", msg), Theme::loading()))],
        );
        return;
    }

    match state.outcome {
        Outcome::Idle => render_message(
            frame,
            body,
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Pick a movie you enjoyed and get similar titles",
                    Theme::dimmed(),
                )),
            ],
        ),
        Outcome::NoResults => render_message(
            frame,
            body,
            vec![
                Line::from(""),
                Line::from(Span::styled("🔍 No movie found", Theme::error())),
                Line::from(Span::styled(
                    "Check the spelling or try another title",
                    Theme::dimmed(),
                )),
            ],
        ),
        Outcome::Results => render_recommendations(frame, body, app),
    }
}

fn render_recommendations(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.recommend;

    let header_height = if state.query_card.is_some() { 1 + CARD_HEIGHT } else { 1 };
    let header_height = header_height.min(area.height);
    let heading = Paragraph::new(Line::from(vec![
        Span::styled("Because you liked ", Theme::dimmed()),
        Span::styled(state.query_movie.clone(), Theme::title()),
    ]));
    frame.render_widget(heading, Rect::new(area.x, area.y, area.width, header_height.min(1)));

    if let Some(card) = &state.query_card {
        let card_area = Rect::new(area.x, area.y + 1, area.width, CARD_HEIGHT.min(header_height.saturating_sub(1)));
        cards::render_movie(frame, card_area, card, false);
    }

    let list_area = Rect::new(
        area.x,
        area.y + header_height,
        area.width,
        area.height - header_height,
    );
    let visible = (list_area.height / CARD_HEIGHT).max(1) as usize;
    let start = first_visible(state.list.selected, state.list.offset, visible);

    for (slot, (i, card)) in state.cards.iter().enumerate().skip(start).take(visible).enumerate() {
        let y = list_area.y + slot as u16 * CARD_HEIGHT;
        if y + CARD_HEIGHT > list_area.bottom() {
            break;
        }
        let rect = Rect::new(list_area.x, y, list_area.width, CARD_HEIGHT);
        frame.render_widget(Clear, rect);
        cards::render_recommendation(frame, rect, card, i == state.list.selected);
    }
}

/// First row to draw so that `selected` stays within `visible` rows
fn first_visible(selected: usize, offset: usize, visible: usize) -> usize {
    if selected < offset {
        selected
    } else if selected >= offset + visible {
        selected + 1 - visible
    } else {
        offset
    }
}

fn render_suggestions(frame: &mut Frame, area: Rect, app: &App) {
    let ac = &app.recommend.autocomplete;
    let items: Vec<ListItem> = ac
        .suggestions
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let style = if ac.highlighted == Some(i) {
                Theme::highlighted()
            } else {
                Theme::text()
            };
            ListItem::new(Line::from(Span::styled(format!(" {} ", title), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border_focused())
            .style(Style::default().bg(Theme::BACKGROUND_LIGHT)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(list, area);
}

// =============================================================================
// Genre search
// =============================================================================

fn render_search(frame: &mut Frame, layout: &AppLayout, app: &App) {
    let state = &app.search;
    if let Some(input) = layout.input {
        render_input(
            frame,
            input,
            &state.input,
            app.input_mode == InputMode::Editing,
            " 🎭 BROWSE BY GENRE ",
            "Drama, Comedy, Action... (press /)",
        );

        let count = Paragraph::new(Span::styled(state.count_label.clone(), Theme::secondary()));
        frame.render_widget(count, Rect::new(input.x + 1, input.bottom(), input.width.saturating_sub(1), 1).intersection(layout.column));
    }

    let body = layout.body;
    if state.loading.is_loading() {
        let msg = state.loading.message().unwrap_or("Searching...");
        render_message(
            frame,
            body,
            vec![Line::from(""), Line::from(Span::styled(format!("⟳ {}", msg), Theme::loading()))],
        );
        return;
    }

    match state.outcome {
        Outcome::Idle => render_message(
            frame,
            body,
            vec![
                Line::from(""),
                Line::from(Span::styled("Enter a genre to browse the catalogue", Theme::dimmed())),
            ],
        ),
        Outcome::NoResults => render_message(
            frame,
            body,
            vec![
                Line::from(""),
                Line::from(Span::styled("No movies found for this genre", Theme::dimmed())),
            ],
        ),
        Outcome::Results => render_grid(frame, body, app),
    }
}

fn render_grid(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.search;
    let columns = (area.width / GRID_CARD_WIDTH).max(1) as usize;
    let card_width = area.width / columns as u16;
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;

    let selected_row = state.list.selected / columns;
    let first_row = first_visible(selected_row, state.list.offset / columns, visible_rows);

    for (i, card) in state.cards.iter().enumerate().skip(first_row * columns) {
        let row = i / columns - first_row;
        if row >= visible_rows {
            break;
        }
        let col = i % columns;
        let rect = Rect::new(
            area.x + col as u16 * card_width,
            area.y + row as u16 * CARD_HEIGHT,
            card_width,
            CARD_HEIGHT,
        );
        if rect.bottom() > area.bottom() {
            break;
        }
        frame.render_widget(Clear, rect);
        cards::render_movie(frame, rect, card, i == state.list.selected);
    }
}

// =============================================================================
// Stats
// =============================================================================

fn render_stats(frame: &mut Frame, layout: &AppLayout, app: &App) {
    let area = layout.column;
    let state = &app.stats;

    let Some(summary) = &state.summary else {
        let line = if state.loading.is_error() {
            Line::from(Span::styled("✗ Could not load statistics", Theme::error()))
        } else {
            Line::from(Span::styled("⟳ Loading statistics...", Theme::loading()))
        };
        render_message(frame, area, vec![Line::from(""), line]);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(5), Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let title = if state.loading.is_loading() {
        Span::styled("⟳ Refreshing...", Theme::loading())
    } else {
        Span::styled("Catalogue at a glance", Theme::title())
    };
    frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), rows[0]);

    let tiles = [
        ("Total Movies", &summary.total_movies),
        ("Average Rating", &summary.avg_rating),
        ("Average Votes", &summary.avg_votes),
        ("Rating Range", &summary.rating_range),
    ];

    for (row_idx, pair) in tiles.chunks(2).enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[row_idx + 1]);
        for ((label, value), rect) in pair.iter().zip(cols.iter()) {
            render_stat_tile(frame, *rect, label, value);
        }
    }
}

fn render_stat_tile(frame: &mut Frame, area: Rect, label: &str, value: &str) {
    let tile = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(value.to_string(), Theme::accent())),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border())
            .title(Span::styled(format!(" {} ", label), Theme::secondary()))
            .style(Style::default().bg(Theme::BACKGROUND_LIGHT)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(tile, area);
}

// =============================================================================
// Overlays
// =============================================================================

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mode_indicator = match app.input_mode {
        InputMode::Normal => Span::styled(
            " NORMAL ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::PRIMARY),
        ),
        InputMode::Editing => Span::styled(
            " INSERT ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::ACCENT),
        ),
    };

    let section = Span::styled(
        format!(" {} ", app.section.label().to_uppercase()),
        Style::default().fg(Theme::DIM),
    );

    let api = match app.api_online {
        Some(true) => Span::styled(" ● API ", Theme::success()),
        Some(false) => Span::styled(" ○ API offline ", Theme::error()),
        None => Span::styled(" … API ", Theme::dimmed()),
    };

    let help = Span::styled(" q:quit  1-4/tab:sections  /:type  ↑↓:scroll  esc:close ", Theme::dimmed());

    let status = Paragraph::new(Line::from(vec![
        mode_indicator,
        section,
        api,
        Span::raw(" │ "),
        help,
    ]))
    .style(Theme::status_bar());
    frame.render_widget(status, area);
}

/// Toast in the bottom-right corner of `area`
fn render_toast(frame: &mut Frame, area: Rect, app: &App) {
    let Some(toast) = app.toaster.current() else {
        return;
    };

    let width = (toast.message.chars().count() as u16 + 4)
        .min(60)
        .min(area.width);
    let inner_width = width.saturating_sub(2).max(1);
    let lines = (toast.message.chars().count() as u16).div_ceil(inner_width).max(1);
    let height = (lines + 2).min(area.height);
    if width < 3 || height < 3 {
        return;
    }

    let rect = Rect::new(
        area.right() - width,
        area.bottom() - height,
        width,
        height,
    );

    let style = match toast.kind {
        ToastKind::Success => Theme::success(),
        ToastKind::Error => Theme::error(),
    };

    let popup = Paragraph::new(Span::styled(toast.message.clone(), Theme::text()))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(style)
                .style(Style::default().bg(Theme::BACKGROUND_LIGHT)),
        );

    frame.render_widget(Clear, rect);
    frame.render_widget(popup, rect);
}
