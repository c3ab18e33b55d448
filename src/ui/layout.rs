//! Screen geometry shared by rendering and mouse hit-testing

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::app::{App, Section};

/// Header band height (bordered)
pub const HEADER_HEIGHT: u16 = 3;
/// Widest the centered content column gets
pub const MAX_COLUMN_WIDTH: u16 = 100;
/// Width reserved for the logo before the tabs
pub const LOGO_WIDTH: u16 = 14;
/// Height of a bordered single-line input
pub const INPUT_HEIGHT: u16 = 3;

/// Label drawn for a nav tab, e.g. " 2 Recommend "
pub fn tab_label(section: Section) -> String {
    format!(" {} {} ", section.index() + 1, section.label())
}

/// Regions of the screen for the current state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppLayout {
    pub header: Rect,
    /// One clickable rect per section, in [`Section::ALL`] order
    pub tabs: Vec<Rect>,
    /// Everything between header and status bar (the particle backdrop)
    pub content: Rect,
    /// Centered content column
    pub column: Rect,
    /// Home page 3D scene
    pub hero: Rect,
    /// Text input of the active section
    pub input: Option<Rect>,
    /// Suggestion dropdown under the recommend input
    pub suggestions: Option<Rect>,
    /// Result area of the active section
    pub body: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn compute(screen: Rect, app: &App) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(screen);
        let (header, content, status) = (chunks[0], chunks[1], chunks[2]);

        // Tabs sit after the logo, one space apart
        let mut tabs = Vec::with_capacity(Section::ALL.len());
        let mut x = header.x.saturating_add(LOGO_WIDTH + 2);
        for section in Section::ALL {
            let width = tab_label(section).chars().count() as u16;
            let right = header.right();
            let w = width.min(right.saturating_sub(x));
            tabs.push(Rect::new(x.min(right), header.y, w, header.height));
            x = x.saturating_add(width + 1);
        }

        let column_width = content.width.min(MAX_COLUMN_WIDTH);
        let column = Rect::new(
            content.x + (content.width - column_width) / 2,
            content.y,
            column_width,
            content.height,
        );

        // Home: 4 lines of tagline above the scene, 2 lines of hints below
        let hero = Rect::new(
            column.x,
            column.y.saturating_add(4).min(column.bottom()),
            column.width,
            column.height.saturating_sub(6),
        );

        let input = app
            .section
            .has_input()
            .then(|| Rect::new(column.x, column.y, column.width, INPUT_HEIGHT.min(column.height)));

        let body = match input {
            // Search has a one-line result count under the input
            Some(r) if app.section == Section::Search => below(column, r.bottom() + 1),
            Some(r) => below(column, r.bottom()),
            None => column,
        };

        let suggestions = match input {
            Some(r) if app.section == Section::Recommend && !app.recommend.autocomplete.is_empty() => {
                let rows = app.recommend.autocomplete.suggestions.len() as u16 + 2;
                let area = Rect::new(
                    r.x + 1,
                    r.bottom(),
                    r.width.saturating_sub(2),
                    rows.min(column.bottom().saturating_sub(r.bottom())),
                );
                (area.height > 2).then_some(area)
            }
            _ => None,
        };

        Self {
            header,
            tabs,
            content,
            column,
            hero,
            input,
            suggestions,
            body,
            status,
        }
    }

    /// Section whose tab is under `pos`
    pub fn tab_at(&self, pos: Position) -> Option<Section> {
        self.tabs
            .iter()
            .position(|r| r.contains(pos))
            .and_then(Section::from_index)
    }

    /// Suggestion row under `pos` (rows start inside the border)
    pub fn suggestion_at(&self, pos: Position) -> Option<usize> {
        let area = self.suggestions?;
        if !area.contains(pos) {
            return None;
        }
        let row = pos.y - area.y;
        if row == 0 || row + 1 >= area.height {
            return None;
        }
        Some((row - 1) as usize)
    }
}

/// Part of `column` from row `top` down
fn below(column: Rect, top: u16) -> Rect {
    let top = top.min(column.bottom());
    Rect::new(column.x, top, column.width, column.bottom() - top)
}
