//! Violet/cyan theme for reeltui
//!
//! Color palette and style helpers for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// Color palette
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #0b0b14 (night blue)
    pub const BACKGROUND: Color = Color::Rgb(0x0b, 0x0b, 0x14);

    /// Primary: #8b5cf6 (violet)
    pub const PRIMARY: Color = Color::Rgb(0x8b, 0x5c, 0xf6);

    /// Secondary: #06b6d4 (cyan glow)
    pub const SECONDARY: Color = Color::Rgb(0x06, 0xb6, 0xd4);

    /// Accent: #fbbf24 (star gold)
    pub const ACCENT: Color = Color::Rgb(0xfb, 0xbf, 0x24);

    /// Text: #e5e7eb (soft white)
    pub const TEXT: Color = Color::Rgb(0xe5, 0xe7, 0xeb);

    /// Dim: #6b7280 (slate)
    pub const DIM: Color = Color::Rgb(0x6b, 0x72, 0x80);

    /// Success: #10b981 (emerald)
    pub const SUCCESS: Color = Color::Rgb(0x10, 0xb9, 0x81);

    /// Error: #ef4444 (red)
    pub const ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);

    /// Hero mesh base: white, tinted towards SECONDARY by the emissive pulse
    pub const MESH: Color = Color::Rgb(0xff, 0xff, 0xff);

    // ═══════════════════════════════════════════════════════════════════════
    // DERIVED COLORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Slightly lighter background for panels/cards
    pub const BACKGROUND_LIGHT: Color = Color::Rgb(0x16, 0x16, 0x26);

    /// Border color (dim violet)
    pub const BORDER: Color = Color::Rgb(0x4c, 0x3a, 0x80);

    /// Border color when focused
    pub const BORDER_FOCUSED: Color = Self::PRIMARY;

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND)
    }

    /// Active tab / highlighted item
    pub fn highlighted() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Dimmed/muted text
    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default()
            .fg(Self::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    /// Title/header style
    pub fn title() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn secondary() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    /// Ratings
    pub fn accent() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::BORDER_FOCUSED)
            .add_modifier(Modifier::BOLD)
    }

    /// Similarity badge
    pub fn badge() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Genre tags
    pub fn genre() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    pub fn input() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    pub fn input_cursor() -> Style {
        Style::default().fg(Self::BACKGROUND).bg(Self::PRIMARY)
    }

    /// Keybinding hint style
    pub fn keybind() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    /// Keybinding description style
    pub fn keybind_desc() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    /// Loading/spinner indicator
    pub fn loading() -> Style {
        Style::default()
            .fg(Self::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Extract RGB tuple from ratatui Color (only works for Rgb variant)
fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}

/// Mix `fg` over `bg` with `alpha` in [0, 1]. Terminals have no
/// transparency, so faded strokes are drawn in the blended color.
pub fn blend(fg: Color, bg: Color, alpha: f64) -> Color {
    let (Some(f), Some(b)) = (color_to_rgb(fg), color_to_rgb(bg)) else {
        return fg;
    };
    let a = alpha.clamp(0.0, 1.0);
    let mix = |f: u8, b: u8| (f as f64 * a + b as f64 * (1.0 - a)).round() as u8;
    Color::Rgb(mix(f.0, b.0), mix(f.1, b.1), mix(f.2, b.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// WCAG 2.0 relative luminance: https://www.w3.org/TR/WCAG20/#relativeluminancedef
    fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
        fn channel_luminance(c: u8) -> f64 {
            let c = c as f64 / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * channel_luminance(r) + 0.7152 * channel_luminance(g) + 0.0722 * channel_luminance(b)
    }

    /// Contrast ratio between two colors, 1 (same) to 21 (black/white)
    fn contrast_ratio(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> f64 {
        let l1 = relative_luminance(fg.0, fg.1, fg.2);
        let l2 = relative_luminance(bg.0, bg.1, bg.2);

        let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };

        (lighter + 0.05) / (darker + 0.05)
    }

    /// WCAG AA for normal text
    fn meets_wcag_aa(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
        contrast_ratio(fg, bg) >= 4.5
    }

    /// WCAG AA for large text
    fn meets_wcag_aa_large(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
        contrast_ratio(fg, bg) >= 3.0
    }

    fn rgb(color: Color) -> (u8, u8, u8) {
        color_to_rgb(color).expect("Theme colors should all be RGB")
    }

    #[test]
    fn test_brand_colors() {
        assert_eq!(rgb(Theme::PRIMARY), (0x8b, 0x5c, 0xf6));
        assert_eq!(rgb(Theme::SECONDARY), (0x06, 0xb6, 0xd4));
    }

    #[test]
    fn test_text_contrast_against_background() {
        let ratio = contrast_ratio(rgb(Theme::TEXT), rgb(Theme::BACKGROUND));
        assert!(
            meets_wcag_aa(rgb(Theme::TEXT), rgb(Theme::BACKGROUND)),
            "Text on background should meet WCAG AA (got {:.2}:1)",
            ratio
        );
    }

    #[test]
    fn test_accent_colors_readable_as_large_text() {
        let bg = rgb(Theme::BACKGROUND);
        for color in [
            Theme::PRIMARY,
            Theme::SECONDARY,
            Theme::ACCENT,
            Theme::DIM,
            Theme::SUCCESS,
            Theme::ERROR,
        ] {
            let ratio = contrast_ratio(rgb(color), bg);
            assert!(
                meets_wcag_aa_large(rgb(color), bg),
                "{:?} on background too low ({:.2}:1)",
                color,
                ratio
            );
        }
    }

    #[test]
    fn test_inverted_highlighted_contrast() {
        let ratio = contrast_ratio(rgb(Theme::BACKGROUND), rgb(Theme::PRIMARY));
        assert!(ratio >= 3.0, "got {:.2}:1", ratio);
    }

    #[test]
    fn test_contrast_ratio_extremes() {
        assert!((contrast_ratio((0, 0, 0), (255, 255, 255)) - 21.0).abs() < 0.1);
        assert!((contrast_ratio((100, 100, 100), (100, 100, 100)) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_blend() {
        let white = Color::Rgb(255, 255, 255);
        let black = Color::Rgb(0, 0, 0);
        assert_eq!(blend(white, black, 1.0), white);
        assert_eq!(blend(white, black, 0.0), black);
        assert_eq!(blend(white, black, 0.5), Color::Rgb(128, 128, 128));
        // Non-RGB colors pass through
        assert_eq!(blend(Color::Red, black, 0.5), Color::Red);
    }
}
