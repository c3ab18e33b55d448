//! Display models for result cards and the stats panel
//!
//! API payloads are turned into pre-formatted strings here so that
//! rendering is a straight copy into widgets.

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::format::{format_average, format_number, format_rating, format_similarity, round_count};
use crate::models::{MovieRecord, RecommendationResponse, SearchResponse, StatsResponse};
use crate::ui::Theme;

/// One recommendation, formatted
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationCard {
    /// 1-based position in relevance order
    pub rank: usize,
    pub title: String,
    pub genre: String,
    pub rating: String,
    pub votes: String,
    /// "87%"
    pub similarity: String,
}

/// A plain movie (search result or the queried movie)
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCard {
    pub title: String,
    pub genre: String,
    pub rating: String,
    pub votes: String,
}

/// Four headline numbers of the stats section
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub total_movies: String,
    pub avg_rating: String,
    pub avg_votes: String,
    /// "1.2 - 9.3"
    pub rating_range: String,
}

pub fn recommendation_cards(resp: &RecommendationResponse) -> Vec<RecommendationCard> {
    resp.recommendations
        .iter()
        .enumerate()
        .map(|(i, rec)| RecommendationCard {
            rank: i + 1,
            title: rec.title.clone(),
            genre: rec.genre.clone(),
            rating: format_rating(rec.rating),
            votes: format_number(rec.votes),
            similarity: format_similarity(rec.similarity_score),
        })
        .collect()
}

pub fn movie_card(movie: &MovieRecord) -> MovieCard {
    MovieCard {
        title: movie.title.clone(),
        genre: movie.genre.clone(),
        rating: format_rating(movie.rating),
        votes: format_number(movie.votes),
    }
}

pub fn search_cards(resp: &SearchResponse) -> Vec<MovieCard> {
    resp.results.iter().map(movie_card).collect()
}

/// "N movies found"
pub fn search_count_label(resp: &SearchResponse) -> String {
    format!("{} movies found", resp.total_results)
}

pub fn stats_summary(stats: &StatsResponse) -> StatsSummary {
    StatsSummary {
        total_movies: format_number(stats.total_movies),
        avg_rating: format_average(stats.avg_rating),
        avg_votes: format_number(round_count(stats.avg_votes)),
        rating_range: format!(
            "{} - {}",
            format_rating(stats.rating_range.min),
            format_rating(stats.rating_range.max)
        ),
    }
}

// =============================================================================
// Widgets
// =============================================================================

/// Height of a rendered card, borders included
pub const CARD_HEIGHT: u16 = 4;

fn card_block(selected: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if selected {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .style(Style::default().bg(Theme::BACKGROUND_LIGHT))
}

/// Draw a recommendation card
pub fn render_recommendation(frame: &mut Frame, area: Rect, card: &RecommendationCard, selected: bool) {
    let title = Line::from(vec![
        Span::styled(format!("#{} ", card.rank), Theme::dimmed()),
        Span::styled(card.title.clone(), Style::default().fg(Theme::TEXT).bold()),
    ]);
    let meta = Line::from(vec![
        Span::styled(card.genre.clone(), Theme::genre()),
        Span::raw("  "),
        Span::styled(format!("⭐ {}", card.rating), Theme::accent()),
        Span::styled(format!("  {} votes  ", card.votes), Theme::dimmed()),
        Span::styled(format!(" {} match ", card.similarity), Theme::badge()),
    ]);

    let paragraph = Paragraph::new(vec![title, meta])
        .block(card_block(selected))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Draw a movie card
pub fn render_movie(frame: &mut Frame, area: Rect, card: &MovieCard, selected: bool) {
    let title = Line::from(Span::styled(
        card.title.clone(),
        Style::default().fg(Theme::TEXT).bold(),
    ));
    let meta = Line::from(vec![
        Span::styled(card.genre.clone(), Theme::genre()),
        Span::raw("  "),
        Span::styled(format!("⭐ {}", card.rating), Theme::accent()),
        Span::styled(format!("  {} votes", card.votes), Theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(vec![title, meta]).block(card_block(selected));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RatingRange, Recommendation};

    #[test]
    fn test_recommendation_cards_keep_order_and_rank() {
        let resp = RecommendationResponse {
            query_movie: "inception".into(),
            num_recommendations: Some(2),
            recommendations: vec![
                Recommendation {
                    title: "Interstellar".into(),
                    genre: "Sci-Fi".into(),
                    rating: 8.6,
                    votes: 1_900_000,
                    similarity_score: 0.874,
                },
                Recommendation {
                    title: "Tenet".into(),
                    genre: "Action".into(),
                    rating: 7.3,
                    votes: 520_000,
                    similarity_score: 0.61,
                },
            ],
        };

        let cards = recommendation_cards(&resp);
        assert_eq!(cards[0].rank, 1);
        assert_eq!(cards[0].title, "Interstellar");
        assert_eq!(cards[0].votes, "1.9M");
        assert_eq!(cards[0].similarity, "87%");
        assert_eq!(cards[1].rank, 2);
        assert_eq!(cards[1].votes, "520.0K");
    }

    #[test]
    fn test_search_count_label() {
        let resp = SearchResponse {
            query: Some("drama".into()),
            search_by: None,
            total_results: 37,
            results: vec![],
        };
        assert_eq!(search_count_label(&resp), "37 movies found");
    }

    #[test]
    fn test_stats_summary() {
        let summary = stats_summary(&StatsResponse {
            total_movies: 4_803,
            avg_rating: 6.0921,
            avg_votes: 690.4,
            rating_range: RatingRange { min: 0.0, max: 10.0 },
        });
        assert_eq!(summary.total_movies, "4.8K");
        assert_eq!(summary.avg_rating, "6.09");
        assert_eq!(summary.avg_votes, "690");
        assert_eq!(summary.rating_range, "0.0 - 10.0");
    }

    #[test]
    fn test_stats_summary_rounds_halves_up() {
        let summary = stats_summary(&StatsResponse {
            total_movies: 1_250,
            avg_rating: 6.125,
            avg_votes: 0.0,
            rating_range: RatingRange { min: 0.5, max: 9.25 },
        });
        assert_eq!(summary.total_movies, "1.3K");
        assert_eq!(summary.avg_rating, "6.13");
        assert_eq!(summary.rating_range, "0.5 - 9.3");
    }

    #[test]
    fn test_movie_card() {
        let card = movie_card(&MovieRecord {
            title: "Amadeus".into(),
            genre: "Drama".into(),
            rating: 8.4,
            votes: 410_000,
        });
        assert_eq!(card.rating, "8.4");
        assert_eq!(card.votes, "410.0K");
    }
}
