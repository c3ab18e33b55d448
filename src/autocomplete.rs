//! Title autocomplete for the recommend search box
//!
//! Filters a fixed list of popular titles by case-insensitive substring,
//! keeping list order and showing at most [`MAX_SUGGESTIONS`].

/// Maximum suggestions shown under the input
pub const MAX_SUGGESTIONS: usize = 5;

/// Titles offered while typing
pub const POPULAR_MOVIES: &[&str] = &[
    "Oppenheimer",
    "Barbie",
    "Killers of the Flower Moon",
    "Poor Things",
    "Wonka",
    "May December",
    "Napoleon",
    "Love Actually",
    "Amadeus",
    "The Pianist",
    "Schindler's List",
    "Hacksaw Ridge",
    "12 Years a Slave",
    "The King's Speech",
    "Hamilton",
    "Braveheart",
    "Raging Bull",
    "Inception",
];

/// Filter `candidates` against `input`; empty input yields nothing
pub fn filter<'a, S: AsRef<str>>(candidates: &'a [S], input: &str) -> Vec<&'a str> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    candidates
        .iter()
        .map(|title| title.as_ref())
        .filter(|title| title.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Suggestion list state
#[derive(Debug, Clone)]
pub struct Autocomplete {
    candidates: Vec<String>,
    /// Current suggestions, in candidate order
    pub suggestions: Vec<String>,
    /// Highlighted suggestion, if the user moved onto the list
    pub highlighted: Option<usize>,
}

impl Default for Autocomplete {
    fn default() -> Self {
        Self::new(POPULAR_MOVIES.iter().map(|s| s.to_string()).collect())
    }
}

impl Autocomplete {
    pub fn new(candidates: Vec<String>) -> Self {
        Self {
            candidates,
            suggestions: Vec::new(),
            highlighted: None,
        }
    }

    /// Recompute suggestions for the current input (called on every keystroke)
    pub fn update(&mut self, input: &str) {
        self.suggestions = filter(self.candidates.as_slice(), input)
            .into_iter()
            .map(str::to_string)
            .collect();
        self.highlighted = None;
    }

    pub fn clear(&mut self) {
        self.suggestions.clear();
        self.highlighted = None;
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    /// Move highlight down, entering the list from the input
    pub fn next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.highlighted = match self.highlighted {
            None => Some(0),
            Some(i) if i + 1 < self.suggestions.len() => Some(i + 1),
            Some(i) => Some(i),
        };
    }

    /// Move highlight up; leaving the top returns focus to the input
    pub fn prev(&mut self) {
        self.highlighted = match self.highlighted {
            Some(0) | None => None,
            Some(i) => Some(i - 1),
        };
    }

    /// Take the suggestion at `index`, clearing the list
    pub fn select(&mut self, index: usize) -> Option<String> {
        let title = self.suggestions.get(index).cloned();
        if title.is_some() {
            self.clear();
        }
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_case_insensitive() {
        let hits = filter(POPULAR_MOVIES, "in");
        assert!(hits.contains(&"Inception"));
        // Order follows the source list
        assert_eq!(
            hits,
            vec![
                "Poor Things",
                "Schindler's List",
                "The King's Speech",
                "Raging Bull",
                "Inception"
            ]
        );
    }

    #[test]
    fn test_filter_caps_at_five() {
        let hits = filter(POPULAR_MOVIES, "a");
        assert_eq!(hits.len(), MAX_SUGGESTIONS);
        assert_eq!(hits[0], "Barbie");
    }

    #[test]
    fn test_filter_trims_and_lowercases() {
        assert_eq!(filter(POPULAR_MOVIES, "  BARBIE "), vec!["Barbie"]);
    }

    #[test]
    fn test_filter_empty_input() {
        assert!(filter(POPULAR_MOVIES, "   ").is_empty());
        assert!(filter(POPULAR_MOVIES, "").is_empty());
    }

    #[test]
    fn test_filter_no_match() {
        assert!(filter(POPULAR_MOVIES, "zzz").is_empty());
    }

    #[test]
    fn test_highlight_navigation() {
        let mut ac = Autocomplete::default();
        ac.update("the");
        assert!(ac.suggestions.len() >= 2);

        ac.next();
        assert_eq!(ac.highlighted, Some(0));
        ac.next();
        assert_eq!(ac.highlighted, Some(1));
        ac.prev();
        ac.prev();
        assert_eq!(ac.highlighted, None);
    }

    #[test]
    fn test_select_clears() {
        let mut ac = Autocomplete::default();
        ac.update("wonka");
        assert_eq!(ac.select(0).as_deref(), Some("Wonka"));
        assert!(ac.is_empty());
        assert_eq!(ac.select(0), None);
    }
}
