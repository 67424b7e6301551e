//! Search-box autocomplete: a static prefix/substring index over a fixed
//! vocabulary, plus the keyboard state machine for the suggestion panel.
//!
//! [`SuggestionPanel`] models the panel's keyboard contract independent of
//! any line editor. The readline surface delegates key handling and
//! completion navigation to rustyline (feeding its helper from [`lookup`]);
//! a surface that draws its own panel drives this state machine instead.

use once_cell::sync::Lazy;

/// Maximum number of suggestions returned per lookup.
pub const MAX_SUGGESTIONS: usize = 8;

/// Queries shorter than this yield no suggestions.
pub const MIN_QUERY_LEN: usize = 2;

/// One autocomplete suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Display text shown in the panel.
    pub text: &'static str,
    /// Display icon.
    pub icon: &'static str,
    /// Category identifier the suggestion maps to.
    pub category: &'static str,
}

struct VocabEntry {
    prefixes: &'static [&'static str],
    text: &'static str,
    icon: &'static str,
    category: &'static str,
}

/// Fixed vocabulary, Turkish and English terms for the known categories.
static VOCABULARY: Lazy<Vec<VocabEntry>> = Lazy::new(|| {
    vec![
        VocabEntry {
            prefixes: &["kulaklık", "kulaklik", "kablosuz kulaklık"],
            text: "Kulaklık",
            icon: "🎧",
            category: "Headphones",
        },
        VocabEntry {
            prefixes: &["headphones", "earbuds", "wireless headphones"],
            text: "Headphones",
            icon: "🎧",
            category: "Headphones",
        },
        VocabEntry {
            prefixes: &["klima", "air conditioner"],
            text: "Klima",
            icon: "❄️",
            category: "Klima",
        },
        VocabEntry {
            prefixes: &["televizyon", "television", "tv"],
            text: "Televizyon",
            icon: "📺",
            category: "Television",
        },
        VocabEntry {
            prefixes: &["lastik", "tire"],
            text: "Lastik",
            icon: "🛞",
            category: "Tire",
        },
        VocabEntry {
            prefixes: &["telefon", "phone", "smartphone", "akıllı telefon"],
            text: "Telefon",
            icon: "📱",
            category: "Phone",
        },
        VocabEntry {
            prefixes: &["laptop", "bilgisayar", "notebook"],
            text: "Laptop",
            icon: "💻",
            category: "Laptop",
        },
        VocabEntry {
            prefixes: &["drone"],
            text: "Drone",
            icon: "🚁",
            category: "Drone",
        },
        VocabEntry {
            prefixes: &["mouse", "fare", "gaming mouse"],
            text: "Mouse",
            icon: "🖱️",
            category: "Mouse",
        },
    ]
});

/// Looks up suggestions for a query.
///
/// Prefix matches against the known-prefix table are collected first in
/// table order, then substring matches over the display texts, skipping
/// anything already collected. Deduplicated by display text, capped at
/// [`MAX_SUGGESTIONS`].
pub fn lookup(query: &str) -> Vec<Suggestion> {
    let query = query.trim().to_lowercase();
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let mut out: Vec<Suggestion> = Vec::new();
    let mut push = |entry: &VocabEntry, out: &mut Vec<Suggestion>| {
        if out.len() < MAX_SUGGESTIONS && !out.iter().any(|s| s.text == entry.text) {
            out.push(Suggestion {
                text: entry.text,
                icon: entry.icon,
                category: entry.category,
            });
        }
    };

    // Prefix phase, in table order.
    for entry in VOCABULARY.iter() {
        if entry.prefixes.iter().any(|p| p.starts_with(&query)) {
            push(entry, &mut out);
        }
    }

    // Substring phase over display texts.
    for entry in VOCABULARY.iter() {
        if entry.text.to_lowercase().contains(&query) {
            push(entry, &mut out);
        }
    }

    out
}

/// Key presses the suggestion panel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKey {
    Down,
    Up,
    Enter,
    Escape,
}

/// Outcome of feeding one key press to the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelOutcome {
    /// Highlight moved (or stayed clamped); new highlight index.
    Highlight(isize),
    /// A highlighted suggestion was committed: fill the input and submit.
    Commit(Suggestion),
    /// Enter with no highlight: submit the raw input as typed.
    SubmitRaw,
    /// Panel dismissed without altering the input.
    Dismissed,
}

/// Keyboard state machine for the visible suggestion panel.
///
/// The highlight index is clamped to `[-1, count - 1]`, where `-1` means
/// no item is highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionPanel {
    items: Vec<Suggestion>,
    highlighted: isize,
}

impl SuggestionPanel {
    /// Opens a panel over the given suggestions with nothing highlighted.
    pub fn open(items: Vec<Suggestion>) -> Self {
        Self {
            items,
            highlighted: -1,
        }
    }

    pub fn items(&self) -> &[Suggestion] {
        &self.items
    }

    pub fn highlighted(&self) -> isize {
        self.highlighted
    }

    /// Feeds one key press to the panel.
    pub fn handle_key(&mut self, key: PanelKey) -> PanelOutcome {
        let max = self.items.len() as isize - 1;
        match key {
            PanelKey::Down => {
                self.highlighted = (self.highlighted + 1).min(max);
                PanelOutcome::Highlight(self.highlighted)
            }
            PanelKey::Up => {
                self.highlighted = (self.highlighted - 1).max(-1);
                PanelOutcome::Highlight(self.highlighted)
            }
            PanelKey::Enter => {
                if self.highlighted >= 0 {
                    PanelOutcome::Commit(self.items[self.highlighted as usize].clone())
                } else {
                    PanelOutcome::SubmitRaw
                }
            }
            PanelKey::Escape => PanelOutcome::Dismissed,
        }
    }
}
