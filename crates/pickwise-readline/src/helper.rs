//! CLI helper for rustyline: completion, highlighting, and hints.
//!
//! Slash commands complete against the fixed command table; free-text input
//! completes against the autocomplete vocabulary.

use colored::Colorize;
use pickwise_core::suggest;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use std::borrow::Cow::{self, Borrowed, Owned};

#[derive(Clone)]
pub struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    pub fn new() -> Self {
        Self {
            commands: vec![
                "/home".to_string(),
                "/lang".to_string(),
                "/theme".to_string(),
                "/browse".to_string(),
            ],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            return Ok((0, candidates));
        }

        let candidates: Vec<Pair> = suggest::lookup(line)
            .into_iter()
            .map(|s| Pair {
                display: format!("{} {}", s.icon, s.text),
                replacement: s.text.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            return self
                .commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string());
        }

        let query = line.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }
        // Hint the completion of the first vocabulary term the input is a
        // prefix of. Char-based slicing, the vocabulary is not ASCII-only.
        suggest::lookup(line).into_iter().find_map(|s| {
            let text = s.text.to_lowercase();
            if text.starts_with(&query) && text != query {
                Some(s.text.chars().skip(query.chars().count()).collect())
            } else {
                None
            }
        })
    }
}

impl Validator for CliHelper {}
