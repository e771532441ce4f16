//! Grouping of tokens into visual lines.

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::model::Token;

/// Tokens of one page that share a vertical band, ordered left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct Line<'a> {
    page: u32,
    y_center: f64,
    tokens: Vec<&'a Token>,
}

impl<'a> Line<'a> {
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Running average of the member tokens' vertical centers.
    pub fn y_center(&self) -> f64 {
        self.y_center
    }

    pub fn tokens(&self) -> &[&'a Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All token text joined with single spaces.
    pub fn text(&self) -> String {
        join_text(self.tokens.iter().copied())
    }
}

/// Join token text with single spaces, skipping blank tokens.
pub(crate) fn join_text<'t>(tokens: impl Iterator<Item = &'t Token>) -> String {
    tokens
        .map(|t| t.text.trim())
        .filter(|s| !s.is_empty())
        .join(" ")
}

struct LineBuilder<'a> {
    page: u32,
    center_sum: f64,
    tokens: Vec<&'a Token>,
}

impl<'a> LineBuilder<'a> {
    fn start(token: &'a Token) -> Self {
        Self {
            page: token.page,
            center_sum: token.y_center(),
            tokens: vec![token],
        }
    }

    fn reference(&self) -> f64 {
        self.center_sum / self.tokens.len() as f64
    }

    fn push(&mut self, token: &'a Token) {
        self.center_sum += token.y_center();
        self.tokens.push(token);
    }

    fn finish(mut self) -> Line<'a> {
        let y_center = self.reference();
        // stable: equal x0 keeps extraction order
        self.tokens.sort_by_key(|t| OrderedFloat(t.x0));
        Line {
            page: self.page,
            y_center,
            tokens: self.tokens,
        }
    }
}

/// Group one page's tokens into lines.
///
/// Tokens are taken in extraction order. A token joins the current line
/// when its vertical center is within `y_tolerance` of the line's running
/// average; otherwise the line is closed and a new one starts. Lines come
/// back in the order they were started.
pub fn group_lines(tokens: &[Token], y_tolerance: f64) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut current: Option<LineBuilder<'_>> = None;

    for token in tokens {
        match current.as_mut() {
            Some(line) if (token.y_center() - line.reference()).abs() <= y_tolerance => {
                line.push(token);
            }
            _ => {
                if let Some(done) = current.replace(LineBuilder::start(token)) {
                    lines.push(done.finish());
                }
            }
        }
    }
    if let Some(done) = current {
        lines.push(done.finish());
    }
    lines
}
