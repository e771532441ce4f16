use serde::{Deserialize, Serialize};

use super::Token;
use crate::error::{ExamineError, Result};

/// Tokens of a single page, in extraction order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageTokens {
    pub number: u32,
    pub tokens: Vec<Token>,
}

impl PageTokens {
    pub fn new(number: u32, tokens: Vec<Token>) -> Self {
        Self { number, tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Every page of a document, ascending by page number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenDocument {
    pub pages: Vec<PageTokens>,
}

impl TokenDocument {
    pub fn from_pages(pages: Vec<PageTokens>) -> Self {
        Self { pages }
    }

    /// Build a document from a flat token list, splitting on each token's
    /// `page` field. Pages are created in first-seen order.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        let mut pages: Vec<PageTokens> = Vec::new();
        for token in tokens {
            match pages.last_mut() {
                Some(page) if page.number == token.page => page.tokens.push(token),
                _ => pages.push(PageTokens::new(token.page, vec![token])),
            }
        }
        Self { pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Page count as a page number type.
    pub fn page_count_u32(&self) -> Result<u32> {
        page_number(self.pages.len())
    }

    pub fn token_count(&self) -> usize {
        self.pages.iter().map(|p| p.tokens.len()).sum()
    }
}

/// Convert a page count or 1-based position to a page number.
pub(crate) fn page_number(n: usize) -> Result<u32> {
    u32::try_from(n).map_err(|_| ExamineError::TooManyPages(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_numbers_fit_u32() {
        assert_eq!(page_number(0).unwrap(), 0);
        assert_eq!(page_number(u32::MAX as usize).unwrap(), u32::MAX);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn oversized_page_number_is_an_error() {
        let n = u32::MAX as usize + 1;
        assert!(matches!(page_number(n), Err(ExamineError::TooManyPages(got)) if got == n));
    }

    #[test]
    fn page_count_u32_counts_pages() {
        let doc = TokenDocument::from_pages(vec![PageTokens::default(), PageTokens::default()]);
        assert_eq!(doc.page_count_u32().unwrap(), 2);
    }
}
