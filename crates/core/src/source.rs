//! Token sources.
//!
//! The examine engine never reads files itself. A [`TokenSource`] hands it
//! a fully materialized [`TokenDocument`]; how the words were pulled out of
//! the PDF is the source's business.
//!
//! The bundled [`JsonTokenSource`] reads the word dump layout produced by
//! pdfplumber-style extractors:
//!
//! ```json
//! {"pages": [{"page_number": 1,
//!             "words": [{"text": "Status", "x0": 0, "x1": 40, "top": 5, "bottom": 15}]}]}
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::model::{PageTokens, Token, TokenDocument, page_number};

/// Anything that can produce the pages of a document.
pub trait TokenSource {
    fn load(&mut self) -> Result<TokenDocument>;
}

impl TokenSource for TokenDocument {
    fn load(&mut self) -> Result<TokenDocument> {
        Ok(self.clone())
    }
}

#[derive(Deserialize)]
struct WordDump {
    #[serde(default)]
    pages: Vec<WordDumpPage>,
}

#[derive(Deserialize)]
struct WordDumpPage {
    #[serde(default)]
    page_number: Option<u32>,
    #[serde(default, alias = "tokens")]
    words: Vec<Token>,
}

/// Reads a JSON word dump.
pub struct JsonTokenSource<R> {
    reader: R,
}

impl JsonTokenSource<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: Read> JsonTokenSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> TokenSource for JsonTokenSource<R> {
    fn load(&mut self) -> Result<TokenDocument> {
        let dump: WordDump = serde_json::from_reader(&mut self.reader)?;
        let pages = dump
            .pages
            .into_iter()
            .enumerate()
            .map(|(idx, raw)| -> Result<PageTokens> {
                let number = match raw.page_number {
                    Some(number) => number,
                    None => page_number(idx + 1)?,
                };
                let tokens = raw
                    .words
                    .into_iter()
                    .map(|mut token| {
                        if token.page == 0 {
                            token.page = number;
                        }
                        token
                    })
                    .collect();
                Ok(PageTokens::new(number, tokens))
            })
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(pages = pages.len(), "loaded word dump");
        Ok(TokenDocument::from_pages(pages))
    }
}

/// Load a word dump from a JSON string.
pub fn tokens_from_json_str(json: &str) -> Result<TokenDocument> {
    JsonTokenSource::from_reader(json.as_bytes()).load()
}
