//! Physical inspection of a token document.
//!
//! Measures what is on the pages without interpreting it: page extents,
//! token counts, and lines that repeat across pages (headers, footers).
//! The source file is identified by its SHA-256 digest.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::layout::group_lines;
use crate::model::{PageTokens, TokenDocument};

/// Identity of the file the tokens came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRef {
    pub path: String,
    pub sha256: String,
    pub size_bytes: u64,
}

impl DocumentRef {
    /// Hash a file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = BufReader::new(File::open(path)?);
        let mut hasher = Sha256::new();
        let mut buf = [0u8; 8192];
        let mut size_bytes = 0u64;
        loop {
            let n = reader.read(&mut buf)?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
            size_bytes += n as u64;
        }
        Ok(Self {
            path: path.display().to_string(),
            sha256: hex::encode(hasher.finalize()),
            size_bytes,
        })
    }

    /// Hash bytes already in memory, filed under `label`.
    pub fn from_bytes(label: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            path: label.into(),
            sha256: hex::encode(Sha256::digest(bytes)),
            size_bytes: bytes.len() as u64,
        }
    }
}

/// Extents of one page's tokens. All zero for an empty page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageGeometry {
    pub page_number: u32,
    pub token_count: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PageGeometry {
    fn measure(page: &PageTokens) -> Self {
        let mut geometry = Self {
            page_number: page.number,
            token_count: page.tokens.len(),
            x_min: 0.0,
            x_max: 0.0,
            y_min: 0.0,
            y_max: 0.0,
        };
        if let Some(first) = page.tokens.first() {
            geometry.x_min = first.x0;
            geometry.x_max = first.x1;
            geometry.y_min = first.y0;
            geometry.y_max = first.y1;
            for t in &page.tokens[1..] {
                geometry.x_min = geometry.x_min.min(t.x0);
                geometry.x_max = geometry.x_max.max(t.x1);
                geometry.y_min = geometry.y_min.min(t.y0);
                geometry.y_max = geometry.y_max.max(t.y1);
            }
        }
        geometry
    }
}

/// Line text found on more than one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepeatedLine {
    pub text: String,
    pub pages: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectReport {
    pub document: DocumentRef,
    pub page_count: usize,
    pub text_based: bool,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub pages: Vec<PageGeometry>,
    pub repeated_lines: Vec<RepeatedLine>,
}

/// Measure a token document. Lines are grouped with `y_tolerance`.
pub fn inspect(document: DocumentRef, tokens: &TokenDocument, y_tolerance: f64) -> InspectReport {
    let pages: Vec<PageGeometry> = tokens.pages.iter().map(PageGeometry::measure).collect();

    let mut occurrences: IndexMap<String, Vec<u32>> = IndexMap::new();
    for page in &tokens.pages {
        for line in group_lines(&page.tokens, y_tolerance) {
            let text = line.text();
            if text.is_empty() {
                continue;
            }
            let seen = occurrences.entry(text).or_default();
            if seen.last() != Some(&page.number) {
                seen.push(page.number);
            }
        }
    }
    let repeated_lines = occurrences
        .into_iter()
        .filter(|(_, pages)| pages.len() > 1)
        .map(|(text, pages)| RepeatedLine { text, pages })
        .collect();

    let measured: Vec<&PageGeometry> = pages.iter().filter(|p| p.token_count > 0).collect();
    let extent = |f: fn(&PageGeometry) -> f64, pick: fn(f64, f64) -> f64| {
        measured.iter().map(|p| f(p)).reduce(pick).unwrap_or(0.0)
    };

    InspectReport {
        document,
        page_count: tokens.page_count(),
        text_based: !measured.is_empty(),
        x_min: extent(|p| p.x_min, f64::min),
        x_max: extent(|p| p.x_max, f64::max),
        y_min: extent(|p| p.y_min, f64::min),
        y_max: extent(|p| p.y_max, f64::max),
        pages,
        repeated_lines,
    }
}

impl InspectReport {
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Inspect summary");
        let _ = writeln!(out, "---------------");
        let _ = writeln!(out, "Path:         {}", self.document.path);
        let _ = writeln!(out, "SHA-256:      {}", self.document.sha256);
        let _ = writeln!(out, "Size (bytes): {}", self.document.size_bytes);
        let _ = writeln!(out, "Pages:        {}", self.page_count);
        let _ = writeln!(out, "Text-based:   {}", self.text_based);
        let _ = writeln!(out, "X range:      {} - {}", self.x_min, self.x_max);
        let _ = writeln!(out, "Y range:      {} - {}", self.y_min, self.y_max);
        if self.repeated_lines.is_empty() {
            let _ = write!(out, "Repeated lines: none");
        } else {
            let _ = write!(out, "Repeated lines:");
            for line in &self.repeated_lines {
                let _ = write!(
                    out,
                    "\n  - {:?} (pages {})",
                    line.text,
                    line.pages.iter().join(",")
                );
            }
        }
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
