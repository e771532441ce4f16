//! ticketview - layout-driven key/value extraction from positioned words.
//!
//! A document arrives as pages of word tokens with bounding boxes (see
//! [`source`]). The [`examine`] phase groups them into lines, splits each
//! line into key and value text by horizontal position, folds key-less
//! lines into the value above them, and lifts the ticket type and number
//! out into a document identity. [`inspect`] measures the raw pages and
//! [`display`] renders read-only views of the result.

pub mod display;
pub mod error;
pub mod examine;
pub mod inspect;
pub mod layout;
pub mod model;
pub mod params;
pub mod source;

pub use error::{ExamineError, Result};
pub use examine::{Examination, Examiner, examine};
pub use model::{DocumentIdentity, PageTokens, Record, Token, TokenDocument};
pub use params::{ExamineParams, IdentityKeys, SplitPolicy};
