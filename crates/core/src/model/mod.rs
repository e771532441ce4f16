//! Plain data types shared by every stage.
//!
//! Tokens come in, records and the document identity come out. None of
//! these types carry behavior beyond simple geometry accessors.

mod page;
mod record;
mod token;

pub(crate) use page::page_number;
pub use page::{PageTokens, TokenDocument};
pub use record::{DocumentIdentity, Record};
pub use token::Token;
