//! Layout analysis: lines, zones, and the key/value boundary.
//!
//! Every decision in this module is made from token geometry alone.

pub mod clustering;
pub mod lines;
pub mod split;
pub mod zones;

pub use lines::{Line, group_lines};
pub use split::{FixedSplit, GapSplit, SplitStrategy};
pub use zones::{ClassifiedLine, Zone, classify_line};
