use serde::{Deserialize, Serialize};

/// A single positioned word.
///
/// Coordinates use a top-left origin, so `y0` is the top edge and `y1`
/// the bottom edge. Word dumps that name these `top` and `bottom` are
/// accepted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub x0: f64,
    pub x1: f64,
    #[serde(alias = "top")]
    pub y0: f64,
    #[serde(alias = "bottom")]
    pub y1: f64,
    /// 1-based page number. Zero means "not yet assigned" and is filled in
    /// from the enclosing page when loading.
    #[serde(default)]
    pub page: u32,
}

impl Token {
    pub fn new(text: impl Into<String>, x0: f64, x1: f64, y0: f64, y1: f64, page: u32) -> Self {
        Self {
            text: text.into(),
            x0,
            x1,
            y0,
            y1,
            page,
        }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Vertical midpoint, used for line grouping.
    pub fn y_center(&self) -> f64 {
        (self.y0 + self.y1) / 2.0
    }

    /// Describe what is wrong with this token's box, if anything.
    pub(crate) fn geometry_fault(&self) -> Option<String> {
        let coords = [
            ("x0", self.x0),
            ("x1", self.x1),
            ("y0", self.y0),
            ("y1", self.y1),
        ];
        if let Some((name, v)) = coords.iter().find(|(_, v)| !v.is_finite()) {
            return Some(format!("{name} is not finite ({v})"));
        }
        if self.x1 < self.x0 {
            return Some(format!("x1 ({}) < x0 ({})", self.x1, self.x0));
        }
        if self.y1 < self.y0 {
            return Some(format!("y1 ({}) < y0 ({})", self.y1, self.y0));
        }
        None
    }
}
