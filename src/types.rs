//! Core types for boxflow.
//!
//! These are the closed enums and edge geometry shared by the config layer,
//! the layout engine and the renderer. Every enum parses from a fixed set of
//! names; an unknown name is an error, never a silent default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whole-pixel length.
pub type Px = i32;

// =============================================================================
// Parse errors
// =============================================================================

/// Errors produced when parsing enum names or edge shorthand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown pack `{0}` (expected start, center or end)")]
    Pack(String),

    #[error("unknown align `{0}` (expected start, center, stretch or stretchmax)")]
    Align(String),

    #[error("unknown orientation `{0}` (expected horizontal or vertical)")]
    Orientation(String),

    #[error("invalid edge shorthand `{0}` (expected 1 to 4 integers)")]
    Edges(String),
}

// =============================================================================
// Pack - main axis placement of the whole item block
// =============================================================================

/// Placement of the item block inside leftover primary-axis space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(u8)]
pub enum Pack {
    #[default]
    Start = 0,
    Center = 1,
    End = 2,
}

impl Pack {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

impl FromStr for Pack {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            "end" => Ok(Self::End),
            _ => Err(ParseError::Pack(s.to_string())),
        }
    }
}

impl TryFrom<String> for Pack {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Pack> for String {
    fn from(value: Pack) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Pack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Align - cross axis placement and sizing of each item
// =============================================================================

/// Per-item placement along the cross axis.
///
/// `top`/`left` are accepted as names for [`Align::Start`] and `middle` for
/// [`Align::Center`], matching the names hbox and vbox containers use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(u8)]
pub enum Align {
    #[default]
    Start = 0,
    Center = 1,
    Stretch = 2,
    StretchMax = 3,
}

impl Align {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::Stretch => "stretch",
            Self::StretchMax => "stretchmax",
        }
    }
}

impl FromStr for Align {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" | "top" | "left" => Ok(Self::Start),
            "center" | "middle" => Ok(Self::Center),
            "stretch" => Ok(Self::Stretch),
            "stretchmax" => Ok(Self::StretchMax),
            _ => Err(ParseError::Align(s.to_string())),
        }
    }
}

impl TryFrom<String> for Align {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Align> for String {
    fn from(value: Align) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Orientation
// =============================================================================

/// Direction of the primary axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(u8)]
pub enum Orientation {
    /// Row box: primary axis is x.
    #[default]
    Horizontal = 0,
    /// Column box: primary axis is y.
    Vertical = 1,
}

impl Orientation {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    pub const fn is_horizontal(&self) -> bool {
        matches!(self, Self::Horizontal)
    }
}

impl FromStr for Orientation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "hbox" | "row" => Ok(Self::Horizontal),
            "vertical" | "vbox" | "column" => Ok(Self::Vertical),
            _ => Err(ParseError::Orientation(s.to_string())),
        }
    }
}

impl TryFrom<String> for Orientation {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Orientation> for String {
    fn from(value: Orientation) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Edges
// =============================================================================

/// Physical edge lengths (margins or padding).
///
/// Parses from CSS-style shorthand: `"5"`, `"5 10"`, `"5 10 15"` or
/// `"5 10 15 20"` (top right bottom left). In JSON a bare integer means all
/// four edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "EdgesRepr", into = "String")]
pub struct Edges {
    pub top: Px,
    pub right: Px,
    pub bottom: Px,
    pub left: Px,
}

impl Edges {
    pub const fn new(top: Px, right: Px, bottom: Px, left: Px) -> Self {
        Self { top, right, bottom, left }
    }

    pub const fn all(value: Px) -> Self {
        Self::new(value, value, value, value)
    }

    /// Vertical and horizontal values, like `"5 10"`.
    pub const fn symmetric(vertical: Px, horizontal: Px) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Parse CSS-style shorthand.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let values = s
            .split_whitespace()
            .map(|part| part.parse::<Px>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ParseError::Edges(s.to_string()))?;

        match values.as_slice() {
            [all] => Ok(Self::all(*all)),
            [v, h] => Ok(Self::symmetric(*v, *h)),
            [t, h, b] => Ok(Self::new(*t, *h, *b, *h)),
            [t, r, b, l] => Ok(Self::new(*t, *r, *b, *l)),
            _ => Err(ParseError::Edges(s.to_string())),
        }
    }

    /// Whether any edge is below zero.
    pub const fn has_negative(&self) -> bool {
        self.top < 0 || self.right < 0 || self.bottom < 0 || self.left < 0
    }

    /// Map onto axis-relative edges for the given orientation.
    pub const fn to_axis(&self, orientation: Orientation) -> AxisEdges {
        match orientation {
            Orientation::Horizontal => AxisEdges {
                before: self.left,
                after: self.right,
                cross_before: self.top,
                cross_after: self.bottom,
            },
            Orientation::Vertical => AxisEdges {
                before: self.top,
                after: self.bottom,
                cross_before: self.left,
                cross_after: self.right,
            },
        }
    }
}

impl FromStr for Edges {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Edges> for String {
    fn from(value: Edges) -> Self {
        format!("{} {} {} {}", value.top, value.right, value.bottom, value.left)
    }
}

/// Accepted JSON forms for [`Edges`].
#[derive(Deserialize)]
#[serde(untagged)]
enum EdgesRepr {
    Uniform(Px),
    Shorthand(String),
}

impl TryFrom<EdgesRepr> for Edges {
    type Error = ParseError;

    fn try_from(value: EdgesRepr) -> Result<Self, Self::Error> {
        match value {
            EdgesRepr::Uniform(all) => Ok(Self::all(all)),
            EdgesRepr::Shorthand(s) => Self::parse(&s),
        }
    }
}

/// Edges expressed relative to the primary and cross axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AxisEdges {
    pub before: Px,
    pub after: Px,
    pub cross_before: Px,
    pub cross_after: Px,
}

impl AxisEdges {
    pub const fn new(before: Px, after: Px, cross_before: Px, cross_after: Px) -> Self {
        Self { before, after, cross_before, cross_after }
    }

    /// Same value on both ends of the primary axis, zero on the cross axis.
    pub const fn primary(value: Px) -> Self {
        Self::new(value, value, 0, 0)
    }

    /// Same value on both ends of the cross axis, zero on the primary axis.
    pub const fn cross(value: Px) -> Self {
        Self::new(0, 0, value, value)
    }

    /// Negative edges clamp to zero.
    pub fn clamped(&self) -> Self {
        Self::new(
            self.before.max(0),
            self.after.max(0),
            self.cross_before.max(0),
            self.cross_after.max(0),
        )
    }

    #[inline]
    pub fn primary_total(&self) -> Px {
        self.before.max(0).saturating_add(self.after.max(0))
    }

    #[inline]
    pub fn cross_total(&self) -> Px {
        self.cross_before.max(0).saturating_add(self.cross_after.max(0))
    }
}

// =============================================================================
// Rect
// =============================================================================

/// A positioned physical box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rect {
    pub x: Px,
    pub y: Px,
    pub width: Px,
    pub height: Px,
}

impl Rect {
    pub const fn new(x: Px, y: Px, width: Px, height: Px) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub const fn right(&self) -> Px {
        self.x.saturating_add(self.width)
    }

    #[inline]
    pub const fn bottom(&self) -> Px {
        self.y.saturating_add(self.height)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_parse() {
        assert_eq!("start".parse::<Pack>().unwrap(), Pack::Start);
        assert_eq!("Center".parse::<Pack>().unwrap(), Pack::Center);
        assert_eq!(" end ".parse::<Pack>().unwrap(), Pack::End);
        assert_eq!(
            "justify".parse::<Pack>(),
            Err(ParseError::Pack("justify".to_string()))
        );
    }

    #[test]
    fn test_align_aliases() {
        assert_eq!("top".parse::<Align>().unwrap(), Align::Start);
        assert_eq!("left".parse::<Align>().unwrap(), Align::Start);
        assert_eq!("middle".parse::<Align>().unwrap(), Align::Center);
        assert_eq!("stretchmax".parse::<Align>().unwrap(), Align::StretchMax);
        assert!("bottom".parse::<Align>().is_err());
    }

    #[test]
    fn test_orientation_aliases() {
        assert_eq!("hbox".parse::<Orientation>().unwrap(), Orientation::Horizontal);
        assert_eq!("column".parse::<Orientation>().unwrap(), Orientation::Vertical);
        assert!("diagonal".parse::<Orientation>().is_err());
    }

    #[test]
    fn test_enum_serde_uses_names() {
        let json = serde_json::to_string(&Align::StretchMax).unwrap();
        assert_eq!(json, "\"stretchmax\"");

        let pack: Pack = serde_json::from_str("\"end\"").unwrap();
        assert_eq!(pack, Pack::End);

        let bad = serde_json::from_str::<Align>("\"sideways\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_edges_shorthand() {
        assert_eq!(Edges::parse("5").unwrap(), Edges::all(5));
        assert_eq!(Edges::parse("5 10").unwrap(), Edges::new(5, 10, 5, 10));
        assert_eq!(Edges::parse("5 10 15").unwrap(), Edges::new(5, 10, 15, 10));
        assert_eq!(Edges::parse("1 2 3 4").unwrap(), Edges::new(1, 2, 3, 4));
    }

    #[test]
    fn test_edges_shorthand_rejects_garbage() {
        assert!(Edges::parse("").is_err());
        assert!(Edges::parse("1 2 3 4 5").is_err());
        assert!(Edges::parse("ten").is_err());
        assert!(Edges::parse("5px").is_err());
    }

    #[test]
    fn test_edges_json_forms() {
        let uniform: Edges = serde_json::from_str("8").unwrap();
        assert_eq!(uniform, Edges::all(8));

        let shorthand: Edges = serde_json::from_str("\"10 20\"").unwrap();
        assert_eq!(shorthand, Edges::symmetric(10, 20));

        assert!(serde_json::from_str::<Edges>("\"a b\"").is_err());
    }

    #[test]
    fn test_edges_to_axis() {
        let edges = Edges::new(1, 2, 3, 4);

        let h = edges.to_axis(Orientation::Horizontal);
        assert_eq!(h, AxisEdges::new(4, 2, 1, 3));

        let v = edges.to_axis(Orientation::Vertical);
        assert_eq!(v, AxisEdges::new(1, 3, 4, 2));
    }

    #[test]
    fn test_axis_edges_totals_ignore_negatives() {
        let edges = AxisEdges::new(-5, 10, 3, -1);
        assert_eq!(edges.primary_total(), 10);
        assert_eq!(edges.cross_total(), 3);
        assert_eq!(edges.clamped(), AxisEdges::new(0, 10, 3, 0));
    }

    #[test]
    fn test_axis_edges_totals_saturate() {
        let edges = AxisEdges::primary(Px::MAX);
        assert_eq!(edges.primary_total(), Px::MAX);
        assert_eq!(AxisEdges::cross(Px::MAX).cross_total(), Px::MAX);
    }

    #[test]
    fn test_edges_has_negative() {
        assert!(!Edges::all(0).has_negative());
        assert!(!Edges::new(1, 2, 3, 4).has_negative());
        assert!(Edges::new(0, 0, -1, 0).has_negative());
        assert!(Edges::all(-5).has_negative());
    }

    #[test]
    fn test_rect_edges_saturate() {
        let rect = Rect::new(1_500_000_000, 10, 1_500_000_000, 20);
        assert_eq!(rect.right(), Px::MAX);
        assert_eq!(rect.bottom(), 30);
    }
}
