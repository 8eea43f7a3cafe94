//! Command types for the drawing language.
//!
//! A line parses into exactly one [`Command`]; the [`Keyword`] table declares
//! what each command expects before any argument is looked at.

use std::fmt;

use crate::types::{Color, Point};

/// One parsed, validated program line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// `position x y`: move the pen
    Position(Point),
    /// `pen color`: change the pen color
    Pen(Color),
    /// `draw x y`: move the pen without stroking
    Draw(Point),
    /// `rectangle width height`, anchored at its top-left corner
    Rectangle { width: i32, height: i32 },
    /// `circle radius`, centered on the pen
    Circle { radius: i32 },
    /// `triangle`: fixed isosceles triangle hanging from the pen
    Triangle,
    /// `clear`: wipe the canvas
    Clear,
    /// `reset`: pen back to the origin
    Reset,
    /// `fill on|off`
    Fill(bool),
}

/// The closed set of command keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Position,
    Pen,
    Draw,
    Rectangle,
    Circle,
    Triangle,
    Clear,
    Reset,
    Fill,
}

/// What a single argument token must parse as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    /// A finite decimal number
    Float,
    /// A whole number that fits in an `i32`
    Integer,
    /// A name from the color table
    ColorName,
    /// `on` or anything else
    Switch,
}

impl Keyword {
    pub const ALL: [Keyword; 9] = [
        Keyword::Position,
        Keyword::Pen,
        Keyword::Draw,
        Keyword::Rectangle,
        Keyword::Circle,
        Keyword::Triangle,
        Keyword::Clear,
        Keyword::Reset,
        Keyword::Fill,
    ];

    /// Resolve a leading token, ignoring ASCII case.
    pub fn lookup(token: &str) -> Option<Keyword> {
        Keyword::ALL
            .into_iter()
            .find(|kw| kw.as_str().eq_ignore_ascii_case(token))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Position => "position",
            Keyword::Pen => "pen",
            Keyword::Draw => "draw",
            Keyword::Rectangle => "rectangle",
            Keyword::Circle => "circle",
            Keyword::Triangle => "triangle",
            Keyword::Clear => "clear",
            Keyword::Reset => "reset",
            Keyword::Fill => "fill",
        }
    }

    /// Declared argument shape, in order.
    pub fn args(self) -> &'static [ArgKind] {
        match self {
            Keyword::Position | Keyword::Draw => &[ArgKind::Float, ArgKind::Float],
            Keyword::Pen => &[ArgKind::ColorName],
            Keyword::Rectangle => &[ArgKind::Integer, ArgKind::Integer],
            Keyword::Circle => &[ArgKind::Integer],
            Keyword::Triangle | Keyword::Clear | Keyword::Reset => &[],
            Keyword::Fill => &[ArgKind::Switch],
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArgKind::Float => "a number",
            ArgKind::Integer => "an integer",
            ArgKind::ColorName => "a color name",
            ArgKind::Switch => "on or off",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Keyword::lookup("position"), Some(Keyword::Position));
        assert_eq!(Keyword::lookup("POSITION"), Some(Keyword::Position));
        assert_eq!(Keyword::lookup("Rectangle"), Some(Keyword::Rectangle));
        assert_eq!(Keyword::lookup("bogus"), None);
        assert_eq!(Keyword::lookup(""), None);
    }

    #[test]
    fn every_keyword_round_trips_through_its_name() {
        for kw in Keyword::ALL {
            assert_eq!(Keyword::lookup(kw.as_str()), Some(kw));
        }
    }

    #[test]
    fn argument_shapes() {
        assert_eq!(Keyword::Position.args().len(), 2);
        assert_eq!(Keyword::Circle.args(), &[ArgKind::Integer]);
        assert!(Keyword::Triangle.args().is_empty());
    }
}
