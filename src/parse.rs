//! Tokenize program lines and validate them into [`Command`]s.

use miette::SourceSpan;

use crate::ast::{Command, Keyword};
use crate::errors::CommandError;
use crate::types::{Color, Point};

/// A slice of a line between single spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Byte offset of `text` within the line.
    pub offset: usize,
}

impl Token<'_> {
    fn span(&self) -> SourceSpan {
        (self.offset, self.text.len()).into()
    }
}

/// Split a line on single spaces, ignoring trailing carriage returns.
///
/// Runs of spaces are not collapsed: each extra space yields an empty token.
/// A line made only of spaces (or nothing) yields no tokens at all.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let line = line.trim_end_matches('\r');
    if line.chars().all(|c| c == ' ') {
        return Vec::new();
    }

    let mut offset = 0;
    line.split(' ')
        .map(|text| {
            let token = Token { text, offset };
            offset += text.len() + 1;
            token
        })
        .collect()
}

/// Parse one line. `number` is the 1-based line number used in diagnostics.
///
/// Returns `Ok(None)` for blank lines.
pub fn parse_line(number: usize, line: &str) -> Result<Option<Command>, CommandError> {
    let tokens = tokenize(line);
    let Some((head, rest)) = tokens.split_first() else {
        return Ok(None);
    };

    let Some(keyword) = Keyword::lookup(head.text) else {
        return Err(CommandError::UnknownCommand {
            keyword: head.text.to_string(),
            number,
            line: line.to_string(),
            span: head.span(),
        });
    };

    let args = Args {
        keyword,
        head: *head,
        rest,
        number,
        line,
    };
    args.check_arity()?;

    let command = match keyword {
        Keyword::Position => Command::Position(args.point()?),
        Keyword::Draw => Command::Draw(args.point()?),
        Keyword::Pen => Command::Pen(args.color(0)?),
        Keyword::Rectangle => Command::Rectangle {
            width: args.integer(0)?,
            height: args.integer(1)?,
        },
        Keyword::Circle => Command::Circle {
            radius: args.integer(0)?,
        },
        Keyword::Triangle => Command::Triangle,
        Keyword::Clear => Command::Clear,
        Keyword::Reset => Command::Reset,
        Keyword::Fill => Command::Fill(args.switch(0)?),
    };

    crate::log::debug!(number, ?command, "parsed line");
    Ok(Some(command))
}

/// Arguments of one line, with enough context to build errors.
struct Args<'l, 't> {
    keyword: Keyword,
    head: Token<'l>,
    rest: &'t [Token<'l>],
    number: usize,
    line: &'l str,
}

impl Args<'_, '_> {
    fn check_arity(&self) -> Result<(), CommandError> {
        let expected = self.keyword.args().len();
        if self.rest.len() >= expected {
            return Ok(());
        }
        let last = self.rest.last().copied().unwrap_or(self.head);
        Err(CommandError::Arity {
            keyword: self.keyword,
            expected,
            found: self.rest.len(),
            number: self.number,
            line: self.line.to_string(),
            span: last.span(),
        })
    }

    fn type_error(&self, index: usize) -> CommandError {
        let token = self.rest[index];
        let expected = self.keyword.args()[index];
        CommandError::Type {
            keyword: self.keyword,
            position: index + 1,
            expected,
            token: token.text.to_string(),
            number: self.number,
            line: self.line.to_string(),
            span: self.visible_span(token),
        }
    }

    /// A span miette can draw: empty tokens get one column, and one that
    /// sits at the end of the line points at the space before it.
    fn visible_span(&self, token: Token<'_>) -> SourceSpan {
        if !token.text.is_empty() {
            return token.span();
        }
        let end = self.line.trim_end_matches('\r').len();
        let offset = if token.offset >= end {
            token.offset.saturating_sub(1)
        } else {
            token.offset
        };
        (offset, 1).into()
    }

    fn float(&self, index: usize) -> Result<f64, CommandError> {
        self.rest[index]
            .text
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| self.type_error(index))
    }

    fn point(&self) -> Result<Point, CommandError> {
        Ok(Point::new(self.float(0)?, self.float(1)?))
    }

    fn integer(&self, index: usize) -> Result<i32, CommandError> {
        self.rest[index]
            .text
            .parse::<i32>()
            .map_err(|_| self.type_error(index))
    }

    fn color(&self, index: usize) -> Result<Color, CommandError> {
        let token = self.rest[index];
        if token.text.is_empty() {
            return Err(self.type_error(index));
        }
        Color::from_name(token.text).ok_or_else(|| CommandError::UnknownColor {
            name: token.text.to_string(),
            number: self.number,
            line: self.line.to_string(),
            span: token.span(),
        })
    }

    /// Only the exact lowercase token `on` enables the switch.
    fn switch(&self, index: usize) -> Result<bool, CommandError> {
        match self.rest[index].text {
            "" => Err(self.type_error(index)),
            text => Ok(text == "on"),
        }
    }
}
