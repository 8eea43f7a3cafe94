//! Error types with rich diagnostics using miette
//!
//! Line-scoped errors carry the offending line as source code and point a
//! label at the token that caused them.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::ast::{ArgKind, Keyword};

// ============================================================================
// Command Errors
// ============================================================================

/// A failure confined to a single program line.
///
/// The runner records these and moves on to the next line.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("line {number}: unknown command `{keyword}`")]
    #[diagnostic(
        code(pendraw::command::unknown),
        help("commands are: position, pen, draw, rectangle, circle, triangle, clear, reset, fill")
    )]
    UnknownCommand {
        keyword: String,
        number: usize,
        #[source_code]
        line: String,
        #[label("not a command")]
        span: SourceSpan,
    },

    #[error("line {number}: `{keyword}` takes {expected} argument(s) but {found} given")]
    #[diagnostic(code(pendraw::command::arity))]
    Arity {
        keyword: Keyword,
        expected: usize,
        found: usize,
        number: usize,
        #[source_code]
        line: String,
        #[label("missing argument after this")]
        span: SourceSpan,
    },

    #[error("line {number}: argument {position} of `{keyword}` must be {expected}, got `{token}`")]
    #[diagnostic(code(pendraw::command::type_mismatch))]
    Type {
        keyword: Keyword,
        /// 1-based argument index.
        position: usize,
        expected: ArgKind,
        token: String,
        number: usize,
        #[source_code]
        line: String,
        #[label("expected {expected}")]
        span: SourceSpan,
    },

    #[error("line {number}: unknown color `{name}`")]
    #[diagnostic(
        code(pendraw::command::unknown_color),
        help("use a CSS color name such as red, black or cornflowerblue")
    )]
    UnknownColor {
        name: String,
        number: usize,
        #[source_code]
        line: String,
        #[label("not in the color table")]
        span: SourceSpan,
    },
}

impl CommandError {
    /// The full text of the line that failed.
    pub fn line(&self) -> &str {
        match self {
            CommandError::UnknownCommand { line, .. }
            | CommandError::Arity { line, .. }
            | CommandError::Type { line, .. }
            | CommandError::UnknownColor { line, .. } => line,
        }
    }

    /// 1-based line number within the program.
    pub fn number(&self) -> usize {
        match self {
            CommandError::UnknownCommand { number, .. }
            | CommandError::Arity { number, .. }
            | CommandError::Type { number, .. }
            | CommandError::UnknownColor { number, .. } => *number,
        }
    }
}

// ============================================================================
// Run Errors
// ============================================================================

/// Failures outside a single line: files, canvases, image encoding.
#[derive(Error, Diagnostic, Debug)]
pub enum PendrawError {
    #[error("could not read program {path}")]
    #[diagnostic(code(pendraw::io::read))]
    ReadProgram {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write program {path}")]
    #[diagnostic(code(pendraw::io::write))]
    WriteProgram {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid canvas size {width}x{height}")]
    #[diagnostic(
        code(pendraw::canvas::invalid_size),
        help("width and height must both be at least 1")
    )]
    InvalidCanvasSize { width: u32, height: u32 },

    #[error("could not encode PNG: {message}")]
    #[diagnostic(code(pendraw::canvas::encode))]
    Encode { message: String },

    #[error("could not write image {path}")]
    #[diagnostic(code(pendraw::io::write_image))]
    WriteImage {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
