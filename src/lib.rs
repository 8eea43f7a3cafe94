//! A small line-oriented drawing language.
//!
//! Each program line is one command (`position 10 10`, `pen red`,
//! `rectangle 20 30`, ...). The [`Interpreter`] keeps the pen state, paints
//! shapes onto any [`Canvas`], and reports bad lines without stopping.
//!
//! ```
//! use pendraw::{Interpreter, Recorder};
//!
//! let mut canvas = Recorder::new();
//! let report = Interpreter::new().run(&mut canvas, ["pen red", "circle 10"]);
//! assert!(report.is_clean());
//! assert_eq!(canvas.shapes().count(), 1);
//! ```

pub mod ast;
pub mod canvas;
pub mod errors;
pub mod interp;
pub mod log;
pub mod parse;
pub mod program;
pub mod state;
pub mod types;

pub use ast::{ArgKind, Command, Keyword};
pub use canvas::{Canvas, CanvasOptions, DrawOp, PixmapCanvas, Recorder};
pub use errors::{CommandError, PendrawError};
pub use interp::{BatchReport, Interpreter, LineOutcome, RunReport, step};
pub use parse::parse_line;
pub use program::Program;
pub use state::DrawingState;
pub use types::{Color, Point};

/// Run `program` on a fresh interpreter and keep the display list.
pub fn record(program: &Program) -> (Recorder, DrawingState, RunReport) {
    let mut canvas = Recorder::new();
    let mut interp = Interpreter::new();
    let report = interp.run(&mut canvas, program.iter());
    (canvas, *interp.state(), report)
}

/// Run `program` on a fresh interpreter and encode the result as PNG.
pub fn render_png(
    program: &Program,
    options: &CanvasOptions,
) -> Result<(Vec<u8>, RunReport), PendrawError> {
    let mut canvas = PixmapCanvas::new(options)?;
    let report = Interpreter::new().run(&mut canvas, program.iter());
    Ok((canvas.encode_png()?, report))
}
