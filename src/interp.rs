//! Command execution and the program runner.

use crate::ast::Command;
use crate::canvas::shapes::{EllipseShape, PolygonShape, RectangleShape, ShapeEnum};
use crate::canvas::{Canvas, DrawOp, defaults};
use crate::errors::CommandError;
use crate::parse::parse_line;
use crate::program::Program;
use crate::state::DrawingState;

/// Result of applying one command: the next state and what to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub state: DrawingState,
    pub effect: Option<DrawOp>,
}

/// Apply `command` to `state` without touching any canvas.
pub fn step(state: &DrawingState, command: &Command) -> Step {
    let mut next = *state;
    let effect = match *command {
        Command::Position(point) | Command::Draw(point) => {
            next.position = point;
            None
        }
        Command::Pen(color) => {
            next.pen_color = color;
            None
        }
        Command::Rectangle { width, height } => Some(shape_op(
            state,
            RectangleShape::new(state.position, f64::from(width), f64::from(height)),
        )),
        Command::Circle { radius } => Some(shape_op(
            state,
            EllipseShape::circle(state.position, f64::from(radius)),
        )),
        Command::Triangle => {
            let triangle = PolygonShape::triangle(state.position);
            next.position = triangle.points[0];
            Some(shape_op(state, triangle))
        }
        Command::Clear => Some(DrawOp::Clear(defaults::BACKGROUND)),
        Command::Reset => {
            next.reset_position();
            None
        }
        Command::Fill(on) => {
            next.fill_mode = on;
            None
        }
    };
    Step {
        state: next,
        effect,
    }
}

fn shape_op(state: &DrawingState, shape: impl Into<ShapeEnum>) -> DrawOp {
    DrawOp::Shape {
        shape: shape.into(),
        color: state.pen_color,
        filled: state.fill_mode,
    }
}

/// What happened to one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Executed,
    /// The line was blank.
    Skipped,
}

/// Summary of one program run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    /// Every failed line, in program order.
    pub errors: Vec<CommandError>,
    pub executed: usize,
    pub skipped: usize,
}

impl RunReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Reports for command lines run ahead of a program file.
///
/// Each part numbers its lines from 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub commands: RunReport,
    pub file: Option<RunReport>,
}

impl BatchReport {
    /// True when no line of either part failed.
    pub fn is_clean(&self) -> bool {
        self.commands.is_clean() && self.file.as_ref().is_none_or(RunReport::is_clean)
    }

    pub fn executed(&self) -> usize {
        self.commands.executed + self.file.as_ref().map_or(0, |file| file.executed)
    }

    pub fn failed(&self) -> usize {
        self.commands.errors.len() + self.file.as_ref().map_or(0, |file| file.errors.len())
    }
}

/// Owns the drawing state across commands and runs.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    state: DrawingState,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    /// Apply an already-parsed command.
    pub fn execute(&mut self, canvas: &mut dyn Canvas, command: &Command) {
        let Step { state, effect } = step(&self.state, command);
        self.state = state;
        if let Some(op) = effect {
            crate::log::debug!(%op, "paint");
            op.paint(canvas);
        }
    }

    /// Parse and execute a single line. On error nothing changes.
    pub fn execute_line(
        &mut self,
        canvas: &mut dyn Canvas,
        number: usize,
        line: &str,
    ) -> Result<LineOutcome, CommandError> {
        match parse_line(number, line)? {
            Some(command) => {
                self.execute(canvas, &command);
                Ok(LineOutcome::Executed)
            }
            None => Ok(LineOutcome::Skipped),
        }
    }

    /// Start a new drawing: clear the canvas and send the pen to the origin.
    pub fn begin(&mut self, canvas: &mut dyn Canvas) {
        canvas.clear(defaults::BACKGROUND);
        self.state.reset_position();
    }

    /// Run a whole program.
    ///
    /// The canvas is cleared and the pen returns to the origin first; pen
    /// color and fill mode carry over from earlier runs. A failing line is
    /// recorded in the report and the run continues with the next one.
    pub fn run<I, S>(&mut self, canvas: &mut dyn Canvas, lines: I) -> RunReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.begin(canvas);
        self.continue_with(canvas, lines)
    }

    /// Execute more lines onto the current drawing, numbered from 1.
    pub fn continue_with<I, S>(&mut self, canvas: &mut dyn Canvas, lines: I) -> RunReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = RunReport::default();
        for (index, line) in lines.into_iter().enumerate() {
            let number = index + 1;
            match self.execute_line(canvas, number, line.as_ref()) {
                Ok(LineOutcome::Executed) => report.executed += 1,
                Ok(LineOutcome::Skipped) => report.skipped += 1,
                Err(err) => {
                    // callers own the error; this is only a trace
                    crate::log::debug!(number, error = %err, "command failed");
                    report.errors.push(err);
                }
            }
        }
        report
    }

    /// Run `commands`, then `file` onto the same drawing.
    pub fn run_batch<S: AsRef<str>>(
        &mut self,
        canvas: &mut dyn Canvas,
        commands: &[S],
        file: Option<&Program>,
    ) -> BatchReport {
        self.begin(canvas);
        let commands = self.continue_with(canvas, commands);
        let file = file.map(|program| self.continue_with(canvas, program.iter()));
        BatchReport { commands, file }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Recorder;
    use crate::types::{Color, Point};

    fn state_at(x: f64, y: f64) -> DrawingState {
        DrawingState {
            position: Point::new(x, y),
            ..DrawingState::default()
        }
    }

    #[test]
    fn position_sets_exact_coordinates() {
        let out = step(&DrawingState::new(), &Command::Position(Point::new(0.1, -7.25)));
        assert_eq!(out.state.position, Point::new(0.1, -7.25));
        assert_eq!(out.effect, None);
    }

    #[test]
    fn draw_only_moves() {
        let out = step(&state_at(1.0, 1.0), &Command::Draw(Point::new(5.0, 6.0)));
        assert_eq!(out.state.position, Point::new(5.0, 6.0));
        assert_eq!(out.effect, None);
    }

    #[test]
    fn reset_returns_to_origin() {
        let before = DrawingState {
            position: Point::new(3.0, 4.0),
            pen_color: Color::RED,
            fill_mode: true,
        };
        let out = step(&before, &Command::Reset);
        assert_eq!(out.state.position, Point::ZERO);
        assert_eq!(out.state.pen_color, Color::RED);
        assert!(out.state.fill_mode);
    }

    #[test]
    fn rectangle_keeps_position() {
        let out = step(&state_at(10.0, 10.0), &Command::Rectangle { width: 20, height: 30 });
        assert_eq!(out.state.position, Point::new(10.0, 10.0));
        assert_eq!(
            out.effect,
            Some(DrawOp::Shape {
                shape: RectangleShape::new(Point::new(10.0, 10.0), 20.0, 30.0).into(),
                color: Color::BLACK,
                filled: false,
            })
        );
    }

    #[test]
    fn circle_is_centered_on_pen() {
        let state = DrawingState {
            fill_mode: true,
            ..state_at(5.0, 5.0)
        };
        let out = step(&state, &Command::Circle { radius: 3 });
        assert_eq!(
            out.effect,
            Some(DrawOp::Shape {
                shape: EllipseShape::circle(Point::new(5.0, 5.0), 3.0).into(),
                color: Color::BLACK,
                filled: true,
            })
        );
    }

    #[test]
    fn triangle_leaves_pen_on_apex() {
        let out = step(&state_at(100.0, 20.0), &Command::Triangle);
        assert_eq!(out.state.position, Point::new(100.0, 20.0));
        let Some(DrawOp::Shape { shape: ShapeEnum::Polygon(poly), .. }) = out.effect else {
            panic!("expected a polygon");
        };
        assert_eq!(
            poly.points,
            vec![
                Point::new(100.0, 20.0),
                Point::new(150.0, 120.0),
                Point::new(50.0, 120.0)
            ]
        );
    }

    #[test]
    fn clear_paints_background() {
        let out = step(&state_at(1.0, 2.0), &Command::Clear);
        assert_eq!(out.effect, Some(DrawOp::Clear(Color::WHITE)));
        assert_eq!(out.state, state_at(1.0, 2.0));
    }

    #[test]
    fn failed_line_changes_nothing() {
        let mut interp = Interpreter::new();
        let mut canvas = Recorder::new();
        interp
            .execute_line(&mut canvas, 1, "position 5 6")
            .unwrap();
        interp.execute_line(&mut canvas, 2, "pen blue").unwrap();
        interp.execute_line(&mut canvas, 3, "fill on").unwrap();
        let before = *interp.state();

        for bad in ["rectangle abc 10", "rectangle 10 abc", "pen nope", "position 1", "fill"] {
            assert!(interp.execute_line(&mut canvas, 4, bad).is_err());
            assert_eq!(*interp.state(), before, "{bad} changed the state");
        }
        assert!(canvas.ops().is_empty());
    }

    #[test]
    fn run_resets_position_but_keeps_pen() {
        let mut interp = Interpreter::new();
        let mut canvas = Recorder::new();
        interp.run(&mut canvas, ["position 10 10", "pen red", "fill on"]);
        assert_eq!(interp.state().position, Point::new(10.0, 10.0));

        let report = interp.run(&mut canvas, ["circle 5"]);
        assert!(report.is_clean());
        assert_eq!(
            canvas.ops()[1],
            DrawOp::Shape {
                shape: EllipseShape::circle(Point::ZERO, 5.0).into(),
                color: Color::RED,
                filled: true,
            }
        );
    }

    #[test]
    fn run_counts_lines() {
        let mut interp = Interpreter::new();
        let mut canvas = Recorder::new();
        let report = interp.run(&mut canvas, ["reset", "", "bogus", "  ", "triangle"]);
        assert_eq!(report.executed, 2);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].number(), 3);
    }

    #[test]
    fn batch_numbers_each_part_from_one() {
        let mut interp = Interpreter::new();
        let mut canvas = Recorder::new();
        let file = Program::from_text("circle 10\nbogus\n");
        let report = interp.run_batch(&mut canvas, &["pen red", "fill on"], Some(&file));

        assert!(report.commands.is_clean());
        let file_report = report.file.as_ref().unwrap();
        assert_eq!(file_report.errors.len(), 1);
        assert_eq!(file_report.errors[0].number(), 2);
        assert!(file_report.errors[0].to_string().starts_with("line 2:"));
        assert!(!report.is_clean());
        assert_eq!((report.executed(), report.failed()), (3, 1));

        // the file ran after the commands, with their pen
        assert_eq!(
            canvas.ops()[1],
            DrawOp::Shape {
                shape: EllipseShape::circle(Point::ZERO, 10.0).into(),
                color: Color::RED,
                filled: true,
            }
        );
    }

    #[test]
    fn continue_with_keeps_the_drawing() {
        let mut interp = Interpreter::new();
        let mut canvas = Recorder::new();
        interp.run(&mut canvas, ["position 4 4", "circle 1"]);
        let report = interp.continue_with(&mut canvas, ["circle 2"]);
        assert!(report.is_clean());
        assert_eq!(canvas.shapes().count(), 2);
        assert_eq!(interp.state().position, Point::new(4.0, 4.0));
    }
}
