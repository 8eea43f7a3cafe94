//! End-to-end runs of whole programs against the recording canvas.

use pendraw::canvas::shapes::{PolygonShape, RectangleShape, ShapeEnum};
use pendraw::{
    CanvasOptions, Color, CommandError, DrawOp, DrawingState, Interpreter, PixmapCanvas, Point,
    Program, Recorder, record,
};

fn run(lines: &[&str]) -> (Recorder, DrawingState, Vec<CommandError>) {
    let program: Program = lines.iter().copied().collect();
    let (canvas, state, report) = record(&program);
    (canvas, state, report.errors)
}

#[test]
fn filled_red_rectangle() {
    let (canvas, state, errors) = run(&["position 10 10", "pen Red", "fill on", "rectangle 20 30"]);
    assert!(errors.is_empty());

    let shapes: Vec<_> = canvas
        .ops()
        .iter()
        .filter(|op| matches!(op, DrawOp::Shape { .. }))
        .collect();
    assert_eq!(
        shapes,
        [&DrawOp::Shape {
            shape: RectangleShape::new(Point::new(10.0, 10.0), 20.0, 30.0).into(),
            color: Color::RED,
            filled: true,
        }]
    );
    assert_eq!(state.position, Point::new(10.0, 10.0));

    insta::assert_snapshot!(canvas.to_text().trim_end(), @r"
    clear white
    fill rectangle at (10, 10) size 20x30 red
    ");
}

#[test]
fn lone_triangle_from_defaults() {
    let (canvas, state, errors) = run(&["triangle"]);
    assert!(errors.is_empty());

    let shape = canvas.shapes().next().cloned();
    assert_eq!(
        shape,
        Some(ShapeEnum::Polygon(PolygonShape {
            points: vec![
                Point::new(0.0, 0.0),
                Point::new(50.0, 100.0),
                Point::new(-50.0, 100.0)
            ],
        }))
    );
    assert_eq!(state.position, Point::new(0.0, 0.0));
}

#[test]
fn bogus_command_is_one_error() {
    let (canvas, state, errors) = run(&["bogus 1 2"]);
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        CommandError::UnknownCommand { keyword, line, number, .. } => {
            assert_eq!(keyword, "bogus");
            assert_eq!(line, "bogus 1 2");
            assert_eq!(*number, 1);
        }
        other => panic!("expected UnknownCommand, got {other:?}"),
    }
    assert_eq!(state, DrawingState::default());
    assert_eq!(canvas.ops(), &[DrawOp::Clear(Color::WHITE)]);
}

#[test]
fn bad_lines_do_not_abort_the_run() {
    let (canvas, state, errors) = run(&[
        "position 50 50",
        "rectangle abc 10",
        "pen mauvish",
        "circle",
        "fill on",
        "circle 25",
        "frobnicate",
    ]);

    let numbers: Vec<_> = errors.iter().map(CommandError::number).collect();
    assert_eq!(numbers, [2, 3, 4, 7]);
    assert!(matches!(errors[0], CommandError::Type { .. }));
    assert!(matches!(errors[1], CommandError::UnknownColor { .. }));
    assert!(matches!(errors[2], CommandError::Arity { .. }));
    assert!(matches!(errors[3], CommandError::UnknownCommand { .. }));

    assert_eq!(state.position, Point::new(50.0, 50.0));
    assert_eq!(state.pen_color, Color::BLACK);
    assert!(state.fill_mode);

    insta::assert_snapshot!(canvas.to_text().trim_end(), @r"
    clear white
    fill ellipse at (50, 50) radius 25x25 black
    ");
}

#[test]
fn clear_in_the_middle_wipes_earlier_shapes() {
    let (canvas, _, errors) = run(&["circle 10", "clear", "pen blue", "triangle"]);
    assert!(errors.is_empty());
    insta::assert_snapshot!(canvas.to_text().trim_end(), @r"
    clear white
    stroke polygon (0, 0) (50, 100) (-50, 100) blue
    ");
}

#[test]
fn reset_and_draw() {
    let (_, state, errors) = run(&["draw 30 40", "reset"]);
    assert!(errors.is_empty());
    assert_eq!(state.position, Point::ZERO);

    let (_, state, _) = run(&["draw 30.5 -40"]);
    assert_eq!(state.position, Point::new(30.5, -40.0));
}

#[test]
fn fill_switch_values() {
    for (arg, expected) in [("on", true), ("off", false), ("ON", false), ("xyz", false)] {
        let line = format!("fill {arg}");
        let (_, state, errors) = run(&["fill on", &line]);
        assert!(errors.is_empty());
        assert_eq!(state.fill_mode, expected, "{line}");
    }
}

#[test]
fn state_survives_between_runs_except_position() {
    let mut interp = Interpreter::new();
    let mut canvas = Recorder::new();
    interp.run(&mut canvas, ["pen green", "fill on", "position 7 7"]);
    interp.run(&mut canvas, ["rectangle 1 1"]);

    assert_eq!(
        canvas.shapes().next(),
        Some(&ShapeEnum::from(RectangleShape::new(Point::ZERO, 1.0, 1.0)))
    );
    assert_eq!(interp.state().pen_color, Color::rgb(0, 128, 0));
}

#[test]
fn saved_program_runs_the_same() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("house.txt");

    let program = Program::from_text("position 100 100\nrectangle 100 80\nposition 150 0\ntriangle\n");
    program.save(&path).unwrap();
    let loaded = Program::load(&path).unwrap();
    assert_eq!(loaded.lines(), program.lines());

    let (before, _, _) = record(&program);
    let (after, _, _) = record(&loaded);
    assert_eq!(before, after);
}

#[test]
fn pixmap_run_paints_pixels() {
    let mut canvas = PixmapCanvas::new(&CanvasOptions::default()).unwrap();
    let report = Interpreter::new().run(
        &mut canvas,
        ["position 10 10", "pen Red", "fill on", "rectangle 20 30"],
    );
    assert!(report.is_clean());
    assert_eq!(canvas.pixel(15, 20), Some(Color::RED));
    assert_eq!(canvas.pixel(5, 5), Some(Color::WHITE));
    assert_eq!((canvas.width(), canvas.height()), (800, 450));
}

#[test]
fn render_png_reports_errors() {
    let program = Program::from_text("circle 10\ncircle ten\n");
    let (png, report) = pendraw::render_png(&program, &CanvasOptions::default()).unwrap();
    assert!(png.starts_with(b"\x89PNG"));
    assert_eq!(report.executed, 1);
    assert_eq!(report.errors.len(), 1);
}
