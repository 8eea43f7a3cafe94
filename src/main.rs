use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use miette::Report;
use pendraw::{CanvasOptions, Interpreter, PixmapCanvas, Program, canvas::defaults};

/// Run a pendraw program and save the drawing as PNG.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Program file, one command per line
    program: Option<PathBuf>,

    /// Where to write the PNG
    #[arg(short, long, default_value = "drawing.png")]
    output: PathBuf,

    /// Command to run before the program file (repeatable)
    #[arg(short, long = "command", value_name = "LINE")]
    commands: Vec<String>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = defaults::WIDTH)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = defaults::HEIGHT)]
    height: u32,

    /// Outline width in pixels
    #[arg(long, default_value_t = defaults::STROKE_WIDTH)]
    stroke_width: f32,
}

fn main() -> miette::Result<ExitCode> {
    // stdout stays clean; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let file = match &args.program {
        Some(path) => Some(Program::load(path)?),
        None => None,
    };

    let options = CanvasOptions {
        width: args.width,
        height: args.height,
        stroke_width: args.stroke_width,
    };
    let mut canvas = PixmapCanvas::new(&options)?;
    let report = Interpreter::new().run_batch(&mut canvas, &args.commands, file.as_ref());
    canvas.save_png(&args.output)?;

    for err in &report.commands.errors {
        eprintln!("{:?}", Report::new(err.clone()).wrap_err("in --command"));
    }
    if let (Some(path), Some(file_report)) = (&args.program, &report.file) {
        for err in &file_report.errors {
            eprintln!(
                "{:?}",
                Report::new(err.clone()).wrap_err(format!("in {}", path.display()))
            );
        }
    }
    tracing::info!(
        executed = report.executed(),
        failed = report.failed(),
        output = %args.output.display(),
        "done"
    );

    Ok(if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
