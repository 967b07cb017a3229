//! CLI logic for the Girth perimeter tool.
//!
//! Without an input file the tool walks through the library's behavior on
//! unit shapes, negative dimensions, and small scenes. With a scene file it
//! prints the perimeter of each listed shape and the scene total.

pub mod config;
pub mod error;
pub mod scene_file;

mod args;

pub use args::Args;
pub use error::CliError;

use std::{io::Write, rc::Rc};

use log::{info, warn};

use girth_core::{
    scene::Scene,
    shape::{Circle, EquilateralTriangle, Shape, Square},
};

use config::OutputConfig;

/// Run the Girth CLI application, writing the report to `out`.
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration or scene file parsing errors
/// - Invalid shapes in a scene file
pub fn run(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let report = Report::new(out, app_config.output());

    match &args.input {
        Some(input) => report_scene_file(report, input),
        None => report_demo(report),
    }
}

/// Formats perimeters with the configured precision.
struct Report<'a, W> {
    out: &'a mut W,
    decimals: usize,
}

impl<'a, W: Write> Report<'a, W> {
    fn new(out: &'a mut W, config: &OutputConfig) -> Self {
        Self {
            out,
            decimals: config.decimals(),
        }
    }

    fn circumference(&mut self, label: &str, value: f64) -> Result<(), CliError> {
        writeln!(
            self.out,
            "Circumference of {label}: {value:.prec$}",
            prec = self.decimals
        )?;
        Ok(())
    }

    fn line(&mut self, text: &str) -> Result<(), CliError> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }
}

fn report_scene_file<W: Write>(mut report: Report<'_, W>, input: &str) -> Result<(), CliError> {
    info!(input_path = input; "Processing scene file");

    let scene = scene_file::load_scene(input)?;
    for (index, shape) in scene.shapes().enumerate() {
        let label = format!("shape #{index} ({})", shape.name());
        report.circumference(&label, shape.get_circumference())?;
    }
    report.circumference("the scene", scene.get_circumference())?;

    info!(shapes = scene.len(); "Scene processed");
    Ok(())
}

fn report_demo<W: Write>(mut report: Report<'_, W>) -> Result<(), CliError> {
    info!("Running demonstration");

    let unit_shapes: [Rc<dyn Shape>; 3] = [
        Rc::new(Circle::new(1.0)?),
        Rc::new(Square::new(1.0)?),
        Rc::new(EquilateralTriangle::new(1.0)?),
    ];
    for shape in unit_shapes {
        let label = format!("unit {}", shape.name());
        report.circumference(&label, shape.get_circumference())?;
    }

    let invalid_shapes = [
        (Circle::NAME, Circle::new(-1.0).err()),
        (Square::NAME, Square::new(-1.0).err()),
        (EquilateralTriangle::NAME, EquilateralTriangle::new(-1.0).err()),
    ];
    for (name, err) in invalid_shapes {
        report.line(&format!("Creating {name} with dimension -1"))?;
        if let Some(err) = err {
            warn!(shape = name; "Construction failed: {err}");
            report.line(&format!("Caught error: {err}"))?;
        }
    }

    let mut scene = Scene::new();
    scene.add_shape(Rc::new(Circle::new(1.0)?));
    scene.add_shape(Rc::new(Square::new(1.0)?));
    report.circumference("all unit shapes", scene.get_circumference())?;

    report.circumference("the empty scene", Scene::new().get_circumference())?;

    Ok(())
}
