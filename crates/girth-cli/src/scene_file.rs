//! Scene description files.
//!
//! A scene file is a TOML document listing the shapes to build, in order:
//!
//! ```toml
//! [[shapes]]
//! kind = "circle"
//! radius = 1.0
//!
//! [[shapes]]
//! kind = "equilateral_triangle"
//! side = 2.0
//! ```

use std::{path::Path, rc::Rc};

use log::{debug, info};
use serde::Deserialize;

use girth_core::{
    error::GeometryError,
    scene::Scene,
    shape::{Circle, EquilateralTriangle, Shape, Square},
};

use crate::{config::read_toml_source, error::CliError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneFile {
    #[serde(default)]
    shapes: Vec<ShapeEntry>,
}

/// One `[[shapes]]` table. The `kind` tag is consumed by the enum, so the
/// variant structs see only the dimension keys and reject anything else.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ShapeEntry {
    Circle(RadiusEntry),
    Square(SideEntry),
    EquilateralTriangle(SideEntry),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RadiusEntry {
    radius: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SideEntry {
    side: f64,
}

impl ShapeEntry {
    fn build(&self) -> Result<Rc<dyn Shape>, GeometryError> {
        let shape: Rc<dyn Shape> = match self {
            Self::Circle(entry) => Rc::new(Circle::new(entry.radius)?),
            Self::Square(entry) => Rc::new(Square::new(entry.side)?),
            Self::EquilateralTriangle(entry) => Rc::new(EquilateralTriangle::new(entry.side)?),
        };
        Ok(shape)
    }
}

/// Loads the scene file at `path` and builds every shape it lists.
///
/// # Errors
///
/// Returns `CliError` if the file is missing or malformed, or if any entry
/// has an invalid dimension. The first invalid entry aborts loading.
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene, CliError> {
    let path = path.as_ref();
    info!(path = path.display().to_string(); "Loading scene");

    let content = read_toml_source(path)?;
    parse_scene(&content).map_err(|err| match err {
        SceneError::Toml(message) => CliError::Parse {
            path: path.to_path_buf(),
            message,
        },
        SceneError::Shape { index, source } => CliError::InvalidShape { index, source },
    })
}

#[derive(Debug)]
enum SceneError {
    Toml(String),
    Shape { index: usize, source: GeometryError },
}

fn parse_scene(content: &str) -> Result<Scene, SceneError> {
    let file: SceneFile =
        toml::from_str(content).map_err(|err| SceneError::Toml(err.to_string()))?;

    let mut scene = Scene::new();
    for (index, entry) in file.shapes.iter().enumerate() {
        let shape = entry
            .build()
            .map_err(|source| SceneError::Shape { index, source })?;
        scene.add_shape(shape);
    }

    debug!(count = scene.len(); "Scene built");
    Ok(scene)
}
