mod canvas;
mod generator;
mod polygon;

pub use canvas::CanvasFrame;
pub use generator::{GenerateShape, ShapeMode, ShapeRequest, MIN_SIDES};
pub use polygon::Polygon;
