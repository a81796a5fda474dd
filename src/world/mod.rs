mod camera;

pub mod grid;
pub mod helpers;

pub use camera::Camera;
pub use grid::{GridMap, MapError};
