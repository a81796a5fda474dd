//! Grid-based first-person ray casting renderer.
//!
//! One ray per vertical screen column is traced through a 2D occupancy grid
//! ([`world::GridMap`]); the first wall crossing is projected into a vertical
//! strip whose height and brightness fall off with distance.
//!
//! * [`world`] – map, camera and the small vector helpers they share.
//! * [`engine`] – the ray caster and the per-frame column pipeline.
//! * [`renderer`] – software framebuffer back-end plus the top-down overlay.
//! * [`sim`] – player input command and the per-tic update step.

pub mod engine;
pub mod renderer;
pub mod sim;
pub mod world;
