pub mod caster;
pub mod pipeline;

pub use caster::{Facing, Hit, STEP_LIMIT, cast};
pub use pipeline::Frame;
