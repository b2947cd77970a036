pub mod body;
pub mod field;
pub mod procgen;

pub use body::Body;
pub use field::ForceField;
