pub mod bodies;
pub mod camera;
pub mod input;
pub mod plugin;
pub mod ui;
