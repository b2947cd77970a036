pub mod pipeline;
pub mod scheduler;
pub mod simulation;
