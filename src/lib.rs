pub mod camera;
pub mod config;
pub mod demo;
pub mod lighting;
pub mod math;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod sink;
pub mod tracer;
