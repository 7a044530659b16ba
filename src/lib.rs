pub mod app;
pub mod canvas;
pub mod color;
pub mod config;
pub mod export;
pub mod field;
pub mod gallery;
pub mod palette;
pub mod params;
pub mod patterns;
pub mod render;
pub mod rng;
pub mod scene;
pub mod symmetry;
pub mod terminal;
