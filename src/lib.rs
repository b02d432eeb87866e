pub mod config;
pub mod youtube;
