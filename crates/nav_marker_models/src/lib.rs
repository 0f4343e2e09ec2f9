pub mod config;
pub mod data;
pub mod marker;
pub mod messages;
pub mod render;
pub mod segment;
