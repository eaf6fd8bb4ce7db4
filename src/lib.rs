pub mod commands;
pub mod core;
pub mod pages;
pub mod utils;
