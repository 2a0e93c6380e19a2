mod commands;
mod render;
mod setup;
mod study;

pub use commands::run;
