mod add;
mod auth;
mod list;
mod open;
mod render;
mod root;
mod show;

pub use root::Cli;
