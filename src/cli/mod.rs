pub mod commands;
pub mod forms;
pub mod output;
pub mod shell;

pub use shell::run_cli;
