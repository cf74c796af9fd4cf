//! 交互式命令行支持
//!
//! 命令解析与执行、结果打印、Tab 补全

pub mod commands;
pub mod completer;
pub mod printer;

pub use commands::{execute_command, run_line, Command, CommandResult};
pub use completer::LabelCompleter;
pub use printer::{OutputFormat, Printer};
