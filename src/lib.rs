pub mod cli;
pub mod features;
pub mod tools;

pub use features::dispatch::Dispatcher;
pub use tools::exec::{AdbShell, Shell};
