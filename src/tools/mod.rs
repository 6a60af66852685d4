pub mod errors;
pub mod exec;
pub mod logging;
pub mod macros;
pub mod shell_escape;
pub mod text;
pub mod types;
