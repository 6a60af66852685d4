/// Terminal output formatting utilities
///
/// Colored, labelled status lines. Errors and warnings go to stderr so that
/// command output on stdout can be piped.
use colored::Colorize;

/// Output level determines the color and prefix of the message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLevel {
    /// Informational messages (blue)
    Info,
    /// Success messages (green)
    Success,
    /// Warning messages (yellow)
    Warning,
    /// Error messages (red)
    Error,
}

impl OutputLevel {
    fn color(&self) -> colored::Color {
        match self {
            OutputLevel::Info => colored::Color::Blue,
            OutputLevel::Success => colored::Color::Green,
            OutputLevel::Warning => colored::Color::Yellow,
            OutputLevel::Error => colored::Color::Red,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            OutputLevel::Info => "info",
            OutputLevel::Success => "success",
            OutputLevel::Warning => "warning",
            OutputLevel::Error => "error",
        }
    }

    fn to_stderr(&self) -> bool {
        matches!(self, OutputLevel::Warning | OutputLevel::Error)
    }
}

/// Print a formatted message
pub fn print_msg(level: OutputLevel, message: impl AsRef<str>) {
    let label = level.label().color(level.color()).bold();
    if level.to_stderr() {
        eprintln!("{}: {}", label, message.as_ref());
    } else {
        println!("{}: {}", label, message.as_ref());
    }
}

pub fn print_error(message: impl AsRef<str>) {
    print_msg(OutputLevel::Error, message);
}

pub fn print_info(message: impl AsRef<str>) {
    print_msg(OutputLevel::Info, message);
}

pub fn print_warning(message: impl AsRef<str>) {
    print_msg(OutputLevel::Warning, message);
}

pub fn print_success(message: impl AsRef<str>) {
    print_msg(OutputLevel::Success, message);
}

/// Print raw command output, dropping trailing blank lines
pub fn print_output(output: impl AsRef<str>) {
    println!("{}", output.as_ref().trim_end());
}

/// Print an error message and exit with code 1
pub fn exit_error(message: impl AsRef<str>) -> ! {
    print_error(message);
    std::process::exit(1);
}
