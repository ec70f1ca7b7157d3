/// Bad configuration or unreadable input file.
pub const EXIT_CONFIG: u8 = 2;
/// The output file could not be written.
pub const EXIT_OUTPUT: u8 = 3;
/// Upstream request failed. Only seen in per-series log lines: the client
/// drops the series instead of returning this to `main`.
pub const EXIT_UPSTREAM: u8 = 4;

/// Program-level error: a message for the operator plus the process exit code.
///
/// Per-series fetch failures never surface as this type at the top level;
/// the client logs them and drops the series.
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
