/// Crate-wide error type.
///
/// Errors carry a process exit code so `main` can map failures onto
/// distinct statuses:
///
/// - 2: schema violation (a field is missing, unknown, or out of domain)
/// - 3: model artifact failure (absent, corrupt, or incompatible)
/// - 4: internal error (non-finite estimate)
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

    /// A field failed domain validation. Recoverable at the boundary:
    /// the caller must supply a corrected record.
    pub fn schema_violation(field: &str, message: impl Into<String>) -> Self {
        Self::new(2, format!("invalid {field}: {}", message.into()))
    }

    /// The model artifact could not be loaded or is incompatible with the
    /// feature contract. Fatal: no prediction can be served until resolved.
    pub fn artifact(message: impl Into<String>) -> Self {
        Self::new(3, message)
    }

    /// An internal invariant failed (e.g. the estimator produced a
    /// non-finite value).
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(4, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
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
