use std::error::Error;
use std::fmt::{Display, Formatter};

pub type LcaResult<T> = Result<T, LcaError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LcaErrorCategory {
    Success,
    InputValidationError,
    IoSystemError,
    MissingDataError,
    UnsupportedUnitError,
    ComputationError,
}

impl LcaErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::MissingDataError => 4,
            Self::UnsupportedUnitError => 5,
            Self::ComputationError => 6,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::InputValidationError => "InputValidationError",
            Self::IoSystemError => "IoSystemError",
            Self::MissingDataError => "MissingDataError",
            Self::UnsupportedUnitError => "UnsupportedUnitError",
            Self::ComputationError => "ComputationError",
        }
    }

    pub const fn is_fatal(self) -> bool {
        !matches!(self, Self::Success)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcaError {
    category: LcaErrorCategory,
    code: &'static str,
    message: String,
}

impl LcaError {
    pub fn new(category: LcaErrorCategory, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            category,
            code,
            message: message.into(),
        }
    }

    pub fn input_validation(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(LcaErrorCategory::InputValidationError, code, message)
    }

    pub fn io_system(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(LcaErrorCategory::IoSystemError, code, message)
    }

    pub fn missing_data(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(LcaErrorCategory::MissingDataError, code, message)
    }

    pub fn unsupported_unit(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(LcaErrorCategory::UnsupportedUnitError, code, message)
    }

    pub fn computation(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(LcaErrorCategory::ComputationError, code, message)
    }

    pub const fn category(&self) -> LcaErrorCategory {
        self.category
    }

    pub const fn code(&self) -> &'static str {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        let severity = if self.category.is_fatal() {
            "ERROR"
        } else {
            "INFO"
        };
        format!("{}: [{}] {}", severity, self.code, self.message)
    }

    pub fn fatal_exit_line(&self) -> Option<String> {
        self.category
            .is_fatal()
            .then(|| format!("FATAL EXIT CODE: {}", self.exit_code()))
    }
}

impl Display for LcaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.category.label(),
            self.code,
            self.message
        )
    }
}

impl Error for LcaError {}
