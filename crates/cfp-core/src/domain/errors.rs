pub type CfpResult<T> = Result<T, CfpError>;
pub type ParserResult<T> = CfpResult<T>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CfpErrorCategory {
    InputValidationError,
    IoSystemError,
    ParseError,
    InternalError,
}

impl CfpErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::ParseError => 4,
            Self::InternalError => 5,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InputValidationError => "InputValidationError",
            Self::IoSystemError => "IoSystemError",
            Self::ParseError => "ParseError",
            Self::InternalError => "InternalError",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} [{}] {}", .category.as_str(), .placeholder, .message)]
pub struct CfpError {
    category: CfpErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl CfpError {
    pub fn new(
        category: CfpErrorCategory,
        placeholder: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            placeholder,
            message: message.into(),
        }
    }

    pub fn input_validation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(
            CfpErrorCategory::InputValidationError,
            placeholder,
            message,
        )
    }

    pub fn io_system(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(CfpErrorCategory::IoSystemError, placeholder, message)
    }

    pub fn parse(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(CfpErrorCategory::ParseError, placeholder, message)
    }

    pub fn internal(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(CfpErrorCategory::InternalError, placeholder, message)
    }

    pub const fn category(&self) -> CfpErrorCategory {
        self.category
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.placeholder, self.message)
    }

    pub fn fatal_exit_line(&self) -> String {
        format!("FATAL EXIT CODE: {}", self.exit_code())
    }
}
