use thiserror::Error;

/// Error for EmployeeCode validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmployeeCodeError {
    #[error("must not be empty")]
    Empty,

    #[error("too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for required free-text fields (name, department)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequiredTextError {
    #[error("must not be blank")]
    Blank,

    #[error("too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for Salary validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SalaryError {
    #[error("must not be negative, got {0}")]
    Negative(i32),
}

/// Error for JoiningDate parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JoiningDateError {
    #[error("must be YYYY-MM-DD, got {0:?}")]
    InvalidFormat(String),
}

/// Error for list pagination parameters
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page must be at least 1, got {0}")]
    InvalidPage(u32),

    #[error("size must be between {min} and {max}, got {actual}")]
    InvalidSize { min: u32, max: u32, actual: u32 },
}

/// Top-level error for employee operations
#[derive(Debug, Clone, Error)]
pub enum EmployeeError {
    #[error("No fields provided for update")]
    EmptyUpdate,

    // Domain-level errors
    #[error("Employee not found: {0}")]
    NotFound(String),

    #[error("employee_id already exists: {0}")]
    EmployeeIdAlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
