use std::fmt;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::employee::errors::EmployeeCodeError;
use crate::domain::employee::errors::JoiningDateError;
use crate::domain::employee::errors::PaginationError;
use crate::domain::employee::errors::RequiredTextError;
use crate::domain::employee::errors::SalaryError;

/// Employee record.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: EmployeeRecordId,
    pub employee_id: EmployeeCode,
    pub name: EmployeeName,
    pub department: Department,
    pub salary: Salary,
    pub joining_date: JoiningDate,
    pub skills: Vec<String>,
}

/// Storage identifier of an employee record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmployeeRecordId(pub Uuid);

impl EmployeeRecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EmployeeRecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EmployeeRecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Business identifier of an employee (e.g. `E123`), unique across records.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmployeeCode(String);

impl EmployeeCode {
    const MAX_LENGTH: usize = 64;

    /// # Errors
    /// * `Empty` - Code is empty after trimming
    /// * `TooLong` - Code longer than 64 characters
    pub fn new(code: String) -> Result<Self, EmployeeCodeError> {
        let code = code.trim();
        let length = code.chars().count();

        if length == 0 {
            Err(EmployeeCodeError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(EmployeeCodeError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(code.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

fn required_text(value: String, max: usize) -> Result<String, RequiredTextError> {
    let value = value.trim();
    let length = value.chars().count();

    if length == 0 {
        Err(RequiredTextError::Blank)
    } else if length > max {
        Err(RequiredTextError::TooLong {
            max,
            actual: length,
        })
    } else {
        Ok(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeName(String);

impl EmployeeName {
    const MAX_LENGTH: usize = 128;

    pub fn new(name: String) -> Result<Self, RequiredTextError> {
        required_text(name, Self::MAX_LENGTH).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department(String);

impl Department {
    const MAX_LENGTH: usize = 64;

    pub fn new(department: String) -> Result<Self, RequiredTextError> {
        required_text(department, Self::MAX_LENGTH).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Non-negative yearly salary in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Salary(i32);

impl Salary {
    pub fn new(amount: i32) -> Result<Self, SalaryError> {
        if amount < 0 {
            Err(SalaryError::Negative(amount))
        } else {
            Ok(Self(amount))
        }
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Calendar date an employee joined, written as `YYYY-MM-DD` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct JoiningDate(NaiveDate);

impl JoiningDate {
    const FORMAT: &'static str = "%Y-%m-%d";

    /// Parse a strictly zero-padded `YYYY-MM-DD` date.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not of that shape, or not a real calendar date
    pub fn parse(value: &str) -> Result<Self, JoiningDateError> {
        let well_shaped = value.len() == 10
            && value.bytes().enumerate().all(|(i, b)| match i {
                4 | 7 => b == b'-',
                _ => b.is_ascii_digit(),
            });

        if !well_shaped {
            return Err(JoiningDateError::InvalidFormat(value.to_string()));
        }

        NaiveDate::parse_from_str(value, Self::FORMAT)
            .map(Self)
            .map_err(|_| JoiningDateError::InvalidFormat(value.to_string()))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for JoiningDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

/// Command to create a new employee with domain types
#[derive(Debug, Clone)]
pub struct CreateEmployeeCommand {
    pub employee_id: EmployeeCode,
    pub name: EmployeeName,
    pub department: Department,
    pub salary: Salary,
    pub joining_date: JoiningDate,
    pub skills: Vec<String>,
}

/// Command to update an existing employee with optional validated fields.
///
/// All fields are optional to support partial updates.
/// Only provided fields will be updated.
#[derive(Debug, Clone, Default)]
pub struct UpdateEmployeeCommand {
    pub name: Option<EmployeeName>,
    pub department: Option<Department>,
    pub salary: Option<Salary>,
    pub joining_date: Option<JoiningDate>,
    pub skills: Option<Vec<String>>,
}

impl UpdateEmployeeCommand {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.department.is_none()
            && self.salary.is_none()
            && self.joining_date.is_none()
            && self.skills.is_none()
    }

    /// Apply the provided fields to `employee`.
    pub fn apply_to(self, employee: &mut Employee) {
        if let Some(name) = self.name {
            employee.name = name;
        }
        if let Some(department) = self.department {
            employee.department = department;
        }
        if let Some(salary) = self.salary {
            employee.salary = salary;
        }
        if let Some(joining_date) = self.joining_date {
            employee.joining_date = joining_date;
        }
        if let Some(skills) = self.skills {
            employee.skills = skills;
        }
    }
}

/// Page window for list queries (1-based page number).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    size: u32,
}

impl Pagination {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_SIZE: u32 = 50;
    const MAX_SIZE: u32 = 100;

    /// # Errors
    /// * `InvalidPage` - Page is zero
    /// * `InvalidSize` - Size is zero or above 100
    pub fn new(page: u32, size: u32) -> Result<Self, PaginationError> {
        if page < 1 {
            return Err(PaginationError::InvalidPage(page));
        }
        if size < 1 || size > Self::MAX_SIZE {
            return Err(PaginationError::InvalidSize {
                min: 1,
                max: Self::MAX_SIZE,
                actual: size,
            });
        }
        Ok(Self { page, size })
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.size)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            size: Self::DEFAULT_SIZE,
        }
    }
}

/// Filter and window for listing employees, newest joiners first.
#[derive(Debug, Clone, Default)]
pub struct ListEmployeesQuery {
    pub department: Option<Department>,
    pub pagination: Pagination,
}

/// Average salary of one department, rounded to the nearest whole unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentSalary {
    pub department: String,
    pub avg_salary: i64,
}
