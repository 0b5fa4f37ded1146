use async_trait::async_trait;

use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::CreateEmployeeCommand;
use crate::domain::employee::models::DepartmentSalary;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeCode;
use crate::domain::employee::models::EmployeeRecordId;
use crate::domain::employee::models::ListEmployeesQuery;
use crate::domain::employee::models::UpdateEmployeeCommand;

/// Port for employee domain service operations.
#[async_trait]
pub trait EmployeeServicePort: Send + Sync + 'static {
    /// Create a new employee record.
    ///
    /// # Errors
    /// * `EmployeeIdAlreadyExists` - Another record uses the same employee_id
    /// * `DatabaseError` - Database operation failed
    async fn create_employee(&self, command: CreateEmployeeCommand)
        -> Result<Employee, EmployeeError>;

    /// List employees, optionally filtered by department, newest joiners first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_employees(&self, query: ListEmployeesQuery)
        -> Result<Vec<Employee>, EmployeeError>;

    /// Retrieve an employee by employee_id.
    ///
    /// # Errors
    /// * `NotFound` - No employee with this employee_id
    /// * `DatabaseError` - Database operation failed
    async fn get_employee(&self, employee_id: &EmployeeCode) -> Result<Employee, EmployeeError>;

    /// Update the provided fields of an employee.
    ///
    /// # Errors
    /// * `EmptyUpdate` - Command carries no fields
    /// * `NotFound` - No employee with this employee_id
    /// * `DatabaseError` - Database operation failed
    async fn update_employee(
        &self,
        employee_id: &EmployeeCode,
        command: UpdateEmployeeCommand,
    ) -> Result<Employee, EmployeeError>;

    /// Delete an employee.
    ///
    /// # Errors
    /// * `NotFound` - No employee with this employee_id
    /// * `DatabaseError` - Database operation failed
    async fn delete_employee(&self, employee_id: &EmployeeCode) -> Result<(), EmployeeError>;

    /// Employees having `skill`, newest joiners first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn search_by_skill(&self, skill: &str) -> Result<Vec<Employee>, EmployeeError>;

    /// Average salary per department, ordered by department name.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn average_salary_by_department(&self) -> Result<Vec<DepartmentSalary>, EmployeeError>;
}

/// Persistence operations for employee records.
#[async_trait]
pub trait EmployeeRepository: Send + Sync + 'static {
    /// Persist a new employee.
    ///
    /// # Errors
    /// * `EmployeeIdAlreadyExists` - employee_id unique constraint violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, employee: Employee) -> Result<Employee, EmployeeError>;

    /// Retrieve employee by business code.
    ///
    /// # Returns
    /// Optional employee (None if not found)
    async fn find_by_code(&self, code: &EmployeeCode) -> Result<Option<Employee>, EmployeeError>;

    /// Page through employees matching the query, ordered by joining_date descending.
    async fn list(&self, query: &ListEmployeesQuery) -> Result<Vec<Employee>, EmployeeError>;

    /// Employees whose skills contain `skill`, ordered by joining_date descending.
    async fn find_by_skill(&self, skill: &str) -> Result<Vec<Employee>, EmployeeError>;

    /// Rounded average salary grouped by department.
    async fn average_salary_by_department(&self) -> Result<Vec<DepartmentSalary>, EmployeeError>;

    /// Overwrite the stored record with the same storage id.
    ///
    /// # Errors
    /// * `NotFound` - Record does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, employee: Employee) -> Result<Employee, EmployeeError>;

    /// Remove a record by storage id.
    ///
    /// # Errors
    /// * `NotFound` - Record does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &EmployeeRecordId) -> Result<(), EmployeeError>;
}
