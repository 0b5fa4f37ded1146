use std::sync::Arc;

use async_trait::async_trait;

use super::errors::EmployeeError;
use super::models::CreateEmployeeCommand;
use super::models::DepartmentSalary;
use super::models::Employee;
use super::models::EmployeeCode;
use super::models::EmployeeRecordId;
use super::models::ListEmployeesQuery;
use super::models::UpdateEmployeeCommand;
use super::ports::EmployeeRepository;
use super::ports::EmployeeServicePort;

/// Concrete implementation of EmployeeServicePort.
///
/// Generic over repository for testability.
pub struct EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    repository: Arc<ER>,
}

impl<ER> EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    pub fn new(repository: Arc<ER>) -> Self {
        Self { repository }
    }

    async fn find_existing(&self, employee_id: &EmployeeCode) -> Result<Employee, EmployeeError> {
        self.repository
            .find_by_code(employee_id)
            .await?
            .ok_or_else(|| EmployeeError::NotFound(employee_id.to_string()))
    }
}

#[async_trait]
impl<ER> EmployeeServicePort for EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    async fn create_employee(
        &self,
        command: CreateEmployeeCommand,
    ) -> Result<Employee, EmployeeError> {
        let employee = Employee {
            id: EmployeeRecordId::new(),
            employee_id: command.employee_id,
            name: command.name,
            department: command.department,
            salary: command.salary,
            joining_date: command.joining_date,
            skills: command.skills,
        };

        let created = self.repository.create(employee).await?;
        tracing::info!(employee_id = %created.employee_id, "Employee created");

        Ok(created)
    }

    async fn list_employees(
        &self,
        query: ListEmployeesQuery,
    ) -> Result<Vec<Employee>, EmployeeError> {
        self.repository.list(&query).await
    }

    async fn get_employee(&self, employee_id: &EmployeeCode) -> Result<Employee, EmployeeError> {
        self.find_existing(employee_id).await
    }

    async fn update_employee(
        &self,
        employee_id: &EmployeeCode,
        command: UpdateEmployeeCommand,
    ) -> Result<Employee, EmployeeError> {
        if command.is_empty() {
            return Err(EmployeeError::EmptyUpdate);
        }

        let mut employee = self.find_existing(employee_id).await?;
        command.apply_to(&mut employee);

        let updated = self.repository.update(employee).await?;
        tracing::info!(employee_id = %updated.employee_id, "Employee updated");

        Ok(updated)
    }

    async fn delete_employee(&self, employee_id: &EmployeeCode) -> Result<(), EmployeeError> {
        let employee = self.find_existing(employee_id).await?;
        self.repository.delete(&employee.id).await?;
        tracing::info!(employee_id = %employee_id, "Employee deleted");

        Ok(())
    }

    async fn search_by_skill(&self, skill: &str) -> Result<Vec<Employee>, EmployeeError> {
        self.repository.find_by_skill(skill).await
    }

    async fn average_salary_by_department(&self) -> Result<Vec<DepartmentSalary>, EmployeeError> {
        self.repository.average_salary_by_department().await
    }
}
