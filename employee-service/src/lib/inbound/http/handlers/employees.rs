use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::employee::errors::EmployeeCodeError;
use crate::domain::employee::errors::JoiningDateError;
use crate::domain::employee::errors::PaginationError;
use crate::domain::employee::errors::RequiredTextError;
use crate::domain::employee::errors::SalaryError;
use crate::domain::employee::models::CreateEmployeeCommand;
use crate::domain::employee::models::Department;
use crate::domain::employee::models::DepartmentSalary;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeCode;
use crate::domain::employee::models::EmployeeName;
use crate::domain::employee::models::JoiningDate;
use crate::domain::employee::models::ListEmployeesQuery;
use crate::domain::employee::models::Pagination;
use crate::domain::employee::models::Salary;
use crate::domain::employee::models::UpdateEmployeeCommand;
use crate::inbound::http::router::AppState;

/// Field-level validation failure of an employee request.
#[derive(Debug, Clone, Error)]
enum ParseEmployeeRequestError {
    #[error("employee_id: {0}")]
    EmployeeId(#[from] EmployeeCodeError),

    #[error("name: {0}")]
    Name(RequiredTextError),

    #[error("department: {0}")]
    Department(RequiredTextError),

    #[error("salary: {0}")]
    Salary(#[from] SalaryError),

    #[error("joining_date: {0}")]
    JoiningDate(#[from] JoiningDateError),

    #[error("{0}")]
    Pagination(#[from] PaginationError),

    #[error("skill: must not be blank")]
    BlankSkill,
}

impl From<ParseEmployeeRequestError> for ApiError {
    fn from(err: ParseEmployeeRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

fn parse_code(employee_id: String) -> Result<EmployeeCode, ApiError> {
    EmployeeCode::new(employee_id)
        .map_err(ParseEmployeeRequestError::from)
        .map_err(ApiError::from)
}

fn parse_skills(skills: Vec<String>) -> Vec<String> {
    skills
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

pub async fn create_employee(
    State(state): State<AppState>,
    Json(body): Json<CreateEmployeeRequest>,
) -> Result<ApiSuccess<EmployeeResponseData>, ApiError> {
    state
        .employee_service
        .create_employee(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref employee| ApiSuccess::new(StatusCode::CREATED, employee.into()))
}

pub async fn list_employees(
    State(state): State<AppState>,
    Query(params): Query<ListEmployeesParams>,
) -> Result<ApiSuccess<Vec<EmployeeResponseData>>, ApiError> {
    state
        .employee_service
        .list_employees(params.try_into_query()?)
        .await
        .map_err(ApiError::from)
        .map(|employees| ApiSuccess::new(StatusCode::OK, to_response_list(&employees)))
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<ApiSuccess<EmployeeResponseData>, ApiError> {
    let code = parse_code(employee_id)?;

    state
        .employee_service
        .get_employee(&code)
        .await
        .map_err(ApiError::from)
        .map(|ref employee| ApiSuccess::new(StatusCode::OK, employee.into()))
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Json(body): Json<UpdateEmployeeRequest>,
) -> Result<ApiSuccess<EmployeeResponseData>, ApiError> {
    let code = parse_code(employee_id)?;
    let command = body.try_into_command()?;

    state
        .employee_service
        .update_employee(&code, command)
        .await
        .map_err(ApiError::from)
        .map(|ref employee| ApiSuccess::new(StatusCode::OK, employee.into()))
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let code = parse_code(employee_id)?;

    state
        .employee_service
        .delete_employee(&code)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}

pub async fn search_by_skill(
    State(state): State<AppState>,
    Query(params): Query<SkillSearchParams>,
) -> Result<ApiSuccess<Vec<EmployeeResponseData>>, ApiError> {
    let skill = params.skill.trim();
    if skill.is_empty() {
        return Err(ParseEmployeeRequestError::BlankSkill.into());
    }

    state
        .employee_service
        .search_by_skill(skill)
        .await
        .map_err(ApiError::from)
        .map(|employees| ApiSuccess::new(StatusCode::OK, to_response_list(&employees)))
}

pub async fn average_salary_by_department(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<DepartmentSalaryData>>, ApiError> {
    state
        .employee_service
        .average_salary_by_department()
        .await
        .map_err(ApiError::from)
        .map(|averages| {
            ApiSuccess::new(
                StatusCode::OK,
                averages.into_iter().map(DepartmentSalaryData::from).collect(),
            )
        })
}

/// HTTP request body for creating an employee (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateEmployeeRequest {
    employee_id: String,
    name: String,
    department: String,
    salary: i32,
    joining_date: String,
    #[serde(default)]
    skills: Vec<String>,
}

impl CreateEmployeeRequest {
    fn try_into_command(self) -> Result<CreateEmployeeCommand, ParseEmployeeRequestError> {
        Ok(CreateEmployeeCommand {
            employee_id: EmployeeCode::new(self.employee_id)?,
            name: EmployeeName::new(self.name).map_err(ParseEmployeeRequestError::Name)?,
            department: Department::new(self.department)
                .map_err(ParseEmployeeRequestError::Department)?,
            salary: Salary::new(self.salary)?,
            joining_date: JoiningDate::parse(&self.joining_date)?,
            skills: parse_skills(self.skills),
        })
    }
}

/// HTTP request body for updating an employee; absent fields stay unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateEmployeeRequest {
    name: Option<String>,
    department: Option<String>,
    salary: Option<i32>,
    joining_date: Option<String>,
    skills: Option<Vec<String>>,
}

impl UpdateEmployeeRequest {
    fn try_into_command(self) -> Result<UpdateEmployeeCommand, ParseEmployeeRequestError> {
        Ok(UpdateEmployeeCommand {
            name: self
                .name
                .map(EmployeeName::new)
                .transpose()
                .map_err(ParseEmployeeRequestError::Name)?,
            department: self
                .department
                .map(Department::new)
                .transpose()
                .map_err(ParseEmployeeRequestError::Department)?,
            salary: self.salary.map(Salary::new).transpose()?,
            joining_date: self
                .joining_date
                .as_deref()
                .map(JoiningDate::parse)
                .transpose()?,
            skills: self.skills.map(parse_skills),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListEmployeesParams {
    department: Option<String>,
    page: Option<u32>,
    size: Option<u32>,
}

impl ListEmployeesParams {
    fn try_into_query(self) -> Result<ListEmployeesQuery, ParseEmployeeRequestError> {
        // An empty `department` means no filter
        let department = self
            .department
            .filter(|d| !d.trim().is_empty())
            .map(Department::new)
            .transpose()
            .map_err(ParseEmployeeRequestError::Department)?;
        let pagination = Pagination::new(
            self.page.unwrap_or(Pagination::DEFAULT_PAGE),
            self.size.unwrap_or(Pagination::DEFAULT_SIZE),
        )?;

        Ok(ListEmployeesQuery {
            department,
            pagination,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillSearchParams {
    skill: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeResponseData {
    pub id: String,
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub salary: i32,
    pub joining_date: String,
    pub skills: Vec<String>,
}

impl From<&Employee> for EmployeeResponseData {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.to_string(),
            employee_id: employee.employee_id.as_str().to_string(),
            name: employee.name.as_str().to_string(),
            department: employee.department.as_str().to_string(),
            salary: employee.salary.value(),
            joining_date: employee.joining_date.to_string(),
            skills: employee.skills.clone(),
        }
    }
}

fn to_response_list(employees: &[Employee]) -> Vec<EmployeeResponseData> {
    employees.iter().map(EmployeeResponseData::from).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentSalaryData {
    pub department: String,
    pub avg_salary: i64,
}

impl From<DepartmentSalary> for DepartmentSalaryData {
    fn from(average: DepartmentSalary) -> Self {
        Self {
            department: average.department,
            avg_salary: average.avg_salary,
        }
    }
}
