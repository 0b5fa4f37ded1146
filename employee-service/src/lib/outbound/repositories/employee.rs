use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::Department;
use crate::domain::employee::models::DepartmentSalary;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeCode;
use crate::domain::employee::models::EmployeeName;
use crate::domain::employee::models::EmployeeRecordId;
use crate::domain::employee::models::JoiningDate;
use crate::domain::employee::models::ListEmployeesQuery;
use crate::domain::employee::models::Salary;
use crate::domain::employee::ports::EmployeeRepository;

const SELECT_EMPLOYEE: &str = r#"
    SELECT id, employee_id, name, department, salary, joining_date, skills
    FROM employees
"#;

pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EmployeeRow {
    id: Uuid,
    employee_id: String,
    name: String,
    department: String,
    salary: i32,
    joining_date: NaiveDate,
    skills: Vec<String>,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = EmployeeError;

    fn try_from(r: EmployeeRow) -> Result<Self, Self::Error> {
        let id = r.id;
        let corrupt = move |field: &str, e: String| {
            EmployeeError::DatabaseError(format!("stored employee {id} has invalid {field}: {e}"))
        };

        Ok(Employee {
            id: EmployeeRecordId(id),
            employee_id: EmployeeCode::new(r.employee_id)
                .map_err(|e| corrupt("employee_id", e.to_string()))?,
            name: EmployeeName::new(r.name).map_err(|e| corrupt("name", e.to_string()))?,
            department: Department::new(r.department)
                .map_err(|e| corrupt("department", e.to_string()))?,
            salary: Salary::new(r.salary).map_err(|e| corrupt("salary", e.to_string()))?,
            joining_date: JoiningDate::from_date(r.joining_date),
            skills: r.skills,
        })
    }
}

fn database_error(e: sqlx::Error) -> EmployeeError {
    EmployeeError::DatabaseError(e.to_string())
}

fn into_employees(rows: Vec<EmployeeRow>) -> Result<Vec<Employee>, EmployeeError> {
    rows.into_iter().map(Employee::try_from).collect()
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn create(&self, employee: Employee) -> Result<Employee, EmployeeError> {
        sqlx::query(
            r#"
            INSERT INTO employees (id, employee_id, name, department, salary, joining_date, skills)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(employee.id.0)
        .bind(employee.employee_id.as_str())
        .bind(employee.name.as_str())
        .bind(employee.department.as_str())
        .bind(employee.salary.value())
        .bind(employee.joining_date.date())
        .bind(&employee.skills)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("employees_employee_id_key")
                {
                    return EmployeeError::EmployeeIdAlreadyExists(
                        employee.employee_id.to_string(),
                    );
                }
            }
            database_error(e)
        })?;

        Ok(employee)
    }

    async fn find_by_code(&self, code: &EmployeeCode) -> Result<Option<Employee>, EmployeeError> {
        let row: Option<EmployeeRow> =
            sqlx::query_as(&format!("{SELECT_EMPLOYEE} WHERE employee_id = $1"))
                .bind(code.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(database_error)?;

        row.map(Employee::try_from).transpose()
    }

    async fn list(&self, query: &ListEmployeesQuery) -> Result<Vec<Employee>, EmployeeError> {
        let rows: Vec<EmployeeRow> = sqlx::query_as(&format!(
            r#"{SELECT_EMPLOYEE}
            WHERE ($1::TEXT IS NULL OR department = $1)
            ORDER BY joining_date DESC, employee_id
            LIMIT $2 OFFSET $3"#
        ))
        .bind(query.department.as_ref().map(Department::as_str))
        .bind(query.pagination.limit())
        .bind(query.pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        into_employees(rows)
    }

    async fn find_by_skill(&self, skill: &str) -> Result<Vec<Employee>, EmployeeError> {
        let rows: Vec<EmployeeRow> = sqlx::query_as(&format!(
            r#"{SELECT_EMPLOYEE}
            WHERE $1 = ANY(skills)
            ORDER BY joining_date DESC, employee_id"#
        ))
        .bind(skill)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        into_employees(rows)
    }

    async fn average_salary_by_department(&self) -> Result<Vec<DepartmentSalary>, EmployeeError> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT department, ROUND(AVG(salary))::BIGINT AS avg_salary
            FROM employees
            GROUP BY department
            ORDER BY department
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows
            .into_iter()
            .map(|(department, avg_salary)| DepartmentSalary {
                department,
                avg_salary,
            })
            .collect())
    }

    async fn update(&self, employee: Employee) -> Result<Employee, EmployeeError> {
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET name = $2, department = $3, salary = $4, joining_date = $5, skills = $6
            WHERE id = $1
            "#,
        )
        .bind(employee.id.0)
        .bind(employee.name.as_str())
        .bind(employee.department.as_str())
        .bind(employee.salary.value())
        .bind(employee.joining_date.date())
        .bind(&employee.skills)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(EmployeeError::NotFound(employee.employee_id.to_string()));
        }

        Ok(employee)
    }

    async fn delete(&self, id: &EmployeeRecordId) -> Result<(), EmployeeError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(EmployeeError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
