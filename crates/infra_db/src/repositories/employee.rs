//! Employee repository implementation

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgConnection;
use uuid::Uuid;

use crate::error::DatabaseError;

/// Insert model for the `employees` table
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub employee_id: Uuid,
    pub person_id: Uuid,
    pub salary: Decimal,
    pub contract_type: String,
    pub position: String,
    pub work_schedule: String,
    pub department: String,
    pub work_location: String,
    pub bank_account: String,
    pub afp: String,
    pub eps: String,
    pub start_date: NaiveDate,
    pub has_cts: bool,
    pub has_gratification: bool,
    pub has_vacation: bool,
    pub cts: Decimal,
    pub gratification: Decimal,
    pub vacation_days: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// SQL access for employees
#[derive(Debug, Clone, Copy, Default)]
pub struct EmployeeRepository;

impl EmployeeRepository {
    pub async fn insert(conn: &mut PgConnection, row: &NewEmployee) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO employees (
                employee_id, person_id, salary, contract_type, position, work_schedule,
                department, work_location, bank_account, afp, eps, start_date,
                has_cts, has_gratification, has_vacation, cts, gratification, vacation_days,
                created_at, updated_at
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                $13, $14, $15, $16, $17, $18, $19, $20
            )
            "#,
        )
        .bind(row.employee_id)
        .bind(row.person_id)
        .bind(row.salary)
        .bind(&row.contract_type)
        .bind(&row.position)
        .bind(&row.work_schedule)
        .bind(&row.department)
        .bind(&row.work_location)
        .bind(&row.bank_account)
        .bind(&row.afp)
        .bind(&row.eps)
        .bind(row.start_date)
        .bind(row.has_cts)
        .bind(row.has_gratification)
        .bind(row.has_vacation)
        .bind(row.cts)
        .bind(row.gratification)
        .bind(row.vacation_days)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(conn)
        .await?;
        Ok(())
    }

    /// Number of rows in `employees`, optionally for one person
    pub async fn count(
        conn: &mut PgConnection,
        person_id: Option<Uuid>,
    ) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM employees WHERE $1::uuid IS NULL OR person_id = $1",
        )
        .bind(person_id)
        .fetch_one(conn)
        .await?;
        Ok(count)
    }
}
