//! PostgreSQL Employee Adapter

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{DomainPort, PortError};
use domain_employee::{Employee, EmployeePort};

use crate::error::DatabaseError;
use crate::repositories::employee::{EmployeeRepository, NewEmployee};
use crate::store::PgTx;

/// PostgreSQL-backed implementation of the EmployeePort trait
///
/// A missing `persons` row surfaces as a foreign key violation, which is
/// reported as `PortError::Validation`.
#[derive(Debug, Clone)]
pub struct PostgresEmployeeAdapter {
    pool: PgPool,
}

impl PostgresEmployeeAdapter {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DomainPort for PostgresEmployeeAdapter {}

#[async_trait]
impl EmployeePort<PgTx> for PostgresEmployeeAdapter {
    #[instrument(skip(self, tx, employee), fields(employee_id = %employee.id(), person_id = %employee.person_id()))]
    async fn save_employee(
        &self,
        tx: Option<&mut PgTx>,
        employee: &Employee,
    ) -> Result<(), PortError> {
        debug!("Saving employee");
        let row = employee_row(employee);
        match tx {
            Some(tx) => EmployeeRepository::insert(&mut **tx, &row).await?,
            None => {
                let mut conn = self.pool.acquire().await.map_err(DatabaseError::from)?;
                EmployeeRepository::insert(&mut *conn, &row).await?
            }
        }
        Ok(())
    }
}

fn employee_row(employee: &Employee) -> NewEmployee {
    let job = employee.job();
    let payroll = employee.payroll();
    let flags = employee.flags();
    let benefits = employee.benefits();

    NewEmployee {
        employee_id: employee.id().into(),
        person_id: employee.person_id().into(),
        salary: employee.salary(),
        contract_type: employee.contract_type().code().to_string(),
        position: job.position.clone(),
        work_schedule: job.work_schedule.clone(),
        department: job.department.clone(),
        work_location: job.work_location.clone(),
        bank_account: payroll.bank_account.clone(),
        afp: payroll.afp.clone(),
        eps: payroll.eps.clone(),
        start_date: employee.start_date(),
        has_cts: flags.has_cts,
        has_gratification: flags.has_gratification,
        has_vacation: flags.has_vacation,
        cts: benefits.cts(),
        gratification: benefits.gratification(),
        vacation_days: benefits.vacation_days(),
        created_at: employee.created_at(),
        updated_at: employee.updated_at(),
    }
}
