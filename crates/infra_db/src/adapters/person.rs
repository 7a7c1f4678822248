//! PostgreSQL Person Adapter
//!
//! Implements `PersonPort` on top of [`PersonRepository`]. The base row and
//! the variant row are always written together: inside the caller's
//! transaction when one is given, otherwise inside a short transaction of
//! the adapter's own.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::{debug, instrument, warn};

use core_kernel::{DomainPort, PersonId, PortError};
use domain_person::{
    Dni, Email, JuridicalPerson, NaturalPerson, Person, PersonAggregate, PersonIdentity,
    PersonPort, PersonType, Phone, Ruc,
};

use crate::error::DatabaseError;
use crate::repositories::person::{
    JuridicalPersonRow, NaturalPersonRow, PersonRepository, PersonRow,
};
use crate::store::PgTx;

/// PostgreSQL-backed implementation of the PersonPort trait
///
/// Database errors are translated to `PortError` variants:
/// - unique violation on `document_number` -> `PortError::Conflict`
/// - missing rows -> `PortError::NotFound`
/// - anything else -> `PortError::Internal` or `PortError::Connection`
#[derive(Debug, Clone)]
pub struct PostgresPersonAdapter {
    pool: PgPool,
}

impl PostgresPersonAdapter {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[instrument(skip(conn, person), fields(person_id = %person.id()))]
    async fn insert_aggregate(
        conn: &mut PgConnection,
        person: &PersonAggregate,
    ) -> Result<(), PortError> {
        PersonRepository::insert_person(conn, &person_row(person.person()))
            .await
            .map_err(|e| save_error(e, person))?;
        match person.identity() {
            PersonIdentity::Natural(natural) => {
                PersonRepository::insert_natural(conn, &natural_row(natural)).await
            }
            PersonIdentity::Juridical(juridical) => {
                PersonRepository::insert_juridical(conn, &juridical_row(juridical)).await
            }
        }
        .map_err(|e| save_error(e, person))
    }

    async fn load_aggregate(
        conn: &mut PgConnection,
        id: PersonId,
    ) -> Result<PersonAggregate, PortError> {
        let row = PersonRepository::get_person(conn, id.into())
            .await
            .map_err(|e| not_found_or(e, id))?;
        let person = row_to_person(row)?;

        let identity = match person.person_type {
            PersonType::Natural => {
                let row = PersonRepository::get_natural(conn, id.into()).await?;
                PersonIdentity::Natural(row_to_natural(row)?)
            }
            PersonType::Juridical => {
                let row = PersonRepository::get_juridical(conn, id.into()).await?;
                PersonIdentity::Juridical(row_to_juridical(row)?)
            }
        };

        PersonAggregate::new(person, identity).map_err(corrupt)
    }
}

// Mark as a domain port
impl DomainPort for PostgresPersonAdapter {}

#[async_trait]
impl PersonPort<PgTx> for PostgresPersonAdapter {
    #[instrument(skip(self, tx, person), fields(person_id = %person.id(), transactional = tx.is_some()))]
    async fn save_person(
        &self,
        tx: Option<&mut PgTx>,
        person: &PersonAggregate,
    ) -> Result<(), PortError> {
        debug!("Saving person");
        match tx {
            Some(tx) => Self::insert_aggregate(&mut **tx, person).await,
            None => {
                let mut own = self.pool.begin().await.map_err(DatabaseError::from)?;
                Self::insert_aggregate(&mut *own, person).await?;
                own.commit().await.map_err(DatabaseError::from)?;
                Ok(())
            }
        }
    }

    #[instrument(skip(self, tx), fields(person_id = %id))]
    async fn get_person(
        &self,
        tx: Option<&mut PgTx>,
        id: PersonId,
    ) -> Result<PersonAggregate, PortError> {
        debug!("Fetching person by ID");
        match tx {
            Some(tx) => Self::load_aggregate(&mut **tx, id).await,
            None => {
                let mut conn = self.pool.acquire().await.map_err(DatabaseError::from)?;
                Self::load_aggregate(&mut *conn, id).await
            }
        }
    }
}

fn save_error(error: DatabaseError, person: &PersonAggregate) -> PortError {
    match error {
        DatabaseError::DuplicateEntry(_) => {
            warn!(document = person.document_number(), "Duplicate document number");
            PortError::conflict(format!(
                "a person with document {} is already registered",
                person.document_number()
            ))
        }
        other => other.into(),
    }
}

fn not_found_or(error: DatabaseError, id: PersonId) -> PortError {
    if error.is_not_found() {
        PortError::not_found("Person", id)
    } else {
        error.into()
    }
}

fn corrupt(error: impl std::fmt::Display) -> PortError {
    DatabaseError::CorruptRow(error.to_string()).into()
}

fn person_row(person: &Person) -> PersonRow {
    PersonRow {
        person_id: person.id.into(),
        person_type: person.person_type.as_str().to_string(),
        email: person.email.as_str().to_string(),
        phone: person.phone.as_str().to_string(),
        address: person.address.clone(),
        country: person.country.clone(),
        created_at: person.created_at,
        updated_at: person.updated_at,
    }
}

fn natural_row(natural: &NaturalPerson) -> NaturalPersonRow {
    NaturalPersonRow {
        person_id: natural.person_id.into(),
        document_number: natural.document_number.as_str().to_string(),
        first_name: natural.first_name.clone(),
        last_name_paternal: natural.last_name_paternal.clone(),
        last_name_maternal: natural.last_name_maternal.clone(),
        birth_date: natural.birth_date,
        gender: natural.gender.code().to_string(),
    }
}

fn juridical_row(juridical: &JuridicalPerson) -> JuridicalPersonRow {
    JuridicalPersonRow {
        person_id: juridical.person_id.into(),
        document_number: juridical.document_number.as_str().to_string(),
        business_name: juridical.business_name.clone(),
        trade_name: juridical.trade_name.clone(),
        constitution_date: juridical.constitution_date,
        representative_name: juridical.representative_name.clone(),
        representative_document: juridical.representative_document.clone(),
    }
}

fn row_to_person(row: PersonRow) -> Result<Person, PortError> {
    Ok(Person {
        id: PersonId::from(row.person_id),
        person_type: row.person_type.parse().map_err(corrupt)?,
        email: Email::parse(row.email).map_err(corrupt)?,
        phone: Phone::parse(row.phone).map_err(corrupt)?,
        address: row.address,
        country: row.country,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

fn row_to_natural(row: NaturalPersonRow) -> Result<NaturalPerson, PortError> {
    Ok(NaturalPerson {
        person_id: PersonId::from(row.person_id),
        document_number: Dni::parse(row.document_number).map_err(corrupt)?,
        first_name: row.first_name,
        last_name_paternal: row.last_name_paternal,
        last_name_maternal: row.last_name_maternal,
        birth_date: row.birth_date,
        gender: row.gender.parse().map_err(corrupt)?,
    })
}

fn row_to_juridical(row: JuridicalPersonRow) -> Result<JuridicalPerson, PortError> {
    Ok(JuridicalPerson {
        person_id: PersonId::from(row.person_id),
        document_number: Ruc::parse(row.document_number).map_err(corrupt)?,
        business_name: row.business_name,
        trade_name: row.trade_name,
        constitution_date: row.constitution_date,
        representative_name: row.representative_name,
        representative_document: row.representative_document,
    })
}
