//! Person repository implementation
//!
//! A person occupies one row in `persons` plus one row in either
//! `natural_persons` or `juridical_persons`. Both variant tables carry a
//! UNIQUE `document_number`.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgConnection};
use uuid::Uuid;

use crate::error::DatabaseError;

/// Database row for the `persons` table
#[derive(Debug, Clone, FromRow)]
pub struct PersonRow {
    pub person_id: Uuid,
    pub person_type: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database row for the `natural_persons` table
#[derive(Debug, Clone, FromRow)]
pub struct NaturalPersonRow {
    pub person_id: Uuid,
    pub document_number: String,
    pub first_name: String,
    pub last_name_paternal: String,
    pub last_name_maternal: Option<String>,
    pub birth_date: NaiveDate,
    pub gender: String,
}

/// Database row for the `juridical_persons` table
#[derive(Debug, Clone, FromRow)]
pub struct JuridicalPersonRow {
    pub person_id: Uuid,
    pub document_number: String,
    pub business_name: String,
    pub trade_name: String,
    pub constitution_date: NaiveDate,
    pub representative_name: String,
    pub representative_document: String,
}

/// SQL access for persons and their variants
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonRepository;

impl PersonRepository {
    pub async fn insert_person(
        conn: &mut PgConnection,
        row: &PersonRow,
    ) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO persons (person_id, person_type, email, phone, address, country, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(row.person_id)
        .bind(&row.person_type)
        .bind(&row.email)
        .bind(&row.phone)
        .bind(&row.address)
        .bind(&row.country)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(conn)
        .await?;
        Ok(())
    }

    pub async fn insert_natural(
        conn: &mut PgConnection,
        row: &NaturalPersonRow,
    ) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO natural_persons (person_id, document_number, first_name, last_name_paternal, last_name_maternal, birth_date, gender)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(row.person_id)
        .bind(&row.document_number)
        .bind(&row.first_name)
        .bind(&row.last_name_paternal)
        .bind(&row.last_name_maternal)
        .bind(row.birth_date)
        .bind(&row.gender)
        .execute(conn)
        .await?;
        Ok(())
    }

    pub async fn insert_juridical(
        conn: &mut PgConnection,
        row: &JuridicalPersonRow,
    ) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO juridical_persons (person_id, document_number, business_name, trade_name, constitution_date, representative_name, representative_document)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(row.person_id)
        .bind(&row.document_number)
        .bind(&row.business_name)
        .bind(&row.trade_name)
        .bind(row.constitution_date)
        .bind(&row.representative_name)
        .bind(&row.representative_document)
        .execute(conn)
        .await?;
        Ok(())
    }

    pub async fn get_person(
        conn: &mut PgConnection,
        person_id: Uuid,
    ) -> Result<PersonRow, DatabaseError> {
        sqlx::query_as::<_, PersonRow>(
            r#"
            SELECT person_id, person_type, email, phone, address, country, created_at, updated_at
            FROM persons
            WHERE person_id = $1
            "#,
        )
        .bind(person_id)
        .fetch_optional(conn)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Person", person_id))
    }

    pub async fn get_natural(
        conn: &mut PgConnection,
        person_id: Uuid,
    ) -> Result<NaturalPersonRow, DatabaseError> {
        sqlx::query_as::<_, NaturalPersonRow>(
            r#"
            SELECT person_id, document_number, first_name, last_name_paternal, last_name_maternal, birth_date, gender
            FROM natural_persons
            WHERE person_id = $1
            "#,
        )
        .bind(person_id)
        .fetch_optional(conn)
        .await?
        .ok_or_else(|| DatabaseError::not_found("NaturalPerson", person_id))
    }

    pub async fn get_juridical(
        conn: &mut PgConnection,
        person_id: Uuid,
    ) -> Result<JuridicalPersonRow, DatabaseError> {
        sqlx::query_as::<_, JuridicalPersonRow>(
            r#"
            SELECT person_id, document_number, business_name, trade_name, constitution_date, representative_name, representative_document
            FROM juridical_persons
            WHERE person_id = $1
            "#,
        )
        .bind(person_id)
        .fetch_optional(conn)
        .await?
        .ok_or_else(|| DatabaseError::not_found("JuridicalPerson", person_id))
    }

    /// Number of rows in `persons`
    pub async fn count(conn: &mut PgConnection) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM persons")
            .fetch_one(conn)
            .await?;
        Ok(count)
    }
}
