//! Employee registration DTOs
//!
//! Field names are camelCase on the wire. Variant-specific person fields are
//! optional; which ones are required depends on the person type and is
//! checked by the domain factories.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use application::{EmploymentData, RegistrationCommand, RegistrationResult};
use domain_person::{PersonFactoryParams, PersonIdentity};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterEmployeeRequest {
    pub person: PersonRequest,
    pub employment: EmploymentRequest,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRequest {
    #[serde(rename = "type")]
    pub person_type: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub country: String,
    pub document_number: String,

    pub first_name: Option<String>,
    pub last_name_paternal: Option<String>,
    pub last_name_maternal: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,

    pub business_name: Option<String>,
    pub trade_name: Option<String>,
    pub constitution_date: Option<NaiveDate>,
    pub representative_name: Option<String>,
    pub representative_document: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentRequest {
    pub salary: Decimal,
    pub contract_type: String,
    pub start_date: NaiveDate,
    pub position: String,
    pub work_schedule: String,
    pub department: String,
    pub work_location: String,
    pub bank_account: String,
    pub afp: String,
    pub eps: String,
    #[serde(default, rename = "hasCTS", alias = "hasCts")]
    pub has_cts: bool,
    #[serde(default)]
    pub has_gratification: bool,
    #[serde(default)]
    pub has_vacation: bool,
}

impl From<PersonRequest> for PersonFactoryParams {
    fn from(req: PersonRequest) -> Self {
        PersonFactoryParams {
            person_type: req.person_type,
            email: req.email,
            phone: req.phone,
            address: req.address,
            country: req.country,
            document_number: req.document_number,
            first_name: req.first_name,
            last_name_paternal: req.last_name_paternal,
            last_name_maternal: req.last_name_maternal,
            birth_date: req.birth_date,
            gender: req.gender,
            business_name: req.business_name,
            trade_name: req.trade_name,
            constitution_date: req.constitution_date,
            representative_name: req.representative_name,
            representative_document: req.representative_document,
        }
    }
}

impl From<EmploymentRequest> for EmploymentData {
    fn from(req: EmploymentRequest) -> Self {
        EmploymentData {
            salary: req.salary,
            contract_type: req.contract_type,
            start_date: req.start_date,
            position: req.position,
            work_schedule: req.work_schedule,
            department: req.department,
            work_location: req.work_location,
            bank_account: req.bank_account,
            afp: req.afp,
            eps: req.eps,
            has_cts: req.has_cts,
            has_gratification: req.has_gratification,
            has_vacation: req.has_vacation,
        }
    }
}

impl From<RegisterEmployeeRequest> for RegistrationCommand {
    fn from(req: RegisterEmployeeRequest) -> Self {
        RegistrationCommand {
            person: req.person.into(),
            employment: req.employment.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub person: PersonResponse,
    pub employment: EmploymentResponse,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonResponse {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub person_type: String,
    pub document_number: String,
    pub display_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub country: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name_paternal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name_maternal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constitution_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representative_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representative_document: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentResponse {
    pub id: Uuid,
    pub person_id: Uuid,
    pub salary: Decimal,
    pub contract_type: String,
    pub start_date: NaiveDate,
    pub position: String,
    pub work_schedule: String,
    pub department: String,
    pub work_location: String,
    pub bank_account: String,
    pub afp: String,
    pub eps: String,
    #[serde(rename = "hasCTS")]
    pub has_cts: bool,
    pub has_gratification: bool,
    pub has_vacation: bool,
    pub benefits: BenefitsResponse,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitsResponse {
    pub cts: Decimal,
    pub gratification: Decimal,
    pub vacation_days: i32,
}

impl From<RegistrationResult> for RegistrationResponse {
    fn from(result: RegistrationResult) -> Self {
        let mut person = PersonResponse {
            id: result.person_id.into(),
            person_type: result.person_type.as_str().to_string(),
            document_number: result.document_number,
            display_name: result.display_name,
            email: result.email,
            phone: result.phone,
            address: result.address,
            country: result.country,
            first_name: None,
            last_name_paternal: None,
            last_name_maternal: None,
            birth_date: None,
            gender: None,
            business_name: None,
            trade_name: None,
            constitution_date: None,
            representative_name: None,
            representative_document: None,
        };
        match result.identity {
            PersonIdentity::Natural(natural) => {
                person.first_name = Some(natural.first_name);
                person.last_name_paternal = Some(natural.last_name_paternal);
                person.last_name_maternal = natural.last_name_maternal;
                person.birth_date = Some(natural.birth_date);
                person.gender = Some(natural.gender.code().to_string());
            }
            PersonIdentity::Juridical(juridical) => {
                person.business_name = Some(juridical.business_name);
                person.trade_name = Some(juridical.trade_name);
                person.constitution_date = Some(juridical.constitution_date);
                person.representative_name = Some(juridical.representative_name);
                person.representative_document = Some(juridical.representative_document);
            }
        }

        let employment = EmploymentResponse {
            id: result.employee_id.into(),
            person_id: result.person_id.into(),
            salary: result.salary,
            contract_type: result.contract_type.code().to_string(),
            start_date: result.start_date,
            position: result.job.position,
            work_schedule: result.job.work_schedule,
            department: result.job.department,
            work_location: result.job.work_location,
            bank_account: result.payroll.bank_account,
            afp: result.payroll.afp,
            eps: result.payroll.eps,
            has_cts: result.flags.has_cts,
            has_gratification: result.flags.has_gratification,
            has_vacation: result.flags.has_vacation,
            benefits: BenefitsResponse {
                cts: result.benefits.cts(),
                gratification: result.benefits.gratification(),
                vacation_days: result.benefits.vacation_days(),
            },
            created_at: result.registered_at,
        };

        RegistrationResponse { person, employment }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_request_decodes_camel_case() {
        let json = r#"{
            "person": {
                "type": "JURIDICAL",
                "email": "contacto@andina.com.pe",
                "phone": "014567890",
                "address": "Calle Los Olivos 455",
                "country": "Peru",
                "documentNumber": "20123456789",
                "businessName": "Servicios Andinos S.A.C.",
                "tradeName": "Andina",
                "constitutionDate": "2010-03-01",
                "representativeName": "Luis Mendoza",
                "representativeDocument": "40123456"
            },
            "employment": {
                "salary": 3500.50,
                "contractType": "FIJO",
                "startDate": "2024-05-01",
                "position": "Accountant",
                "workSchedule": "Full-time",
                "department": "Finance",
                "workLocation": "Lima",
                "bankAccount": "191-000",
                "afp": "Integra",
                "eps": "Pacifico",
                "hasCTS": true
            }
        }"#;

        let request: RegisterEmployeeRequest = serde_json::from_str(json).unwrap();
        let command = RegistrationCommand::from(request);

        assert_eq!(command.person.document_number, "20123456789");
        assert_eq!(command.person.trade_name.as_deref(), Some("Andina"));
        assert!(command.person.first_name.is_none());
        assert_eq!(command.employment.salary, dec!(3500.5));
        assert!(command.employment.has_cts);
        assert!(!command.employment.has_gratification);
    }
}
