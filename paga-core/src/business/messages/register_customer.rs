use chrono::NaiveDate;

use crate::business::{
    service::impl_service_response,
    types::lenient,
    validation::{self, Validate, ValidationError},
    ServiceMethod, ServiceRequest,
};

/// Registers a customer on the platform. New customers are contacted to set
/// up their own authentication credentials.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterCustomerRequest {
    pub reference_number: String,
    /// Phone number, username or similar; checked against existing users.
    pub customer_principal: String,
    /// A valid phone number.
    pub customer_credentials: String,
    /// Letters only, with spaces, hyphens or apostrophes between parts.
    pub customer_first_name: String,
    pub customer_last_name: String,
    /// `dd/mm/yyyy`
    pub customer_date_of_birth: String,
    /// Free-form, in a format agreed with the integrating business.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_details: Option<String>,
}

impl RegisterCustomerRequest {
    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        validation::parse_date_of_birth(&self.customer_date_of_birth)
    }
}

impl Validate for RegisterCustomerRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::reference("referenceNumber", &self.reference_number)?;
        validation::required("customerPrincipal", &self.customer_principal)?;
        validation::required("customerCredentials", &self.customer_credentials)?;
        validation::personal_name("customerFirstName", &self.customer_first_name)?;
        validation::personal_name("customerLastName", &self.customer_last_name)?;
        validation::date_of_birth("customerDateOfBirth", &self.customer_date_of_birth)
    }
}

impl ServiceRequest for RegisterCustomerRequest {
    const METHOD: ServiceMethod = ServiceMethod::RegisterCustomer;
    type Response = RegisterCustomerResponse;

    fn reference_number(&self) -> Option<&str> {
        Some(&self.reference_number)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterCustomerResponse {
    #[serde(rename = "refernceNumber", deserialize_with = "lenient::text")]
    pub reference_number: String,
    #[serde(deserialize_with = "lenient::text")]
    pub message: String,
    /// `"0"` on success, otherwise the platform's exception code.
    #[serde(deserialize_with = "lenient::text")]
    pub response_code: String,
}

impl_service_response!(RegisterCustomerResponse, message = message, success = "0");
