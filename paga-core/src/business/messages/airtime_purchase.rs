use crate::business::{
    service::impl_service_response,
    types::lenient,
    validation::{self, Validate, ValidationError},
    ServiceMethod, ServiceRequest,
};

/// Buys airtime, for the business itself or on behalf of a customer.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AirtimePurchaseRequest {
    pub reference_number: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Defaults to the purchaser's own number; required when there is no
    /// purchaser principal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchaser_principal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchaser_credentials: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_of_funds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl Validate for AirtimePurchaseRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::reference("referenceNumber", &self.reference_number)?;
        validation::amount("amount", self.amount)?;
        validation::credential_pair(
            ("purchaserPrincipal", &self.purchaser_principal),
            ("purchaserCredentials", &self.purchaser_credentials),
        )?;
        if !validation::is_present(&self.purchaser_principal)
            && !validation::is_present(&self.destination_phone_number)
        {
            return Err(ValidationError::MissingField("destinationPhoneNumber"));
        }
        validation::locale("locale", &self.locale)
    }
}

impl ServiceRequest for AirtimePurchaseRequest {
    const METHOD: ServiceMethod = ServiceMethod::AirtimePurchase;
    type Response = AirtimePurchaseResponse;

    fn reference_number(&self) -> Option<&str> {
        Some(&self.reference_number)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AirtimePurchaseResponse {
    #[serde(deserialize_with = "lenient::text")]
    pub response_code: String,
    #[serde(rename = "refernceNumber", deserialize_with = "lenient::text")]
    pub reference_number: String,
    #[serde(deserialize_with = "lenient::text")]
    pub transaction_id: String,
    #[serde(rename = "Fee", deserialize_with = "lenient::number")]
    pub fee: f64,
    #[serde(rename = "Currency", deserialize_with = "lenient::text")]
    pub currency: String,
    #[serde(deserialize_with = "lenient::number")]
    pub exchange_rate: f64,
    #[serde(rename = "Message", deserialize_with = "lenient::text")]
    pub message: String,
}

impl_service_response!(AirtimePurchaseResponse, message = message);
