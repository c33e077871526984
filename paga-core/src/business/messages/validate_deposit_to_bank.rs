use crate::business::{
    service::impl_service_response,
    types::lenient,
    validation::{self, Validate, ValidationError},
    ServiceMethod, ServiceRequest,
};

/// Dry run of a deposit to bank. Reports whether the same deposit is likely
/// to succeed, the fee it would incur and the account holder name the bank
/// has on record.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidateDepositToBankRequest {
    pub reference_number: String,
    #[serde(rename = "Amount", alias = "amount")]
    pub amount: f64,
    #[serde(rename = "Currency", alias = "currency", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(rename = "destinationBankUUID", alias = "destinationBankUuid")]
    pub destination_bank_uuid: String,
    /// Ten digit NUBAN.
    pub destination_bank_account_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_phone_number: Option<String>,
    /// Ignored without a phone number; the platform guesses from the number
    /// pattern when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_mobile_operator_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl Validate for ValidateDepositToBankRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::reference("referenceNumber", &self.reference_number)?;
        validation::amount("Amount", self.amount)?;
        validation::required("destinationBankUUID", &self.destination_bank_uuid)?;
        validation::nuban(
            "destinationBankAccountNumber",
            &self.destination_bank_account_number,
        )?;
        validation::recipient_contact(&self.recipient_phone_number, &self.recipient_email)?;
        validation::locale("locale", &self.locale)
    }
}

impl ServiceRequest for ValidateDepositToBankRequest {
    const METHOD: ServiceMethod = ServiceMethod::ValidateDepositToBank;
    type Response = ValidateDepositToBankResponse;

    fn reference_number(&self) -> Option<&str> {
        Some(&self.reference_number)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidateDepositToBankResponse {
    #[serde(deserialize_with = "lenient::text")]
    pub response_code: String,
    #[serde(rename = "refernceNumber", deserialize_with = "lenient::text")]
    pub reference_number: String,
    /// Fee the actual deposit would be charged.
    #[serde(rename = "Fee", deserialize_with = "lenient::number")]
    pub fee: f64,
    #[serde(deserialize_with = "lenient::text")]
    pub destination_account_holder_name_at_bank: String,
}

impl_service_response!(ValidateDepositToBankResponse);
