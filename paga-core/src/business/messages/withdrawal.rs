use crate::business::{
    service::impl_service_response,
    types::lenient,
    validation::{self, Validate, ValidationError},
    ServiceMethod, ServiceRequest,
};

/// Withdraws funds for the business or on behalf of a customer. Without a
/// destination account the platform issues a withdrawal code for cash-out.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct WithdrawalRequest {
    pub reference_number: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_of_funds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_principal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_credentials: Option<String>,
    /// Bank account number when `destination_bank` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_bank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_reference: Option<String>,
    /// Agent at which the withdrawal is processed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl WithdrawalRequest {
    pub fn is_cash_out(&self) -> bool {
        !validation::is_present(&self.destination_account)
    }
}

impl Validate for WithdrawalRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::reference("referenceNumber", &self.reference_number)?;
        validation::amount("amount", self.amount)?;
        validation::credential_pair(
            ("accountPrincipal", &self.account_principal),
            ("accountCredentials", &self.account_credentials),
        )?;
        if validation::is_present(&self.destination_bank) && self.is_cash_out() {
            return Err(ValidationError::MissingField("destinationAccount"));
        }
        validation::locale("locale", &self.locale)
    }
}

impl ServiceRequest for WithdrawalRequest {
    const METHOD: ServiceMethod = ServiceMethod::Withdrawal;
    type Response = WithdrawalResponse;

    fn reference_number(&self) -> Option<&str> {
        Some(&self.reference_number)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct WithdrawalResponse {
    #[serde(deserialize_with = "lenient::text")]
    pub response_code: String,
    #[serde(rename = "refernceNumber", deserialize_with = "lenient::text")]
    pub reference_number: String,
    /// Only issued for a business cash-out to no destination account.
    #[serde(deserialize_with = "lenient::integer")]
    pub withdrawal_code: i64,
    #[serde(rename = "transactionid", deserialize_with = "lenient::text")]
    pub transaction_id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub currency: String,
    #[serde(deserialize_with = "lenient::number")]
    pub exchange_rate: f64,
    #[serde(deserialize_with = "lenient::text")]
    pub message: String,
}

impl WithdrawalResponse {
    pub fn issued_withdrawal_code(&self) -> Option<i64> {
        (self.withdrawal_code != 0).then_some(self.withdrawal_code)
    }
}

impl_service_response!(WithdrawalResponse, message = message);
