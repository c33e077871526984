use crate::business::{
    service::impl_service_response,
    types::lenient,
    validation::{self, Validate, ValidationError},
    ServiceMethod, ServiceRequest,
};

/// Platform truncates longer values instead of rejecting them.
pub const ALTERNATE_SENDER_NAME_MAX: usize = 20;
pub const REMARKS_MAX: usize = 30;

/// Deposits funds from the business's account into any bank account.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DepositToBankRequest {
    pub reference_number: String,
    /// The business account must also cover the fee.
    #[serde(rename = "Amount", alias = "amount")]
    pub amount: f64,
    #[serde(rename = "Currency", alias = "currency", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(rename = "destinationBankUUID", alias = "destinationBankUuid")]
    pub destination_bank_uuid: String,
    pub destination_bank_account_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_mobile_operator_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_sender_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_recipient_message: Option<bool>,
    /// Shown on the bank statement.
    #[serde(rename = "Remarks", alias = "remarks", skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl DepositToBankRequest {
    /// Wire names of the fields the platform will shorten.
    pub fn truncated_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if validation::exceeds(&self.alternate_sender_name, ALTERNATE_SENDER_NAME_MAX) {
            fields.push("alternateSenderName");
        }
        if validation::exceeds(&self.remarks, REMARKS_MAX) {
            fields.push("Remarks");
        }
        fields
    }
}

impl Validate for DepositToBankRequest {
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

impl ServiceRequest for DepositToBankRequest {
    const METHOD: ServiceMethod = ServiceMethod::DepositToBank;
    type Response = DepositToBankResponse;

    fn reference_number(&self) -> Option<&str> {
        Some(&self.reference_number)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DepositToBankResponse {
    #[serde(deserialize_with = "lenient::text")]
    pub response_code: String,
    #[serde(rename = "refernceNumber", deserialize_with = "lenient::text")]
    pub reference_number: String,
    #[serde(rename = "Message", deserialize_with = "lenient::text")]
    pub message: String,
    #[serde(rename = "transactionid", deserialize_with = "lenient::text")]
    pub transaction_id: String,
    #[serde(rename = "Fee", deserialize_with = "lenient::number")]
    pub fee: f64,
    #[serde(deserialize_with = "lenient::text")]
    pub destination_account_holder_name_at_bank: String,
    #[serde(rename = "Currency", deserialize_with = "lenient::text")]
    pub currency: String,
    #[serde(deserialize_with = "lenient::number")]
    pub exchange_rate: f64,
}

impl_service_response!(DepositToBankResponse, message = message);
