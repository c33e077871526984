use crate::business::{
    service::impl_service_response,
    types::{lenient, ReceiverRegistrationStatus},
    validation::{self, Validate, ValidationError},
    ServiceMethod, ServiceRequest,
};

pub const ALTERNATE_SENDER_NAME_MAX: usize = 16;

/// Transfers funds to another party, either from the business's own account
/// or on behalf of a customer who supplies principal and credentials.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MoneyTransferRequest {
    pub reference_number: String,
    pub amount: f64,
    /// Only set for foreign currency operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Phone number, nickname or other account identifier; the bank account
    /// number when `destination_bank` is set.
    pub destination_account: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_bank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_principal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_credentials: Option<String>,
    /// Whether messages to non-customers include the withdrawal code. The
    /// platform treats an absent value as `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_withdrawal_code: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_of_funds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_recipient_message: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Ignored by the platform when sending on behalf of a customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_sender_name: Option<String>,
}

impl MoneyTransferRequest {
    pub fn new(reference_number: impl Into<String>, amount: f64, destination_account: impl Into<String>) -> Self {
        Self {
            reference_number: reference_number.into(),
            amount,
            destination_account: destination_account.into(),
            ..Default::default()
        }
    }

    pub fn on_behalf_of_customer(&self) -> bool {
        validation::is_present(&self.sender_principal)
    }
}

impl Validate for MoneyTransferRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::reference("referenceNumber", &self.reference_number)?;
        validation::amount("amount", self.amount)?;
        validation::required("destinationAccount", &self.destination_account)?;
        validation::credential_pair(
            ("senderPrincipal", &self.sender_principal),
            ("senderCredentials", &self.sender_credentials),
        )?;
        validation::max_len(
            "alternateSenderName",
            &self.alternate_sender_name,
            ALTERNATE_SENDER_NAME_MAX,
        )?;
        validation::locale("locale", &self.locale)
    }
}

impl ServiceRequest for MoneyTransferRequest {
    const METHOD: ServiceMethod = ServiceMethod::MoneyTransfer;
    type Response = MoneyTransferResponse;

    fn reference_number(&self) -> Option<&str> {
        Some(&self.reference_number)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MoneyTransferResponse {
    #[serde(deserialize_with = "lenient::text")]
    pub response_code: String,
    #[serde(rename = "refernceNumber", deserialize_with = "lenient::text")]
    pub reference_number: String,
    /// Only issued for funds sent by the business itself to a non-customer
    /// when `sendWithdrawalCode` was false.
    #[serde(deserialize_with = "lenient::text")]
    pub withdrawal_code: String,
    #[serde(deserialize_with = "lenient::text")]
    pub transaction_id: String,
    #[serde(rename = "Fee", deserialize_with = "lenient::number")]
    pub fee: f64,
    /// `REGISTERED` or `UNREGISTERED`.
    #[serde(deserialize_with = "lenient::text")]
    pub receiver_registration_status: String,
    #[serde(deserialize_with = "lenient::text")]
    pub currency: String,
    #[serde(deserialize_with = "lenient::number")]
    pub exchange_rate: f64,
    #[serde(rename = "Message", deserialize_with = "lenient::text")]
    pub message: String,
}

impl MoneyTransferResponse {
    pub fn registration_status(&self) -> Option<ReceiverRegistrationStatus> {
        ReceiverRegistrationStatus::parse(&self.receiver_registration_status)
    }
}

impl_service_response!(MoneyTransferResponse, message = message);
