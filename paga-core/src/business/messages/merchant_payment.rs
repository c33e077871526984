use crate::business::{
    service::impl_service_response,
    types::lenient,
    validation::{self, Validate, ValidationError},
    ServiceMethod, ServiceRequest,
};

/// Pays a registered merchant.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MerchantPaymentRequest {
    pub reference_number: String,
    #[serde(rename = "Amount", alias = "amount")]
    pub amount: f64,
    #[serde(rename = "Currency", alias = "currency", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Merchant id or UUID.
    pub merchant_account: String,
    /// Identifies the customer on the merchant's own system.
    pub merchant_reference_number: String,
    pub merchant_service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchaser_principal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchaser_credentials: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_of_funds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl Validate for MerchantPaymentRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::reference("referenceNumber", &self.reference_number)?;
        validation::amount("Amount", self.amount)?;
        validation::required("merchantAccount", &self.merchant_account)?;
        validation::required("merchantReferenceNumber", &self.merchant_reference_number)?;
        validation::required("merchantService", &self.merchant_service)?;
        validation::credential_pair(
            ("purchaserPrincipal", &self.purchaser_principal),
            ("purchaserCredentials", &self.purchaser_credentials),
        )?;
        validation::locale("locale", &self.locale)
    }
}

impl ServiceRequest for MerchantPaymentRequest {
    const METHOD: ServiceMethod = ServiceMethod::MerchantPayment;
    type Response = MerchantPaymentResponse;

    fn reference_number(&self) -> Option<&str> {
        Some(&self.reference_number)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MerchantPaymentResponse {
    #[serde(deserialize_with = "lenient::text")]
    pub response_code: String,
    #[serde(rename = "refernceNumber", deserialize_with = "lenient::text")]
    pub reference_number: String,
    /// Confirmation code, token, voucher or receipt number from the merchant.
    #[serde(deserialize_with = "lenient::text")]
    pub merchant_transaction_reference: String,
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

impl_service_response!(MerchantPaymentResponse, message = message);
