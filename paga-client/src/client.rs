use paga_core::{
    business::{
        messages::{
            account_balance::AccountBalanceRequest,
            airtime_purchase::{AirtimePurchaseRequest, AirtimePurchaseResponse},
            deposit_to_bank::{DepositToBankRequest, DepositToBankResponse},
            merchant_payment::{MerchantPaymentRequest, MerchantPaymentResponse},
            money_transfer::{MoneyTransferRequest, MoneyTransferResponse},
            recent_transaction_history::RecentTransactionHistoryRequest,
            register_customer::{RegisterCustomerRequest, RegisterCustomerResponse},
            transaction_history::TransactionHistoryRequest,
            validate_deposit_to_bank::{ValidateDepositToBankRequest, ValidateDepositToBankResponse},
            withdrawal::{WithdrawalRequest, WithdrawalResponse},
        },
        types::RawResponse,
        ServiceRequest, ServiceResponse,
    },
    format::{
        error::PagaError,
        frame::ServiceCall,
        message::{decode_response, EncodeDecode},
    },
};

use crate::{config::PagaConfig, interface::Transport};

/// Sends request contracts to the Business Services API over a
/// caller-supplied [`Transport`].
///
/// Business failures come back as `Ok` with the platform's code and message;
/// only validation, transport and decoding problems are `Err`.
pub struct PagaClient<T: Transport> {
    config: PagaConfig,
    transport: T,
}

impl<T: Transport> PagaClient<T> {
    pub fn new(config: PagaConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &PagaConfig {
        &self.config
    }

    pub async fn call<R: ServiceRequest>(&mut self, request: &R) -> Result<R::Response, PagaError> {
        let call = ServiceCall::new(request).inspect_err(|e| {
            log::warn!("{} not sent: {}", R::METHOD, e);
        })?;
        let reference = call.reference_number.as_deref().unwrap_or("-");
        let url = call.url(&self.config.base_url);
        // payload carries credentials, keep it out of the log
        log::debug!("{} [{}] -> {}", R::METHOD, reference, url);

        let body = self
            .transport
            .post(url, call.encode(), self.config.call_timeout)
            .await
            .inspect_err(|e| log::error!("{} [{}] transport error: {}", R::METHOD, reference, e))?;

        let response = decode_response(request, &body)
            .inspect_err(|e| log::error!("{} [{}] {}", R::METHOD, reference, e))?;

        match response.is_success() {
            Some(true) => log::debug!("{} [{}] succeeded", R::METHOD, reference),
            Some(false) => log::warn!(
                "{} [{}] failed with code {}: {}",
                R::METHOD,
                reference,
                response.response_code(),
                response.message()
            ),
            None => log::debug!(
                "{} [{}] returned code {:?}",
                R::METHOD,
                reference,
                response.response_code()
            ),
        }
        if response.reference_number().is_empty() && request.reference_number().is_some() {
            log::warn!("{} [{}] response did not echo the reference", R::METHOD, reference);
        }
        Ok(response)
    }

    pub async fn register_customer(
        &mut self,
        request: &RegisterCustomerRequest,
    ) -> Result<RegisterCustomerResponse, PagaError> {
        self.call(request).await
    }

    pub async fn money_transfer(
        &mut self,
        request: &MoneyTransferRequest,
    ) -> Result<MoneyTransferResponse, PagaError> {
        self.call(request).await
    }

    pub async fn airtime_purchase(
        &mut self,
        request: &AirtimePurchaseRequest,
    ) -> Result<AirtimePurchaseResponse, PagaError> {
        self.call(request).await
    }

    pub async fn merchant_payment(
        &mut self,
        request: &MerchantPaymentRequest,
    ) -> Result<MerchantPaymentResponse, PagaError> {
        self.call(request).await
    }

    pub async fn validate_deposit_to_bank(
        &mut self,
        request: &ValidateDepositToBankRequest,
    ) -> Result<ValidateDepositToBankResponse, PagaError> {
        self.call(request).await
    }

    pub async fn deposit_to_bank(
        &mut self,
        request: &DepositToBankRequest,
    ) -> Result<DepositToBankResponse, PagaError> {
        for field in request.truncated_fields() {
            log::warn!(
                "depositToBank [{}] {} will be truncated by the platform",
                request.reference_number,
                field
            );
        }
        self.call(request).await
    }

    pub async fn withdrawal(
        &mut self,
        request: &WithdrawalRequest,
    ) -> Result<WithdrawalResponse, PagaError> {
        self.call(request).await
    }

    pub async fn account_balance(
        &mut self,
        request: &AccountBalanceRequest,
    ) -> Result<RawResponse, PagaError> {
        self.call(request).await
    }

    pub async fn transaction_history(
        &mut self,
        request: &TransactionHistoryRequest,
    ) -> Result<RawResponse, PagaError> {
        self.call(request).await
    }

    pub async fn recent_transaction_history(
        &mut self,
        request: &RecentTransactionHistoryRequest,
    ) -> Result<RawResponse, PagaError> {
        self.call(request).await
    }
}
