#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ServiceMethod {
    RegisterCustomer,
    MoneyTransfer,
    AirtimePurchase,
    MerchantPayment,
    ValidateDepositToBank,
    DepositToBank,
    Withdrawal,
    AccountBalance,
    TransactionHistory,
    RecentTransactionHistory,
}

impl ServiceMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceMethod::RegisterCustomer => "registerCustomer",
            ServiceMethod::MoneyTransfer => "moneyTransfer",
            ServiceMethod::AirtimePurchase => "airtimePurchase",
            ServiceMethod::MerchantPayment => "merchantPayment",
            ServiceMethod::ValidateDepositToBank => "validateDepositToBank",
            ServiceMethod::DepositToBank => "depositToBank",
            ServiceMethod::Withdrawal => "withdrawal",
            ServiceMethod::AccountBalance => "accountBalance",
            ServiceMethod::TransactionHistory => "transactionHistory",
            ServiceMethod::RecentTransactionHistory => "recentTransactionHistory",
        }
    }

    /// Path of the method endpoint relative to the service base URL.
    pub fn path(&self) -> String {
        format!("/{}", self.as_str())
    }
}

impl std::fmt::Display for ServiceMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
