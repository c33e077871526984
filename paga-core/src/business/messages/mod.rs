pub mod account_balance;
pub mod airtime_purchase;
pub mod deposit_to_bank;
pub mod merchant_payment;
pub mod money_transfer;
pub mod recent_transaction_history;
pub mod register_customer;
pub mod transaction_history;
pub mod validate_deposit_to_bank;
pub mod withdrawal;
