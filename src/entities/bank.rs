// 🏦 Bank Entity - customer id + account number
//
// A plain data holder. Both fields are set through setters and never
// validated: any string is a customer id, any integer an account number.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    /// Customer identifier (opaque, may be empty)
    customer_id: String,

    /// Account number (any value, including zero and negatives)
    account_number: i64,
}

impl Bank {
    /// Create an empty bank record
    pub fn new() -> Self {
        Bank::default()
    }

    pub fn set_customer_id(&mut self, customer_id: impl Into<String>) {
        self.customer_id = customer_id.into();
    }

    pub fn set_account_number(&mut self, account_number: i64) {
        self.account_number = account_number;
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn account_number(&self) -> i64 {
        self.account_number
    }
}
