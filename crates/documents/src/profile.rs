//! Seller identity, supplied by external business-profile configuration.

use serde::{Deserialize, Serialize};

use ledgercraft_core::ValueObject;

/// Bank details printed in the payment section of an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetails {
    pub account_name: String,
    pub account_number: String,
    pub ifsc: String,
}

impl ValueObject for BankDetails {}

/// The issuing business's identity block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub name: String,
    pub address_lines: Vec<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gstin: Option<String>,
    pub pan: Option<String>,
    pub bank: Option<BankDetails>,
}

impl ValueObject for BusinessProfile {}
