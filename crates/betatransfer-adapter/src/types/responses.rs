/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response envelopes with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::Deserialize;
use serde_json::Value;

use super::models::{AccountFlags, AccountInfo, Balances};

/// Body of GET /api/account-info
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccountInfoResponse {
    pub balance: Balances,
    pub balance_on_hold: Balances,
    pub account: AccountFlags,
}

impl From<AccountInfoResponse> for AccountInfo {
    fn from(response: AccountInfoResponse) -> Self {
        AccountInfo {
            balance: response.balance,
            balance_on_hold: response.balance_on_hold,
            withdrawal_locked: response.account.lock_withdrawal,
            account_locked: response.account.lock_account,
        }
    }
}

/// Body of POST /api/history
///
/// Items stay untyped here so a bad entry can be reported by position.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryResponse {
    pub items: Vec<Value>,
}
