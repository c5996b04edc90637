/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed account and transaction records
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{Currency, TransactionStatus, TransactionType};

/// Amounts per currency, as reported under `balance` / `balance_on_hold`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balances {
    #[serde(
        rename = "RUB",
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub rub: Decimal,
    #[serde(
        rename = "USD",
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub usd: Decimal,
    #[serde(
        rename = "UAH",
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub uah: Decimal,
}

impl Balances {
    pub fn get(&self, currency: Currency) -> Decimal {
        match currency {
            Currency::Rub => self.rub,
            Currency::Usd => self.usd,
            Currency::Uah => self.uah,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Currency, Decimal)> + '_ {
        Currency::ALL.into_iter().map(|currency| (currency, self.get(currency)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountFlags {
    #[serde(rename = "lockWithdrawal", deserialize_with = "serde_helpers::deserialize_flag")]
    pub lock_withdrawal: bool,
    #[serde(rename = "lockAccount", deserialize_with = "serde_helpers::deserialize_flag")]
    pub lock_account: bool,
}

/// Merchant account snapshot returned by `get_account_info`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccountInfo {
    pub balance: Balances,
    pub balance_on_hold: Balances,
    pub withdrawal_locked: bool,
    pub account_locked: bool,
}

/// One entry of the transaction history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(deserialize_with = "serde_helpers::deserialize_i64")]
    pub id: i64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub amount: Decimal,
    #[serde(rename = "paymentSystem")]
    pub payment_system: String,
    pub currency: String,
    #[serde(deserialize_with = "serde_helpers::deserialize_string_or_null")]
    pub address: String,
    #[serde(
        rename = "paymentCard",
        deserialize_with = "serde_helpers::deserialize_string_or_null"
    )]
    pub payment_card: String,
    pub status: TransactionStatus,
}

pub(crate) mod serde_helpers {
    use super::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;
    use std::str::FromStr;

    /// Decimal from a JSON number or numeric string; null and blanks are errors
    pub fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match &value {
            Value::String(raw) => {
                Decimal::from_str(raw.trim()).map_err(|err| {
                    serde::de::Error::custom(format!("invalid decimal {raw:?}: {err}"))
                })
            }
            Value::Number(number) => {
                let raw = number.to_string();
                Decimal::from_str(&raw)
                    .or_else(|_| Decimal::from_scientific(&raw))
                    .map_err(|err| {
                        serde::de::Error::custom(format!("invalid decimal {raw}: {err}"))
                    })
            }
            other => Err(serde::de::Error::custom(format!(
                "expected decimal, found {other}"
            ))),
        }
    }

    pub fn serialize_decimal<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    /// Integer from a JSON integer, a whole-valued float, or an integer string
    pub fn deserialize_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match &value {
            Value::Number(number) => number
                .as_i64()
                .or_else(|| {
                    number
                        .as_f64()
                        .filter(|float| {
                            float.fract() == 0.0
                                && *float >= i64::MIN as f64
                                && *float < i64::MAX as f64
                        })
                        .map(|float| float as i64)
                })
                .ok_or_else(|| serde::de::Error::custom(format!("invalid integer {number}"))),
            Value::String(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|err| serde::de::Error::custom(format!("invalid integer {raw:?}: {err}"))),
            other => Err(serde::de::Error::custom(format!(
                "expected integer, found {other}"
            ))),
        }
    }

    /// Boolean flag; the gateway may also encode it as 0/1
    pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match &value {
            Value::Bool(flag) => Ok(*flag),
            Value::Number(number) => match number.as_u64() {
                Some(0) => Ok(false),
                Some(1) => Ok(true),
                _ => Err(serde::de::Error::custom(format!("invalid flag {number}"))),
            },
            Value::String(raw) => match raw.trim() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                _ => Err(serde::de::Error::custom(format!("invalid flag {raw:?}"))),
            },
            other => Err(serde::de::Error::custom(format!("expected flag, found {other}"))),
        }
    }

    pub fn deserialize_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
    }
}
