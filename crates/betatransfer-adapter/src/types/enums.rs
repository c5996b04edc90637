/*
[INPUT]:  Gateway wire values for transaction kinds, statuses, currencies
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the gateway adds transaction types, statuses or currencies
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Enumerations that travel over the wire as a fixed lowercase tag
pub trait WireValue: Sized + Copy + 'static {
    /// Every known variant, used when resolving raw strings
    const VARIANTS: &'static [Self];

    fn as_wire(&self) -> &'static str;

    /// Resolve a wire tag, ignoring ASCII case and surrounding whitespace
    fn from_wire(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.as_wire().eq_ignore_ascii_case(raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Deposit,
    Withdraw,
}

impl WireValue for TransactionType {
    const VARIANTS: &'static [Self] = &[TransactionType::Deposit, TransactionType::Withdraw];

    fn as_wire(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Withdraw => "withdraw",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Success,
    Processing,
    Error,
    Cancel,
}

impl WireValue for TransactionStatus {
    const VARIANTS: &'static [Self] = &[
        TransactionStatus::Success,
        TransactionStatus::Processing,
        TransactionStatus::Error,
        TransactionStatus::Cancel,
    ];

    fn as_wire(&self) -> &'static str {
        match self {
            TransactionStatus::Success => "success",
            TransactionStatus::Processing => "processing",
            TransactionStatus::Error => "error",
            TransactionStatus::Cancel => "cancel",
        }
    }
}

/// Currencies reported in account balances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Rub,
    Usd,
    Uah,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Rub, Currency::Usd, Currency::Uah];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Rub => "RUB",
            Currency::Usd => "USD",
            Currency::Uah => "UAH",
        }
    }
}

macro_rules! impl_display_from_str {
    ($($ty:ty => $label:literal),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_wire())
                }
            }

            impl FromStr for $ty {
                type Err = String;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Self::from_wire(s).ok_or_else(|| format!("unknown {}: {:?}", $label, s))
                }
            }
        )*
    };
}

impl_display_from_str!(
    TransactionType => "transaction type",
    TransactionStatus => "transaction status",
);

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
