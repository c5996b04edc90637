/*
[INPUT]:  Caller-supplied history filters (enum variants or raw strings)
[OUTPUT]: Normalized wire parameters, signature inputs and form bodies
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When endpoint parameters or their signing order change
*/

use serde::Serialize;

use super::enums::{TransactionStatus, TransactionType, WireValue};
use crate::auth::SignValue;
use crate::http::{BetatransferError, Result};

/// An enum-typed filter given either as a variant or as its wire string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue<T> {
    Variant(T),
    Raw(String),
}

impl<T: WireValue> FilterValue<T> {
    /// Resolve to the canonical wire tag
    ///
    /// A blank raw string counts as "not supplied". An unrecognized raw
    /// string is rejected before anything is sent.
    pub fn resolve(&self, field: &str) -> Result<Option<&'static str>> {
        match self {
            FilterValue::Variant(variant) => Ok(Some(variant.as_wire())),
            FilterValue::Raw(raw) if raw.trim().is_empty() => Ok(None),
            FilterValue::Raw(raw) => T::from_wire(raw)
                .map(|variant| Some(variant.as_wire()))
                .ok_or_else(|| {
                    let allowed: Vec<&str> = T::VARIANTS.iter().map(WireValue::as_wire).collect();
                    BetatransferError::Usage(format!(
                        "invalid {field} filter {raw:?}, expected one of {}",
                        allowed.join(", ")
                    ))
                }),
        }
    }
}

macro_rules! impl_filter_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for FilterValue<$ty> {
                fn from(value: $ty) -> Self {
                    FilterValue::Variant(value)
                }
            }

            impl From<&str> for FilterValue<$ty> {
                fn from(value: &str) -> Self {
                    FilterValue::Raw(value.to_string())
                }
            }

            impl From<String> for FilterValue<$ty> {
                fn from(value: String) -> Self {
                    FilterValue::Raw(value)
                }
            }
        )*
    };
}

impl_filter_from!(TransactionType, TransactionStatus);

/// Optional filters for the transaction history query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryFilter {
    pub limit: Option<u32>,
    pub transaction_type: Option<FilterValue<TransactionType>>,
    pub status: Option<FilterValue<TransactionStatus>>,
    pub address: Option<String>,
}

impl HistoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn transaction_type(mut self, value: impl Into<FilterValue<TransactionType>>) -> Self {
        self.transaction_type = Some(value.into());
        self
    }

    pub fn status(mut self, value: impl Into<FilterValue<TransactionStatus>>) -> Self {
        self.status = Some(value.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Validate and canonicalize the filters
    ///
    /// Falsy values (limit 0, empty strings) are dropped the same way the
    /// gateway's reference client drops them.
    pub fn normalize(&self) -> Result<HistoryParams> {
        let transaction_type = match &self.transaction_type {
            Some(value) => value.resolve("type")?,
            None => None,
        };
        let status = match &self.status {
            Some(value) => value.resolve("status")?,
            None => None,
        };

        Ok(HistoryParams {
            transaction_type,
            limit: self.limit.filter(|limit| *limit > 0),
            status,
            address: self.address.clone().filter(|address| !address.is_empty()),
        })
    }
}

/// History filters resolved to their wire form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryParams {
    pub transaction_type: Option<&'static str>,
    pub limit: Option<u32>,
    pub status: Option<&'static str>,
    pub address: Option<String>,
}

impl HistoryParams {
    /// Signature inputs in the gateway's order: type, limit, status, address
    pub fn sign_values(&self) -> Vec<SignValue> {
        let mut values = Vec::with_capacity(4);
        if let Some(transaction_type) = self.transaction_type {
            values.push(SignValue::from(transaction_type));
        }
        if let Some(limit) = self.limit {
            values.push(SignValue::from(limit));
        }
        if let Some(status) = self.status {
            values.push(SignValue::from(status));
        }
        if let Some(address) = &self.address {
            values.push(SignValue::from(address.as_str()));
        }
        values
    }

    pub fn into_form(self, sign: String) -> HistoryForm {
        HistoryForm {
            transaction_type: self.transaction_type,
            limit: self.limit,
            status: self.status,
            address: self.address,
            sign,
        }
    }
}

/// Form body for POST /api/history
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryForm {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub sign: String,
}

/// Query string carried by every request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenQuery<'a> {
    pub token: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign: Option<&'a str>,
}
