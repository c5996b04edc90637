/*
[INPUT]:  Ordered request parameter values and the private token
[OUTPUT]: Lowercase hex MD5 request signatures
[POS]:    Auth layer - shared-secret request signing
[UPDATE]: When the gateway changes its digest or concatenation rules
*/

use std::fmt;

use md5::{Digest, Md5};

/// A single primitive value contributing to a request signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignValue {
    Text(String),
    Number(u64),
}

impl fmt::Display for SignValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignValue::Text(text) => f.write_str(text),
            SignValue::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for SignValue {
    fn from(value: &str) -> Self {
        SignValue::Text(value.to_string())
    }
}

impl From<String> for SignValue {
    fn from(value: String) -> Self {
        SignValue::Text(value)
    }
}

impl From<u32> for SignValue {
    fn from(value: u32) -> Self {
        SignValue::Number(u64::from(value))
    }
}

impl From<u64> for SignValue {
    fn from(value: u64) -> Self {
        SignValue::Number(value)
    }
}

/// Signs gateway requests with the merchant's private token
///
/// The digest carries no timestamp or nonce: identical inputs always
/// produce the identical signature, which is what the gateway expects.
#[derive(Clone)]
pub struct RequestSigner {
    private_token: String,
}

impl RequestSigner {
    /// Create a signer bound to the given private token
    pub fn new(private_token: impl Into<String>) -> Self {
        Self {
            private_token: private_token.into(),
        }
    }

    /// Sign an ordered list of values
    ///
    /// Format: md5("{v1}{v2}...{vn}{private_token}"), lowercase hex.
    /// The caller owns the ordering; it must follow the endpoint's
    /// documented parameter order.
    pub fn sign(&self, values: &[SignValue]) -> String {
        let mut hasher = Md5::new();
        for value in values {
            hasher.update(value.to_string().as_bytes());
        }
        hasher.update(self.private_token.as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner")
            .field("private_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_empty_uses_private_token_only() {
        let signer = RequestSigner::new("secret");
        assert_eq!(signer.sign(&[]), "5ebe2294ecd0e0f08eab7690d2a6ee69");
    }

    #[test]
    fn test_sign_public_token() {
        let signer = RequestSigner::new("secret");
        let signature = signer.sign(&[SignValue::from("pub")]);
        assert_eq!(signature, "aa80ed39b1cb48a910f2f8a32fbd4ce8");
        assert_eq!(signature.len(), 32);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_sign_is_order_sensitive() {
        let signer = RequestSigner::new("secret");
        let ab = signer.sign(&["a".into(), "b".into()]);
        let ba = signer.sign(&["b".into(), "a".into()]);

        assert_eq!(ab, "0be9089682363b12e49aefbb9356450d");
        assert_eq!(ba, "fe2f9410223753bb6813da9fdf8e8b0d");
        assert_ne!(ab, ba);
    }

    #[test]
    fn test_sign_is_deterministic() {
        let signer = RequestSigner::new("secret");
        let values = vec![SignValue::from("deposit"), SignValue::from(5u32)];
        assert_eq!(signer.sign(&values), signer.sign(&values));
        assert_eq!(signer.sign(&values), "9c0472e99371a98ea36dcb74a384656f");
    }

    #[test]
    fn test_number_canonical_form() {
        assert_eq!(SignValue::from(5u32).to_string(), "5");
        assert_eq!(SignValue::from(1_000_000u64).to_string(), "1000000");
    }

    #[test]
    fn test_debug_redacts_private_token() {
        let signer = RequestSigner::new("super-secret");
        let rendered = format!("{signer:?}");
        assert!(!rendered.contains("super-secret"));
    }
}
