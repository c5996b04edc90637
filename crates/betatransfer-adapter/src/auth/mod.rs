/*
[INPUT]:  Private token and ordered request values
[OUTPUT]: Request signatures for authenticated gateway calls
[POS]:    Auth layer - handles Betatransfer request authentication
[UPDATE]: When the signature scheme changes
*/

pub mod signer;

pub use signer::{RequestSigner, SignValue};
