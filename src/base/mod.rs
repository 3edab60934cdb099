//! Base types and error handling.
//!
//! - [`BridgeError`](bridgeerror::BridgeError): error taxonomy with shell-facing codes

pub mod bridgeerror;
