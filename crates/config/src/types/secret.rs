//! Serialization helper that never writes secret material.

use secrecy::{ExposeSecret, SecretString};
use serde::Serializer;

use crate::constants::REDACTED;

/// Serialize a secret as a fixed placeholder, or as the empty string if the
/// secret itself is empty so "unset" stays distinguishable from "set".
pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if secret.expose_secret().is_empty() {
        serializer.serialize_str("")
    } else {
        serializer.serialize_str(REDACTED)
    }
}
