//! Zeroizing wrapper for private key material.
//!
//! Signing takes a raw hex-encoded private key from the caller; this type
//! keeps that key out of logs and zeroes the backing memory on drop.

use serde::{Deserialize, Deserializer};
use std::fmt;
use zeroize::Zeroizing;

/// A string whose contents are redacted from all formatting output and
/// wiped from memory when dropped.
#[derive(Clone)]
pub struct SecretString(Zeroizing<String>);

impl SecretString {
	/// Wraps the given string.
	pub fn new(s: String) -> Self {
		Self(Zeroizing::new(s))
	}

	/// Grants access to the underlying secret.
	///
	/// The returned slice must not end up in logs or error messages.
	pub fn expose(&self) -> &str {
		&self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<&str> for SecretString {
	fn from(s: &str) -> Self {
		Self::new(s.to_string())
	}
}

impl From<String> for SecretString {
	fn from(s: String) -> Self {
		Self::new(s)
	}
}

impl fmt::Debug for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("SecretString(***)")
	}
}

impl fmt::Display for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("***")
	}
}

impl<'de> Deserialize<'de> for SecretString {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		String::deserialize(deserializer).map(SecretString::new)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn formatting_never_leaks_the_secret() {
		let secret = SecretString::from("0xdeadbeef");
		assert_eq!(format!("{:?}", secret), "SecretString(***)");
		assert_eq!(format!("{}", secret), "***");
	}

	#[test]
	fn expose_returns_the_original_value() {
		let secret = SecretString::from("0xdeadbeef");
		assert_eq!(secret.expose(), "0xdeadbeef");
		assert!(!secret.is_empty());
	}
}
