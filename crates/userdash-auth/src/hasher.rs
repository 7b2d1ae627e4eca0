//! Salted password digests for the in-memory account store.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use uuid::Uuid;

/// A stored password: random salt plus `SHA-256(salt || password)`.
///
/// Good enough for a mock store that never leaves the process; a real
/// backend would use a slow KDF.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest {
	salt: [u8; 16],
	digest: [u8; 32],
}

impl PasswordDigest {
	/// Hashes `password` with a fresh random salt.
	pub fn new(password: &str) -> Self {
		let salt = *Uuid::new_v4().as_bytes();
		Self {
			salt,
			digest: Self::compute(&salt, password),
		}
	}

	/// Checks `password` in constant time.
	pub fn verify(&self, password: &str) -> bool {
		let candidate = Self::compute(&self.salt, password);
		self.digest[..].ct_eq(&candidate[..]).into()
	}

	fn compute(salt: &[u8; 16], password: &str) -> [u8; 32] {
		let mut hasher = Sha256::new();
		hasher.update(salt);
		hasher.update(password.as_bytes());
		hasher.finalize().into()
	}
}

impl std::fmt::Debug for PasswordDigest {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str("PasswordDigest(..)")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_verify_roundtrip() {
		let digest = PasswordDigest::new("password123");

		assert!(digest.verify("password123"));
		assert!(!digest.verify("password124"));
		assert!(!digest.verify(""));
	}

	#[test]
	fn test_same_password_different_salt() {
		let a = PasswordDigest::new("same");
		let b = PasswordDigest::new("same");

		assert_ne!(a, b);
		assert!(a.verify("same"));
		assert!(b.verify("same"));
	}
}
