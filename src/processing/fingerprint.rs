//! Stable content fingerprints.
//!
//! Fingerprints are durable dedup keys: they are derived from a SHA-256 digest
//! so that equal texts get equal fingerprints across processes and runs.
use sha2::{Digest, Sha256};

/// First 8 bytes of the SHA-256 digest of `text`, read as a little-endian integer.
pub fn fingerprint(text: &str) -> u64 {
    let digest = Sha256::digest(text.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        // these values must never change: they are persisted dedup keys.
        assert_eq!(fingerprint("hello"), 1054880662928880172);
        assert_eq!(
            fingerprint("The committee met on Tuesday to discuss the new regional plan"),
            2808505107680656421
        );
    }

    #[test]
    fn stable() {
        let t = "Une phrase suffisamment longue pour être gardée dans le corpus final.";
        assert_eq!(fingerprint(t), fingerprint(&t.to_string()));
    }

    #[test]
    fn distinct() {
        assert_ne!(fingerprint("hello"), fingerprint("hello "));
        assert_ne!(fingerprint("hello"), fingerprint("Hello"));
    }
}
