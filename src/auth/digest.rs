use base64ct::{Base64, Encoding};
use sha1::{Digest, Sha1};

/// One-way transform of a plaintext password into a comparable digest.
pub trait PasswordDigester: Send + Sync {
    fn digest(&self, plaintext: &str) -> String;
}

/// RFC 2307 `{SHA}` password digest: `"{SHA}" + base64(sha1(plaintext))`.
///
/// Deterministic and unsalted on purpose: the sign-in form digests the
/// password client-side with the same scheme, so both sides must produce
/// identical output for identical input. This is transit obfuscation only
/// and is not suitable for storage; the directory applies its own hashing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rfc2307Digester;

impl PasswordDigester for Rfc2307Digester {
    fn digest(&self, plaintext: &str) -> String {
        let mut hasher = Sha1::new();
        hasher.update(plaintext.as_bytes());
        format!("{{SHA}}{}", Base64::encode_string(&hasher.finalize()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_deterministic() {
        let digester = Rfc2307Digester;
        assert_eq!(digester.digest("secret123"), digester.digest("secret123"));
    }

    #[test]
    fn digest_differs_for_different_inputs() {
        let digester = Rfc2307Digester;
        assert_ne!(digester.digest("secret123"), digester.digest("secret124"));
        assert_ne!(digester.digest(""), digester.digest(" "));
    }

    #[test]
    fn digest_matches_rfc2307_vector() {
        // Well-known LDAP userPassword vector for "password"
        let digester = Rfc2307Digester;
        assert_eq!(
            digester.digest("password"),
            "{SHA}W6ph5Mm5Pz8GgiULbPgzG37mj9g="
        );
    }

    #[test]
    fn digest_has_scheme_prefix() {
        let digester = Rfc2307Digester;
        assert!(digester.digest("anything").starts_with("{SHA}"));
    }
}
