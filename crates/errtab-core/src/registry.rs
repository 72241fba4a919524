//! Library registry: fixed, ordered library names.
//!
//! The position of a name determines its id (`position + 1`). That ordering
//! is a compatibility contract with the consumer's `ERR_LIB_*` enumeration,
//! so registries are versioned data, never inferred from input files.

use indexmap::IndexSet;

use crate::RegistryError;
use crate::entry::{LibraryId, MAX_LIBRARY_ID};

/// Largest number of libraries a registry can hold (id 0 is reserved).
pub const MAX_LIBRARIES: usize = MAX_LIBRARY_ID as usize;

/// Built-in registry. Must be kept in sync with the enum in `openssl/err.h`;
/// the emitted data asserts this at the consumer's compile time.
pub const BORINGSSL_LIBRARIES: &[&str] = &[
    "NONE", "SYS", "BN", "RSA", "DH", "EVP", "BUF", "OBJ", "PEM", "DSA", "X509", "ASN1", "CONF",
    "CRYPTO", "EC", "SSL", "BIO", "PKCS7", "PKCS8", "X509V3", "RAND", "ENGINE", "OCSP", "UI",
    "COMP", "ECDSA", "ECDH", "HMAC", "DIGEST", "CIPHER", "HKDF", "USER",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    names: IndexSet<String>,
}

impl Registry {
    /// Build a registry from names in id order.
    ///
    /// Rejects more than [`MAX_LIBRARIES`] names, duplicates, and names that
    /// cannot form a C identifier suffix.
    pub fn new<I, S>(names: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = IndexSet::new();
        for name in names {
            let name = name.into();
            if !is_valid_name(&name) {
                return Err(RegistryError::InvalidName(name));
            }
            if set.contains(&name) {
                return Err(RegistryError::DuplicateLibrary(name));
            }
            set.insert(name);
        }

        if set.len() > MAX_LIBRARIES {
            return Err(RegistryError::Overflow(set.len()));
        }

        Ok(Self { names: set })
    }

    /// The registry matching BoringSSL's `ERR_LIB_*` values.
    pub fn boringssl() -> Self {
        Self {
            names: BORINGSSL_LIBRARIES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Parse a registry file: one name per line, `#` starts a comment.
    pub fn parse(text: &str) -> Result<Self, RegistryError> {
        let names = text
            .lines()
            .map(|line| line.split('#').next().unwrap_or("").trim())
            .filter(|name| !name.is_empty());
        Self::new(names)
    }

    pub fn id(&self, name: &str) -> Option<LibraryId> {
        self.names
            .get_index_of(name)
            .map(|index| LibraryId::new(index as u8 + 1))
    }

    pub fn name(&self, id: LibraryId) -> Option<&str> {
        let index = (id.get() as usize).checked_sub(1)?;
        self.names.get_index(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate in id order.
    pub fn iter(&self) -> impl Iterator<Item = (LibraryId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(index, name)| (LibraryId::new(index as u8 + 1), name.as_str()))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::boringssl()
    }
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
