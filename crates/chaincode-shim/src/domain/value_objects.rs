//! # Value Objects
//!
//! Immutable per-invocation values bound into a stub.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// TRANSACTION ID
// =============================================================================

/// Opaque identifier of the transaction a stub belongs to.
///
/// The handler correlates every request with its peer exchange through this
/// value, so it is never altered after construction.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(String);

impl TransactionId {
    /// Creates a transaction id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransactionId({})", self.0)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TransactionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for TransactionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// ARGUMENT SNAPSHOT
// =============================================================================

/// The invocation arguments, copied once at construction.
///
/// There is no way to mutate or reorder the snapshot; every accessor that
/// hands out owned data hands out a fresh copy.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ArgumentSnapshot {
    args: Box<[Vec<u8>]>,
}

impl ArgumentSnapshot {
    /// Copies `args` into a new snapshot, preserving order.
    pub fn new<I, A>(args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: AsRef<[u8]>,
    {
        Self {
            args: args.into_iter().map(|a| a.as_ref().to_vec()).collect(),
        }
    }

    /// Number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Returns true if no arguments were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Borrow a single argument.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.args.get(index).map(Vec::as_slice)
    }

    /// Iterate over borrowed arguments in order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.args.iter().map(Vec::as_slice)
    }

    /// Independent owned copy of every argument.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Vec<u8>> {
        self.args.to_vec()
    }

    /// Every argument decoded as UTF-8. Invalid sequences become U+FFFD.
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        self.iter()
            .map(|a| String::from_utf8_lossy(a).into_owned())
            .collect()
    }
}

impl fmt::Debug for ArgumentSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgumentSnapshot")
            .field("count", &self.args.len())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_id_display() {
        let id = TransactionId::new("tx-42");
        assert_eq!(id.to_string(), "tx-42");
        assert_eq!(id.as_str(), "tx-42");
        assert_eq!(format!("{id:?}"), "TransactionId(tx-42)");
    }

    #[test]
    fn test_snapshot_copies_source() {
        let mut source = vec![b"a".to_vec(), b"b".to_vec()];
        let snapshot = ArgumentSnapshot::new(&source);
        source[0].push(b'!');
        source.reverse();
        assert_eq!(snapshot.to_vec(), vec![b"a".to_vec(), b"b".to_vec()]);
    }

    #[test]
    fn test_snapshot_copies_are_independent() {
        let snapshot = ArgumentSnapshot::new(["x", "y"]);
        let mut first = snapshot.to_vec();
        first[1] = b"changed".to_vec();
        first.push(b"extra".to_vec());
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get(1), Some(&b"y"[..]));
    }

    #[test]
    fn test_snapshot_lossy_strings() {
        let snapshot = ArgumentSnapshot::new([&b"ok"[..], &[0xffu8, 0xfe][..]]);
        let strings = snapshot.to_strings();
        assert_eq!(strings[0], "ok");
        assert!(strings[1].contains('\u{FFFD}'));
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = ArgumentSnapshot::default();
        assert!(snapshot.is_empty());
        assert!(snapshot.to_vec().is_empty());
        assert!(snapshot.get(0).is_none());
    }
}
