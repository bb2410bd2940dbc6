//! # Domain Services
//!
//! Composite-key derivation. Deterministic, no side effects.
//!
//! Every chaincode that shares a ledger namespace must produce identical keys
//! for identical inputs, so the encoding here is fixed:
//!
//! ```text
//! key = object_type ‖ len(attr_0) ‖ attr_0 ‖ len(attr_1) ‖ attr_1 ‖ ...
//! ```
//!
//! where `len` is the attribute's length printed in decimal. Lengths are
//! counted in UTF-16 code units, which is what other shims writing to the
//! same ledger count; for text inside the Basic Multilingual Plane this is the
//! number of characters.

// =============================================================================
// COMPOSITE KEYS
// =============================================================================

/// Builds a composite key from an object type and an ordered list of
/// attributes.
///
/// With no attributes the key is the object type itself.
///
/// ```
/// use chaincode_shim::domain::create_composite_key;
///
/// assert_eq!(create_composite_key("asset", &["ab", "c"]), "asset2ab1c");
/// assert_eq!(create_composite_key("asset", &["a", "bc"]), "asset1a2bc");
/// assert_eq!(create_composite_key::<&str>("asset", &[]), "asset");
/// ```
#[must_use]
pub fn create_composite_key<S: AsRef<str>>(object_type: &str, attributes: &[S]) -> String {
    let capacity = object_type.len()
        + attributes
            .iter()
            .map(|a| a.as_ref().len() + 4)
            .sum::<usize>();

    let mut key = String::with_capacity(capacity);
    key.push_str(object_type);
    for attribute in attributes {
        let attribute = attribute.as_ref();
        key.push_str(&attribute_length(attribute).to_string());
        key.push_str(attribute);
    }
    key
}

/// Length of an attribute as written into the key prefix.
#[must_use]
pub fn attribute_length(attribute: &str) -> usize {
    attribute.encode_utf16().count()
}

// =============================================================================
// TESTS
// =============================================================================
