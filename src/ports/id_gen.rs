//! ID generator port for producing unique task identifiers.

/// Generates unique identifiers.
///
/// Identifiers are opaque strings; the store only requires that they never
/// repeat within one list. Tests substitute a predictable sequence.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}
