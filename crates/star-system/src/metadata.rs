//! Catalog identification for star systems.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Catalog identity of a star system
///
/// The UUID is name-based (v5) over the sector coordinates and seed, so the
/// same sector always receives the same designation unless entropy was mixed
/// into its seed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemMetadata {
    /// Stable identifier
    pub id: Uuid,
    /// Short designation, e.g. "KV-4729"
    pub catalog_name: String,
}

impl SystemMetadata {
    /// Derive metadata for the sector at `(x, y)` with the given seed
    ///
    /// # Example
    /// ```
    /// use star_system::SystemMetadata;
    ///
    /// let a = SystemMetadata::for_sector(0, 51, 51);
    /// let b = SystemMetadata::for_sector(0, 51, 51);
    /// assert_eq!(a, b);
    /// assert_eq!(a.catalog_name.len(), 7);
    /// ```
    pub fn for_sector(x: i64, y: i64, seed: u64) -> Self {
        let key = format!("sector:{x}:{y}:{seed}");
        let id = Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes());
        let catalog_name = catalog_name(&id);

        Self { id, catalog_name }
    }
}

/// Generate a short catalog designation from a UUID
///
/// Format: two uppercase letters, a dash and four digits (e.g., "KV-4729").
/// Provides ~6.76 million unique combinations (26² × 10000).
pub fn catalog_name(id: &Uuid) -> String {
    let bytes = id.as_bytes();
    let prefix1 = (bytes[0] % 26 + b'A') as char;
    let prefix2 = (bytes[1] % 26 + b'A') as char;
    let number = u16::from_le_bytes([bytes[2], bytes[3]]) % 10000;
    format!("{}{}-{:04}", prefix1, prefix2, number)
}
