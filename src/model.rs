use serde::Serialize;

/// A single row of the medication listing.
///
/// Field order is the order the keys appear in the output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedicationRecord {
    pub name: String,
    pub description: String,
    /// Public price ("Prix Public de Vente"), e.g. `"12.50 MAD"`.
    pub ppv: String,
}

impl MedicationRecord {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        ppv: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ppv: ppv.into(),
        }
    }
}
