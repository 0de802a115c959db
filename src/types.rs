use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Opaque storefront item identifier carried by an add-to-cart affordance.
///
/// The storefront chooses the format (SKU, ULID, etc.). This crate never
/// inspects it; it is handed to the collaborator cart function only after
/// the gate check passes.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into,
)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
