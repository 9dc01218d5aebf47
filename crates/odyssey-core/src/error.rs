//! Error types used throughout the crate.

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when manipulating core game data.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The named item does not exist in the item catalog.
    #[error("unknown item: \"{0}\"")]
    ItemNotFound(String),

    /// The item exists but cannot go into an equipment slot.
    #[error("\"{0}\" cannot be equipped")]
    NotEquippable(String),

    /// The item is not present in the inventory.
    #[error("\"{0}\" is not in the inventory")]
    NotInInventory(String),
}
