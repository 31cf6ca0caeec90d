//! Record types accepted by the API
//!
//! Each record is a flat serde struct. Field types are the validation:
//! a body that doesn't deserialize into the struct never reaches a handler.

pub mod donation;
pub mod ngo;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use donation::Donation;
pub use ngo::Ngo;

/// A record type stored in its own collection.
pub trait Record: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection the record is stored in.
    const COLLECTION: &'static str;
}
