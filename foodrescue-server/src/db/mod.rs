//! Database layer - document store handle and helpers
//!
//! # Design Principles
//!
//! - One store handle per process, built at startup and injected into handlers
//! - Handlers never touch the driver directly, only `create_document` / `get_documents`
//! - Identifiers leave this layer as plain strings

pub mod documents;
pub mod memory;
pub mod mongo;
pub mod store;

pub use documents::{create_document, get_documents, identifier_string, serialize_document};
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::{DbError, DocumentStore};
