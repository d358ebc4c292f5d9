//! Record store boundary.
//!
//! One store per record type. A store owns the canonical ordered list, hands
//! out ids, stamps creation timestamps, and returns detached copies.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryRecordStore;
pub use r#trait::RecordStore;
