//! Domain model for restricted content items

mod item;

pub use item::{ItemFields, ItemId, ItemStatus, ItemSummary, ProposedUpdate};
