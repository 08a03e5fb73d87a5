use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque identifier of a content item
///
/// Item ids are assigned by the host platform and are never reused within
/// a registry lifetime. The wrapper is serde-transparent so persisted id
/// lists serialize as plain numbers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(raw: u64) -> Self {
        ItemId(raw)
    }
}

/// Persisted status of a content item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Publicly visible
    Publish,
    /// Unfinished, author-visible only
    Draft,
    /// Awaiting review
    Pending,
    /// Scheduled for a future publish date
    Future,
    /// Visible to privileged users only
    Private,
    /// Moved to the trash bin
    Trash,
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ItemStatus::Publish => "publish",
            ItemStatus::Draft => "draft",
            ItemStatus::Pending => "pending",
            ItemStatus::Future => "future",
            ItemStatus::Private => "private",
            ItemStatus::Trash => "trash",
        };
        write!(f, "{}", name)
    }
}

/// The guarded persisted fields of a content item
///
/// These are the fields the mutation guard compares and reverts: status,
/// visibility password, the wall-clock scheduled date and its normalized
/// UTC counterpart. The host owns every other field of the item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemFields {
    /// Item status
    pub status: ItemStatus,
    /// Visibility password; empty string means no password
    pub password: String,
    /// Scheduled date in the site's local wall-clock time
    pub date: NaiveDateTime,
    /// Normalized UTC timestamp derived from `date`
    pub date_utc: DateTime<Utc>,
}

/// A proposed update to an item's guarded fields
///
/// Transient: exists only for the duration of a single update-pipeline
/// invocation. The item's currently persisted fields travel separately so
/// the guard can compare proposed against stored values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedUpdate {
    /// Target item
    pub id: ItemId,
    /// Proposed new field values
    pub fields: ItemFields,
}

/// A search candidate row returned to the admin picker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSummary {
    /// Item id
    pub id: ItemId,
    /// Item title
    pub title: String,
    /// Host-defined item type kind (e.g. "page", "article")
    pub kind: String,
}
