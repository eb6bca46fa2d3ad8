//! Course and chapter descriptor loading.
//!
//! Every course and chapter directory carries a `descriptor.json` with at
//! least `title` and `description` string fields and an optional numeric
//! `order`. Extra fields are tolerated — the contract is a minimum, not a
//! schema. A missing descriptor is a lookup failure; one that is present
//! but unparsable (or missing a mandatory field) is a content-integrity
//! failure, reported with the path and the parse reason.
//!
//! ## Ordering Fallback
//!
//! When the descriptor omits `order`, the trailing number of the directory
//! name supplies it (`course-2` → 2), and 0 is the final fallback. The
//! whole policy is [`Descriptor::effective_order`]; callers never parse
//! directory names themselves.

use crate::naming;
use crate::store::{ContentError, ContentStore};
use serde::{Deserialize, Serialize};

/// Name of the descriptor file inside each course and chapter directory.
pub const DESCRIPTOR_FILE: &str = "descriptor.json";

/// Structured metadata for a course or chapter directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl Descriptor {
    /// Ordering key for the directory this descriptor belongs to.
    ///
    /// `order` field if present, else the trailing number of the directory
    /// name, else 0.
    pub fn effective_order(&self, dir_name: &str) -> i64 {
        self.order
            .unwrap_or_else(|| naming::trailing_number(dir_name).unwrap_or(0))
    }
}

/// Load the descriptor of a course or chapter directory.
///
/// `dir` is the store-relative directory path; the descriptor is read from
/// `<dir>/descriptor.json`.
pub fn load(store: &impl ContentStore, dir: &str) -> Result<Descriptor, ContentError> {
    let path = format!("{dir}/{DESCRIPTOR_FILE}");
    let raw = store.read(&path)?;
    serde_json::from_str(&raw).map_err(|err| ContentError::MalformedDescriptor {
        path,
        reason: err.to_string(),
    })
}
