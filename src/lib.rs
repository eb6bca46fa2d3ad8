//! # Shiori
//!
//! A content resolver and lesson navigator for filesystem-backed language
//! courses. Your filesystem is the data source: a `language/course/chapter`
//! directory tree with JSON descriptors at the course and chapter levels and
//! lesson documents (a `---`-fenced metadata header followed by markup) at
//! the leaves.
//!
//! # Architecture: Store → Resolver → Navigation
//!
//! Shiori layers three concerns, each only speaking to the one below:
//!
//! ```text
//! 1. Store       content/           →  directory listings + file reads
//! 2. Resolver    store              →  ordered listings + lesson records
//! 3. Navigation  resolver listings  →  previous/next links across chapters
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Testability**: the [`store::ContentStore`] trait is the only I/O seam,
//!   so ordering and navigation logic run unchanged against an in-memory
//!   store in unit tests.
//! - **Storage independence**: the resolver never touches `std::fs`; any
//!   backend that can list a directory and read a file can serve content.
//! - **Statelessness**: every call recomputes from the store. There is no
//!   cache to invalidate and no shared mutable state, so concurrent requests
//!   need no coordination.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`store`] | `ContentStore` trait, the filesystem backend, and the content error taxonomy |
//! | [`descriptor`] | `descriptor.json` loading and the order-fallback policy |
//! | [`lesson`] | Lesson document parsing — header split and lenient field coercion |
//! | [`resolver`] | Listing and fetch surface: languages, courses, chapters, lessons, records |
//! | [`navigate`] | Previous/next derivation across chapter boundaries |
//! | [`check`] | Lenient whole-tree validation producing a problem report |
//! | [`render`] | Pass-through markdown → HTML rendering of lesson bodies |
//! | [`config`] | `shiori.toml` loading and validation |
//! | [`types`] | Serialized listing and record types shared with consumers |
//! | [`naming`] | Identifier helpers: trailing-number ordering, humanized titles |
//! | [`output`] | CLI output formatting — tree display of the check report |
//!
//! # Design Decisions
//!
//! ## Filesystem as Database, Behind a Trait
//!
//! Courses are directories and lessons are files, but no caller walks the
//! tree directly. The [`store::ContentStore`] trait narrows storage to two
//! operations (list a directory, read a file), and [`resolver::Resolver`]
//! owns every path-layout assumption. The content root is injected when the
//! filesystem store is constructed — nothing resolves paths ad hoc.
//!
//! ## Explicit Ordering Fallback
//!
//! A course or chapter is ordered by the `order` field of its descriptor
//! when present, else by the trailing number of its directory name
//! (`chapter-2` → 2), else 0. That policy lives in one place,
//! [`descriptor::Descriptor::effective_order`], rather than being re-parsed
//! at call sites. Lessons are ordered by their header `order` (default 0).
//! Equal orders are broken by identifier comparison, so listings are
//! deterministic across requests even when authors reuse order values.
//!
//! ## Lenient Lessons, Strict Descriptors
//!
//! A lesson with a missing or partial header still displays: each metadata
//! field falls back independently (humanized identifier for the title, empty
//! description, order 0). Descriptors are the opposite — a `descriptor.json`
//! that is absent is a lookup failure, and one that is unparsable or missing
//! `title`/`description` is a content-integrity error, never silently
//! skipped. A broken content repository should be loud; a half-written
//! lesson should not take its chapter down.
//!
//! ## Strict Core, Best-Effort Boundary
//!
//! [`navigate`] returns `Result` and reports an inconsistent coordinate as
//! not-found rather than an all-`None` link pair. The "navigation must never
//! block a lesson page" policy is applied at the CLI boundary, which degrades
//! a failed lookup to empty links while the lesson fetch itself stays fatal.

pub mod check;
pub mod config;
pub mod descriptor;
pub mod lesson;
pub mod naming;
pub mod navigate;
pub mod output;
pub mod render;
pub mod resolver;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
