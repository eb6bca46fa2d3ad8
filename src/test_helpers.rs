//! Shared test utilities for the shiori test suite.
//!
//! Provides the in-memory [`MemStore`] used by unit tests to exercise
//! resolver and navigation logic without touching the filesystem, a sample
//! content tree shared between memory- and filesystem-backed tests, and a
//! fixture loader that copies `fixtures/content/` into a temp directory so
//! tests can mutate their copy freely.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::store::{ContentError, ContentStore, Entry, EntryKind};

// =========================================================================
// In-memory store
// =========================================================================

/// In-memory [`ContentStore`] built with a chainable builder:
///
/// ```rust
/// let store = MemStore::new()
///     .file("japanese/course-1/descriptor.json", "{...}")
///     .dir("japanese/course-1/chapter-9");
/// ```
///
/// Registering a file registers all its ancestor directories.
#[derive(Debug, Default)]
pub struct MemStore {
    files: BTreeMap<String, String>,
    dirs: BTreeSet<String>,
}

impl MemStore {
    pub fn new() -> Self {
        let mut store = Self::default();
        store.dirs.insert(String::new());
        store
    }

    pub fn file(mut self, path: &str, content: &str) -> Self {
        self.register_ancestors(path);
        self.files.insert(path.to_string(), content.to_string());
        self
    }

    pub fn dir(mut self, path: &str) -> Self {
        self.register_ancestors(path);
        self.dirs.insert(path.to_string());
        self
    }

    fn register_ancestors(&mut self, path: &str) {
        let mut prefix = String::new();
        for segment in path.split('/') {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(segment);
            if prefix.len() < path.len() {
                self.dirs.insert(prefix.clone());
            }
        }
    }
}

impl ContentStore for MemStore {
    fn list(&self, dir: &str) -> Result<Vec<Entry>, ContentError> {
        if !self.dirs.contains(dir) {
            return Err(ContentError::NotFound(if dir.is_empty() {
                ".".to_string()
            } else {
                dir.to_string()
            }));
        }
        let prefix = if dir.is_empty() {
            String::new()
        } else {
            format!("{dir}/")
        };

        let mut children: BTreeMap<String, EntryKind> = BTreeMap::new();
        for nested in &self.dirs {
            if let Some(rest) = nested.strip_prefix(&prefix)
                && !rest.is_empty()
                && !rest.contains('/')
            {
                children.insert(rest.to_string(), EntryKind::Dir);
            }
        }
        for path in self.files.keys() {
            if let Some(rest) = path.strip_prefix(&prefix)
                && !rest.is_empty()
                && !rest.contains('/')
            {
                children.insert(rest.to_string(), EntryKind::File);
            }
        }
        Ok(children
            .into_iter()
            .map(|(name, kind)| Entry { name, kind })
            .collect())
    }

    fn read(&self, path: &str) -> Result<String, ContentError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| ContentError::NotFound(path.to_string()))
    }
}

// =========================================================================
// Sample content tree
// =========================================================================

/// A small two-course tree exercising every ordering and boundary rule:
/// name-fallback course order, explicit descriptor order, multi-chapter
/// courses, and the chapter-crossing scenario from the navigation contract.
pub const SAMPLE_TREE: &[(&str, &str)] = &[
    (
        "japanese/course-1/descriptor.json",
        r#"{"title": "Hiragana Basics", "description": "Learn to read the hiragana syllabary"}"#,
    ),
    (
        "japanese/course-1/chapter-1/descriptor.json",
        r#"{"title": "Getting Started", "description": "The first three rows"}"#,
    ),
    (
        "japanese/course-1/chapter-1/lesson-1.mdx",
        "---\ntitle: The A Row\ndescription: The five vowel sounds\norder: 1\n---\n\n# The A Row\n\n<CharacterTable row=\"a\" />\n",
    ),
    (
        "japanese/course-1/chapter-1/lesson-2.mdx",
        "---\ntitle: The Ka Row\norder: 2\n---\n\n# The Ka Row\n",
    ),
    (
        "japanese/course-1/chapter-1/lesson-3.mdx",
        "---\ntitle: The Sa Row\norder: 3\n---\n\n# The Sa Row\n",
    ),
    (
        "japanese/course-1/chapter-2/descriptor.json",
        r#"{"title": "Voiced Sounds", "description": "Dakuten and handakuten"}"#,
    ),
    (
        "japanese/course-1/chapter-2/lesson-1.mdx",
        "---\ntitle: Dakuten\norder: 1\n---\n\n# Dakuten\n",
    ),
    (
        "japanese/course-1/chapter-2/lesson-2.mdx",
        "---\ntitle: Handakuten\norder: 2\n---\n\n# Handakuten\n",
    ),
    (
        "japanese/course-2/descriptor.json",
        r#"{"title": "Everyday Conversation", "description": "Phrases for daily life", "order": 2}"#,
    ),
    (
        "japanese/course-2/chapter-1/descriptor.json",
        r#"{"title": "Greetings", "description": "Hello and goodbye"}"#,
    ),
    (
        "japanese/course-2/chapter-1/lesson-1.mdx",
        "---\ntitle: Good Morning\norder: 1\n---\n\n# Good Morning\n",
    ),
    (
        "japanese/course-2/chapter-1/lesson-2.mdx",
        "---\ntitle: Good Evening\norder: 2\n---\n\n# Good Evening\n",
    ),
    (
        "japanese/course-2/chapter-2/descriptor.json",
        r#"{"title": "At the Store", "description": "Shopping phrases"}"#,
    ),
    (
        "japanese/course-2/chapter-2/lesson-1.mdx",
        "---\ntitle: How Much Is It\norder: 1\n---\n\n# How Much Is It\n",
    ),
];

/// The sample tree as an in-memory store.
pub fn sample_store() -> MemStore {
    SAMPLE_TREE
        .iter()
        .fold(MemStore::new(), |store, (path, content)| {
            store.file(path, content)
        })
}

/// Materialize a `(path, content)` tree under a directory.
pub fn write_tree(root: &Path, tree: &[(&str, &str)]) {
    for (path, content) in tree {
        let full = root.join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
    }
}

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}
