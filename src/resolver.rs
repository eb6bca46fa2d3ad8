//! Content resolution: listings and single-lesson fetches.
//!
//! The resolver answers every "what is at this coordinate" question against
//! a [`ContentStore`]:
//!
//! - [`Resolver::languages`] — language directories at the content root
//! - [`Resolver::courses`] — a language's courses, ordered
//! - [`Resolver::chapters`] — a course's chapters with lesson counts
//! - [`Resolver::lessons`] — a chapter's lessons with full metadata
//! - [`Resolver::lesson`] — one lesson's body plus ancestor descriptors
//! - [`Resolver::index`] — flat per-language lesson index across courses
//!
//! Nothing is cached: every call re-reads the store, so repeated calls
//! against an unchanged tree return identical results and a changed tree is
//! picked up immediately. Sibling descriptor and metadata reads within one
//! listing fan out across the rayon pool; ordering is applied after the
//! parallel collect, and errors surface in entry order, so a sequential
//! store sees byte-identical output.
//!
//! ## Ordering
//!
//! Courses and chapters sort ascending by effective order (descriptor
//! `order`, else directory-name number, else 0); lessons by header `order`.
//! Ties break on identifier comparison everywhere, keeping listings stable
//! across requests when authors reuse order values.

use crate::descriptor::{self, DESCRIPTOR_FILE};
use crate::lesson;
use crate::store::{ContentError, ContentStore, Entry, EntryKind};
use crate::types::{
    ChapterListing, ChapterSummary, Coordinate, CourseListing, CourseSummary, LessonContent,
    LessonPointer, LessonSummary,
};
use rayon::prelude::*;

/// Default lesson document extension, matching the authoring format.
pub const DEFAULT_LESSON_EXTENSION: &str = "mdx";

/// Stateless query surface over a content store.
pub struct Resolver<S> {
    store: S,
    lesson_extension: String,
}

impl<S: ContentStore> Resolver<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            lesson_extension: DEFAULT_LESSON_EXTENSION.to_string(),
        }
    }

    /// Override the lesson document extension (no leading dot).
    pub fn with_lesson_extension(mut self, extension: impl Into<String>) -> Self {
        self.lesson_extension = extension.into();
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Language directories at the content root, sorted by name.
    pub fn languages(&self) -> Result<Vec<String>, ContentError> {
        Ok(self
            .store
            .list("")?
            .into_iter()
            .filter(|entry| entry.kind == EntryKind::Dir)
            .map(|entry| entry.name)
            .collect())
    }

    /// A language's courses with descriptors, ordered.
    pub fn courses(&self, language: &str) -> Result<Vec<CourseSummary>, ContentError> {
        let dirs = subdirectories(self.store.list(language)?);

        let loaded: Vec<Result<CourseSummary, ContentError>> = dirs
            .par_iter()
            .map(|entry| {
                let dir = format!("{language}/{}", entry.name);
                let info = descriptor::load(&self.store, &dir)?;
                Ok(CourseSummary {
                    order: info.effective_order(&entry.name),
                    id: entry.name.clone(),
                    title: info.title,
                    description: info.description,
                })
            })
            .collect();

        let mut courses = first_error_in_order(loaded)?;
        courses.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));
        Ok(courses)
    }

    /// A course's chapters with descriptors and lesson counts, ordered.
    pub fn chapters(&self, language: &str, course: &str) -> Result<CourseListing, ContentError> {
        let course_dir = format!("{language}/{course}");
        let course_info = descriptor::load(&self.store, &course_dir)?;
        let dirs = subdirectories(self.store.list(&course_dir)?);

        let loaded: Vec<Result<ChapterSummary, ContentError>> = dirs
            .par_iter()
            .map(|entry| {
                let dir = format!("{course_dir}/{}", entry.name);
                let info = descriptor::load(&self.store, &dir)?;
                let lesson_count = self.lesson_files(&dir)?.len();
                Ok(ChapterSummary {
                    order: info.effective_order(&entry.name),
                    id: entry.name.clone(),
                    title: info.title,
                    description: info.description,
                    lesson_count,
                })
            })
            .collect();

        let mut chapters = first_error_in_order(loaded)?;
        chapters.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));
        Ok(CourseListing {
            course_info,
            chapters,
        })
    }

    /// A chapter's lessons with full metadata, ordered.
    pub fn lessons(
        &self,
        language: &str,
        course: &str,
        chapter: &str,
    ) -> Result<ChapterListing, ContentError> {
        let chapter_dir = format!("{language}/{course}/{chapter}");
        let chapter_info = descriptor::load(&self.store, &chapter_dir)?;
        let files = self.lesson_files(&chapter_dir)?;

        let loaded: Vec<Result<LessonSummary, ContentError>> = files
            .par_iter()
            .map(|id| {
                let path = self.lesson_path(&chapter_dir, id);
                let (metadata, _body) = lesson::extract(&self.store, &path, id)?;
                Ok(LessonSummary {
                    id: id.clone(),
                    title: metadata.title,
                    description: metadata.description,
                    order: metadata.order,
                })
            })
            .collect();

        let mut lessons = first_error_in_order(loaded)?;
        lessons.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));
        Ok(ChapterListing {
            chapter_info,
            lessons,
        })
    }

    /// One lesson's full content with ancestor descriptors attached.
    ///
    /// The lesson file is read first, so a missing lesson reports not-found
    /// regardless of the state of its ancestor descriptors.
    pub fn lesson(&self, coordinate: &Coordinate) -> Result<LessonContent, ContentError> {
        let chapter_dir = format!(
            "{}/{}/{}",
            coordinate.language, coordinate.course, coordinate.chapter
        );
        let path = self.lesson_path(&chapter_dir, &coordinate.lesson);
        let (metadata, body) = lesson::extract(&self.store, &path, &coordinate.lesson)?;

        let course_dir = format!("{}/{}", coordinate.language, coordinate.course);
        let course_info = descriptor::load(&self.store, &course_dir)?;
        let chapter_info = descriptor::load(&self.store, &chapter_dir)?;

        Ok(LessonContent {
            title: metadata.title,
            description: metadata.description,
            order: metadata.order,
            body,
            course_info,
            chapter_info,
        })
    }

    /// Flat index of every lesson in a language, across all courses and
    /// chapters, sorted by `(order, course, chapter, id)`.
    pub fn index(&self, language: &str) -> Result<Vec<LessonPointer>, ContentError> {
        let mut pointers = Vec::new();
        for course in self.courses(language)? {
            let listing = self.chapters(language, &course.id)?;
            for chapter in listing.chapters {
                let lessons = self.lessons(language, &course.id, &chapter.id)?;
                for entry in lessons.lessons {
                    pointers.push(LessonPointer {
                        course: course.id.clone(),
                        chapter: chapter.id.clone(),
                        id: entry.id,
                        title: entry.title,
                        description: entry.description,
                        order: entry.order,
                    });
                }
            }
        }
        pointers.sort_by(|a, b| {
            a.order
                .cmp(&b.order)
                .then_with(|| a.course.cmp(&b.course))
                .then_with(|| a.chapter.cmp(&b.chapter))
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(pointers)
    }

    /// Lesson identifiers (file stems) in a chapter directory, sorted.
    ///
    /// Matches on extension only — no file is opened, which keeps chapter
    /// lesson counts cheap.
    fn lesson_files(&self, chapter_dir: &str) -> Result<Vec<String>, ContentError> {
        let suffix = format!(".{}", self.lesson_extension);
        Ok(self
            .store
            .list(chapter_dir)?
            .into_iter()
            .filter(|entry| entry.kind == EntryKind::File)
            .filter_map(|entry| entry.name.strip_suffix(&suffix).map(str::to_string))
            .collect())
    }

    fn lesson_path(&self, chapter_dir: &str, id: &str) -> String {
        format!("{chapter_dir}/{id}.{}", self.lesson_extension)
    }
}

/// Directory entries only, keeping the store's name order.
///
/// Filters out `descriptor.json` and any other stray files at course and
/// language levels.
fn subdirectories(entries: Vec<Entry>) -> Vec<Entry> {
    entries
        .into_iter()
        .filter(|entry| entry.kind == EntryKind::Dir && entry.name != DESCRIPTOR_FILE)
        .collect()
}

/// Unwrap a parallel collect, surfacing the first error in entry order.
///
/// Keeps failure deterministic regardless of which worker hit its error
/// first.
fn first_error_in_order<T>(results: Vec<Result<T, ContentError>>) -> Result<Vec<T>, ContentError> {
    let mut items = Vec::with_capacity(results.len());
    for result in results {
        items.push(result?);
    }
    Ok(items)
}
