//! Serialized listing and record types shared with consumers.
//!
//! These are the shapes the resolver hands to whatever renders them — a
//! server route, a static-export pipeline, or the CLI's JSON output. Field
//! names serialize in camelCase to match the wire contract the rendering
//! layer already consumes (`courseInfo`, `lessonCount`, ...).

use crate::descriptor::Descriptor;
use serde::Serialize;
use std::fmt;

/// The four-part identifier locating one lesson.
///
/// Each part is the literal directory or file-stem name on the content
/// store — case-sensitive, no normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    pub language: String,
    pub course: String,
    pub chapter: String,
    pub lesson: String,
}

impl Coordinate {
    pub fn new(
        language: impl Into<String>,
        course: impl Into<String>,
        chapter: impl Into<String>,
        lesson: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            course: course.into(),
            chapter: chapter.into(),
            lesson: lesson.into(),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.language, self.course, self.chapter, self.lesson
        )
    }
}

/// One course in a language's course listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub order: i64,
}

/// One chapter in a course listing, with its lesson count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub order: i64,
    pub lesson_count: usize,
}

/// One lesson in a chapter listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LessonSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub order: i64,
}

/// A course's chapters, ordered, with the course descriptor attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseListing {
    pub course_info: Descriptor,
    pub chapters: Vec<ChapterSummary>,
}

/// A chapter's lessons, ordered, with the chapter descriptor attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterListing {
    pub chapter_info: Descriptor,
    pub lessons: Vec<LessonSummary>,
}

/// A single lesson's full content with ancestor descriptors attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonContent {
    pub title: String,
    pub description: String,
    pub order: i64,
    /// Raw markup body, untouched. Rendering is the consumer's concern.
    pub body: String,
    pub course_info: Descriptor,
    pub chapter_info: Descriptor,
}

/// One row of a language's flat lesson index: coordinate parts plus
/// metadata, no body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LessonPointer {
    pub course: String,
    pub chapter: String,
    pub id: String,
    pub title: String,
    pub description: String,
    pub order: i64,
}
