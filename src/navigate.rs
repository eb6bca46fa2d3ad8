//! Previous/next lesson derivation.
//!
//! Navigation is computed from the same ordered listings the resolver
//! serves, so the links always agree with what a chapter page displays.
//! Within a chapter the neighbors are the adjacent entries of the lesson
//! list; at a chapter edge the link crosses into the adjacent chapter's
//! last (previous) or first (next) lesson. Navigation never crosses a
//! course or language boundary — the first lesson of a course's first
//! chapter has no previous, the last lesson of its last chapter has no
//! next.
//!
//! Link titles come from the target lesson's own metadata, so the buttons
//! show the same title the lesson page does.
//!
//! The calculator is strict: a coordinate whose lesson does not appear in
//! its chapter's listing is a lookup failure, not an all-`None` link pair.
//! Hosts that want navigation to be best-effort degrade at their boundary
//! (`unwrap_or_default()`), keeping a navigation failure from blocking the
//! lesson fetch itself.

use crate::resolver::Resolver;
use crate::store::{ContentError, ContentStore};
use crate::types::{ChapterSummary, Coordinate, LessonSummary};
use serde::Serialize;

/// One navigation endpoint: the target coordinate within the course plus
/// its display title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavTarget {
    pub course: String,
    pub chapter: String,
    pub lesson: String,
    pub title: String,
}

impl NavTarget {
    fn new(course: &str, chapter: &str, entry: &LessonSummary) -> Self {
        Self {
            course: course.to_string(),
            chapter: chapter.to_string(),
            lesson: entry.id.clone(),
            title: entry.title.clone(),
        }
    }
}

/// Previous/next links for one lesson. `None` on a side means the course
/// edge was reached.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Navigation {
    pub previous: Option<NavTarget>,
    pub next: Option<NavTarget>,
}

impl<S: ContentStore> Resolver<S> {
    /// Compute previous/next navigation for a lesson coordinate.
    ///
    /// Fails with [`ContentError::NotFound`] when the coordinate's lesson
    /// is not present in its chapter's listing.
    pub fn navigation(&self, coordinate: &Coordinate) -> Result<Navigation, ContentError> {
        let language = &coordinate.language;
        let course = &coordinate.course;

        let listing = self.lessons(language, course, &coordinate.chapter)?;
        let position = listing
            .lessons
            .iter()
            .position(|entry| entry.id == coordinate.lesson)
            .ok_or_else(|| ContentError::NotFound(coordinate.to_string()))?;

        let previous = if position > 0 {
            Some(NavTarget::new(
                course,
                &coordinate.chapter,
                &listing.lessons[position - 1],
            ))
        } else {
            self.adjacent_chapter_lesson(coordinate, Direction::Before)?
        };

        let next = if position + 1 < listing.lessons.len() {
            Some(NavTarget::new(
                course,
                &coordinate.chapter,
                &listing.lessons[position + 1],
            ))
        } else {
            self.adjacent_chapter_lesson(coordinate, Direction::After)?
        };

        Ok(Navigation { previous, next })
    }

    /// Boundary crossing: the last lesson of the chapter before the
    /// current one, or the first lesson of the chapter after it. `None`
    /// when the course edge is reached or the adjacent chapter is empty.
    fn adjacent_chapter_lesson(
        &self,
        coordinate: &Coordinate,
        direction: Direction,
    ) -> Result<Option<NavTarget>, ContentError> {
        let chapters = self
            .chapters(&coordinate.language, &coordinate.course)?
            .chapters;
        let position = chapters
            .iter()
            .position(|chapter| chapter.id == coordinate.chapter)
            .ok_or_else(|| ContentError::NotFound(coordinate.to_string()))?;

        let neighbor: Option<&ChapterSummary> = match direction {
            Direction::Before => position.checked_sub(1).map(|i| &chapters[i]),
            Direction::After => chapters.get(position + 1),
        };
        let Some(neighbor) = neighbor else {
            return Ok(None);
        };

        let lessons = self
            .lessons(&coordinate.language, &coordinate.course, &neighbor.id)?
            .lessons;
        let entry = match direction {
            Direction::Before => lessons.last(),
            Direction::After => lessons.first(),
        };
        Ok(entry.map(|entry| NavTarget::new(&coordinate.course, &neighbor.id, entry)))
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Before,
    After,
}
