//! Lenient whole-tree validation.
//!
//! The resolver fails fast: the first missing or malformed descriptor ends
//! the call. That is the right contract for serving content, but useless
//! for an author asking "what is wrong with my tree?". `check` walks every
//! language, course, chapter, and lesson, records each problem it finds,
//! and keeps going. Only an unlistable content root is fatal.
//!
//! Problems reported:
//! - missing or malformed `descriptor.json` (course or chapter level)
//! - unreadable lesson documents
//! - lessons with no metadata header (legal, but worth knowing — every
//!   field is defaulted)
//! - chapters containing no lesson documents
//!
//! The resulting [`CheckReport`] mirrors the resolver's ordering so the
//! inventory printed by the CLI matches what listings will serve.

use crate::descriptor::{self, Descriptor};
use crate::lesson;
use crate::naming;
use crate::store::{ContentError, ContentStore, EntryKind};

/// Inventory of the whole tree plus every problem found.
#[derive(Debug)]
pub struct CheckReport {
    pub languages: Vec<LanguageNode>,
    pub problems: Vec<Problem>,
}

#[derive(Debug)]
pub struct LanguageNode {
    pub id: String,
    pub courses: Vec<CourseNode>,
}

#[derive(Debug)]
pub struct CourseNode {
    pub id: String,
    /// `None` when the descriptor could not be loaded.
    pub title: Option<String>,
    pub order: i64,
    pub chapters: Vec<ChapterNode>,
}

#[derive(Debug)]
pub struct ChapterNode {
    pub id: String,
    pub title: Option<String>,
    pub order: i64,
    pub lessons: Vec<LessonNode>,
}

#[derive(Debug)]
pub struct LessonNode {
    pub id: String,
    pub title: String,
    pub order: i64,
    pub has_header: bool,
}

/// One problem, located by store-relative path.
#[derive(Debug)]
pub struct Problem {
    pub path: String,
    pub detail: String,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }

    /// `(courses, chapters, lessons)` totals across all languages.
    pub fn totals(&self) -> (usize, usize, usize) {
        let mut counts = (0, 0, 0);
        for language in &self.languages {
            counts.0 += language.courses.len();
            for course in &language.courses {
                counts.1 += course.chapters.len();
                for chapter in &course.chapters {
                    counts.2 += chapter.lessons.len();
                }
            }
        }
        counts
    }
}

/// Walk the whole tree, collecting problems instead of failing on them.
pub fn check(
    store: &impl ContentStore,
    lesson_extension: &str,
) -> Result<CheckReport, ContentError> {
    let mut problems = Vec::new();
    let mut languages = Vec::new();

    let roots: Vec<String> = store
        .list("")?
        .into_iter()
        .filter(|entry| entry.kind == EntryKind::Dir)
        .map(|entry| entry.name)
        .collect();

    for language in roots {
        let mut courses = Vec::new();
        for course_id in subdir_names(store, &language, &mut problems) {
            let course_dir = format!("{language}/{course_id}");
            let course_info = try_descriptor(store, &course_dir, &mut problems);

            let mut chapters = Vec::new();
            for chapter_id in subdir_names(store, &course_dir, &mut problems) {
                let chapter_dir = format!("{course_dir}/{chapter_id}");
                let chapter_info = try_descriptor(store, &chapter_dir, &mut problems);
                let lessons = check_lessons(store, &chapter_dir, lesson_extension, &mut problems);
                if lessons.is_empty() {
                    problems.push(Problem {
                        path: chapter_dir.clone(),
                        detail: "chapter contains no lesson documents".to_string(),
                    });
                }
                chapters.push(ChapterNode {
                    order: order_key(&chapter_id, chapter_info.as_ref()),
                    title: chapter_info.map(|info| info.title),
                    id: chapter_id,
                    lessons,
                });
            }
            chapters.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));

            courses.push(CourseNode {
                order: order_key(&course_id, course_info.as_ref()),
                title: course_info.map(|info| info.title),
                id: course_id,
                chapters,
            });
        }
        courses.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));

        languages.push(LanguageNode {
            id: language,
            courses,
        });
    }

    Ok(CheckReport {
        languages,
        problems,
    })
}

/// Subdirectory names of `dir`; a listing failure becomes a problem and an
/// empty result.
fn subdir_names(
    store: &impl ContentStore,
    dir: &str,
    problems: &mut Vec<Problem>,
) -> Vec<String> {
    match store.list(dir) {
        Ok(entries) => entries
            .into_iter()
            .filter(|entry| entry.kind == EntryKind::Dir)
            .map(|entry| entry.name)
            .collect(),
        Err(err) => {
            problems.push(Problem {
                path: dir.to_string(),
                detail: err.to_string(),
            });
            Vec::new()
        }
    }
}

/// Load a descriptor, converting failure into a problem entry.
fn try_descriptor(
    store: &impl ContentStore,
    dir: &str,
    problems: &mut Vec<Problem>,
) -> Option<Descriptor> {
    match descriptor::load(store, dir) {
        Ok(info) => Some(info),
        Err(err) => {
            let detail = match err {
                ContentError::NotFound(_) => "descriptor.json missing".to_string(),
                other => other.to_string(),
            };
            problems.push(Problem {
                path: format!("{dir}/{}", descriptor::DESCRIPTOR_FILE),
                detail,
            });
            None
        }
    }
}

/// Ordering key that works with or without a loaded descriptor.
fn order_key(dir_name: &str, info: Option<&Descriptor>) -> i64 {
    match info {
        Some(info) => info.effective_order(dir_name),
        None => naming::trailing_number(dir_name).unwrap_or(0),
    }
}

fn check_lessons(
    store: &impl ContentStore,
    chapter_dir: &str,
    lesson_extension: &str,
    problems: &mut Vec<Problem>,
) -> Vec<LessonNode> {
    let suffix = format!(".{lesson_extension}");
    let files: Vec<String> = match store.list(chapter_dir) {
        Ok(entries) => entries
            .into_iter()
            .filter(|entry| entry.kind == EntryKind::File)
            .filter_map(|entry| entry.name.strip_suffix(&suffix).map(str::to_string))
            .collect(),
        Err(err) => {
            problems.push(Problem {
                path: chapter_dir.to_string(),
                detail: err.to_string(),
            });
            return Vec::new();
        }
    };

    let mut lessons = Vec::new();
    for id in files {
        let path = format!("{chapter_dir}/{id}{suffix}");
        let raw = match store.read(&path) {
            Ok(raw) => raw,
            Err(err) => {
                problems.push(Problem {
                    path,
                    detail: err.to_string(),
                });
                continue;
            }
        };
        let (header, _body) = lesson::split_header(&raw);
        if header.is_none() {
            problems.push(Problem {
                path: path.clone(),
                detail: "no metadata header; all fields defaulted".to_string(),
            });
        }
        let metadata = lesson::parse_metadata(header, &id);
        lessons.push(LessonNode {
            id,
            title: metadata.title,
            order: metadata.order,
            has_header: header.is_some(),
        });
    }
    lessons.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));
    lessons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_store;

    #[test]
    fn clean_tree_has_no_problems() {
        let report = check(&sample_store(), "mdx").unwrap();
        assert!(report.is_clean());
        assert_eq!(report.totals(), (2, 4, 8));
    }

    #[test]
    fn inventory_matches_resolver_ordering() {
        let report = check(&sample_store(), "mdx").unwrap();
        let course_ids: Vec<&str> = report.languages[0]
            .courses
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(course_ids, vec!["course-1", "course-2"]);

        let chapter_one = &report.languages[0].courses[0].chapters[0];
        let lesson_ids: Vec<&str> = chapter_one.lessons.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(lesson_ids, vec!["lesson-1", "lesson-2", "lesson-3"]);
    }

    #[test]
    fn missing_descriptor_is_reported_not_fatal() {
        let store = sample_store().file("japanese/course-3/chapter-1/lesson-1.mdx", "---\n---\nbody");
        let report = check(&store, "mdx").unwrap();
        assert!(report
            .problems
            .iter()
            .any(|p| p.path == "japanese/course-3/descriptor.json"
                && p.detail.contains("missing")));
        // the rest of the tree is still inventoried
        assert_eq!(report.languages[0].courses.len(), 3);
    }

    #[test]
    fn malformed_descriptor_is_reported() {
        let store = sample_store().file("japanese/course-1/descriptor.json", "{broken");
        let report = check(&store, "mdx").unwrap();
        assert!(report
            .problems
            .iter()
            .any(|p| p.path == "japanese/course-1/descriptor.json"));
        let course = report.languages[0]
            .courses
            .iter()
            .find(|c| c.id == "course-1")
            .unwrap();
        assert_eq!(course.title, None);
    }

    #[test]
    fn headerless_lesson_is_noted() {
        let store = sample_store().file(
            "japanese/course-1/chapter-1/lesson-4.mdx",
            "# No header at all\n",
        );
        let report = check(&store, "mdx").unwrap();
        assert!(report
            .problems
            .iter()
            .any(|p| p.path.ends_with("lesson-4.mdx") && p.detail.contains("no metadata header")));
        let chapter = &report.languages[0].courses[0].chapters[0];
        let node = chapter.lessons.iter().find(|l| l.id == "lesson-4").unwrap();
        assert!(!node.has_header);
        assert_eq!(node.title, "Lesson 4");
    }

    #[test]
    fn empty_chapter_is_reported() {
        let store = sample_store().file(
            "japanese/course-2/chapter-3/descriptor.json",
            r#"{"title": "Drafts", "description": "Nothing yet"}"#,
        );
        let report = check(&store, "mdx").unwrap();
        assert!(report
            .problems
            .iter()
            .any(|p| p.path == "japanese/course-2/chapter-3"
                && p.detail.contains("no lesson documents")));
    }

    #[test]
    fn several_problems_accumulate() {
        let store = sample_store()
            .file("japanese/course-1/descriptor.json", "{broken")
            .file(
                "japanese/course-2/chapter-1/descriptor.json",
                r#"{"title": "only title"}"#,
            );
        let report = check(&store, "mdx").unwrap();
        assert_eq!(report.problems.len(), 2);
    }

    #[test]
    fn missing_root_is_fatal() {
        let store = crate::test_helpers::MemStore::default();
        assert!(check(&store, "mdx").is_err());
    }
}
