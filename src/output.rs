//! CLI output formatting for the check report.
//!
//! Output is information-centric, not file-centric: every entity leads with
//! its positional index and display title; directory names appear only when
//! an entity has no title to show. The `format_*` functions are pure and
//! return `Vec<String>` for testability; `print_*` wrappers write to stdout.
//!
//! ```text
//! Content
//! japanese
//!     001 Hiragana Basics (2 chapters)
//!         001 Getting Started (3 lessons)
//!             001 The A Row
//!             002 The Ka Row
//!             003 The Sa Row
//!
//! Problems
//!     japanese/course-3/descriptor.json: descriptor.json missing
//!
//! Checked 2 courses, 4 chapters, 8 lessons
//! ```

use crate::check::{CheckReport, CourseNode};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Entity header: positional index + title, with an optional child count.
/// Entities whose descriptor failed to load show their directory name in
/// parentheses — the id IS the identity when there is no title.
fn entity_header(index: usize, title: Option<&str>, id: &str, count: Option<(usize, &str)>) -> String {
    let label = match title {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => format!("({id})"),
    };
    match count {
        Some((n, noun)) => format!("{} {} ({} {})", format_index(index), label, n, noun),
        None => format!("{} {}", format_index(index), label),
    }
}

/// Format the full check report: inventory tree, problems, summary line.
pub fn format_check_report(report: &CheckReport) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Content".to_string());
    for language in &report.languages {
        lines.push(language.id.clone());
        for (i, course) in language.courses.iter().enumerate() {
            format_course(course, i + 1, &mut lines);
        }
    }

    lines.push(String::new());
    lines.push("Problems".to_string());
    if report.problems.is_empty() {
        lines.push("    none".to_string());
    } else {
        for problem in &report.problems {
            lines.push(format!("    {}: {}", problem.path, problem.detail));
        }
    }

    let (courses, chapters, lessons) = report.totals();
    lines.push(String::new());
    lines.push(format!(
        "Checked {} courses, {} chapters, {} lessons",
        courses, chapters, lessons
    ));

    lines
}

fn format_course(course: &CourseNode, position: usize, lines: &mut Vec<String>) {
    lines.push(format!(
        "{}{}",
        indent(1),
        entity_header(
            position,
            course.title.as_deref(),
            &course.id,
            Some((course.chapters.len(), "chapters")),
        )
    ));

    for (i, chapter) in course.chapters.iter().enumerate() {
        lines.push(format!(
            "{}{}",
            indent(2),
            entity_header(
                i + 1,
                chapter.title.as_deref(),
                &chapter.id,
                Some((chapter.lessons.len(), "lessons")),
            )
        ));
        for (j, lesson) in chapter.lessons.iter().enumerate() {
            let marker = if lesson.has_header { "" } else { " (no header)" };
            lines.push(format!(
                "{}{} {}{}",
                indent(3),
                format_index(j + 1),
                lesson.title,
                marker
            ));
        }
    }
}

/// Print the check report to stdout.
pub fn print_check_report(report: &CheckReport) {
    for line in format_check_report(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check;
    use crate::test_helpers::sample_store;

    #[test]
    fn format_index_pads_to_three() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn indent_by_depth() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "        ");
    }

    #[test]
    fn entity_header_with_title_and_count() {
        assert_eq!(
            entity_header(1, Some("Hiragana Basics"), "course-1", Some((2, "chapters"))),
            "001 Hiragana Basics (2 chapters)"
        );
    }

    #[test]
    fn entity_header_falls_back_to_id() {
        assert_eq!(entity_header(3, None, "course-3", None), "003 (course-3)");
    }

    #[test]
    fn report_lists_inventory_in_order() {
        let report = check::check(&sample_store(), "mdx").unwrap();
        let lines = format_check_report(&report);
        let text = lines.join("\n");

        let hiragana = text.find("001 Hiragana Basics (2 chapters)").unwrap();
        let conversation = text.find("002 Everyday Conversation (2 chapters)").unwrap();
        assert!(hiragana < conversation);
        assert!(text.contains("001 The A Row"));
        assert!(text.contains("Checked 2 courses, 4 chapters, 8 lessons"));
    }

    #[test]
    fn clean_report_prints_none() {
        let report = check::check(&sample_store(), "mdx").unwrap();
        let lines = format_check_report(&report);
        let problems_at = lines.iter().position(|l| l == "Problems").unwrap();
        assert_eq!(lines[problems_at + 1], "    none");
    }

    #[test]
    fn problems_are_listed_with_paths() {
        let store = sample_store().file("japanese/course-1/descriptor.json", "{broken");
        let report = check::check(&store, "mdx").unwrap();
        let lines = format_check_report(&report);
        assert!(lines
            .iter()
            .any(|l| l.contains("japanese/course-1/descriptor.json:")));
    }

    #[test]
    fn headerless_lesson_is_marked() {
        let store = sample_store().file(
            "japanese/course-1/chapter-1/lesson-4.mdx",
            "# No header\n",
        );
        let report = check::check(&store, "mdx").unwrap();
        let lines = format_check_report(&report);
        assert!(lines.iter().any(|l| l.contains("Lesson 4 (no header)")));
    }
}
