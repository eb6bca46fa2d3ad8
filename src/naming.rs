//! Identifier helpers shared by descriptors, lessons, and navigation.
//!
//! Course and chapter directories conventionally carry a trailing number
//! (`course-2`, `chapter-10`) used as an ordering fallback when the
//! descriptor omits an explicit `order`. Lesson identifiers are slugs
//! (`lesson-1`, `greetings-basics`) humanized into display titles when the
//! document header provides none.

/// Parse the trailing number of an identifier like `course-2`.
///
/// Only a run of ASCII digits at the very end of the name counts:
/// - `"course-2"` → Some(2)
/// - `"chapter-10"` → Some(10)
/// - `"2-course"` → None
/// - `"appendix"` → None
pub fn trailing_number(name: &str) -> Option<i64> {
    let digits = name
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    name[name.len() - digits..].parse().ok()
}

/// Humanize a slug identifier into a display title.
///
/// Dashes and underscores become spaces and each word is capitalized:
/// - `"lesson-1"` → `"Lesson 1"`
/// - `"greetings_basics"` → `"Greetings Basics"`
///
/// Used as the title fallback for lessons whose header omits one.
pub fn humanize_slug(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
