use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use shiori::resolver::Resolver;
use shiori::store::{ContentError, FsStore};
use shiori::types::Coordinate;
use shiori::{check, config, output, render};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "shiori")]
#[command(about = "Content resolver for filesystem-backed language courses")]
#[command(long_about = "\
Content resolver for filesystem-backed language courses

Your filesystem is the data source. Languages are top-level directories,
courses and chapters are nested directories carrying descriptor.json
metadata, and lessons are documents with a '---' fenced metadata header.

Content structure:

  content/
  ├── japanese/
  │   ├── course-1/
  │   │   ├── descriptor.json      # {\"title\", \"description\", \"order\"?}
  │   │   ├── chapter-1/
  │   │   │   ├── descriptor.json
  │   │   │   ├── lesson-1.mdx     # header: title, description, order
  │   │   │   └── lesson-2.mdx
  │   │   └── chapter-2/
  │   └── course-2/                # order falls back to the name number
  └── french/

Ordering: the descriptor's order field, else the trailing number of the
directory name, else 0; lessons use the order field of their header.
Ties break on identifier, so listings are stable across requests.

Listing commands print JSON. 'check' validates the whole tree and prints
a human-readable inventory instead of stopping at the first problem.
Run 'shiori gen-config' to generate a documented shiori.toml.")]
#[command(version)]
struct Cli {
    /// Content root directory (overrides shiori.toml)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List languages available under the content root
    Languages,
    /// List a language's courses, ordered
    Courses { language: String },
    /// List a course's chapters with lesson counts
    Chapters { language: String, course: String },
    /// List a chapter's lessons with metadata
    Lessons {
        language: String,
        course: String,
        chapter: String,
    },
    /// Fetch one lesson with ancestor descriptors and navigation
    Lesson {
        language: String,
        course: String,
        chapter: String,
        lesson: String,
        /// Also render the body to HTML (bodyHtml field)
        #[arg(long)]
        render: bool,
        /// Skip the best-effort navigation lookup
        #[arg(long)]
        no_nav: bool,
    },
    /// Compute previous/next navigation for a lesson
    Nav {
        language: String,
        course: String,
        chapter: String,
        lesson: String,
    },
    /// Flat index of every lesson in a language, across courses
    Index { language: String },
    /// Validate the whole content tree and print an inventory
    Check,
    /// Print a stock shiori.toml with all options documented
    GenConfig,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("shiori: {err}");
        std::process::exit(exit_code(err.as_ref()));
    }
}

/// Lookup failures exit 2 (the 404 of the shell); everything else exits 1.
fn exit_code(err: &(dyn std::error::Error + 'static)) -> i32 {
    match err.downcast_ref::<ContentError>() {
        Some(ContentError::NotFound(_)) => 2,
        _ => 1,
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if matches!(cli.command, Command::GenConfig) {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let site = config::load_config(Path::new("."))?;
    let root = cli
        .root
        .unwrap_or_else(|| PathBuf::from(&site.content_root));
    let resolver =
        Resolver::new(FsStore::new(root)).with_lesson_extension(site.lesson_extension.as_str());

    match cli.command {
        Command::Languages => print_json(&resolver.languages()?)?,
        Command::Courses { language } => print_json(&resolver.courses(&language)?)?,
        Command::Chapters { language, course } => {
            print_json(&resolver.chapters(&language, &course)?)?
        }
        Command::Lessons {
            language,
            course,
            chapter,
        } => print_json(&resolver.lessons(&language, &course, &chapter)?)?,
        Command::Lesson {
            language,
            course,
            chapter,
            lesson,
            render: render_html,
            no_nav,
        } => {
            let coordinate = Coordinate::new(language, course, chapter, lesson);
            let content = resolver.lesson(&coordinate)?;
            let mut document = serde_json::to_value(&content)?;
            if render_html {
                document["bodyHtml"] = json!(render::body_html(&content.body));
            }
            if !no_nav {
                // Best-effort: a navigation failure must not block the lesson
                let navigation = resolver.navigation(&coordinate).unwrap_or_default();
                document["navigation"] = serde_json::to_value(&navigation)?;
            }
            print_json(&document)?;
        }
        Command::Nav {
            language,
            course,
            chapter,
            lesson,
        } => {
            let coordinate = Coordinate::new(language, course, chapter, lesson);
            print_json(&resolver.navigation(&coordinate)?)?;
        }
        Command::Index { language } => print_json(&resolver.index(&language)?)?,
        Command::Check => {
            let report = check::check(resolver.store(), &site.lesson_extension)?;
            output::print_check_report(&report);
            if !report.is_clean() {
                std::process::exit(1);
            }
        }
        Command::GenConfig => {} // handled before config loading
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
