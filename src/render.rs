//! Pass-through markdown rendering of lesson bodies.
//!
//! The resolver hands bodies through untouched; rendering belongs to the
//! consumer. For hosts that want HTML anyway (static exports, the CLI's
//! `--render` flag), this is the one conversion point. Component tags
//! embedded in lesson markup (`<VocabCard ... />` and friends) pass through
//! as inline HTML for the downstream widget layer to hydrate — markdown
//! conversion must not eat them.

use pulldown_cmark::{Parser, html as md_html};

/// Render a lesson body to HTML.
pub fn body_html(body: &str) -> String {
    let parser = Parser::new(body);
    let mut html = String::new();
    md_html::push_html(&mut html, parser);
    html
}
