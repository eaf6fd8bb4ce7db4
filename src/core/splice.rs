use std::ops::Range;
use std::sync::OnceLock;

use regex::{NoExpand, Regex};

use crate::core::error::PipelineError;

/// Locate the block spanning the first `start_token` through the end of the
/// first `end_token` at or after it. Tokens are literal substrings, not
/// patterns. Returns `None` when the start token is absent (the page carries
/// no such block), and an error when the start is present but the end never
/// follows, since splicing an unterminated block would corrupt the page.
pub fn locate_block(
    source: &str,
    start_token: &str,
    end_token: &str,
) -> Result<Option<Range<usize>>, PipelineError> {
    let Some(start) = source.find(start_token) else {
        return Ok(None);
    };
    match source[start..].find(end_token) {
        Some(rel) => Ok(Some(start..start + rel + end_token.len())),
        None => Err(PipelineError::MarkerMismatch {
            start: start_token.to_string(),
            end: end_token.to_string(),
        }),
    }
}

/// Replace the byte range with `replacement`. Pure concatenation: whatever
/// whitespace surrounds the range or the replacement is kept as-is.
pub fn replace_block(source: &str, range: Range<usize>, replacement: &str) -> String {
    format!(
        "{}{}{}",
        &source[..range.start],
        replacement,
        &source[range.end..]
    )
}

/// Re-stamp every `vMAJOR.MINOR` occurrence in `text` with `version`.
///
/// Global on purpose: a footer fragment can carry the version both in the
/// copyright line and in a build comment, and both must agree.
pub fn stamp_version(text: &str, version: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"v\d+\.\d+").unwrap());
    let stamp = format!("v{version}");
    re.replace_all(text, NoExpand(&stamp)).into_owned()
}

/// Strip `<% ... %>` and `<%= ... %>` template directives from `text`.
///
/// The character class keeps each match inside the nearest closing delimiter,
/// so two directives on one line are removed separately. Known limitation: a
/// directive whose body itself contains `%` or `>` is not matched and stays
/// in the output. Pages fed to this tool keep their directives flat, which
/// the narrow pattern handles; it is not a template parser.
pub fn strip_directives(text: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"<%=?[^%>]*%>").unwrap());
    re.replace_all(text, "").into_owned()
}

/// Rewrite `href="{path}"` to `href="{url}{path}"` for each listed path.
/// Matches the quoted attribute exactly, so `/faq` does not touch
/// `/faq-archive`.
pub fn rewrite_links(source: &str, url: &str, paths: &[String]) -> String {
    let mut out = source.to_string();
    for path in paths {
        let from = format!("href=\"{path}\"");
        let to = format!("href=\"{url}{path}\"");
        out = out.replace(&from, &to);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_and_replace_block() {
        let source = "<keep>START<drop>END<keep>";
        let range = locate_block(source, "START", "END").unwrap().unwrap();
        assert_eq!(replace_block(source, range, "X"), "<keep>X<keep>");
    }

    #[test]
    fn test_locate_block_missing_start_is_none() {
        assert!(locate_block("no markers here", "START", "END")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_locate_block_missing_end_is_an_error() {
        let err = locate_block("aSTARTb", "START", "END").unwrap_err();
        assert!(matches!(err, PipelineError::MarkerMismatch { .. }));
    }

    #[test]
    fn test_locate_block_ignores_end_token_before_start() {
        let source = "END early START middle END late";
        let range = locate_block(source, "START", "END").unwrap().unwrap();
        assert_eq!(&source[range], "START middle END");
    }

    #[test]
    fn test_locate_block_range_includes_both_tokens() {
        let source = "pre <nav>items</nav> post";
        let range = locate_block(source, "<nav>", "</nav>").unwrap().unwrap();
        assert_eq!(&source[range], "<nav>items</nav>");
    }

    #[test]
    fn test_replace_block_keeps_surrounding_bytes_exactly() {
        let source = "a\n  OLD  \nb";
        let range = locate_block(source, "OLD", "OLD").unwrap().unwrap();
        assert_eq!(replace_block(source, range, "NEW"), "a\n  NEW  \nb");
    }

    #[test]
    fn test_relocating_after_replace_is_a_no_op() {
        let source = "x<%= form_with model: @m %>body<% end %>y";
        let range = locate_block(source, "<%= form_with", "<% end %>")
            .unwrap()
            .unwrap();
        let spliced = replace_block(source, range, "<form></form>");
        assert_eq!(spliced, "x<form></form>y");
        // Markers are gone, so a second pass finds nothing to do.
        assert!(locate_block(&spliced, "<%= form_with", "<% end %>")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_stamp_version_updates_a_copyright_line() {
        assert_eq!(
            stamp_version("Copyright v1.05 Inc.", "1.06"),
            "Copyright v1.06 Inc."
        );
    }

    #[test]
    fn test_stamp_version_replaces_every_occurrence() {
        let text = "<p>v1.04</p><!-- build v1.04 -->";
        assert_eq!(
            stamp_version(text, "1.05"),
            "<p>v1.05</p><!-- build v1.05 -->"
        );
    }

    #[test]
    fn test_stamp_version_handles_wide_minor() {
        assert_eq!(stamp_version("v1.99 here", "1.100"), "v1.100 here");
    }

    #[test]
    fn test_stamp_version_without_match_returns_input() {
        assert_eq!(stamp_version("no version marker", "1.02"), "no version marker");
    }

    #[test]
    fn test_strip_directives_removes_output_and_control_tags() {
        let text = "a<%= render 'shared/footer' %>b<% end %>c";
        assert_eq!(strip_directives(text), "abc");
    }

    #[test]
    fn test_strip_directives_is_not_greedy_across_tags() {
        let text = "<% a %> keep <% b %>";
        assert_eq!(strip_directives(text), " keep ");
    }

    #[test]
    fn test_strip_directives_leaves_nested_delimiters_alone() {
        // The body contains '>', which the pattern cannot cross.
        let text = "<%= link_to(a > b) %>";
        assert_eq!(strip_directives(text), text);
    }

    #[test]
    fn test_rewrite_links_prefixes_each_listed_path() {
        let paths = vec!["/users/sign_in".to_string()];
        let html = r#"<a href="/users/sign_in">Sign in</a>"#;
        assert_eq!(
            rewrite_links(html, "https://dev.example.com", &paths),
            r#"<a href="https://dev.example.com/users/sign_in">Sign in</a>"#
        );
    }

    #[test]
    fn test_rewrite_links_requires_exact_attribute_match() {
        let paths = vec!["/faq".to_string()];
        let html = r#"<a href="/faq-archive">old</a>"#;
        assert_eq!(rewrite_links(html, "https://x", &paths), html);
    }
}
