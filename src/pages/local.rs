use crate::core::splice;

/// Produce a static page body from a server-side template.
///
/// Simpler than the home pipeline: no nav or form blocks to splice, just an
/// optional footer fragment injected over its render tag before every
/// remaining directive is stripped. Footer versions are not re-stamped
/// here; only the home footer carries the build version.
pub fn generate(template: &str, footer: Option<&str>, footer_partial: &str) -> String {
    let mut content = template.to_string();
    if let Some(footer) = footer {
        let render_tag = format!("<%= render '{footer_partial}' %>");
        content = content.replace(&render_tag, footer);
    }
    splice::strip_directives(&content)
}
