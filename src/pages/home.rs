use crate::core::splice;
use crate::core::PipelineError;

/// Markers bounding the server-rendered navigation block.
const NAV_START: &str = "<!-- Navigation -->";
const NAV_END: &str = "</nav>";

/// Markers bounding the server-side contact form.
const FORM_START: &str = "<%= form_with";
const FORM_END: &str = "<% end %>";

/// Longest gap in bytes between `</nav>` and a following `<script>` that is
/// still treated as the nav's own mobile-menu script. The template keeps
/// that script directly under the nav; anything further away belongs to the
/// page body and must survive.
const NAV_SCRIPT_GAP: usize = 100;

/// Fragment files the home page is assembled from.
pub struct HomeSources {
    /// Server-side home template.
    pub template: String,
    /// Static navigation that replaces the server-rendered nav.
    pub nav: String,
    /// Footer fragment; version markers inside it are re-stamped.
    pub footer: String,
    /// Static contact form that replaces the server-side one.
    pub form: String,
}

/// Produce the static home page body.
///
/// Order matters: blocks are spliced first, the stamped footer is injected
/// over its render tag, remaining directives are stripped, and application
/// links are absolutized last so the replacement fragments get rewritten
/// too.
pub fn extract(
    src: &HomeSources,
    version: &str,
    base_url: &str,
    link_paths: &[String],
    footer_partial: &str,
) -> Result<String, PipelineError> {
    let mut content = splice_nav(&src.template, &src.nav)?;
    content = splice_form(&content, &src.form)?;

    let footer = splice::stamp_version(&src.footer, version);
    let render_tag = format!("<%= render '{footer_partial}' %>");
    content = content.replace(&render_tag, &footer);

    content = splice::strip_directives(&content);
    Ok(splice::rewrite_links(&content, base_url, link_paths))
}

/// Swap the server-rendered nav block for the static fragment. When a
/// `<script>` opens within `NAV_SCRIPT_GAP` bytes of `</nav>` it is the
/// nav's mobile-menu script and is swallowed along with the block.
fn splice_nav(source: &str, nav: &str) -> Result<String, PipelineError> {
    let Some(range) = splice::locate_block(source, NAV_START, NAV_END)? else {
        return Ok(source.to_string());
    };

    let mut end = range.end;
    if let Some(rel) = source[range.end..].find("<script>") {
        if rel < NAV_SCRIPT_GAP {
            let script_start = range.end + rel;
            match source[script_start..].find("</script>") {
                Some(srel) => end = script_start + srel + "</script>".len(),
                None => {
                    return Err(PipelineError::MarkerMismatch {
                        start: "<script>".to_string(),
                        end: "</script>".to_string(),
                    })
                }
            }
        }
    }

    Ok(splice::replace_block(source, range.start..end, nav))
}

/// Swap the server-side form for the static fragment. A template without
/// the form markers is already static and passes through unchanged.
fn splice_form(source: &str, form: &str) -> Result<String, PipelineError> {
    match splice::locate_block(source, FORM_START, FORM_END)? {
        Some(range) => Ok(splice::replace_block(source, range, form)),
        None => Ok(source.to_string()),
    }
}

/// Contact form used when the config names no replacement fragment. Posts
/// to the serverless endpoint and carries the `data-contact-form` hook the
/// shell script binds to.
pub const DEFAULT_CONTACT_FORM: &str = r#"
            <form action="/api/contact" method="POST" class="space-y-4" id="contact-form" data-contact-form>
              <div>
                <label for="topic" class="block text-sm font-medium text-gray-700 mb-2">I'm interested in:</label>
                <select name="topic" id="topic" class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500" required onchange="toggleOtherField(this)">
                  <option value="">Select an option</option>
                  <option value="Requesting a demo">Requesting a demo</option>
                  <option value="Pricing information">Pricing information</option>
                  <option value="Technical questions">Technical questions</option>
                  <option value="Partnership opportunities">Partnership opportunities</option>
                  <option value="Other">Other</option>
                </select>
              </div>

              <div id="other-topic-field" style="display: none;">
                <label for="other_topic" class="block text-sm font-medium text-gray-700 mb-2">Please specify:</label>
                <input type="text" name="other_topic" id="other_topic" placeholder="Tell us what you're interested in..." class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500">
              </div>

              <div class="grid md:grid-cols-2 gap-4">
                <div>
                  <label for="name" class="block text-sm font-medium text-gray-700 mb-2">Name</label>
                  <input type="text" name="name" id="name" class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500">
                </div>
                <div>
                  <label for="email" class="block text-sm font-medium text-gray-700 mb-2">Email *</label>
                  <input type="email" name="email" id="email" class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500" required>
                </div>
              </div>

              <div class="grid md:grid-cols-2 gap-4">
                <div>
                  <label for="facility_name" class="block text-sm font-medium text-gray-700 mb-2">Facility Name</label>
                  <input type="text" name="facility_name" id="facility_name" class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500">
                </div>
                <div>
                  <label for="resident_count" class="block text-sm font-medium text-gray-700 mb-2">Number of Residents</label>
                  <input type="number" name="resident_count" id="resident_count" placeholder="Approximate" class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500">
                </div>
              </div>

              <div>
                <label for="phone" class="block text-sm font-medium text-gray-700 mb-2">Phone *</label>
                <input type="tel" name="phone" id="phone" class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500" required>
              </div>

              <div>
                <label for="current_solution" class="block text-sm font-medium text-gray-700 mb-2">Current Wellness Check Solution</label>
                <input type="text" name="current_solution" id="current_solution" placeholder="Manual checks, flags, other system, etc." class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500">
              </div>

              <div>
                <label for="contact_preference" class="block text-sm font-medium text-gray-700 mb-2">Best Time/Way to Contact You</label>
                <textarea name="contact_preference" id="contact_preference" rows="3" placeholder="Morning/afternoon, phone/email preference, any special instructions" class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500"></textarea>
              </div>

              <!-- Honeypot field for bot protection -->
              <div style="display: none;">
                <input type="text" name="_gotcha" tabindex="-1" autocomplete="off">
              </div>

              <div class="pt-4">
                <button type="submit" class="w-full bg-indigo-600 text-white px-6 py-3 rounded-lg font-semibold hover:bg-indigo-700 transition">
                  Submit Contact Request
                </button>
              </div>
            </form>"#;
