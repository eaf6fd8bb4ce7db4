use std::path::PathBuf;

use crate::core::config::SiteConfig;
use crate::utils::file;

/// Hosted-form action carried by pages generated before the serverless
/// endpoint existed.
const HOSTED_FORM_ACTION: &str = r#"action="https://formspree.io/f/YOUR_FORM_ID""#;

/// Serverless endpoint plus the hook the submit handler binds to.
const WIRED_FORM_ACTION: &str = r#"action="/api/contact" data-contact-form"#;

/// Point a generated page's contact form at the serverless endpoint and add
/// the submit-handler script before `</body>`. Pages that already carry the
/// hook are left untouched, so re-running after a deploy is safe.
pub fn run(config: &SiteConfig, file_arg: Option<PathBuf>) -> anyhow::Result<()> {
    let path = file_arg.unwrap_or_else(|| config.home_output_path());
    let content = file::read_text(&path)?;

    match wire_inner(&content) {
        Some(updated) => {
            file::write_page(&path, &updated)?;
            println!("✅ Contact form in {} now posts to /api/contact", path.display());
        }
        None => {
            println!("ℹ️  Contact form in {} is already wired", path.display());
        }
    }
    Ok(())
}

/// `None` when the page already carries the wired form.
fn wire_inner(content: &str) -> Option<String> {
    if content.contains("data-contact-form") {
        return None;
    }
    let content = content.replace(HOSTED_FORM_ACTION, WIRED_FORM_ACTION);
    Some(content.replace("</body>", &format!("{FORM_HANDLER_SCRIPT}\n</body>")))
}

/// Submit handler injected at the end of the body: posts the form to the
/// endpoint and swaps in a thank-you panel on success.
const FORM_HANDLER_SCRIPT: &str = r#"
<!-- Contact Form Handler -->
<script>
document.addEventListener('DOMContentLoaded', function() {
    const form = document.querySelector('[data-contact-form]');
    const submitButton = form.querySelector('button[type="submit"]');
    const originalButtonText = submitButton.textContent;

    form.addEventListener('submit', async function(e) {
        e.preventDefault();

        // Disable submit button
        submitButton.disabled = true;
        submitButton.textContent = 'Sending...';

        try {
            const formData = new FormData(form);
            const response = await fetch('/api/contact', {
                method: 'POST',
                body: formData
            });

            const result = await response.json();

            if (response.ok && result.success) {
                // Success - show thank you message
                form.innerHTML = `
                    <div class="text-center py-8">
                        <div class="mb-4">
                            <svg class="w-16 h-16 text-green-500 mx-auto" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z"></path>
                            </svg>
                        </div>
                        <h3 class="text-2xl font-semibold text-gray-900 mb-2">Thank You!</h3>
                        <p class="text-gray-600">${result.message || "We'll be in touch soon."}</p>
                    </div>
                `;
            } else {
                // Error - show message
                alert(result.message || 'There was an error submitting the form. Please try again.');
                submitButton.disabled = false;
                submitButton.textContent = originalButtonText;
            }
        } catch (error) {
            console.error('Form submission error:', error);
            alert('There was an error submitting the form. Please try again later.');
            submitButton.disabled = false;
            submitButton.textContent = originalButtonText;
        }
    });
});
</script>"#;
