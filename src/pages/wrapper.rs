use std::collections::BTreeMap;

/// Wrap an extracted page body in the full document shell: head metadata,
/// the Tailwind CDN, Open Graph tags, and the page-behavior script that the
/// server normally ships through its asset pipeline.
pub fn wrap(content: &str, title: &str, description: &str, site_url: &str) -> String {
    let mut vars = BTreeMap::new();
    vars.insert("title".to_string(), title.to_string());
    vars.insert("description".to_string(), description.to_string());
    vars.insert("site_url".to_string(), site_url.to_string());
    vars.insert("content".to_string(), content.to_string());
    render(DOCUMENT_SHELL, &vars)
}

/// Render `{{var}}` placeholders in the shell.
fn render(template: &str, vars: &BTreeMap<String, String>) -> String {
    let mut r = template.to_string();
    for (k, v) in vars {
        let placeholder = format!("{{{{{}}}}}", k);
        r = r.replace(&placeholder, v);
    }
    r
}

/// Document shell every generated page body is embedded into. The trailing
/// script block replaces the behavior the live pages get from their bundled
/// JavaScript: FAQ accordion, contact form submission, and the mobile menu.
const DOCUMENT_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{title}}</title>
    <meta name="description" content="{{description}}">

    <!-- Tailwind CSS -->
    <script src="https://cdn.tailwindcss.com"></script>

    <!-- Favicon -->
    <link rel="icon" type="image/x-icon" href="/favicon.ico">

    <!-- Open Graph Tags -->
    <meta property="og:title" content="{{title}}">
    <meta property="og:description" content="{{description}}">
    <meta property="og:image" content="/Facility-screenshot.png">
    <meta property="og:url" content="{{site_url}}">
    <meta property="og:type" content="website">

    <style>
        html {
            scroll-behavior: smooth;
        }

        .faq-question {
            transition: all 0.3s ease;
        }
        .faq-question:hover {
            background-color: #f3f4f6;
        }
        .rotate-180 {
            transform: rotate(180deg);
        }
        .faq-icon {
            transition: transform 0.3s ease;
        }
    </style>
</head>
<body>
{{content}}

<!-- Google tag (gtag.js) -->
<script async src="https://www.googletagmanager.com/gtag/js?id=G-C2J67LGNNQ"></script>
<script>
  window.dataLayer = window.dataLayer || [];
  function gtag(){dataLayer.push(arguments);}
  gtag('js', new Date());
  gtag('config', 'G-C2J67LGNNQ');
</script>

<!-- Page Scripts -->
<script>
document.addEventListener('DOMContentLoaded', function() {
    // FAQ accordion functionality
    const faqButtons = document.querySelectorAll('[data-answer-id]');

    faqButtons.forEach(button => {
        button.addEventListener('click', function() {
            const answerId = this.dataset.answerId;
            const answer = document.getElementById(answerId);
            const icon = this.querySelector('.faq-icon');

            if (answer.classList.contains('hidden')) {
                answer.classList.remove('hidden');
                answer.classList.add('block');
                icon.classList.add('rotate-180');
                this.setAttribute('aria-expanded', 'true');
            } else {
                answer.classList.add('hidden');
                answer.classList.remove('block');
                icon.classList.remove('rotate-180');
                this.setAttribute('aria-expanded', 'false');
            }
        });
    });

    // Expand All functionality
    const expandAll = document.querySelector('[data-action="expandAll"]');
    if (expandAll) {
        expandAll.addEventListener('click', function() {
            document.querySelectorAll('[data-answer-id]').forEach(button => {
                const answerId = button.dataset.answerId;
                const answer = document.getElementById(answerId);
                const icon = button.querySelector('.faq-icon');

                answer.classList.remove('hidden');
                answer.classList.add('block');
                icon.classList.add('rotate-180');
                button.setAttribute('aria-expanded', 'true');
            });
        });
    }

    // Collapse All functionality
    const collapseAll = document.querySelector('[data-action="collapseAll"]');
    if (collapseAll) {
        collapseAll.addEventListener('click', function() {
            document.querySelectorAll('[data-answer-id]').forEach(button => {
                const answerId = button.dataset.answerId;
                const answer = document.getElementById(answerId);
                const icon = button.querySelector('.faq-icon');

                answer.classList.add('hidden');
                answer.classList.remove('block');
                icon.classList.remove('rotate-180');
                button.setAttribute('aria-expanded', 'false');
            });
        });
    }

    // Contact form handler
    const form = document.querySelector('[data-contact-form]');
    if (form) {
        const submitButton = form.querySelector('button[type="submit"]');
        const originalButtonText = submitButton.textContent;

        form.addEventListener('submit', async function(e) {
            e.preventDefault();

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
    }

    // Mobile menu functionality
    const mobileMenuButton = document.getElementById('mobile-menu-button');
    const mobileMenu = document.getElementById('mobile-menu');
    const menuIcon = document.getElementById('menu-icon');

    if (mobileMenuButton && mobileMenu && menuIcon) {
        mobileMenuButton.addEventListener('click', function() {
            const isHidden = mobileMenu.classList.contains('hidden');

            if (isHidden) {
                mobileMenu.classList.remove('hidden');
                menuIcon.setAttribute('d', 'M6 18L18 6M6 6l12 12'); // X icon
            } else {
                mobileMenu.classList.add('hidden');
                menuIcon.setAttribute('d', 'M4 6h16M4 12h16M4 18h16'); // Hamburger icon
            }
        });
    }
});

function toggleOtherField(select) {
    const otherField = document.getElementById('other-topic-field');
    if (select.value === 'Other') {
        otherField.style.display = 'block';
    } else {
        otherField.style.display = 'none';
    }
}
</script>

</body>
</html>
"#;
