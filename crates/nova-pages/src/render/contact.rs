//! Contact page: the submission form and the script that posts it.

use maud::{Markup, PreEscaped, html};

/// Shown when the API call fails or answers with `success: false`.
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

/// Posts the form as JSON to `/api/contact` and shows the outcome.
const CONTACT_SCRIPT: &str = r#"
document.getElementById('contactForm').addEventListener('submit', async (e) => {
  e.preventDefault();
  const form = e.target;
  const box = document.getElementById('formMessage');
  const payload = {
    name: document.getElementById('name').value,
    email: document.getElementById('email').value,
    subject: document.getElementById('subject').value,
    message: document.getElementById('message').value
  };
  try {
    const res = await fetch('/api/contact', {
      method: 'POST',
      headers: {'Content-Type': 'application/json'},
      body: JSON.stringify(payload)
    });
    const result = await res.json();
    if (!result.success) throw new Error(result.message);
    box.className = 'form-message success';
    box.textContent = result.message;
    form.reset();
  } catch (err) {
    box.className = 'form-message error';
    box.textContent = box.dataset.failure;
  }
  box.style.display = 'block';
});
"#;

pub fn render() -> Markup {
    html! {
        (super::components::gradient_backdrop())
        div class="container" {
            h1 class="page-title" { "Get In Touch" }
            p class="page-subtitle" { "Have questions? We'd love to hear from you" }
            div class="contact-container" {
                form class="contact-form" id="contactForm" {
                    div class="form-group" {
                        label for="name" { "Full Name" }
                        input type="text" id="name" name="name" required;
                    }
                    div class="form-group" {
                        label for="email" { "Email Address" }
                        input type="email" id="email" name="email" required;
                    }
                    div class="form-group" {
                        label for="subject" { "Subject" }
                        input type="text" id="subject" name="subject" required;
                    }
                    div class="form-group" {
                        label for="message" { "Message" }
                        textarea id="message" name="message" required {}
                    }
                    button type="submit" class="btn btn-primary" { "Send Message" }
                    div class="form-message" id="formMessage" data-failure=(FAILURE_MESSAGE) {}
                }
            }
        }
        script { (PreEscaped(CONTACT_SCRIPT)) }
    }
}
