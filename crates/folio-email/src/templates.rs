// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTML bodies for the two notification emails.
//!
//! Every submitter-controlled value is HTML-escaped before interpolation.

use folio_core::ContactMessage;

/// A rendered email, ready to hand to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub subject: String,
    pub html: String,
}

/// Escape text for safe inclusion in HTML element content and attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Notification to the site owner describing a new submission.
pub fn owner_notification(contact: &ContactMessage, received_at: &str) -> Email {
    let name = escape_html(&contact.name);
    let email = escape_html(&contact.email);
    let subject = escape_html(&contact.subject);
    let message = escape_html(&contact.message);
    let reply_link = escape_html(&format!(
        "mailto:{}?subject={}",
        contact.email,
        urlencoding::encode(&format!("Re: {}", contact.subject))
    ));

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="UTF-8"></head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #1F2937;">
  <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
    <h1 style="background: #3B82F6; color: #fff; padding: 24px; border-radius: 10px 10px 0 0; margin: 0;">New Contact Form Submission</h1>
    <div style="background: #F8F9FA; padding: 24px; border-radius: 0 0 10px 10px;">
      <p><strong>From:</strong> {name}</p>
      <p><strong>Email:</strong> {email}</p>
      <p><strong>Subject:</strong> {subject}</p>
      <p><strong>Message:</strong></p>
      <div style="background: #fff; padding: 16px; border-radius: 8px; white-space: pre-wrap;">{message}</div>
      <p style="text-align: center; margin-top: 20px;">
        <a href="{reply_link}" style="background: #3B82F6; color: #fff; padding: 12px 24px; border-radius: 8px; text-decoration: none;">Reply to {name}</a>
      </p>
    </div>
    <p style="text-align: center; color: #9CA3AF; font-size: 12px;">Received {received_at} (id {id})</p>
  </div>
</body>
</html>"#,
        id = escape_html(&contact.id),
    );

    Email {
        subject: format!("Portfolio Contact: {}", contact.subject),
        html,
    }
}

/// Acknowledgement sent back to the person who submitted the form.
pub fn acknowledgement(contact: &ContactMessage, owner_name: Option<&str>) -> Email {
    let name = escape_html(&contact.name);
    let signature = match owner_name {
        Some(owner) => format!("Best regards,<br><strong>{}</strong>", escape_html(owner)),
        None => "Best regards".to_string(),
    };

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="UTF-8"></head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #1F2937;">
  <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
    <div style="background: #3B82F6; color: #fff; padding: 24px; border-radius: 10px 10px 0 0; text-align: center;">
      <h1 style="margin: 0;">Hi {name}!</h1>
      <p style="margin: 10px 0 0 0;">Thank you for reaching out</p>
    </div>
    <div style="background: #F8F9FA; padding: 24px; border-radius: 0 0 10px 10px;">
      <p>I've received your message and I'll get back to you within 24 hours!</p>
      <p style="margin-top: 20px;">{signature}</p>
    </div>
  </div>
</body>
</html>"#
    );

    Email {
        subject: format!("Thank you for contacting me, {}!", contact.name),
        html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::ContactStatus;

    fn contact(name: &str, subject: &str, message: &str) -> ContactMessage {
        ContactMessage {
            id: "c-1".to_string(),
            name: name.to_string(),
            email: "jo@example.com".to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
            status: ContactStatus::New,
            ip_address: None,
            user_agent: None,
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
            updated_at: "2026-01-01T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn escape_html_covers_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn owner_notification_includes_all_fields() {
        let c = contact("Jo Doe", "Hi", "This is a test message.");
        let mail = owner_notification(&c, "2026-01-01T00:00:00.000Z");

        assert_eq!(mail.subject, "Portfolio Contact: Hi");
        assert!(mail.html.contains("Jo Doe"));
        assert!(mail.html.contains("jo@example.com"));
        assert!(mail.html.contains("This is a test message."));
        assert!(mail.html.contains("mailto:jo@example.com?subject=Re%3A%20Hi"));
    }

    #[test]
    fn reply_link_encodes_subject_reserved_characters() {
        let c = contact("Jo Doe", "Rates & dates?", "This is a test message.");
        let mail = owner_notification(&c, "now");
        assert!(mail.html.contains("subject=Re%3A%20Rates%20%26%20dates%3F"));
    }

    #[test]
    fn owner_notification_escapes_markup() {
        let c = contact("<script>alert(1)</script>", "Hi", "<b>bold</b> claims & more");
        let mail = owner_notification(&c, "now");

        assert!(!mail.html.contains("<script>"));
        assert!(mail.html.contains("&lt;script&gt;"));
        assert!(mail.html.contains("&lt;b&gt;bold&lt;/b&gt; claims &amp; more"));
    }

    #[test]
    fn acknowledgement_greets_submitter() {
        let c = contact("Jo Doe", "Hi", "This is a test message.");
        let mail = acknowledgement(&c, Some("Sam"));

        assert_eq!(mail.subject, "Thank you for contacting me, Jo Doe!");
        assert!(mail.html.contains("Hi Jo Doe!"));
        assert!(mail.html.contains("<strong>Sam</strong>"));
    }

    #[test]
    fn acknowledgement_without_owner_name_has_plain_signature() {
        let c = contact("Jo Doe", "Hi", "This is a test message.");
        let mail = acknowledgement(&c, None);
        assert!(mail.html.contains("Best regards</p>"));
    }
}
