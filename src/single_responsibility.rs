//! Single Responsibility: one type, one reason to change.
//!
//! `EmailSender` only knows how to dispatch an email. Deciding what to send
//! belongs to whoever calls it, here `EmailSendingExample`.

use crate::config::EmailConfig;
use crate::console::Console;

// =============================================================================
// The single responsibility: dispatching emails
// =============================================================================

pub struct EmailSender<C: Console> {
    console: C,
}

impl<C: Console> EmailSender<C> {
    pub fn new(console: C) -> Self {
        EmailSender { console }
    }

    /// Sends an email to `recipient_address`. Nothing leaves the process; the
    /// three parts are reported one per line.
    pub fn send_email(&self, recipient_address: &str, email_subject: &str, email_content: &str) {
        tracing::debug!(recipient = recipient_address, "sending email");
        self.console.write_line(&format!("Email sent to: {recipient_address}"));
        self.console.write_line(&format!("Subject: {email_subject}"));
        self.console.write_line(&format!("Content: {email_content}"));
    }
}

// =============================================================================
// The caller: prepares the email and hands it off
// =============================================================================

pub struct EmailSendingExample<'a> {
    email: &'a EmailConfig,
}

impl<'a> EmailSendingExample<'a> {
    pub fn new(email: &'a EmailConfig) -> Self {
        EmailSendingExample { email }
    }

    pub fn run(&self, console: &dyn Console) {
        let sender = EmailSender::new(console);
        sender.send_email(&self.email.recipient, &self.email.subject, &self.email.content);
    }
}

pub const SUMMARY: &str = "EmailSender owns the single job of sending emails. \
EmailSendingExample uses it without taking part in how an email is sent, so \
each type has exactly one reason to change.";

pub fn run(console: &dyn Console, email: &EmailConfig) {
    EmailSendingExample::new(email).run(console);
}
