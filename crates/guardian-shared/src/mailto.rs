//! Outbound mail drafts.
//!
//! The site has no server; the contact and press forms open the visitor's
//! mail client with a pre-drafted message instead.

use urlencoding::encode;

/// General-contact inbox.
pub const SUPPORT_EMAIL: &str = "support@cyberguardian.com";
/// Press-desk inbox.
pub const PRESS_EMAIL: &str = "press@cyberguardian.com";

/// A general contact-form submission.
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// The `mailto:` URL drafting this message to the support inbox.
    pub fn mailto(&self) -> String {
        let subject = format!("[GENERAL CONTACT] Message from {}", self.name);
        let body = format!(
            "Dear Cyber Guardian Support Team,\n\n\
             I am writing regarding a general inquiry:\n\n\
             ---\n\
             Message:\n\
             {}\n\
             ---\n\n\
             Sender Details:\n\
             Full Name: {}\n\
             Return Email: {}\n",
            self.message, self.name, self.email
        );
        draft(SUPPORT_EMAIL, &subject, &body)
    }
}

/// A press/business inquiry submission.
#[derive(Debug, Clone)]
pub struct PressInquiry {
    /// Name or organization.
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
}

impl PressInquiry {
    /// The `mailto:` URL drafting this inquiry to the press desk.
    pub fn mailto(&self) -> String {
        let subject = format!("[PRESS INQUIRY] {}", self.subject);
        let body = format!(
            "Dear Cyber Guardian Press Team,\n\n\
             I am writing to you regarding the following inquiry:\n\n\
             ---\n\
             Inquiry Details:\n\
             {}\n\
             ---\n\n\
             Sender Details:\n\
             Name/Organization: {}\n\
             Return Email: {}\n",
            self.body, self.name, self.email
        );
        draft(PRESS_EMAIL, &subject, &body)
    }
}

fn draft(to: &str, subject: &str, body: &str) -> String {
    format!("mailto:{to}?subject={}&body={}", encode(subject), encode(body))
}
