use serde::{Deserialize, Serialize};

use crate::gateway::shape::Shape;

/// Three-stage recruiter sequence: connection note, first email, two follow-ups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutreachSequence {
    /// LinkedIn connection note, max 300 characters.
    pub linkedin_message: String,
    pub initial_email_subject: String,
    pub initial_email_body: String,
    /// Sent 7 days after the initial email.
    pub follow_up_7d_body: String,
    /// Sent 14 days after the initial email.
    pub follow_up_14d_body: String,
}

impl OutreachSequence {
    pub fn shape() -> Shape {
        Shape::new()
            .string("linkedin_message")
            .string("initial_email_subject")
            .string("initial_email_body")
            .string("follow_up_7d_body")
            .string("follow_up_14d_body")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    pub style_name: String,
    /// Inline-styled HTML, safe to paste into mail clients.
    pub html_content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailSignatures {
    pub signatures: Vec<Signature>,
}

impl EmailSignatures {
    pub fn shape() -> Shape {
        Shape::new().object_list(
            "signatures",
            Shape::new().string("style_name").string("html_content"),
        )
    }
}
