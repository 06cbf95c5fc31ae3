//! Comms Orchestrator — recruiter outreach sequences and email signatures.

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::agents::fallbacks;
use crate::agents::prompts::{render, EMAIL_SIGNATURE_PROMPT, OUTREACH_SEQUENCE_PROMPT};
use crate::gateway::{Operation, StructuredRequest, StructuredResponse, StructuredResponseGateway};
use crate::models::outreach::{EmailSignatures, OutreachSequence};

/// Footer used when the caller supplies no disclaimer of their own.
pub const DEFAULT_DISCLAIMER: &str = "Confidentiality Notice: This e-mail message, including any \
                                      attachments, is for the sole use of the intended recipient(s).";

/// Outreach target.
#[derive(Debug, Clone, Deserialize)]
pub struct RecruiterTarget {
    pub recruiter_name: String,
    pub role: String,
    pub company: String,
}

/// Fields rendered into each signature design.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatureProfile {
    pub name: String,
    pub role: String,
    pub company: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub disclaimer: String,
}

pub async fn generate_outreach_sequence(
    gateway: &StructuredResponseGateway,
    target: &RecruiterTarget,
    cv_highlights: &str,
    cancel: &CancellationToken,
) -> StructuredResponse<OutreachSequence> {
    let prompt = render(
        OUTREACH_SEQUENCE_PROMPT,
        &[
            ("recruiter_name", target.recruiter_name.as_str()),
            ("role", target.role.as_str()),
            ("company", target.company.as_str()),
            ("cv_highlights", cv_highlights),
        ],
    );
    let request =
        StructuredRequest::new(Operation::OutreachSequence, prompt, OutreachSequence::shape());
    gateway
        .execute(request, fallbacks::outreach_sequence(), cancel)
        .await
}

pub async fn generate_email_signature(
    gateway: &StructuredResponseGateway,
    profile: &SignatureProfile,
    cancel: &CancellationToken,
) -> StructuredResponse<EmailSignatures> {
    let prompt = render(
        EMAIL_SIGNATURE_PROMPT,
        &[
            ("name", profile.name.as_str()),
            ("role", profile.role.as_str()),
            ("company", profile.company.as_str()),
            ("phone", profile.phone.as_str()),
            ("email", profile.email.as_str()),
            ("website", profile.website.as_str()),
            ("disclaimer", profile.disclaimer.as_str()),
        ],
    );
    let request =
        StructuredRequest::new(Operation::EmailSignature, prompt, EmailSignatures::shape());
    gateway
        .execute(request, fallbacks::email_signatures(), cancel)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::testing::StubTransport;
    use crate::gateway::FLASH_MODEL;

    fn target() -> RecruiterTarget {
        RecruiterTarget {
            recruiter_name: "Michael Weber".to_string(),
            role: "Partner".to_string(),
            company: "Stanton Chase".to_string(),
        }
    }

    #[tokio::test]
    async fn test_outreach_prompt_names_the_target() {
        let stub = StubTransport::text(r#"{"linkedin_message": "Hi Michael"}"#);
        let gateway = StructuredResponseGateway::new(stub.clone());

        let result = generate_outreach_sequence(
            &gateway,
            &target(),
            "CTO, FinTech, 40% cost savings",
            &CancellationToken::new(),
        )
        .await;

        let sequence = result.payload().unwrap();
        assert_eq!(sequence.linkedin_message, "Hi Michael");
        assert_eq!(sequence.follow_up_14d_body, "");

        let sent = stub.last_request().unwrap();
        assert_eq!(sent.model, FLASH_MODEL);
        assert!(sent.prompt.contains("Target: Michael Weber, Partner at Stanton Chase."));
        assert!(sent.prompt.contains("CTO, FinTech, 40% cost savings"));
    }

    #[tokio::test]
    async fn test_signatures_keep_only_object_entries() {
        let stub = StubTransport::text(
            r#"{"signatures": [{"style_name": "Minimalist", "html_content": "<div>Ada</div>"}, "oops", {"style_name": "Corporate"}]}"#,
        );
        let gateway = StructuredResponseGateway::new(stub.clone());
        let profile = SignatureProfile {
            name: "Ada Lovelace".to_string(),
            disclaimer: "Confidential".to_string(),
            ..Default::default()
        };

        let result = generate_email_signature(&gateway, &profile, &CancellationToken::new()).await;

        let signatures = &result.payload().unwrap().signatures;
        assert_eq!(signatures.len(), 2);
        assert_eq!(signatures[1].style_name, "Corporate");
        assert_eq!(signatures[1].html_content, "");
        let prompt = stub.last_request().unwrap().prompt;
        assert!(prompt.contains("Name: Ada Lovelace"));
        assert!(prompt.contains("Disclaimer: Confidential"));
    }
}
