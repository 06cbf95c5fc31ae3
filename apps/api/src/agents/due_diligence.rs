//! Due Diligence — search-grounded company dossiers.
//!
//! The search tool cannot be combined with schema-constrained output, so this is the
//! one operation whose JSON comes back as free text and relies entirely on the
//! gateway's extraction ladder. Generation routinely takes tens of seconds; callers
//! bound it with the cancellation token rather than a timeout.

use tokio_util::sync::CancellationToken;

use crate::agents::fallbacks;
use crate::agents::prompts::{render, COMPANY_DOSSIER_PROMPT};
use crate::gateway::{Operation, StructuredRequest, StructuredResponse, StructuredResponseGateway};
use crate::models::dossier::CompanyDossier;

pub const DEFAULT_INDUSTRY: &str = "Technology";

pub async fn generate_company_dossier(
    gateway: &StructuredResponseGateway,
    company_name: &str,
    industry: &str,
    cancel: &CancellationToken,
) -> StructuredResponse<CompanyDossier> {
    let prompt = render(
        COMPANY_DOSSIER_PROMPT,
        &[("company_name", company_name), ("industry", industry)],
    );
    let request = StructuredRequest::new(
        Operation::CompanyDossier,
        prompt,
        CompanyDossier::shape(company_name),
    )
    .with_web_search();
    gateway
        .execute(request, fallbacks::company_dossier(), cancel)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::testing::{capture_warnings, StubTransport};
    use crate::gateway::transport::{GroundingSource, ResponseFormat};

    #[tokio::test]
    async fn test_fenced_dossier_with_sources() {
        let sources = vec![GroundingSource {
            title: "Globex annual report".to_string(),
            uri: "https://globex.example/ar".to_string(),
        }];
        let stub = StubTransport::grounded(
            "```json\n{\"marketCap\": \"$1.1B\", \"keyChallenges\": [\"Debt\"]}\n```",
            sources.clone(),
        );
        let gateway = StructuredResponseGateway::new(stub.clone());

        let result =
            generate_company_dossier(&gateway, "Globex", "Energy", &CancellationToken::new()).await;

        let StructuredResponse::Ok(dossier) = result else {
            panic!("expected a live dossier");
        };
        assert_eq!(dossier.company_name, "Globex");
        assert_eq!(dossier.market_cap, "$1.1B");
        assert_eq!(dossier.key_challenges, vec!["Debt".to_string()]);
        assert_eq!(dossier.headquarters, "Unknown");
        assert_eq!(dossier.sources, sources);

        let sent = stub.last_request().unwrap();
        assert!(sent.web_search);
        assert_eq!(sent.format, ResponseFormat::Unconstrained);
        assert!(sent.prompt.contains(r#""Globex" (industry: Energy)"#));
    }

    #[tokio::test]
    async fn test_cancelled_dossier_never_shows_placeholder_data() {
        let (_guard, warnings) = capture_warnings();
        let cancel = CancellationToken::new();
        let stub = StubTransport::text(r#"{"companyName": "Globex"}"#).cancelling(cancel.clone());
        let gateway = StructuredResponseGateway::new(stub);

        let result = generate_company_dossier(&gateway, "Globex", DEFAULT_INDUSTRY, &cancel).await;

        assert_eq!(result, StructuredResponse::Cancelled);
        assert_eq!(warnings.count(), 0);
    }

    #[tokio::test]
    async fn test_prose_only_answer_falls_back() {
        let gateway = StructuredResponseGateway::new(StubTransport::text(
            "I could not find reliable information about this company.",
        ));

        let result =
            generate_company_dossier(&gateway, "Nobody Inc", "Retail", &CancellationToken::new())
                .await;

        assert_eq!(result, StructuredResponse::Fallback(fallbacks::company_dossier()));
    }
}
