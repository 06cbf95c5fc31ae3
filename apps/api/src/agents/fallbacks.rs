//! Static fallback payloads. Returned when live extraction is impossible so the
//! dashboard always has plausible demo data to render.

use crate::gateway::transport::GroundingSource;
use crate::models::cv::{CvAnalysis, SkillGapAnalysis, SubScores};
use crate::models::dossier::{CompanyDossier, InterviewQuestions};
use crate::models::opportunity::OpportunityAnalysis;
use crate::models::outreach::{EmailSignatures, OutreachSequence, Signature};
use crate::models::strategy::{MorningBriefing, StrategyBrief};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn cv_analysis() -> CvAnalysis {
    CvAnalysis {
        score: 85,
        summary: "A highly strategic profile with strong evidence of digital transformation \
                  leadership. The candidate effectively bridges technical execution with \
                  board-level strategy. Key strengths lie in cost optimization and AI integration."
            .to_string(),
        strengths: strings(&[
            "Proven track record of scaling engineering teams (10 to 200+).",
            "Quantifiable success in cost reduction (40% via serverless).",
            "Deep expertise in FinTech compliance and cloud architecture.",
        ]),
        weaknesses: strings(&[
            "Could emphasize more on P&L responsibility magnitude.",
            "Lack of explicit mention of M&A integration experience.",
        ]),
        strategic_positioning: "Transformational Technology Leader capable of scaling Series B/C \
                                startups to enterprise stability."
            .to_string(),
        quantified_achievements: strings(&[
            "Reduced infrastructure costs by 40%.",
            "Increased developer productivity by 25%.",
            "Managed $10M annual budget.",
        ]),
        sub_scores: SubScores {
            leadership: 88,
            leadership_rationale: "Demonstrated ability to lead large, distributed teams (150+) \
                                   across multiple continents."
                .to_string(),
            impact: 82,
            impact_rationale: "Strong ROI focus with 40% cost reduction, though revenue \
                               generation impact could be highlighted more."
                .to_string(),
            communication: 85,
            communication_rationale: "Clear, metric-driven communication style suitable for \
                                      C-Suite reporting."
                .to_string(),
        },
    }
}

pub fn skill_gap() -> SkillGapAnalysis {
    SkillGapAnalysis {
        match_score: 72,
        missing_critical_skills: strings(&[
            "Experience with Blockchain/Web3 technologies",
            "German language proficiency (C1 required)",
        ]),
        recommendations: strings(&[
            "Highlight any adjacent experience with distributed ledger technology.",
            "Explicitly state language proficiency levels in the header.",
            "Emphasize experience with DACH regulatory frameworks.",
        ]),
    }
}

pub fn opportunity_analysis() -> OpportunityAnalysis {
    OpportunityAnalysis {
        fit: "Strong technical fit, but cultural fit needs verification regarding DACH region \
              norms."
            .to_string(),
        gaps: strings(&["German language fluency", "Blockchain specific stack experience"]),
        strategy: "Leverage experience in high-frequency trading systems as a bridge to \
                   crypto-banking requirements."
            .to_string(),
        match_score: 78,
        cultural_fit_score: 65,
        growth_potential: "High".to_string(),
        urgency: "High".to_string(),
    }
}

pub fn outreach_sequence() -> OutreachSequence {
    OutreachSequence {
        linkedin_message: "Hi Michael, noticed your focus on FinTech leadership in Zurich. I'm a \
                           CTO specializing in AI-driven cost reduction (40% savings at last \
                           role). Open to connecting?"
            .to_string(),
        initial_email_subject: "CTO Candidate: Driving 40% Infrastructure Savings".to_string(),
        initial_email_body: "Dear Michael,\n\nI noticed Stanton Chase is active in the FinTech \
                             space in Zurich. I am currently exploring new opportunities..."
            .to_string(),
        follow_up_7d_body: "Hi Michael, just floating this to the top of your inbox...".to_string(),
        follow_up_14d_body: "Hi Michael, assuming you're busy, but wanted to check one last \
                             time..."
            .to_string(),
    }
}

pub fn campaign_strategy() -> StrategyBrief {
    StrategyBrief {
        focus_of_the_week: "Aggressive expansion into the Zurich FinTech ecosystem.".to_string(),
        top_priorities: strings(&[
            "Apply to the VP Engineering role at FinTech Zurich",
            "Connect with 5 Partners at Stanton Chase",
            "Tailor CV for Blockchain-adjacent roles",
        ]),
        channel_strategy: "60% Headhunters, 40% Direct Applications".to_string(),
        success_probability: "Medium-High (68%)".to_string(),
    }
}

pub fn email_signatures() -> EmailSignatures {
    EmailSignatures {
        signatures: vec![
            Signature {
                style_name: "Minimalist".to_string(),
                html_content: "<div style='font-family: sans-serif; color: #333;'><p><strong>John \
                               Doe</strong><br>Chief Technology Officer</p><p><a href='#' \
                               style='color: #666;'>linkedin.com/in/johndoe</a></p></div>"
                    .to_string(),
            },
            Signature {
                style_name: "Corporate".to_string(),
                html_content: "<div style='font-family: serif; color: #003366; border-left: 4px \
                               solid #003366; padding-left: 12px;'><p><strong>John Doe</strong> | \
                               CTO<br>FinTech Global</p></div>"
                    .to_string(),
            },
        ],
    }
}

pub fn company_dossier() -> CompanyDossier {
    CompanyDossier {
        company_name: "Acme Corp (Simulated)".to_string(),
        market_cap: "$4.2B".to_string(),
        headquarters: "Zurich, Switzerland".to_string(),
        executive_summary: "Acme Corp is a leading provider of enterprise SaaS solutions in the \
                            DACH region. Recently acquired TechStart to boost AI capabilities."
            .to_string(),
        key_challenges: strings(&[
            "Integrating legacy systems from recent acquisitions.",
            "Stiff competition from US-based hyperscalers.",
        ]),
        strategic_opportunities: strings(&[
            "Expansion into Eastern European markets.",
            "Monetization of new AI features.",
        ]),
        culture_analysis: "Engineering-driven culture with a conservative approach to risk. High \
                           value placed on academic credentials."
            .to_string(),
        interview_questions: InterviewQuestions {
            expected_from_ceo: strings(&[
                "How do you handle technical debt in a high-growth phase?",
                "Describe your experience with post-merger integration.",
            ]),
            to_ask_ceo: strings(&[
                "What is the board's appetite for R&D investment this year?",
                "How do you envision the product portfolio evolving in 3 years?",
            ]),
        },
        sources: vec![
            GroundingSource {
                title: "Acme Corp Q3 Financials".to_string(),
                uri: "https://example.com/financials".to_string(),
            },
            GroundingSource {
                title: "TechCrunch: Acme acquires TechStart".to_string(),
                uri: "https://example.com/news".to_string(),
            },
        ],
    }
}

/// The only parameterised fallback: the greeting names the executive.
pub fn morning_briefing(profile_name: &str, active_opportunities: u32) -> MorningBriefing {
    MorningBriefing {
        briefing: format!(
            "Good morning, {profile_name}. You have {active_opportunities} active opportunities \
             requiring attention. Market indicators in DACH suggest a surge in leadership hiring. \
             Let's execute the strategy."
        ),
    }
}
