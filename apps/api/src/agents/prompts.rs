// Prompt templates for every agent operation.
// Placeholders are `{name}` tokens, filled by `render` before sending.
// JSON operations get their output contract from the response schema, so the
// templates describe the task, not the format. The dossier is the exception:
// search-grounded calls cannot carry a schema, so its template spells out the JSON.

/// CV Analyst. Replace `{cv_text}`.
pub const CV_ANALYSIS_PROMPT: &str = r#"You are an expert C-Level Executive Career Coach. Perform a deep semantic analysis of the following CV.

Your mission:
1. Quantify achievements where numbers are missing but implied.
2. Identify strategic gaps against typical Fortune 500 C-suite requirements.
3. Craft a "Strategic Positioning" statement for the DACH and SEE regions.
4. Score the candidate 0-100 on Leadership Capability, Strategic Impact and Communication Style.
   For each score give a one-sentence rationale.

CV TEXT:
{cv_text}"#;

/// CV Analyst, targeted mode. Replace `{cv_text}`, `{job_description}`.
pub const SKILL_GAP_PROMPT: &str = r#"You are an expert Technical Recruiter. Compare the candidate CV against the job description.

CANDIDATE CV:
{cv_text}

JOB DESCRIPTION:
{job_description}

Identify:
1. Match score (0-100) based on the critical requirements.
2. Missing critical skills: hard or soft skills the job explicitly requires that are absent or weak in the CV.
3. Tailoring recommendations: specific bullet points to add or emphasize."#;

/// Opportunity Miner. Replace `{candidate_summary}`, `{job_description}`.
pub const OPPORTUNITY_ANALYSIS_PROMPT: &str = r#"Act as a Strategic Headhunter. Evaluate this opportunity for a C-level candidate.

CANDIDATE: {candidate_summary}
JOB: {job_description}

Analyze:
1. Role match score (0-100).
2. Cultural fit score (0-100), prioritizing DACH (Germany, Austria, Switzerland) or SEE (South East Europe) alignment.
3. Growth potential (High/Medium/Low).
4. Urgency (High/Medium/Low) based on the posting's language.

Provide a strategy to secure an interview."#;

/// Comms Orchestrator. Replace `{recruiter_name}`, `{role}`, `{company}`, `{cv_highlights}`.
pub const OUTREACH_SEQUENCE_PROMPT: &str = r#"Create a 3-stage executive outreach sequence for a high-value target.

Target: {recruiter_name}, {role} at {company}.
My profile: {cv_highlights}

Requirements:
1. LinkedIn connection note (max 300 characters).
2. Initial email (concise, value-driven).
3. Follow-up email 7 days later (gentle nudge).
4. Follow-up email 14 days later (closing the loop).

Tone: peer-to-peer, confident, respectful of time."#;

/// Campaign Strategist. Replace `{metrics_json}`.
pub const CAMPAIGN_STRATEGY_PROMPT: &str = r#"You are the Campaign Strategist for an autonomous job search.
Based on these pipeline metrics: {metrics_json}, produce a plan for the coming week:
- focus_of_the_week: one impactful sentence
- top_priorities: exactly 3 specific actions
- channel_strategy: where to focus effort (LinkedIn vs headhunters vs direct applications)
- success_probability: estimated likelihood based on current velocity"#;

/// Comms Orchestrator, signatures. Replace `{name}`, `{role}`, `{company}`, `{phone}`,
/// `{email}`, `{website}`, `{disclaimer}`.
pub const EMAIL_SIGNATURE_PROMPT: &str = r#"Design 3 distinct professional email signatures (HTML) for:
Name: {name}
Title: {role}
Company: {company}
Phone: {phone}
Email: {email}
Website: {website}
Disclaimer: {disclaimer}

Styles:
1. Minimalist: clean, text-focused, system fonts.
2. Corporate: professional, blue accents, organized table layout.
3. Executive Brand: bold name, subtle background or border.

Use inline styles only so the HTML survives email clients."#;

/// Due Diligence. Replace `{company_name}`, `{industry}`.
pub const COMPANY_DOSSIER_PROMPT: &str = r#"Perform a deep C-level due diligence on the company "{company_name}" (industry: {industry}).

You MUST use the search tool to find the most recent real-world data: financials, news, operating status.
If the company is closed, inactive or bankrupt, say so explicitly in the executive summary.

Return a VALID JSON object and nothing else, matching this structure:
{
  "companyName": "string",
  "marketCap": "string",
  "headquarters": "string",
  "executiveSummary": "string",
  "keyChallenges": ["string"],
  "strategicOpportunities": ["string"],
  "cultureAnalysis": "string",
  "interviewQuestions": {
    "expected_from_ceo": ["string"],
    "to_ask_ceo": ["string"]
  }
}"#;

/// Morning briefing, plain text. Replace `{profile_name}`, `{active_opportunities}`.
pub const MORNING_BRIEFING_PROMPT: &str = r#"Write a short, punchy 3-sentence "Morning Briefing" for a C-level executive named {profile_name}.
Context:
- They have {active_opportunities} active job opportunities.
- It is 8:00 AM.
- Tone: professional, motivating, concise.
- Mention one current market development relevant to Tech or Finance in Europe.
Reply with the three sentences only."#;

/// Fills `{name}` placeholders in one pass over the template. Substituted values are
/// never rescanned, so user text containing `{token}` is sent verbatim. Braces that
/// do not name a known variable (e.g. the dossier's JSON skeleton) are kept.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substitution = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match substitution {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
