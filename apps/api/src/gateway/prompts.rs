// All prompt templates for the career gateway.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{
    JSON_ONLY_INSTRUCTION, NO_FABRICATION_INSTRUCTION, VETERAN_COACH_PERSONA,
};

/// Skill translation prompt.
/// Replace: {branch}, {mos_code}, {mos_title}, {years}, {leadership}, {certifications}, {platforms}
pub const TRANSLATION_PROMPT_TEMPLATE: &str = r#"Translate this military profile into civilian career data:
Branch: {branch}
MOS/Rate: {mos_code} - {mos_title}
YOS: {years}
Leadership: {leadership}
Certs: {certifications}
Platforms: {platforms}

Field guidance:
- civilianRoles: civilian job titles this service member is competitive for today
- transferableSkills: each military skill with the civilian context where it applies
- salaryBands: annual base salary for those roles (low, median, high) and the ISO currency code
- industryMatch: how directly the experience maps to civilian industry, as a percentage 0-100
- recommendedCerts: civilian certifications that would close the biggest gaps
- logicExplanation: a short explanation of how the mapping was reasoned"#;

/// Resume optimization prompt. Free-text output.
/// Replace: {industry}, {no_fabrication}, {content}
pub const RESUME_PROMPT_TEMPLATE: &str = r#"Optimize the following resume bullet points or content for the {industry} industry.
Focus on civilian-optimized language, quantify impact, and align with ATS (applicant tracking system) standards.
Replace military jargon and acronyms with their civilian equivalents.
{no_fabrication}

Content:
{content}"#;

/// Roadmap prompt. The target salary is a display string, passed through as typed.
/// Replace: {branch}, {mos_code}, {industry}, {salary}
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"Generate a 2-year and 5-year career roadmap for a {branch} service member ({mos_code})
aiming for the {industry} industry with a goal salary of {salary}.
Provide skill gap analysis based on current military experience.

Field guidance:
- twoYearPath / fiveYearPath: ordered steps, each with a period label, objective, action items, milestone and optionally an estimated salary
- skillGapAnalysis: each gap rated Low, Medium or High with a recommendation
- confidence: your confidence in this roadmap between 0.0 and 1.0"#;

/// Interview question prompt.
/// Replace: {count}, {role}, {industry}
pub const INTERVIEW_PROMPT_TEMPLATE: &str = r#"Generate {count} high-quality interview questions for a veteran applying for a {role} role in {industry}.
Include behavioral and industry-specific technical questions.

Field guidance:
- id: a short unique identifier
- type: Behavioral, Technical or Probing
- hint: one coaching tip on how a veteran should frame the answer for a civilian interviewer"#;

/// System instruction for schema-constrained calls.
pub fn structured_system() -> String {
    format!("{VETERAN_COACH_PERSONA} {JSON_ONLY_INSTRUCTION}")
}

/// System instruction for the free-text resume rewrite.
pub fn resume_system() -> String {
    format!(
        "{VETERAN_COACH_PERSONA} Return only the rewritten content, ready to paste into a resume."
    )
}

pub fn no_fabrication() -> &'static str {
    NO_FABRICATION_INSTRUCTION
}

/// Substitutes `{key}` placeholders in a single pass.
///
/// Values are inserted verbatim and never rescanned, so user text that happens
/// to contain `{...}` is left alone. Unknown placeholders are kept as written.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replacement = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });
        match replacement {
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
