//! Roadmap generation: two- and five-year plans plus a skill gap analysis.

use tracing::info;

use crate::gateway::prompts::{fill_template, structured_system, ROADMAP_PROMPT_TEMPLATE};
use crate::gateway::{CareerGateway, GatewayError};
use crate::llm_client::schema::{Property, Schema};
use crate::models::{CareerRoadmap, GapLevel, MilitaryProfile};

fn step_schema() -> Schema {
    Schema::object(vec![
        Property::required("period", Schema::string()),
        Property::required("objective", Schema::string()),
        Property::required("actionItems", Schema::non_empty(Schema::string())),
        Property::required("milestone", Schema::string()),
        Property::optional("estimatedSalary", Schema::string()),
    ])
}

/// Response schema for roadmap generation.
pub fn roadmap_schema() -> Schema {
    Schema::object(vec![
        Property::required("twoYearPath", Schema::non_empty(step_schema())),
        Property::required("fiveYearPath", Schema::non_empty(step_schema())),
        Property::required(
            "skillGapAnalysis",
            Schema::non_empty(Schema::object(vec![
                Property::required("skill", Schema::string()),
                Property::required("gapLevel", Schema::one_of(&GapLevel::NAMES)),
                Property::required("recommendation", Schema::string()),
            ])),
        ),
        Property::required("confidence", Schema::bounded(0.0, 1.0)),
    ])
}

pub fn build_roadmap_prompt(
    profile: &MilitaryProfile,
    target_industry: &str,
    target_salary: &str,
) -> String {
    fill_template(
        ROADMAP_PROMPT_TEMPLATE,
        &[
            ("branch", profile.branch.as_str()),
            ("mos_code", profile.mos_code.as_str()),
            ("industry", target_industry),
            ("salary", target_salary),
        ],
    )
}

impl CareerGateway {
    /// Drafts a career roadmap toward `target_industry`.
    ///
    /// `target_salary_label` is a display string ("$130,000") and is not parsed.
    pub async fn generate_roadmap(
        &self,
        profile: &MilitaryProfile,
        target_industry: &str,
        target_salary_label: &str,
    ) -> Result<CareerRoadmap, GatewayError> {
        info!(
            "Generating roadmap for {} {} toward {} at {}",
            profile.branch, profile.mos_code, target_industry, target_salary_label
        );

        let prompt = build_roadmap_prompt(profile, target_industry, target_salary_label);
        let roadmap: CareerRoadmap = self
            .call_structured(&structured_system(), &prompt, &roadmap_schema())
            .await?;

        info!(
            "Roadmap produced {}+{} steps, {} gaps, confidence {:.2}",
            roadmap.two_year_path.len(),
            roadmap.five_year_path.len(),
            roadmap.skill_gap_analysis.len(),
            roadmap.confidence
        );
        Ok(roadmap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::testing::{gateway, StubBackend, StubReply};
    use crate::models::profile::Branch;

    const ROADMAP_JSON: &str = r#"{
        "twoYearPath": [
            {"period": "Months 0-6", "objective": "Earn Security+",
             "actionItems": ["Use GI Bill for exam voucher"], "milestone": "Certified",
             "estimatedSalary": "$65,000"},
            {"period": "Months 6-24", "objective": "SOC Analyst role",
             "actionItems": ["Apply via SkillBridge"], "milestone": "Hired"}
        ],
        "fiveYearPath": [
            {"period": "Years 3-5", "objective": "Security Engineer",
             "actionItems": ["CISSP", "Lead incident response"], "milestone": "Promotion",
             "estimatedSalary": "$130,000"}
        ],
        "skillGapAnalysis": [
            {"skill": "Cloud security", "gapLevel": "High", "recommendation": "AWS Security Specialty"},
            {"skill": "Scripting", "gapLevel": "Medium", "recommendation": "Python fundamentals"}
        ],
        "confidence": 0.78
    }"#;

    fn profile() -> MilitaryProfile {
        MilitaryProfile {
            branch: Branch::AirForce,
            mos_code: "1D7X1".to_string(),
            mos_title: "Cyber Defense Operations".to_string(),
            years_of_service: 10,
            leadership_scope: String::new(),
            certifications: vec![],
            platforms: vec![],
        }
    }

    #[tokio::test]
    async fn test_roadmap_is_parsed() {
        let backend = StubBackend::text(ROADMAP_JSON);
        let roadmap = gateway(&backend)
            .generate_roadmap(&profile(), "Cybersecurity", "$130,000")
            .await
            .unwrap();

        assert_eq!(roadmap.two_year_path.len(), 2);
        assert_eq!(roadmap.two_year_path[1].estimated_salary, None);
        assert_eq!(roadmap.skill_gap_analysis[0].gap_level, GapLevel::High);
        assert!((0.0..=1.0).contains(&roadmap.confidence));
    }

    #[tokio::test]
    async fn test_prompt_names_branch_code_industry_and_salary_label() {
        let backend = StubBackend::text(ROADMAP_JSON);
        gateway(&backend)
            .generate_roadmap(&profile(), "Cybersecurity", "about 130k")
            .await
            .unwrap();

        let calls = backend.calls();
        let prompt = &calls[0].prompt;
        assert!(prompt.contains("Air Force service member (1D7X1)"));
        assert!(prompt.contains("Cybersecurity industry"));
        assert!(prompt.contains("goal salary of about 130k"));
    }

    #[tokio::test]
    async fn test_schema_makes_estimated_salary_optional() {
        let backend = StubBackend::text(ROADMAP_JSON);
        gateway(&backend)
            .generate_roadmap(&profile(), "Cybersecurity", "$130,000")
            .await
            .unwrap();

        let calls = backend.calls();
        let schema = calls[0].schema.as_ref().unwrap();
        let step = &schema["properties"]["twoYearPath"]["items"];
        assert_eq!(
            step["required"],
            serde_json::json!(["period", "objective", "actionItems", "milestone"])
        );
        assert_eq!(
            schema["properties"]["skillGapAnalysis"]["items"]["properties"]["gapLevel"]["enum"],
            serde_json::json!(["Low", "Medium", "High"])
        );
    }

    #[tokio::test]
    async fn test_unknown_gap_level_is_malformed() {
        let json = ROADMAP_JSON.replace(r#""gapLevel": "High""#, r#""gapLevel": "Severe""#);
        let backend = StubBackend::text(&json);
        let err = gateway(&backend)
            .generate_roadmap(&profile(), "Cybersecurity", "$130,000")
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(ref m) if m.contains("gapLevel")));
    }

    #[tokio::test]
    async fn test_confidence_as_percentage_is_malformed() {
        let json = ROADMAP_JSON.replace("0.78", "78");
        let backend = StubBackend::text(&json);
        let err = gateway(&backend)
            .generate_roadmap(&profile(), "Cybersecurity", "$130,000")
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(ref m) if m.contains("confidence")));
    }

    #[tokio::test]
    async fn test_empty_five_year_path_is_malformed() {
        let backend = StubBackend::text(
            r#"{"twoYearPath":[{"period":"p","objective":"o","actionItems":["a"],"milestone":"m"}],
                "fiveYearPath":[],
                "skillGapAnalysis":[{"skill":"s","gapLevel":"Low","recommendation":"r"}],
                "confidence":0.5}"#,
        );
        let err = gateway(&backend)
            .generate_roadmap(&profile(), "Cybersecurity", "$130,000")
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_outage_is_service_unavailable() {
        let backend = StubBackend::new(vec![StubReply::Unavailable]);
        let err = gateway(&backend)
            .generate_roadmap(&profile(), "Cybersecurity", "$130,000")
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::ServiceUnavailable(_)));
    }
}
