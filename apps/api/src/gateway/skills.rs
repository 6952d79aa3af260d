//! Skill translation: maps a military profile onto civilian roles, skills and pay.

use tracing::{info, warn};

use crate::gateway::prompts::{fill_template, structured_system, TRANSLATION_PROMPT_TEMPLATE};
use crate::gateway::{CareerGateway, GatewayError};
use crate::llm_client::schema::{Property, Schema};
use crate::models::{MilitaryProfile, SkillTranslation};

/// Response schema for skill translation. All six fields are required.
pub fn skill_translation_schema() -> Schema {
    Schema::object(vec![
        Property::required("civilianRoles", Schema::non_empty(Schema::string())),
        Property::required(
            "transferableSkills",
            Schema::non_empty(Schema::object(vec![
                Property::required("skill", Schema::string()),
                Property::required("civilianContext", Schema::string()),
            ])),
        ),
        Property::required(
            "salaryBands",
            Schema::object(vec![
                Property::required("low", Schema::number()),
                Property::required("median", Schema::number()),
                Property::required("high", Schema::number()),
                Property::required("currency", Schema::string()),
            ]),
        ),
        Property::required("industryMatch", Schema::bounded(0.0, 100.0))
            .describe("Percentage 0-100"),
        Property::required("recommendedCerts", Schema::non_empty(Schema::string())),
        Property::required("logicExplanation", Schema::string()),
    ])
}

/// Embeds every profile field in the translation prompt.
pub fn build_translation_prompt(profile: &MilitaryProfile) -> String {
    let years = profile.years_of_service.to_string();
    let certifications = profile.certifications.join(", ");
    let platforms = profile.platforms.join(", ");

    fill_template(
        TRANSLATION_PROMPT_TEMPLATE,
        &[
            ("branch", profile.branch.as_str()),
            ("mos_code", profile.mos_code.as_str()),
            ("mos_title", profile.mos_title.as_str()),
            ("years", years.as_str()),
            ("leadership", profile.leadership_scope.as_str()),
            ("certifications", certifications.as_str()),
            ("platforms", platforms.as_str()),
        ],
    )
}

impl CareerGateway {
    /// Translates a military profile into civilian career data.
    ///
    /// Fails with `ServiceUnavailable` if the call cannot be completed and with
    /// `MalformedResponse` if the result is not a complete `SkillTranslation`.
    pub async fn translate_skills(
        &self,
        profile: &MilitaryProfile,
    ) -> Result<SkillTranslation, GatewayError> {
        info!(
            "Translating skills for {} {} ({})",
            profile.branch, profile.mos_code, profile.mos_title
        );

        let prompt = build_translation_prompt(profile);
        let translation: SkillTranslation = self
            .call_structured(&structured_system(), &prompt, &skill_translation_schema())
            .await?;

        // Not enforced: the band is returned exactly as produced.
        if !translation.salary_bands.is_ordered() {
            warn!(
                "Salary band out of order: low={} median={} high={}",
                translation.salary_bands.low,
                translation.salary_bands.median,
                translation.salary_bands.high
            );
        }

        info!(
            "Skill translation produced {} roles, industry match {}%",
            translation.civilian_roles.len(),
            translation.industry_match
        );
        Ok(translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::testing::{gateway, StubBackend, StubReply};
    use crate::llm_client::FLASH_MODEL;
    use crate::models::profile::Branch;
    use crate::models::translation::{SalaryBand, TransferableSkill};

    const SCENARIO_JSON: &str = r#"{"civilianRoles":["Operations Manager"],"transferableSkills":[{"skill":"Logistics","civilianContext":"Supply chain coordination"}],"salaryBands":{"low":70000,"median":95000,"high":120000,"currency":"USD"},"industryMatch":82,"recommendedCerts":["PMP"],"logicExplanation":"..."}"#;

    fn profile() -> MilitaryProfile {
        MilitaryProfile {
            branch: Branch::MarineCorps,
            mos_code: "0411".to_string(),
            mos_title: "Maintenance Management Specialist".to_string(),
            years_of_service: 6,
            leadership_scope: "Supervised 14 Marines and a $3M parts inventory".to_string(),
            certifications: vec!["Lean Six Sigma Yellow Belt".to_string(), "HAZMAT".to_string()],
            platforms: vec!["GCSS-MC".to_string(), "MTVR".to_string()],
        }
    }

    #[tokio::test]
    async fn test_scenario_response_is_translated() {
        let backend = StubBackend::text(SCENARIO_JSON);
        let translation = gateway(&backend).translate_skills(&profile()).await.unwrap();

        assert_eq!(translation.industry_match, 82.0);
        assert_eq!(translation.salary_bands.median, 95000.0);
    }

    #[tokio::test]
    async fn test_well_formed_response_reconstructs_every_field() {
        let backend = StubBackend::text(SCENARIO_JSON);
        let translation = gateway(&backend).translate_skills(&profile()).await.unwrap();

        let expected = SkillTranslation {
            civilian_roles: vec!["Operations Manager".to_string()],
            transferable_skills: vec![TransferableSkill {
                skill: "Logistics".to_string(),
                civilian_context: "Supply chain coordination".to_string(),
            }],
            salary_bands: SalaryBand {
                low: 70000.0,
                median: 95000.0,
                high: 120000.0,
                currency: "USD".to_string(),
            },
            industry_match: 82.0,
            recommended_certs: vec!["PMP".to_string()],
            logic_explanation: "...".to_string(),
        };
        assert_eq!(translation, expected);
    }

    #[tokio::test]
    async fn test_prompt_embeds_every_profile_field() {
        let backend = StubBackend::text(SCENARIO_JSON);
        gateway(&backend).translate_skills(&profile()).await.unwrap();

        let calls = backend.calls();
        assert_eq!(calls.len(), 1, "exactly one outbound call");
        let prompt = &calls[0].prompt;
        assert!(prompt.contains("Branch: Marine Corps"));
        assert!(prompt.contains("MOS/Rate: 0411 - Maintenance Management Specialist"));
        assert!(prompt.contains("YOS: 6"));
        assert!(prompt.contains("Supervised 14 Marines"));
        assert!(prompt.contains("Certs: Lean Six Sigma Yellow Belt, HAZMAT"));
        assert!(prompt.contains("Platforms: GCSS-MC, MTVR"));
    }

    #[tokio::test]
    async fn test_request_declares_strict_schema() {
        let backend = StubBackend::text(SCENARIO_JSON);
        gateway(&backend).translate_skills(&profile()).await.unwrap();

        let calls = backend.calls();
        let call = &calls[0];
        assert_eq!(call.model, FLASH_MODEL);
        let schema = call.schema.as_ref().expect("structured call carries a schema");
        assert_eq!(
            schema["required"],
            serde_json::json!([
                "civilianRoles",
                "transferableSkills",
                "salaryBands",
                "industryMatch",
                "recommendedCerts",
                "logicExplanation"
            ])
        );
        assert_eq!(
            schema["properties"]["salaryBands"]["required"],
            serde_json::json!(["low", "median", "high", "currency"])
        );
        assert_eq!(
            schema["properties"]["transferableSkills"]["items"]["required"],
            serde_json::json!(["skill", "civilianContext"])
        );
    }

    #[tokio::test]
    async fn test_not_json_is_malformed_and_profile_unchanged() {
        let backend = StubBackend::text("not json");
        let input = profile();
        let before = input.clone();

        let err = gateway(&backend).translate_skills(&input).await.unwrap_err();

        assert!(matches!(err, GatewayError::MalformedResponse(_)));
        assert_eq!(input, before);
    }

    #[tokio::test]
    async fn test_missing_required_field_is_malformed() {
        let backend = StubBackend::text(
            r#"{"civilianRoles":["Analyst"],"transferableSkills":[{"skill":"a","civilianContext":"b"}],
                "industryMatch":50,"recommendedCerts":["CAPM"],"logicExplanation":"x"}"#,
        );
        let err = gateway(&backend).translate_skills(&profile()).await.unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(ref m) if m.contains("salaryBands")));
    }

    #[tokio::test]
    async fn test_industry_match_out_of_range_is_malformed() {
        let json = SCENARIO_JSON.replace("\"industryMatch\":82", "\"industryMatch\":140");
        let backend = StubBackend::text(&json);
        let err = gateway(&backend).translate_skills(&profile()).await.unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(ref m) if m.contains("industryMatch")));
    }

    #[tokio::test]
    async fn test_empty_role_list_is_malformed() {
        let json = SCENARIO_JSON.replace(r#"["Operations Manager"]"#, "[]");
        let backend = StubBackend::text(&json);
        let err = gateway(&backend).translate_skills(&profile()).await.unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_unordered_salary_band_is_returned_unchanged() {
        let json = SCENARIO_JSON.replace("\"median\":95000", "\"median\":150000");
        let backend = StubBackend::text(&json);
        let translation = gateway(&backend).translate_skills(&profile()).await.unwrap();
        assert_eq!(translation.salary_bands.median, 150000.0);
        assert!(!translation.salary_bands.is_ordered());
    }

    #[tokio::test]
    async fn test_fenced_response_is_accepted() {
        let backend = StubBackend::text(&format!("```json\n{SCENARIO_JSON}\n```"));
        let translation = gateway(&backend).translate_skills(&profile()).await.unwrap();
        assert_eq!(translation.recommended_certs, vec!["PMP".to_string()]);
    }

    #[tokio::test]
    async fn test_no_text_is_malformed() {
        let backend = StubBackend::new(vec![StubReply::Empty]);
        let err = gateway(&backend).translate_skills(&profile()).await.unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_outage_is_service_unavailable_without_retry() {
        let backend = StubBackend::new(vec![StubReply::Unavailable]);
        let err = gateway(&backend).translate_skills(&profile()).await.unwrap_err();
        assert!(matches!(err, GatewayError::ServiceUnavailable(_)));
        assert_eq!(backend.calls().len(), 1);
    }
}
