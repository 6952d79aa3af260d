use serde::{Deserialize, Serialize};

/// A military skill restated in civilian terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferableSkill {
    pub skill: String,
    pub civilian_context: String,
}

/// Estimated annual salary range for the suggested civilian roles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryBand {
    pub low: f64,
    pub median: f64,
    pub high: f64,
    pub currency: String,
}

impl SalaryBand {
    /// `low <= median <= high`. Expected from the model but not guaranteed.
    pub fn is_ordered(&self) -> bool {
        self.low <= self.median && self.median <= self.high
    }
}

/// Civilian career data produced from a `MilitaryProfile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillTranslation {
    pub civilian_roles: Vec<String>,
    pub transferable_skills: Vec<TransferableSkill>,
    pub salary_bands: SalaryBand,
    /// Percentage, 0 – 100.
    pub industry_match: f64,
    pub recommended_certs: Vec<String>,
    pub logic_explanation: String,
}
