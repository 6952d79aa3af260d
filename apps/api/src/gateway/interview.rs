//! Interview question generation for the simulator.

use tracing::{info, warn};

use crate::gateway::prompts::{fill_template, structured_system, INTERVIEW_PROMPT_TEMPLATE};
use crate::gateway::{CareerGateway, GatewayError};
use crate::llm_client::schema::{Property, Schema};
use crate::models::{InterviewQuestion, QuestionType};

/// Number of questions the service is asked for. Requested, not enforced.
pub const INTERVIEW_QUESTION_COUNT: usize = 5;

/// Response schema: a non-empty array of questions. No upper bound on length.
pub fn interview_questions_schema() -> Schema {
    Schema::non_empty(Schema::object(vec![
        Property::required("id", Schema::string()),
        Property::required("question", Schema::string()),
        Property::required("type", Schema::one_of(&QuestionType::NAMES)),
        Property::required("hint", Schema::string()),
    ]))
}

pub fn build_interview_prompt(industry: &str, role: &str) -> String {
    let count = INTERVIEW_QUESTION_COUNT.to_string();
    fill_template(
        INTERVIEW_PROMPT_TEMPLATE,
        &[
            ("count", count.as_str()),
            ("role", role),
            ("industry", industry),
        ],
    )
}

impl CareerGateway {
    /// Generates an ordered list of practice questions for `role` in `industry`.
    ///
    /// A short list is returned as-is; the gateway does not ask again.
    pub async fn get_interview_questions(
        &self,
        industry: &str,
        role: &str,
    ) -> Result<Vec<InterviewQuestion>, GatewayError> {
        info!("Generating interview questions for {} in {}", role, industry);

        let prompt = build_interview_prompt(industry, role);
        let questions: Vec<InterviewQuestion> = self
            .call_structured(&structured_system(), &prompt, &interview_questions_schema())
            .await?;

        if questions.len() != INTERVIEW_QUESTION_COUNT {
            warn!(
                "Requested {} interview questions, received {}",
                INTERVIEW_QUESTION_COUNT,
                questions.len()
            );
        }

        info!("Interview question set ready ({} questions)", questions.len());
        Ok(questions)
    }
}
