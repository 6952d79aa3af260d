use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionType {
    Behavioral,
    Technical,
    Probing,
}

impl QuestionType {
    pub const NAMES: [&'static str; 3] = ["Behavioral", "Technical", "Probing"];
}

/// A single practice question for the interview simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub id: String,
    pub question: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub hint: String,
}
