//! Interview simulator session: questions, answer history and the cursor.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::models::InterviewQuestion;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("an interview session needs at least one question")]
    NoQuestions,

    #[error("answer cannot be empty")]
    EmptyAnswer,

    #[error("every question in this session has already been answered")]
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnsweredQuestion {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone)]
pub struct InterviewSession {
    id: Uuid,
    industry: String,
    role: String,
    questions: Vec<InterviewQuestion>,
    history: Vec<AnsweredQuestion>,
    started_at: DateTime<Utc>,
}

/// What the interview screen renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub id: Uuid,
    pub industry: String,
    pub role: String,
    pub started_at: DateTime<Utc>,
    pub total_questions: usize,
    /// Index of the question being asked; equals `total_questions` once complete.
    pub cursor: usize,
    pub current_question: Option<InterviewQuestion>,
    pub history: Vec<AnsweredQuestion>,
    pub completed: bool,
}

impl InterviewSession {
    pub fn new(
        industry: impl Into<String>,
        role: impl Into<String>,
        questions: Vec<InterviewQuestion>,
    ) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            industry: industry.into(),
            role: role.into(),
            questions,
            history: Vec::new(),
            started_at: Utc::now(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn cursor(&self) -> usize {
        self.history.len()
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current(&self) -> Option<&InterviewQuestion> {
        self.questions.get(self.cursor())
    }

    pub fn is_completed(&self) -> bool {
        self.history.len() == self.questions.len()
    }

    pub fn history(&self) -> &[AnsweredQuestion] {
        &self.history
    }

    /// Records an answer to the current question and moves to the next one.
    pub fn submit_answer(&mut self, answer: &str) -> Result<(), SessionError> {
        if answer.trim().is_empty() {
            return Err(SessionError::EmptyAnswer);
        }
        let question = self
            .current()
            .ok_or(SessionError::Completed)?
            .question
            .clone();

        self.history.push(AnsweredQuestion {
            question,
            answer: answer.to_string(),
        });
        Ok(())
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            id: self.id,
            industry: self.industry.clone(),
            role: self.role.clone(),
            started_at: self.started_at,
            total_questions: self.total(),
            cursor: self.cursor(),
            current_question: self.current().cloned(),
            history: self.history().to_vec(),
            completed: self.is_completed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionType;

    fn questions(n: usize) -> Vec<InterviewQuestion> {
        (0..n)
            .map(|i| InterviewQuestion {
                id: format!("q{i}"),
                question: format!("Question {i}?"),
                question_type: QuestionType::Behavioral,
                hint: "Use STAR.".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_empty_question_list_is_rejected() {
        let err = InterviewSession::new("Technology", "PM", vec![]).unwrap_err();
        assert_eq!(err, SessionError::NoQuestions);
    }

    #[test]
    fn test_new_session_starts_at_first_question() {
        let session = InterviewSession::new("Technology", "PM", questions(3)).unwrap();
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.current().unwrap().id, "q0");
        assert!(session.history().is_empty());
        assert!(!session.is_completed());
    }

    #[test]
    fn test_answers_advance_cursor_in_order() {
        let mut session = InterviewSession::new("Technology", "PM", questions(3)).unwrap();
        session.submit_answer("First answer").unwrap();
        session.submit_answer("Second answer").unwrap();

        assert_eq!(session.cursor(), 2);
        assert_eq!(session.current().unwrap().id, "q2");
        assert_eq!(
            session.history(),
            &[
                AnsweredQuestion {
                    question: "Question 0?".to_string(),
                    answer: "First answer".to_string(),
                },
                AnsweredQuestion {
                    question: "Question 1?".to_string(),
                    answer: "Second answer".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_blank_answer_is_rejected_without_advancing() {
        let mut session = InterviewSession::new("Technology", "PM", questions(2)).unwrap();
        assert_eq!(session.submit_answer("   "), Err(SessionError::EmptyAnswer));
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn test_session_completes_after_last_answer() {
        let mut session = InterviewSession::new("Technology", "PM", questions(2)).unwrap();
        session.submit_answer("a").unwrap();
        session.submit_answer("b").unwrap();

        assert!(session.is_completed());
        assert!(session.current().is_none());
        assert_eq!(session.submit_answer("c"), Err(SessionError::Completed));
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_view_reflects_progress() {
        let mut session = InterviewSession::new("Energy", "Site Lead", questions(2)).unwrap();
        session.submit_answer("a").unwrap();

        let view = session.view();
        assert_eq!(view.id, session.id());
        assert_eq!(view.total_questions, 2);
        assert_eq!(view.cursor, 1);
        assert_eq!(view.current_question.unwrap().id, "q1");
        assert!(!view.completed);

        let value = serde_json::to_value(session.view()).unwrap();
        assert_eq!(value["totalQuestions"], 2);
        assert_eq!(value["currentQuestion"]["type"], "Behavioral");
        assert_eq!(value["history"][0]["answer"], "a");
    }
}
