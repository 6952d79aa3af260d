//! Resume optimization: free-text rewrite of resume content for a target industry.
//!
//! No schema is requested, so the only detectable degenerate case is empty
//! output. That is returned as `""`, not as an error; the caller decides.

use tracing::{info, warn};

use crate::gateway::prompts::{fill_template, no_fabrication, resume_system, RESUME_PROMPT_TEMPLATE};
use crate::gateway::{CareerGateway, GatewayError};
use crate::llm_client::PRO_MODEL;

/// Thinking budget for the rewrite, in tokens.
pub const RESUME_THINKING_BUDGET: u32 = 4000;

pub fn build_resume_prompt(content: &str, target_industry: &str) -> String {
    fill_template(
        RESUME_PROMPT_TEMPLATE,
        &[
            ("industry", target_industry),
            ("no_fabrication", no_fabrication()),
            ("content", content),
        ],
    )
}

impl CareerGateway {
    /// Rewrites `content` for `target_industry`. The text comes back verbatim.
    ///
    /// An empty `content` is still sent; rejecting it is the caller's job.
    pub async fn optimize_resume(
        &self,
        content: &str,
        target_industry: &str,
    ) -> Result<String, GatewayError> {
        info!(
            "Optimizing {} chars of resume content for {}",
            content.chars().count(),
            target_industry
        );

        let prompt = build_resume_prompt(content, target_industry);
        let optimized = self
            .call_free_text(
                PRO_MODEL,
                &resume_system(),
                &prompt,
                Some(RESUME_THINKING_BUDGET),
            )
            .await?;

        if optimized.trim().is_empty() {
            warn!("Resume optimization returned no usable text");
        } else {
            info!("Resume optimization returned {} chars", optimized.chars().count());
        }
        Ok(optimized)
    }
}
