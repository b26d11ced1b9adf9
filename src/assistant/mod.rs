//! Study-assistant collaborator seam.
//!
//! The portal only ever hands the generator a prompt string and displays the
//! returned text; it never parses structured output from it. A generator
//! failure degrades to a canned fallback instead of reaching the UI as an
//! error.

use anyhow::Result;

/// Opaque text-generation collaborator (AI study assistant).
pub trait InsightGenerator {
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// Shown when the generator is unavailable or errors out.
pub const FALLBACK_INSIGHT: &str =
    "The study assistant is unavailable right now. Review the module summary \
     and glossary, then try again in a few minutes.";

/// Builds the study-tip prompt for one module.
pub fn study_tip_prompt(module_id: u8, focus: &str) -> String {
    format!(
        "You are a tutor for a cybersecurity and privacy-law certification \
         course. Give a concise study tip for module {module_id}, focused on: \
         {focus}. Keep it under 120 words and end with one self-check question."
    )
}

/// Runs the generator, degrading to the fallback string on any failure.
pub fn generate_or_fallback(generator: &dyn InsightGenerator, prompt: &str) -> String {
    generator
        .generate(prompt)
        .unwrap_or_else(|_| FALLBACK_INSIGHT.to_string())
}
