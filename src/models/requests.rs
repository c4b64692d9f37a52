//! Request DTOs for the matching service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for the analyze operation (POST /analyze)
///
/// # Fields
/// - `resume`: the full resume text
/// - `jobDescription`: the full job description text
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Resume content
    pub resume: String,
    /// Job description content
    pub job_description: String,
}

impl AnalyzeRequest {
    /// Validates the request data against the configured input limit.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self, max_input_chars: usize) -> Option<String> {
        if self.resume.trim().is_empty() || self.job_description.trim().is_empty() {
            return Some("Resume and job description are required".to_string());
        }
        if self.resume.chars().count() > max_input_chars
            || self.job_description.chars().count() > max_input_chars
        {
            return Some(format!(
                "Each field must be {max_input_chars} characters or less"
            ));
        }
        None
    }
}
