//! Analysis report model
//!
//! The fixed-shape record the model is instructed to return, parsed from
//! its raw reply text. Once parsed, the report is an immutable payload:
//! the cache stores it opaquely and the API serializes it back out with
//! the same field names the model produced.

use serde::{Deserialize, Serialize};

// == Analysis Report ==
/// Full multi-section report for one (resume, job description) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Overall match score, 0-100
    pub overall_match: u8,
    /// Skills or keywords from the JD absent from the resume
    pub missing_skills: Vec<String>,
    /// Must-have skills split by presence in the resume
    pub required_skills: RequiredSkills,
    /// Nice-to-have skills with the benefit of adding each
    pub preferred_skills: Vec<PreferredSkill>,
    /// ATS keyword guidance
    pub ats_keywords: AtsKeywords,
    /// Bullet points worth adding, with rationale
    pub points_to_add: Vec<PointToAdd>,
    /// Resume content worth dropping, with rationale
    pub points_to_remove: Vec<PointToRemove>,
    /// Strategic positioning observations
    pub key_insights: Vec<String>,
    /// Interview preparation questions
    pub interview_questions: Vec<InterviewQuestion>,
}

/// Required skills split into missing and present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredSkills {
    pub missing: Vec<String>,
    pub present: Vec<String>,
}

/// A preferred (non-mandatory) skill recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferredSkill {
    pub skill: String,
    pub in_resume: bool,
    pub benefit: String,
    pub priority: Priority,
}

/// ATS keyword guidance extracted from the JD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsKeywords {
    pub must_have: Vec<String>,
    pub replace_with: Vec<KeywordSwap>,
    pub exact_phrases: Vec<String>,
    pub action_verbs: Vec<String>,
}

/// A phrase the candidate uses and the stronger form to replace it with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordSwap {
    pub current: String,
    pub better: String,
}

/// A suggested addition to the resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointToAdd {
    pub suggestion: String,
    pub reason: String,
    pub priority: Priority,
}

/// A suggested removal from the resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointToRemove {
    pub content: String,
    pub reason: String,
}

/// An interview preparation question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestion {
    pub question: String,
    /// Question style, e.g. technical, behavioral, scenario
    #[serde(rename = "type")]
    pub question_type: String,
    pub reason: String,
    pub sample_answer: String,
}

/// Recommendation priority as instructed in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl AnalysisReport {
    // == From Reply ==
    /// Parses a raw model reply into a report.
    ///
    /// Models occasionally wrap the JSON in markdown code fences despite
    /// instructions; those are stripped before parsing.
    pub fn from_reply(reply: &str) -> serde_json::Result<Self> {
        serde_json::from_str(strip_json_fences(reply))
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
