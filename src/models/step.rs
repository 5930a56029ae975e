use serde::{Deserialize, Serialize};

/// One suggested step as returned by the model: a short action label plus an
/// explanation of how it lowers the barrier to acting.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StepSuggestion {
    pub step: String,
    pub description: String,
}

/// Decode the completion text into a list of step suggestions.
///
/// The model is instructed to answer with a bare JSON array, but some models
/// wrap it in a Markdown code fence anyway, so that is stripped first.
pub fn parse_step_list(text: &str) -> Result<Vec<StepSuggestion>, serde_json::Error> {
    serde_json::from_str(strip_code_fence(text))
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(rest) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the optional language tag on the opening fence.
    match rest.split_once('\n') {
        Some((_, body)) => body.trim(),
        None => rest.trim(),
    }
}
