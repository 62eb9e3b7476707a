//! LLM prompt templates for resume suggestions and follow-up answers.
//!
//! Placeholders are `{name}` tokens filled by `render`. Documents are embedded
//! verbatim; the replies are free text and are never parsed.

// ────────────────────────────────────────────────────────────────────────────
// Suggestions prompt
// ────────────────────────────────────────────────────────────────────────────

/// Replace: {resume}, {job_description}
pub const SUGGESTIONS_PROMPT_TEMPLATE: &str = "\n\
You are a resume expert. Given this resume and job description, suggest improvements:\n\
\n\
Resume:\n\
{resume}\n\
\n\
Job Description:\n\
{job_description}\n\
\n\
Your response should include:\n\
- Which keywords or skills are missing in the resume\n\
- What phrasing could be improved\n\
- Any structural suggestions\n";

// ────────────────────────────────────────────────────────────────────────────
// Follow-up prompt
// ────────────────────────────────────────────────────────────────────────────

/// Replace: {suggestions}, {question}
pub const FOLLOWUP_PROMPT_TEMPLATE: &str = "\n\
You previously gave the following resume suggestions:\n\
\n\
{suggestions}\n\
\n\
Now the user asks this follow-up question:\n\
\"{question}\"\n\
\n\
Please answer clearly based on your earlier suggestions.\n";

/// Fills `{name}` placeholders in a single left-to-right pass.
///
/// Substituted values are never rescanned, so a resume that itself contains
/// `{job_description}` is embedded as-is. Unknown placeholders are left in place.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let values_len: usize = values.iter().map(|(_, v)| v.len()).sum();
    let mut output = String::with_capacity(template.len() + values_len);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let substituted = after_open.find('}').and_then(|close| {
            let name = &after_open[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match substituted {
            Some((value, close)) => {
                output.push_str(value);
                rest = &after_open[close + 1..];
            }
            None => {
                output.push('{');
                rest = after_open;
            }
        }
    }

    output.push_str(rest);
    output
}

pub fn suggestions_prompt(resume: &str, job_description: &str) -> String {
    render(
        SUGGESTIONS_PROMPT_TEMPLATE,
        &[("resume", resume), ("job_description", job_description)],
    )
}

pub fn followup_prompt(suggestions: &str, question: &str) -> String {
    render(
        FOLLOWUP_PROMPT_TEMPLATE,
        &[("suggestions", suggestions), ("question", question)],
    )
}
