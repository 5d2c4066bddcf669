// Shared prompt constants.
// Each feature that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System instruction that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Appended to every schema block so numeric fields stay on one scale.
pub const SCORE_SCALE_INSTRUCTION: &str =
    "All scores are numbers between 0 and 100 inclusive. Use the exact field names shown.";

/// Replaces every `{name}` placeholder in `template` with its value in a single pass,
/// so substituted text is never re-scanned for placeholders.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let hit = values.iter().find_map(|(name, value)| {
            tail.strip_prefix(name)
                .and_then(|t| t.strip_prefix('}'))
                .map(|after| (*value, after))
        });
        match hit {
            Some((value, after)) => {
                out.push_str(value);
                rest = after;
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_replaces_all_occurrences() {
        let out = fill_template("{role} / {role} / {text}", &[("role", "SRE"), ("text", "cv")]);
        assert_eq!(out, "SRE / SRE / cv");
    }

    #[test]
    fn test_fill_template_leaves_unknown_placeholders() {
        let out = fill_template("{known} {unknown}", &[("known", "x")]);
        assert_eq!(out, "x {unknown}");
    }

    #[test]
    fn test_fill_template_does_not_expand_substituted_text() {
        let out = fill_template(
            "Resume: {resume_text}\nJob: {job_description}",
            &[("resume_text", "see {job_description}"), ("job_description", "SRE")],
        );
        assert_eq!(out, "Resume: see {job_description}\nJob: SRE");
    }

    #[test]
    fn test_fill_template_keeps_literal_json_braces() {
        let out = fill_template("{\"score\": number} for {role}", &[("role", "SRE")]);
        assert_eq!(out, "{\"score\": number} for SRE");
    }
}
