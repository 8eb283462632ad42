// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Appended to every prompt. The endpoint takes no system prompt, so the
/// JSON-only rule travels with the user content.
pub const JSON_ONLY_INSTRUCTION: &str = "\
You MUST respond with valid JSON only. \
Do NOT include any text outside the JSON object. \
Do NOT use markdown code fences. \
Do NOT include explanations or apologies.";

/// Fills `{placeholder}` slots in a template in a single pass.
/// Unknown slots (and literal JSON braces) are left untouched; substituted
/// values are never re-scanned.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let slot = &rest[start + 1..];
        let hit = vars
            .iter()
            .find(|(key, _)| slot.starts_with(key) && slot[key.len()..].starts_with('}'));
        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &slot[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = slot;
            }
        }
    }

    out.push_str(rest);
    out
}
