//! JSON extraction from a prose-wrapped reply.

/// Returns the substring between the first `{` and the last `}`.
///
/// Text-generation endpoints asked for "only JSON" still routinely wrap
/// the object in commentary or markdown code fences. Brace scanning is
/// the documented fallback: it survives fences and prose but is defeated
/// by stray braces inside them, which the downstream parse then rejects.
pub fn extract_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
