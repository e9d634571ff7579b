//! JSON extraction from LLM response text
//!
//! Models wrap their output in prose and markdown fences more often than
//! not. Rather than chase formats, extract the first top-level JSON object
//! found anywhere in the text by brace matching, honoring string literals
//! and escapes.

/// Return the first balanced `{...}` object in `text`, or `None`
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + i + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}
