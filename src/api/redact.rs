const MASK: &str = "***";
const SNIPPET_CHARS: usize = 200;

/// Replace every occurrence of each non-empty secret in `text` with a mask,
/// both as written and as it appears inside a JSON string.
pub fn scrub(text: &str, secrets: &[&str]) -> String {
    secrets
        .iter()
        .filter(|secret| !secret.is_empty())
        .fold(text.to_owned(), |acc, secret| {
            let escaped = json_escaped(secret);
            let acc = if escaped != *secret {
                acc.replace(&escaped, MASK)
            } else {
                acc
            };
            acc.replace(secret, MASK)
        })
}

fn json_escaped(secret: &str) -> String {
    let quoted = serde_json::Value::from(secret).to_string();
    quoted[1..quoted.len() - 1].to_string()
}

/// Lossy, scrubbed and truncated view of a response body for logs and errors.
pub fn snippet(body: &[u8], secrets: &[&str]) -> String {
    let text = scrub(&String::from_utf8_lossy(body), secrets);
    if text.chars().count() <= SNIPPET_CHARS {
        return text;
    }
    let mut short: String = text.chars().take(SNIPPET_CHARS).collect();
    short.push('…');
    short
}

pub(crate) fn mask() -> &'static str {
    MASK
}
