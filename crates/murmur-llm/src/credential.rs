//! Credential diagnostics for configured model keys.

/// Fragments that indicate a key copied straight from a config template.
const PLACEHOLDER_MARKERS: &[&str] = &["your-api-key", "your_api_key", "changeme", "xxxx"];

/// Describe what looks wrong with a credential, if anything.
///
/// Returns `None` when the key looks usable. The description is meant for
/// operator-facing logs; callers proceed with the call regardless.
pub fn describe_credential_problem(label: &str, api_key: Option<&str>) -> Option<String> {
    let key = match api_key {
        Some(key) => key.trim(),
        None => return Some(format!("{label}: no api key configured")),
    };
    if key.is_empty() {
        return Some(format!("{label}: api key is empty"));
    }
    let lowered = key.to_lowercase();
    if PLACEHOLDER_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
    {
        return Some(format!("{label}: api key looks like a placeholder"));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::describe_credential_problem;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_key_is_reported() {
        let problem = describe_credential_problem("summarizer", None).expect("problem");
        assert!(problem.contains("summarizer"));
        assert!(problem.contains("no api key"));
    }

    #[test]
    fn blank_key_is_reported() {
        let problem = describe_credential_problem("summarizer", Some("   ")).expect("problem");
        assert!(problem.contains("empty"));
    }

    #[test]
    fn placeholder_key_is_reported() {
        let problem =
            describe_credential_problem("summarizer", Some("YOUR_API_KEY")).expect("problem");
        assert!(problem.contains("placeholder"));
    }

    #[test]
    fn usable_key_passes() {
        assert_eq!(
            describe_credential_problem("summarizer", Some("sk-live-1234567890")),
            None
        );
    }
}
