use std::sync::OnceLock;

use regex::Regex;

// Matches `{{ env.VAR }}` and `{{ env.VAR | default("fallback") }}`
fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([a-zA-Z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("must be valid regex")
    })
}

/// Expand `{{ env.VAR }}` placeholders in raw config text
///
/// An unset variable is an error unless the placeholder carries a
/// `default("...")` fallback. TOML comment lines pass through untouched so
/// commented-out examples never fail expansion.
pub fn expand_env(input: &str) -> Result<String, String> {
    let mut output = String::with_capacity(input.len());

    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        if line.trim_start().starts_with('#') {
            output.push_str(line);
        } else {
            output.push_str(&expand_line(line)?);
        }
    }

    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

fn expand_line(line: &str) -> Result<String, String> {
    let mut expanded = String::with_capacity(line.len());
    let mut tail = 0;

    for captures in placeholder_re().captures_iter(line) {
        let placeholder = captures.get(0).expect("group 0 is the whole match");
        let key = captures.get(1).map_or("", |m| m.as_str());
        let fallback = captures.get(2).map(|m| m.as_str());

        expanded.push_str(&line[tail..placeholder.start()]);

        let name = match key.strip_prefix("env.") {
            Some(name) if !name.contains('.') => name,
            _ => return Err(format!("only variables scoped with 'env.' are supported: `{key}`")),
        };

        match std::env::var(name) {
            Ok(value) => expanded.push_str(&value),
            Err(_) => match fallback {
                Some(default) => expanded.push_str(default),
                None => return Err(format!("environment variable not found: `{name}`")),
            },
        }

        tail = placeholder.end();
    }

    expanded.push_str(&line[tail..]);
    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        let input = "listen_address = \"0.0.0.0:8000\"";
        assert_eq!(expand_env(input).unwrap(), input);
    }

    #[test]
    fn expands_set_variable() {
        temp_env::with_var("SOTTO_MODEL", Some("/models/ggml-small.bin"), || {
            let result = expand_env("model_path = \"{{ env.SOTTO_MODEL }}\"").unwrap();
            assert_eq!(result, "model_path = \"/models/ggml-small.bin\"");
        });
    }

    #[test]
    fn expands_variables_on_separate_lines() {
        let vars = [("HOST", Some("127.0.0.1")), ("LEVEL", Some("debug"))];
        temp_env::with_vars(vars, || {
            let result = expand_env("a = \"{{ env.HOST }}\"\nb = \"{{ env.LEVEL }}\"").unwrap();
            assert_eq!(result, "a = \"127.0.0.1\"\nb = \"debug\"");
        });
    }

    #[test]
    fn unset_variable_is_an_error() {
        temp_env::with_var_unset("SOTTO_UNSET", || {
            let err = expand_env("key = \"{{ env.SOTTO_UNSET }}\"").unwrap_err();
            assert!(err.contains("SOTTO_UNSET"));
        });
    }

    #[test]
    fn unset_variable_with_default_uses_fallback() {
        temp_env::with_var_unset("SOTTO_UNSET", || {
            let result = expand_env("device = \"{{ env.SOTTO_UNSET | default(\"auto\") }}\"").unwrap();
            assert_eq!(result, "device = \"auto\"");
        });
    }

    #[test]
    fn set_variable_wins_over_default() {
        temp_env::with_var("SOTTO_DEVICE", Some("cpu"), || {
            let result = expand_env("device = \"{{ env.SOTTO_DEVICE | default(\"auto\") }}\"").unwrap();
            assert_eq!(result, "device = \"cpu\"");
        });
    }

    #[test]
    fn non_env_scope_is_rejected() {
        let err = expand_env("key = \"{{ secrets.TOKEN }}\"").unwrap_err();
        assert!(err.contains("only variables scoped with 'env.'"));
    }

    #[test]
    fn comment_lines_are_left_alone() {
        temp_env::with_var_unset("SOTTO_UNSET", || {
            let input = "  # model_path = \"{{ env.SOTTO_UNSET }}\"";
            assert_eq!(expand_env(input).unwrap(), input);
        });
    }

    #[test]
    fn trailing_newline_is_preserved() {
        let input = "key = \"value\"\n";
        assert_eq!(expand_env(input).unwrap(), input);
    }
}
