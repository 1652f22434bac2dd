//! # Tokenizer
//!
//! Shell-style word splitting for curl invocations. Backslash continuations
//! are folded into a single line first, then the line is split with POSIX
//! quoting rules.

use thiserror::Error;

/// The command name every invocation has to start with
pub const COMMAND_NAME: &str = "curl";

/// Lexical failure while splitting the command into words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Shell parsing error: unbalanced quotes or dangling escape in {input:?}")]
pub struct TokenizeError {
    input: String,
}

impl TokenizeError {
    /// The continuation-joined line that failed to split
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Join lines that end in a trailing backslash.
///
/// Every line is trimmed and a single trailing backslash is dropped, then the
/// lines are joined with one space. A pasted command such as
///
/// ```text
/// curl https://example.com \
///   -H 'Accept: */*'
/// ```
///
/// becomes `curl https://example.com -H 'Accept: */*'`.
pub fn join_continuations(input: &str) -> String {
    input
        .lines()
        .map(|line| {
            let line = line.trim();
            match line.strip_suffix('\\') {
                Some(rest) => rest.trim_end(),
                None => line,
            }
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a raw invocation into tokens.
///
/// Quotes are stripped, escapes honored and whitespace runs act as a single
/// separator.
pub fn tokenize(input: &str) -> Result<Vec<String>, TokenizeError> {
    let joined = join_continuations(input);
    shlex::split(&joined).ok_or(TokenizeError { input: joined })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn words(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_tokenize_plain_words() {
        let tokens = tokenize("curl   https://example.com  -X   POST").unwrap();
        assert_eq!(tokens, words(&["curl", "https://example.com", "-X", "POST"]));
    }

    #[test]
    fn test_tokenize_strips_quotes() {
        let tokens = tokenize(r#"curl -H "Accept: text/html" -d '{"a": 1}'"#).unwrap();
        assert_eq!(
            tokens,
            words(&["curl", "-H", "Accept: text/html", "-d", r#"{"a": 1}"#])
        );
    }

    #[test]
    fn test_tokenize_keeps_inner_whitespace_of_quoted_word() {
        let tokens = tokenize("curl -d 'a    b'").unwrap();
        assert_eq!(tokens, words(&["curl", "-d", "a    b"]));
    }

    #[test]
    fn test_tokenize_honors_escapes() {
        let tokens = tokenize(r#"curl -d hello\ world -H "X-Q: \"x\"""#).unwrap();
        assert_eq!(
            tokens,
            words(&["curl", "-d", "hello world", "-H", r#"X-Q: "x""#])
        );
    }

    #[test]
    fn test_join_continuations() {
        let input = "curl https://example.com \\\n    -X PUT \\\n    -d 'x'";
        assert_eq!(
            join_continuations(input),
            "curl https://example.com -X PUT -d 'x'"
        );
    }

    #[test]
    fn test_join_continuations_skips_blank_lines() {
        let input = "\n  curl \\\n\n  https://example.com  \n";
        assert_eq!(join_continuations(input), "curl https://example.com");
    }

    #[test]
    fn test_tokenize_multiline_matches_single_line() {
        let multi = "curl https://example.com \\\n  -H 'A: b' \\\n  --compressed";
        let single = "curl https://example.com -H 'A: b' --compressed";
        assert_eq!(tokenize(multi).unwrap(), tokenize(single).unwrap());
    }

    #[test]
    fn test_tokenize_unterminated_quote() {
        let err = tokenize("curl -d '{\"a\": 1}").unwrap_err();
        assert_eq!(err.input(), "curl -d '{\"a\": 1}");
        assert!(err.to_string().starts_with("Shell parsing error"));
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert_eq!(tokenize("   ").unwrap(), Vec::<String>::new());
    }
}
