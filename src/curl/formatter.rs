//! # Request Formatter
//!
//! Renders a [`ParsedRequest`] as a fixed sequence of titled sections:
//!
//! ```text
//! URL:
//!   https://api.example.com/users
//!
//! Method:
//!   POST
//!
//! Headers:
//!   Content-Type: application/json
//! ```
//!
//! `URL` and `Method` are always present; `Headers`, `Body/Data`,
//! `Basic Auth` and `Other Flags` only when they have content.

use super::options::{BodyRender, FormatOptions, HeaderOrder};
use super::request::{Header, ParsedRequest};

const INDENT: &str = "  ";
const BODY_SEPARATOR: &str = " & ";
const ABSENT_HEADER_VALUE: &str = "null";

struct Section {
    title: &'static str,
    lines: Vec<String>,
}

impl Section {
    fn new(title: &'static str, content: impl Into<String>) -> Self {
        Self {
            title,
            lines: vec![content.into()],
        }
    }

    fn render(&self, out: &mut String) {
        out.push_str(self.title);
        out.push_str(":\n");
        for line in self.lines.iter().flat_map(|l| l.split('\n')) {
            if !line.is_empty() {
                out.push_str(INDENT);
                out.push_str(line);
            }
            out.push('\n');
        }
    }
}

fn header_lines(request: &ParsedRequest, order: HeaderOrder) -> Vec<String> {
    let mut headers: Vec<&Header> = request.headers().iter().collect();
    if order == HeaderOrder::Sorted {
        headers.sort_by(|a, b| a.name.cmp(&b.name));
    }
    headers
        .into_iter()
        .map(|h| {
            let value = h.value.as_deref().unwrap_or(ABSENT_HEADER_VALUE);
            format!("{}: {}", h.name, value)
        })
        .collect()
}

/// Pretty-print `raw` when it is JSON, otherwise return it unchanged
fn pretty_json_or_raw(raw: &str) -> String {
    serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| raw.to_string())
}

fn body_text(body: &[String], policy: BodyRender) -> Option<String> {
    let first = body.first()?;
    let text = match policy {
        BodyRender::Join => body.join(BODY_SEPARATOR),
        BodyRender::JsonFirst => pretty_json_or_raw(first),
    };
    Some(text)
}

/// Render `request` as readable text. Output always ends with a newline.
pub fn format_request(request: &ParsedRequest, options: &FormatOptions) -> String {
    let mut sections = vec![
        Section::new("URL", request.url()),
        Section::new("Method", request.method()),
    ];

    if !request.headers().is_empty() {
        sections.push(Section {
            title: "Headers",
            lines: header_lines(request, options.header_order),
        });
    }

    if let Some(body) = body_text(request.body(), options.body_render) {
        sections.push(Section::new("Body/Data", body));
    }

    if let Some(user) = request.user().filter(|u| !u.is_empty()) {
        sections.push(Section::new("Basic Auth", user));
    }

    if !request.other_flags().is_empty() {
        sections.push(Section {
            title: "Other Flags",
            lines: request.other_flags().to_vec(),
        });
    }

    let mut out = String::new();
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        section.render(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curl::{parse, ParseOptions};
    use pretty_assertions::assert_eq;

    fn render(input: &str, options: FormatOptions) -> String {
        let request = crate::curl::parse_curl_command(input, &ParseOptions::default()).unwrap();
        format_request(&request, &options)
    }

    fn sorted_json_first() -> FormatOptions {
        FormatOptions {
            header_order: HeaderOrder::Sorted,
            body_render: BodyRender::JsonFirst,
        }
    }

    #[test]
    fn test_format_url_and_method_only() {
        let text = render("curl https://x.com", FormatOptions::default());
        assert_eq!(text, "URL:\n  https://x.com\n\nMethod:\n  GET\n");
    }

    #[test]
    fn test_format_all_sections() {
        let text = render(
            "curl https://x.com -X PUT -H 'B: 2' -H 'A: 1' -H X-None -d a=1 -d b=2 -u admin:pass --compressed -k",
            FormatOptions::default(),
        );
        let expected = "\
URL:
  https://x.com

Method:
  PUT

Headers:
  B: 2
  A: 1
  X-None: null

Body/Data:
  a=1 & b=2

Basic Auth:
  admin:pass

Other Flags:
  --compressed
  -k
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_format_empty_user_is_omitted() {
        let text = render("curl https://x.com -u ''", FormatOptions::default());
        assert_eq!(text, "URL:\n  https://x.com\n\nMethod:\n  GET\n");
    }

    #[test]
    fn test_format_sorted_headers() {
        let text = render(
            "curl https://x.com -H 'b: 2' -H 'B: 3' -H 'a: 1'",
            sorted_json_first(),
        );
        assert!(text.contains("Headers:\n  B: 3\n  a: 1\n  b: 2\n"), "{text}");
    }

    #[test]
    fn test_format_single_body_part_is_not_joined() {
        let text = render("curl https://x.com -d 'a & b'", FormatOptions::default());
        assert!(text.ends_with("Body/Data:\n  a & b\n"), "{text}");
    }

    #[test]
    fn test_format_json_first_pretty_prints() {
        let text = render(
            r#"curl https://x.com -d '{"name":"A","tags":[1,2],"a":null}' -d ignored"#,
            sorted_json_first(),
        );
        let expected = "\
URL:
  https://x.com

Method:
  GET

Body/Data:
  {
    \"name\": \"A\",
    \"tags\": [
      1,
      2
    ],
    \"a\": null
  }
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_format_json_first_keeps_number_precision() {
        let text = render(
            r#"curl https://x.com -d '{"id":12345678901234567890123,"p":0.10000000000000000001}'"#,
            sorted_json_first(),
        );
        assert!(
            text.ends_with(
                "Body/Data:\n  {\n    \"id\": 12345678901234567890123,\n    \"p\": 0.10000000000000000001\n  }\n"
            ),
            "{text}"
        );
    }

    #[test]
    fn test_format_json_first_falls_back_to_raw() {
        let text = render("curl https://x.com -d 'name=A&b={'", sorted_json_first());
        assert!(text.ends_with("Body/Data:\n  name=A&b={\n"), "{text}");
    }

    #[test]
    fn test_format_multiline_body_is_indented() {
        let mut request = parse("curl https://x.com").unwrap();
        request.body.push("one\n\ntwo".to_string());
        let text = format_request(&request, &FormatOptions::default());
        assert!(text.ends_with("Body/Data:\n  one\n\n  two\n"), "{text}");
    }

    #[test]
    fn test_format_is_deterministic() {
        let input = "curl https://x.com -H 'Z: 1' -H 'A: 2' -d '{\"b\":1,\"a\":2}'";
        for options in [FormatOptions::default(), sorted_json_first()] {
            let first = render(input, options);
            let second = render(input, options);
            assert_eq!(first, second);
        }
    }
}
