//! # Flag Interpreter
//!
//! Walks the tokens of a curl invocation once, front to back, and builds a
//! [`ParsedRequest`]. Flags that take a value consume the token right after
//! them regardless of what it looks like.

use super::options::{MissingArgumentPolicy, ParseOptions};
use super::request::{Headers, ParsedRequest};
use super::ParseError;

/// What a token means to the interpreter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag {
    Method,
    Header,
    Data,
    User,
    Positional,
    Other,
}

impl Flag {
    fn classify(token: &str, options: &ParseOptions) -> Self {
        match token {
            "-X" | "--request" => Flag::Method,
            "-H" | "--header" => Flag::Header,
            "-u" | "--user" => Flag::User,
            t if options.data_flags.contains(t) => Flag::Data,
            t if !looks_like_flag(t) => Flag::Positional,
            _ => Flag::Other,
        }
    }
}

fn looks_like_flag(token: &str) -> bool {
    token.starts_with('-')
}

/// Split a header argument on its first colon
fn split_header(raw: &str) -> (String, Option<String>) {
    match raw.split_once(':') {
        Some((name, value)) => (name.trim().to_string(), Some(value.trim().to_string())),
        None => (raw.to_string(), None),
    }
}

/// Accumulates request parts while the cursor moves over the tokens
struct FlagInterpreter<'a> {
    tokens: &'a [String],
    cursor: usize,
    options: &'a ParseOptions,
    url: Option<String>,
    method: Option<String>,
    headers: Headers,
    body: Vec<String>,
    user: Option<String>,
    other_flags: Vec<String>,
}

impl<'a> FlagInterpreter<'a> {
    fn new(tokens: &'a [String], options: &'a ParseOptions) -> Self {
        Self {
            tokens,
            cursor: 0,
            options,
            url: None,
            method: None,
            headers: Headers::new(),
            body: Vec::new(),
            user: None,
            other_flags: Vec::new(),
        }
    }

    fn next_token(&mut self) -> Option<&'a str> {
        let tokens = self.tokens;
        let token = tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(token.as_str())
    }

    /// Take the value for `flag`. `Ok(None)` means the flag was dropped under
    /// the ignore policy.
    fn flag_value(&mut self, flag: &str) -> Result<Option<&'a str>, ParseError> {
        match self.next_token() {
            Some(value) => Ok(Some(value)),
            None => match self.options.missing_argument {
                MissingArgumentPolicy::Fail => Err(ParseError::MissingArgument {
                    flag: flag.to_string(),
                }),
                MissingArgumentPolicy::Ignore => Ok(None),
            },
        }
    }

    fn run(mut self) -> Result<ParsedRequest, ParseError> {
        while let Some(token) = self.next_token() {
            match Flag::classify(token, self.options) {
                Flag::Method => {
                    if let Some(method) = self.flag_value(token)? {
                        self.method = Some(method.to_string());
                    }
                }
                Flag::Header => {
                    if let Some(raw) = self.flag_value(token)? {
                        let (name, value) = split_header(raw);
                        self.headers.insert(name, value);
                    }
                }
                Flag::Data => {
                    if let Some(data) = self.flag_value(token)? {
                        self.body.push(data.to_string());
                    }
                }
                Flag::User => {
                    if let Some(user) = self.flag_value(token)? {
                        self.user = Some(user.to_string());
                    }
                }
                Flag::Positional => {
                    if let Some(first) = &self.url {
                        return Err(ParseError::MultipleUrls {
                            first: first.clone(),
                            second: token.to_string(),
                        });
                    }
                    self.url = Some(token.to_string());
                }
                Flag::Other => self.record_other_flag(token),
            }
        }

        let url = self.url.ok_or(ParseError::NoUrlFound)?;
        let mut request = ParsedRequest::new(url);
        if let Some(method) = self.method {
            request.method = method;
        }
        request.headers = self.headers;
        request.body = self.body;
        request.user = self.user;
        request.other_flags = self.other_flags;
        Ok(request)
    }

    /// Unknown flags take the next token along when it is not itself a flag.
    /// That token may be the URL; it is still treated as the flag's argument.
    fn record_other_flag(&mut self, flag: &str) {
        let mut entry = flag.to_string();
        if let Some(next) = self.tokens.get(self.cursor) {
            if !looks_like_flag(next) {
                entry.push(' ');
                entry.push_str(next);
                self.cursor += 1;
            }
        }
        self.other_flags.push(entry);
    }
}

/// Interpret the tokens that follow the command name
pub fn interpret(tokens: &[String], options: &ParseOptions) -> Result<ParsedRequest, ParseError> {
    FlagInterpreter::new(tokens, options).run()
}
