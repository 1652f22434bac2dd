//! # Parser and Formatter Options
//!
//! The knobs that decide how a curl invocation is interpreted and rendered.
//! Every option parses from the same lowercase names used on the command
//! line and in profile files.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Data flags understood by every curl version
pub const STANDARD_DATA_FLAGS: &[&str] = &["-d", "--data", "--data-raw", "--data-binary"];

/// Extra data flags accepted by the extended set
pub const EXTENDED_DATA_FLAGS: &[&str] = &["--data-urlencode"];

/// An option value that did not match any known name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value '{value}' for {option} (expected one of: {expected})")]
pub struct InvalidOptionValue {
    option: &'static str,
    value: String,
    expected: &'static str,
}

impl InvalidOptionValue {
    fn new(option: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            option,
            value: value.to_string(),
            expected,
        }
    }
}

/// Which flags append their argument to the request body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataFlagSet {
    /// `-d`, `--data`, `--data-raw`, `--data-binary`
    Standard,
    /// The standard set plus `--data-urlencode`
    #[default]
    Extended,
}

impl DataFlagSet {
    pub fn contains(&self, flag: &str) -> bool {
        match self {
            DataFlagSet::Standard => STANDARD_DATA_FLAGS.contains(&flag),
            DataFlagSet::Extended => {
                STANDARD_DATA_FLAGS.contains(&flag) || EXTENDED_DATA_FLAGS.contains(&flag)
            }
        }
    }
}

/// What to do when a value-consuming flag is the last token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingArgumentPolicy {
    /// Raise `ParseError::MissingArgument`
    #[default]
    Fail,
    /// Drop the dangling flag
    Ignore,
}

/// Order in which headers are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderOrder {
    /// First-seen order of header names
    #[default]
    Insertion,
    /// Lexicographic (byte) order of header names
    Sorted,
}

/// How body parts are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyRender {
    /// All parts on one line, separated by `" & "`
    #[default]
    Join,
    /// Pretty-print the first part as JSON, raw text if it is not JSON
    JsonFirst,
}

/// Options consumed by the flag interpreter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub data_flags: DataFlagSet,
    pub missing_argument: MissingArgumentPolicy,
}

/// Options consumed by the formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatOptions {
    pub header_order: HeaderOrder,
    pub body_render: BodyRender,
}

macro_rules! named_option {
    ($ty:ty, $option:literal, { $($name:literal => $variant:path),+ $(,)? }) => {
        impl FromStr for $ty {
            type Err = InvalidOptionValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($name => Ok($variant),)+
                    _ => Err(InvalidOptionValue::new(
                        $option,
                        s,
                        concat!($($name, ", "),+).trim_end_matches(", "),
                    )),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let name = match self {
                    $($variant => $name,)+
                };
                f.write_str(name)
            }
        }
    };
}

named_option!(DataFlagSet, "data flags", {
    "standard" => DataFlagSet::Standard,
    "extended" => DataFlagSet::Extended,
});

named_option!(MissingArgumentPolicy, "missing argument policy", {
    "fail" => MissingArgumentPolicy::Fail,
    "ignore" => MissingArgumentPolicy::Ignore,
});

named_option!(HeaderOrder, "header order", {
    "insertion" => HeaderOrder::Insertion,
    "sorted" => HeaderOrder::Sorted,
});

named_option!(BodyRender, "body render", {
    "join" => BodyRender::Join,
    "json-first" => BodyRender::JsonFirst,
});
