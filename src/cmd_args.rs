use std::ffi::OsString;

pub use clap::Parser;

use crate::config::{Profile, DEFAULT_PROFILE_NAME};
use crate::curl::{
    BodyRender, DataFlagSet, FormatOptions, HeaderOrder, MissingArgumentPolicy, ParseOptions,
};

/// Output format for one-shot mode
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Readable sections
    #[default]
    Text,
    /// The parsed request as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Optional. Profile section to read option defaults from. Default is 'default'.
    /// A missing profile falls back to built-in defaults.
    #[clap(short = 'p', long, default_value = DEFAULT_PROFILE_NAME, help = "profile name")]
    profile: String,

    /// Verbose mode
    /// Optional. Print debug logs to stderr.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,

    /// Curl command to break down. Reads stdin or starts the REPL when omitted.
    #[clap(short = 'c', long, help = "curl command to parse once")]
    command: Option<String>,

    #[clap(short = 'o', long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    #[clap(long, help = "header order: insertion or sorted")]
    header_order: Option<HeaderOrder>,

    #[clap(long, help = "body rendering: join or json-first")]
    body_render: Option<BodyRender>,

    #[clap(long, help = "trailing flag without value: fail or ignore")]
    missing_argument: Option<MissingArgumentPolicy>,

    #[clap(long, help = "data flag set: standard or extended")]
    data_flags: Option<DataFlagSet>,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    verbose: bool,
    command: Option<String>,
    output: OutputFormat,
    overrides: Profile,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    fn from_clap(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            verbose: args.verbose,
            command: args.command,
            output: args.output,
            overrides: Profile {
                data_flags: args.data_flags,
                missing_argument: args.missing_argument,
                header_order: args.header_order,
                body_render: args.body_render,
            },
        }
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    pub fn output(&self) -> OutputFormat {
        self.output
    }

    /// Merge command line overrides over a loaded profile
    pub fn resolve_options(&self, profile: Option<&Profile>) -> (ParseOptions, FormatOptions) {
        let base = profile.cloned().unwrap_or_default();
        let merged = Profile {
            data_flags: self.overrides.data_flags.or(base.data_flags),
            missing_argument: self.overrides.missing_argument.or(base.missing_argument),
            header_order: self.overrides.header_order.or(base.header_order),
            body_render: self.overrides.body_render.or(base.body_render),
        };
        (merged.parse_options(), merged.format_options())
    }
}
