use std::path::PathBuf;

use clap::{ArgAction, Parser};
use intro_logging::intro_debug;
use log::LevelFilter;

use crate::logging::LogSettings;

/// Print the introduction of an English Wikipedia article.
#[derive(Parser, Debug)]
#[command(name = "wiki-intro", version)]
pub struct CliArgs {
    /// Article topic, e.g. "albert einstein". Prompted for when omitted.
    pub topic: Option<String>,

    #[arg(hide = true)]
    pub ignored: Vec<String>,

    /// Raise log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log level (off, error, warn, info, debug, trace). Overrides -v.
    #[arg(long, env = "WIKI_INTRO_LOG")]
    pub log_level: Option<LevelFilter>,

    /// Also append logs to this file.
    #[arg(long, env = "WIKI_INTRO_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl CliArgs {
    pub fn log_settings(&self) -> LogSettings {
        let level = self.log_level.unwrap_or(match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        });
        LogSettings {
            level,
            file: self.log_file.clone(),
        }
    }

    /// Only the first positional argument is a topic.
    pub fn log_ignored(&self) {
        if !self.ignored.is_empty() {
            intro_debug!("ignoring {} extra arguments", self.ignored.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("wiki-intro").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn command_definition_is_valid() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn topic_is_optional() {
        assert_eq!(parse(&[]).topic, None);
        assert_eq!(parse(&["albert einstein"]).topic.as_deref(), Some("albert einstein"));
    }

    #[test]
    fn extra_positionals_are_ignored() {
        let args = parse(&["moon", "landing"]);
        assert_eq!(args.topic.as_deref(), Some("moon"));
        assert_eq!(args.ignored, vec!["landing".to_string()]);
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(parse(&[]).log_settings().level, LevelFilter::Warn);
        assert_eq!(parse(&["-v"]).log_settings().level, LevelFilter::Info);
        assert_eq!(parse(&["-vv"]).log_settings().level, LevelFilter::Debug);
        assert_eq!(parse(&["-vvvv"]).log_settings().level, LevelFilter::Trace);
    }

    #[test]
    fn explicit_level_overrides_verbosity() {
        let args = parse(&["-vv", "--log-level", "error"]);
        assert_eq!(args.log_settings().level, LevelFilter::Error);
    }

    #[test]
    fn log_file_is_passed_through() {
        let args = parse(&["--log-file", "intro.log", "moon"]);
        assert_eq!(args.log_settings().file, Some(PathBuf::from("intro.log")));
    }
}
