use clap::Parser;
use std::path::PathBuf;

// Build version with target info
const VERSION_INFO: &str = const_format::concatcp!(
    env!("CARGO_PKG_VERSION"), "\n",
    "UI:     eframe/egui 0.33\n",
    "Target: ", std::env::consts::ARCH, "-", std::env::consts::OS
);

/// Developer portfolio viewer
#[derive(Parser, Debug)]
#[command(author, version = VERSION_INFO, about, long_about = None)]
pub struct Args {
    /// Portfolio content JSON (defaults to the bundled sample)
    #[arg(value_name = "CONTENT")]
    pub content: Option<PathBuf>,

    /// Section to scroll to on startup (home, about, skills, resume, certifications, projects, contact)
    #[arg(short = 's', long = "section", value_name = "SECTION")]
    pub section: Option<String>,

    /// Start with every auto-advance timer off
    #[arg(long = "no-autoplay")]
    pub no_autoplay: bool,

    /// Projects auto-advance interval in milliseconds
    #[arg(long = "interval", value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Start in fullscreen mode
    #[arg(short = 'F', long = "fullscreen")]
    pub fullscreen: bool,

    /// Enable debug logging to file (default: folio.log)
    #[arg(short = 'l', long = "log", value_name = "LOG_FILE")]
    pub log_file: Option<Option<PathBuf>>,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Custom configuration directory (overrides default platform paths)
    #[arg(short = 'c', long = "config-dir", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

impl Args {
    /// Log level for the `-v` count
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["folio"]).unwrap();
        assert!(args.content.is_none());
        assert!(!args.no_autoplay);
        assert!(args.log_file.is_none());
        assert_eq!(args.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_full_command_line() {
        let args = Args::try_parse_from([
            "folio", "me.json", "-s", "projects", "--no-autoplay", "--interval", "3000", "-F", "-l", "-vv",
            "-c", "/tmp/cfg",
        ])
        .unwrap();
        assert_eq!(args.content, Some(PathBuf::from("me.json")));
        assert_eq!(args.section.as_deref(), Some("projects"));
        assert!(args.no_autoplay);
        assert_eq!(args.interval_ms, Some(3000));
        assert!(args.fullscreen);
        assert_eq!(args.log_file, Some(None));
        assert_eq!(args.log_level(), log::LevelFilter::Debug);
        assert_eq!(args.config_dir, Some(PathBuf::from("/tmp/cfg")));
    }

    #[test]
    fn test_log_with_path() {
        let args = Args::try_parse_from(["folio", "--log", "/tmp/x.log", "-vvvv"]).unwrap();
        assert_eq!(args.log_file, Some(Some(PathBuf::from("/tmp/x.log"))));
        assert_eq!(args.log_level(), log::LevelFilter::Trace);
    }
}
