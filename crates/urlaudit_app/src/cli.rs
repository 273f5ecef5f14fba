use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use urlaudit_core::{Mode, NonRedirectPolicy};
use urlaudit_engine::{DispatchConfig, ProbeSettings, DEFAULT_BATCH_SIZE};

#[derive(Debug, Parser)]
#[command(name = "urlaudit")]
#[command(about = "Check status codes or redirect targets for a list of URLs", long_about = None)]
pub struct Cli {
    /// CSV file with one `url[,expected redirect suffix]` per line
    #[arg(short, long)]
    pub csv: PathBuf,

    /// Base URL prepended to every entry, for lists of relative URLs
    #[arg(short, long, default_value = "")]
    pub base: String,

    /// Processing mode
    #[arg(short, long, value_enum, default_value_t = ModeArg::Status)]
    pub mode: ModeArg,

    /// URLs checked one after another by each worker
    #[arg(short = 'n', long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: NonZeroUsize,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Extra attempts after a transport error
    #[arg(long, default_value_t = 0)]
    pub retries: u32,

    /// What redirect mode does with responses that are not redirects
    #[arg(long, value_enum, default_value_t = NonRedirectArg::Skip)]
    pub non_redirect: NonRedirectArg,

    /// Seconds between progress notices
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u64).range(1..))]
    pub progress_secs: u64,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,

    /// Also write the log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Status,
    Redirect,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Status => Mode::StatusCheck,
            ModeArg::Redirect => Mode::RedirectCheck,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NonRedirectArg {
    Skip,
    Report,
}

impl From<NonRedirectArg> for NonRedirectPolicy {
    fn from(arg: NonRedirectArg) -> Self {
        match arg {
            NonRedirectArg::Skip => NonRedirectPolicy::Skip,
            NonRedirectArg::Report => NonRedirectPolicy::Report,
        }
    }
}

impl Cli {
    pub fn mode(&self) -> Mode {
        self.mode.into()
    }

    pub fn dispatch_config(&self) -> DispatchConfig {
        DispatchConfig {
            base_url: self.base.clone(),
            mode: self.mode(),
            batch_size: self.batch_size,
            non_redirect: self.non_redirect.into(),
            progress_interval: Duration::from_secs(self.progress_secs),
        }
    }

    pub fn probe_settings(&self) -> ProbeSettings {
        ProbeSettings {
            request_timeout: Duration::from_secs(self.timeout),
            retries: self.retries,
            ..ProbeSettings::default()
        }
    }
}
