//! Worker process `pg_embedded_setup_unpriv` spawns when the integration
//! suites run as root.
//!
//! Usage: `pg_worker <setup|start|stop> <payload.json>`. The payload is a
//! serialised [`WorkerPayload`]; its environment is applied before the
//! PostgreSQL lifecycle step runs on a single-threaded runtime.

use std::env;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use color_eyre::eyre::{Context, Report, Result, bail, eyre};
use pg_embedded_setup_unpriv::worker::{PlainSecret, WorkerPayload};
use postgresql_embedded::PostgreSQL;
use tokio::runtime::Builder;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = WorkerArgs::parse(env::args_os().skip(1))?;
    let payload = read_payload(&args.payload_path)?;
    run_step(args.step, payload)
}

/// PostgreSQL lifecycle step requested by the parent process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Setup,
    Start,
    Stop,
}

impl FromStr for Step {
    type Err = Report;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            "setup" => Ok(Self::Setup),
            "start" => Ok(Self::Start),
            "stop" => Ok(Self::Stop),
            other => bail!("unknown step '{other}', expected setup, start or stop"),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Setup => "setup",
            Self::Start => "start",
            Self::Stop => "stop",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
struct WorkerArgs {
    step: Step,
    payload_path: PathBuf,
}

impl WorkerArgs {
    /// Parse the arguments following the program name.
    fn parse(mut args: impl Iterator<Item = OsString>) -> Result<Self> {
        let step = args
            .next()
            .ok_or_else(|| eyre!("missing step argument"))?
            .to_string_lossy()
            .parse::<Step>()?;
        let payload_path = args
            .next()
            .map(PathBuf::from)
            .ok_or_else(|| eyre!("missing payload path argument"))?;
        if let Some(extra) = args.next() {
            bail!("unexpected argument '{}'", extra.to_string_lossy());
        }
        Ok(Self { step, payload_path })
    }
}

fn read_payload(path: &Path) -> Result<WorkerPayload> {
    let raw = fs::read(path).wrap_err_with(|| format!("reading payload {}", path.display()))?;
    serde_json::from_slice(&raw).wrap_err_with(|| format!("parsing payload {}", path.display()))
}

fn run_step(step: Step, payload: WorkerPayload) -> Result<()> {
    let settings = payload
        .settings
        .into_settings()
        .map_err(|err| Report::new(err).wrap_err("rebuilding PostgreSQL settings"))?;
    apply_environment(payload.environment);

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("building worker runtime")?;
    let mut postgres = PostgreSQL::new(settings);
    runtime
        .block_on(async {
            match step {
                Step::Setup => postgres.setup().await,
                Step::Start => postgres.start().await,
                Step::Stop => postgres.stop().await,
            }
        })
        .wrap_err_with(|| format!("PostgreSQL {step} failed"))
}

#[allow(unsafe_code, reason = "the worker is still single-threaded here")]
fn apply_environment(environment: Vec<(String, Option<PlainSecret>)>) {
    for (key, value) in environment {
        // SAFETY: no other thread exists yet, so nothing reads the
        // environment concurrently.
        unsafe {
            match value {
                Some(value) => env::set_var(&key, value.expose()),
                None => env::remove_var(&key),
            }
        }
    }
}
