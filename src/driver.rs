//! Shared plumbing of the command-line drivers.
use crate::{Error, Result};
use clap::Parser;
use std::ffi::OsString;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Seed used by the drivers to generate their inputs.
pub const SEED: u64 = 0;

#[derive(Parser, Debug)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Number of generated inputs
    #[arg(allow_hyphen_values = true)]
    n: String,
}

/// Parses the command line (program name included) into the input size.
///
/// # Example
/// ```
/// use divconq::driver::parse_size;
/// use divconq::Error;
///
/// assert_eq!(parse_size(["quickhull", "1000"]), Ok(1000));
/// assert_eq!(parse_size(["quickhull"]), Err(Error::InvalidArgumentCount { found: 0 }));
/// assert_eq!(
///     parse_size(["quickhull", "ten"]),
///     Err(Error::InvalidArgumentFormat { value: "ten".to_string() })
/// );
/// ```
pub fn parse_size<I, S>(args: I) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let found = args.len().saturating_sub(1);
    if found != 1 {
        return Err(Error::InvalidArgumentCount { found });
    }
    let raw = args[1].to_string_lossy().into_owned();

    // `--` is clap's end of options marker: it reaches here as a missing value.
    let parsed = Args::try_parse_from(&args).map_err(|_| Error::InvalidArgumentFormat {
        value: raw.clone(),
    })?;

    parsed
        .n
        .trim()
        .parse()
        .map_err(|_| Error::InvalidArgumentFormat { value: raw })
}

/// Usage line of a driver.
pub fn usage(program: &str) -> String {
    format!("Usage: {} <n>", program)
}

/// Prints the usage line and leaves with the exit code matching `error`.
pub fn exit_with_usage(program: &str, error: &Error) -> ! {
    tracing::debug!(%error, "bad command line");
    println!("{}", usage(program));
    std::process::exit(error.exit_code())
}

/// Sends logs to stderr, filtered by `RUST_LOG` (`info` by default).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs `task` `rounds` times, logging the duration of each round, and
/// returns the last result.
///
/// # Example
/// ```
/// use divconq::driver::time_rounds;
///
/// let mut calls = 0;
/// let last = time_rounds("count", 3, || {
///     calls += 1;
///     calls
/// });
///
/// assert_eq!(last, Some(3));
/// assert_eq!(time_rounds("never", 0, || ()), None);
/// ```
pub fn time_rounds<R, F>(label: &str, rounds: usize, mut task: F) -> Option<R>
where
    F: FnMut() -> R,
{
    let mut last = None;
    for round in 0..rounds {
        let start = Instant::now();
        last = Some(task());
        let elapsed = time::Duration::try_from(start.elapsed()).unwrap_or(time::Duration::MAX);
        tracing::info!(round, %elapsed, "{}: {:.6}", label, elapsed.as_seconds_f64());
    }
    last
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_many_arguments() {
        assert_eq!(
            parse_size(["cartesian_tree", "10", "20"]),
            Err(Error::InvalidArgumentCount { found: 2 })
        );
    }

    #[test]
    fn negative_sizes_are_malformed() {
        assert_eq!(
            parse_size(["cartesian_tree", "-5"]),
            Err(Error::InvalidArgumentFormat {
                value: "-5".to_string()
            })
        );
        assert!(matches!(
            parse_size(["cartesian_tree", "1e6"]),
            Err(Error::InvalidArgumentFormat { .. })
        ));
    }

    #[test]
    fn double_dash_is_an_argument() {
        assert_eq!(
            parse_size(["quickhull", "--"]),
            Err(Error::InvalidArgumentFormat {
                value: "--".to_string()
            })
        );
        assert_eq!(
            parse_size(["quickhull", "--", "5"]),
            Err(Error::InvalidArgumentCount { found: 2 })
        );
        assert_eq!(Error::InvalidArgumentFormat { value: "--".into() }.exit_code(), 1);
    }

    #[test]
    fn zero_is_a_valid_size() {
        assert_eq!(parse_size(["cartesian_tree", "0"]), Ok(0));
    }

    #[test]
    fn usage_line() {
        assert_eq!(usage("quickhull"), "Usage: quickhull <n>");
    }
}
