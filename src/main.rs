use dotenv::dotenv;
use issue_locator::{
    Locator, Result,
    config::{Config, global_config},
    telemetry::setup_logger,
};
use std::{
    env,
    io::{self, BufRead, Write},
    process::ExitCode,
};
use tracing::{info, warn};

fn main() -> color_eyre::Result<ExitCode> {
    dotenv().ok();
    color_eyre::install()?;

    Config::from_env().init()?;
    let config = global_config();
    setup_logger(&config.log)?;

    let args = env::args().skip(1).collect::<Vec<_>>();
    let inputs: Box<dyn Iterator<Item = io::Result<String>>> = if args.is_empty() {
        Box::new(io::stdin().lock().lines())
    } else {
        Box::new(args.into_iter().map(Ok))
    };

    let rejected = run(inputs, &mut io::stdout().lock(), &mut io::stderr().lock())?;

    info!(rejected, "done");
    if should_fail(rejected, config.strict_exit) {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Print one row per valid locator to `out` and one message per rejected
/// input to `errors`. Blank inputs are skipped. Returns the rejected count.
fn run(
    inputs: impl IntoIterator<Item = io::Result<String>>,
    out: &mut impl Write,
    errors: &mut impl Write,
) -> Result<usize> {
    let mut rejected = 0_usize;
    for line in inputs {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        match describe(text) {
            Ok(row) => writeln!(out, "{row}")?,
            Err(err) => {
                warn!(%err, input = %text, "rejected input");
                writeln!(errors, "{err}")?;
                rejected += 1;
            }
        }
    }
    Ok(rejected)
}

const fn should_fail(rejected: usize, strict: bool) -> bool {
    rejected > 0 && strict
}

fn describe(text: &str) -> Result<String> {
    let locator = Locator::new(text)?;
    let id = locator.id()?;
    let kind = locator.kind()?;
    Ok(format!("{id}\t{kind}\t{locator}"))
}
