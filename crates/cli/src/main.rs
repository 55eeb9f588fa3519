use anyhow::{Result, bail};
use argsnap::{ArgSnapshot, Scalar};
use tracing_subscriber::{EnvFilter, fmt};

const USAGE: &str = "\
argsnap - inspect an argument vector as a typed snapshot

Usage: argsnap [TOKENS]...
       argsnap --probe=<NAME> [--fallback=<VALUE>] [--level=<LEVEL>] [TOKENS]...

The whole invocation is parsed into one snapshot: --name sets a boolean,
--name=value stores a coerced scalar, -abc sets one boolean per letter,
and every other token is ignored.

With no --probe, the snapshot is printed to stdout as a JSON object in
declaration order.

Options:
  --probe=<NAME>      Resolve one name and print its value as JSON
  --fallback=<VALUE>  Default used when the probed name is missing
  --level=<LEVEL>     Accessor to resolve with: permissive (default),
                      strict, or strict-error
  --pretty            Pretty-print the JSON dump
  -h, --help          Print this help text
  --version           Print version
";

fn main() -> Result<()> {
    init_tracing();
    let args = ArgSnapshot::from_env();

    if flag_set(&args, "help") || flag_set(&args, "h") {
        print!("{USAGE}");
        return Ok(());
    }
    if flag_set(&args, "version") {
        println!("argsnap {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    match args.get("probe") {
        Some(Scalar::Str(name)) => probe(&args, name),
        Some(other) => bail!("probe name must be a string (got {})", other.type_name()),
        None => dump(&args),
    }
}

/// Resolve one name through the accessor selected by `--level` and print
/// the result as JSON.
fn probe(args: &ArgSnapshot, name: &str) -> Result<()> {
    tracing::debug!("probing argument '{name}'");

    let fallback = args.get("fallback").cloned();
    let level = args.permissive("level", "permissive");
    let level = match level.as_ref().and_then(|v| v.as_str()) {
        Some(level) => level,
        None => bail!("--level takes a name: permissive, strict, or strict-error"),
    };

    let resolved = match level {
        "permissive" => args.permissive(name, fallback),
        "strict" => args.strict(name, fallback)?,
        "strict-error" => args.strict_error(name, fallback)?,
        other => bail!("unknown --level: {other} (expected permissive, strict, or strict-error)"),
    };

    match resolved {
        Some(value) => println!("{}", serde_json::to_string(&value)?),
        None => println!("null"),
    }
    Ok(())
}

fn dump(args: &ArgSnapshot) -> Result<()> {
    tracing::debug!("dumping {} snapshot entries", args.len());

    let text = if flag_set(args, "pretty") {
        serde_json::to_string_pretty(args)?
    } else {
        serde_json::to_string(args)?
    };
    println!("{text}");
    Ok(())
}

fn flag_set(args: &ArgSnapshot, name: &str) -> bool {
    args.permissive(name, false)
        .and_then(|value| value.as_bool())
        .unwrap_or(false)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
