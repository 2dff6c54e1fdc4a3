//! aslookup - return autonomous system information for IPv4 addresses.
//!
//! This is the command-line interface for the aslookup library.

#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use aslookup::{AsData, AsLookup, Error, Service};
use clap::Parser;
use std::io::{self, BufRead};
use std::time::Duration;

/// Get the version string for aslookup
fn get_version() -> &'static str {
    if cfg!(debug_assertions) {
        concat!(env!("CARGO_PKG_VERSION"), "-UNRELEASED")
    } else {
        env!("CARGO_PKG_VERSION")
    }
}

/// Command-line arguments for the lookup tool.
#[derive(Parser, Debug)]
#[clap(
    author,
    version = get_version(),
    about = "Client to return autonomous system information for IPv4 addresses",
    after_help = "One or more IP addresses may be passed as arguments on the command line. \
                  A list of IP addresses (newline-separated) may also be passed on standard input."
)]
struct Args {
    /// IPv4 address(es) on which to perform AS lookup
    address: Vec<String>,

    /// Service to query
    #[clap(short, long, value_enum, default_value_t = ServiceArg::Shadowserver)]
    service: ServiceArg,

    /// Print descriptive header before output
    #[clap(short = 'H', long)]
    header: bool,

    /// Pause for one second between each query on address list input
    #[clap(short, long)]
    pause: bool,

    /// Display the internal AsData record showing the value of each known field
    #[clap(short, long, conflicts_with = "json")]
    raw: bool,

    /// Output each result as a JSON object
    #[clap(long)]
    json: bool,

    /// Set output verbosity level
    #[clap(short = 'l', long, value_enum, default_value_t = LogLevelArg::Warning)]
    loglevel: LogLevelArg,

    /// Timeout for each DNS query in milliseconds
    #[clap(long, default_value_t = 5000)]
    query_timeout_ms: u64,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ServiceArg {
    Shadowserver,
    Cymru,
}

impl From<ServiceArg> for Service {
    fn from(arg: ServiceArg) -> Self {
        match arg {
            ServiceArg::Shadowserver => Service::Shadowserver,
            ServiceArg::Cymru => Service::Cymru,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LogLevelArg {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevelArg {
    /// Tracing filter directive for this level
    fn filter(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error | Self::Critical => "error",
        }
    }
}

fn main() {
    // Create single-threaded tokio runtime for lower overhead
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create Tokio runtime");

    if let Err(e) = runtime.block_on(async_main()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn async_main() -> Result<()> {
    let args = Args::parse();

    // Logging is configured before the engine is constructed so that
    // engine diagnostics honor the requested level from the first query
    init_logging(args.loglevel);

    let engine =
        AsLookup::new().with_timeout(Duration::from_millis(args.query_timeout_ms));
    let service = Service::from(args.service);

    if args.header {
        println!("{}", "-".repeat(50));
        println!("{:<15}  {}", "IP Address", "AS Information");
        println!("{}", "-".repeat(50));
    }

    // Addresses given as arguments: an invalid address aborts the run.
    // Addresses fed on stdin: every failure goes to stderr and the list
    // keeps processing without interruption.
    let from_args = !args.address.is_empty();
    let inputs: Box<dyn Iterator<Item = io::Result<String>>> = if from_args {
        Box::new(args.address.clone().into_iter().map(Ok))
    } else {
        Box::new(io::stdin().lock().lines())
    };

    for line in inputs {
        let line = line?;
        let addr = line.trim();
        match engine.lookup(addr, service).await {
            Ok(data) => print_result(addr, &data, &args)?,
            Err(Error::AddressFormat(e)) if from_args => {
                anyhow::bail!("[{}] {}", addr, e);
            }
            Err(Error::AddressFormat(e)) => {
                eprintln!("{:<15}  {}", addr, e);
            }
            Err(Error::Lookup(e)) => {
                eprintln!("{:<15}  {}", addr, e);
            }
        }
        if args.pause {
            tokio::time::sleep(Duration::from_secs(1)).await;
        }
    }

    Ok(())
}

/// Print one lookup result in the selected output mode
fn print_result(addr: &str, data: &AsData, args: &Args) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string(data)?);
    } else if args.raw {
        println!("{}", data);
    } else {
        println!(
            "{:<15}  {} | {} | {}",
            addr, data.handle, data.cc, data.as_name
        );
    }
    Ok(())
}

/// Install the stderr tracing subscriber at the requested level
fn init_logging(level: LogLevelArg) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
