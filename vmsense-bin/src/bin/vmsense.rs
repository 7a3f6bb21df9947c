use anyhow::Result;
use clap::Parser;
use log::debug;
use vmsense_core::Detector;

/// CLI arguments for the `vmsense` binary.
///
/// The exit status follows the `systemd-detect-virt` convention: 0 when a
/// virtual machine is detected, 1 when none is.
#[derive(Debug, Parser, Clone)]
#[clap(about = "Detect whether this system runs inside a virtual machine.")]
struct CliArgs {
    /// Print the detection result as JSON.
    #[clap(long = "json")]
    json: bool,
    /// Suppress output; communicate the result via the exit status only.
    #[clap(long = "quiet", short = 'q')]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    vmsense_bin::init_logging()?;
    debug!("starting detection");

    let detection = Detector::new().detect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&detection)?);
    } else if !args.quiet {
        if detection.detected {
            println!("Virtual machine detected: {}", detection.reason);
        } else {
            println!("No virtual machine detected");
        }
    }

    std::process::exit(if detection.detected { 0 } else { 1 });
}
