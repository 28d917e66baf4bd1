use std::io;
use std::process;
use tracing_subscriber::EnvFilter;
use volk_probe::SystemVolk;

const LOG_ENV: &str = "VOLK_PROBE_LOG";

fn print_usage() {
    println!("Usage: volk-probe");
    println!();
    println!("Prints the linked libvolk version and available machines, then");
    println!("runs volk_32fc_32f_dot_prod_32fc_u once to confirm it is callable.");
    println!();
    println!("Options:");
    println!("  -h, --help       Show this help");
    println!("  -V, --version    Show the probe version");
    println!();
    println!("Environment:");
    println!("  {LOG_ENV}   tracing filter for stderr logs (default: warn)");
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if let Some(arg) = args.first() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return;
            }
            "--version" | "-V" => {
                println!("volk-probe {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            _ => {}
        }
    }

    init_logging();

    // Packaging harnesses may pass their own arguments; the probe never reads them
    if !args.is_empty() {
        tracing::warn!(?args, "ignoring unknown arguments");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match volk_probe::run(&SystemVolk::new(), &mut out) {
        Ok(report) => {
            tracing::info!(
                version = %report.version,
                machines = report.machines().len(),
                "volk probe passed"
            );
        }
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(e.exit_code());
        }
    }
}
