mod cli;
mod output;

use clap::Parser;
use cli::CliArgs;
use log::debug;
use netsnap::platform::{create_lookup, create_source, FileSource, NetstatSource, SourceConfig};
use netsnap::Snapshotter;
use output::{OutputFormatter, SnapshotOutput};

fn main() {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let source: Box<dyn NetstatSource> = match &args.input {
        Some(path) => Box::new(FileSource::new(path)),
        None => create_source(SourceConfig {
            program: args.netstat.clone(),
            shell: args.shell,
        }),
    };
    let mut snapshotter = Snapshotter::new(source, create_lookup());
    let formatter = OutputFormatter::from_cli(&args);

    // Each protocol is its own snapshot; one failing does not hide the others.
    let mut snapshots = Vec::new();
    let mut failed = false;
    for protocol in args.selected_protocols() {
        match snapshotter.snapshot(protocol) {
            Ok(records) => snapshots.push(SnapshotOutput::new(protocol, records)),
            Err(e) => {
                eprintln!("Error: {} snapshot failed: {}", protocol, e);
                failed = true;
            }
        }
    }
    debug!("{} snapshots collected", snapshots.len());

    if let Err(e) = formatter.print(&snapshots) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    if failed {
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}
