use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use tilechess::cli::{Args, Session};
use tilechess::core::{init_logging, TableSettings};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (settings, source) = TableSettings::resolve(args.settings.as_deref());
    init_logging(&settings.log_filter)?;
    source.log();
    info!(
        "[TILECHESS] Starting with {:?} opening, double step {}",
        settings.opening, settings.pawn_double_step
    );

    let mut session = Session::new(settings, args.json);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.script {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("cannot open script {:?}", path))?;
            session.run(BufReader::new(file), &mut out)?;
        }
        None => session.run(io::stdin().lock(), &mut out)?,
    }
    Ok(())
}
