use std::io::Write;

use clap::Parser;

use vibo_cli::{Cli, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    vibo_observability::tracing::init(cli.log_format);

    if let Some(text) = run(&cli.command)? {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
