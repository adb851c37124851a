use std::fs;
use std::io;
use std::path::Path;

use anyhow::Result;
use clap_complete::{generate, Shell};
use dgn_cli::build_cli_command;

pub fn generate_completions(shell: Shell, out: Option<&Path>) -> Result<()> {
    let mut cmd = build_cli_command();
    if let Some(path) = out {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(path)?;
        generate(shell, &mut cmd, "dgn", &mut file);
        println!("Wrote {shell:?} completion to {}", path.display());
    } else {
        let stdout = &mut io::stdout();
        generate(shell, &mut cmd, "dgn", stdout);
    }
    Ok(())
}
