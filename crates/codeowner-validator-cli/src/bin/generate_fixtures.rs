//! Generate ownership-file fixtures and matching trees for benchmarking.
//!
//! Usage: cargo run --release --bin generate-fixtures --features generate -- [output_dir]
//!
//! Each preset becomes `<output_dir>/<preset>/`, a directory holding a
//! generated tree and its `CODEOWNERS` file, ready for `codeowner-validator -p`.

use codeowner_validator_core::generate::{GeneratorConfig, write_repository};
use std::{
    fs, io,
    path::{Path, PathBuf},
    process::ExitCode,
};

/// Type alias for fixture preset entries.
type PresetEntry = (&'static str, fn() -> GeneratorConfig);

/// Fixture presets - keep in sync with benches/fixtures.rs
const PRESETS: &[PresetEntry] = &[
    ("small", GeneratorConfig::small),
    ("medium", GeneratorConfig::medium),
    ("large", GeneratorConfig::large),
];

fn main() -> ExitCode {
    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("benches/cli/fixtures"));

    if let Err(e) = run(&output_dir) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(output_dir: &Path) -> io::Result<()> {
    for (name, config_fn) in PRESETS {
        let config = config_fn();
        let root = output_dir.join(name);
        fs::create_dir_all(&root)?;
        let files = write_repository(&root, &config)?;
        println!(
            "Generated {} ({} files, {} rules, {} comments)",
            root.display(),
            files.len(),
            config.num_rules,
            config.num_comments
        );
    }

    Ok(())
}
