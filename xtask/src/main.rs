//! Custom cargo commands for cami.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run each fuzz target briefly

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fuzz targets under fuzz/fuzz_targets.
const FUZZ_TARGETS: &[&str] = &["levenshtein_matching", "query_ranking"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Full suite (markers, bundled data, tests, clippy, rayon build)
  test      Run all Rust tests
  check     Quick check (cargo test + clippy)
  bench     Run benchmarks
  fuzz      Run every fuzz target for 60 seconds (needs cargo-fuzz)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("cami Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking 'Verified by' references...");
    check_verified_by()?;
    println!("✓ Every referenced test exists\n");

    println!("[2/5] Validating bundled dictionary...");
    run_cargo(&[
        "run",
        "--quiet",
        "--bin",
        "cami",
        "--",
        "validate",
        "data/ingredients.json",
        "--reject-duplicates",
    ])?;
    println!("✓ Bundled dictionary is clean\n");

    println!("[3/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[4/5] Running tests with rayon scoring...");
    run_cargo(&["test", "--quiet", "--features", "parallel", "--lib"])?;
    println!("✓ Parallel scoring passes\n");

    println!("[5/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/2] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[2/2] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

fn fuzz() -> Result<()> {
    let root = project_root()?;
    for target in FUZZ_TARGETS {
        println!("fuzzing {}...", target);
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
            .current_dir(&root)
            .status()
            .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;
        if !status.success() {
            bail!("fuzz target {} failed", target);
        }
    }
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Module docs list the tests that guard their invariants as
/// `` - `test_name` (path/to/file.rs) `` or `` - `fuzz_targets/x.rs` ``.
/// Fail if any of those names or files has gone missing.
fn check_verified_by() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");
    let mut checked = 0;

    for entry in walk_rs(&src_dir)? {
        let content = std::fs::read_to_string(&entry)
            .with_context(|| format!("Failed to read {}", entry.display()))?;
        let mut in_block = false;
        for line in content.lines() {
            let line = line.trim_start_matches("//!").trim();
            if line.starts_with("**Verified by**") {
                in_block = true;
                continue;
            }
            if !in_block {
                continue;
            }
            let Some(item) = line.strip_prefix("- ") else {
                in_block = false;
                continue;
            };
            check_reference(&root, item)
                .with_context(|| format!("in {}", entry.display()))?;
            checked += 1;
        }
    }

    if checked == 0 {
        bail!("No 'Verified by' references found under src/");
    }
    Ok(())
}

fn check_reference(root: &Path, item: &str) -> Result<()> {
    let parts: Vec<&str> = item.split('`').collect();
    let name = parts.get(1).copied().unwrap_or_default();

    // `fuzz_targets/x.rs` on its own
    if name.ends_with(".rs") {
        let path = root.join("fuzz").join(name);
        if !path.exists() {
            bail!("{} does not exist", path.display());
        }
        return Ok(());
    }

    // `test_name` (tests/dir/file.rs)
    let file = item
        .split('(')
        .nth(1)
        .and_then(|rest| rest.split(')').next())
        .with_context(|| format!("Malformed reference: {}", item))?;
    let content = std::fs::read_to_string(root.join(file))
        .with_context(|| format!("Referenced file {} is missing", file))?;
    if !content.contains(&format!("fn {}", name)) {
        bail!("{} no longer defines {}", file, name);
    }
    Ok(())
}

fn walk_rs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(walk_rs(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    Ok(files)
}
