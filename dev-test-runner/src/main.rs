//! Golden-file runner over `testdata/`.
//!
//! For every `testdata/<name>.json` it generates each target and diffs against
//! `<name>.<ext>.golden`. With `UPDATE_GOLDEN=1` the goldens are rewritten instead.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use disco_typegen::{GoTarget, RustTarget, Target, generate_from_slice};

fn targets() -> [(&'static str, &'static dyn Target); 2] {
    [("go", &GoTarget as &dyn Target), ("rs", &RustTarget as &dyn Target)]
}

fn testdata_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("testdata")
}

fn main() -> Result<()> {
    let update = std::env::var("UPDATE_GOLDEN").is_ok_and(|v| v == "1");
    let dir = testdata_dir();

    let mut fixtures = std::fs::read_dir(&dir)
        .with_context(|| format!("failed to list {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    fixtures.retain(|p| p.extension().is_some_and(|e| e == "json"));
    fixtures.sort();

    let mut failures = 0usize;
    for fixture in &fixtures {
        let input = std::fs::read(fixture)?;
        for (ext, target) in targets() {
            let golden = fixture.with_extension(format!("{ext}.golden"));
            let got = generate_from_slice(&input, target)
                .with_context(|| format!("generation failed for {}", fixture.display()))?;

            if update {
                std::fs::write(&golden, &got)?;
                eprintln!("updated {}", golden.display());
                continue;
            }
            let want = std::fs::read_to_string(&golden)
                .with_context(|| format!("missing golden {}", golden.display()))?;
            if got == want {
                eprintln!("ok      {}", golden.display());
            } else {
                failures += 1;
                eprintln!("FAILED  {}", golden.display());
                print_first_difference(&want, &got);
            }
        }
    }

    if failures > 0 {
        bail!("{failures} golden file(s) differ; rerun with UPDATE_GOLDEN=1 to accept");
    }
    Ok(())
}

fn print_first_difference(want: &str, got: &str) {
    let mismatch = want
        .lines()
        .zip(got.lines())
        .enumerate()
        .find(|(_, (w, g))| w != g);
    match mismatch {
        Some((line, (w, g))) => {
            eprintln!("  line {}:\n    want: {w}\n    got:  {g}", line + 1);
        }
        None => {
            eprintln!(
                "  length differs: want {} lines, got {} lines",
                want.lines().count(),
                got.lines().count()
            );
        }
    }
}
