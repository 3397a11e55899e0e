//! Minimal CLI: discovery document → (go | rust) declarations
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};

use crate::target::{GoTarget, RustTarget, Target};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// flatten a schema document's nested schemas into sorted top-level type declarations
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// emit Go struct declarations
    Go(GenerateOut),
    /// emit serde-ready Rust struct declarations
    Rust(GenerateOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// One or more inputs. May be literal paths, quoted glob patterns, or '-' for stdin
    #[arg(long, short, num_args = 1.., default_value = "-")]
    input: Vec<String>,
}

#[derive(clap::Parser, Debug)]
struct GenerateOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

/// One fully-read input document.
struct Source {
    label: String,
    bytes: Vec<u8>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    /// Read every input to completion before anything is generated.
    fn load_sources(&self) -> Result<Vec<Source>> {
        let mut sources = Vec::new();
        for input in resolve_inputs(&self.input)? {
            let source = match input {
                Input::Stdin => {
                    let mut bytes = Vec::new();
                    std::io::stdin()
                        .read_to_end(&mut bytes)
                        .context("failed to read schema document from stdin")?;
                    Source { label: "<stdin>".to_string(), bytes }
                }
                Input::Path(path) => {
                    let bytes = std::fs::read(&path)
                        .with_context(|| format!("failed to read source file {}", path.display()))?;
                    Source { label: path.to_string_lossy().to_string(), bytes }
                }
            };
            tracing::debug!(input = %source.label, bytes = source.bytes.len(), "loaded input");
            sources.push(source);
        }
        Ok(sources)
    }
}

impl GenerateOut {
    fn run(&self, target: &dyn Target) -> Result<()> {
        let mut chunks = Vec::new();
        for source in self.input_settings.load_sources()? {
            let src = crate::generate_from_slice(&source.bytes, target)
                .with_context(|| format!("failed to generate declarations for {}", source.label))?;
            chunks.push(src);
        }
        let output = chunks.join("\n");

        match self.out.as_ref() {
            Some(out) => {
                if let Some(parent) = out.parent() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create {}", parent.display()))?;
                }
                std::fs::write(out, &output)
                    .with_context(|| format!("failed to write {}", out.display()))?;
            }
            None => print!("{output}"),
        }
        Ok(())
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> Result<()> {
        let (target, settings): (&dyn Target, &GenerateOut) = match &self.cmd {
            Command::Go(settings) => (&GoTarget as &dyn Target, settings),
            Command::Rust(settings) => (&RustTarget as &dyn Target, settings),
        };
        // debug path
        if settings.no_op {
            eprintln!("{self:#?}");
            return Ok(());
        }
        settings.run(target)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, PartialEq)]
enum Input {
    Stdin,
    Path(PathBuf),
}

fn resolve_inputs<I>(patterns: I) -> Result<Vec<Input>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'['))
    }

    let mut out = Vec::<Input>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if pattern == "-" {
            out.push(Input::Stdin);
        } else if has_glob_chars(pattern) {
            let mut matched = glob::glob(pattern)
                .with_context(|| format!("invalid glob pattern: {pattern}"))?
                .collect::<Result<Vec<_>, _>>()?;
            if matched.is_empty() {
                // Pattern was explicitly a glob but matched nothing -> surface as an error
                bail!("glob pattern matched no files: {pattern}");
            }
            matched.sort();
            out.extend(matched.into_iter().map(Input::Path));
        } else {
            out.push(Input::Path(PathBuf::from(pattern)));
        }
    }

    Ok(out)
}
