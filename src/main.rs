//! blockdoc — generate Markdown documentation from DocBlock-annotated shell
//! scripts.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `blockdoc < file.sh` writes Markdown to stdout
//! - **file mode**: `blockdoc -o docs libraries/*.sh` writes one `.md` per
//!   source file plus a cross-file `index.md`

mod assemble;
mod model;
mod normalize;
mod parser;
mod render;
mod toc;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "blockdoc",
    about = "Generate Markdown documentation from DocBlock-annotated shell scripts"
)]
struct Cli {
    /// Input files (glob patterns supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Overwrite existing output files
    #[arg(short = 'f', long)]
    force: bool,

    /// Footer text appended once per file after all blocks
    #[arg(long)]
    footer: Option<String>,

    /// Skip writing the cross-file index.md
    #[arg(long)]
    no_toc: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

/// stdin mode: read from stdin, write markdown to stdout. No file heading —
/// there is no file name to derive one from.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let stdout = io::stdout();
    let mut sink = stdout.lock();
    assemble::assemble(&input, None, cli.footer.as_deref(), &mut sink)
}

/// file mode: render each input file to `<output>/<stem>.md`, then the index.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_globs(&cli.files)?;

    let mut index: Vec<(String, String)> = Vec::new();
    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let heading = heading_for(&file_stem(path));
        let out_name = format!("{}.md", file_stem(path));
        let out_path = output_dir.join(&out_name);

        let file = create_output(&out_path, cli.force)?;
        let mut sink = BufWriter::new(file);
        assemble::assemble(&content, Some(&heading), cli.footer.as_deref(), &mut sink)?;
        sink.flush()
            .with_context(|| format!("failed to write {}", out_path.display()))?;

        index.push((heading, out_name));
    }

    if !cli.no_toc {
        let out_path = output_dir.join("index.md");
        let mut file = create_output(&out_path, cli.force)?;
        file.write_all(toc::render_index(&index).as_bytes())
            .with_context(|| format!("failed to write {}", out_path.display()))?;
    }

    Ok(())
}

/// Create an output file, refusing to clobber an existing one without --force.
fn create_output(path: &Path, force: bool) -> Result<fs::File> {
    if path.exists() && !force {
        anyhow::bail!(
            "output file exists: {} (use --force to overwrite)",
            path.display()
        );
    }
    fs::File::create(path).with_context(|| format!("failed to create {}", path.display()))
}

/// File extensions recognized as shell sources when scanning directories.
const SUPPORTED_EXTENSIONS: &[&str] = &["sh", "bash", "zsh"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for supported file types.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // A directory scans non-recursively for supported extensions
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && has_supported_extension(&p) {
                    files.push(p);
                }
            }
            continue;
        }
        // Try as glob
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}

/// Output stem for a source path: "libraries/math.sh" → "math".
fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string()
}

/// Heading for a source stem: extension already stripped, first letter
/// upper-cased. "math" → "Math".
fn heading_for(stem: &str) -> String {
    let mut chars = stem.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_from_sh() {
        assert_eq!(file_stem(Path::new("libraries/math.sh")), "math");
        assert_eq!(file_stem(Path::new("math.sh")), "math");
    }

    #[test]
    fn stem_no_extension() {
        assert_eq!(file_stem(Path::new("Makefile")), "Makefile");
    }

    #[test]
    fn heading_capitalizes_first_letter() {
        assert_eq!(heading_for("math"), "Math");
        assert_eq!(heading_for("string-utils"), "String-utils");
        assert_eq!(heading_for(""), "");
    }

    #[test]
    fn supported_extension_filter() {
        assert!(has_supported_extension(Path::new("a.sh")));
        assert!(has_supported_extension(Path::new("a.zsh")));
        assert!(!has_supported_extension(Path::new("a.rs")));
        assert!(!has_supported_extension(Path::new("script")));
    }
}
