//! Per-file drive loop: normalize → state machine → render → sink.

use crate::normalize::Normalizer;
use crate::parser::BlockMachine;
use crate::render;
use anyhow::Result;
use std::io::Write;

/// Process one source text, streaming rendered sections to `sink`.
///
/// The heading (when given) is written first, then each block's section in
/// source order as soon as its declaration line is seen, then the optional
/// footer. The sink is only ever appended to; a write failure aborts the run
/// and leaves the already-streamed prefix in place.
pub fn assemble<W: Write>(
    input: &str,
    heading: Option<&str>,
    footer: Option<&str>,
    sink: &mut W,
) -> Result<()> {
    let mut normalizer = Normalizer::new();
    let mut machine = BlockMachine::new();

    if let Some(heading) = heading {
        writeln!(sink, "# {}\n", heading)?;
    }

    for raw in input.lines() {
        let line = normalizer.normalize(raw);
        if let Some(done) = machine.feed(&line) {
            let section = render::render_block(&done.block, &done.name, normalizer.dialect());
            sink.write_all(section.as_bytes())?;
        }
    }

    if let Some(footer) = footer {
        writeln!(sink, "{}", footer)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assemble_str(input: &str, heading: Option<&str>, footer: Option<&str>) -> String {
        let mut out = Vec::new();
        assemble(input, heading, footer, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn sections_stream_in_source_order() {
        let input = "\
#!/bin/bash
#/ First helper #/
function first() { :; }
#/ Second helper #/
function second() { :; }
";
        let out = assemble_str(input, None, None);
        let first = out.find("## first()").unwrap();
        let second = out.find("## second()").unwrap();
        assert!(first < second);
    }

    #[test]
    fn heading_precedes_blocks() {
        let input = "#/ Doc #/\nfunction f() { :; }\n";
        let out = assemble_str(input, Some("Math"), None);
        assert!(out.starts_with("# Math\n\n## f()\n"));
    }

    #[test]
    fn footer_lands_after_last_section() {
        let input = "#/ Doc #/\nfunction f() { :; }\n";
        let out = assemble_str(input, None, Some("Generated by blockdoc"));
        assert!(out.ends_with("\nGenerated by blockdoc\n"));
    }

    #[test]
    fn dialect_tags_every_fence_in_the_file() {
        let input = "\
#!/bin/zsh
#/ One #/
function one() { :; }
#/ Two #/
function two() { :; }
";
        let out = assemble_str(input, None, None);
        assert_eq!(out.matches("```zsh\n").count(), 2);
        assert!(!out.contains("```bash"));
    }

    #[test]
    fn undeclared_trailing_block_produces_no_output() {
        let input = "#/\n# Orphan\n#/\n";
        let out = assemble_str(input, None, None);
        assert_eq!(out, "");
    }

    #[test]
    fn indented_and_tabbed_blocks_normalize() {
        let input = "\t#/\n\t#   Wide   summary\n\t#/\n\tfunction deep() { :; }\n";
        let out = assemble_str(input, None, None);
        assert!(out.contains("## deep()"));
        assert!(out.contains("*Wide summary*"));
    }
}
