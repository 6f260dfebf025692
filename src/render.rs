//! Markdown rendering for completed DocBlocks.

use crate::model::DocBlock;

/// Render one finished block as a Markdown section.
///
/// Groups are separated by blank lines and the returned string ends with one,
/// so sections can be streamed back-to-back into the same sink.
pub fn render_block(block: &DocBlock, name: &str, lang: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("## {}()", name));
    lines.push(String::new());

    lines.push(format!("```{}", lang));
    lines.push(format!("{}() ", name));
    lines.push("```".to_string());
    lines.push(String::new());

    if !block.summary.is_empty() {
        lines.push(format!("*{}*", block.summary));
        lines.push(String::new());
    }

    if !block.description.is_empty() {
        lines.push(block.description.join(" "));
        lines.push(String::new());
    }

    if !block.params.is_empty() {
        render_param_table(&mut lines, block);
        lines.push(String::new());
    }

    if let Some((_, value)) = block.properties.iter().find(|(n, _)| n == "return") {
        lines.push(render_return(value));
        lines.push(String::new());
    }

    let rest: Vec<String> = block
        .properties
        .iter()
        .filter(|(n, _)| n != "return")
        .map(|(n, v)| format!("{}: {}", n, v))
        .collect();
    if !rest.is_empty() {
        lines.push(format!("*{}*", rest.join(", ")));
        lines.push(String::new());
    }

    lines.join("\n") + "\n"
}

/// Two-column pipe table, no header row. Every cell is padded to its
/// column's maximum width so the pipes align.
fn render_param_table(lines: &mut Vec<String>, block: &DocBlock) {
    let rows: Vec<(String, &str)> = block
        .params
        .iter()
        .map(|p| (format!("{} ({})", p.name, p.type_name), p.description.as_str()))
        .collect();

    let key_width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let val_width = rows.iter().map(|(_, v)| v.chars().count()).max().unwrap_or(0);

    for (key, val) in &rows {
        lines.push(format!("| {:<key_width$} | {:<val_width$} |", key, val));
    }
}

/// `int Sum of both numbers` → `**return (int)** - Sum of both numbers`.
/// The value splits at its first whitespace; a bare value is all type.
fn render_return(value: &str) -> String {
    let (rtype, rest) = match value.split_once(' ') {
        Some((rtype, rest)) => (rtype, rest),
        None => (value, ""),
    };
    format!("**return ({})** - {}", rtype, rest)
}
