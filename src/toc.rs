//! Cross-file index assembly.

/// Render the `index.md` contents for a set of generated documents.
///
/// `entries` holds `(heading, output file name)` pairs in processing order.
pub fn render_index(entries: &[(String, String)]) -> String {
    let mut out = String::from("# Index\n\n");
    for (title, file) in entries {
        out.push_str(&format!("* [{}]({})\n", title, file));
    }
    out
}
