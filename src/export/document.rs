//! Export and sharing of authored sequences.
//!
//! All exports are produced fully in memory: the host turns an
//! [`ExportDocument`] into a one-shot file download or a clipboard write.
//! The pretty-printed JSON is an exact structural re-serialization of the
//! sequence and doubles as the interchange format for any future importer.

use crate::{
    foundation::error::EdubuilderResult,
    sequence::model::AnimationSequence,
};

/// URL template for shareable embeds, parameterized by sequence id.
pub const EMBED_URL_BASE: &str = "https://edubuilder.ai/animate";

#[derive(Clone, Debug, PartialEq, Eq)]
/// An in-memory downloadable document.
pub struct ExportDocument {
    /// Derived filename including extension.
    pub filename: String,
    /// MIME type for the download.
    pub mime: &'static str,
    /// Document bytes.
    pub bytes: Vec<u8>,
}

/// Pretty-printed JSON dump of a sequence.
#[tracing::instrument(skip(sequence), fields(sequence_id = %sequence.id))]
pub fn to_json_document(sequence: &AnimationSequence) -> EdubuilderResult<ExportDocument> {
    Ok(ExportDocument {
        filename: format!("{}.json", export_file_stem(&sequence.title)),
        mime: "application/json",
        bytes: serde_json::to_vec_pretty(sequence)?,
    })
}

/// Self-contained HTML viewer page embedding the sequence data plus a
/// summary header.
#[tracing::instrument(skip(sequence), fields(sequence_id = %sequence.id))]
pub fn to_standalone_viewer(sequence: &AnimationSequence) -> EdubuilderResult<ExportDocument> {
    let json = serde_json::to_string_pretty(sequence)?;
    let title = escape_html(&sequence.title);
    let description = escape_html(sequence.description.as_deref().unwrap_or(""));
    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
</head>
<body>
    <main>
        <h1>{title}</h1>
        <p>{description}</p>
        <p>
            <strong>Animation Data:</strong> This animation has {total_steps} steps.
            Import the embedded JSON to use it with the EduBuilder Animation Player.
        </p>
        <pre><code>{json}</code></pre>
    </main>
</body>
</html>
"#,
        total_steps = sequence.total_steps,
        json = escape_html(&json),
    );
    Ok(ExportDocument {
        filename: format!("{}.html", export_file_stem(&sequence.title)),
        mime: "text/html",
        bytes: html.into_bytes(),
    })
}

/// Raw pretty JSON for clipboard copy.
pub fn sequence_json(sequence: &AnimationSequence) -> EdubuilderResult<String> {
    Ok(serde_json::to_string_pretty(sequence)?)
}

/// Iframe embed snippet for clipboard copy, built from the fixed share URL
/// template.
pub fn embed_code(sequence_id: &str) -> String {
    format!(
        r#"<iframe src="{EMBED_URL_BASE}/{sequence_id}" width="100%" height="600" frameborder="0" allow="fullscreen"></iframe>"#
    )
}

/// Derive a filename stem from a title: lowercase, whitespace runs collapsed
/// to single hyphens, leading and trailing whitespace dropped. Export accepts
/// unvalidated sequences, so a blank or all-whitespace title falls back to
/// `"animation"` rather than producing an extension-only filename.
pub fn export_file_stem(title: &str) -> String {
    let stem = title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    if stem.is_empty() {
        "animation".to_string()
    } else {
        stem
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/export/document.rs"]
mod tests;
