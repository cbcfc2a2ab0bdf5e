use crate::foundation::error::{GlyphcycleError, GlyphcycleResult};

/// Extract the first path element's `d` attribute from SVG markup.
///
/// This is deliberately not an XML parser: glyph sources are single-path
/// documents, and the only markup construct consumed anywhere in the crate is
/// the first `d="..."` attribute. Multiple paths, transforms, and groups are
/// not interpreted.
pub fn extract_path_data(svg: &str) -> GlyphcycleResult<String> {
    for (quote, needle) in [('"', "d=\""), ('\'', "d='")] {
        let mut search_from = 0;
        while let Some(rel) = svg[search_from..].find(needle) {
            let at = search_from + rel;
            // `find` would also hit the tail of attributes like `id="..."`;
            // require the `d` to start an attribute name.
            let starts_attribute = at == 0
                || svg[..at]
                    .chars()
                    .next_back()
                    .is_some_and(|c| c.is_whitespace());
            if starts_attribute {
                let body_start = at + needle.len();
                let Some(end) = svg[body_start..].find(quote) else {
                    break;
                };
                let body = &svg[body_start..body_start + end];
                if !body.trim().is_empty() {
                    return Ok(body.to_owned());
                }
            }
            search_from = at + needle.len();
        }
    }

    Err(GlyphcycleError::extraction(
        "no path data found in the SVG source",
    ))
}
