//! Best-effort clickable links when running under the evcxr Jupyter kernel.
//! Outside a notebook host every function here is a no-op; nothing in this
//! module can fail the export that already completed.

use crate::render::escape_xml;
use std::path::Path;

/// True when the process was launched by the evcxr runtime.
fn in_notebook() -> bool {
    std::env::var_os("EVCXR_IS_RUNTIME").is_some()
}

/// Emits clickable HTML links for `paths` via the evcxr display protocol.
/// Paths that cannot be resolved are skipped silently.
pub fn display_file_links(paths: &[&Path]) {
    if !in_notebook() {
        return;
    }
    for path in paths {
        let Ok(abs) = path.canonicalize() else {
            continue;
        };
        let Some(name) = abs.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let href = escape_xml(&abs.display().to_string());
        println!("EVCXR_BEGIN_CONTENT text/html");
        println!("<a href=\"{href}\" target=\"_blank\">{}</a>", escape_xml(name));
        println!("EVCXR_END_CONTENT");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_paths_never_panic() {
        // No host detection here, but the call must stay silent either way.
        display_file_links(&[Path::new("/definitely/not/there.png")]);
    }
}
