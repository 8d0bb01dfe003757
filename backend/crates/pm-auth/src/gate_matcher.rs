//! Decides which requests the access gate runs on. Framework internals and
//! static assets bypass it; API routes never do.

const INTERNAL_SEGMENT: &str = "_next";

const ALWAYS_GATED_PREFIXES: [&str; 2] = ["/api", "/trpc"];

/// Extensions served as static files. `js` is handled separately so that
/// `.json` is not mistaken for a script.
const STATIC_EXTENSIONS: [&str; 19] = [
    "html", "htm", "css", "jpeg", "jpg", "webp", "png", "gif", "svg", "ttf", "woff2", "woff",
    "ico", "csv", "docx", "doc", "xlsx", "xls", "zip",
];

const WEBMANIFEST: &str = "webmanifest";

pub fn gate_applies(path: &str) -> bool {
    if ALWAYS_GATED_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
    {
        return true;
    }

    let first_segment = path.trim_start_matches('/').split('/').next().unwrap_or("");
    if first_segment.starts_with(INTERNAL_SEGMENT) {
        return false;
    }

    !references_static_file(path)
}

fn references_static_file(path: &str) -> bool {
    path.match_indices('.').any(|(i, _)| {
        let after = &path[i + 1..];
        is_script_extension(after)
            || after.starts_with(WEBMANIFEST)
            || STATIC_EXTENSIONS.iter().any(|ext| after.starts_with(ext))
    })
}

fn is_script_extension(after_dot: &str) -> bool {
    after_dot.starts_with("js") && !after_dot[2..].starts_with("on")
}
