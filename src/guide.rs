//! User-facing text printed by the binary.

use std::path::Path;

use crate::foundation::config::IconJob;

/// Web converter suggested when the local stack is unusable.
pub const FALLBACK_TOOL_URL: &str = "https://convertio.co/svg-ico/";

/// How to get a build with the rasterizer compiled in.
pub const INSTALL_HINT: &str = "Please install with: cargo install appico --features svg";

/// Install instructions plus the manual conversion recipe, one entry per output line.
pub fn missing_capability_guide(job: &IconJob) -> Vec<String> {
    let out_name = job
        .output()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| job.output().display().to_string());

    vec![
        "Error: Required packages not installed.".to_string(),
        INSTALL_HINT.to_string(),
        String::new(),
        "Alternatively, use an online converter:".to_string(),
        format!("1. Go to {FALLBACK_TOOL_URL}"),
        format!("2. Upload {}", job.input().display()),
        format!("3. Convert and download as {out_name}"),
        format!("4. Save to {}", job.output().display()),
    ]
}

/// Reported when the input SVG does not exist.
pub fn not_found_line(path: &Path) -> String {
    format!("Error: {} not found", path.display())
}

/// Reported after the icon has been written.
pub fn success_line(path: &Path) -> String {
    format!("✓ Icon created successfully: {}", path.display())
}
