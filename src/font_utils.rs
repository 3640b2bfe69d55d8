//! Font utility functions

use anyhow::Result;
use std::path::{Path, PathBuf};

const BOLD_CANDIDATES: &[&str] = &[
    // Linux
    "/usr/share/fonts/truetype/msttcorefonts/Arial_Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Bold.ttf",
    // macOS
    "/Library/Fonts/Arial Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

const REGULAR_CANDIDATES: &[&str] = &[
    // Linux
    "/usr/share/fonts/truetype/msttcorefonts/Arial.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    // macOS
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Try to find a usable system font for `family`.
///
/// Candidates whose file name matches the family come first, then every other
/// known face. A bold face is preferred within each group when `bold` is set.
pub fn find_system_font(family: &str, bold: bool) -> Result<PathBuf> {
    find_font_in(family, bold, |path| path.exists())
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

fn matches_family(path: &Path, family: &str) -> bool {
    !family.is_empty()
        && path
            .file_stem()
            .map(|stem| normalize(&stem.to_string_lossy()).contains(family))
            .unwrap_or(false)
}

fn find_font_in(family: &str, bold: bool, exists: impl Fn(&Path) -> bool) -> Result<PathBuf> {
    let faces: Vec<&Path> = if bold {
        BOLD_CANDIDATES.iter().chain(REGULAR_CANDIDATES).map(Path::new).collect()
    } else {
        REGULAR_CANDIDATES.iter().map(Path::new).collect()
    };
    let family = normalize(family);
    let (named, others): (Vec<&Path>, Vec<&Path>) =
        faces.into_iter().partition(|path| matches_family(path, &family));

    named
        .into_iter()
        .chain(others)
        .find(|path| exists(path))
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Could not find a system font. Install Liberation Sans or DejaVu Sans, or pass --font."
            )
        })
}
