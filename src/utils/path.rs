//! Path utilities: expand ~ and resolve database names against the config dir.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Resolve `name` against `base` unless it is already absolute (after ~ expansion).
pub fn resolve_in(base: &Path, name: &str) -> PathBuf {
    let p = expand_tilde(name);
    if p.is_absolute() { p } else { base.join(p) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_names_land_in_base() {
        let base = std::env::temp_dir();
        assert_eq!(resolve_in(&base, "dates.sqlite"), base.join("dates.sqlite"));
    }

    #[test]
    fn absolute_names_are_kept() {
        let abs = std::env::temp_dir().join("elsewhere.sqlite");
        let s = abs.to_string_lossy().to_string();
        assert_eq!(resolve_in(Path::new("/unused"), &s), abs);
    }
}
