use std::env;
use std::path::Path;

/// Encodes a working directory into Claude's project directory name
///
/// The leading `/` is dropped and every remaining `/` becomes `-`, with a single
/// `-` prepended.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use session_transcripts::encode_project_dir;
///
/// let path = PathBuf::from("/home/user/projects/myapp");
/// assert_eq!(encode_project_dir(&path), "-home-user-projects-myapp");
/// ```
pub fn encode_project_dir(path: &Path) -> String {
    let path_str = path.to_string_lossy();
    let without_leading_slash = path_str.strip_prefix('/').unwrap_or(&path_str);
    format!("-{}", without_leading_slash.replace('/', "-"))
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use session_transcripts::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/.claude/projects");
/// // Returns "~/.claude/projects" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    // Whole components only: HOME=/home/al must not match /home/alice
    if let Some(home) = home
        && !home.is_empty()
        && let Ok(rest) = path.strip_prefix(home)
    {
        return if rest.as_os_str().is_empty() {
            "~".to_string()
        } else {
            format!("~/{}", rest.to_string_lossy())
        };
    }

    path.to_string_lossy().into_owned()
}
