pub mod environment;
pub mod fs;
pub mod paths;

pub use environment::{get_claude_dir, get_opencode_storage_dir};
pub use fs::{list_files_with_extension, read_json, safe_open_file, validate_file_size};
pub use paths::{encode_project_dir, format_path_with_tilde};
