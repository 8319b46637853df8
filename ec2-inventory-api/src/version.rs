// Version information module

use std::fs;

/// Version from a `VERSION` file next to the working directory, falling
/// back to the crate version.
pub fn get_api_version() -> String {
    for path in ["VERSION", "../VERSION"] {
        if let Ok(contents) = fs::read_to_string(path) {
            let v = contents.trim();
            if !v.is_empty() {
                return v.to_string();
            }
        }
    }
    env!("CARGO_PKG_VERSION").to_string()
}

#[derive(Debug, serde::Serialize)]
pub struct VersionInfo {
    pub api_version: String,
    pub build_time: String,
}

pub fn get_version_info() -> VersionInfo {
    VersionInfo {
        api_version: get_api_version(),
        build_time: chrono::Utc::now()
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
    }
}
