//! Build script for FitPlan
//!
//! Increments build number on each recompilation and embeds build metadata.

use std::fs;
use std::path::Path;

fn main() {
    // Only rerun when src/ files change (not on every cargo build)
    println!("cargo:rerun-if-changed=src");

    // Counter file at the package root, next to Cargo.toml
    let build_number_path = Path::new("build_number.txt");

    let current_build: u64 = if build_number_path.exists() {
        fs::read_to_string(build_number_path)
            .unwrap_or_else(|_| "0".to_string())
            .trim()
            .parse()
            .unwrap_or(0)
    } else {
        0
    };

    // Start at 1 when the counter file is missing or unreadable
    let new_build = current_build + 1;

    fs::write(build_number_path, new_build.to_string())
        .expect("Failed to write build number file");

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    println!("cargo:rustc-env=FITPLAN_BUILD_NUMBER={}", new_build);
    println!("cargo:rustc-env=FITPLAN_BUILD_TIMESTAMP={}", timestamp);
    println!("cargo:warning=FitPlan Build #{} at {}", new_build, timestamp);
}
