use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Required launch CSV columns. A file missing any of them fails the build.
const REQUIRED_HEADERS: [&str; 5] = [
    "Flight Number",
    "Launch Site",
    "class",
    "Payload Mass (kg)",
    "Booster Version Category",
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // The launch CSV is embedded into the WASM binary. SPACEX_LAUNCH_CSV
    // overrides the bundled fixture. A missing file is fatal: there is no
    // dashboard without data.
    let src = env::var("SPACEX_LAUNCH_CSV")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("../fixtures/spacex_launch_dash.csv"));
    if !src.exists() {
        panic!("launch CSV not found at {}", src.display());
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(&src)
        .expect("Failed to open launch CSV");
    let headers = rdr.headers().expect("Failed to read launch CSV headers");
    for required in REQUIRED_HEADERS {
        if !headers.iter().any(|h| h == required) {
            panic!("launch CSV {} is missing column '{}'", src.display(), required);
        }
    }

    fs::copy(&src, Path::new(&out_dir).join("spacex_launch_dash.csv")).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SPACEX_LAUNCH_CSV");
    println!("cargo:rerun-if-changed={}", src.display());
}
