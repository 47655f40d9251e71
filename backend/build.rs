//! Embeds the trunk bundle when one has been built.
//!
//! `trunk build` in `frontend/` writes `index.html`, a JS loader and the
//! `.wasm` module to `frontend/dist`. A complete bundle replaces
//! `static/dist`, which `include_dir!` embeds. A missing or partial bundle is
//! reported as a build warning and the checked-in placeholder page stays.

use std::error::Error;
use std::fs;
use std::path::Path;

const DIST_DIR: &str = "../frontend/dist";
const STATIC_DIR: &str = "static";

fn main() {
    println!("cargo:rerun-if-changed={DIST_DIR}");
    println!("cargo:rerun-if-changed=build.rs");

    let dist = Path::new(DIST_DIR);
    let missing = missing_parts(dist);
    if !missing.is_empty() {
        println!(
            "cargo:warning=frontend bundle at {DIST_DIR} lacks {}; serving the placeholder page (run `trunk build` in frontend/)",
            missing.join(" and ")
        );
        return;
    }

    if let Err(err) = embed(dist, Path::new(STATIC_DIR)) {
        panic!("could not copy {DIST_DIR} into {STATIC_DIR}/dist: {err}");
    }
}

/// Names the bundle parts that trunk should have produced but did not.
fn missing_parts(dist: &Path) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if !dist.join("index.html").is_file() {
        missing.push("index.html");
    }
    if !has_extension(dist, "wasm") {
        missing.push("a .wasm module");
    }
    missing
}

fn has_extension(dir: &Path, ext: &str) -> bool {
    fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .any(|entry| entry.path().extension().is_some_and(|e| e == ext))
        })
        .unwrap_or(false)
}

fn embed(dist: &Path, out: &Path) -> Result<(), Box<dyn Error>> {
    let target = out.join("dist");
    if target.exists() {
        fs::remove_dir_all(&target)?;
    }
    fs::create_dir_all(out)?;
    fs_extra::dir::copy(
        dist,
        out,
        &fs_extra::dir::CopyOptions::new().overwrite(true),
    )?;
    Ok(())
}
