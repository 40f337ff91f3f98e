//! Linker setup for the firmware binary.
//!
//! Host builds (tests, `mock`) link nothing special. Firmware builds for a
//! Cortex-M target get `memory.x` on the search path plus the cortex-m-rt
//! and defmt linker scripts.

use std::env;

fn main() {
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");

    let firmware = env::var_os("CARGO_FEATURE_FIRMWARE").is_some();
    let target = env::var("TARGET").unwrap_or_default();
    if !firmware || !target.starts_with("thumb") {
        return;
    }

    println!(
        "cargo:rustc-link-arg-bins=-L{}",
        env::var("CARGO_MANIFEST_DIR").unwrap_or(".".to_string())
    );
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}
