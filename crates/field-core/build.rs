// File: crates/field-core/build.rs
// Summary: Link the Windows system libraries Skia/ICU pull in for the raster renderer.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW (ICU data lookup)
        println!("cargo:rustc-link-lib=advapi32");
    }
}
