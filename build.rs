use std::env;
use std::path::PathBuf;

const BUNDLE_NAME: &str = "PII Mask OCR Extractor";
const BUNDLE_IDENTIFIER: &str = "com.pii-mask-ocr.app";

fn main() {
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=TESSDATA_PREFIX");

    if target_os == "macos" {
        if let Err(e) = write_macos_plist() {
            println!("cargo:warning=Could not write Info.plist: {}", e);
        }
    }

    match env::var("TESSDATA_PREFIX") {
        Ok(prefix) => println!("cargo:warning=Tesseract language data from {}", prefix),
        Err(_) => println!(
            "cargo:warning=TESSDATA_PREFIX not set, the eng and hin traineddata must be installed system-wide"
        ),
    }
}

fn write_macos_plist() -> std::io::Result<()> {
    let version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.1.0".to_string());

    let plist_content = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleName</key>
    <string>{BUNDLE_NAME}</string>
    <key>CFBundleDisplayName</key>
    <string>{BUNDLE_NAME}</string>
    <key>CFBundleIdentifier</key>
    <string>{BUNDLE_IDENTIFIER}</string>
    <key>CFBundleVersion</key>
    <string>{version}</string>
    <key>CFBundleShortVersionString</key>
    <string>{version}</string>
</dict>
</plist>"#
    );

    let out_dir = env::var("OUT_DIR").map_err(std::io::Error::other)?;
    std::fs::write(PathBuf::from(out_dir).join("Info.plist"), plist_content)
}
