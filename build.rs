// Stages the static demo page into `dist/`. The wasm bundle itself comes from
// `wasm-pack build --target web --out-dir static/pkg`.
use fs_extra::dir::CopyOptions;
use std::{fs, path::Path};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let static_dir = Path::new("static");
    if !static_dir.exists() {
        return;
    }
    let out_dir = Path::new("dist");
    if out_dir.exists() {
        fs::remove_dir_all(out_dir).ok();
    }
    if let Err(e) = fs::create_dir_all(out_dir) {
        println!("cargo:warning=could not create dist/: {e}");
        return;
    }

    let options = CopyOptions {
        content_only: true,
        overwrite: true,
        ..CopyOptions::new()
    };
    if let Err(e) = fs_extra::dir::copy(static_dir, out_dir, &options) {
        println!("cargo:warning=could not stage static/ into dist/: {e}");
    }
}
