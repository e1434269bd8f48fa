use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

const WATCHED: [(&str, &str); 2] = [("templates", "html"), ("assets", "js")];

fn main() {
    for (dir, ext) in WATCHED {
        watch(Path::new(dir), ext);
    }

    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "dev".to_string());
    println!(
        "cargo:rustc-env=ADVOCATES_BUILD_ID={}-{}",
        env!("CARGO_PKG_VERSION"),
        stamp
    );
}

/// Askama compiles templates in, so cargo must be told about each file.
fn watch(dir: &Path, ext: &str) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            watch(&path, ext);
        } else if path.extension().and_then(|s| s.to_str()) == Some(ext) {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}
