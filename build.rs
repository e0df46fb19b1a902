use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // native builds are fine for the headless scheduler; only nudge about the browser target
    let Ok(output) = Command::new("rustup").args(["target", "list", "--installed"]).output() else {
        return;
    };
    let installed = String::from_utf8_lossy(&output.stdout);
    if !installed.lines().any(|l| l.trim() == "wasm32-unknown-unknown") {
        println!(
            "cargo:warning=wasm32-unknown-unknown target not installed; run `rustup target add wasm32-unknown-unknown` for browser builds"
        );
    }
}
