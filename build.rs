use std::process::Command;

fn main() {
    // Prefer DAG_LAYOUT_VERSION env (set by CI), fall back to git tag, then the package version.
    let version = std::env::var("DAG_LAYOUT_VERSION")
        .ok()
        .filter(|s| !s.is_empty() && s != "dev")
        .or_else(|| {
            Command::new("git")
                .args(["describe", "--tags", "--always"])
                .output()
                .ok()
                .filter(|o| o.status.success())
                .and_then(|o| String::from_utf8(o.stdout).ok())
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        })
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=DAG_LAYOUT_VERSION={}", version);
    println!("cargo:rerun-if-env-changed=DAG_LAYOUT_VERSION");
}
