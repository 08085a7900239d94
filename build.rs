use std::process::Command;

fn main() {
    // Re-run when git state changes
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    println!("cargo:rustc-env=GIT_VERSION={}", git_version());
}

fn git_version() -> String {
    // CI/Docker builds pass the version in; local builds ask git
    if let Ok(version) = std::env::var("GIT_VERSION") {
        if !version.is_empty() {
            return version;
        }
    }

    Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .unwrap_or_else(|| "dev".to_string())
}
