use std::process::Command;

fn main() {
    // `git describe` when building from a checkout, crate version otherwise.
    let version = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| {
            let described = String::from_utf8(o.stdout).ok()?;
            let described = described.trim();
            Some(described.strip_prefix('v').unwrap_or(described).to_string())
        })
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").into());

    println!("cargo:rustc-env=GIT_VERSION={version}");
}
