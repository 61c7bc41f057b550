use std::process::Command;

fn main() {
    let rustc_version = Command::new("rustc")
        .arg("--version")
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .unwrap_or_else(|| "unknown".to_string());

    println!(
        "cargo:rustc-env=WEB420_RUSTC_VERSION={}",
        rustc_version.trim()
    );

    // Resolved driver version, shown by `--version` alongside rustc.
    let driver_version = locked_version("mongodb").unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=WEB420_MONGODB_DRIVER_VERSION={driver_version}");
    println!("cargo:rerun-if-changed=Cargo.lock");
}

fn locked_version(crate_name: &str) -> Option<String> {
    let lock_contents = std::fs::read_to_string("Cargo.lock").ok()?;
    let wanted = format!("name = \"{crate_name}\"");
    let mut lines = lock_contents.lines();
    lines.find(|line| line.trim() == wanted)?;
    lines
        .take_while(|line| !line.trim().is_empty())
        .find_map(|line| line.strip_prefix("version = "))
        .map(|version| version.trim_matches('"').to_string())
}
