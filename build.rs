fn main() {
    git_revision::set();
}

mod git_revision {
    use std::env;
    use std::process::Command;

    const GIT_REVISION: &str = "GIT_REVISION";

    pub fn set() {
        println!("cargo:rerun-if-env-changed={GIT_REVISION}");

        if env::var(GIT_REVISION).is_ok() {
            println!("Environment variable {GIT_REVISION} is set. Not setting.");
            return;
        }

        println!("cargo:rustc-env={GIT_REVISION}={}", revision());
    }

    fn revision() -> String {
        let git = |args: &[&str]| {
            Command::new("git")
                .args(args)
                .output()
                .ok()
                .filter(|output| output.status.success())
                .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        };

        match git(&["status", "--porcelain"]) {
            Some(status) if !status.is_empty() => "dirty".to_string(),
            Some(_) => git(&["rev-parse", "HEAD"])
                .filter(|rev| !rev.is_empty())
                .unwrap_or_else(|| "unknown".to_string()),
            None => "unknown".to_string(),
        }
    }
}
