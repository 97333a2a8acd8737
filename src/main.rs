//! Host-side helper: `cargo run` builds the WASM bundle into `static/pkg`
//! and serves `static/` on a local port for manual testing.

use std::process::{Command, Stdio};
use std::{env, thread, time::Duration};

use anyhow::{bail, Context};

const PORT: &str = "8000";

fn main() -> anyhow::Result<()> {
    // Only meaningful on non-wasm targets.
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        return Ok(());
    }

    println!("Building WASM pkg …");
    let status = Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
        .context("wasm-pack not found in PATH (https://rustwasm.github.io/wasm-pack/)")?;
    if !status.success() {
        bail!("wasm-pack finished with errors");
    }

    println!("Serving static/ at http://127.0.0.1:{PORT} …");
    let mut server = Command::new("python3")
        .args(["-m", "http.server", PORT, "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("failed to start http server")?;

    // Keep process alive while the server runs
    loop {
        if let Some(status) = server.try_wait()? {
            bail!("http server exited: {status}");
        }
        thread::sleep(Duration::from_secs(1));
    }
}
