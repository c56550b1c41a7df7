#![allow(dead_code)]

use anyhow::{bail, Context, Result};
use std::net::TcpStream;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

/// How long to wait for a spawned server to accept connections.
const STARTUP_DEADLINE: Duration = Duration::from_secs(5);

/// A `redis-server` child process scoped to a test.
///
/// The process is killed and reaped on drop, so the port is released on
/// every exit path including test panics. Owns the port exclusively; a
/// second fixture on the same port fails to start.
pub struct EmbeddedRedis {
    child: Child,
    port: u16,
}

impl EmbeddedRedis {
    /// Whether a `redis-server` binary is on PATH. Suites should skip
    /// cleanly when it is missing.
    pub fn is_available() -> bool {
        Command::new("redis-server")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Spawns `redis-server` on the given loopback port and waits until it
    /// accepts connections.
    ///
    /// # Errors
    ///
    /// Fails if the process cannot be spawned, exits before listening
    /// (e.g. the port is already bound), or does not come up within the
    /// startup deadline. There is no retry and no fallback port.
    pub fn start(port: u16) -> Result<Self> {
        let mut child = Command::new("redis-server")
            .args([
                "--port",
                &port.to_string(),
                "--bind",
                "127.0.0.1",
                "--save",
                "",
                "--appendonly",
                "no",
            ])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .context("Failed to spawn redis-server")?;

        let deadline = Instant::now() + STARTUP_DEADLINE;

        loop {
            if let Some(status) = child
                .try_wait()
                .context("Failed to poll redis-server status")?
            {
                bail!(
                    "redis-server exited early with {status}; is port {port} already in use?"
                );
            }

            if TcpStream::connect(("127.0.0.1", port)).is_ok() {
                // The probe may have reached a pre-existing listener on this
                // port; only trust it if our child is still running.
                std::thread::sleep(Duration::from_millis(50));
                if let Some(status) = child
                    .try_wait()
                    .context("Failed to poll redis-server status")?
                {
                    bail!(
                        "redis-server exited early with {status}; is port {port} already in use?"
                    );
                }
                return Ok(Self { child, port });
            }

            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                bail!("redis-server did not listen on port {port} within {STARTUP_DEADLINE:?}");
            }

            std::thread::sleep(Duration::from_millis(50));
        }
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl Drop for EmbeddedRedis {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
