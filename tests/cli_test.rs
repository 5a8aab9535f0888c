//! CLI and shutdown integration tests.
//!
//! Tests:
//! - CLI help and version output
//! - Graceful shutdown on SIGTERM after emission cycles have run

use std::process::Command;
use std::time::Duration;

/// CLI --help output should show expected options.
#[test]
fn test_cli_help_output() {
    let output = Command::new(env!("CARGO_BIN_EXE_beacon"))
        .arg("--help")
        .output()
        .expect("failed to run");

    let stdout = String::from_utf8_lossy(&output.stdout);

    // Verify the configuration surface is present
    assert!(
        stdout.contains("--statsd-socket"),
        "help should mention --statsd-socket option"
    );
    assert!(
        stdout.contains("--interval-secs"),
        "help should mention --interval-secs option"
    );
    assert!(
        stdout.contains("--log-level"),
        "help should mention --log-level option"
    );
    assert!(
        stdout.contains("--otel-endpoint"),
        "help should mention --otel-endpoint option"
    );
}

/// CLI --version should show version.
#[test]
fn test_cli_version_output() {
    let output = Command::new(env!("CARGO_BIN_EXE_beacon"))
        .arg("--version")
        .output()
        .expect("failed to run");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        stdout.contains("0.1.0"),
        "version output should contain version number: {}",
        stdout
    );
}

/// Graceful shutdown test - the daemon exits cleanly on SIGTERM.
///
/// Binds a stand-in agent socket so cycles succeed, lets the daemon emit for
/// a couple of cycles, then sends SIGTERM and verifies a zero-status exit.
#[cfg(unix)]
#[tokio::test]
async fn test_graceful_shutdown_on_sigterm() {
    use std::os::unix::net::UnixDatagram;
    use std::process::Stdio;
    use tokio::process::Command as TokioCommand;
    use tokio::time::timeout;

    let temp_dir = tempfile::TempDir::new().expect("failed to create temp dir");
    let socket_path = temp_dir.path().join("dsd.socket");
    let receiver = UnixDatagram::bind(&socket_path).expect("failed to bind socket");

    // Start the daemon in the background with a short interval
    let mut child = TokioCommand::new(env!("CARGO_BIN_EXE_beacon"))
        .args([
            "--statsd-socket",
            socket_path.to_str().unwrap(),
            "--interval-secs",
            "1",
        ])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn daemon");

    // Wait long enough for at least one emission cycle
    tokio::time::sleep(Duration::from_secs(2)).await;

    // Send SIGTERM using kill command
    let pid = child.id().expect("no pid");
    let _ = std::process::Command::new("kill")
        .args(["-TERM", &pid.to_string()])
        .status();

    // Wait for clean exit with timeout
    let exit_result = timeout(Duration::from_secs(5), child.wait()).await;

    match exit_result {
        Ok(Ok(status)) => {
            assert!(
                status.success(),
                "daemon should exit cleanly on SIGTERM: {status}"
            );
        }
        Ok(Err(e)) => panic!("failed to wait for child: {}", e),
        Err(_) => {
            // Timeout - daemon didn't respond to SIGTERM, kill it
            child.kill().await.expect("failed to kill");
            panic!("daemon did not respond to SIGTERM within timeout");
        }
    }

    // The stand-in agent should have at least one cycle's datagrams queued
    receiver
        .set_read_timeout(Some(Duration::from_secs(1)))
        .expect("failed to set timeout");
    let mut buf = [0u8; 512];
    let n = receiver.recv(&mut buf).expect("no datagram received");
    assert!(
        std::str::from_utf8(&buf[..n])
            .expect("datagram not utf8")
            .starts_with("containerspod.isthebest:1|c"),
        "first datagram should be the increment"
    );
}
