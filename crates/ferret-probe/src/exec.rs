//! Bounded process execution
//!
//! The child's stdout and stderr are drained by reader tasks into shared
//! buffers, so whatever was printed before a timeout is still available
//! after the child is killed.
//!
//! On unix the command leads its own process group. `npm run build` runs
//! the real build in a grandchild, so a timeout signals the whole group,
//! not just the direct child.

use crate::BuildCommand;
use parking_lot::Mutex;
use std::io;
use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Output of a process, decoded lossily as UTF-8.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    /// Exit code; `None` when the process was killed by a signal or never
    /// finished.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Reasons a command did not run to completion.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("command timed out after {} seconds", .limit.as_secs())]
    Timeout {
        limit: Duration,
        /// Output captured before the child was killed.
        partial: Box<CapturedOutput>,
    },

    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed waiting for process: {0}")]
    Wait(#[source] io::Error),
}

type Sink = Arc<Mutex<Vec<u8>>>;

/// Run `command` in `cwd`, killing it if it outlives `limit`.
///
/// The limit covers both the process and the draining of its pipes.
pub async fn run_with_timeout(
    command: &BuildCommand,
    cwd: &Path,
    limit: Duration,
) -> Result<CapturedOutput, ExecError> {
    let mut cmd = Command::new(&command.program);
    cmd.args(&command.args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    #[cfg(unix)]
    cmd.process_group(0);

    let mut child = cmd.spawn().map_err(|source| ExecError::Spawn {
        program: command.program.clone(),
        source,
    })?;
    // Read before waiting: `Child::id` is gone once the child is reaped.
    let pid = child.id();

    let stdout: Sink = Arc::default();
    let stderr: Sink = Arc::default();
    let mut readers: Vec<JoinHandle<()>> = Vec::with_capacity(2);
    if let Some(pipe) = child.stdout.take() {
        readers.push(tokio::spawn(pump(pipe, Arc::clone(&stdout))));
    }
    if let Some(pipe) = child.stderr.take() {
        readers.push(tokio::spawn(pump(pipe, Arc::clone(&stderr))));
    }

    let finished = timeout(limit, async {
        let status = child.wait().await?;
        for reader in readers.iter_mut() {
            // A reader only fails if it panicked; its bytes so far are kept.
            let _ = reader.await;
        }
        Ok::<_, io::Error>(status)
    })
    .await;

    match finished {
        Ok(Ok(status)) => Ok(CapturedOutput {
            status: status.code(),
            stdout: decode(&stdout),
            stderr: decode(&stderr),
        }),
        Ok(Err(e)) => {
            stop(&readers);
            Err(ExecError::Wait(e))
        }
        Err(_) => {
            warn!(command = %command, secs = limit.as_secs(), "build timed out, killing");
            kill_tree(&mut child, pid).await;
            stop(&readers);
            Err(ExecError::Timeout {
                limit,
                partial: Box::new(CapturedOutput {
                    status: None,
                    stdout: decode(&stdout),
                    stderr: decode(&stderr),
                }),
            })
        }
    }
}

/// Kill the child and everything it started, then reap the child.
async fn kill_tree(child: &mut Child, pid: Option<u32>) {
    #[cfg(unix)]
    if let Some(pid) = pid.and_then(|pid| i32::try_from(pid).ok()) {
        use nix::sys::signal::{killpg, Signal};
        use nix::unistd::Pid;

        if let Err(e) = killpg(Pid::from_raw(pid), Signal::SIGKILL) {
            debug!(pid, error = %e, "failed to signal process group");
        }
    }
    #[cfg(not(unix))]
    let _ = pid;

    if let Err(e) = child.kill().await {
        warn!(error = %e, "failed to kill timed out process");
    }
}

async fn pump<R: AsyncRead + Unpin>(mut pipe: R, sink: Sink) {
    let mut chunk = [0u8; 8192];
    loop {
        match pipe.read(&mut chunk).await {
            Ok(0) => break,
            Ok(n) => sink.lock().extend_from_slice(&chunk[..n]),
            Err(e) => {
                debug!(error = %e, "pipe read failed");
                break;
            }
        }
    }
}

fn stop(readers: &[JoinHandle<()>]) {
    for reader in readers {
        reader.abort();
    }
}

fn decode(sink: &Sink) -> String {
    String::from_utf8_lossy(&sink.lock()).into_owned()
}
