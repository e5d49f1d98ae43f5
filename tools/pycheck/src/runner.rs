use std::io::{self, Read};
use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCall {
    pub program: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// `None` when the process was killed by a signal.
    pub status: Option<i32>,
    pub stdout: String,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

pub trait CommandRunner {
    fn run(&self, command: &CommandCall) -> io::Result<CommandResult>;
}

/// The child a runner is currently waiting on, shared with whoever may need to stop it.
#[derive(Debug, Clone, Default)]
pub struct RunningChild {
    slot: Arc<Mutex<Option<Child>>>,
}

impl RunningChild {
    fn lock(&self) -> MutexGuard<'_, Option<Child>> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Kill and reap the running child. Returns `false` if nothing was running.
    pub fn kill(&self) -> bool {
        match self.lock().take() {
            Some(mut child) => {
                let _ = child.kill();
                let _ = child.wait();
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.lock().is_some()
    }
}

/// Spawns the program, capturing stdout and leaving stderr on the terminal.
///
/// The child stays reachable through [`RealCommandRunner::current`] while it
/// runs. A call whose child is killed that way fails with
/// [`io::ErrorKind::Interrupted`].
#[derive(Debug, Default)]
pub struct RealCommandRunner {
    current: RunningChild,
}

impl RealCommandRunner {
    pub fn current(&self) -> RunningChild {
        self.current.clone()
    }
}

impl CommandRunner for RealCommandRunner {
    fn run(&self, command: &CommandCall) -> io::Result<CommandResult> {
        let mut slot = self.current.lock();
        let mut child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;
        let mut pipe = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::other("child stdout was not captured"))?;
        *slot = Some(child);
        drop(slot);

        let reader = thread::spawn(move || {
            let mut buf = Vec::new();
            pipe.read_to_end(&mut buf).map(|_| buf)
        });

        let status = loop {
            let mut slot = self.current.lock();
            let Some(child) = slot.as_mut() else {
                return Err(io::Error::new(
                    io::ErrorKind::Interrupted,
                    format!("{} was stopped before it finished", command.program),
                ));
            };
            match child.try_wait() {
                Ok(Some(status)) => {
                    slot.take();
                    break status;
                }
                Ok(None) => {}
                Err(error) => {
                    if let Some(mut child) = slot.take() {
                        let _ = child.kill();
                        let _ = child.wait();
                    }
                    return Err(error);
                }
            }
            drop(slot);
            thread::sleep(POLL_INTERVAL);
        };

        let stdout = reader
            .join()
            .map_err(|_| io::Error::other("stdout reader panicked"))??;

        Ok(CommandResult {
            status: status.code(),
            stdout: String::from_utf8_lossy(&stdout).to_string(),
        })
    }
}

impl CommandCall {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

/// Check if a command is available on PATH.
pub fn command_exists(name: &str) -> bool {
    which::which(name).is_ok()
}
