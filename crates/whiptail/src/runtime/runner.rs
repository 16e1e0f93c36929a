use crate::error::{DialogError, Result};
use log::{debug, info};
use std::io::{self, BufRead, Write};
use std::process::{Command, Stdio};

/// What the dialog program left behind: its exit code and captured stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOutput {
    /// `None` when the child was killed by a signal.
    pub code: Option<i32>,
    pub stderr: Vec<u8>,
}

impl RawOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

pub trait DialogRunner {
    /// Runs `argv[0]` with the remaining arguments and waits for it to exit.
    fn run(&self, argv: &[String]) -> Result<RawOutput>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner {
    debug: bool,
}

impl ProcessRunner {
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    fn pause_for_inspection(&self, argv: &[String]) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{} ", shell_words::join(argv))?;
        stdout.flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(())
    }
}

impl DialogRunner for ProcessRunner {
    fn run(&self, argv: &[String]) -> Result<RawOutput> {
        let Some((program, args)) = argv.split_first() else {
            return Err(DialogError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                "empty dialog command line",
            )));
        };

        debug!("running {}", shell_words::join(argv));
        if self.debug {
            self.pause_for_inspection(argv)?;
        }

        // whiptail draws on the inherited terminal and reports the result on stderr.
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| DialogError::Spawn {
                program: program.clone(),
                source,
            })?;
        let output = child.wait_with_output().map_err(|source| DialogError::Wait {
            program: program.clone(),
            source,
        })?;

        info!("{program} exited with {}", output.status);
        Ok(RawOutput {
            code: output.status.code(),
            stderr: output.stderr,
        })
    }
}
