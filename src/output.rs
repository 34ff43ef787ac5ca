//! Writing the rendered README to disk without clobbering existing work.
//!
//! The writer owns the only filesystem side effect of generation. When the target already exists
//! it defers to a [`ConfirmOverwrite`] policy, and a refusal leaves the file exactly as it was.

use crate::error::{Error, Result};
use std::io::{self, BufRead, Write};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What happened to the target file.
pub enum WriteOutcome {
    /// The document was written.
    Written,
    /// The file already existed and the user chose to keep it.
    Declined,
}

/// Decides whether an existing file may be replaced.
pub trait ConfirmOverwrite {
    /// Asks whether `path` may be overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be obtained.
    fn confirm_overwrite(&mut self, path: &Path) -> io::Result<bool>;
}

impl<F> ConfirmOverwrite for F
where
    F: FnMut(&Path) -> io::Result<bool>,
{
    fn confirm_overwrite(&mut self, path: &Path) -> io::Result<bool> {
        self(path)
    }
}

/// Overwrites without asking, for `--force`.
pub struct AlwaysOverwrite;

impl ConfirmOverwrite for AlwaysOverwrite {
    fn confirm_overwrite(&mut self, _path: &Path) -> io::Result<bool> {
        Ok(true)
    }
}

/// Asks a yes/no question on a line-based prompt, defaulting to no.
pub struct PromptConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptConfirm<R, W> {
    #[must_use]
    /// Prompts on `output` and reads the answer from `input`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl PromptConfirm<io::StdinLock<'static>, io::Stderr> {
    #[must_use]
    /// Prompts on stderr and reads the answer from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> ConfirmOverwrite for PromptConfirm<R, W> {
    fn confirm_overwrite(&mut self, path: &Path) -> io::Result<bool> {
        write!(
            self.output,
            "{} already exists. Would you like to write over it? [y/N] ",
            path.display()
        )?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(is_yes(&answer))
    }
}

#[must_use]
/// Interprets a free-text confirmation answer.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Write `contents` to `path`, asking before replacing an existing file.
///
/// # Errors
///
/// Returns an error if confirmation cannot be obtained or the write fails.
pub fn write_readme(
    path: &Path,
    contents: &str,
    confirm: &mut impl ConfirmOverwrite,
) -> Result<WriteOutcome> {
    let io_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    if path.exists() {
        if !confirm.confirm_overwrite(path).map_err(io_error)? {
            tracing::info!(path = %path.display(), "kept existing file");
            return Ok(WriteOutcome::Declined);
        }
        tracing::debug!(path = %path.display(), "overwriting existing file");
    }

    std::fs::write(path, contents).map_err(io_error)?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote README");
    Ok(WriteOutcome::Written)
}

#[cfg(test)]
#[path = "tests/output.rs"]
mod tests;
