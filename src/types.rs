use std::fmt;

/// A single filesystem change as seen by the reactor.
///
/// `path` is relative to the watch root and always uses forward slashes, so
/// the suffix and substring rules behave the same on every platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChangeEvent {
    pub path: String,
    pub is_directory: bool,
}

impl FileChangeEvent {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_directory: false,
        }
    }

    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_directory: true,
        }
    }
}

/// An external tool invocation: program name plus fixed leading arguments.
///
/// The formatter gets the changed path appended at call time; the builder is
/// always run as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new<P, I, S>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Same command with one extra trailing argument.
    pub fn with_arg(&self, arg: impl Into<String>) -> Self {
        let mut cmd = self.clone();
        cmd.args.push(arg.into());
        cmd
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
