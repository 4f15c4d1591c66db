//! Fixed names and derived paths for a bootstrap run
//!
//! Every path the pipeline touches is rooted at one working directory, held
//! by [`BootstrapEnv`]. The command names for the client check and the build
//! toolchain default to the standard tools but can be overridden through
//! `MOOSTRAP_CLIENT`, `MOOSTRAP_CONFIGURE` and `MOOSTRAP_MAKE` for
//! nonstandard hosts.

use std::env;
use std::path::{Path, PathBuf};

/// Client utility checked before anything else; the served world is reached
/// over telnet, so a missing client means the environment is useless.
pub const DEFAULT_CLIENT: &str = "telnet";

/// Configure script of the server source tree, relative to the tree root.
pub const DEFAULT_CONFIGURE: &str = "./configure";

/// Build tool driving the compilation.
pub const DEFAULT_MAKE: &str = "make";

/// Source archive expected in the working directory.
pub const ARCHIVE_NAME: &str = "LambdaMOO-1.8.1-FileIO.tar.gz";

/// Directory the archive unpacks to.
pub const TREE_NAME: &str = "MOO-1.8.1";

/// Build-configuration header of the FileIO extension, relative to the tree.
pub const FILEIO_HEADER: &str = "fileio.h";

/// Placeholder data-directory path the extension ships with.
pub const DATA_DIR_PLACEHOLDER: &str = "files/";

/// Runtime data directory, relative to the working directory.
pub const DATA_DIR: &str = "files";

/// Per-user upload area the extension expects under the data directory.
pub const USERS_SUBDIR: &str = "Users";

/// Executable the build produces, relative to the tree.
pub const EXECUTABLE: &str = "moo";

/// Stable entry point published in the working directory.
pub const LINK_NAME: &str = "moo";

/// Paths and command names for one bootstrap run.
#[derive(Debug, Clone)]
pub struct BootstrapEnv {
    root: PathBuf,
    client_cmd: String,
    configure_cmd: String,
    make_cmd: String,
}

impl BootstrapEnv {
    /// Environment rooted at `root` with the default command names.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            client_cmd: DEFAULT_CLIENT.to_string(),
            configure_cmd: DEFAULT_CONFIGURE.to_string(),
            make_cmd: DEFAULT_MAKE.to_string(),
        }
    }

    /// Environment for the current working directory, honoring the
    /// `MOOSTRAP_*` command overrides.
    pub fn from_current_dir() -> std::io::Result<Self> {
        let mut bootstrap = Self::new(env::current_dir()?);
        if let Ok(cmd) = env::var("MOOSTRAP_CLIENT") {
            bootstrap.client_cmd = cmd;
        }
        if let Ok(cmd) = env::var("MOOSTRAP_CONFIGURE") {
            bootstrap.configure_cmd = cmd;
        }
        if let Ok(cmd) = env::var("MOOSTRAP_MAKE") {
            bootstrap.make_cmd = cmd;
        }
        Ok(bootstrap)
    }

    /// Override the client command name.
    pub fn with_client_cmd(mut self, cmd: impl Into<String>) -> Self {
        self.client_cmd = cmd.into();
        self
    }

    /// Override the configure command name.
    pub fn with_configure_cmd(mut self, cmd: impl Into<String>) -> Self {
        self.configure_cmd = cmd.into();
        self
    }

    /// Override the make command name.
    pub fn with_make_cmd(mut self, cmd: impl Into<String>) -> Self {
        self.make_cmd = cmd.into();
        self
    }

    /// Working directory everything is rooted at.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn client_cmd(&self) -> &str {
        &self.client_cmd
    }

    pub fn configure_cmd(&self) -> &str {
        &self.configure_cmd
    }

    pub fn make_cmd(&self) -> &str {
        &self.make_cmd
    }

    /// Source archive in the working directory.
    pub fn archive_path(&self) -> PathBuf {
        self.root.join(ARCHIVE_NAME)
    }

    /// Root of the extracted source tree.
    pub fn tree_path(&self) -> PathBuf {
        self.root.join(TREE_NAME)
    }

    /// FileIO build-configuration header inside the tree.
    pub fn header_path(&self) -> PathBuf {
        self.tree_path().join(FILEIO_HEADER)
    }

    /// Absolute runtime data directory the header gets patched to.
    pub fn data_dir(&self) -> PathBuf {
        self.root.join(DATA_DIR)
    }

    /// Per-user upload area under the data directory.
    pub fn users_dir(&self) -> PathBuf {
        self.data_dir().join(USERS_SUBDIR)
    }

    /// Executable the build is expected to produce.
    pub fn built_executable(&self) -> PathBuf {
        self.tree_path().join(EXECUTABLE)
    }

    /// Published entry point in the working directory.
    pub fn link_path(&self) -> PathBuf {
        self.root.join(LINK_NAME)
    }
}
