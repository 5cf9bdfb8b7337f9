use bytes::Bytes;
use std::fmt;

use super::{
    config::Config,
    error::{Error, PreconditionError},
    fs::{DirEntry, EntryKind, ListFlags},
    path,
    session::{RemoteSession, SessionError},
};
use crate::protocol::{literal, Import, ListDir, MkDir, Remove, Request};

pub type ExplorerResult<T> = Result<T, Error>;

#[derive(Debug)]
pub(crate) enum Reply {
    Value(String),
    Output(Bytes),
}

macro_rules! into_reply {
    ($result:expr, $reply:ident) => {
        match $result {
            Reply::$reply(r) => Ok(r),
            _ => Err(Error::UnexpectedBehavior(
                "Reply does not match the request".to_owned(),
            )),
        }
    };
}

pub(crate) use into_reply;

/// High-level explorer for the filesystem of a device running an interactive
/// interpreter.
///
/// Every operation is compiled into expressions and statements for the
/// interpreter. The working directory only exists on this side and is joined
/// into fully-qualified paths for each request.
///
/// The explorer owns the session. It must be released with [`close`] on every
/// path, dropping it only logs a warning.
///
/// [`close`]: RemoteFileExplorer::close
pub struct RemoteFileExplorer<S: RemoteSession> {
    session: Option<S>,
    dir: String,
}

impl<S: RemoteSession> RemoteFileExplorer<S> {
    /// Takes over an open session with the default [`Config`]
    pub async fn new(session: S) -> ExplorerResult<Self> {
        Self::with_config(session, Config::default()).await
    }

    /// Takes over an open session: enters raw mode and imports the modules
    /// listed in `config`. On failure the session is released before the error
    /// is returned.
    pub async fn with_config(mut session: S, config: Config) -> ExplorerResult<Self> {
        if let Err(err) = config.validate() {
            if let Err(close_err) = session.close().await {
                warn!("failed to close session: {}", close_err);
            }
            return Err(err);
        }

        let mut explorer = Self {
            session: Some(session),
            dir: config.working_dir,
        };

        if let Err(err) = explorer.setup(config.imports).await {
            explorer.close().await;
            return Err(err);
        }

        Ok(explorer)
    }

    async fn setup(&mut self, imports: Vec<String>) -> ExplorerResult<()> {
        self.session_mut()?.enter_raw_mode().await?;
        if !imports.is_empty() {
            let _ = self.send(Import::new(imports)).await?;
        }

        debug!("explorer ready in {}", self.dir);
        Ok(())
    }

    /// Leaves raw mode and closes the session.
    ///
    /// Safe to call more than once. A failure to leave raw mode does not keep
    /// the session from being closed, both are only logged.
    pub async fn close(&mut self) {
        let Some(mut session) = self.session.take() else {
            return;
        };

        if let Err(err) = session.exit_raw_mode().await {
            warn!("failed to leave raw mode: {}", err);
        }

        if let Err(err) = session.close().await {
            warn!("failed to close session: {}", err);
        }

        debug!("explorer closed");
    }

    pub fn is_closed(&self) -> bool {
        self.session.is_none()
    }

    fn session_mut(&mut self) -> ExplorerResult<&mut S> {
        self.session.as_mut().ok_or(Error::Closed)
    }

    /// Sends a request and hands back the session's verdict untouched
    async fn dispatch(&mut self, request: Request) -> ExplorerResult<Result<Reply, SessionError>> {
        let session = self.session_mut()?;

        Ok(match request {
            Request::Eval(code) => session.evaluate(&code).await.map(Reply::Value),
            Request::Exec(code) => session.execute(&code).await.map(Reply::Output),
        })
    }

    /// Logs the typed request, so payloads stay out of the log
    pub(crate) async fn send<R>(&mut self, request: R) -> ExplorerResult<Reply>
    where
        R: Into<Request> + fmt::Debug,
    {
        debug!("remote {:?}", request);
        Ok(self.dispatch(request.into()).await??)
    }

    /// Returns the current working directory.
    pub fn pwd(&self) -> &str {
        &self.dir
    }

    /// Changes the working directory. `..` moves one level up, an absolute
    /// target replaces the directory, anything else is appended.
    ///
    /// The target is not checked on the device.
    pub fn cd(&mut self, target: &str) {
        self.dir = path::change_dir(&self.dir, target);
        debug!("cd {}", self.dir);
    }

    /// Returns the fully-qualified path of `name` in the working directory.
    pub fn resolve(&self, name: &str) -> String {
        path::resolve(&self.dir, name)
    }

    /// Names in the working directory in the order the device lists them.
    async fn names(&mut self) -> ExplorerResult<Vec<String>> {
        let reply = self.send(ListDir::new(self.dir.clone())).await?;
        let raw = into_reply!(reply, Value)?;
        Ok(literal::parse_str_list(&raw)?)
    }

    pub(crate) async fn contains(&mut self, name: &str) -> ExplorerResult<bool> {
        Ok(self.names().await?.iter().any(|n| n == name))
    }

    /// Listing a file raises on the device, listing a directory does not.
    async fn probe(&mut self, name: &str) -> ExplorerResult<EntryKind> {
        let request = ListDir::new(self.resolve(name));
        debug!("probe {:?}", request);
        match self.dispatch(request.into()).await? {
            Ok(_) => Ok(EntryKind::Directory),
            Err(SessionError::Remote(_)) => Ok(EntryKind::File),
            Err(err) => Err(err.into()),
        }
    }

    /// Lists the working directory: directories first, then files, each in
    /// device order.
    pub async fn ls_detailed(&mut self, flags: ListFlags) -> ExplorerResult<Vec<DirEntry>> {
        let names = self.names().await?;
        if flags.is_empty() {
            return Ok(Vec::new());
        }

        let mut dirs = Vec::new();
        let mut files = Vec::new();

        for name in names {
            match self.probe(&name).await? {
                EntryKind::Directory if flags.contains(ListFlags::DIRS) => {
                    dirs.push(DirEntry::new(name, EntryKind::Directory));
                }
                EntryKind::File if flags.contains(ListFlags::FILES) => {
                    files.push(DirEntry::new(name, EntryKind::File));
                }
                _ => (),
            }
        }

        dirs.extend(files);
        Ok(dirs)
    }

    /// Same as [`ls_detailed`](Self::ls_detailed) with bare names.
    pub async fn ls(&mut self, flags: ListFlags) -> ExplorerResult<Vec<String>> {
        Ok(self
            .ls_detailed(flags)
            .await?
            .into_iter()
            .map(DirEntry::into_name)
            .collect())
    }

    /// Removes a file from the working directory.
    pub async fn rm(&mut self, name: &str) -> ExplorerResult<()> {
        let path = self.resolve(name);
        if !self.contains(name).await? {
            return Err(PreconditionError::NotFound(path).into());
        }

        let _ = into_reply!(self.send(Remove::new(path)).await?, Value)?;
        Ok(())
    }

    /// Creates a directory in the working directory.
    pub async fn md(&mut self, name: &str) -> ExplorerResult<()> {
        let path = self.resolve(name);
        if self.contains(name).await? {
            return Err(PreconditionError::AlreadyExists(path).into());
        }

        let _ = into_reply!(self.send(MkDir::new(path)).await?, Value)?;
        Ok(())
    }
}

impl<S: RemoteSession> Drop for RemoteFileExplorer<S> {
    fn drop(&mut self) {
        if self.session.is_some() {
            warn!("explorer dropped without close, session left in raw mode");
        }
    }
}
