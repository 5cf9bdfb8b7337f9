//! Moving text files between the local machine and the device.
//!
//! Content is sent one line at a time as escaped literals and read back
//! through the interpreter's captured stdout. Binary transfer is refused
//! before anything reaches the session.

use std::path::{Path, PathBuf};
use tokio::fs;

use super::{
    error::{Error, PreconditionError},
    explorer::{into_reply, ExplorerResult, RemoteFileExplorer, Reply},
    fs::ListFlags,
    pattern::Pattern,
    session::RemoteSession,
};
use crate::{
    protocol::{Close, Open, OpenMode, ReadLines, Write},
    utils,
};

const BINARY_UNSUPPORTED: &str = "Binary mode not implemented";

fn ensure_text(binary: bool) -> ExplorerResult<()> {
    if binary {
        return Err(Error::Unsupported(BINARY_UNSUPPORTED));
    }

    Ok(())
}

fn file_name(path: &Path) -> ExplorerResult<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(ToOwned::to_owned)
        .ok_or_else(|| Error::IO(format!("No file name in '{}'", path.display())))
}

impl<S: RemoteSession> RemoteFileExplorer<S> {
    /// Writes `lines` to a remote file, replacing its content. Each line is
    /// written as is, so line endings have to be part of the items.
    pub async fn puts<I, T>(&mut self, dst: &str, lines: I) -> ExplorerResult<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let path = self.resolve(dst);
        let _ = into_reply!(self.send(Open::new(path, OpenMode::Write)).await?, Output)?;

        for line in lines {
            if let Err(err) = self.send(Write::new(line.as_ref())).await {
                self.release_handle().await;
                return Err(err);
            }
        }

        let _ = self.send(Close).await?;
        Ok(())
    }

    /// Closes the remote handle after a failed transfer. A second failure is
    /// only logged, the first one is what the caller gets.
    async fn release_handle(&mut self) {
        if let Err(err) = self.send(Close).await {
            warn!("failed to close remote file: {}", err);
        }
    }

    /// Reads a remote file from the working directory.
    pub async fn gets(&mut self, src: &str) -> ExplorerResult<String> {
        let path = self.resolve(src);
        if !self.contains(src).await? {
            return Err(PreconditionError::NotFound(path).into());
        }

        let _ = into_reply!(self.send(Open::new(path.as_str(), OpenMode::Read)).await?, Output)?;
        let output = match self.send(ReadLines).await {
            Ok(reply) => into_reply!(reply, Output)?,
            Err(err) => {
                self.release_handle().await;
                return Err(err);
            }
        };
        let _ = self.send(Close).await?;

        String::from_utf8(output.to_vec())
            .map_err(|_| Error::UnexpectedBehavior(format!("'{path}' is not a text file")))
    }

    /// Uploads a local text file. The remote name defaults to the file name
    /// of `src`.
    pub async fn put<P: AsRef<Path>>(
        &mut self,
        src: P,
        dst: Option<&str>,
        binary: bool,
    ) -> ExplorerResult<()> {
        ensure_text(binary)?;

        let src = src.as_ref();
        let dst = match dst {
            Some(dst) => dst.to_owned(),
            None => file_name(src)?,
        };

        let content = fs::read_to_string(src).await?;
        debug!("put {} -> {} ({} bytes)", src.display(), dst, content.len());

        self.puts(&dst, utils::split_lines(&content)).await
    }

    /// Downloads a remote file. The local path defaults to `src` relative to
    /// the current local directory.
    pub async fn get<P: AsRef<Path>>(
        &mut self,
        src: &str,
        dst: Option<P>,
        binary: bool,
    ) -> ExplorerResult<()> {
        ensure_text(binary)?;

        let dst = dst.map_or_else(|| PathBuf::from(src), |p| p.as_ref().to_path_buf());
        let content = self.gets(src).await?;
        debug!("get {} -> {} ({} bytes)", src, dst.display(), content.len());

        fs::write(&dst, content).await?;
        Ok(())
    }

    /// Size in bytes of a remote file. The whole file is transferred to find
    /// out.
    pub async fn size(&mut self, name: &str) -> ExplorerResult<usize> {
        Ok(self.gets(name).await?.len())
    }

    /// Removes every file in the working directory whose name matches
    /// `pattern`.
    pub async fn mrm(&mut self, pattern: &str, verbose: bool) -> ExplorerResult<()> {
        let pattern = Pattern::new(pattern)?;
        let files = self.ls(ListFlags::FILES).await?;

        for name in files.iter().filter(|n| pattern.matches(n)) {
            if verbose {
                info!(" * rm {}", name);
            }

            self.rm(name).await?;
        }

        Ok(())
    }

    /// Uploads every regular file in `src_dir` whose name matches `pattern`,
    /// in name order.
    pub async fn mput<P: AsRef<Path>>(
        &mut self,
        src_dir: P,
        pattern: &str,
        verbose: bool,
        binary: bool,
    ) -> ExplorerResult<()> {
        ensure_text(binary)?;

        let pattern = Pattern::new(pattern)?;
        let src_dir = src_dir.as_ref();

        let mut names = Vec::new();
        let mut entries = fs::read_dir(src_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(name) => {
                    warn!("skipping non UTF-8 file name {:?}", name);
                    continue;
                }
            };

            if !pattern.matches(&name) {
                continue;
            }

            // symlinks are followed, dangling ones are not regular files
            match fs::metadata(entry.path()).await {
                Ok(metadata) if metadata.is_file() => names.push(name),
                Ok(_) => (),
                Err(err) => debug!("skipping {}: {}", name, err),
            }
        }
        names.sort();

        for name in &names {
            if verbose {
                info!(" * put {}", name);
            }

            self.put(src_dir.join(name), Some(name.as_str()), binary).await?;
        }

        Ok(())
    }

    /// Downloads every file in the working directory whose name matches
    /// `pattern` into `dst_dir`.
    pub async fn mget<P: AsRef<Path>>(
        &mut self,
        dst_dir: P,
        pattern: &str,
        verbose: bool,
        binary: bool,
    ) -> ExplorerResult<()> {
        ensure_text(binary)?;

        let pattern = Pattern::new(pattern)?;
        let dst_dir = dst_dir.as_ref();
        let files = self.ls(ListFlags::FILES).await?;

        for name in files.iter().filter(|n| pattern.matches(n)) {
            if verbose {
                info!(" * get {}", name);
            }

            self.get(name, Some(dst_dir.join(name)), binary).await?;
        }

        Ok(())
    }
}
