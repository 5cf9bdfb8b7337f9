//! In-memory device for tests. Understands exactly the code the explorer
//! emits and keeps a log of every request.

use bytes::Bytes;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    client::session::{RemoteSession, SessionError},
    protocol::literal,
};

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug)]
enum Node {
    Dir,
    File(String),
}

#[derive(Debug, Default)]
struct State {
    // insertion order doubles as the device's listing order
    nodes: Vec<(String, Node)>,
    open: Option<(String, bool)>,
    requests: Vec<String>,
    raw: bool,
    closed: bool,
    fault: Option<String>,
    fail_exit_raw: bool,
}

impl State {
    fn node(&self, path: &str) -> Option<&Node> {
        self.nodes.iter().find(|(p, _)| p == path).map(|(_, n)| n)
    }

    fn is_dir(&self, path: &str) -> bool {
        path == "/" || matches!(self.node(path), Some(Node::Dir))
    }

    fn children(&self, dir: &str) -> Vec<String> {
        self.nodes
            .iter()
            .filter_map(|(p, _)| {
                let (parent, name) = p.rsplit_once('/')?;
                let parent = if parent.is_empty() { "/" } else { parent };
                (parent == dir).then(|| name.to_owned())
            })
            .collect()
    }

    fn parent_is_dir(&self, path: &str) -> bool {
        match path.rsplit_once('/') {
            Some(("", _)) => true,
            Some((parent, _)) => self.is_dir(parent),
            None => false,
        }
    }
}

/// Handle kept by the test while the explorer owns the session
#[derive(Clone, Default)]
pub(crate) struct MockDevice {
    state: Arc<Mutex<State>>,
}

impl MockDevice {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    pub fn with_dir(self, path: &str) -> Self {
        self.lock().nodes.push((path.to_owned(), Node::Dir));
        self
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.lock()
            .nodes
            .push((path.to_owned(), Node::File(content.to_owned())));
        self
    }

    pub fn session(&self) -> MockSession {
        MockSession {
            state: self.state.clone(),
        }
    }

    /// Every later request whose code contains `needle` fails as if the
    /// link dropped
    pub fn fail_on(&self, needle: &str) {
        self.lock().fault = Some(needle.to_owned());
    }

    pub fn fail_exit_raw_mode(&self) {
        self.lock().fail_exit_raw = true;
    }

    pub fn file(&self, path: &str) -> Option<String> {
        match self.lock().node(path) {
            Some(Node::File(content)) => Some(content.clone()),
            _ => None,
        }
    }

    pub fn exists(&self, path: &str) -> bool {
        self.lock().node(path).is_some()
    }

    pub fn is_dir(&self, path: &str) -> bool {
        self.lock().is_dir(path)
    }

    pub fn requests(&self) -> Vec<String> {
        self.lock().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    pub fn is_raw(&self) -> bool {
        self.lock().raw
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }
}

pub(crate) struct MockSession {
    state: Arc<Mutex<State>>,
}

fn remote(msg: &str) -> SessionError {
    SessionError::Remote(format!("Traceback (most recent call last):\r\n{msg}"))
}

fn argument(code: &str, prefix: &str, suffix: &str) -> Option<String> {
    let inner = code.strip_prefix(prefix)?.strip_suffix(suffix)?;
    literal::parse_str_list(&format!("[{inner}]"))
        .ok()
        .and_then(|mut items| (items.len() == 1).then(|| items.remove(0)))
}

impl MockSession {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    fn record(&self, code: &str) -> Result<MutexGuard<'_, State>, SessionError> {
        let mut state = self.lock();
        if state.closed || !state.raw {
            return Err(SessionError::Transport("not in raw mode".to_owned()));
        }
        state.requests.push(code.to_owned());
        if state.fault.as_deref().is_some_and(|f| code.contains(f)) {
            return Err(SessionError::Transport("link lost".to_owned()));
        }
        Ok(state)
    }
}

#[async_trait]
impl RemoteSession for MockSession {
    async fn enter_raw_mode(&mut self) -> Result<(), SessionError> {
        self.lock().raw = true;
        Ok(())
    }

    async fn exit_raw_mode(&mut self) -> Result<(), SessionError> {
        let mut state = self.lock();
        if state.fail_exit_raw {
            return Err(SessionError::Transport("no prompt".to_owned()));
        }
        state.raw = false;
        Ok(())
    }

    async fn execute(&mut self, code: &str) -> Result<Bytes, SessionError> {
        let mut state = self.record(code)?;

        if code.starts_with("import ") {
            return Ok(Bytes::new());
        }

        if let Some(path) = argument(code, "f = open(", ", 'w')") {
            if !state.parent_is_dir(&path) || state.is_dir(&path) {
                return Err(remote("OSError: [Errno 2] ENOENT"));
            }
            state.nodes.retain(|(p, _)| p != &path);
            state.nodes.push((path.clone(), Node::File(String::new())));
            state.open = Some((path, true));
            return Ok(Bytes::new());
        }

        if let Some(path) = argument(code, "f = open(", ", 'r')") {
            if !matches!(state.node(&path), Some(Node::File(_))) {
                return Err(remote("OSError: [Errno 2] ENOENT"));
            }
            state.open = Some((path, false));
            return Ok(Bytes::new());
        }

        if let Some(data) = argument(code, "f.write(", ")") {
            let Some((path, true)) = state.open.clone() else {
                return Err(remote("NameError: name 'f' isn't defined"));
            };
            for (p, node) in &mut state.nodes {
                if *p == path {
                    if let Node::File(content) = node {
                        content.push_str(&data);
                    }
                }
            }
            return Ok(Bytes::new());
        }

        if code == "for l in f: sys.stdout.write(l)," {
            let Some((path, false)) = state.open.clone() else {
                return Err(remote("OSError: [Errno 9] EBADF"));
            };
            return match state.node(&path) {
                Some(Node::File(content)) => Ok(Bytes::from(content.clone())),
                _ => Err(remote("OSError: [Errno 2] ENOENT")),
            };
        }

        if code == "f.close()" {
            state.open = None;
            return Ok(Bytes::new());
        }

        Err(remote("SyntaxError: invalid syntax"))
    }

    async fn evaluate(&mut self, expression: &str) -> Result<String, SessionError> {
        let mut state = self.record(expression)?;

        if let Some(path) = argument(expression, "os.listdir(", ")") {
            if !state.is_dir(&path) {
                return Err(remote("OSError: [Errno 20] ENOTDIR"));
            }
            let names: Vec<String> = state
                .children(&path)
                .iter()
                .map(|n| literal::quote(n))
                .collect();
            return Ok(format!("[{}]", names.join(", ")));
        }

        if let Some(path) = argument(expression, "os.remove(", ")") {
            if !matches!(state.node(&path), Some(Node::File(_))) {
                return Err(remote("OSError: [Errno 2] ENOENT"));
            }
            state.nodes.retain(|(p, _)| p != &path);
            return Ok("None".to_owned());
        }

        if let Some(path) = argument(expression, "os.mkdir(", ")") {
            if state.node(&path).is_some() || !state.parent_is_dir(&path) {
                return Err(remote("OSError: [Errno 17] EEXIST"));
            }
            state.nodes.push((path, Node::Dir));
            return Ok("None".to_owned());
        }

        Err(remote("SyntaxError: invalid syntax"))
    }

    async fn close(&mut self) -> Result<(), SessionError> {
        self.lock().closed = true;
        Ok(())
    }
}
