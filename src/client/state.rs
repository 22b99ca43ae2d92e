//! Serialized store for the client's mutable state.
//!
//! Default headers and the authenticator reference live in a task that
//! owns them outright. Writers post commands without waiting; readers post
//! a snapshot request and await the reply. Because every command goes
//! through one FIFO inbox, two writes apply in the order they were
//! issued, and a read issued after a write observes it.

use std::collections::BTreeMap;
use std::sync::{Arc, Weak};

use tokio::sync::{mpsc, oneshot};

use crate::auth::Authenticator;

/// Point-in-time copy of the shared state, taken during request build.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Default headers keyed by lowercase name
    pub headers: BTreeMap<String, String>,
    /// Non-owning authenticator reference
    pub authenticator: Option<Weak<dyn Authenticator>>,
}

impl Snapshot {
    /// Resolves the authenticator, if one is attached and still alive.
    pub fn authenticator(&self) -> Option<Arc<dyn Authenticator>> {
        let resolved = self.authenticator.as_ref()?.upgrade();
        if resolved.is_none() {
            tracing::debug!("Authenticator has been dropped; continuing without one");
        }
        resolved
    }
}

#[derive(Debug)]
enum Command {
    SetHeader {
        name: String,
        value: Option<String>,
    },
    SetAuthenticator(Option<Weak<dyn Authenticator>>),
    Snapshot(oneshot::Sender<Snapshot>),
}

/// Handle to the state task.
///
/// The task exits once every handle is dropped.
#[derive(Debug, Clone)]
pub struct StateHandle {
    inbox: mpsc::UnboundedSender<Command>,
}

impl StateHandle {
    /// Spawns the state task on the current Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn spawn() -> Self {
        let (inbox, commands) = mpsc::unbounded_channel();
        tokio::spawn(run(commands));
        Self { inbox }
    }

    /// Sets (`Some`) or removes (`None`) a default header.
    pub fn set_header(&self, name: &str, value: Option<String>) {
        self.post(Command::SetHeader {
            name: name.to_ascii_lowercase(),
            value,
        });
    }

    /// Replaces the authenticator reference; `None` detaches it.
    pub fn set_authenticator(&self, authenticator: Option<Weak<dyn Authenticator>>) {
        self.post(Command::SetAuthenticator(authenticator));
    }

    /// Returns a copy of the current state, or `None` if the task is gone.
    pub async fn snapshot(&self) -> Option<Snapshot> {
        let (reply, response) = oneshot::channel();
        self.inbox.send(Command::Snapshot(reply)).ok()?;
        response.await.ok()
    }

    fn post(&self, command: Command) {
        if self.inbox.send(command).is_err() {
            tracing::warn!("Client state task has stopped; update dropped");
        }
    }
}

async fn run(mut commands: mpsc::UnboundedReceiver<Command>) {
    let mut state = Snapshot::default();

    while let Some(command) = commands.recv().await {
        match command {
            Command::SetHeader { name, value: Some(value) } => {
                state.headers.insert(name, value);
            }
            Command::SetHeader { name, value: None } => {
                state.headers.remove(&name);
            }
            Command::SetAuthenticator(authenticator) => {
                state.authenticator = authenticator;
            }
            Command::Snapshot(reply) => {
                // Receiver gone means the caller stopped waiting.
                let _ = reply.send(state.clone());
            }
        }
    }
}
