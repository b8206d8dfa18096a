use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any record must implement to be kept by a [`ResourceActor`].
///
/// Ids are `Ord` so the actor can keep records in id order, which is also
/// creation order because ids come from an increasing generator.
pub trait Entity: Clone + PartialEq + Debug + Send + Sync + 'static {
    type Id: Ord + Copy + Send + Sync + Display + Debug + 'static;

    // --- Custom Actions ---
    type Action: Send + Debug + 'static;
    type Rejection: Send + Debug + 'static;

    /// The id, or `None` if the record has never been persisted.
    fn id(&self) -> Option<Self::Id>;

    fn assign_id(&mut self, id: Self::Id);

    /// Applies a domain-specific change. Runs inside the actor, so the check
    /// and the write cannot interleave with other requests.
    fn handle_action(&mut self, action: Self::Action) -> Result<(), Self::Rejection>;
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Outcome of an action on a record that exists: the updated record, or the
/// entity's reason for refusing it.
pub type ActionOutcome<T> = Result<T, <T as Entity>::Rejection>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Inserts when the record has no id yet, otherwise replaces an existing one.
    Save {
        item: T,
        respond_to: Response<T>,
    },
    /// Runs [`Entity::handle_action`] on the stored record in one step.
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<ActionOutcome<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs until every client handle has been dropped.
    #[instrument(name = "resource_actor", skip(self))]
    pub async fn run(mut self) {
        info!("Store actor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(self.handle_list()));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.get(&id).cloned()));
                }
                ResourceRequest::Save { item, respond_to } => {
                    let _ = respond_to.send(self.handle_save(item));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.handle_action(id, action));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(id));
                }
            }
        }

        info!(record_count = self.store.len(), "Store actor stopped");
    }

    fn handle_list(&self) -> Vec<T> {
        let items: Vec<T> = self.store.values().cloned().collect();
        debug!(record_count = items.len(), "Listed records");
        items
    }

    #[instrument(fields(id = ?item.id()), skip(self, item))]
    fn handle_save(&mut self, mut item: T) -> Result<T, StoreError> {
        let id = match item.id() {
            Some(id) if self.store.contains_key(&id) => id,
            Some(id) => {
                warn!("Refusing to save record that no longer exists");
                return Err(StoreError::NotFound(id.to_string()));
            }
            None => {
                let id = (self.next_id_fn)();
                item.assign_id(id);
                debug!(%id, "Assigned id to new record");
                id
            }
        };

        self.store.insert(id, item.clone());
        Ok(item)
    }

    /// A rejected action leaves the stored record untouched.
    #[instrument(fields(id = %id), skip(self, id))]
    fn handle_action(
        &mut self,
        id: T::Id,
        action: T::Action,
    ) -> Result<ActionOutcome<T>, StoreError> {
        let Some(current) = self.store.get_mut(&id) else {
            return Err(StoreError::NotFound(id.to_string()));
        };

        let mut updated = current.clone();
        match updated.handle_action(action) {
            Ok(()) => {
                *current = updated.clone();
                Ok(Ok(updated))
            }
            Err(rejection) => {
                debug!(?rejection, "Action rejected");
                Ok(Err(rejection))
            }
        }
    }

    fn handle_delete(&mut self, id: T::Id) -> Result<(), StoreError> {
        match self.store.remove(&id) {
            Some(_) => {
                debug!(%id, "Record deleted");
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn call<R>(
        &self,
        request: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| StoreError::Unavailable("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| StoreError::Unavailable("Actor dropped".to_string()))?
    }

    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        self.call(|respond_to| ResourceRequest::List { respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.call(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn save(&self, item: T) -> Result<T, StoreError> {
        self.call(|respond_to| ResourceRequest::Save { item, respond_to }).await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<ActionOutcome<T>, StoreError> {
        self.call(|respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), StoreError> {
        self.call(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }
}
