use tokio::sync::OnceCell;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument, warn};

use crate::actor_framework::{StoreActor, StoreClient, StoreItem};
use crate::error::StoreError;

pub const DEFAULT_BUFFER_SIZE: usize = 32;

struct StoreInstance<T: StoreItem> {
    client: StoreClient<T>,
    handle: JoinHandle<()>,
}

/// Owner of the one store a program may have.
///
/// The host is created by the program entry point and passed by reference to
/// whoever needs the store. [`StoreHost::get_instance`] starts the store on first
/// use and hands out clients to that same store afterwards; [`StoreHost::construct`]
/// refuses to start a second one.
pub struct StoreHost<T: StoreItem> {
    buffer_size: usize,
    instance: OnceCell<StoreInstance<T>>,
}

impl<T: StoreItem> StoreHost<T> {
    pub fn new(buffer_size: usize) -> Self {
        Self {
            buffer_size,
            instance: OnceCell::new(),
        }
    }

    fn start(&self) -> StoreInstance<T> {
        let (actor, client) = StoreActor::new(self.buffer_size);
        let handle = tokio::spawn(actor.run());
        info!(buffer_size = self.buffer_size, "Store instance started");
        StoreInstance { client, handle }
    }

    /// Returns a client for the store, starting it on the first call.
    pub async fn get_instance(&self) -> StoreClient<T> {
        self.instance
            .get_or_init(|| async { self.start() })
            .await
            .client
            .clone()
    }

    /// Starts the store directly. Fails once a store exists.
    #[instrument(skip(self))]
    pub fn construct(&self) -> Result<StoreClient<T>, StoreError> {
        if self.instance.initialized() {
            warn!("Rejected second store construction");
            return Err(StoreError::AlreadyConstructed);
        }
        let instance = self.start();
        let client = instance.client.clone();
        match self.instance.set(instance) {
            Ok(()) => Ok(client),
            Err(_) => {
                // Lost a race with get_instance; the rejected actor stops once its client drops.
                warn!("Rejected second store construction");
                Err(StoreError::AlreadyConstructed)
            }
        }
    }

    pub fn is_constructed(&self) -> bool {
        self.instance.initialized()
    }

    /// Stops the store, if one was started, and waits for its task to finish.
    pub async fn shutdown(self) -> Result<(), StoreError> {
        let Some(instance) = self.instance.into_inner() else {
            return Ok(());
        };
        info!("Shutting down store...");
        instance.client.shutdown().await?;
        if let Err(e) = instance.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(StoreError::ActorTask(e.to_string()));
        }
        info!("Store shutdown complete.");
        Ok(())
    }
}

impl<T: StoreItem> Default for StoreHost<T> {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_SIZE)
    }
}
