use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};

use crate::domain::CatalogItem;
use crate::error::StoreError;
use crate::inventory::Inventory;
use crate::messages::StoreRequest;

/// Bounds for anything the store actor can hold.
pub trait StoreItem: CatalogItem + Clone + Send + 'static {}

impl<T: CatalogItem + Clone + Send + 'static> StoreItem for T {}

// =============================================================================
// 1. THE ACTOR SERVER
// =============================================================================

/// Owns the inventory and serves requests sequentially until shut down or
/// until every client handle is dropped.
pub struct StoreActor<T: StoreItem> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    inventory: Inventory<T>,
}

impl<T: StoreItem> StoreActor<T> {
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            inventory: Inventory::new(),
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    #[instrument(name = "store_actor", skip(self))]
    pub async fn run(mut self) {
        info!("Store starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Add { item, respond_to } => {
                    self.inventory.add(item);
                    debug!(count = self.inventory.len(), "Item added");
                    let _ = respond_to.send(self.inventory.len());
                }
                StoreRequest::List { respond_to } => {
                    let _ = respond_to.send(self.inventory.list().collect());
                }
                StoreRequest::Display { respond_to } => {
                    let _ = respond_to.send(self.inventory.display().collect());
                }
                StoreRequest::GetAll { respond_to } => {
                    let _ = respond_to.send(self.inventory.get_all().to_vec());
                }
                StoreRequest::Count { respond_to } => {
                    let _ = respond_to.send(self.inventory.len());
                }
                StoreRequest::Shutdown => {
                    info!("Store shutting down");
                    break;
                }
            }
        }
        info!(count = self.inventory.len(), "Store stopped");
    }
}

// =============================================================================
// 2. THE CLIENT HANDLE
// =============================================================================

/// Generate client methods with oneshot channel boilerplate and automatic tracing.
macro_rules! store_method {
    (fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $variant:ident) => {
        #[instrument(skip_all)]
        pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, StoreError> {
            debug!("Sending request");
            let (respond_to, response) = oneshot::channel();
            self.sender
                .send(StoreRequest::$variant { $($param,)* respond_to })
                .await
                .map_err(|_| StoreError::ActorCommunication("Actor closed".to_string()))?;
            response
                .await
                .map_err(|_| StoreError::ActorCommunication("Actor dropped".to_string()))
        }
    };
}

/// Cloneable handle to the store actor. Every clone talks to the same store.
pub struct StoreClient<T: StoreItem> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: StoreItem> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self { sender: self.sender.clone() }
    }
}

impl<T: StoreItem> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    store_method!(fn add_product(item: T) -> usize as Add);
    store_method!(fn list() -> Vec<String> as List);
    store_method!(fn display_inventory() -> Vec<String> as Display);
    store_method!(fn get_all() -> Vec<T> as GetAll);
    store_method!(fn count() -> usize as Count);

    /// Asks the actor to stop after the requests already queued.
    #[instrument(skip_all)]
    pub async fn shutdown(&self) -> Result<(), StoreError> {
        self.sender
            .send(StoreRequest::Shutdown)
            .await
            .map_err(|_| StoreError::ActorCommunication("Actor closed".to_string()))
    }

    /// True when both handles reach the same store.
    pub fn same_store(&self, other: &StoreClient<T>) -> bool {
        self.sender.same_channel(&other.sender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;

    #[tokio::test]
    async fn test_store_actor_round_trip() {
        let (actor, client) = StoreActor::<Product>::new(8);
        let handle = tokio::spawn(actor.run());

        assert_eq!(client.add_product(Product::new("Laptop", 1500.0)).await, Ok(1));
        assert_eq!(client.add_product(Product::new("Smartphone", 800.0)).await, Ok(2));

        let names: Vec<String> = client
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|product| product.name)
            .collect();
        assert_eq!(names, vec!["Laptop", "Smartphone"]);
        assert_eq!(
            client.display_inventory().await.unwrap(),
            vec!["Product Name: Laptop, Price: $1500", "Product Name: Smartphone, Price: $800"]
        );
        assert_eq!(client.list().await.unwrap()[1], "Name: Smartphone, Price: $800.00");

        client.shutdown().await.unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_clients_share_one_store() {
        let (actor, client) = StoreActor::<Product>::new(8);
        let handle = tokio::spawn(actor.run());
        let other = client.clone();

        other.add_product(Product::new("Monitor", 300.0)).await.unwrap();
        assert_eq!(client.count().await, Ok(1));
        assert!(client.same_store(&other));

        let (_unrelated_actor, unrelated) = StoreActor::<Product>::new(8);
        assert!(!client.same_store(&unrelated));

        drop(client);
        drop(other);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_requests_fail_after_shutdown() {
        let (actor, client) = StoreActor::<Product>::new(8);
        let handle = tokio::spawn(actor.run());
        client.shutdown().await.unwrap();
        handle.await.unwrap();

        let result = client.count().await;
        assert_eq!(result, Err(StoreError::ActorCommunication("Actor closed".to_string())));
    }
}
