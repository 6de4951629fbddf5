//! # Mock Framework
//!
//! Utilities for testing store consumers in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_add`] or [`expect_display`] to assert behavior.

use tokio::sync::{mpsc, oneshot};

use crate::actor_framework::{StoreClient, StoreItem};
use crate::messages::StoreRequest;

/// Creates a mock client and a receiver for asserting requests.
///
/// Requests sent through the client arrive on the receiver instead of a running
/// store, so a test can inspect each one and answer it however it likes.
pub fn create_mock_client<T: StoreItem>(buffer_size: usize) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Add request
pub async fn expect_add<T: StoreItem>(receiver: &mut mpsc::Receiver<StoreRequest<T>>) -> Option<(T, oneshot::Sender<usize>)> {
    match receiver.recv().await {
        Some(StoreRequest::Add { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Display request
pub async fn expect_display<T: StoreItem>(receiver: &mut mpsc::Receiver<StoreRequest<T>>) -> Option<oneshot::Sender<Vec<String>>> {
    match receiver.recv().await {
        Some(StoreRequest::Display { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Product>(10);

        let add_task = tokio::spawn(async move {
            client.add_product(Product::new("Test", 1.0)).await
        });

        let (item, responder) = expect_add(&mut receiver).await.expect("Expected Add request");
        assert_eq!(item.name, "Test");
        responder.send(1).unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(result, Ok(1));
    }

    #[tokio::test]
    async fn test_mock_display() {
        let (client, mut receiver) = create_mock_client::<Product>(10);

        let display_task = tokio::spawn(async move { client.display_inventory().await });

        let responder = expect_display(&mut receiver).await.expect("Expected Display request");
        responder.send(vec!["Product Name: Test, Price: $1".to_string()]).unwrap();

        let lines = display_task.await.unwrap().unwrap();
        assert_eq!(lines, vec!["Product Name: Test, Price: $1"]);
    }
}
