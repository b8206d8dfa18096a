//! # Mock Framework
//!
//! Utilities for testing code that talks to a store actor without running one.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_get`] or [`expect_action`] to
//! assert each request and script the reply.

use crate::actor_framework::{ActionOutcome, Entity, ResourceClient, ResourceRequest, Response};
use tokio::sync::mpsc;

/// Creates a mock client and a receiver for asserting requests.
///
/// The client sends to a channel the test controls, so replies (including
/// rejections and store failures) can be injected deterministically.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Save request
pub async fn expect_save<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Save { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a custom Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<ActionOutcome<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
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

        let save_task = tokio::spawn(async move { client.save(Product::new("Shampoo", 49.99, 50)).await });

        let (item, responder) = expect_save(&mut receiver).await.expect("Expected Save request");
        assert_eq!(item.name, "Shampoo");
        assert_eq!(item.id, None);
        let mut persisted = item.clone();
        persisted.id = Some(1);
        responder.send(Ok(persisted.clone())).unwrap();

        let result = save_task.await.unwrap();
        assert_eq!(result, Ok(persisted));
    }
}
