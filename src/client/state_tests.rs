//! Tests for the serialized client state store.

use std::sync::{Arc, Weak};

use async_trait::async_trait;

use super::state::StateHandle;
use crate::auth::{AuthError, Authenticator};
use crate::transport::{HttpRequest, HttpResponse};

struct NoopAuthenticator;

#[async_trait]
impl Authenticator for NoopAuthenticator {
    fn apply_authorization(&self, _request: &mut HttpRequest) -> Result<(), AuthError> {
        Ok(())
    }

    async fn refresh_authorization(&self, _response: &HttpResponse) -> Result<(), AuthError> {
        Ok(())
    }
}

fn weak(authenticator: &Arc<NoopAuthenticator>) -> Weak<dyn Authenticator> {
    Arc::downgrade(authenticator) as Weak<dyn Authenticator>
}

mod headers {
    use super::*;

    #[tokio::test]
    async fn writes_apply_in_program_order() {
        let state = StateHandle::spawn();

        state.set_header("Accept", Some("text/html".to_string()));
        state.set_header("Accept", Some("application/json".to_string()));
        let snapshot = state.snapshot().await.unwrap();

        assert_eq!(snapshot.headers.get("accept").unwrap(), "application/json");
    }

    #[tokio::test]
    async fn names_are_case_insensitive() {
        let state = StateHandle::spawn();

        state.set_header("X-Token", Some("a".to_string()));
        state.set_header("x-token", Some("b".to_string()));
        let snapshot = state.snapshot().await.unwrap();

        assert_eq!(snapshot.headers.len(), 1);
        assert_eq!(snapshot.headers.get("x-token").unwrap(), "b");
    }

    #[tokio::test]
    async fn none_removes_header() {
        let state = StateHandle::spawn();

        state.set_header("X-Trace", Some("1".to_string()));
        state.set_header("X-TRACE", None);
        let snapshot = state.snapshot().await.unwrap();

        assert!(snapshot.headers.is_empty());
    }

    #[tokio::test]
    async fn clones_share_one_store() {
        let state = StateHandle::spawn();
        let other = state.clone();

        other.set_header("X-From-Clone", Some("yes".to_string()));

        assert!(state.snapshot().await.unwrap().headers.contains_key("x-from-clone"));
    }

    #[tokio::test]
    async fn concurrent_writers_never_lose_updates() {
        let state = StateHandle::spawn();

        let tasks: Vec<_> = (0..16)
            .map(|i| {
                let state = state.clone();
                tokio::spawn(async move {
                    state.set_header(&format!("x-{i}"), Some(i.to_string()));
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(state.snapshot().await.unwrap().headers.len(), 16);
    }
}

mod authenticator {
    use super::*;

    #[tokio::test]
    async fn resolves_while_owner_holds_it() {
        let state = StateHandle::spawn();
        let owner = Arc::new(NoopAuthenticator);

        state.set_authenticator(Some(weak(&owner)));

        assert!(state.snapshot().await.unwrap().authenticator().is_some());
    }

    #[tokio::test]
    async fn dropped_owner_resolves_to_none() {
        let state = StateHandle::spawn();
        let owner = Arc::new(NoopAuthenticator);
        state.set_authenticator(Some(weak(&owner)));

        drop(owner);
        let snapshot = state.snapshot().await.unwrap();

        assert!(snapshot.authenticator.is_some());
        assert!(snapshot.authenticator().is_none());
    }

    #[tokio::test]
    async fn store_does_not_keep_authenticator_alive() {
        let state = StateHandle::spawn();
        let owner = Arc::new(NoopAuthenticator);

        state.set_authenticator(Some(weak(&owner)));
        let _ = state.snapshot().await.unwrap();

        assert_eq!(Arc::strong_count(&owner), 1);
    }

    #[tokio::test]
    async fn none_detaches() {
        let state = StateHandle::spawn();
        let owner = Arc::new(NoopAuthenticator);

        state.set_authenticator(Some(weak(&owner)));
        state.set_authenticator(None);

        assert!(state.snapshot().await.unwrap().authenticator.is_none());
    }
}
