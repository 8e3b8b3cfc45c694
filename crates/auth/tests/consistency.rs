//! The active provider list must only ever be observed wholesale: readers
//! racing a reactivation see the old lineup or the new one, never a mix.

use std::sync::Arc;

use async_trait::async_trait;

use authgate_auth::{
    AuthManager, AuthProvider, DetectedUser, LoginField, LoginResult, ProviderSetup,
    RequestContext,
};

/// Accepts activation when the blob names its generation; detection answers
/// with the generation so readers can tell which lineup they hit.
struct GenerationProvider {
    id: String,
    generation: &'static str,
}

#[async_trait]
impl AuthProvider for GenerationProvider {
    fn id(&self) -> &str {
        &self.id
    }

    fn configure(&mut self, config: &[u8]) -> anyhow::Result<ProviderSetup> {
        if config == self.generation.as_bytes() {
            Ok(ProviderSetup::Configured)
        } else {
            Ok(ProviderSetup::Unconfigured)
        }
    }

    async fn detect_user(&self, _ctx: &mut RequestContext) -> anyhow::Result<Option<DetectedUser>> {
        Ok(Some(DetectedUser {
            username: self.generation.to_string(),
            groups: vec![self.id.clone()],
        }))
    }

    async fn login(&self, _ctx: &mut RequestContext) -> anyhow::Result<Option<LoginResult>> {
        Ok(None)
    }

    fn login_fields(&self) -> Vec<LoginField> {
        Vec::new()
    }

    async fn logout(&self, _ctx: &mut RequestContext) -> anyhow::Result<()> {
        Ok(())
    }

    fn supports_mfa(&self) -> bool {
        false
    }
}

fn request_context() -> RequestContext {
    let (parts, _body) = http::Request::builder()
        .uri("/")
        .body(())
        .expect("valid request")
        .into_parts();
    RequestContext::new(parts)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_readers_never_observe_a_mixed_generation() {
    let manager = Arc::new(AuthManager::new());
    for generation in ["blue", "green"] {
        for slot in 0..3 {
            manager
                .register(Box::new(GenerationProvider {
                    id: format!("{generation}-{slot}"),
                    generation,
                }))
                .await;
        }
    }
    manager.activate(b"blue").await.unwrap();

    let blue_ids: Vec<String> = (0..3).map(|slot| format!("blue-{slot}")).collect();
    let green_ids: Vec<String> = (0..3).map(|slot| format!("green-{slot}")).collect();

    let flipper = {
        let manager = manager.clone();
        tokio::spawn(async move {
            for round in 0..100u32 {
                let config: &[u8] = if round % 2 == 0 { b"green" } else { b"blue" };
                manager.activate(config).await.unwrap();
                tokio::task::yield_now().await;
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let manager = manager.clone();
            let blue_ids = blue_ids.clone();
            let green_ids = green_ids.clone();
            tokio::spawn(async move {
                for _ in 0..200 {
                    let ids = manager.active_ids().await;
                    assert!(
                        ids == blue_ids || ids == green_ids,
                        "mixed active list observed: {ids:?}"
                    );

                    let mut ctx = request_context();
                    let user = manager
                        .detect_user(&mut ctx)
                        .await
                        .unwrap()
                        .expect("some provider always matches");
                    // The first provider of the current generation answers;
                    // its id (carried in the groups) must belong to the same
                    // generation as the username.
                    assert!(
                        user.groups[0].starts_with(&user.username),
                        "provider answered for the wrong generation: {user:?}"
                    );
                }
            })
        })
        .collect();

    flipper.await.unwrap();
    for reader in futures::future::join_all(readers).await {
        reader.unwrap();
    }
}
