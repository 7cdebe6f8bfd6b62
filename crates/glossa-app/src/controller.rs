use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::server::router;
use crate::state::AppState;

/// Application controller for task spawning and lifecycle
pub struct AppController {
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Bind the listener and start serving. Binding happens here so a busy
    /// port fails startup instead of a background task.
    pub async fn spawn_tasks(&self) -> anyhow::Result<JoinSet<anyhow::Result<()>>> {
        let bind = self.state.config.read().await.server.bind.clone();
        let listener = TcpListener::bind(&bind).await?;
        tracing::info!("Listening on http://{}", listener.local_addr()?);

        let mut tasks = JoinSet::new();

        let app = router(self.state.clone());
        let shutdown = self.cancel_token.child_token();
        tasks.spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move { shutdown.cancelled().await })
                .await?;
            tracing::info!("Server stopped");
            Ok::<(), anyhow::Error>(())
        });

        Ok(tasks)
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
