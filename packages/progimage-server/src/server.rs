use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::router::build_router;
use crate::storage::build_store;
use crate::AppState;

/// 画像配信サーバ
pub struct ImageServer {
    config: ServerConfig,
    state: AppState,
}

impl ImageServer {
    /// 設定からストレージを選択してサーバを作成する
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let store = build_store(&config)?;
        Ok(Self {
            config,
            state: AppState::new(store),
        })
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Router を作成する（テスト用）
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone(), self.config.max_body_bytes)
    }

    /// Ctrl-C を受け取るまで待ち受ける
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(addr = %self.config.bind_addr, "listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
