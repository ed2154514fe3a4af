use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use provisioning_engine::store::Store;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to load configuration: {0}")]
    Configuration(#[from] config::ConfigError),
    #[error("unable to install prometheus recorder: {0}")]
    Metrics(#[from] BuildError),
    #[error("unable to serialize openapi definition: {0}")]
    OpenApi(#[from] serde_json::Error),
    #[error("server io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Configuration {
    #[serde(default = "Configuration::default_host")]
    pub host: IpAddr,
    #[serde(default = "Configuration::default_port")]
    pub port: u16,
    //
    #[serde(default)]
    pub tracing: crate::service::tracing::Configuration,
    #[serde(default)]
    pub store: provisioning_engine::store::Config,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            tracing: Default::default(),
            store: Default::default(),
        }
    }
}

impl Configuration {
    fn default_host() -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))
    }

    fn default_port() -> u16 {
        3000
    }

    fn address(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }

    pub fn from_path(path: &str) -> Result<Self, Error> {
        tracing::debug!("loading configuration from {path}");
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("PROVISIONING").separator("__"))
            .build()?
            .try_deserialize()
            .map_err(Error::from)
    }
}

pub struct Server {
    socket_address: SocketAddr,
    tracing: crate::service::tracing::Configuration,
    store: Store,
    prometheus_handle: PrometheusHandle,
}

impl Server {
    pub fn new(
        socket_address: SocketAddr,
        tracing: crate::service::tracing::Configuration,
        store: Store,
        prometheus_handle: PrometheusHandle,
    ) -> Self {
        Self {
            socket_address,
            tracing,
            store,
            prometheus_handle,
        }
    }

    pub fn from_config(config: Configuration) -> Result<Self, Error> {
        let prometheus_handle = PrometheusBuilder::new().install_recorder()?;
        Ok(Self::new(
            config.address(),
            config.tracing,
            Store::from(config.store),
            prometheus_handle,
        ))
    }

    pub fn app(self) -> axum::Router {
        use axum::extract::Extension;

        let router = crate::controller::create()
            .layer(Extension(self.store))
            .layer(Extension(Arc::new(self.prometheus_handle)));
        self.tracing.add_layer(router)
    }

    pub async fn run(self) -> Result<(), Error> {
        tracing::info!("starting server on {:?}", self.socket_address);
        let tcp_listener = TcpListener::bind(&self.socket_address).await?;

        axum::serve(tcp_listener, self.app().into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {err:?}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install signal handler: {err:?}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("signal received, starting graceful shutdown");
}
