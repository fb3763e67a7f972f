use agentos_core::config::Config;
use agentos_core::status::ServiceHealth;
use std::time::Duration;

/// Best-effort reachability checks for the design tool and the app dev
/// server. Every probe finishes within the configured timeout.
#[derive(Debug, Clone)]
pub struct ServiceProber {
    client: reqwest::Client,
    host: String,
    timeout: Duration,
    design_port: u16,
    app_port: u16,
}

impl ServiceProber {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let timeout = config.probe.timeout();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .no_proxy()
            .build()?;
        Ok(Self {
            client,
            host: config.probe.host.clone(),
            timeout,
            design_port: config.ports.design,
            app_port: config.ports.app,
        })
    }

    /// Any HTTP response, whatever its status, means the port is serving.
    pub async fn is_reachable(&self, port: u16) -> bool {
        let url = format!("http://{}:{port}/", self.host);
        match tokio::time::timeout(self.timeout, self.client.get(&url).send()).await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                tracing::debug!(%url, error = %e, "service unreachable");
                false
            }
            Err(_) => {
                tracing::debug!(%url, "service probe timed out");
                false
            }
        }
    }

    /// Probe both services concurrently.
    pub async fn check(&self) -> ServiceHealth {
        let (design, app) = tokio::join!(
            self.is_reachable(self.design_port),
            self.is_reachable(self.app_port)
        );
        ServiceHealth::new(design, app)
    }
}
