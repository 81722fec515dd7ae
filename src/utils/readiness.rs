use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info, warn};

pub const DEFAULT_ATTEMPTS: u32 = 10;
pub const DEFAULT_DELAY: Duration = Duration::from_secs(5);

/// Reports the health of a named service.
#[async_trait]
pub trait HealthProbe {
    async fn is_healthy(&self, service: &str) -> bool;
}

/// Reads the container runtime's health status via `docker inspect`.
pub struct DockerProbe;

#[async_trait]
impl HealthProbe for DockerProbe {
    async fn is_healthy(&self, service: &str) -> bool {
        let output = Command::new("docker")
            .args(["inspect", "-f", "{{.State.Health.Status}}", service])
            .output()
            .await;
        match output {
            Ok(out) if out.status.success() => {
                String::from_utf8_lossy(&out.stdout).trim() == "healthy"
            }
            Ok(out) => {
                warn!(service, "docker inspect failed: {}", String::from_utf8_lossy(&out.stderr).trim());
                false
            }
            Err(e) => {
                warn!(service, "docker not runnable: {}", e);
                false
            }
        }
    }
}

/// Polls until every service is healthy or the attempts run out.
///
/// Returns whether all services became healthy. Exhausting the attempts is
/// not an error, callers proceed regardless.
pub async fn wait_until_healthy<P>(probe: &P, services: &[String], attempts: u32, delay: Duration) -> bool
where
    P: HealthProbe + Sync + ?Sized,
{
    for attempt in 1..=attempts {
        let mut pending = Vec::new();
        for service in services {
            if !probe.is_healthy(service).await {
                pending.push(service.as_str());
            }
        }
        if pending.is_empty() {
            info!(attempt, "All services healthy");
            return true;
        }
        info!(attempt, attempts, waiting_on = ?pending, "Services not healthy yet");
        if attempt < attempts {
            tokio::time::sleep(delay).await;
        }
    }
    warn!(attempts, "Gave up waiting for services, continuing");
    false
}

/// GETs `url` and reports whether it answered 2xx within `timeout`.
pub async fn check_http(url: &str, timeout: Duration) -> bool {
    let client = match reqwest::Client::builder().timeout(timeout).build() {
        Ok(c) => c,
        Err(e) => {
            warn!("HTTP client unavailable: {}", e);
            return false;
        }
    };
    match client.get(url).send().await {
        Ok(resp) if resp.status().is_success() => {
            debug!(status = %resp.status(), "{} is healthy", url);
            true
        }
        Ok(resp) => {
            warn!(status = %resp.status(), "{} is unhealthy", url);
            false
        }
        Err(e) => {
            warn!("{} is unreachable: {}", url, e);
            false
        }
    }
}
