use anyhow::Context;
use lumen_core::config::Config;
use std::path::Path;

pub fn run(root: &Path, host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let host = host.unwrap_or(config.server.host);
    let port = port.unwrap_or(config.server.port);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(lumen_server::serve(root.to_path_buf(), &host, port))
        .with_context(|| format!("server on {host}:{port} failed"))
}
