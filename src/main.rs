use anyhow::Context;
use pool_preview::{config::Config, FileSnapshotSource, Previewer, SnapshotSource};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for the preview JSON.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    let config = Config::from_env().context("loading configuration")?;
    let pool = config.pool.clone();

    let source: Arc<dyn SnapshotSource> =
        Arc::new(FileSnapshotSource::new(config.snapshot_path.clone()));
    tracing::info!(
        pool = %pool,
        snapshot_path = %config.snapshot_path,
        oracle_mode = ?config.oracle_mode,
        "Projecting pool state"
    );

    let previewer = Previewer::new(source, config);
    let preview = previewer
        .preview(&pool)
        .await
        .with_context(|| format!("previewing pool {}", pool))?;

    let json = serde_json::to_string_pretty(&preview).context("serializing preview")?;
    println!("{}", json);
    Ok(())
}
