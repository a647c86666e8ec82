use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    geodir_observability::init();

    let addr = std::env::var("GEODIR_ADDR").unwrap_or_else(|_| {
        tracing::warn!("GEODIR_ADDR not set; defaulting to 0.0.0.0:8080");
        "0.0.0.0:8080".to_string()
    });

    let app = geodir_api::app::build_app();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
