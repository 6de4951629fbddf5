use store_patterns::app_system::{setup_tracing, StoreHost};
use store_patterns::demos::creational;
use store_patterns::domain::Device;
use store_patterns::error::StoreError;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), StoreError> {
    setup_tracing();

    info!("Starting single store demo");

    // The one store of this program; everything below borrows it.
    let host = StoreHost::<Device>::default();

    let span = tracing::info_span!("stocking");
    let lines = creational::report(&host).instrument(span).await?;

    for line in lines {
        println!("{}", line);
    }

    host.shutdown().await?;

    info!("Demo completed");
    Ok(())
}
