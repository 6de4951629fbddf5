use store_patterns::app_system::setup_tracing;
use store_patterns::demos::structural;
use tracing::info;

fn main() {
    setup_tracing();

    info!("Starting structural showcase, facade first");

    for line in structural::showcase_report() {
        println!("{}", line);
    }
}
