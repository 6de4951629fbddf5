use store_patterns::app_system::setup_tracing;
use store_patterns::demos::structural;
use tracing::info;

fn main() {
    setup_tracing();

    info!("Starting structural patterns demo");

    for line in structural::report() {
        println!("{}", line);
    }
}
