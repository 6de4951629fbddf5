use store_patterns::app_system::setup_tracing;
use store_patterns::demos::solid;
use tracing::info;

fn main() {
    setup_tracing();

    info!("Starting discount strategy demo");

    let inventory_manager = solid::seed_inventory();
    let strategies = solid::demo_strategies();

    for line in solid::report(&inventory_manager, &strategies) {
        println!("{}", line);
    }

    info!(products = inventory_manager.len(), strategies = strategies.len(), "Demo completed");
}
