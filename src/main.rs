use clap::Parser;
use dining_table::lifecycle::{setup_tracing, DiningConfig, DiningSystem};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let system = DiningSystem::new(DiningConfig::parse()).map_err(|e| e.to_string())?;

    let span = tracing::info_span!("dinner");
    let report = async {
        let config = system.config();
        info!(
            philosophers = config.philosophers,
            rounds = config.rounds,
            "Philosophers sitting down"
        );
        system.run().await
    }
    .instrument(span)
    .await
    .map_err(|e| {
        error!(error = %e, "Dinner failed");
        e.to_string()
    })?;

    for (id, meals) in report.meals.iter().enumerate() {
        info!(philosopher = id, meals, "Meals eaten");
    }
    println!("{report}");

    Ok(())
}
