use clap::Parser;
use traveldash::app::{TravelDashApp, TravelDashError};

fn main() -> Result<(), TravelDashError> {
    env_logger::init();
    let args = TravelDashApp::parse();
    args.run().inspect_err(|e| log::error!("{e}"))
}
