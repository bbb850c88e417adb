use std::{
  error::Error,
  io::{self, Read},
  process::ExitCode,
};

use pipe_network::{pipes_to_activate, PipeNetwork, SolveOptions};
use tracing::{error, info};

fn run() -> Result<usize, Box<dyn Error + Send + Sync + 'static>> {
  let mut input = String::new();
  io::stdin().read_to_string(&mut input)?;

  let network = input.parse::<PipeNetwork>()?;
  info!(
    "Read network with {} nodes, {} active and {} inactive pipes",
    network.node_count(),
    network.active_pipes().count(),
    network.inactive_pipes().count()
  );

  Ok(pipes_to_activate(&network, &SolveOptions::default())?)
}

fn main() -> ExitCode {
  // Diagnostics go to stderr, stdout only carries the answer.
  tracing_subscriber::fmt()
    .with_max_level(tracing::Level::INFO)
    .with_writer(io::stderr)
    .init();

  match run() {
    Ok(count) => {
      println!("{count}");
      ExitCode::SUCCESS
    }
    Err(err) => {
      error!("{err}");
      ExitCode::FAILURE
    }
  }
}
