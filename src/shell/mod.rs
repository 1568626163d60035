// Composition root for the gateway and the two services.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers and routers.
// - Run a router until shutdown.

pub mod config;
pub mod http;
pub mod server;
pub mod state;
