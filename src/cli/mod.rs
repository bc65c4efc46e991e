mod project;
mod server;

pub use project::*;
pub use server::*;
