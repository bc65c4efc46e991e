mod calendar;
mod clock;
mod error;
mod projector;
mod rule;
mod store;
mod types;

pub use calendar::*;
pub use clock::*;
pub use error::*;
pub use projector::*;
pub use rule::*;
pub use store::*;
pub use types::*;
