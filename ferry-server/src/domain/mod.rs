//! Domain types for the ferry capacity server.
//!
//! This module contains the core domain model types that represent
//! validated sailing data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod sailing;
mod snapshot;
mod terminal;

pub use sailing::Sailing;
pub use snapshot::{DestinationSchedule, ScheduleSnapshot};
pub use terminal::{InvalidTerminalCode, TerminalCode};
