//! Type-safe wrappers and enums for NCAA basketball data.

pub mod conference;
pub mod ids;
pub mod season;

pub use conference::Conference;
pub use ids::{GameId, PlayerId, TeamId};
pub use season::Season;
