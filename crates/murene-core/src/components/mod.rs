//! State components: agents, the link-weight matrix and the parameter set.

pub mod agent;
pub mod params;
pub mod weights;

pub use agent::*;
pub use params::*;
pub use weights::*;
