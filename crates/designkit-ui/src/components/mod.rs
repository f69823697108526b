//! Reusable UI components
//!
//! Styled controls share the variant adapter in [`crate::variant`];
//! the gate and loading components consume the context handles from
//! [`crate::context`].

mod badge;
mod button;
mod input;
mod loading;
mod permission_gate;

pub use badge::*;
pub use button::*;
pub use input::*;
pub use loading::*;
pub use permission_gate::*;
