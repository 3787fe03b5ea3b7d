//! Quick reply domain.
//!
//! - [`set::QuickReplySet`]: ordered suggestions attached to one bot turn
//! - [`policy::QuickReplyPolicy`]: when a received set may be shown
//! - [`gate::QuickReplyGate`]: applies the policy turn by turn

pub mod gate;
pub mod policy;
pub mod set;
