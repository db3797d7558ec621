//! Application state module

mod app_state;
mod element;
mod factory;
mod form;
mod preview;
mod session;
mod store;

pub use app_state::*;
pub use element::*;
pub use factory::*;
pub use form::*;
pub use preview::*;
pub use session::*;
pub use store::*;
