// ============================================================================
// STATE MODULE - Rc<RefCell> state tree + change notifications
// ============================================================================

pub mod admin_state;
pub mod session_state;

pub use admin_state::*;
pub use session_state::*;
