// ============================================================================
// VIEWS - functions that build DOM from state, no business logic
// ============================================================================

pub mod app;
pub mod bookings;
pub mod car_form;
pub mod car_list;
pub mod login;
pub mod notices;
pub mod sidebar;
pub mod table;
pub mod users;

pub use app::render_app;
pub use bookings::{render_cab_bookings, render_self_drive_bookings};
pub use car_form::render_car_form;
pub use car_list::render_car_list;
pub use login::render_login;
pub use notices::render_notices;
pub use sidebar::render_sidebar;
pub use users::render_users;
