pub mod admin_viewmodel;
pub mod car_form_viewmodel;
pub mod collections_viewmodel;
pub mod session_viewmodel;

pub use admin_viewmodel::AdminViewModel;
