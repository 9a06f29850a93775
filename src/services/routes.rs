// Backend routes, relative to CONFIG.api_base_url

pub const LOGIN: &str = "/admin/login";
pub const USERS: &str = "/admin/users";
pub const CARS: &str = "/admin/cars";
pub const CAR_ADD: &str = "/admin/cars/add";
pub const BOOKINGS: &str = "/admin/bookings";
pub const SELF_DRIVE_BOOKINGS: &str = "/admin/self-drive-bookings";

pub fn user_item(id: &str) -> String {
    format!("{}/{}", USERS, id)
}

pub fn car_item(id: &str) -> String {
    format!("{}/{}", CARS, id)
}
