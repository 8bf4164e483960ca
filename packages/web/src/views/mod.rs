mod admin_layout;
pub use admin_layout::AdminLayout;

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod workshops;
pub use workshops::{WorkshopDetail, Workshops};

mod bookings;
pub use bookings::Bookings;

mod not_found;
pub use not_found::NotFound;
