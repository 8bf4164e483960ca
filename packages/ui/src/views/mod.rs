mod feedback;
pub use feedback::{EmptyMessage, ErrorMessage, Spinner};

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod admin_shell;
pub use admin_shell::{AdminShellView, NotFoundView, ShellSection};

mod login;
pub use login::LoginView;

mod dashboard;
pub use dashboard::DashboardView;

mod workshops;
pub use workshops::WorkshopsView;

mod workshop_detail;
pub use workshop_detail::WorkshopDetailView;

mod bookings;
pub use bookings::BookingsView;
