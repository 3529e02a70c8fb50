mod dashboard;
pub use dashboard::Dashboard;

mod landing;
pub use landing::Landing;

mod spinner;
pub use spinner::Spinner;
