mod applicants;
pub use applicants::ApplicantsView;

mod auth_form;
pub use auth_form::{AuthForm, AuthFormKind};

mod dashboard;
pub use dashboard::{DashboardTab, DashboardView};

mod network_directory;
pub use network_directory::NetworkDirectory;

mod opportunity_board;
pub use opportunity_board::OpportunityBoard;

mod opportunity_card;
pub use opportunity_card::OpportunityCard;

mod profile;
pub use profile::ProfileView;
