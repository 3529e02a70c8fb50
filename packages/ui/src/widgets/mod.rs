mod filter_button;
pub use filter_button::FilterButton;

mod modal;
pub use modal::Modal;

mod mode_badge;
pub use mode_badge::ModeBadge;

mod skill_tags;
pub use skill_tags::SkillTags;
