use api::Mode;
use dioxus::prelude::*;

use crate::views::{ApplicantsView, NetworkDirectory, OpportunityBoard, ProfileView};
use crate::widgets::ModeBadge;
use crate::{use_auth, LogoutButton};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Opportunities,
    Applicants,
    Network,
    Profile,
}

impl DashboardTab {
    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Opportunities => "Opportunities",
            DashboardTab::Applicants => "Applicants",
            DashboardTab::Network => "Network",
            DashboardTab::Profile => "Profile",
        }
    }

    /// Tabs listed in the navigation bar for a user in `mode`.
    pub fn visible_for(mode: Mode) -> Vec<DashboardTab> {
        match mode {
            Mode::Builder => vec![
                DashboardTab::Opportunities,
                DashboardTab::Applicants,
                DashboardTab::Network,
            ],
            Mode::Hustler => vec![DashboardTab::Opportunities, DashboardTab::Network],
        }
    }

    /// Tab actually shown when `self` is selected. Applicants is for
    /// builders only; hustlers land on the board instead.
    pub fn resolve(self, mode: Mode) -> DashboardTab {
        match self {
            DashboardTab::Applicants if mode != Mode::Builder => DashboardTab::Opportunities,
            other => other,
        }
    }
}

/// Signed-in shell: top navigation plus the selected tab.
#[component]
pub fn DashboardView() -> Element {
    let auth = use_auth();
    let mut tab = use_signal(|| DashboardTab::Opportunities);

    let Some(user) = auth().user else {
        return rsx! {};
    };

    let tabs = DashboardTab::visible_for(user.mode);
    let current = tab().resolve(user.mode);

    rsx! {
        div {
            class: "min-h-screen bg-white",
            nav {
                class: "sticky top-0 w-full border-b border-slate-100 bg-white flex justify-center",
                style: "z-index: 50",
                div {
                    class: "w-full max-w-6xl flex h-16 items-center justify-between px-4",
                    div {
                        class: "flex items-center gap-8",
                        span { class: "text-xl font-bold tracking-tight text-slate-900", "Workforce" }
                        div {
                            class: "flex gap-1",
                            for item in tabs {
                                button {
                                    key: "{item.label()}",
                                    class: if current == item { "nav-btn nav-btn-active" } else { "nav-btn" },
                                    onclick: move |_| tab.set(item),
                                    "{item.label()}"
                                }
                            }
                        }
                    }
                    div {
                        class: "flex items-center gap-3",
                        ModeBadge { mode: user.mode }
                        button {
                            class: if current == DashboardTab::Profile { "nav-btn nav-btn-active" } else { "nav-btn" },
                            onclick: move |_| tab.set(DashboardTab::Profile),
                            "{user.username}"
                        }
                        LogoutButton { class: "nav-btn text-red-600" }
                    }
                }
            }
            main {
                class: "mt-8 pb-12 flex justify-center",
                div {
                    class: "w-full px-4 max-w-6xl",
                    match current {
                        DashboardTab::Opportunities => rsx! { OpportunityBoard {} },
                        DashboardTab::Applicants => rsx! { ApplicantsView {} },
                        DashboardTab::Network => rsx! { NetworkDirectory {} },
                        DashboardTab::Profile => rsx! { ProfileView {} },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hustler_on_applicants_sees_opportunities() {
        assert_eq!(
            DashboardTab::Applicants.resolve(Mode::Hustler),
            DashboardTab::Opportunities
        );
        assert_eq!(DashboardTab::Applicants.resolve(Mode::Builder), DashboardTab::Applicants);
        assert_eq!(DashboardTab::Network.resolve(Mode::Hustler), DashboardTab::Network);
        assert_eq!(DashboardTab::Profile.resolve(Mode::Hustler), DashboardTab::Profile);
    }

    #[test]
    fn test_applicants_tab_listed_for_builders_only() {
        assert!(DashboardTab::visible_for(Mode::Builder).contains(&DashboardTab::Applicants));
        assert!(!DashboardTab::visible_for(Mode::Hustler).contains(&DashboardTab::Applicants));
    }
}
