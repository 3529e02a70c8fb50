//! Applications received on the signed-in builder's own opportunities.

use api::{ApiError, Application, ApplicationStatus, Mode, User};
use dioxus::prelude::*;

use crate::widgets::FilterButton;
use crate::{use_auth, use_session, Session};

#[derive(Debug, Clone, PartialEq)]
struct ApplicantRow {
    application: Application,
    opportunity_title: String,
    applicant: Option<User>,
}

/// Id whose opportunities' applications are shown. Only builders review
/// applications, so anyone else loads nothing.
fn reviewer_id(user: Option<&User>) -> Option<i64> {
    user.filter(|u| u.mode == Mode::Builder).map(|u| u.id)
}

async fn load_rows(session: Session, owner_id: i64) -> Result<Vec<ApplicantRow>, ApiError> {
    let client = session.client();
    let opportunities = client.opportunities().list_all(None).await?;

    let mut rows = Vec::new();
    for opportunity in opportunities.into_iter().filter(|o| o.creator_id == owner_id) {
        for application in client.opportunities().applications(opportunity.id).await? {
            // A missing profile should not hide the application itself
            let applicant = match client.network().member(application.applicant_id).await {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!("Could not load applicant {}: {}", application.applicant_id, e);
                    None
                }
            };
            rows.push(ApplicantRow {
                application,
                opportunity_title: opportunity.title.clone(),
                applicant,
            });
        }
    }

    rows.sort_by(|a, b| b.application.created_at.cmp(&a.application.created_at));
    Ok(rows)
}

#[component]
pub fn ApplicantsView() -> Element {
    let auth = use_auth();
    let session = use_session();
    let mut filter = use_signal(|| Option::<ApplicationStatus>::None);

    let mut rows = use_resource(move || {
        let session = session.clone();
        let owner_id = reviewer_id(auth().user.as_ref());
        async move {
            match owner_id {
                Some(id) => load_rows(session, id).await,
                None => Ok(Vec::new()),
            }
        }
    });

    if auth().user.is_some_and(|u| u.mode == Mode::Hustler) {
        return rsx! {
            div {
                class: "text-center py-12 bg-white rounded-lg border border-slate-200",
                p { class: "text-slate-600", "Only builders can view applicants. Switch to builder mode to see applications." }
            }
        };
    }

    let binding = rows.read_unchecked();
    let Some(result) = &*binding else {
        return rsx! {
            div { class: "space-y-4",
                for i in 0..3 {
                    div { key: "{i}", class: "h-32 bg-slate-100 rounded-lg animate-pulse" }
                }
            }
        };
    };
    let list = match result {
        Ok(list) => list,
        Err(e) => {
            return rsx! {
                div { class: "p-4 bg-red-50 text-red-700 rounded-lg", "Could not load applications: {e}" }
            };
        }
    };

    let count = |status: ApplicationStatus| list.iter().filter(|r| r.application.status == status).count();
    let pending = count(ApplicationStatus::Pending);
    let accepted = count(ApplicationStatus::Accepted);
    let rejected = count(ApplicationStatus::Rejected);

    let visible: Vec<ApplicantRow> = list
        .iter()
        .filter(|r| filter().map_or(true, |status| r.application.status == status))
        .cloned()
        .collect();

    rsx! {
        div {
            class: "space-y-6",
            div {
                class: "flex gap-4 bg-white border border-slate-200 rounded-lg p-4",
                FilterButton { active: filter().is_none(), label: "All", onclick: move |_| filter.set(None) }
                FilterButton {
                    active: filter() == Some(ApplicationStatus::Pending),
                    label: "Pending ({pending})",
                    onclick: move |_| filter.set(Some(ApplicationStatus::Pending)),
                }
                FilterButton {
                    active: filter() == Some(ApplicationStatus::Accepted),
                    label: "Accepted ({accepted})",
                    onclick: move |_| filter.set(Some(ApplicationStatus::Accepted)),
                }
                FilterButton {
                    active: filter() == Some(ApplicationStatus::Rejected),
                    label: "Rejected ({rejected})",
                    onclick: move |_| filter.set(Some(ApplicationStatus::Rejected)),
                }
            }

            if visible.is_empty() {
                div {
                    class: "text-center py-12 bg-white rounded-lg border border-slate-200",
                    p { class: "text-slate-600", "No applications yet." }
                }
            }

            for row in visible {
                ApplicantCard {
                    key: "{row.application.id}",
                    row,
                    on_change: move |_| rows.restart(),
                }
            }
        }
    }
}

#[component]
fn ApplicantCard(row: ApplicantRow, on_change: EventHandler<()>) -> Element {
    let session = use_session();
    let mut processing = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let application = row.application.clone();
    let status = application.status;
    let application_id = application.id;

    let decide = move |next: ApplicationStatus| {
        let session = session.clone();
        spawn(async move {
            processing.set(true);
            error.set(None);
            let result = session
                .client()
                .opportunities()
                .set_application_status(application_id, next)
                .await;
            processing.set(false);
            match result {
                Ok(_) => on_change.call(()),
                Err(e) => error.set(Some(format!("Failed to update application: {e}"))),
            }
        });
    };
    let reject = decide.clone();

    let badge = match status {
        ApplicationStatus::Pending => "bg-yellow-100 text-yellow-700",
        ApplicationStatus::Accepted => "bg-emerald-100 text-emerald-700",
        ApplicationStatus::Rejected => "bg-red-100 text-red-700",
    };
    let submitted = application.created_at.split('T').next().unwrap_or_default().to_string();

    rsx! {
        div {
            class: "bg-white border border-slate-200 rounded-lg p-6",
            div {
                class: "flex justify-between items-start mb-4",
                div {
                    h3 { class: "font-semibold text-slate-900 text-lg", "{row.opportunity_title}" }
                    p { class: "text-sm text-slate-600 mt-1", "Opportunity #{application.opportunity_id}" }
                }
                span { class: "px-3 py-1 rounded-full text-sm font-medium {badge}", "{status.as_str()}" }
            }

            div {
                class: "bg-slate-50 rounded-lg p-4 mb-4",
                h4 { class: "font-semibold text-slate-900 mb-2", "Applicant" }
                match &row.applicant {
                    Some(user) => rsx! {
                        p { class: "text-slate-700", "{user.display_name()}" }
                        p { class: "text-slate-600 text-sm", "{user.email}" }
                    },
                    None => rsx! {
                        p { class: "text-slate-700", "User #{application.applicant_id}" }
                    },
                }
            }

            div {
                class: "mb-4",
                h4 { class: "font-semibold text-slate-900 mb-2", "Message" }
                p { class: "text-slate-700 whitespace-pre-wrap", "{application.message}" }
            }

            if let Some(err) = error() {
                p { class: "text-sm text-red-700 mb-2", "{err}" }
            }

            div {
                class: "flex justify-between items-center pt-4 border-t border-slate-200",
                p { class: "text-sm text-slate-500", "{submitted}" }
                if status == ApplicationStatus::Pending {
                    div {
                        class: "flex gap-3",
                        button {
                            class: "btn border border-red-300 text-red-600",
                            disabled: processing(),
                            onclick: move |_| reject(ApplicationStatus::Rejected),
                            "Reject"
                        }
                        button {
                            class: "btn bg-emerald-600 text-white",
                            disabled: processing(),
                            onclick: move |_| decide(ApplicationStatus::Accepted),
                            "Accept"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(mode: Mode) -> User {
        User {
            id: 21,
            email: "grace@uni.edu".to_string(),
            username: "grace".to_string(),
            full_name: "Grace Hopper".to_string(),
            bio: None,
            skills: None,
            interests: None,
            profile_image: None,
            mode,
            created_at: "2025-02-01T09:00:00".to_string(),
        }
    }

    #[test]
    fn test_only_builders_load_applications() {
        assert_eq!(reviewer_id(Some(&user(Mode::Builder))), Some(21));
        assert_eq!(reviewer_id(Some(&user(Mode::Hustler))), None);
        assert_eq!(reviewer_id(None), None);
    }
}
