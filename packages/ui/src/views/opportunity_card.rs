use api::models::OpportunityUpdate;
use api::validation::validate_application_message;
use api::{Opportunity, OpportunityStatus};
use dioxus::prelude::*;

use crate::use_session;
use crate::widgets::{Modal, SkillTags};

/// One opportunity on the board. Owners can close or delete it; everyone
/// else can apply while it is open.
#[component]
pub fn OpportunityCard(opportunity: Opportunity, is_owner: bool, on_update: EventHandler<()>) -> Element {
    let mut show_apply = use_signal(|| false);
    let mut notice = use_signal(|| Option::<String>::None);

    let status_class = if opportunity.is_open() {
        "bg-emerald-100 text-emerald-700"
    } else {
        "bg-slate-100 text-slate-600"
    };
    let session = use_session();
    let mut busy = use_signal(|| false);
    let opportunity_id = opportunity.id;

    let close_session = session.clone();
    let close_opportunity = move |_: MouseEvent| {
        let session = close_session.clone();
        spawn(async move {
            busy.set(true);
            let update = OpportunityUpdate {
                status: Some(OpportunityStatus::Closed),
                ..OpportunityUpdate::default()
            };
            let result = session.client().opportunities().update(opportunity_id, &update).await;
            busy.set(false);
            match result {
                Ok(_) => on_update.call(()),
                Err(e) => notice.set(Some(format!("Failed to close opportunity: {e}"))),
            }
        });
    };

    let delete_opportunity = move |_: MouseEvent| {
        let session = session.clone();
        spawn(async move {
            busy.set(true);
            let result = session.client().opportunities().delete(opportunity_id).await;
            busy.set(false);
            match result {
                Ok(()) => on_update.call(()),
                Err(e) => notice.set(Some(format!("Failed to delete opportunity: {e}"))),
            }
        });
    };

    let posted = opportunity.created_at.split('T').next().unwrap_or_default().to_string();

    rsx! {
        div {
            class: "w-full bg-white border border-slate-200 rounded-lg p-4 hover:shadow-md transition-all",
            div {
                class: "flex justify-between items-start gap-4",
                div {
                    class: "flex-1",
                    h3 { class: "text-base font-semibold text-slate-900", "{opportunity.title}" }
                    p { class: "text-slate-600 text-sm mt-1", "{opportunity.description}" }
                    SkillTags { items: opportunity.required_skills() }
                    div {
                        class: "flex items-center gap-4 mt-3 text-xs text-slate-500",
                        span { "Posted {posted}" }
                        if let Some(deadline) = opportunity.deadline.as_deref() {
                            span { "Due {deadline}" }
                        }
                        span { class: "px-2 py-1 rounded text-xs font-medium {status_class}", "{opportunity.status}" }
                    }
                    if let Some(message) = notice() {
                        p { class: "text-sm text-emerald-700 mt-2", "{message}" }
                    }
                }
                div {
                    class: "flex flex-col items-end gap-3 whitespace-nowrap",
                    if let Some(amount) = opportunity.bounty_amount {
                        div {
                            class: "px-3 py-1.5 bg-emerald-100 text-emerald-700 rounded font-semibold text-sm",
                            "${amount}"
                        }
                    }
                    if is_owner {
                        div {
                            class: "flex gap-2",
                            if opportunity.is_open() {
                                button {
                                    class: "btn text-sm",
                                    disabled: busy(),
                                    onclick: close_opportunity,
                                    "Close"
                                }
                            }
                            button {
                                class: "btn text-sm text-red-600",
                                disabled: busy(),
                                onclick: delete_opportunity,
                                "Delete"
                            }
                        }
                    }
                    if !is_owner && opportunity.is_open() {
                        button {
                            class: "btn btn-primary text-sm",
                            onclick: move |_| show_apply.set(true),
                            "Apply"
                        }
                    }
                }
            }

            if show_apply() {
                ApplyModal {
                    opportunity: opportunity.clone(),
                    on_close: move |_| show_apply.set(false),
                    on_applied: move |_| {
                        show_apply.set(false);
                        notice.set(Some("Application submitted successfully!".to_string()));
                        on_update.call(());
                    },
                }
            }
        }
    }
}

#[component]
fn ApplyModal(opportunity: Opportunity, on_close: EventHandler<()>, on_applied: EventHandler<()>) -> Element {
    let session = use_session();
    let mut message = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut sending = use_signal(|| false);
    let opportunity_id = opportunity.id;

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);
            let text = message().trim().to_string();
            if let Err(e) = validate_application_message(&text) {
                error.set(Some(e.to_string()));
                return;
            }

            sending.set(true);
            let result = session.client().opportunities().apply(opportunity_id, &text).await;
            sending.set(false);
            match result {
                Ok(_) => on_applied.call(()),
                Err(e) => error.set(Some(format!("Failed to submit application: {e}"))),
            }
        });
    };

    rsx! {
        Modal {
            title: "Apply to {opportunity.title}",
            subtitle: "Tell the builder why you're a good fit",
            on_close: move |_| on_close.call(()),
            form {
                onsubmit: handle_submit,
                class: "flex flex-col gap-3",
                if let Some(err) = error() {
                    div { class: "p-3 bg-red-50 text-red-700 rounded-lg text-sm", "{err}" }
                }
                textarea {
                    class: "input h-32",
                    placeholder: "Your message (at least 10 characters)",
                    value: message(),
                    oninput: move |evt: FormEvent| message.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: sending(),
                    if sending() { "Sending..." } else { "Submit Application" }
                }
            }
        }
    }
}
