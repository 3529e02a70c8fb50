//! Opportunity board: every opportunity, newest first. Builders can post new
//! ones; everyone else can apply to open ones from the cards.

use api::models::{split_list, OpportunityCreate, OpportunityQuery};
use api::validation::{parse_bounty, validate_opportunity};
use api::Mode;
use dioxus::prelude::*;

use crate::views::OpportunityCard;
use crate::widgets::Modal;
use crate::{use_auth, use_session};

#[component]
pub fn OpportunityBoard() -> Element {
    let auth = use_auth();
    let session = use_session();
    let mut show_create = use_signal(|| false);

    let mut opportunities = use_resource(move || {
        let session = session.clone();
        async move {
            session
                .client()
                .opportunities()
                .list(&OpportunityQuery::default())
                .await
        }
    });

    let current_user = auth().user;
    let is_builder = current_user.as_ref().is_some_and(|u| u.mode == Mode::Builder);
    let current_user_id = current_user.as_ref().map(|u| u.id);

    rsx! {
        div {
            div {
                class: "flex justify-between items-center mb-8",
                div {
                    h1 { class: "text-3xl font-bold text-slate-900", "Opportunity Board" }
                    p { class: "text-slate-600 mt-1", "Find projects and bounties from your peers" }
                }
                button {
                    class: "btn btn-primary",
                    disabled: !is_builder,
                    title: if is_builder { "" } else { "Only builders can post opportunities" },
                    onclick: move |_| show_create.set(true),
                    "+ Post Opportunity"
                }
            }

            match &*opportunities.read_unchecked() {
                None => rsx! {
                    div { class: "animate-pulse space-y-4",
                        for i in 0..3 {
                            div { key: "{i}", class: "h-32 bg-slate-100 rounded-lg" }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    div { class: "p-4 bg-red-50 text-red-700 rounded-lg", "Could not load opportunities: {e}" }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    div { class: "text-center py-16 text-slate-500", "No opportunities yet. Check back soon!" }
                },
                Some(Ok(list)) => rsx! {
                    div { class: "flex flex-col gap-4",
                        for opportunity in list.iter() {
                            OpportunityCard {
                                key: "{opportunity.id}",
                                is_owner: Some(opportunity.creator_id) == current_user_id,
                                opportunity: opportunity.clone(),
                                on_update: move |_| opportunities.restart(),
                            }
                        }
                    }
                },
            }

            if show_create() {
                CreateOpportunityModal {
                    on_close: move |_| show_create.set(false),
                    on_created: move |_| {
                        show_create.set(false);
                        opportunities.restart();
                    },
                }
            }
        }
    }
}

#[component]
fn CreateOpportunityModal(on_close: EventHandler<()>, on_created: EventHandler<()>) -> Element {
    let session = use_session();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut skills = use_signal(String::new);
    let mut bounty = use_signal(String::new);
    let mut deadline = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);

            let bounty_amount = match parse_bounty(&bounty()) {
                Ok(amount) => amount,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            let skill_list = split_list(&skills());
            let deadline_value = deadline().trim().to_string();
            let data = OpportunityCreate {
                title: title().trim().to_string(),
                description: description().trim().to_string(),
                required_skills: (!skill_list.is_empty()).then_some(skill_list),
                bounty_amount,
                deadline: (!deadline_value.is_empty()).then_some(deadline_value),
            };
            if let Err(e) = validate_opportunity(&data) {
                error.set(Some(e.to_string()));
                return;
            }

            saving.set(true);
            let result = session.client().opportunities().create(&data).await;
            saving.set(false);
            match result {
                Ok(created) => {
                    tracing::info!(id = created.id, "Opportunity posted");
                    on_created.call(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        Modal {
            title: "Post an Opportunity",
            subtitle: "Describe the work and what you can offer",
            on_close: move |_| on_close.call(()),
            form {
                onsubmit: handle_submit,
                class: "flex flex-col gap-3",

                if let Some(err) = error() {
                    div { class: "p-3 bg-red-50 text-red-700 rounded-lg text-sm", "{err}" }
                }

                input {
                    class: "input",
                    placeholder: "Title",
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }
                textarea {
                    class: "input h-28",
                    placeholder: "Description (at least 20 characters)",
                    value: description(),
                    oninput: move |evt: FormEvent| description.set(evt.value()),
                }
                input {
                    class: "input",
                    placeholder: "Required skills, comma separated",
                    value: skills(),
                    oninput: move |evt: FormEvent| skills.set(evt.value()),
                }
                input {
                    class: "input",
                    r#type: "number",
                    min: "0",
                    placeholder: "Bounty (optional)",
                    value: bounty(),
                    oninput: move |evt: FormEvent| bounty.set(evt.value()),
                }
                input {
                    class: "input",
                    r#type: "datetime-local",
                    value: deadline(),
                    oninput: move |evt: FormEvent| deadline.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Posting..." } else { "Post Opportunity" }
                }
            }
        }
    }
}
