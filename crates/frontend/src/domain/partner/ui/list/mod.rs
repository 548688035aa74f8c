pub mod state;

use contracts::domain::common::RecordId;
use contracts::domain::partner::{Partner, PartnerDraft, PartnerType};
use leptos::prelude::*;

use crate::domain::partner::ui::details::PartnerDetails;
use crate::shared::components::{plain_options, Select};
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::format_number_int;
use crate::shared::toast::ToastService;
use state::PartnerListState;

#[component]
fn PartnerCard(
    partner: Partner,
    #[prop(into)] on_edit: Callback<Partner>,
    #[prop(into)] on_delete: Callback<RecordId>,
) -> impl IntoView {
    let partner_for_edit = partner.clone();
    let id = partner.id;

    let counters = [
        ("Projects", partner.projects),
        ("Researchers", partner.researchers),
        ("Publications", partner.publications),
        ("Partnerships", partner.partnerships),
    ];

    view! {
        <div class="card partner-card">
            <div class="partner-card__header">
                <div>
                    <h3 class="partner-card__name">{partner.name.clone()}</h3>
                    <div class="partner-card__meta">
                        <span class="badge badge--type">{partner.partner_type.as_str()}</span>
                        <span class="partner-card__country">
                            {icon("map-pin")} {partner.country.clone()}
                        </span>
                    </div>
                </div>
                <div class="partner-card__actions">
                    <button
                        class="icon-button"
                        title="Edit partner"
                        on:click=move |_| on_edit.run(partner_for_edit.clone())
                    >
                        {icon("edit")}
                    </button>
                    <button
                        class="icon-button icon-button--danger"
                        title="Delete partner"
                        on:click=move |_| on_delete.run(id)
                    >
                        {icon("trash")}
                    </button>
                </div>
            </div>

            <p class="partner-card__description">{partner.description.clone()}</p>

            <div class="partner-card__contacts">
                <span>{icon("globe")} {partner.website.clone()}</span>
                <span>{icon("mail")} {partner.email.clone()}</span>
                <span>{icon("phone")} {partner.phone.clone()}</span>
                <span>{icon("map-pin")} {partner.address.clone()}</span>
            </div>

            <div class="partner-card__counters">
                {counters
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="partner-card__counter">
                                <p class="partner-card__counter-value">
                                    {format_number_int(value as f64)}
                                </p>
                                <p class="partner-card__counter-label">{label}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
pub fn PartnerList() -> impl IntoView {
    let state = PartnerListState::new();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let open_details = move |partner: Option<Partner>| {
        let editing_id = partner.as_ref().map(|p| p.id);
        modal_stack.push_with_class(Some("partner-details-modal".to_string()), move |handle| {
            let on_saved = {
                let handle = handle.clone();
                Callback::new(move |draft: PartnerDraft| {
                    match editing_id.and_then(|id| state.find(id)) {
                        Some(existing) => {
                            state.save(draft.apply_to(&existing));
                            toasts.success("Partner information updated successfully!");
                        }
                        None => {
                            state.save(draft.into_new_partner(state.next_id()));
                            toasts.success("Partner organization added successfully!");
                        }
                    }
                    handle.close();
                })
            };
            let on_cancel = {
                let handle = handle.clone();
                Callback::new(move |_| handle.close())
            };

            view! { <PartnerDetails partner=partner.clone() on_saved=on_saved on_cancel=on_cancel/> }
                .into_any()
        });
    };

    let open_delete_confirm = move |id: RecordId| {
        state.request_delete(id);
        let name = state.find(id).map(|p| p.name).unwrap_or_default();

        modal_stack.push_with_class(Some("confirm-modal".to_string()), move |handle| {
            // Escape and overlay clicks bypass the buttons; clear the
            // marker whenever the dialog goes away. After a confirm the
            // slot is already empty, so this is a no-op.
            on_cleanup(move || state.cancel_delete());

            let confirm = {
                let handle = handle.clone();
                Callback::new(move |_| {
                    if state.confirm_delete().is_some() {
                        toasts.success("Partner organization removed successfully!");
                    }
                    handle.close();
                })
            };
            let cancel = {
                let handle = handle.clone();
                Callback::new(move |_| {
                    state.cancel_delete();
                    handle.close();
                })
            };

            view! {
                <div class="confirm-dialog">
                    <h3>"Remove Partner"</h3>
                    <p>
                        {format!(
                            "This will remove \"{}\" and its contact details from the network. This action cannot be undone.",
                            name,
                        )}
                    </p>
                    <div class="confirm-dialog__actions">
                        <button class="button button--secondary" on:click=move |_| cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="button button--danger" on:click=move |_| confirm.run(())>
                            "Remove"
                        </button>
                    </div>
                </div>
            }
            .into_any()
        });
    };

    let handle_edit = Callback::new(move |partner: Partner| open_details(Some(partner)));
    let handle_delete = Callback::new(open_delete_confirm);

    let mut type_filter_options = vec![("all".to_string(), "All Types".to_string())];
    type_filter_options.extend(plain_options(
        PartnerType::all().iter().map(|t| t.as_str()),
    ));

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Partners"</h1>
                    <p class="header__subtitle">
                        "Collaborating organizations across the region"
                    </p>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details(None)>
                        {icon("plus")}
                        "Add Partner"
                    </button>
                </div>
            </div>

            <div class="list-toolbar">
                <div class="search-box">
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="Search partners..."
                        prop:value=move || state.filters.get().search
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.filters.update(|f| f.search = value);
                        }
                    />
                </div>
                <Select
                    value=Signal::derive(move || state.filters.get().partner_type)
                    on_change=Callback::new(move |v: String| {
                        state.filters.update(|f| f.partner_type = v)
                    })
                    options=type_filter_options
                />
            </div>

            <div class="partner-grid">
                {move || {
                    state
                        .filtered()
                        .into_iter()
                        .map(|partner| {
                            view! {
                                <PartnerCard
                                    partner=partner
                                    on_edit=handle_edit
                                    on_delete=handle_delete
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
