//! Single-form dialog for creating and editing partner organizations
//!
//! Counters (projects, researchers, publications, partnerships) are not
//! part of the form: new partners start at zero, edits keep the
//! existing values.

use contracts::domain::partner::{country_options, Partner, PartnerDraft, PartnerType};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::{plain_options, Select};

#[component]
pub fn PartnerDetails(
    partner: Option<Partner>,
    #[prop(into)] on_saved: Callback<PartnerDraft>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit_mode = partner.is_some();
    let seed = match &partner {
        Some(p) => PartnerDraft::from_partner(p),
        None => PartnerDraft::new(),
    };

    let name = RwSignal::new(seed.name);
    let partner_type = RwSignal::new(if seed.partner_type.is_empty() {
        PartnerType::AcademicInstitution.as_str().to_string()
    } else {
        seed.partner_type
    });
    let country = RwSignal::new(if seed.country.is_empty() {
        "Uganda".to_string()
    } else {
        seed.country
    });
    let website = RwSignal::new(seed.website);
    let email = RwSignal::new(seed.email);
    let phone = RwSignal::new(seed.phone);
    let address = RwSignal::new(seed.address);
    let description = RwSignal::new(seed.description);

    // No field-level validation: even an empty name is saved as-is.
    let handle_save = move |_| {
        on_saved.run(PartnerDraft {
            name: name.get(),
            partner_type: partner_type.get(),
            country: country.get(),
            website: website.get(),
            email: email.get(),
            phone: phone.get(),
            address: address.get(),
            description: description.get(),
        });
    };

    view! {
        <div class="details-container partner-details">
            <div class="modal-header">
                <h3 class="modal-title">
                    {if is_edit_mode { "Edit Partner" } else { "Add Partner Organization" }}
                </h3>
                <div class="modal-header-actions">
                    <Button appearance=ButtonAppearance::Primary on_click=handle_save>
                        {if is_edit_mode { "Save Changes" } else { "Add Partner" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                        "Cancel"
                    </Button>
                </div>
            </div>

            <div class="modal-body">
                <div class="details-section">
                    <div class="form__group">
                        <label class="form__label">"Organization Name"</label>
                        <Input value=name placeholder="Enter organization name"/>
                    </div>

                    <div class="details-grid--2col">
                        <Select
                            label="Type"
                            value=Signal::derive(move || partner_type.get())
                            on_change=Callback::new(move |v: String| partner_type.set(v))
                            options=plain_options(PartnerType::all().iter().map(|t| t.as_str()))
                        />
                        <Select
                            label="Country"
                            value=Signal::derive(move || country.get())
                            on_change=Callback::new(move |v: String| country.set(v))
                            options=plain_options(country_options())
                        />
                        <div class="form__group">
                            <label class="form__label">"Website"</label>
                            <Input value=website placeholder="https://"/>
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Email"</label>
                            <Input value=email placeholder="contact@organization.org"/>
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Phone"</label>
                            <Input value=phone placeholder="+256-000-000-000"/>
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Address"</label>
                            <Input value=address placeholder="Street, City"/>
                        </div>
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Description"</label>
                        <Textarea
                            value=description
                            placeholder="What does this organization do?"
                            attr:rows=3
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
