//! Three-tab dialog for creating and editing projects
//!
//! Edits happen on a string draft; the record is only touched when the
//! user saves. Closing the dialog throws the draft away.

use contracts::domain::project::{
    category_options, institution_options, Project, ProjectDraft, ProjectPriority, ProjectStatus,
};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::{plain_options, Select};
use crate::shared::icons::icon;

#[component]
pub fn ProjectDetails(
    project: Option<Project>,
    #[prop(into)] on_saved: Callback<ProjectDraft>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit_mode = project.is_some();
    let seed = match &project {
        Some(p) => ProjectDraft::from_project(p),
        None => ProjectDraft::new(),
    };

    // Thaw-friendly per-field signals
    let title = RwSignal::new(seed.title);
    let description = RwSignal::new(seed.description);
    let status = RwSignal::new(seed.status);
    let priority = RwSignal::new(seed.priority);
    let category = RwSignal::new(seed.category);
    let institution = RwSignal::new(seed.institution);
    let location = RwSignal::new(seed.location);
    let start_date = RwSignal::new(seed.start_date);
    let end_date = RwSignal::new(seed.end_date);
    let progress = RwSignal::new(seed.progress);
    let budget = RwSignal::new(seed.budget);
    let spent = RwSignal::new(seed.spent);
    let team = RwSignal::new(seed.team);
    let tags = RwSignal::new(seed.tags);
    let is_premium = RwSignal::new(seed.is_premium);

    let tag_input = RwSignal::new(String::new());
    let (active_tab, set_active_tab) = signal("basic");

    let add_tag = move || {
        let tag = tag_input.get_untracked().trim().to_string();
        if tag.is_empty() {
            return;
        }
        tags.update(|list| {
            if !list.contains(&tag) {
                list.push(tag);
            }
        });
        tag_input.set(String::new());
    };

    // No field-level validation: even an empty title is saved as-is.
    let handle_save = move |_| {
        let draft = ProjectDraft {
            title: title.get(),
            description: description.get(),
            status: status.get(),
            start_date: start_date.get(),
            end_date: end_date.get(),
            progress: progress.get(),
            budget: budget.get(),
            spent: spent.get(),
            team: team.get(),
            category: category.get(),
            priority: priority.get(),
            tags: tags.get(),
            institution: institution.get(),
            location: location.get(),
            is_premium: is_premium.get(),
        };
        on_saved.run(draft);
    };

    let tab_button = move |key: &'static str, label: &'static str| {
        view! {
            <button
                type="button"
                class=move || {
                    if active_tab.get() == key {
                        "detail-tabs__item detail-tabs__item--active"
                    } else {
                        "detail-tabs__item"
                    }
                }
                on:click=move |_| set_active_tab.set(key)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="details-container project-details">
            <div class="modal-header">
                <h3 class="modal-title">
                    {if is_edit_mode { "Edit Project" } else { "Create New Project" }}
                </h3>
                <div class="modal-header-actions">
                    <Button appearance=ButtonAppearance::Primary on_click=handle_save>
                        {if is_edit_mode { "Save Changes" } else { "Create Project" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                        "Cancel"
                    </Button>
                </div>
            </div>

            <div class="modal-body">
                <div class="detail-tabs">
                    {tab_button("basic", "Basic Info")}
                    {tab_button("details", "Project Details")}
                    {tab_button("budget", "Budget & Team")}
                </div>

                <div class="detail-tabs__panel">
                    <Show when=move || active_tab.get() == "basic">
                        <div class="details-section">
                            <div class="form__group">
                                <label class="form__label">"Title"</label>
                                <Input value=title placeholder="Enter project title"/>
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Description"</label>
                                <Textarea
                                    value=description
                                    placeholder="What is this project about?"
                                    attr:rows=3
                                />
                            </div>
                            <div class="details-grid--2col">
                                <Select
                                    label="Status"
                                    value=Signal::derive(move || status.get())
                                    on_change=Callback::new(move |v: String| status.set(v))
                                    options=plain_options(
                                        ProjectStatus::all().iter().map(|s| s.as_str()),
                                    )
                                />
                                <Select
                                    label="Priority"
                                    value=Signal::derive(move || priority.get())
                                    on_change=Callback::new(move |v: String| priority.set(v))
                                    options=plain_options(
                                        ProjectPriority::all().iter().map(|p| p.as_str()),
                                    )
                                />
                            </div>
                            <div class="details-flags">
                                <Checkbox checked=is_premium label="Premium project"/>
                            </div>
                        </div>
                    </Show>

                    <Show when=move || active_tab.get() == "details">
                        <div class="details-section">
                            <div class="details-grid--2col">
                                <Select
                                    label="Category"
                                    value=Signal::derive(move || category.get())
                                    on_change=Callback::new(move |v: String| category.set(v))
                                    options=plain_options(category_options())
                                />
                                <Select
                                    label="Institution"
                                    value=Signal::derive(move || institution.get())
                                    on_change=Callback::new(move |v: String| institution.set(v))
                                    options=plain_options(institution_options())
                                />
                                <div class="form__group">
                                    <label class="form__label">"Location"</label>
                                    <Input value=location placeholder="Country"/>
                                </div>
                                <div class="form__group">
                                    <label class="form__label">"Start Date"</label>
                                    <Input value=start_date placeholder="YYYY-MM-DD"/>
                                </div>
                                <div class="form__group">
                                    <label class="form__label">"End Date"</label>
                                    <Input value=end_date placeholder="YYYY-MM-DD"/>
                                </div>
                            </div>

                            <div class="form__group">
                                <label class="form__label">"Tags"</label>
                                <div class="tag-editor">
                                    <Input value=tag_input placeholder="Add a tag"/>
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        on_click=move |_| add_tag()
                                    >
                                        "Add"
                                    </Button>
                                </div>
                                <div class="tag-editor__tags">
                                    <For
                                        each=move || tags.get()
                                        key=|tag| tag.clone()
                                        children=move |tag: String| {
                                            let tag_for_remove = tag.clone();
                                            view! {
                                                <span class="badge badge--tag">
                                                    {tag.clone()}
                                                    <button
                                                        class="badge__remove"
                                                        on:click=move |_| {
                                                            let tag = tag_for_remove.clone();
                                                            tags.update(|list| list.retain(|t| *t != tag));
                                                        }
                                                    >
                                                        {icon("x")}
                                                    </button>
                                                </span>
                                            }
                                        }
                                    />
                                </div>
                            </div>
                        </div>
                    </Show>

                    <Show when=move || active_tab.get() == "budget">
                        <div class="details-section">
                            <div class="details-grid--2col">
                                <div class="form__group">
                                    <label class="form__label">"Budget (USD)"</label>
                                    <Input value=budget placeholder="0"/>
                                </div>
                                <div class="form__group">
                                    <label class="form__label">"Spent (USD)"</label>
                                    <Input value=spent placeholder="0"/>
                                </div>
                                <div class="form__group">
                                    <label class="form__label">"Team Members"</label>
                                    <Input value=team placeholder="0"/>
                                </div>
                                <div class="form__group">
                                    <label class="form__label">"Progress (%)"</label>
                                    <Input value=progress placeholder="0-100"/>
                                </div>
                            </div>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
