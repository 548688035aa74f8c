pub mod state;

use contracts::domain::common::RecordId;
use contracts::domain::project::{
    category_options, institution_options, Project, ProjectDraft, ProjectPriority,
};
use leptos::prelude::*;

use crate::domain::project::ui::details::ProjectDetails;
use crate::shared::components::{plain_options, ProgressBar, Select, TabBar};
use crate::shared::date_utils::format_date_range;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::format_money;
use crate::shared::toast::ToastService;
use state::ProjectListState;

fn status_badge_class(key: &str) -> String {
    format!("badge badge--status-{key}")
}

fn priority_badge_class(priority: ProjectPriority) -> String {
    format!(
        "badge badge--priority-{}",
        priority.as_str().to_lowercase()
    )
}

#[component]
fn ProjectCard(
    project: Project,
    #[prop(into)] on_edit: Callback<Project>,
    #[prop(into)] on_delete: Callback<RecordId>,
) -> impl IntoView {
    let project_for_edit = project.clone();
    let id = project.id;

    let dates = format_date_range(&project.start_date, &project.end_date);

    view! {
        <div class="card project-card">
            <div class="project-card__header">
                <div>
                    <div class="project-card__title-row">
                        <h3 class="project-card__title">{project.title.clone()}</h3>
                        <Show when={
                            let premium = project.is_premium;
                            move || premium
                        }>
                            <span class="project-card__star">{icon("star")}</span>
                        </Show>
                    </div>
                    <p class="project-card__description">{project.description.clone()}</p>
                </div>
                <div class="project-card__actions">
                    <button
                        class="icon-button"
                        title="Edit project"
                        on:click=move |_| on_edit.run(project_for_edit.clone())
                    >
                        {icon("edit")}
                    </button>
                    <button
                        class="icon-button icon-button--danger"
                        title="Delete project"
                        on:click=move |_| on_delete.run(id)
                    >
                        {icon("trash")}
                    </button>
                </div>
            </div>

            <div class="project-card__meta">
                <span class=status_badge_class(project.status.key())>
                    {project.status.as_str()}
                </span>
                <span class=priority_badge_class(project.priority)>
                    {project.priority.as_str()}
                </span>
                <span class="project-card__dates">{icon("calendar")} {dates}</span>
            </div>

            <div class="project-card__stats">
                <div>
                    <p class="project-card__stat-label">"Budget"</p>
                    <p class="project-card__stat-value">{format_money(project.budget)}</p>
                </div>
                <div>
                    <p class="project-card__stat-label">"Spent"</p>
                    <p class="project-card__stat-value">{format_money(project.spent)}</p>
                </div>
                <div>
                    <p class="project-card__stat-label">"Team"</p>
                    <p class="project-card__stat-value">{format!("{} Members", project.team)}</p>
                </div>
                <div>
                    <p class="project-card__stat-label">"Category"</p>
                    <p class="project-card__stat-value">{project.category.clone()}</p>
                </div>
            </div>

            <div class="project-card__progress">
                <div class="project-card__progress-row">
                    <span>"Progress"</span>
                    <span>{format!("{}%", project.progress)}</span>
                </div>
                <ProgressBar value=project.progress/>
            </div>

            <div class="project-card__tags">
                {project
                    .tags
                    .iter()
                    .map(|tag| view! { <span class="badge badge--tag">{tag.clone()}</span> })
                    .collect::<Vec<_>>()}
            </div>

            <div class="project-card__footer">
                {icon("map-pin")}
                {format!("{}, {}", project.institution, project.location)}
            </div>
        </div>
    }
}

#[component]
pub fn ProjectList() -> impl IntoView {
    let state = ProjectListState::new();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    // The tab strip owns its signal; mirror it into the filters.
    let status_tab = RwSignal::new("all".to_string());
    Effect::new(move |_| {
        let tab = status_tab.get();
        state.filters.update(|f| f.status_tab = tab);
    });

    let open_details = move |project: Option<Project>| {
        let editing_id = project.as_ref().map(|p| p.id);
        modal_stack.push_with_class(Some("project-details-modal".to_string()), move |handle| {
            let on_saved = {
                let handle = handle.clone();
                Callback::new(move |draft: ProjectDraft| {
                    match editing_id {
                        Some(id) => {
                            state.save(draft.into_project(id));
                            toasts.success("Project updated successfully!");
                        }
                        None => {
                            state.save(draft.into_project(state.next_id()));
                            toasts.success("Project created successfully!");
                        }
                    }
                    handle.close();
                })
            };
            let on_cancel = {
                let handle = handle.clone();
                Callback::new(move |_| handle.close())
            };

            view! { <ProjectDetails project=project.clone() on_saved=on_saved on_cancel=on_cancel/> }
                .into_any()
        });
    };

    let open_delete_confirm = move |id: RecordId| {
        state.request_delete(id);
        let title = state
            .projects
            .get_untracked()
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.title.clone())
            .unwrap_or_default();

        modal_stack.push_with_class(Some("confirm-modal".to_string()), move |handle| {
            // Escape and overlay clicks bypass the buttons; clear the
            // marker whenever the dialog goes away. After a confirm the
            // slot is already empty, so this is a no-op.
            on_cleanup(move || state.cancel_delete());

            let confirm = {
                let handle = handle.clone();
                Callback::new(move |_| {
                    if state.confirm_delete().is_some() {
                        toasts.success("Project deleted successfully!");
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
                    <h3>"Delete Project"</h3>
                    <p>
                        {format!(
                            "This will permanently remove \"{}\" from the workspace. This action cannot be undone.",
                            title,
                        )}
                    </p>
                    <div class="confirm-dialog__actions">
                        <button class="button button--secondary" on:click=move |_| cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="button button--danger" on:click=move |_| confirm.run(())>
                            "Delete"
                        </button>
                    </div>
                </div>
            }
            .into_any()
        });
    };

    let handle_edit = Callback::new(move |project: Project| open_details(Some(project)));
    let handle_delete = Callback::new(open_delete_confirm);

    let tabs = vec![
        ("all".to_string(), "All".to_string()),
        ("ongoing".to_string(), "Ongoing".to_string()),
        ("planning".to_string(), "Planning".to_string()),
        ("completed".to_string(), "Completed".to_string()),
    ];

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Projects"</h1>
                    <p class="header__subtitle">"Manage and track all your research projects"</p>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--secondary"
                        class:button--active=move || state.show_filter_panel.get()
                        on:click=move |_| state.show_filter_panel.update(|v| *v = !*v)
                    >
                        {icon("filter")}
                        "Filter"
                    </button>
                    <button class="button button--primary" on:click=move |_| open_details(None)>
                        {icon("plus")}
                        "New Project"
                    </button>
                </div>
            </div>

            <div class="search-box">
                {icon("search")}
                <input
                    type="text"
                    placeholder="Search projects..."
                    prop:value=move || state.filters.get().search
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.filters.update(|f| f.search = value);
                    }
                />
            </div>

            <Show when=move || state.show_filter_panel.get()>
                <div class="card filter-panel">
                    <div class="filter-panel__header">
                        <h3>"Filters"</h3>
                        <button
                            class="button button--ghost"
                            on:click=move |_| state.filters.update(|f| f.reset_panel())
                        >
                            {icon("x")}
                            "Reset"
                        </button>
                    </div>
                    <div class="filter-panel__grid">
                        <Select
                            label="Category"
                            value=Signal::derive(move || state.filters.get().category)
                            on_change=Callback::new(move |v: String| {
                                state.filters.update(|f| f.category = v)
                            })
                            options=plain_options(
                                std::iter::once("All").chain(category_options()),
                            )
                        />
                        <Select
                            label="Priority"
                            value=Signal::derive(move || state.filters.get().priority)
                            on_change=Callback::new(move |v: String| {
                                state.filters.update(|f| f.priority = v)
                            })
                            options=plain_options(["All", "High", "Medium", "Low"])
                        />
                        <Select
                            label="Institution"
                            value=Signal::derive(move || state.filters.get().institution)
                            on_change=Callback::new(move |v: String| {
                                state.filters.update(|f| f.institution = v)
                            })
                            options=plain_options(
                                std::iter::once("All").chain(institution_options()),
                            )
                        />
                    </div>
                </div>
            </Show>

            <TabBar tabs=tabs active=status_tab/>

            <div class="project-grid">
                {move || {
                    state
                        .filtered()
                        .into_iter()
                        .map(|project| {
                            view! {
                                <ProjectCard
                                    project=project
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
