use contracts::reports::dashboard::{Activity, ActivityData};
use leptos::prelude::*;

use crate::shared::components::ProgressBar;
use crate::shared::icons::icon;

fn activity_status_class(status: &str) -> String {
    format!("badge badge--activity-{}", status.to_lowercase())
}

#[component]
fn ActivityCard(activity: Activity) -> impl IntoView {
    view! {
        <div class="card activity-card">
            <div class="activity-card__header">
                <h4 class="activity-card__title">{activity.title.clone()}</h4>
                <span class=activity_status_class(&activity.status)>{activity.status.clone()}</span>
            </div>

            <p class="activity-card__description">{activity.description.clone()}</p>

            <div class="activity-card__meta">
                <span>{icon("calendar")} {activity.date.clone()}</span>
                <span>{icon("clock")} {activity.time.clone()}</span>
                <span>{icon("map-pin")} {activity.location.clone()}</span>
                <span>{icon("users")} {format!("{} participants", activity.participants)}</span>
            </div>

            <div class="activity-card__progress">
                <div class="activity-card__progress-row">
                    <span>{activity.activity_type.clone()}</span>
                    <span>{format!("{}%", activity.completion)}</span>
                </div>
                <ProgressBar value=activity.completion/>
            </div>

            <div class="activity-card__tags">
                {activity
                    .tags
                    .iter()
                    .map(|tag| view! { <span class="badge badge--tag">{tag.clone()}</span> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
pub fn ActivitiesTab() -> impl IntoView {
    let data = ActivityData::fixture();

    view! {
        <div class="dashboard-tab">
            <div class="activity-section">
                <h3 class="activity-section__title">"Upcoming Activities"</h3>
                <div class="activity-grid">
                    {data
                        .upcoming
                        .into_iter()
                        .map(|a| view! { <ActivityCard activity=a/> })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <div class="activity-section">
                <h3 class="activity-section__title">"Recent Activities"</h3>
                <div class="activity-grid">
                    {data
                        .recent
                        .into_iter()
                        .map(|a| view! { <ActivityCard activity=a/> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
