//! Maps the active page to its view.

use crate::dashboards::DashboardPage;
use crate::domain::partner::ui::list::PartnerList;
use crate::domain::project::ui::list::ProjectList;
use crate::layout::global_context::Page;
use crate::reports::ReportsPage;
use crate::scorecard::ScorecardPage;
use leptos::prelude::*;

pub fn render_page(page: Page) -> AnyView {
    match page {
        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
        Page::Projects => view! { <ProjectList /> }.into_any(),
        Page::Partners => view! { <PartnerList /> }.into_any(),
        Page::Scorecard => view! { <ScorecardPage /> }.into_any(),
        Page::Reports => view! { <ReportsPage /> }.into_any(),
    }
}
