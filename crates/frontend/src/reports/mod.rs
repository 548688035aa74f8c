//! Reports workspace: five tabbed report views over one hand-authored
//! dataset, exportable as a spreadsheet or a PDF on the client.

pub mod beneficiaries;
pub mod export;
pub mod financial;
pub mod overview;
pub mod projects;
pub mod publications;

use contracts::reports::progress::{
    period_options, report_type_options, ColoredValue, RecentProject, ReportData,
};
use leptos::prelude::*;

use crate::shared::components::{ProgressBar, Select, TabBar};
use crate::shared::date_utils::format_date;
use crate::shared::export::{download_pdf, export_sections_to_spreadsheet};
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use crate::shared::toast::ToastService;

use beneficiaries::BeneficiariesTab;
use export::{report_csv_sections, report_pdf};
use financial::FinancialTab;
use overview::OverviewTab;
use projects::ProjectsTab;
use publications::PublicationsTab;

const CHART_PALETTE: [&str; 4] = ["#8b4513", "#d97706", "#059669", "#6366f1"];

/// Slice color for datasets that carry no color of their own.
pub(crate) fn palette_color(index: usize) -> &'static str {
    CHART_PALETTE[index % CHART_PALETTE.len()]
}

fn option_label(options: &[(&'static str, &'static str)], key: &str) -> String {
    options
        .iter()
        .find(|(value, _)| *value == key)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| key.to_string())
}

fn today_label() -> String {
    chrono::Local::now().format("%B %-d, %Y").to_string()
}

fn report_status_class(status: &str) -> &'static str {
    if status == "Active" {
        "badge badge--report-active"
    } else {
        "badge badge--report-completed"
    }
}

#[component]
pub(crate) fn RecentProjectsTable(projects: Vec<RecentProject>) -> impl IntoView {
    view! {
        <table class="table__data table--striped">
            <thead class="table__head">
                <tr>
                    <th class="table__header-cell">"Project Name"</th>
                    <th class="table__header-cell">"Status"</th>
                    <th class="table__header-cell">"Progress"</th>
                    <th class="table__header-cell table__header-cell--number">"Budget"</th>
                    <th class="table__header-cell">"Timeline"</th>
                </tr>
            </thead>
            <tbody>
                {projects
                    .into_iter()
                    .map(|project| {
                        view! {
                            <tr class="table__row">
                                <td class="table__cell">{project.name}</td>
                                <td class="table__cell">
                                    <span class=report_status_class(
                                        &project.status,
                                    )>{project.status.clone()}</span>
                                </td>
                                <td class="table__cell">
                                    <div class="table__cell-progress">
                                        <ProgressBar value=project.progress/>
                                        <span>{format!("{}%", project.progress)}</span>
                                    </div>
                                </td>
                                <td class="table__cell table__cell--number">
                                    {format_money(project.budget)}
                                </td>
                                <td class="table__cell">
                                    {format!(
                                        "{} to {}",
                                        format_date(&project.start),
                                        format_date(&project.end),
                                    )}
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

#[component]
pub(crate) fn StatusDistributionTable(rows: Vec<ColoredValue>) -> impl IntoView {
    view! {
        <table class="table__data table--striped">
            <thead class="table__head">
                <tr>
                    <th class="table__header-cell">"Status"</th>
                    <th class="table__header-cell table__header-cell--number">"Projects"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <tr class="table__row">
                                <td class="table__cell">{row.name}</td>
                                <td class="table__cell table__cell--number">
                                    {format!("{}", row.value as u32)}
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let data = ReportData::fixture();
    let report_type = RwSignal::new("executive".to_string());
    let period = RwSignal::new("2024-q2".to_string());
    let active_tab = RwSignal::new("overview".to_string());
    let visualization = RwSignal::new("chart".to_string());
    let search = RwSignal::new(String::new());

    let show_tables = Signal::derive(move || visualization.get() == "table");

    let export_data = data.clone();
    let handle_export_spreadsheet = move |_| {
        let sections = report_csv_sections(&export_data);
        let filename = format!("MEL_Report_{}.csv", period.get_untracked());
        match export_sections_to_spreadsheet(&sections, &filename) {
            Ok(()) => toasts.success("Excel report generated successfully!"),
            Err(e) => toasts.error(e),
        }
    };

    let pdf_data = data.clone();
    let handle_export_pdf = move |_| {
        let type_label = option_label(&report_type_options(), &report_type.get_untracked());
        let period_label = option_label(&period_options(), &period.get_untracked());
        let bytes = report_pdf(&pdf_data, &type_label, &period_label, &today_label());
        let filename = format!("MEL_Report_{}.pdf", period.get_untracked());
        match download_pdf(&bytes, &filename) {
            Ok(()) => toasts.success("PDF report generated successfully!"),
            Err(e) => toasts.error(e),
        }
    };

    let handle_email = move |_| {
        toasts.success("Report sent successfully to registered email addresses!");
    };
    let handle_share = move |_| {
        toasts.success("Report link copied to clipboard!");
    };
    let handle_print = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
        toasts.success("Report sent to printer!");
    };

    let report_type_select_options: Vec<(String, String)> = report_type_options()
        .into_iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect();
    let period_select_options: Vec<(String, String)> = period_options()
        .into_iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect();
    let visualization_options = vec![
        ("chart".to_string(), "Chart View".to_string()),
        ("table".to_string(), "Table View".to_string()),
    ];

    let tabs = vec![
        ("overview".to_string(), "Overview".to_string()),
        ("projects".to_string(), "Projects".to_string()),
        ("beneficiaries".to_string(), "Beneficiaries".to_string()),
        ("publications".to_string(), "Publications".to_string()),
        ("financial".to_string(), "Financial".to_string()),
    ];

    let overview_data = data.clone();
    let projects_data = data.clone();
    let beneficiaries_data = data.clone();
    let publications_data = data.clone();
    let financial_data = data.clone();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Reports"</h1>
                    <p class="header__subtitle">
                        "Generate, review and distribute program reports"
                    </p>
                </div>
            </div>

            <div class="report-toolbar">
                <div class="search-box">
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="Search reports..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                </div>
                <Select
                    value=Signal::derive(move || report_type.get())
                    on_change=Callback::new(move |v: String| report_type.set(v))
                    options=report_type_select_options
                />
                <Select
                    value=Signal::derive(move || period.get())
                    on_change=Callback::new(move |v: String| period.set(v))
                    options=period_select_options
                />
                <div class="report-toolbar__actions">
                    <button class="button button--secondary" on:click=handle_export_spreadsheet>
                        {icon("file-spreadsheet")}
                        "Excel"
                    </button>
                    <button class="button button--secondary" on:click=handle_export_pdf>
                        {icon("file-text")}
                        "PDF"
                    </button>
                    <button class="button button--secondary" on:click=handle_email>
                        {icon("mail")}
                        "Email"
                    </button>
                    <button class="button button--secondary" on:click=handle_share>
                        {icon("share")}
                        "Share"
                    </button>
                    <button class="button button--secondary" on:click=handle_print>
                        {icon("printer")}
                        "Print"
                    </button>
                </div>
            </div>

            <div class="card report-summary">
                <div class="report-summary__header">
                    <div>
                        <h3 class="report-summary__title">"Report Summary"</h3>
                        <p class="report-summary__meta">
                            {format!("Generated on {}", today_label())}
                        </p>
                    </div>
                    <Select
                        value=Signal::derive(move || visualization.get())
                        on_change=Callback::new(move |v: String| visualization.set(v))
                        options=visualization_options
                    />
                </div>

                <TabBar tabs=tabs active=active_tab/>

                <Show when=move || active_tab.get() == "overview">
                    <OverviewTab data=overview_data.clone() show_tables=show_tables/>
                </Show>
                <Show when=move || active_tab.get() == "projects">
                    <ProjectsTab data=projects_data.clone()/>
                </Show>
                <Show when=move || active_tab.get() == "beneficiaries">
                    <BeneficiariesTab data=beneficiaries_data.clone()/>
                </Show>
                <Show when=move || active_tab.get() == "publications">
                    <PublicationsTab data=publications_data.clone()/>
                </Show>
                <Show when=move || active_tab.get() == "financial">
                    <FinancialTab data=financial_data.clone()/>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_label_falls_back_to_key() {
        assert_eq!(option_label(&period_options(), "2024-q2"), "Q2 2024");
        assert_eq!(option_label(&period_options(), "2019"), "2019");
    }

    #[test]
    fn test_palette_wraps_around() {
        assert_eq!(palette_color(0), "#8b4513");
        assert_eq!(palette_color(4), "#8b4513");
        assert_eq!(palette_color(5), "#d97706");
    }
}
