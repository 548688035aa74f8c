use contracts::reports::progress::ReportData;
use leptos::prelude::*;

use crate::shared::charts::{BarChart, PieChart, SliceDatum};
use crate::shared::icons::icon;
use crate::shared::number_format::format_number_int;

#[component]
pub fn BeneficiariesTab(data: ReportData) -> impl IntoView {
    let demographic_labels: Vec<String> = data
        .beneficiaries
        .demographics
        .iter()
        .map(|d| d.name.clone())
        .collect();
    let demographic_values: Vec<f64> = data
        .beneficiaries
        .demographics
        .iter()
        .map(|d| d.value)
        .collect();

    let gender: Vec<SliceDatum> = data
        .beneficiaries
        .gender_distribution
        .iter()
        .map(|v| SliceDatum::new(v.name.clone(), v.value, v.color.clone()))
        .collect();

    let country_labels: Vec<String> = data
        .beneficiaries
        .country_distribution
        .iter()
        .map(|c| c.name.clone())
        .collect();
    let country_values: Vec<f64> = data
        .beneficiaries
        .country_distribution
        .iter()
        .map(|c| c.value)
        .collect();

    view! {
        <div class="report-tab">
            <div class="stat-grid">
                {data
                    .beneficiaries
                    .categories
                    .iter()
                    .map(|category| {
                        view! {
                            <div class="card count-card">
                                <div
                                    class="count-card__icon"
                                    style=format!("color: {};", category.color)
                                >
                                    {icon("users")}
                                </div>
                                <div class="count-card__body">
                                    <p class="count-card__label">{category.name.clone()}</p>
                                    <div class="count-card__row">
                                        <span class="count-card__value">
                                            {format_number_int(category.count as f64)}
                                        </span>
                                        <span class="badge badge--trend-up">
                                            {category.trend.clone()}
                                        </span>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="chart-grid">
                <div class="card chart-card">
                    <h3 class="chart-card__title">"Beneficiary Demographics"</h3>
                    <BarChart
                        labels=demographic_labels
                        values=demographic_values
                        color="#8b4513".to_string()
                    />
                </div>
                <div class="card chart-card">
                    <h3 class="chart-card__title">"Gender Distribution"</h3>
                    <PieChart data=gender/>
                </div>
            </div>

            <div class="card chart-card">
                <h3 class="chart-card__title">"Geographical Distribution"</h3>
                <BarChart
                    labels=country_labels
                    values=country_values
                    color="#8b4513".to_string()
                />
            </div>
        </div>
    }
}
