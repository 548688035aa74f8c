use contracts::reports::dashboard::BudgetData;
use leptos::prelude::*;

use crate::shared::charts::{GroupedBarChart, PieChart, SeriesDatum, SliceDatum};
use crate::shared::number_format::format_money;

#[component]
pub fn BudgetTab() -> impl IntoView {
    let data = BudgetData::fixture();
    let overview = data.overview;

    let overview_cards = [
        ("Total Budget", overview.total, 100u8),
        ("Spent", overview.spent, overview.spent_share()),
        ("Committed", overview.committed, overview.committed_share()),
        ("Remaining", overview.remaining, overview.remaining_share()),
    ];

    let categories: Vec<SliceDatum> = data
        .expense_categories
        .iter()
        .map(|s| SliceDatum::new(s.name.clone(), s.value, s.color.clone()))
        .collect();

    let quarters: Vec<String> = data
        .quarterly_trends
        .iter()
        .map(|q| q.quarter.clone())
        .collect();
    let quarterly_series = vec![
        SeriesDatum::new(
            "Allocated",
            "#d4d4a7",
            data.quarterly_trends.iter().map(|q| q.allocated).collect(),
        ),
        SeriesDatum::new(
            "Spent",
            "#8b4513",
            data.quarterly_trends.iter().map(|q| q.spent).collect(),
        ),
    ];

    view! {
        <div class="dashboard-tab">
            <div class="stat-grid">
                {overview_cards
                    .into_iter()
                    .map(|(label, amount, share)| {
                        view! {
                            <div class="card budget-card">
                                <p class="budget-card__label">{label}</p>
                                <p class="budget-card__value">{format_money(amount)}</p>
                                <p class="budget-card__share">{format!("{}% of total", share)}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="chart-grid">
                <div class="card chart-card">
                    <h3 class="chart-card__title">"Expense Categories"</h3>
                    <PieChart data=categories/>
                </div>
                <div class="card chart-card">
                    <h3 class="chart-card__title">"Quarterly Trends"</h3>
                    <GroupedBarChart labels=quarters series=quarterly_series/>
                </div>
            </div>

            <div class="card">
                <h3 class="chart-card__title">"Recent Transactions"</h3>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Description"</th>
                            <th class="table__header-cell">"Project"</th>
                            <th class="table__header-cell">"Date"</th>
                            <th class="table__header-cell table__header-cell--number">"Amount"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {data
                            .transactions
                            .into_iter()
                            .map(|t| {
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{t.description}</td>
                                        <td class="table__cell">{t.project}</td>
                                        <td class="table__cell">{t.date}</td>
                                        <td class="table__cell table__cell--number">
                                            {format_money(t.amount)}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
