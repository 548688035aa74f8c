use contracts::reports::progress::ReportData;
use leptos::prelude::*;

use crate::shared::charts::{GroupedBarChart, PieChart, SeriesDatum, SliceDatum};
use crate::shared::components::ProgressBar;
use crate::shared::number_format::format_money;

use super::palette_color;

fn budget_share(part: f64, total: f64) -> u8 {
    if total <= 0.0 {
        return 0;
    }
    ((part / total) * 100.0).round().clamp(0.0, 100.0) as u8
}

#[component]
pub fn FinancialTab(data: ReportData) -> impl IntoView {
    let overview = data.financial.overview;
    let total = overview.total_budget;

    let overview_cards = [
        ("Total Budget", overview.total_budget),
        ("Allocated", overview.allocated),
        ("Spent", overview.spent),
        ("Remaining", overview.remaining),
    ];

    let category_slices: Vec<SliceDatum> = data
        .financial
        .categories
        .iter()
        .enumerate()
        .map(|(i, c)| SliceDatum::new(c.name.clone(), c.value, palette_color(i)))
        .collect();

    let months: Vec<String> = data
        .financial
        .monthly_spending
        .iter()
        .map(|m| m.month.clone())
        .collect();
    let spending_series = vec![
        SeriesDatum::new(
            "Planned",
            "#8b4513",
            data.financial
                .monthly_spending
                .iter()
                .map(|m| m.planned)
                .collect(),
        ),
        SeriesDatum::new(
            "Actual",
            "#d97706",
            data.financial
                .monthly_spending
                .iter()
                .map(|m| m.actual)
                .collect(),
        ),
    ];

    view! {
        <div class="report-tab">
            <div class="stat-grid">
                {overview_cards
                    .into_iter()
                    .map(|(label, amount)| {
                        let share = budget_share(amount, total);
                        view! {
                            <div class="card budget-card">
                                <p class="budget-card__label">{label}</p>
                                <p class="budget-card__value">{format_money(amount)}</p>
                                <ProgressBar value=share/>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="chart-grid">
                <div class="card chart-card">
                    <h3 class="chart-card__title">"Budget Allocation"</h3>
                    <PieChart data=category_slices/>
                </div>
                <div class="card chart-card">
                    <h3 class="chart-card__title">"Monthly Spending"</h3>
                    <GroupedBarChart labels=months series=spending_series/>
                </div>
            </div>

            <div class="card">
                <h3 class="chart-card__title">"Budget Categories"</h3>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell table__header-cell--number">
                                "Allocation"
                            </th>
                            <th class="table__header-cell">"Percentage"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {data
                            .financial
                            .categories
                            .iter()
                            .map(|category| {
                                let share = budget_share(category.value, total);
                                let exact = if total > 0.0 {
                                    category.value / total * 100.0
                                } else {
                                    0.0
                                };
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{category.name.clone()}</td>
                                        <td class="table__cell table__cell--number">
                                            {format_money(category.value)}
                                        </td>
                                        <td class="table__cell">
                                            <div class="table__cell-progress">
                                                <ProgressBar value=share/>
                                                <span>{format!("{:.1}%", exact)}</span>
                                            </div>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_share_rounds_and_clamps() {
        assert_eq!(budget_share(5_000_000.0, 12_500_000.0), 40);
        assert_eq!(budget_share(1.0, 0.0), 0);
        assert_eq!(budget_share(200.0, 100.0), 100);
    }
}
