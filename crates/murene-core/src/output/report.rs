//! Report
//!
//! The four panels of the run overview (beauty, debt, average utility,
//! reparations) and a plain-text rendering of them.

use std::fmt;

use murene_events::{History, HistorySummary};

use crate::components::ParameterSet;

/// One titled line series
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub title: &'static str,
    pub values: Vec<f64>,
}

/// Series for the four overview panels, in display order
pub fn chart_series(history: &History) -> [ChartSeries; 4] {
    [
        ChartSeries {
            title: "Moral Beauty B",
            values: history.beauty.clone(),
        },
        ChartSeries {
            title: "Moral Debt Dm",
            values: history.debt.clone(),
        },
        ChartSeries {
            title: "Average Utility",
            values: history.mean_utility(),
        },
        ChartSeries {
            title: "Reparations",
            values: history.reparations.clone(),
        },
    ]
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.6}", v))
}

/// Plain-text report: parameters, final values and per-panel ranges
pub struct Report<'a> {
    history: &'a History,
    params: &'a ParameterSet,
}

impl<'a> Report<'a> {
    pub fn new(history: &'a History, params: &'a ParameterSet) -> Self {
        Self { history, params }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = HistorySummary::from_history(self.history);

        writeln!(f, "Parameters")?;
        for (name, value) in self.params.entries() {
            writeln!(f, "  {:<12} {}", name, value)?;
        }

        writeln!(f)?;
        writeln!(f, "Run: {} steps, {} agents", summary.steps, summary.num_agents)?;
        writeln!(f, "  Final B:            {}", fmt_opt(summary.final_beauty))?;
        writeln!(f, "  Final Dm:           {}", fmt_opt(summary.final_debt))?;
        writeln!(f, "  Final D:            {}", fmt_opt(summary.final_drift))?;
        writeln!(f, "  Final R:            {}", fmt_opt(summary.final_reparations))?;
        writeln!(f, "  Final mean utility: {}", fmt_opt(summary.final_mean_utility))?;
        if let Some(step) = summary.debt_overflow_step {
            writeln!(f, "  Dm left the finite range at step {}", step)?;
        }

        writeln!(f)?;
        for series in chart_series(self.history) {
            writeln!(
                f,
                "{:<16} first {:>16}  last {:>16}",
                series.title,
                fmt_opt(series.values.first().copied()),
                fmt_opt(series.values.last().copied())
            )?;
        }
        Ok(())
    }
}

/// Render the report to a string
pub fn render_report(history: &History, params: &ParameterSet) -> String {
    Report::new(history, params).to_string()
}
