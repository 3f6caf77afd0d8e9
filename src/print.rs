//! Console rendering of summaries and breakdowns as [stanza] tables.

use std::fmt::Display;

use stanza::style::{HAlign, Header, MinWidth, Styles};
use stanza::table::{Cell, Col, Row, Table};
use strum::IntoEnumIterator;

use crate::breakdown::CategoryGroup;
use crate::domain::Outcome;
use crate::summary::ShotSummary;

pub fn tabulate_summary(summary: &ShotSummary) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(20))),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Metric".into(), "Value".into()],
        ));

    table.push_row(metric_row("Total shots", format!("{}", summary.shots)));
    table.push_row(metric_row("Goals scored", format!("{}", summary.goals)));
    table.push_row(metric_row(
        "Conversion",
        format!("{:.1}%", summary.conversion_rate() * 100.),
    ));
    table.push_row(metric_row(
        "On target",
        format!("{:.1}%", summary.on_target_rate() * 100.),
    ));
    for outcome in Outcome::iter() {
        if summary.outcomes.count(outcome) > 0 {
            table.push_row(metric_row(
                &format!("{outcome}"),
                format!("{:.0}%", summary.outcome_rate(outcome) * 100.),
            ));
        }
    }
    table.push_row(metric_row("Total xG", format!("{:.2}", summary.xg_sum)));
    table.push_row(metric_row("xG +/-", format!("{:+.2}", summary.xg_delta())));
    table.push_row(metric_row(
        "Lethality",
        format!("{:.2}", summary.lethality()),
    ));
    table.push_row(metric_row(
        "Highest xG",
        match summary.max_xg {
            Some(max_xg) => format!("{max_xg:.3}"),
            None => "—".into(),
        },
    ));
    table.push_row(metric_row(
        "Avg xG per shot",
        format!("{:.3}", summary.avg_xg()),
    ));
    table
}

fn metric_row(label: &str, value: String) -> Row {
    Row::new(Styles::default(), vec![label.into(), value.into()])
}

pub fn tabulate_breakdown<C: Display>(label: &str, groups: &[CategoryGroup<C>]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(16))),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(12)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                label.into(),
                "Attempts".into(),
                "Goals".into(),
                "Conversion".into(),
            ],
        ));
    table.push_rows(groups.iter().map(|group| {
        Row::new(
            Styles::default(),
            vec![
                format!("{}", group.category).into(),
                format!("{}", group.attempts).into(),
                format!("{}", group.goals).into(),
                format!("{:.1}%", group.conversion_rate() * 100.).into(),
            ],
        )
    }));
    table
}

pub fn tabulate_players(rows: &[(String, ShotSummary)]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(24))),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Player".into(),
                "Shots".into(),
                "Goals".into(),
                "Total xG".into(),
                "xG +/-".into(),
                "Lethality".into(),
            ],
        ));
    table.push_rows(rows.iter().map(|(player, summary)| {
        Row::new(
            Styles::default(),
            vec![
                Cell::new(Styles::default(), player.clone().into()),
                Cell::new(
                    Styles::default().with(HAlign::Right),
                    format!("{}", summary.shots).into(),
                ),
                Cell::new(
                    Styles::default().with(HAlign::Right),
                    format!("{}", summary.goals).into(),
                ),
                Cell::new(
                    Styles::default().with(HAlign::Right),
                    format!("{:.2}", summary.xg_sum).into(),
                ),
                Cell::new(
                    Styles::default().with(HAlign::Right),
                    format!("{:+.2}", summary.xg_delta()).into(),
                ),
                Cell::new(
                    Styles::default().with(HAlign::Right),
                    format!("{:.2}", summary.lethality()).into(),
                ),
            ],
        )
    }));
    table
}
