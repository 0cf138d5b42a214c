//! Pairing summary report

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;
use serde::Serialize;

use crate::pipeline::{Pairing, Performance};

/// Category counts and pairing coverage for one pairing run
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct PairingSummary {
    pub students: usize,
    pub good: usize,
    pub neutral: usize,
    pub poor: usize,
    pub pairs: usize,
    pub unpaired: usize,
}

impl PairingSummary {
    pub fn from_pairing(pairing: &Pairing) -> Self {
        Self {
            students: pairing.summaries.len(),
            good: pairing.count(Performance::Good),
            neutral: pairing.count(Performance::Neutral),
            poor: pairing.count(Performance::Poor),
            pairs: pairing.pairs.len(),
            unpaired: pairing.unpaired(),
        }
    }

    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("👥 Students"), Cell::new(self.students)]);
        table.add_row(vec![
            Cell::new("🟢 Good"),
            Cell::new(self.good).fg(Color::Green),
        ]);
        table.add_row(vec![Cell::new("⚪ Neutral"), Cell::new(self.neutral)]);
        table.add_row(vec![
            Cell::new("🔴 Poor"),
            Cell::new(self.poor).fg(Color::Red),
        ]);
        table.add_row(vec![
            Cell::new("🤝 Pairs"),
            Cell::new(self.pairs)
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![
            Cell::new("⏳ Unpaired"),
            Cell::new(self.unpaired).fg(if self.unpaired == 0 {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);

        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("PAIRING SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());

        for line in self.table().to_string().lines() {
            println!("    {}", line);
        }
    }
}
