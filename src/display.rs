//! Rendering of calculation results for the terminal.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, ContentArrangement, Table};
use configuration::Display;
use core_types::{AverageCostResult, AveragePrice, CompoundingResult, ReturnPercent};
use rust_decimal::{Decimal, RoundingStrategy};

/// Number formatting driven by the `[display]` configuration section.
#[derive(Debug, Clone)]
pub struct Formatter {
    currency_suffix: String,
    amount_decimals: u32,
    price_decimals: u32,
    percent_decimals: u32,
}

impl Formatter {
    pub fn new(display: &Display) -> Self {
        Self {
            currency_suffix: display.currency_suffix.clone(),
            amount_decimals: display.amount_decimals,
            price_decimals: display.price_decimals,
            percent_decimals: display.percent_decimals,
        }
    }

    /// A balance or invested total, e.g. `1,126,825`.
    pub fn amount(&self, value: Decimal) -> String {
        format!("{}{}", group_thousands(value, self.amount_decimals), self.currency_suffix)
    }

    /// A per-unit price, e.g. `46,153.85`.
    pub fn price(&self, value: Decimal) -> String {
        format!("{}{}", group_thousands(value, self.price_decimals), self.currency_suffix)
    }

    pub fn average_price(&self, value: AveragePrice) -> String {
        match value {
            AveragePrice::Value(v) => self.price(v),
            AveragePrice::Unbounded => format!("∞{}", self.currency_suffix),
        }
    }

    /// A unit count. Never carries the currency suffix.
    pub fn quantity(&self, value: Decimal) -> String {
        group_thousands(value, self.price_decimals)
    }

    /// A percentage return, or `∞%` when measured against nothing.
    pub fn percent(&self, value: ReturnPercent) -> String {
        match value {
            ReturnPercent::Finite(v) => format!("{}%", group_thousands(v, self.percent_decimals)),
            ReturnPercent::Unbounded => "∞%".to_string(),
        }
    }
}

/// Rounds half away from zero and inserts `,` every three integer digits.
pub fn group_thousands(value: Decimal, decimals: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        // Avoid printing "-0".
        rounded.set_sign_positive(true);
    }

    let text = format!("{:.*}", decimals as usize, rounded);
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

fn new_table(header: Vec<&str>) -> Table {
    let columns = header.len();
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    for index in 1..columns {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

/// Headline figures of a simulation as label/value pairs.
pub fn compounding_summary(fmt: &Formatter, result: &CompoundingResult) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Final balance", fmt.amount(result.final_balance)),
        ("Overall return", fmt.percent(result.overall_return)),
        ("Total interest", fmt.amount(result.total_interest)),
    ];
    if !result.total_contributed.is_zero() {
        rows.push(("Total contributed", fmt.amount(result.total_contributed)));
    }
    rows.push(("Periods", result.ledger.len().to_string()));
    rows
}

/// The period ledger. The contribution column only appears when something was contributed.
pub fn ledger_table(fmt: &Formatter, result: &CompoundingResult) -> Table {
    let with_contributions = !result.total_contributed.is_zero();

    let mut header = vec!["Period", "Starting balance", "Interest"];
    if with_contributions {
        header.push("Contribution");
    }
    header.extend(["Ending balance", "Return"]);

    let mut table = new_table(header);
    for record in &result.ledger {
        let mut row = vec![
            record.period_index.to_string(),
            fmt.amount(record.starting_balance),
            fmt.amount(record.interest_earned),
        ];
        if with_contributions {
            row.push(fmt.amount(record.contribution));
        }
        row.push(fmt.amount(record.ending_balance));
        row.push(fmt.percent(record.cumulative_return));
        table.add_row(row);
    }
    table
}

pub fn average_cost_summary(fmt: &Formatter, result: &AverageCostResult) -> Vec<(&'static str, String)> {
    vec![
        ("Total investment", fmt.amount(result.total_investment)),
        ("Total quantity", fmt.quantity(result.total_quantity)),
        ("Average price", fmt.average_price(result.average_price)),
    ]
}

/// One row per submitted purchase, including the ones that did not count.
pub fn purchase_table(fmt: &Formatter, result: &AverageCostResult) -> Table {
    let mut table = new_table(vec!["#", "Amount", "Unit price", "Quantity", "Counted"]);
    for line in &result.lines {
        table.add_row(vec![
            (line.index + 1).to_string(),
            fmt.amount(line.amount),
            fmt.price(line.unit_price),
            fmt.quantity(line.quantity),
            if line.included { "yes" } else { "no" }.to_string(),
        ]);
    }
    table
}

pub fn summary_table(rows: Vec<(&'static str, String)>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    for (label, value) in rows {
        table.add_row(vec![label.to_string(), value]);
    }
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn formatter() -> Formatter {
        Formatter::new(&Display::default())
    }

    #[test]
    fn groups_integer_digits() {
        assert_eq!(group_thousands(dec!(1126825.030131969720661201), 0), "1,126,825");
        assert_eq!(group_thousands(dec!(999), 0), "999");
        assert_eq!(group_thousands(dec!(1000), 0), "1,000");
        assert_eq!(group_thousands(dec!(-1234567.891), 2), "-1,234,567.89");
        assert_eq!(group_thousands(dec!(46153.846153), 2), "46,153.85");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(group_thousands(dec!(2.5), 0), "3");
        assert_eq!(group_thousands(dec!(0.125), 2), "0.13");
    }

    #[test]
    fn never_prints_negative_zero() {
        assert_eq!(group_thousands(dec!(-0.001), 2), "0.00");
    }

    #[test]
    fn pads_to_requested_decimals() {
        assert_eq!(group_thousands(dec!(5), 2), "5.00");
        assert_eq!(group_thousands(dec!(32.5), 2), "32.50");
    }

    #[test]
    fn unbounded_return_renders_as_infinity() {
        assert_eq!(formatter().percent(ReturnPercent::Unbounded), "∞%");
        assert_eq!(formatter().percent(ReturnPercent::Finite(dec!(12.68250301))), "12.68%");
    }

    #[test]
    fn currency_suffix_applies_to_money_only() {
        let display = Display {
            currency_suffix: "원".to_string(),
            ..Display::default()
        };
        let fmt = Formatter::new(&display);
        assert_eq!(fmt.amount(dec!(1500000)), "1,500,000원");
        assert_eq!(fmt.quantity(dec!(32.5)), "32.50");
        assert_eq!(fmt.average_price(AveragePrice::Unbounded), "∞원");
    }
}
