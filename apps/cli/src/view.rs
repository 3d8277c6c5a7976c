//! # Views
//!
//! Renders command responses as plain text for the terminal.
//!
//! ```text
//! People
//!   #0 Alice's Food And Drink Cost: $15.00
//!   #1 Bob's Food And Drink Cost: $20.00  (editing)
//!
//! Bob's Bill
//!   1. $20.00
//!
//! Shared costs
//!   Tax                            $3.50
//!   Tip                            $5.00
//!   Other Percentage-Based Costs   -
//!   Even-Split Costs               $10.00
//! ```

use std::fmt::Write;

use tabsplit_core::format::format_currency;
use tabsplit_core::{BillId, SharedCostKind};

use crate::commands::{BillResponse, PersonSummary};
use crate::state::CalculatedSplit;

const INDIVIDUAL_HEADER: &str = "Individual";
const OWED_HEADER: &str = "Total Owed";
const ENTIRE_BILL: &str = "Entire bill";

/// Name shown for a person, falling back to their id while unnamed.
fn display_name(name: &str, id: BillId) -> String {
    if name.is_empty() {
        format!("(unnamed #{})", id)
    } else {
        name.to_string()
    }
}

/// People, the open editor and shared costs.
pub fn render_bill(bill: &BillResponse) -> String {
    let mut out = String::new();

    if bill.people.is_empty() {
        out.push_str("Add individual to get started!\n");
    } else {
        out.push_str("People\n");
        for person in &bill.people {
            let editing = if bill.open_editor == Some(person.id) {
                "  (editing)"
            } else {
                ""
            };
            let _ = writeln!(
                out,
                "  #{} {}'s Food And Drink Cost: {}{}",
                person.id,
                display_name(&person.name, person.id),
                format_currency(person.subtotal),
                editing
            );
        }
    }

    if let Some(person) = bill
        .open_editor
        .and_then(|id| bill.people.iter().find(|p| p.id == id))
    {
        out.push('\n');
        out.push_str(&render_editor(person));
    }

    out.push_str("\nShared costs\n");
    let label_width = SharedCostKind::ALL
        .iter()
        .map(|k| k.label().len())
        .max()
        .unwrap_or(0);
    for kind in SharedCostKind::ALL {
        let value = bill
            .shared_costs
            .entered(kind)
            .map(format_currency)
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(out, "  {:<width$}   {}", kind.label(), value, width = label_width);
    }

    out
}

/// One person's editor: title and numbered item costs.
pub fn render_editor(person: &PersonSummary) -> String {
    let mut out = String::new();

    if person.name.is_empty() {
        out.push_str("New Individual Bill\n");
    } else {
        let _ = writeln!(out, "{}'s Bill", person.name);
    }

    if person.item_costs.is_empty() {
        out.push_str("  (no items yet)\n");
    }
    for (i, cost) in person.item_costs.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, format_currency(*cost));
    }

    out
}

/// The results table: each person's total, then the entire bill.
pub fn render_split(split: &CalculatedSplit) -> String {
    let summary = &split.summary;

    let rows: Vec<(String, String)> = summary
        .individuals
        .iter()
        .map(|i| (display_name(&i.name, i.id), format_currency(i.total)))
        .chain(std::iter::once((
            ENTIRE_BILL.to_string(),
            format_currency(summary.bill_total),
        )))
        .collect();

    let name_width = rows
        .iter()
        .map(|(name, _)| name.chars().count())
        .chain(std::iter::once(INDIVIDUAL_HEADER.len()))
        .max()
        .unwrap_or(0);
    let owed_width = rows
        .iter()
        .map(|(_, owed)| owed.len())
        .chain(std::iter::once(OWED_HEADER.len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Bill Splits (calculated {})",
        split.calculated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(
        out,
        "{:<nw$}  {:>ow$}",
        INDIVIDUAL_HEADER,
        OWED_HEADER,
        nw = name_width,
        ow = owed_width
    );
    let _ = writeln!(out, "{}", "-".repeat(name_width + 2 + owed_width));
    for (name, owed) in &rows {
        let _ = writeln!(out, "{:<nw$}  {:>ow$}", name, owed, nw = name_width, ow = owed_width);
    }

    let rates = &summary.rates;
    let _ = writeln!(
        out,
        "\nRates applied: tax {:.0}%, tip {:.0}%, other {:.0}%; even split {} each",
        rates.tax.percentage(),
        rates.tip.percentage(),
        rates.other.percentage(),
        format_currency(summary.even_split_per_person)
    );

    out
}

/// The list of shell commands.
pub const HELP: &str = "\
Commands:
  add [name]               Add a person and open their bill
  name [id] <name>         Name a person
  cost [id] <amount>       Add an item cost
  uncost [id] <item>       Delete an item cost (items are numbered from 1)
  remove <id>              Delete a person
  edit <id>                Open a person's bill
  done                     Close the open bill
  tax|tip|other <amount>   Set a percentage-based shared cost
  even <amount>            Set a cost split evenly between everybody
  tax|tip|other|even clear Clear a shared cost
  show                     Show the bill
  calc                     Calculate what everybody owes
  reset                    Remove everybody and all shared costs
  help                     Show this list
  quit                     Leave

Without an id, name/cost/uncost apply to the open bill.";

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tabsplit_core::{BillCommand, BillStore, Money};

    fn store() -> BillStore {
        let id = BillId::new(0);
        BillStore::new()
            .apply(BillCommand::AddPerson)
            .unwrap()
            .apply(BillCommand::RenamePerson {
                id,
                name: "Alice".to_string(),
            })
            .unwrap()
            .apply(BillCommand::AddItemCost {
                id,
                amount: Money::from_cents(123456),
            })
            .unwrap()
            .apply(BillCommand::AddPerson)
            .unwrap()
            .apply(BillCommand::SetSharedCost {
                kind: SharedCostKind::Tip,
                amount: Some(Money::from_cents(500)),
            })
            .unwrap()
    }

    #[test]
    fn test_render_empty_bill() {
        let text = render_bill(&BillResponse::from(&BillStore::new()));
        assert!(text.starts_with("Add individual to get started!"));
        assert!(text.contains("Tax"));
    }

    #[test]
    fn test_render_bill() {
        let text = render_bill(&BillResponse::from(&store()));

        assert!(text.contains("#0 Alice's Food And Drink Cost: $1,234.56"));
        assert!(text.contains("#1 (unnamed #1)'s Food And Drink Cost: $0.00  (editing)"));
        assert!(text.contains("New Individual Bill"));
        assert!(text.contains("(no items yet)"));
        assert!(text.contains("$5.00"));
    }

    #[test]
    fn test_render_editor_numbers_items_from_one() {
        let bill = BillResponse::from(&store());
        let text = render_editor(&bill.people[0]);

        assert!(text.starts_with("Alice's Bill"));
        assert!(text.contains("  1. $1,234.56"));
    }

    #[test]
    fn test_render_split() {
        let split = CalculatedSplit {
            summary: store().split(),
            calculated_at: Utc.with_ymd_and_hms(2024, 5, 1, 18, 30, 0).unwrap(),
        };
        let text = render_split(&split);

        assert!(text.contains("calculated 2024-05-01 18:30:00 UTC"));
        assert!(text.contains("Individual"));
        assert!(text.contains("Total Owed"));
        assert!(text.contains("Alice"));
        assert!(text.contains("Entire bill"));
        assert!(text.contains("$1,239.56"));
        assert!(text.contains("tip 0%"));
    }
}
