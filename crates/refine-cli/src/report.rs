//! Rendering of a computation as a text report or JSON.

use std::fmt::{self, Write};

use refine_core::{CostBreakdown, InventoryPlan, Zeny};
use serde::Serialize;

use crate::format::{format_units, format_zeny};
use crate::locale::Translator;

const CURRENCY_SUFFIX: &str = " z";

fn zeny(amount: Zeny, tr: &Translator) -> String {
    let mut s = format_zeny(amount, tr.language());
    s.push_str(CURRENCY_SUFFIX);
    s
}

fn write_header(out: &mut impl Write, tr: &Translator) -> fmt::Result {
    writeln!(out, "{}", tr.t("app.title"))?;
    writeln!(out, "{}", tr.t("app.subtitle"))
}

/// Shown instead of numbers when prices are missing or invalid.
pub fn render_placeholder(out: &mut impl Write, tr: &Translator) -> fmt::Result {
    write_header(out, tr)?;
    writeln!(out)?;
    writeln!(out, "{}", tr.t("placeholder.message"))
}

/// Full text report: summary figures, the per-step table, the inventory
/// section when stock is used, and the footer.
pub fn render_breakdown(
    out: &mut impl Write,
    breakdown: &CostBreakdown,
    plan: &InventoryPlan,
    tr: &Translator,
) -> fmt::Result {
    let lang = tr.language();
    let units = tr.t("results.units");
    let start = breakdown.start_tier.to_string();
    let target = breakdown.target_tier.to_string();
    let range_args = [("start", start.as_str()), ("target", target.as_str())];

    write_header(out, tr)?;
    writeln!(out)?;
    writeln!(out, "{}", tr.t("results.title"))?;
    writeln!(
        out,
        "  {}: {}",
        tr.t("results.total_cost"),
        zeny(breakdown.total_cost, tr)
    )?;
    writeln!(
        out,
        "  {}: {} {units}",
        tr.t("results.material_a_total"),
        format_units(breakdown.total_material_a, lang)
    )?;
    writeln!(
        out,
        "  {}: {} {units}",
        tr.t("results.material_b_total"),
        format_units(breakdown.total_material_b, lang)
    )?;
    writeln!(
        out,
        "  {}: {}",
        tr.t("results.guarantee"),
        tr.t_with("results.range", &range_args)
    )?;
    writeln!(out)?;

    if breakdown.is_empty() {
        writeln!(out, "{}", tr.t_with("results.empty_range", &range_args))?;
    } else {
        render_table(out, breakdown, tr)?;
    }

    if plan.uses_stock() {
        write_stock(out, plan, tr)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", tr.t("footer.title"))?;
    for key in ["footer.source", "footer.no_risk", "footer.formula"] {
        writeln!(out, "  • {}", tr.t(key))?;
    }
    Ok(())
}

fn write_stock(out: &mut impl Write, plan: &InventoryPlan, tr: &Translator) -> fmt::Result {
    let lang = tr.language();
    writeln!(out)?;
    writeln!(
        out,
        "{}: {}",
        tr.t("results.after_inventory"),
        zeny(plan.net_cost, tr)
    )?;
    writeln!(
        out,
        "  {}: {}",
        tr.t("results.gross_cost"),
        zeny(plan.gross_cost, tr)
    )?;
    writeln!(
        out,
        "  {}: {}",
        tr.t("results.stock_savings"),
        zeny(plan.stock_savings, tr)
    )?;
    for (label, usage) in [
        ("results.material_a_total", &plan.material_a),
        ("results.material_b_total", &plan.material_b),
    ] {
        let stock = format_units(usage.from_stock, lang);
        let buy = format_units(usage.to_buy, lang);
        writeln!(
            out,
            "  {}: {}",
            tr.t(label),
            tr.t_with(
                "results.stock_split",
                &[("stock", stock.as_str()), ("buy", buy.as_str())]
            )
        )?;
    }
    Ok(())
}

/// Pad every cell to its column width; the first column is left-aligned.
fn write_row(out: &mut impl Write, cells: &[String], widths: &[usize]) -> fmt::Result {
    for (i, (cell, &w)) in cells.iter().zip(widths).enumerate() {
        match i {
            0 => write!(out, "{cell:<w$}")?,
            _ => write!(out, "  {cell:>w$}")?,
        }
    }
    writeln!(out)
}

/// The per-step table with right-aligned, width-fitted columns.
pub fn render_table(out: &mut impl Write, breakdown: &CostBreakdown, tr: &Translator) -> fmt::Result {
    let lang = tr.language();
    let headers: Vec<String> = [
        "table.level",
        "table.material_a",
        "table.material_b",
        "table.base_cost",
        "table.material_a_cost",
        "table.material_b_cost",
        "table.step_total",
        "table.cumulative",
    ]
    .iter()
    .map(|key| tr.t(key).to_string())
    .collect();

    let rows: Vec<Vec<String>> = breakdown
        .results
        .iter()
        .map(|r| {
            vec![
                format!("+{} → +{}", r.from_tier(), r.to_tier()),
                format_units(u64::from(r.step.material_a_quantity), lang),
                format_units(u64::from(r.step.material_b_quantity), lang),
                zeny(r.base_cost(), tr),
                zeny(r.material_a_cost, tr),
                zeny(r.material_b_cost, tr),
                zeny(r.step_total_cost, tr),
                zeny(r.cumulative_cost, tr),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    write_row(out, &headers, &widths)?;
    let rule: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    writeln!(out, "{}", "-".repeat(rule))?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    breakdown: Option<&'a CostBreakdown>,
    inventory: Option<&'a InventoryPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// JSON document with the breakdown and inventory plan, or the reason the
/// computation was refused.
pub fn render_json(
    breakdown: Option<&CostBreakdown>,
    plan: Option<&InventoryPlan>,
    error: Option<String>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        breakdown,
        inventory: plan,
        error,
    })
}
