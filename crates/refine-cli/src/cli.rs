//! Command-line arguments and the run loop behind `refine-calc`.

use std::path::{Path, PathBuf};

use clap::Parser;
use refine_core::{
    CostError, Inventory, Outcome, RefineCalculator, RefineCostEngine, TierTable, apply_inventory,
};
use refine_data::{RefineRequest, load_named_table, load_request, load_tier_table};

use crate::error::CliError;
use crate::locale::{Language, Translator};
use crate::report::{render_breakdown, render_json, render_placeholder};

#[derive(Parser, Debug, Clone)]
#[command(name = "refine-calc")]
#[command(version, about = "Guaranteed (100% success) refine cost calculator", long_about = None)]
#[command(after_help = "Refine events change the material table. To price an event, \
                        pass its table with --table <file> or --table-name <name>.")]
pub struct Cli {
    /// Starting refine level
    #[arg(long, default_value_t = RefineCalculator::DEFAULT_START)]
    pub from: u32,

    /// Target refine level
    #[arg(long, default_value_t = RefineCalculator::DEFAULT_TARGET)]
    pub to: u32,

    /// Market price of one Ori/Elu, in zeny
    #[arg(long = "ori-price", allow_hyphen_values = true)]
    pub ori_price: Option<String>,

    /// Market price of one duplicate equipment, in zeny
    #[arg(long = "equip-price", allow_hyphen_values = true)]
    pub equip_price: Option<String>,

    /// Ori/Elu already in the inventory
    #[arg(long = "ori-owned", default_value_t = 0)]
    pub ori_owned: u64,

    /// Duplicate equipment already in the inventory
    #[arg(long = "equip-owned", default_value_t = 0)]
    pub equip_owned: u64,

    /// Tier table file (RON, TOML or JSON) instead of the built-in table,
    /// e.g. a refine-event table
    #[arg(long, conflicts_with = "table_name")]
    pub table: Option<PathBuf>,

    /// Name of a tier table in --data-dir, e.g. `event_cost` for
    /// `event_cost.ron`
    #[arg(long = "table-name")]
    pub table_name: Option<String>,

    /// Directory searched by --table-name
    #[arg(long = "data-dir", default_value = "data")]
    pub data_dir: PathBuf,

    /// Read the whole calculation from a request file
    #[arg(
        long,
        conflicts_with_all = ["from", "to", "ori_price", "equip_price", "ori_owned", "equip_owned"]
    )]
    pub request: Option<PathBuf>,

    /// Output language
    #[arg(long, value_enum, default_value_t = Language::Pt)]
    pub lang: Language,

    /// Emit JSON instead of a text report
    #[arg(long)]
    pub json: bool,
}

/// Rendered output of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    pub text: String,
    /// `false` when the prices were refused and a placeholder was rendered.
    pub computed: bool,
}

/// Where the tier table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TableSource {
    Builtin,
    File(PathBuf),
    Named { dir: PathBuf, name: String },
}

impl TableSource {
    fn from_flags(cli: &Cli) -> Self {
        match (&cli.table, &cli.table_name) {
            (Some(path), _) => TableSource::File(path.clone()),
            (None, Some(name)) => TableSource::Named {
                dir: cli.data_dir.clone(),
                name: name.clone(),
            },
            (None, None) => TableSource::Builtin,
        }
    }

    fn load(&self) -> Result<TierTable, CliError> {
        Ok(match self {
            TableSource::Builtin => TierTable::normal(),
            TableSource::File(path) => load_tier_table(path)?,
            TableSource::Named { dir, name } => load_named_table(dir, name)?,
        })
    }
}

/// Inputs after merging flags and an optional request file.
#[derive(Debug, Clone)]
struct Inputs {
    start_tier: u32,
    target_tier: u32,
    ori_price: Option<String>,
    equip_price: Option<String>,
    inventory: Inventory,
    table: TableSource,
}

impl Inputs {
    fn from_flags(cli: &Cli) -> Self {
        Self {
            start_tier: cli.from,
            target_tier: cli.to,
            ori_price: cli.ori_price.clone(),
            equip_price: cli.equip_price.clone(),
            inventory: Inventory {
                material_a_owned: cli.ori_owned,
                material_b_owned: cli.equip_owned,
            },
            table: TableSource::from_flags(cli),
        }
    }

    /// Table flags override the request's own `table` entry, which is
    /// resolved relative to the request file.
    fn from_request(req: &RefineRequest, request_path: &Path, cli: &Cli) -> Result<Self, CliError> {
        let table = match (TableSource::from_flags(cli), &req.table) {
            (TableSource::Builtin, Some(relative)) => {
                let dir = request_path
                    .parent()
                    .ok_or_else(|| CliError::RequestPath(request_path.to_path_buf()))?;
                TableSource::File(dir.join(relative))
            }
            (source, _) => source,
        };
        Ok(Self {
            start_tier: req.start_tier,
            target_tier: req.target_tier,
            ori_price: req.material_a_input(),
            equip_price: req.material_b_input(),
            inventory: req.inventory,
            table,
        })
    }
}

/// Describe why the range is not one the table's level pickers would offer.
fn range_warning(table: &TierTable, start: u32, target: u32) -> Option<String> {
    if !table.start_tiers().any(|t| t == start) {
        let starts: Vec<u32> = table.start_tiers().collect();
        Some(format!(
            "+{start} is not a starting tier of the table (expected one of {starts:?})"
        ))
    } else if !table.target_tiers(start).any(|t| t == target) {
        let targets: Vec<u32> = table.target_tiers(start).collect();
        Some(format!(
            "+{target} is not reachable from +{start} (expected one of {targets:?})"
        ))
    } else {
        None
    }
}

/// Load inputs, compute, and render.
pub fn run(cli: &Cli) -> Result<RunOutput, CliError> {
    let inputs = match &cli.request {
        Some(path) => {
            let req = load_request(path)?;
            Inputs::from_request(&req, path, cli)?
        }
        None => Inputs::from_flags(cli),
    };

    let table = inputs.table.load()?;
    if let Some(warning) = range_warning(&table, inputs.start_tier, inputs.target_tier) {
        log::warn!("{warning}");
    }

    let mut calc = RefineCalculator::new(RefineCostEngine::new(table));
    calc.set_start_tier(inputs.start_tier);
    calc.set_target_tier(inputs.target_tier);
    calc.set_material_a_price(inputs.ori_price.as_deref().unwrap_or_default());
    calc.set_material_b_price(inputs.equip_price.as_deref().unwrap_or_default());

    let tr = Translator::new(cli.lang);
    let mut text = String::new();
    let computed = match calc.outcome() {
        Outcome::Ready(breakdown) => {
            let plan = apply_inventory(breakdown, &inputs.inventory)?;
            if cli.json {
                text = render_json(Some(breakdown), Some(&plan), None)?;
            } else {
                render_breakdown(&mut text, breakdown, &plan, &tr)?;
            }
            true
        }
        Outcome::Refused(CostError::InvalidPriceInput(e)) => {
            if cli.json {
                text = render_json(None, None, Some(e.to_string()))?;
            } else {
                render_placeholder(&mut text, &tr)?;
            }
            false
        }
        Outcome::Refused(e) => return Err(CliError::Cost(e.clone())),
    };

    Ok(RunOutput { text, computed })
}
