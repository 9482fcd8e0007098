//! Display strings in Portuguese and English.
//!
//! Lookups never fail: an unknown key is returned as-is so a missing
//! translation shows up in the output instead of hiding a line.

/// Output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Language {
    #[default]
    Pt,
    En,
}

const PT: &[(&str, &str)] = &[
    ("app.title", "Calculadora de Refino"),
    ("app.subtitle", "Calcule o custo total para refinar seus equipamentos"),
    ("table.level", "Nível"),
    ("table.material_a", "Ori/Elu"),
    ("table.material_b", "Equips"),
    ("table.base_cost", "Zeny"),
    ("table.material_a_cost", "Custo Materiais"),
    ("table.material_b_cost", "Custo Equipamentos"),
    ("table.step_total", "Total Nível"),
    ("table.cumulative", "Acumulado"),
    ("results.title", "Custo Total (100% Garantido)"),
    ("results.total_cost", "Custo Total"),
    ("results.material_a_total", "Ori/Elu Total"),
    ("results.material_b_total", "Equipamentos Total"),
    ("results.units", "unidades"),
    ("results.after_inventory", "Após aplicar o estoque existente"),
    ("results.gross_cost", "Custo bruto"),
    ("results.stock_savings", "Economia do estoque"),
    ("results.stock_split", "Estoque: {stock} | Comprar: {buy}"),
    ("results.guarantee", "Garantia de Sucesso"),
    (
        "results.range",
        "100% de sucesso garantido | De +{start} para +{target}",
    ),
    ("results.empty_range", "Nenhum passo da tabela entre +{start} e +{target}"),
    (
        "placeholder.message",
        "Insira o preço do Ori/Elu para calcular o custo garantido de refino",
    ),
    ("footer.title", "Refino com 100% de garantia de sucesso:"),
    ("footer.source", "Valores baseados na tabela \"Normal Cost\" oficial"),
    ("footer.no_risk", "Sem risco de perder o item ou materiais"),
    (
        "footer.formula",
        "Custo total = Zeny + (Ori/Elu × preço) + (Equipamentos × preço)",
    ),
];

const EN: &[(&str, &str)] = &[
    ("app.title", "Refine Calculator"),
    ("app.subtitle", "Calculate the total cost to refine your equipment"),
    ("table.level", "Level"),
    ("table.material_a", "Ori/Elu"),
    ("table.material_b", "Equips"),
    ("table.base_cost", "Zeny"),
    ("table.material_a_cost", "Materials Cost"),
    ("table.material_b_cost", "Equipment Cost"),
    ("table.step_total", "Level Total"),
    ("table.cumulative", "Accumulated"),
    ("results.title", "Total Cost (100% Guaranteed)"),
    ("results.total_cost", "Total Cost"),
    ("results.material_a_total", "Ori/Elu Total"),
    ("results.material_b_total", "Equipment Total"),
    ("results.units", "units"),
    ("results.after_inventory", "After applying your stock"),
    ("results.gross_cost", "Gross cost"),
    ("results.stock_savings", "Stock savings"),
    ("results.stock_split", "Stock: {stock} | Buy: {buy}"),
    ("results.guarantee", "Success Guarantee"),
    (
        "results.range",
        "100% guaranteed success | From +{start} to +{target}",
    ),
    ("results.empty_range", "No table steps between +{start} and +{target}"),
    (
        "placeholder.message",
        "Enter the Ori/Elu price to calculate the guaranteed refine cost",
    ),
    ("footer.title", "100% guaranteed success refining:"),
    ("footer.source", "Values based on official \"Normal Cost\" table"),
    ("footer.no_risk", "No risk of losing items or materials"),
    (
        "footer.formula",
        "Total cost = Zeny + (Ori/Elu × price) + (Equipment × price)",
    ),
];

/// Looks up display strings for one language.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// The string for `key`, or `key` itself when there is no entry.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        let table = match self.language {
            Language::Pt => PT,
            Language::En => EN,
        };
        table
            .iter()
            .find(|(k, _)| *k == key)
            .map_or(key, |(_, v)| *v)
    }

    /// Like [`Translator::t`], replacing each `{name}` with its value.
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut out = self.t(key).to_string();
        for (name, value) in args {
            out = out.replace(&format!("{{{name}}}"), value);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_is_portuguese() {
        let t = Translator::new(Language::default());
        assert_eq!(t.t("results.total_cost"), "Custo Total");
    }

    #[test]
    fn english_lookup() {
        let t = Translator::new(Language::En);
        assert_eq!(t.t("table.cumulative"), "Accumulated");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        let t = Translator::new(Language::En);
        assert_eq!(t.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn interpolation() {
        let t = Translator::new(Language::En);
        assert_eq!(
            t.t_with("results.range", &[("start", "4"), ("target", "7")]),
            "100% guaranteed success | From +4 to +7"
        );
        assert_eq!(
            t.t_with("results.stock_split", &[("stock", "25"), ("buy", "5")]),
            "Stock: 25 | Buy: 5"
        );
    }

    #[test]
    fn both_languages_share_keys() {
        let pt: Vec<&str> = PT.iter().map(|(k, _)| *k).collect();
        let en: Vec<&str> = EN.iter().map(|(k, _)| *k).collect();
        assert_eq!(pt, en);
    }
}
