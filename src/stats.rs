//! Sampling the hook catalog, to check what a campaign will actually spend its time on.
use ::comfy_table::{Cell, Table};
use ::indexmap::IndexMap;
use ::tfgen::{GenerationContext, HookInvocationGenerator, RandomSource};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Row {
    pub weight: u64,
    /// Chance of drawing this row.
    pub expected: f64,
    pub observed: u64,
}

/// Draw `samples` invocations and count them by row label, in table order.
pub(crate) fn sample(
    generator: &HookInvocationGenerator<'_>,
    rng: &mut dyn RandomSource,
    context: &GenerationContext<'_>,
    samples: u64,
) -> IndexMap<&'static str, Row> {
    let catalog = generator.catalog();
    let mut rows: IndexMap<&'static str, Row> = catalog
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let row = Row {
                weight: entry.weight(),
                expected: catalog.probability(index).unwrap_or(0.0),
                observed: 0,
            };
            (entry.value().label(), row)
        })
        .collect();
    for _ in 0..samples {
        let invocation = generator.generate(rng, context);
        if let Some(row) = rows.get_mut(invocation.label()) {
            row.observed += 1;
        }
    }
    rows
}

pub(crate) fn table(rows: &IndexMap<&'static str, Row>) -> Table {
    let samples: u64 = rows.values().map(|row| row.observed).sum();
    let mut table = Table::new();
    table.set_header(vec!["row", "weight", "expected", "observed"]);
    for (label, row) in rows {
        let observed = if samples == 0 {
            0.0
        } else {
            row.observed as f64 / samples as f64
        };
        table.add_row(vec![
            Cell::new(label),
            Cell::new(row.weight),
            Cell::new(format!("{:.2}%", row.expected * 100.0)),
            Cell::new(format!("{:.2}%", observed * 100.0)),
        ]);
    }
    table
}
