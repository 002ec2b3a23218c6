use std::io::Write;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use subset_sums::subset::{ReachabilityTable, Weights};

use crate::config::{OutputFormat, Settings};

/// A weight collection together with the table built for it.
pub struct Session {
    weights: Weights,
    table: ReachabilityTable,
}

impl Session {
    /// Builds the table up to `max_sum`, or up to the total of all weights.
    pub fn new(weights: Weights, max_sum: Option<u64>, settings: &Settings) -> Result<Self> {
        let max_sum = max_sum.unwrap_or_else(|| weights.total());
        let table = ReachabilityTable::build_bounded(&weights, max_sum, settings.max_sum_limit)
            .context("build reachability table")?;

        info!(weights = %weights, max_sum, "session ready");

        Ok(Self { weights, table })
    }

    /// One table for a batch of queries, sized for the largest sum asked.
    ///
    /// Sums above the total of all weights are then unreachable rather than
    /// out of range.
    pub fn for_queries(weights: Weights, sums: &[u64], settings: &Settings) -> Result<Self> {
        let max_sum = sums.iter().copied().max().unwrap_or(0);
        Self::new(weights, Some(max_sum), settings)
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn table(&self) -> &ReachabilityTable {
        &self.table
    }

    pub fn report(&self, sum: u64) -> Result<SumReport> {
        let subset = self
            .table
            .reconstruct(&self.weights, sum)
            .with_context(|| format!("reconstruct subset for {sum}"))?;

        Ok(SumReport {
            sum,
            subset: subset.map(|s| s.into_weights()),
        })
    }

    pub fn reports<I>(&self, sums: I) -> Result<Vec<SumReport>>
    where
        I: IntoIterator<Item = u64>,
    {
        sums.into_iter().map(|sum| self.report(sum)).collect()
    }

    /// Every sum the table covers, from zero up.
    pub fn all(&self) -> Result<Vec<SumReport>> {
        self.reports(0..=self.table.max_sum())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumReport {
    pub sum: u64,
    /// `None` when no subset adds up to `sum`
    pub subset: Option<Vec<u64>>,
}

impl SumReport {
    pub fn is_reachable(&self) -> bool {
        self.subset.is_some()
    }
}

impl std::fmt::Display for SumReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: ", self.sum)?;
        match &self.subset {
            Some(weights) => {
                let items = weights.iter().map(u64::to_string).collect::<Vec<_>>();
                write!(f, "[{}]", items.join(" "))
            }
            None => f.write_str("-"),
        }
    }
}

/// Reports left after applying `reachable_only`.
pub fn shown<'a>(reports: &'a [SumReport], settings: &Settings) -> Vec<&'a SumReport> {
    reports
        .iter()
        .filter(|r| !settings.reachable_only || r.is_reachable())
        .collect()
}

pub fn render<W: Write>(out: &mut W, reports: &[SumReport], settings: &Settings) -> Result<()> {
    let shown = shown(reports, settings);

    match settings.format {
        OutputFormat::Text => {
            for report in shown {
                writeln!(out, "{report}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &shown).context("serialize reports")?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    Ok(())
}
