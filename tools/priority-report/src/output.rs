use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use transit_priority::{color_for, css_rgb, ScoredSegment};

/// One line of the ranked report
#[derive(Serialize, Debug, PartialEq)]
pub struct ReportRow {
    pub rank: usize,
    pub id: String,
    pub label: String,
    pub from: String,
    pub to: String,
    pub score: f64,
    pub percent: i64,
    pub color: String,
}

pub fn build_rows(ranked: &[ScoredSegment<'_>]) -> Vec<ReportRow> {
    ranked
        .iter()
        .enumerate()
        .map(|(index, scored)| ReportRow {
            rank: index + 1,
            id: scored.segment.id.to_string(),
            label: scored.segment.label(),
            from: scored.segment.from.to_string(),
            to: scored.segment.to.to_string(),
            score: scored.score,
            percent: scored.percent(),
            color: css_rgb(color_for(scored.score)),
        })
        .collect()
}

pub fn write_table(rows: &[ReportRow], out: &mut impl Write) -> Result<()> {
    let label_width = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);

    for row in rows {
        writeln!(
            out,
            "{:>2}. {:<label_width$}  {:>3}  {} → {}  {}",
            row.rank,
            row.label,
            row.percent,
            row.from,
            row.to,
            row.color,
            label_width = label_width,
        )?;
    }

    Ok(())
}

pub fn write_json(rows: &[ReportRow], out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, rows)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use transit_priority::{builtin, WeightSet};

    fn rows() -> Vec<ReportRow> {
        let catalog = builtin::bus_spine_catalog().unwrap();
        build_rows(&catalog.rank(&WeightSet::default()))
    }

    #[test]
    fn test_rows_are_numbered_in_rank_order() {
        let rows = rows();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].id, "23_north_1");
        assert_eq!(rows[0].label, "Route 23 – Northbound");
        assert_eq!(rows[5].id, "52_east_1");
    }

    #[test]
    fn test_table_output() {
        let mut out = Vec::new();
        write_table(&rows()[1..2], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with(" 2. Route 23 – Southbound   75  Center City → South Philadelphia"));
        assert!(text.trim_end().ends_with("rgb(179, 70, 92)"));
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        write_json(&rows(), &mut out).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 6);
        assert_eq!(parsed[0]["id"], "23_north_1");
        assert_eq!(parsed[2]["percent"], 70);
    }
}
