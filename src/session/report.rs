use crate::analysis::analyzer::Assessment;
use crate::session::error::QueryError;
use crate::types::observation::ObservationRecord;

const REPORT_HEADER: &str = "===== Analysis Result =====";
const REPORT_FOOTER: &str = "===========================";

/// First record whose timestamp equals `timestamp` exactly.
pub fn lookup<'a>(
    timestamp: &str,
    table: &'a [ObservationRecord],
) -> Result<&'a ObservationRecord, QueryError> {
    table
        .iter()
        .find(|record| record.timestamp == timestamp)
        .ok_or_else(|| QueryError::NotFound(timestamp.to_string()))
}

/// Renders the human-readable block for one query.
pub fn render_report(
    timestamp: &str,
    record: &ObservationRecord,
    assessment: &Assessment,
) -> String {
    let mut out = String::new();
    push_line(&mut out, REPORT_HEADER);
    push_line(&mut out, &format!("Requested time: {}", timestamp));
    push_line(&mut out, "Observation:");
    push_line(&mut out, &format!("  {}", record));
    push_line(&mut out, "Assessment:");
    for (label, verdict) in assessment.categories() {
        push_line(&mut out, &format!("  {}: {}", label, verdict));
    }
    push_line(&mut out, &format!("  Overall: {}", assessment.overall()));
    push_line(&mut out, REPORT_FOOTER);
    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::analyze;
    use crate::types::observation::tests::record;

    #[test]
    fn lookup_returns_first_match() {
        let table = vec![
            record("202303010000", ["1", "2", "3", "4"], ["5", "6", "7"]),
            record("202303010600", ["2", "2", "3", "4"], ["5", "6", "7"]),
            record("202303010600", ["3", "2", "3", "4"], ["5", "6", "7"]),
        ];
        let found = lookup("202303010600", &table).expect("present");
        assert_eq!(found.temperature, "2");
    }

    #[test]
    fn lookup_uses_exact_string_equality() {
        let table = vec![record("202303010000", ["1", "2", "3", "4"], ["5", "6", "7"])];
        assert_eq!(
            lookup(" 202303010000", &table),
            Err(QueryError::NotFound(" 202303010000".to_string()))
        );
        assert!(lookup("202303010600", &[]).is_err());
    }

    #[test]
    fn report_contains_every_section() {
        let obs = record("202303010000", ["15", "60", "3", "200"], ["900", "800", "700"]);
        let assessment = analyze(&obs);
        let report = render_report("202303010000", &obs, &assessment);

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.first(), Some(&REPORT_HEADER));
        assert_eq!(lines.last(), Some(&REPORT_FOOTER));
        assert!(report.contains("Requested time: 202303010000"));
        assert!(report.contains("TA=15"));
        assert!(report.contains("LPRESS=700"));
        for (label, verdict) in assessment.categories() {
            assert!(report.contains(&format!("{}: {}", label, verdict)));
        }
        assert!(report.contains("Overall: Conditions are suitable for bird migration."));
    }

    #[test]
    fn report_is_newline_terminated_with_one_line_per_part() {
        let obs = record("202303010000", ["15", "60", "3", "200"], ["900", "800", "700"]);
        let assessment = analyze(&obs);
        let report = render_report("202303010000", &obs, &assessment);

        assert!(report.ends_with(&format!("{}\n", REPORT_FOOTER)));
        // header, time, "Observation:", record, "Assessment:", categories, overall, footer
        let expected = 5 + assessment.categories().len() + 2;
        assert_eq!(report.lines().count(), expected);
    }
}
