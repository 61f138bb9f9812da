//! Console output formatter for verdict reports

use colored::Colorize;
use tribunal_application::{ReportStatus, VerdictReport};
use tribunal_domain::{Classification, JurorDecision};

/// Formats verdict reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete verdict report
    pub fn format(report: &VerdictReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n\n",
            "Case:".cyan().bold(),
            report.fingerprint.short()
        ));

        if report.status == ReportStatus::Pending {
            output.push_str(&format!(
                "{}\n{}\n",
                "NOT YET JUDGED".bold(),
                "The bench could not reach quorum; treat the content as unmarked."
            ));
            return output;
        }

        // Juror votes
        output.push_str(&format!("{}\n", "Jury votes:".cyan().bold()));
        for outcome in &report.juror_outcomes {
            let mark = match outcome.decision {
                JurorDecision::NoObjection => "v".green(),
                JurorDecision::Abstain => "-".dimmed(),
                _ => "x".red(),
            };
            let mut line = format!(
                "  {} {:<18} {}",
                mark,
                outcome.juror_id,
                outcome.decision.as_str().replace('_', " ")
            );
            if let Some(error) = &outcome.error {
                line.push_str(&format!("  ({})", error.dimmed()));
            }
            output.push_str(&line);
            output.push('\n');
        }

        // Verdict banner
        if let Some(classification) = report.classification {
            output.push('\n');
            output.push_str(&format!(
                "{} {}",
                "Verdict:".bold(),
                Self::paint(classification)
            ));
            if let Some(objections) = report.objection_count {
                output.push_str(&format!(
                    " ({} objection{})",
                    objections,
                    if objections == 1 { "" } else { "s" }
                ));
            }
            output.push('\n');
        }

        if let Some(effective) = report.effective_classification
            && report.classification != Some(effective)
        {
            output.push_str(&format!(
                "{} {} {}\n",
                "Effective:".bold(),
                Self::paint(effective),
                "(weighted-role override)".dimmed()
            ));
        }

        output
    }

    /// Format as JSON
    pub fn format_json(report: &VerdictReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    fn paint(classification: Classification) -> String {
        match classification {
            Classification::Clean => classification.to_string().green().bold().to_string(),
            Classification::Suspicious => classification.to_string().yellow().bold().to_string(),
            Classification::Refuted => classification.to_string().red().bold().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tribunal_domain::{Fingerprinter, JurorOutcome, Verdict};

    fn report() -> VerdictReport {
        let fingerprint = Fingerprinter::default().fingerprint("article");
        let mut case = tribunal_domain::Case::open_trial(fingerprint);
        case.append_outcomes(vec![
            JurorOutcome::decided("logic", JurorDecision::NoObjection),
            JurorOutcome::decided("skeptic", JurorDecision::SuspiciousFact),
            JurorOutcome::abstained("web-search", "timeout"),
            JurorOutcome::decided("archivist", JurorDecision::NoObjection),
        ]);
        case.decide(Verdict::new(Classification::Suspicious, 1, 3)).unwrap();
        VerdictReport::decided(case)
    }

    #[test]
    fn test_summary_contains_votes_and_banner() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format(&report());
        assert!(text.contains("logic"));
        assert!(text.contains("suspicious fact"));
        assert!(text.contains("timeout"));
        assert!(text.contains("SUSPICIOUS"));
    }

    #[test]
    fn test_pending_report() {
        colored::control::set_override(false);
        let fingerprint = Fingerprinter::default().fingerprint("article");
        let text = ConsoleFormatter::format(&VerdictReport::pending(fingerprint));
        assert!(text.contains("NOT YET JUDGED"));
    }

    #[test]
    fn test_json_roundtrip() {
        let json = ConsoleFormatter::format_json(&report());
        let parsed: VerdictReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.status, ReportStatus::Decided);
    }
}
