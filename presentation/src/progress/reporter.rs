//! Progress reporting for one-shot trials

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use tribunal_application::ports::observer::TrialObserver;
use tribunal_domain::{Fingerprint, JurorDecision, JurorOutcome, Verdict};

/// Reports trial progress with a progress bar
pub struct TrialProgress {
    bar: Mutex<Option<ProgressBar>>,
}

impl TrialProgress {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for TrialProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl TrialObserver for TrialProgress {
    fn on_trial_start(&self, fingerprint: &Fingerprint, jurors: usize) {
        let pb = ProgressBar::new(jurors as u64);
        pb.set_style(Self::style());
        pb.set_prefix(format!("Trial {}", fingerprint.short()));
        pb.set_message("Polling the bench...");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_juror_outcome(&self, outcome: &JurorOutcome) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            let mark = match outcome.decision {
                JurorDecision::NoObjection => "v".green(),
                JurorDecision::Abstain => "-".dimmed(),
                _ => "x".red(),
            };
            pb.set_message(format!("{} {}", mark, outcome.juror_id));
            pb.inc(1);
        }
    }

    fn on_trial_concluded(&self, _fingerprint: &Fingerprint, verdict: Option<&Verdict>) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            match verdict {
                Some(v) => pb.finish_with_message(format!("{}", v.classification)),
                None => pb.finish_with_message("quorum not met".to_string()),
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl TrialObserver for SimpleProgress {
    fn on_trial_start(&self, fingerprint: &Fingerprint, jurors: usize) {
        println!(
            "{} Trial {} ({} jurors)",
            "->".cyan(),
            fingerprint.short().bold(),
            jurors
        );
    }

    fn on_juror_outcome(&self, outcome: &JurorOutcome) {
        match outcome.decision {
            JurorDecision::NoObjection => {
                println!("  {} {}", "v".green(), outcome.juror_id)
            }
            JurorDecision::Abstain => println!(
                "  {} {} (abstained{})",
                "-".dimmed(),
                outcome.juror_id,
                outcome
                    .error
                    .as_deref()
                    .map(|e| format!(": {}", e))
                    .unwrap_or_default()
            ),
            _ => println!(
                "  {} {} ({})",
                "x".red(),
                outcome.juror_id,
                outcome.decision.as_str().replace('_', " ")
            ),
        }
    }

    fn on_trial_concluded(&self, _fingerprint: &Fingerprint, verdict: Option<&Verdict>) {
        match verdict {
            Some(v) => println!("\n{} {}", "Verdict:".bold(), v),
            None => println!("\n{}", "Quorum not met - not yet judged".yellow()),
        }
    }
}
