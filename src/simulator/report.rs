//! Simulation report generation.

use serde::Serialize;

/// Outcome of one simulated session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunStats {
    pub seed: Option<u64>,
    pub score: u32,
    pub ticks: u64,
    pub crashed: bool,
    pub flaps: u64,
    pub pairs_spawned: u64,
    pub speedups: u32,
    pub final_scroll_speed: f64,
    /// Largest gap center change between consecutive pairs.
    pub max_gap_jump: f64,
}

/// Aggregated results from a batch of runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_crashed: u32,
    pub runs_timed_out: u32,

    pub avg_score: f64,
    pub best_score: u32,
    pub avg_ticks: f64,
    pub avg_speedups: f64,
    pub avg_final_scroll_speed: f64,
    pub max_gap_jump: f64,

    /// Runs bucketed by score / 10
    pub score_distribution: Vec<u32>,

    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, max_ticks: u64) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;
        let runs_crashed = runs.iter().filter(|r| r.crashed).count() as u32;
        let runs_timed_out = runs
            .iter()
            .filter(|r| !r.crashed && r.ticks >= max_ticks)
            .count() as u32;

        let avg_score = runs.iter().map(|r| r.score as f64).sum::<f64>() / divisor;
        let best_score = runs.iter().map(|r| r.score).max().unwrap_or(0);
        let avg_ticks = runs.iter().map(|r| r.ticks as f64).sum::<f64>() / divisor;
        let avg_speedups = runs.iter().map(|r| r.speedups as f64).sum::<f64>() / divisor;
        let avg_final_scroll_speed =
            runs.iter().map(|r| r.final_scroll_speed).sum::<f64>() / divisor;
        let max_gap_jump = runs.iter().map(|r| r.max_gap_jump).fold(0.0, f64::max);

        let mut score_distribution = vec![0u32; (best_score / 10 + 1) as usize];
        for run in &runs {
            score_distribution[(run.score / 10) as usize] += 1;
        }

        Self {
            num_runs,
            runs_crashed,
            runs_timed_out,
            avg_score,
            best_score,
            avg_ticks,
            avg_speedups,
            avg_final_scroll_speed,
            max_gap_jump,
            score_distribution,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} crashed, {} timed out\n\n",
            self.num_runs, self.runs_crashed, self.runs_timed_out
        ));

        report.push_str("── SCORE ────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Score:           {:.1}\n", self.avg_score));
        report.push_str(&format!("  Best Score:          {}\n", self.best_score));
        report.push_str(&format!("  Avg Ticks Survived:  {:.0}\n\n", self.avg_ticks));

        report.push_str("── DIFFICULTY ───────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Speed-ups:       {:.2}\n", self.avg_speedups));
        report.push_str(&format!(
            "  Avg Final Speed:     {:.3} px/tick\n",
            self.avg_final_scroll_speed
        ));
        report.push_str(&format!(
            "  Max Gap Jump:        {:.1} px\n\n",
            self.max_gap_jump
        ));

        report.push_str("── SCORE DISTRIBUTION ───────────────────────────────────────────\n");
        for (bucket, &count) in self.score_distribution.iter().enumerate() {
            let pct = (count as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!(
                "  {:>4}-{:<4} {:>5.1}% {}\n",
                bucket * 10,
                bucket * 10 + 9,
                pct,
                bar
            ));
        }

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
