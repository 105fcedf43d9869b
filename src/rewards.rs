use serde::Serialize;

pub fn eligible_for_milestone(streak: u32, threshold: u32) -> bool {
    streak >= threshold
}

/// Streak thresholds that unlock attendance rewards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Milestone {
    Minor,
    Major,
}

impl Milestone {
    pub const ALL: [Milestone; 2] = [Milestone::Minor, Milestone::Major];

    pub fn threshold(self) -> u32 {
        match self {
            Milestone::Minor => 60,
            Milestone::Major => 365,
        }
    }

    pub fn is_reached(self, streak: u32) -> bool {
        eligible_for_milestone(streak, self.threshold())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MilestoneProgress {
    pub milestone: Milestone,
    pub threshold: u32,
    pub eligible: bool,
    pub percent: f64,
    pub days_remaining: u32,
}

impl MilestoneProgress {
    pub fn for_streak(streak: u32, milestone: Milestone) -> Self {
        let threshold = milestone.threshold();
        Self {
            milestone,
            threshold,
            eligible: milestone.is_reached(streak),
            percent: (f64::from(streak) / f64::from(threshold) * 100.0).min(100.0),
            days_remaining: threshold.saturating_sub(streak),
        }
    }
}

pub fn milestone_progress(streak: u32) -> Vec<MilestoneProgress> {
    Milestone::ALL
        .iter()
        .map(|milestone| MilestoneProgress::for_streak(streak, *milestone))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eligibility_thresholds() {
        assert!(!eligible_for_milestone(59, 60));
        assert!(eligible_for_milestone(60, 60));
        assert!(eligible_for_milestone(365, 365));
        assert!(!eligible_for_milestone(364, 365));
        assert!(eligible_for_milestone(0, 0));
    }

    #[test]
    fn milestones_use_fixed_thresholds() {
        assert_eq!(Milestone::Minor.threshold(), 60);
        assert_eq!(Milestone::Major.threshold(), 365);
        assert!(Milestone::Minor.is_reached(200));
        assert!(!Milestone::Major.is_reached(200));
    }

    #[test]
    fn progress_counts_down_and_caps() {
        let halfway = MilestoneProgress::for_streak(30, Milestone::Minor);
        assert!(!halfway.eligible);
        assert_eq!(halfway.days_remaining, 30);
        assert!((halfway.percent - 50.0).abs() < f64::EPSILON);

        let past = MilestoneProgress::for_streak(400, Milestone::Major);
        assert!(past.eligible);
        assert_eq!(past.days_remaining, 0);
        assert!((past.percent - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn progress_covers_every_milestone() {
        let progress = milestone_progress(60);
        assert_eq!(progress.len(), 2);
        assert_eq!(progress[0].milestone, Milestone::Minor);
        assert!(progress[0].eligible);
        assert_eq!(progress[1].milestone, Milestone::Major);
        assert_eq!(progress[1].days_remaining, 305);
    }
}
