//! Repeated die rolls and the convergence of the observed probability.

use rand::Rng;
use serde::Serialize;

pub const FACES: u8 = 6;
/// Most convergence points kept for display.
pub const MAX_CONVERGENCE_POINTS: usize = 200;

/// Outcomes of a die rolled repeatedly, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiceExperiment {
    rolls: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FaceCount {
    pub face: u8,
    pub count: u64,
    /// Share of all rolls, 0 when nothing has been rolled.
    pub percentage: f64,
}

/// Running probability of a six after `roll_number` rolls, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConvergencePoint {
    pub roll_number: usize,
    pub probability: f64,
}

impl DiceExperiment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rolls a fair die `times` more times.
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R, times: usize) {
        self.rolls
            .extend((0..times).map(|_| rng.random_range(1..=FACES)));
    }

    #[must_use]
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    pub fn reset(&mut self) {
        self.rolls.clear();
    }

    /// Counts for faces 1 to 6.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn face_counts(&self) -> Vec<FaceCount> {
        let total = self.rolls.len();
        (1..=FACES)
            .map(|face| {
                let count = self.rolls.iter().filter(|&&r| r == face).count();
                let percentage = if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64 * 100.0
                };
                FaceCount {
                    face,
                    count: count as u64,
                    percentage,
                }
            })
            .collect()
    }

    /// Observed probability of a six after each roll.
    ///
    /// Beyond [`MAX_CONVERGENCE_POINTS`] rolls only every
    /// `len / MAX_CONVERGENCE_POINTS`-th point is kept, starting with the first.
    ///
    /// ```
    /// use rand::SeedableRng as _;
    /// use statmaster_data::experiment::DiceExperiment;
    ///
    /// let mut experiment = DiceExperiment::new();
    /// experiment.roll(&mut rand_pcg::Pcg32::seed_from_u64(1), 1000);
    /// let points = experiment.convergence();
    /// assert_eq!(points.len(), 200);
    /// assert_eq!(points[1].roll_number, 6);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn convergence(&self) -> Vec<ConvergencePoint> {
        let mut sixes = 0_usize;
        let points = self
            .rolls
            .iter()
            .enumerate()
            .map(|(idx, &roll)| {
                if roll == FACES {
                    sixes += 1;
                }
                ConvergencePoint {
                    roll_number: idx + 1,
                    probability: sixes as f64 / (idx + 1) as f64 * 100.0,
                }
            })
            .collect::<Vec<_>>();
        if points.len() > MAX_CONVERGENCE_POINTS {
            let step = points.len() / MAX_CONVERGENCE_POINTS;
            points.into_iter().step_by(step).collect()
        } else {
            points
        }
    }
}
