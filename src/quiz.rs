//! The round controller: which flags are up, which one is right, and what the last tap earned.
//!
//! This is the whole game, mechanically. The screen ([`app`][crate::app]) only translates clicks into calls on
//! [`Quiz`] and draws what it reads back out.

use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};

/// How many flags are up at once.
pub const CHOICES: usize = 3;

/// The outcome of a tap, displayed until the player acknowledges it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Verdict {
    Correct,
    Wrong,
}

impl Verdict {
    /// The result title, as shown to the player.
    pub fn title(self) -> &'static str {
        match self {
            Verdict::Correct => "Correct",
            Verdict::Wrong => "Wrong",
        }
    }
}

/// One round: the three labels on display, and which position is right.
///
/// Rounds are built fresh by [`Quiz::next_round`] and replaced wholesale, never edited.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Round {
    shown: Vec<String>,
    answer: usize,
}

impl Round {
    /// The labels on display, in position order.
    pub fn shown(&self) -> &[String] {
        &self.shown
    }

    /// Which position in [`Self::shown`] is the right one. Always in `0..CHOICES`.
    pub fn answer(&self) -> usize {
        self.answer
    }

    /// The label the player is being asked to find.
    pub fn prompt(&self) -> &str {
        &self.shown[self.answer]
    }
}

/// The quiz state machine.
///
/// Two states: waiting for a tap, or showing a verdict. A tap moves it to showing; acknowledging the verdict starts
/// a fresh round. That's it -- it runs until the player quits the program.
///
/// All randomness comes from the injected `R`, so tests can seed it and real games can draw from entropy.
pub struct Quiz<R = SmallRng> {
    labels: Vec<String>,
    round: Round,
    verdict: Option<Verdict>,
    score: u32,
    asked: u32,
    rng: R,
}

impl Quiz<SmallRng> {
    /// Start a quiz over `labels`, shuffling from entropy.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        // SmallRng is the right choice here: we want the appearance of randomness, not unpredictability, and it's
        // much faster to seed than the higher-quality RNGs.
        Self::with_rng(labels, SmallRng::from_entropy())
    }

    /// Start a quiz over `labels` with a fixed seed, for reproducible games.
    pub fn from_seed<I, S>(labels: I, seed: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_rng(labels, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Quiz<R> {
    /// Start a quiz over `labels`, drawing all randomness from `rng`.
    ///
    /// # Panics
    ///
    /// If there are fewer than [`CHOICES`] labels, or any label appears twice. Both are bugs in the caller, not
    /// conditions to limp along under.
    pub fn with_rng<I, S>(labels: I, rng: R) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        assert!(
            labels.len() >= CHOICES,
            "need at least {} labels, got {}",
            CHOICES,
            labels.len()
        );
        for (i, label) in labels.iter().enumerate() {
            assert!(
                !labels[i + 1..].contains(label),
                "duplicate label {:?}",
                label
            );
        }
        let mut quiz = Self {
            labels,
            round: Round {
                shown: vec![],
                answer: 0,
            },
            verdict: None,
            score: 0,
            asked: 0,
            rng,
        };
        quiz.next_round();
        quiz
    }

    /// The current round.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// The verdict being shown, if any. `None` means we're waiting for a tap.
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    /// The session tally so far, as (correct, asked).
    pub fn score(&self) -> (u32, u32) {
        (self.score, self.asked)
    }

    /// Shuffle the whole label set, pick a fresh answer, and clear any verdict.
    ///
    /// The three flags shown are whatever lands in the first three positions of the shuffle.
    pub fn next_round(&mut self) {
        self.labels.shuffle(&mut self.rng);
        let answer = self.rng.gen_range(0..CHOICES);
        self.round = Round {
            shown: self.labels[..CHOICES].to_vec(),
            answer,
        };
        self.verdict = None;
    }

    /// The player tapped the flag at `position`; returns what that earned them.
    ///
    /// While a verdict is up the dialog is modal, so another tap is swallowed (and returns the verdict already
    /// showing). Each round counts toward the score at most once.
    ///
    /// # Panics
    ///
    /// If `position` isn't one of the displayed positions. The screen owns that contract; there's nothing sensible
    /// to recover to here.
    pub fn tap(&mut self, position: usize) -> Verdict {
        assert!(
            position < CHOICES,
            "tap position {} out of range 0..{}",
            position,
            CHOICES
        );
        if let Some(verdict) = self.verdict {
            return verdict;
        }
        let verdict = if position == self.round.answer {
            Verdict::Correct
        } else {
            Verdict::Wrong
        };
        self.asked += 1;
        if verdict == Verdict::Correct {
            self.score += 1;
        }
        self.verdict = Some(verdict);
        verdict
    }

    /// The player dismissed the verdict.
    ///
    /// Deliberately just [`Self::next_round`] with no state check, so stray double-acknowledgements behave as two
    /// independent fresh rounds.
    pub fn acknowledge(&mut self) {
        self.next_round();
    }
}
