// ============================================================
// Layer 4 — Prompt Pool
// ============================================================
// Holds the L unique prompts and turns them into the shuffled
// "deck" of T = X×N prompts that the boards are dealt from.
//
//   L unique prompts      T slots
//   [A B C D E]      →    [A B C D E] + (T−L) random picks
//                         → shuffled
//
// Every unique prompt appears in the deck at least once, so
// every prompt lands on at least one board as long as the
// deck is not exhausted early.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use crate::domain::board::BoardSpec;
use crate::domain::error::BingoError;
use crate::domain::prompt::Prompt;

/// The unique prompts of one run. Never empty.
#[derive(Debug, Clone)]
pub struct PromptPool {
    prompts:            Vec<Prompt>,
    duplicates_dropped: usize,
}

impl PromptPool {
    /// Build a pool, keeping the first occurrence of each prompt.
    pub fn new(raw: Vec<Prompt>) -> Result<Self, BingoError> {
        let total       = raw.len();
        let mut seen    = HashSet::with_capacity(total);
        let prompts: Vec<Prompt> = raw
            .into_iter()
            .filter(|p| seen.insert(p.clone()))
            .collect();

        if prompts.is_empty() {
            return Err(BingoError::EmptyPool);
        }

        let duplicates_dropped = total - prompts.len();
        if duplicates_dropped > 0 {
            tracing::warn!(
                "Dropped {} duplicate prompt lines ({} unique remain)",
                duplicates_dropped,
                prompts.len()
            );
        }

        Ok(Self { prompts, duplicates_dropped })
    }

    /// Number of unique prompts (L)
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn duplicates_dropped(&self) -> usize {
        self.duplicates_dropped
    }

    /// Check that `spec` can be dealt from this pool before any
    /// sampling starts.
    ///
    /// # Errors
    /// `TooFewSlots` when X×N < L, `FieldsExceedPool` when N > L
    /// (a board could never collect N distinct prompts).
    pub fn check_capacity(&self, spec: &BoardSpec) -> Result<(), BingoError> {
        if spec.total_slots() < self.len() {
            return Err(BingoError::TooFewSlots {
                requested: spec.total_slots(),
                available: self.len(),
            });
        }
        if spec.fields_per_board() > self.len() {
            return Err(BingoError::FieldsExceedPool {
                fields: spec.fields_per_board(),
                unique: self.len(),
            });
        }
        Ok(())
    }

    /// One uniformly random prompt, with replacement.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Prompt {
        &self.prompts[rng.gen_range(0..self.prompts.len())]
    }

    /// Build the shuffled deck of exactly `target` prompts.
    ///
    /// The deck holds every unique prompt once plus `target − L`
    /// extra picks drawn with replacement, then shuffled.
    ///
    /// # Errors
    /// `TooFewSlots` if `target < L`: some prompt would never
    /// make it onto a board.
    pub fn sample_to_target<R: Rng + ?Sized>(
        &self,
        target: usize,
        rng:    &mut R,
    ) -> Result<Vec<Prompt>, BingoError> {
        if target < self.len() {
            return Err(BingoError::TooFewSlots {
                requested: target,
                available: self.len(),
            });
        }

        let mut deck  = Vec::with_capacity(target);
        deck.extend(self.prompts().iter().cloned());

        let extra = target - self.len();
        for _ in 0..extra {
            deck.push(self.choose(rng).clone());
        }

        // Fisher-Yates: every permutation equally likely
        deck.shuffle(rng);

        tracing::debug!(
            "Deck built: {} slots ({} unique + {} extra draws)",
            deck.len(),
            self.len(),
            extra
        );
        Ok(deck)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    fn pool(items: &[&str]) -> PromptPool {
        PromptPool::new(items.iter().map(|s| Prompt::new(*s).unwrap()).collect()).unwrap()
    }

    fn counts(deck: &[Prompt]) -> HashMap<&str, usize> {
        let mut m = HashMap::new();
        for p in deck {
            *m.entry(p.as_str()).or_insert(0) += 1;
        }
        m
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let p = pool(&["B", "A", "B", "C", "A"]);
        let texts: Vec<&str> = p.prompts().iter().map(Prompt::as_str).collect();
        assert_eq!(texts, vec!["B", "A", "C"]);
        assert_eq!(p.duplicates_dropped(), 2);
    }

    #[test]
    fn test_empty_pool_rejected() {
        assert!(matches!(PromptPool::new(Vec::new()), Err(BingoError::EmptyPool)));
    }

    #[test]
    fn test_target_below_pool_fails() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = pool(&["A", "B", "C"]).sample_to_target(2, &mut rng).unwrap_err();
        assert!(matches!(err, BingoError::TooFewSlots { requested: 2, available: 3 }));
    }

    #[test]
    fn test_target_equal_to_pool_has_no_duplicates() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let deck = pool(&["A", "B", "C", "D", "E"]).sample_to_target(5, &mut rng).unwrap();
        let c = counts(&deck);
        assert_eq!(deck.len(), 5);
        assert!(c.values().all(|&n| n == 1));
    }

    #[test]
    fn test_target_above_pool_contains_every_prompt() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let deck = pool(&["A", "B", "C", "D", "E"]).sample_to_target(10, &mut rng).unwrap();
        let c = counts(&deck);
        assert_eq!(deck.len(), 10);
        for key in ["A", "B", "C", "D", "E"] {
            assert!(c[key] >= 1, "{key} missing from deck");
        }
    }

    #[test]
    fn test_capacity_checks() {
        let p = pool(&["A", "B", "C", "D", "E"]);
        assert!(p.check_capacity(&BoardSpec::new(2, 5, 5, 5).unwrap()).is_ok());
        assert!(matches!(
            p.check_capacity(&BoardSpec::new(1, 4, 5, 5).unwrap()),
            Err(BingoError::TooFewSlots { requested: 4, available: 5 })
        ));
        assert!(matches!(
            p.check_capacity(&BoardSpec::new(2, 6, 5, 5).unwrap()),
            Err(BingoError::FieldsExceedPool { fields: 6, unique: 5 })
        ));
    }

    #[test]
    fn test_same_seed_same_deck() {
        let p = pool(&["A", "B", "C", "D", "E", "F"]);
        let a = p.sample_to_target(20, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        let b = p.sample_to_target(20, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }
}
