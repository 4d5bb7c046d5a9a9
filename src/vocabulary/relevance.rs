// Relevance of one vocabulary to another.
//
// Picture a three-year-old and a well-read adult. Most of what the adult
// says is not relevant to the child, but nearly everything the child says is
// understood by the adult. Relevance is therefore asymmetric: it ranges over
// the receiver's words and is normalized by the receiver's size.
//
//   relevance = sum(rank_self(w) * rank_other(w) for w in self) / |self|

use tracing::trace;

use super::Vocabulary;

impl Vocabulary {
    /// How well `other` understands this vocabulary, from 0.0 to 1.0.
    ///
    /// The mean, over this vocabulary's distinct words, of each word's rank
    /// here times its rank in `other`. Two vocabularies without a shared
    /// word score 0.0, and so does an empty receiver. Against itself, a
    /// vocabulary scores the mean of its squared ranks, which is 1.0 only
    /// when every word has rank 1.0.
    pub fn relevance_of(&self, other: &Vocabulary) -> f64 {
        if self.is_empty() {
            return 0.0;
        }

        let total: f64 = self
            .counts
            .keys()
            .map(|word| self.rank_key(word) * other.rank_key(word))
            .sum();
        let relevance = total / self.len() as f64;

        trace!(
            words = self.len(),
            other_words = other.len(),
            relevance,
            "Computed relevance"
        );

        relevance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_self_relevance_is_one() {
        let pets = Vocabulary::from_text("dog cat");
        assert!((pets.relevance_of(&pets) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_self_relevance_is_mean_squared_rank() {
        // ranks: owl 3/5 * 2/2 = 0.6, eagle 5/5 * 1/2 = 0.5
        let v = Vocabulary::from_text("owl owl eagle");
        let expected = (0.6_f64.powi(2) + 0.5_f64.powi(2)) / 2.0;
        assert!((v.relevance_of(&v) - expected).abs() < EPS);
    }

    #[test]
    fn test_case_differences_still_match() {
        let shouting = Vocabulary::from_text("DOG CAT");
        let quiet = Vocabulary::from_text("dog cat");
        assert!((shouting.relevance_of(&quiet) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_disjoint_is_zero() {
        let pets = Vocabulary::from_text("dog cat");
        let fish = Vocabulary::from_text("fish");
        assert_eq!(pets.relevance_of(&fish), 0.0);
    }

    #[test]
    fn test_subset_relevance() {
        let pets = Vocabulary::from_text("dog cat");
        let cat = Vocabulary::from_text("cat");
        assert!((cat.relevance_of(&pets) - 1.0).abs() < EPS);
        assert!((pets.relevance_of(&cat) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_empty_receiver_is_zero() {
        let empty = Vocabulary::new();
        let pets = Vocabulary::from_text("dog cat");
        assert_eq!(empty.relevance_of(&pets), 0.0);
        assert_eq!(empty.relevance_of(&empty), 0.0);
        assert_eq!(pets.relevance_of(&empty), 0.0);
    }

    #[test]
    fn test_birds_of_prey() {
        let birds = Vocabulary::from_text("hawk eagle owl F15");
        let f15 = Vocabulary::from_text("f15");
        assert!((f15.relevance_of(&birds) - 0.6).abs() < EPS);
        assert!((birds.relevance_of(&f15) - 0.15).abs() < EPS);
    }
}
