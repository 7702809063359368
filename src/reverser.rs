use tracing::{debug, instrument};
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwistableText {
    pub data: String,
}

impl TwistableText {
    pub fn new(data: impl Into<String>) -> Self {
        TwistableText { data: data.into() }
    }

    /// Reverses the text by `char`, so multi-byte characters come through intact.
    ///
    /// Swaps from both ends toward the middle; a middle character of odd-length
    /// text stays where it is.
    ///
    /// # Example
    /// ```
    /// use micro_algos::reverser::TwistableText;
    /// assert_eq!(TwistableText::new("hello").reverse(), "olleh");
    /// assert_eq!(TwistableText::new("añb").reverse(), "bña");
    /// ```
    #[instrument(level = "debug", skip(self), fields(len = self.data.len()))]
    pub fn reverse(&self) -> String {
        let (reversed, swaps) = self.twist();
        debug!(swaps, "reversed");
        reversed
    }

    /// Number of swaps `reverse` performs: floor(L / 2) for L chars.
    pub fn swap_count(&self) -> usize {
        self.twist().1
    }

    fn twist(&self) -> (String, usize) {
        let mut chars: Vec<char> = self.data.chars().collect();
        let mut swaps = 0usize;

        if !chars.is_empty() {
            let (mut i, mut j) = (0, chars.len() - 1);
            while i < j {
                chars.swap(i, j);
                swaps += 1;
                i += 1;
                j -= 1;
            }
        }

        (chars.into_iter().collect(), swaps)
    }

    // Keeps combining marks and emoji sequences attached to their base
    pub fn reverse_graphemes(&self) -> String {
        self.data.graphemes(true).rev().collect()
    }

    pub fn report(&self) -> String {
        format!("The twisted string is: {}", self.reverse())
    }
}
