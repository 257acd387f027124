/// Bounded cartesian product over index ranges, last axis varying fastest.
///
/// Yields index tuples in the same order as nested `for` loops with the first
/// axis outermost. Empty when there are no axes or any axis has length zero.
///
/// ```rust
/// use toolmap_core::enumerate::Combinations;
///
/// let combos: Vec<_> = Combinations::new(vec![2, 2]).collect();
/// assert_eq!(combos, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    lens: Vec<usize>,
    current: Option<Vec<usize>>,
}

impl Combinations {
    /// Walk `lens[0] × lens[1] × ...` index tuples.
    pub fn new(lens: Vec<usize>) -> Self {
        let current = if lens.is_empty() || lens.contains(&0) {
            None
        } else {
            Some(vec![0; lens.len()])
        };
        Self { lens, current }
    }

    /// Total number of tuples in the full walk.
    pub fn total(&self) -> usize {
        if self.lens.is_empty() {
            0
        } else {
            self.lens.iter().product()
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.as_mut()?;
        let out = current.clone();

        let mut exhausted = true;
        for pos in (0..self.lens.len()).rev() {
            current[pos] += 1;
            if current[pos] < self.lens[pos] {
                exhausted = false;
                break;
            }
            current[pos] = 0;
        }

        if exhausted {
            self.current = None;
        }
        Some(out)
    }
}
