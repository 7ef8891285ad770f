/// Enumerates the Cartesian product of several finite sequences.
///
/// The generator works like an odometer: one cursor per source, the cursor of
/// the last source advances fastest, and when a cursor runs past the end of
/// its source it wraps to zero and carries into the cursor before it.
/// Iteration is a flat loop and reuses one combination buffer for every call
/// of the callback.
///
/// The generator only borrows its sources.
///
/// # Example
/// ```
/// use gysp::interpreter::generator::Generator;
///
/// let letters = ["a", "b"];
/// let digits = ["1", "2", "3"];
///
/// let mut generator = Generator::new();
/// generator.add_source(&letters);
/// generator.add_source(&digits);
///
/// let mut seen = Vec::new();
/// generator.generate(|combination| {
///              seen.push(format!("{}{}", combination[0], combination[1]));
///              Ok::<_, ()>(())
///          })
///          .unwrap();
///
/// assert_eq!(seen, ["a1", "a2", "a3", "b1", "b2", "b3"]);
/// ```
pub struct Generator<'a, T> {
    sources: Vec<&'a [T]>,
}

impl<T> Default for Generator<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> Generator<'a, T> {
    /// Creates a generator with no sources.
    #[must_use]
    pub const fn new() -> Self {
        Self { sources: Vec::new() }
    }

    /// Appends a source. Sources added later vary faster.
    pub fn add_source(&mut self, source: &'a [T]) {
        self.sources.push(source);
    }

    /// The number of combinations [`generate`](Self::generate) will produce:
    /// the product of the source lengths, or zero when there are no sources.
    #[must_use]
    pub fn combinations(&self) -> usize {
        if self.sources.is_empty() {
            return 0;
        }
        self.sources.iter().map(|source| source.len()).product()
    }

    /// Calls `callback` once per combination, in odometer order.
    ///
    /// The slice handed to the callback holds one element from each source,
    /// in the order the sources were added. Nothing is generated if any
    /// source is empty or no source was added.
    ///
    /// # Returns
    /// The number of combinations visited.
    ///
    /// # Errors
    /// The first error returned by `callback`; iteration stops there.
    pub fn generate<E>(&self,
                       mut callback: impl FnMut(&[&'a T]) -> Result<(), E>)
                       -> Result<usize, E> {
        let mut combination = Vec::with_capacity(self.sources.len());
        for source in self.sources.iter().copied() {
            match source.first() {
                Some(first) => combination.push(first),
                None => return Ok(0),
            }
        }
        if combination.is_empty() {
            return Ok(0);
        }

        let mut cursors = vec![0; self.sources.len()];
        let mut visited = 0;

        loop {
            callback(&combination)?;
            visited += 1;

            let mut position = self.sources.len();
            loop {
                if position == 0 {
                    tracing::trace!(visited, "generator exhausted");
                    return Ok(visited);
                }
                position -= 1;

                let source = self.sources[position];
                cursors[position] += 1;
                if let Some(next) = source.get(cursors[position]) {
                    combination[position] = next;
                    break;
                }
                cursors[position] = 0;
                combination[position] = &source[0];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(sources: &[&[i32]]) -> Vec<Vec<i32>> {
        let mut generator = Generator::new();
        for source in sources.iter().copied() {
            generator.add_source(source);
        }

        let mut seen = Vec::new();
        let count = generator.generate(|combination| {
                                 seen.push(combination.iter().map(|x| **x).collect());
                                 Ok::<_, ()>(())
                             })
                             .unwrap();
        assert_eq!(count, seen.len());
        assert_eq!(count, generator.combinations());
        seen
    }

    #[test]
    fn last_source_varies_fastest() {
        assert_eq!(collect(&[&[1, 2], &[10, 20]]),
                   [vec![1, 10], vec![1, 20], vec![2, 10], vec![2, 20]]);
    }

    #[test]
    fn carries_across_several_sources() {
        let seen = collect(&[&[0, 1], &[0, 1, 2], &[0, 1]]);
        assert_eq!(seen.len(), 12);
        assert_eq!(seen[0], [0, 0, 0]);
        assert_eq!(seen[1], [0, 0, 1]);
        assert_eq!(seen[2], [0, 1, 0]);
        assert_eq!(seen[6], [1, 0, 0]);
        assert_eq!(seen[11], [1, 2, 1]);
    }

    #[test]
    fn borrowed_string_sources() {
        let letters = ["a", "b"];
        let digits = ["1", "2", "3"];
        let mut generator = Generator::new();
        generator.add_source(&letters);
        generator.add_source(&digits);

        let mut seen = Vec::new();
        let count = generator.generate(|combination| {
                                 seen.push(format!("{}{}", combination[0], combination[1]));
                                 Ok::<_, ()>(())
                             });

        assert_eq!(count, Ok(6));
        assert_eq!(seen, ["a1", "a2", "a3", "b1", "b2", "b3"]);
    }

    #[test]
    fn single_source_is_plain_iteration() {
        assert_eq!(collect(&[&[7, 8, 9]]), [vec![7], vec![8], vec![9]]);
    }

    #[test]
    fn any_empty_source_yields_nothing() {
        assert!(collect(&[&[1, 2], &[], &[3]]).is_empty());
        assert!(collect(&[&[], &[1]]).is_empty());
    }

    #[test]
    fn no_sources_yield_nothing() {
        assert!(collect(&[]).is_empty());
    }

    #[test]
    fn callback_errors_stop_iteration() {
        let source = [1, 2, 3, 4];
        let mut generator = Generator::new();
        generator.add_source(&source);

        let mut calls = 0;
        let result = generator.generate(|combination| {
                                  calls += 1;
                                  if *combination[0] == 2 { Err("stop") } else { Ok(()) }
                              });

        assert_eq!(result, Err("stop"));
        assert_eq!(calls, 2);
    }
}
