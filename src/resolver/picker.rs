//! @acp:module "Variant Picker"
//! @acp:summary "Injectable random selection used for first-visit assignment"
//! @acp:domain cli
//! @acp:layer logic

use rand::Rng;

/// Chooses an index in `0..count` for a new session.
///
/// `count` is always at least one. Returning an index outside the range is
/// tolerated; the resolver wraps it around the registry length.
pub trait VariantPicker {
    fn pick(&mut self, count: usize) -> usize;
}

/// Uniform choice from the thread-local generator
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl VariantPicker for RandomPicker {
    fn pick(&mut self, count: usize) -> usize {
        rand::rng().random_range(0..count.max(1))
    }
}

/// Always returns the same index
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl VariantPicker for FixedPicker {
    fn pick(&mut self, _count: usize) -> usize {
        self.0
    }
}

impl<F: FnMut(usize) -> usize> VariantPicker for F {
    fn pick(&mut self, count: usize) -> usize {
        self(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_picker_stays_in_range() {
        let mut picker = RandomPicker;
        for _ in 0..500 {
            assert!(picker.pick(4) < 4);
        }
        assert_eq!(picker.pick(1), 0);
    }

    #[test]
    fn test_closure_picker() {
        let mut calls = 0;
        let mut picker = |count: usize| {
            calls += 1;
            count - 1
        };
        assert_eq!(picker.pick(4), 3);
        assert_eq!(calls, 1);
    }
}
