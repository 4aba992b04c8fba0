/*!
The luby sequence, used to schedule restarts.

See <https://oeis.org/A182105> for details on the sequence.

[luby] computes the value of the sequence at a given position scaled to a given base, by locating the position within the finite subsequence containing it.
With a base of two the sequence runs 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, …
*/

/// The `position`th element of the luby sequence, as a power of `base`.
pub fn luby(base: f64, position: u32) -> f64 {
    // The size of a (full) subsequence containing the position, and the power of the final element of that subsequence.
    let mut size: u64 = 1;
    let mut power: i32 = 0;

    while size < (position as u64) + 1 {
        power += 1;
        size = 2 * size + 1;
    }

    // Walk into ever smaller subsequences until the position is the final element of the current subsequence.
    let mut position = position as u64;
    while size - 1 != position {
        size = (size - 1) / 2;
        power -= 1;
        position %= size;
    }

    base.powi(power)
}

#[cfg(test)]
mod luby_tests {
    use super::*;

    // https://oeis.org/A182105
    const LUBY_SLICE: &[u32] = &[
        1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8,
        16, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4,
        8, 16, 32,
    ];

    #[test]
    fn base_two() {
        for (position, known_value) in LUBY_SLICE.iter().enumerate() {
            assert_eq!(luby(2.0, position as u32), *known_value as f64);
        }
    }

    #[test]
    fn other_bases() {
        assert_eq!(luby(3.0, 2), 3.0);
        assert_eq!(luby(3.0, 14), 27.0);
        assert_eq!(luby(1.0, 62), 1.0);
    }
}
