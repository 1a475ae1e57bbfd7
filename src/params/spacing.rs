use crate::blockchain::PowAlgo;
use crate::params::rules::ConsensusRules;

/// Returns the combined spacing as an unreduced fraction `(numerator, denominator)`.
///
/// The average target spacing for any block (all algorithms combined) is a common
/// multiple timespan of all spacings divided by the number of blocks all algorithms
/// together are expected to produce in it. The numerator is simply the product of
/// all spacings, the denominator is the sum of products that each exclude one
/// algorithm (all (N-1)-tuples of the N spacings).
pub fn spacing_fraction(spacings: &[i64]) -> (i64, i64) {
    let mut numer: i64 = 1;
    let mut denom: i64 = 0;
    for &spacing in spacings {
        assert!(spacing > 0, "Target spacing must be positive, got {}", spacing);

        // Scale the block counts of all previous algorithms to this spacing
        denom = denom.checked_mul(spacing).expect("Target spacing product overflows");

        // Block count of the current algorithm. For now it is the product of the already
        // processed spacings only, the remaining ones get multiplied in by the line above.
        denom = denom.checked_add(numer).expect("Target spacing product overflows");

        numer = numer.checked_mul(spacing).expect("Target spacing product overflows");
    }
    (numer, denom)
}

/// Average interval at which any of the racing algorithms produces a block.
/// Panics if the spacings do not divide evenly, which means they are misconfigured.
pub fn average_target_spacing(spacings: &[i64]) -> i64 {
    let (numer, denom) = spacing_fraction(spacings);
    assert!(denom > 0, "No target spacings given");
    assert_eq!(numer % denom, 0, "Target spacings {:?} do not divide evenly", spacings);
    numer / denom
}

/// Combined target spacing of all algorithms at `height`
pub fn avg_target_spacing(rules: &ConsensusRules, height: u32) -> i64 {
    let spacings: Vec<i64> = PowAlgo::ALL.iter().map(|algo| rules.target_spacing(*algo, height)).collect();
    average_target_spacing(&spacings)
}
