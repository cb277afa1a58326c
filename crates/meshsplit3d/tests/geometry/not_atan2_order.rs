use meshsplit3d::utils::not_atan2;
use ordered_float::OrderedFloat;
use rand::{Rng, SeedableRng};
use rand_isaac::IsaacRng;

// Reference angles closer than this are considered tied: the order between them is
// not guaranteed. This is a few ULPs of `PI`.
const TIE_TOLERANCE: f64 = 16.0 * f32::EPSILON as f64 * std::f64::consts::PI;

fn random_inputs(seed: u64, count: usize, scale: f32) -> Vec<(f32, f32)> {
    let mut rng = IsaacRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let y: f32 = rng.gen_range(-scale..scale);
            let x: f32 = rng.gen_range(-scale..scale);
            (y, x)
        })
        .filter(|(y, x)| *y != 0.0 || *x != 0.0)
        .collect()
}

fn assert_same_order_as_atan2(inputs: &[(f32, f32)]) {
    let mut sorted: Vec<_> = inputs
        .iter()
        .map(|&(y, x)| {
            let reference = (y as f64).atan2(x as f64);
            (OrderedFloat(reference), not_atan2(y, x), (y, x))
        })
        .collect();
    sorted.sort_by_key(|entry| entry.0);

    for (i, lhs) in sorted.iter().enumerate() {
        for rhs in &sorted[i + 1..] {
            if rhs.0 .0 - lhs.0 .0 <= TIE_TOLERANCE {
                continue;
            }

            assert!(
                lhs.1 < rhs.1,
                "inconsistent order: not_atan2{:?} = {} (atan2 {}) >= not_atan2{:?} = {} (atan2 {})",
                lhs.2,
                lhs.1,
                lhs.0,
                rhs.2,
                rhs.1,
                rhs.0
            );
        }
    }
}

#[test]
fn random_inputs_keep_the_atan2_order() {
    assert_same_order_as_atan2(&random_inputs(0x2c2a_7a4b_16e1_43d3, 1000, 1.0));
}

#[test]
fn random_inputs_of_mixed_magnitudes_keep_the_atan2_order() {
    let mut inputs = random_inputs(0x9be3_0f6c_bf01_5e67, 500, 1.0e3);
    inputs.extend(random_inputs(0x51d8_aa57_70c2_1f4d, 500, 1.0e-3));
    assert_same_order_as_atan2(&inputs);
}

#[test]
fn values_stay_in_range() {
    use std::f32::consts::PI;

    for (y, x) in random_inputs(0x0ddb_a11c_a5ca_de00, 1000, 1.0e6) {
        let angle = not_atan2(y, x);
        assert!((-PI..=PI).contains(&angle), "not_atan2({y}, {x}) = {angle}");
        assert_eq!(angle > 0.0, y > 0.0, "not_atan2({y}, {x}) = {angle}");
    }
}
