// SPDX-License-Identifier: GPL-3.0-only

//! Randomized checks of the selection algorithms
//!
//! Supported sets are generated from a fixed seed so failures reproduce.

mod common;

use common::{device_with_modes, full_device, resolve};
use manual_camera::characteristics::{CapabilityValue, ValueRange};
use manual_camera::metadata::{ae_mode, control_mode, noise_reduction};
use manual_camera::resolver::select::{maximum, minimum, tightest_fps_range};
use manual_camera::{
    CharacteristicKey, ConfigurationResolver, Outcome, Parameter, ResolveError, ResolverConfig,
    SettingValue,
};
use rand::prelude::*;

const ROUNDS: usize = 200;

/// 1..=8 values drawn from a small pool so duplicates are common
fn random_floats(rng: &mut StdRng) -> Vec<f32> {
    const POOL: [f32; 7] = [1.4, 1.8, 2.0, 2.8, 4.0, 5.6, 8.0];
    let len = rng.gen_range(1..=8);
    (0..len).map(|_| POOL[rng.gen_range(0..POOL.len())]).collect()
}

fn random_ranges(rng: &mut StdRng) -> Vec<ValueRange<i32>> {
    let len = rng.gen_range(1..=6);
    (0..len)
        .map(|_| {
            let lower = rng.gen_range(1..=60);
            let upper = lower + rng.gen_range(0..=30);
            ValueRange::new(lower, upper)
        })
        .collect()
}

#[test]
fn test_aperture_is_true_minimum() {
    let mut rng = StdRng::seed_from_u64(12345);

    for _ in 0..ROUNDS {
        let apertures = random_floats(&mut rng);
        let expected = apertures.iter().copied().fold(f32::INFINITY, f32::min);

        let snapshot = full_device().with(
            CharacteristicKey::LensInfoAvailableApertures,
            CapabilityValue::FloatList(apertures.clone()),
        );
        let settings = resolve(&snapshot);
        assert_eq!(
            settings.value(Parameter::LensAperture),
            Some(&SettingValue::Float(expected)),
            "apertures {apertures:?}"
        );
    }
}

#[test]
fn test_focal_length_and_density_are_true_maximum() {
    let mut rng = StdRng::seed_from_u64(777);

    for _ in 0..ROUNDS {
        let values = random_floats(&mut rng);
        let expected = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        assert_eq!(maximum(&values), Some(expected), "values {values:?}");

        let snapshot = full_device()
            .with(
                CharacteristicKey::LensInfoAvailableFocalLengths,
                CapabilityValue::FloatList(values.clone()),
            )
            .with(
                CharacteristicKey::LensInfoAvailableFilterDensities,
                CapabilityValue::FloatList(values.clone()),
            );
        let settings = resolve(&snapshot);
        assert_eq!(
            settings.value(Parameter::LensFocalLength),
            Some(&SettingValue::Float(expected))
        );
        assert_eq!(
            settings.value(Parameter::LensFilterDensity),
            Some(&SettingValue::Float(expected))
        );
    }
}

#[test]
fn test_minimum_matches_sorted_head() {
    let mut rng = StdRng::seed_from_u64(4242);

    for _ in 0..ROUNDS {
        let mut values = random_floats(&mut rng);
        let picked = minimum(&values);
        values.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(picked, values.first().copied());
    }
}

#[test]
fn test_tightest_fps_range_is_optimal() {
    let mut rng = StdRng::seed_from_u64(98765);

    for _ in 0..ROUNDS {
        let ranges = random_ranges(&mut rng);
        let candidates: Vec<_> = ranges.iter().filter(|r| r.lower <= 30).collect();

        match tightest_fps_range(&ranges, 30) {
            None => assert!(candidates.is_empty(), "ranges {ranges:?}"),
            Some(chosen) => {
                assert!(chosen.lower <= 30);
                for other in &candidates {
                    assert!(
                        chosen.span() < other.span()
                            || (chosen.span() == other.span() && chosen.upper >= other.upper),
                        "{chosen} should beat {other} in {ranges:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_fps_range_through_resolver() {
    let mut rng = StdRng::seed_from_u64(2024);
    let resolver = ConfigurationResolver::new(ResolverConfig::default());

    for _ in 0..ROUNDS {
        let ranges = random_ranges(&mut rng);
        let snapshot = device_with_modes(&[control_mode::AUTO.code], &[ae_mode::ON.code]).with(
            CharacteristicKey::ControlAeAvailableTargetFpsRanges,
            CapabilityValue::RangeList(ranges.clone()),
        );

        match (resolver.resolve_settings(&snapshot), tightest_fps_range(&ranges, 30)) {
            (Ok(settings), Some(expected)) => assert_eq!(
                settings.value(Parameter::AeTargetFpsRange),
                Some(&SettingValue::FpsRange(expected))
            ),
            (Err(ResolveError::AmbiguousRange { parameter, .. }), None) => {
                assert_eq!(parameter, Parameter::AeTargetFpsRange)
            }
            (result, expected) => {
                panic!("ranges {ranges:?}: got {result:?}, expected {expected:?}")
            }
        }
    }
}

#[test]
fn test_noise_reduction_preference_order() {
    let mut rng = StdRng::seed_from_u64(31337);
    let preference = [
        noise_reduction::OFF,
        noise_reduction::MINIMAL,
        noise_reduction::FAST,
    ];
    // OFF, FAST, HIGH_QUALITY, MINIMAL, ZERO_SHUTTER_LAG
    let all_codes = [0, 1, 2, 3, 4];

    for _ in 0..ROUNDS {
        let mut supported: Vec<i32> = all_codes
            .iter()
            .copied()
            .filter(|_| rng.gen_bool(0.5))
            .collect();
        if supported.is_empty() {
            supported.push(2);
        }
        supported.shuffle(&mut rng);

        let snapshot = full_device().with(
            CharacteristicKey::NoiseReductionAvailableNoiseReductionModes,
            CapabilityValue::IntList(supported.clone()),
        );
        let settings = resolve(&snapshot);
        let outcome = settings.outcome(Parameter::NoiseReductionMode).unwrap();

        match preference.iter().find(|option| supported.contains(&option.code)) {
            Some(option) => assert_eq!(
                outcome.mode_code(),
                Some(option.code),
                "supported {supported:?}"
            ),
            None => assert_eq!(outcome, &Outcome::NotSupported, "supported {supported:?}"),
        }
    }
}
