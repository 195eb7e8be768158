use proptest::prelude::*;

use rosu_training::{
    model::{beatmap::BeatmapDifficulty, hit_object::HitObject},
    projection::ObjectTimingProjection,
    rate::rate_at,
    target::{DifficultyTarget, TargetRange},
    transfer::transfer_setting,
    Beatmap, TargetKind, Training,
};

fn any_kind() -> impl Strategy<Value = TargetKind> {
    prop::sample::select(TargetKind::ALL.to_vec())
}

fn training_on(end_time: f64, ar: f64, cs: f64) -> Training {
    let map = Beatmap::new(
        BeatmapDifficulty::new(1).ar(ar).cs(cs),
        vec![HitObject::circle(0.0), HitObject::circle(end_time)],
    );

    let mut training = Training::new();
    training.apply_to_beatmap(&map);

    training
}

proptest! {
    /// Any written value ends up within the target's bounds.
    #[test]
    fn values_are_clamped(kind in any_kind(), value in -100.0..100.0_f64) {
        let range = kind.range();
        let mut target = DifficultyTarget::new(range);
        target.set_value(value);

        prop_assert!(target.value() >= range.min && target.value() <= range.max);

        if value > range.max {
            prop_assert_eq!(target.value(), range.max);
        } else if value < range.min {
            prop_assert_eq!(target.value(), range.min);
        }
    }

    /// An override survives transfers of different defaults.
    #[test]
    fn overrides_survive_transfers(
        value in 0.0..=11.0_f64,
        defaults in prop::collection::vec(0.0..=11.0_f64, 1..8),
    ) {
        let mut target = DifficultyTarget::new(TargetRange::APPROACH_RATE);
        target.set_value(value);
        prop_assume!(target.is_overridden());

        let kept = target.value();

        for default in defaults {
            transfer_setting(&mut target, default);

            prop_assert_eq!(target.value(), kept);
            prop_assert_eq!(target.default(), TargetRange::APPROACH_RATE.normalize(default));
        }
    }

    /// Approach rate goes from the map's value at the first object to the
    /// target at the last object, monotonically in between.
    #[test]
    fn approach_rate_interpolation(
        map_ar in 0.0..=10.0_f64,
        target_ar in 0.0..=11.0_f64,
        end_time in 1.0..600_000.0_f64,
        fractions in prop::collection::vec(0.0..=1.0_f64, 2..16),
    ) {
        let mut training = training_on(end_time, map_ar, 4.0);
        training.set_target(TargetKind::ApproachRate, target_ar);

        let ar = training.target(TargetKind::ApproachRate);
        let (from, to) = (ar.default(), ar.value());

        let first = training.project(&HitObject::circle(0.0)).unwrap();
        let last = training.project(&HitObject::circle(end_time)).unwrap();

        prop_assert!((first.approach_rate - from).abs() < 1e-9);
        prop_assert!((last.approach_rate - to).abs() < 1e-9);

        let mut fractions = fractions;
        fractions.sort_by(f64::total_cmp);

        let rates: Vec<_> = fractions
            .iter()
            .map(|fraction| training.project(&HitObject::circle(fraction * end_time)).unwrap())
            .map(|projection| projection.approach_rate)
            .collect();

        for pair in rates.windows(2) {
            if to >= from {
                prop_assert!(pair[0] <= pair[1] + 1e-9, "{:?}", pair);
            } else {
                prop_assert!(pair[0] + 1e-9 >= pair[1], "{:?}", pair);
            }
        }
    }

    /// The rate never leaves the range spanned by `1.0` and the speed.
    #[test]
    fn rate_bounds(
        speed in 1.0..=2.0_f64,
        time in -100_000.0..1_000_000.0_f64,
        duration in -10.0..600_000.0_f64,
    ) {
        let rate = rate_at(speed, time, duration);

        prop_assert!(rate >= speed.min(1.0) && rate <= speed.max(1.0), "{rate}");
    }

    /// Projecting the same object twice yields the same result.
    #[test]
    fn projection_is_deterministic(
        start_time in 0.0..300_000.0_f64,
        end_time in 0.0..300_000.0_f64,
        ar in 0.0..=11.0_f64,
        cs in 0.0..=10.0_f64,
        speed in 1.0..=2.0_f64,
    ) {
        let mut training = training_on(end_time, 9.0, 4.0);
        training.set_target(TargetKind::ApproachRate, ar);
        training.set_target(TargetKind::CircleSize, cs);
        training.set_target(TargetKind::Speed, speed);

        let h = HitObject::circle(start_time);
        let first = training.spawn(&h).unwrap();
        let second = training.spawn(&h).unwrap();

        prop_assert_eq!(first.time_preempt(), second.time_preempt());
        prop_assert_eq!(first.scale(), second.scale());

        let projection = ObjectTimingProjection::new(start_time, end_time, training.targets());
        prop_assert_eq!(first.projection(), &projection);
        prop_assert!((0.0..=1.0).contains(&projection.progress));
    }
}
