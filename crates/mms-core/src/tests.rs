//! Unit tests for mms-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EntityId, ServerId};

    #[test]
    fn index_and_order() {
        let id = EntityId(42);
        assert_eq!(id.index(), 42);
        assert!(ServerId(1) < ServerId(2));
    }

    #[test]
    fn display() {
        assert_eq!(ServerId(3).to_string(), "ServerId(3)");
    }
}

#[cfg(test)]
mod time {
    use crate::{Rounding, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(7).to_string(), "T7");
    }

    #[test]
    fn ceil_rounds_up() {
        assert_eq!(Rounding::Ceil.quantize(0.01), 1);
        assert_eq!(Rounding::Ceil.quantize(3.0), 3);
        assert_eq!(Rounding::Ceil.quantize(3.2), 4);
    }

    #[test]
    fn nearest_rounds_half_up() {
        assert_eq!(Rounding::Nearest.quantize(0.4), 0);
        assert_eq!(Rounding::Nearest.quantize(2.5), 3);
        assert_eq!(Rounding::Nearest.quantize(7.49), 7);
    }

    #[test]
    fn degenerate_inputs_quantize_to_zero() {
        for r in [Rounding::Ceil, Rounding::Nearest] {
            assert_eq!(r.quantize(0.0), 0);
            assert_eq!(r.quantize(-4.0), 0);
            assert_eq!(r.quantize(f64::NAN), 0);
            assert_eq!(r.quantize(f64::INFINITY), 0);
        }
    }

    #[test]
    fn default_is_ceil() {
        assert_eq!(Rounding::default(), Rounding::Ceil);
    }
}

#[cfg(test)]
mod rng {
    use crate::{ExpVariates, MmsError, SimRng, VariateSource};

    #[test]
    fn deterministic_same_seed() {
        let mut a = ExpVariates::new(7, 0.5, 0.1).unwrap();
        let mut b = ExpVariates::new(7, 0.5, 0.1).unwrap();
        for _ in 0..200 {
            assert_eq!(a.interarrival_secs().to_bits(), b.interarrival_secs().to_bits());
            assert_eq!(a.service_secs().to_bits(), b.service_secs().to_bits());
        }
    }

    #[test]
    fn streams_are_independent_of_call_interleaving() {
        let mut interleaved = ExpVariates::new(3, 1.0, 2.0).unwrap();
        let mut batched = ExpVariates::new(3, 1.0, 2.0).unwrap();

        let mut gaps_a = Vec::new();
        for _ in 0..50 {
            gaps_a.push(interleaved.interarrival_secs());
            interleaved.service_secs();
        }
        let gaps_b: Vec<f64> = (0..50).map(|_| batched.interarrival_secs()).collect();
        assert_eq!(gaps_a, gaps_b);
    }

    #[test]
    fn sample_mean_tracks_rate() {
        let mut v = ExpVariates::new(11, 0.25, 4.0).unwrap();
        let n = 20_000;
        let mean: f64 = (0..n).map(|_| v.interarrival_secs()).sum::<f64>() / n as f64;
        // Mean 4.0, standard error 4/sqrt(20000) ≈ 0.03.
        assert!((mean - 4.0).abs() < 0.2, "got {mean}");
    }

    #[test]
    fn samples_are_positive() {
        let mut v = ExpVariates::new(1, 1.0, 1.0).unwrap();
        for _ in 0..1000 {
            assert!(v.interarrival_secs() >= 0.0);
            assert!(v.service_secs() >= 0.0);
        }
    }

    #[test]
    fn rejects_bad_rates() {
        assert!(matches!(
            ExpVariates::new(0, 0.0, 1.0),
            Err(MmsError::InvalidParameter { name: "arrival_rate", .. })
        ));
        assert!(matches!(
            ExpVariates::new(0, 1.0, -2.0),
            Err(MmsError::InvalidParameter { name: "service_rate", .. })
        ));
        assert!(ExpVariates::new(0, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn children_diverge() {
        let mut root = SimRng::new(99);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let exp = rand_distr::Exp::new(1.0).unwrap();
        let a: f64 = c0.sample(&exp);
        let b: f64 = c1.sample(&exp);
        assert_ne!(a.to_bits(), b.to_bits());
    }
}

#[cfg(test)]
mod config {
    use crate::{MmsError, SimConfig};

    #[test]
    fn reference_is_valid() {
        let cfg = SimConfig::reference();
        cfg.validate().unwrap();
        assert_eq!(cfg.threshold(), 51);
        assert!((cfg.offered_load() - 16.0).abs() < 1e-9);
    }

    #[test]
    fn zero_servers_rejected() {
        let cfg = SimConfig { server_count: 0, ..SimConfig::reference() };
        assert!(matches!(
            cfg.validate(),
            Err(MmsError::InvalidParameter { name: "server_count", .. })
        ));
    }

    #[test]
    fn zero_entities_rejected() {
        let cfg = SimConfig { entity_count: 0, ..SimConfig::reference() };
        assert!(matches!(
            cfg.validate(),
            Err(MmsError::InvalidParameter { name: "entity_count", .. })
        ));
    }

    #[test]
    fn non_positive_rates_rejected() {
        let cfg = SimConfig { arrival_rate: 0.0, ..SimConfig::reference() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { service_rate: -1.0, ..SimConfig::reference() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn target_probability_out_of_range_rejected() {
        let cfg = SimConfig { target_probability: 1.5, ..SimConfig::reference() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { target_probability: f64::NAN, ..SimConfig::reference() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn error_message_names_parameter() {
        let err = SimConfig { server_count: 0, ..SimConfig::reference() }
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid parameter `server_count`: must be at least 1");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_falls_back_to_reference() {
        let cfg: SimConfig =
            serde_json::from_str(r#"{ "server_count": 15, "rounding": "nearest" }"#).unwrap();
        assert_eq!(cfg.server_count, 15);
        assert_eq!(cfg.rounding, crate::Rounding::Nearest);
        assert_eq!(cfg.entity_count, 1_000);
    }
}
