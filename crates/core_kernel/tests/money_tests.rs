//! Tests for Money arithmetic, rounding, parsing, and rates

use core_kernel::{Money, MoneyError, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_quantizes_to_two_places_half_up() {
        assert_eq!(Money::new(dec!(100.505)).amount(), dec!(100.51));
        assert_eq!(Money::new(dec!(100.504)).amount(), dec!(100.50));
        assert_eq!(Money::new(dec!(-0.125)).amount(), dec!(-0.13));
    }

    #[test]
    fn test_from_cents() {
        assert_eq!(Money::from_cents(159298_55).amount(), dec!(159298.55));
        assert_eq!(Money::from_cents(-100).amount(), dec!(-1.00));
    }

    #[test]
    fn test_zero_and_default_agree() {
        assert!(Money::zero().is_zero());
        assert_eq!(Money::default(), Money::ZERO);
    }
}

mod parsing {
    use super::*;

    #[test]
    fn test_parse_plain_decimal_strings() {
        assert_eq!(Money::parse("1591414.81").unwrap().amount(), dec!(1591414.81));
        assert_eq!(Money::parse(" 42 ").unwrap().amount(), dec!(42));
        assert_eq!(Money::parse("-9500.50").unwrap().amount(), dec!(-9500.50));
    }

    #[test]
    fn test_parse_surfaces_garbage() {
        assert_eq!(
            Money::parse("N/A"),
            Err(MoneyError::InvalidAmount("N/A".to_string()))
        );
        assert!(Money::parse("").is_err());
    }

    #[test]
    fn test_parse_quantizes_excess_precision() {
        assert_eq!(Money::parse("10.005").unwrap().amount(), dec!(10.01));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_add_sub_neg() {
        let a = Money::new(dec!(400000.00));
        let b = Money::new(dec!(53000.00));

        assert_eq!((a + b).amount(), dec!(453000.00));
        assert_eq!((a - b).amount(), dec!(347000.00));
        assert_eq!((-b).amount(), dec!(-53000.00));
    }

    #[test]
    fn test_multiply_requantizes() {
        let m = Money::new(dec!(1824411.17));
        assert_eq!(m.multiply(dec!(0.18)).amount(), dec!(328394.01));
        assert_eq!((m * dec!(0.18)).amount(), dec!(328394.01));
    }

    #[test]
    fn test_divide() {
        let m = Money::new(dec!(100.00));
        assert_eq!(m.divide(dec!(3)).unwrap().amount(), dec!(33.33));
        assert_eq!(m.divide(Decimal::ZERO), Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_sum_over_iterator() {
        let legs = [
            Money::new(dec!(9000.00)),
            Money::new(dec!(500.00)),
        ];
        let total: Money = legs.iter().sum();
        assert_eq!(total.amount(), dec!(9500.00));
    }
}

mod display {
    use super::*;

    #[test]
    fn test_display_with_dollar_sign_and_cents() {
        assert_eq!(Money::new(dec!(1591414.81)).to_string(), "$1591414.81");
        assert_eq!(Money::new(dec!(5)).to_string(), "$5.00");
    }
}

mod rates {
    use super::*;

    #[test]
    fn test_percentage_round_trip() {
        let rate = Rate::from_percentage(dec!(18));
        assert_eq!(rate.as_decimal(), dec!(0.18));
        assert_eq!(rate.as_percentage(), dec!(18.00));
        assert_eq!(rate.to_string(), "18%");
    }

    #[test]
    fn test_apply_quantizes_result() {
        let rate = Rate::new(dec!(0.0333));
        assert_eq!(rate.apply(Money::new(dec!(1000.00))).amount(), dec!(33.30));
    }
}
