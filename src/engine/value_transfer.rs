//! Value transfer between the long and short sides for one price move.

use crate::domain::{Decimal, Direction, PoolSide, ValueTransfer};
use rust_decimal_macros::dec;

/// `new_price / old_price`, or zero when there is no old price.
pub fn calc_ratio(old_price: Decimal, new_price: Decimal) -> Decimal {
    if old_price.is_zero() {
        return Decimal::zero();
    }
    new_price / old_price
}

/// Classify a price ratio as a move up, down, or none.
pub fn calc_direction(ratio: Decimal) -> Direction {
    let one = Decimal::one();
    if ratio > one {
        Direction::Up
    } else if ratio == one {
        Direction::NoChange
    } else {
        Direction::Down
    }
}

/// Fraction of the losing side's balance moved to the winning side.
///
/// Logistic curve `2 / (1 + e^(-2 * leverage * (1 - r))) - 1` where `r` is
/// the smaller price over the larger one. Result lies in `[0, 1)`.
pub fn calc_percentage_loss_transfer(
    old_price: Decimal,
    new_price: Decimal,
    leverage: Decimal,
) -> Decimal {
    let high = old_price.max(new_price);
    if high.is_zero() {
        return Decimal::zero();
    }
    let price_ratio = old_price.min(new_price) / high;
    let two = Decimal::new(dec!(2));
    let exponent = -(two * leverage * (Decimal::one() - price_ratio));
    two / (Decimal::one() + exponent.exp()) - Decimal::one()
}

/// Value moved from the losing side to the winning side when the oracle
/// price goes from `old_price` to `new_price`.
pub fn calc_next_value_transfer(
    old_price: Decimal,
    new_price: Decimal,
    leverage: Decimal,
    long_balance: Decimal,
    short_balance: Decimal,
) -> ValueTransfer {
    let direction = calc_direction(calc_ratio(old_price, new_price));

    match direction.winning_side() {
        None => ValueTransfer::none(),
        Some(PoolSide::Long) => {
            let gain = calc_percentage_loss_transfer(old_price, new_price, leverage) * short_balance;
            ValueTransfer {
                long_value_transfer: gain,
                short_value_transfer: -gain,
            }
        }
        Some(PoolSide::Short) => {
            let gain =
                (calc_percentage_loss_transfer(old_price, new_price, leverage) * long_balance).abs();
            ValueTransfer {
                long_value_transfer: -gain,
                short_value_transfer: gain,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    #[test]
    fn test_ratio_zero_old_price() {
        assert_eq!(calc_ratio(Decimal::zero(), d("110")), Decimal::zero());
        assert_eq!(calc_ratio(d("100"), d("110")), d("1.1"));
    }

    #[test]
    fn test_direction() {
        assert_eq!(calc_direction(d("1.1")), Direction::Up);
        assert_eq!(calc_direction(d("1")), Direction::NoChange);
        assert_eq!(calc_direction(d("0.9")), Direction::Down);
        assert_eq!(calc_direction(Decimal::zero()), Direction::Down);
    }

    #[test]
    fn test_percentage_loss_transfer_symmetric_in_direction() {
        let up = calc_percentage_loss_transfer(d("100"), d("110"), d("3"));
        let down = calc_percentage_loss_transfer(d("110"), d("100"), d("3"));
        assert_eq!(up, down);
    }

    #[test]
    fn test_percentage_loss_transfer_bounded() {
        let extreme = calc_percentage_loss_transfer(d("1"), d("10"), d("3"));
        assert!(extreme < Decimal::one());
        assert!(extreme > d("0.99"));
        assert!(!extreme.is_negative());

        let none = calc_percentage_loss_transfer(d("5"), d("5"), d("3"));
        assert!(none.is_zero());
    }

    #[test]
    fn test_percentage_loss_transfer_matches_tanh() {
        // 2/(1+e^-x) - 1 == tanh(x/2); x = 2 * 3 * (1 - 100000/110000)
        let p = calc_percentage_loss_transfer(d("100000"), d("110000"), d("3"));
        let expected = d("0.2661");
        assert!((p - expected).abs() < d("0.0001"), "got {}", p);
    }

    #[test]
    fn test_up_move_pays_long_from_short() {
        let t = calc_next_value_transfer(d("100"), d("110"), d("3"), d("1000"), d("500"));
        assert!(t.long_value_transfer.is_positive());
        assert_eq!(t.long_value_transfer, -t.short_value_transfer);
        assert!(t.long_value_transfer < d("500"));
    }

    #[test]
    fn test_down_move_pays_short_from_long() {
        let t = calc_next_value_transfer(d("110"), d("100"), d("3"), d("1000"), d("500"));
        assert!(t.short_value_transfer.is_positive());
        assert_eq!(t.long_value_transfer, -t.short_value_transfer);
        assert!(t.short_value_transfer < d("1000"));
    }

    #[test]
    fn test_no_change_is_zero() {
        let t = calc_next_value_transfer(d("100"), d("100"), d("3"), d("1000"), d("500"));
        assert_eq!(t, ValueTransfer::none());
    }

    #[test]
    fn test_zero_old_price_does_not_panic() {
        let t = calc_next_value_transfer(Decimal::zero(), d("100"), d("3"), d("1000"), d("500"));
        assert_eq!(t.long_value_transfer + t.short_value_transfer, Decimal::zero());
    }
}
