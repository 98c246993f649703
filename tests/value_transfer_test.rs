use pool_preview::engine::{
    calc_apy, calc_next_value_transfer, calc_skew, calc_token_price,
};
use pool_preview::Decimal;

fn d(s: &str) -> Decimal {
    Decimal::from_str_canonical(s).unwrap()
}

const PRICES: [&str; 6] = ["0", "0.5", "99.99", "100000", "110000", "1234567.891"];
const LEVERAGES: [&str; 4] = ["1", "3", "5.5", "10"];
const BALANCES: [&str; 4] = ["0", "1", "120000", "100000.000000000000000001"];

#[test]
fn test_value_transfer_is_zero_sum() {
    for old_price in PRICES {
        for new_price in PRICES {
            for leverage in LEVERAGES {
                for long_balance in BALANCES {
                    for short_balance in BALANCES {
                        let t = calc_next_value_transfer(
                            d(old_price),
                            d(new_price),
                            d(leverage),
                            d(long_balance),
                            d(short_balance),
                        );
                        assert_eq!(
                            t.long_value_transfer + t.short_value_transfer,
                            Decimal::zero(),
                            "not zero-sum for {} -> {} at {}x",
                            old_price,
                            new_price,
                            leverage
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_no_price_change_moves_nothing() {
    for price in PRICES.iter().filter(|p| **p != "0") {
        for leverage in LEVERAGES {
            let t = calc_next_value_transfer(d(price), d(price), d(leverage), d("120000"), d("100000"));
            assert!(t.long_value_transfer.is_zero());
            assert!(t.short_value_transfer.is_zero());
        }
    }
}

#[test]
fn test_losing_side_never_fully_drained() {
    let t = calc_next_value_transfer(d("100"), d("150"), d("3"), d("1000"), d("1000"));
    assert!(t.short_value_transfer.abs() < d("1000"));

    let t = calc_next_value_transfer(d("150"), d("100"), d("3"), d("1000"), d("1000"));
    assert!(t.long_value_transfer.abs() < d("1000"));
}

#[test]
fn test_higher_leverage_moves_more() {
    let low = calc_next_value_transfer(d("100"), d("105"), d("1"), d("1000"), d("1000"));
    let high = calc_next_value_transfer(d("100"), d("105"), d("5"), d("1000"), d("1000"));
    assert!(high.long_value_transfer > low.long_value_transfer);
}

#[test]
fn test_bootstrap_token_price() {
    for v in ["0", "1", "5000.25"] {
        assert_eq!(calc_token_price(Decimal::zero(), d(v)), Decimal::one());
        assert_eq!(calc_token_price(d(v), Decimal::zero()), Decimal::one());
    }
}

#[test]
fn test_neutral_skew() {
    for v in ["0", "1", "5000.25"] {
        assert_eq!(calc_skew(Decimal::zero(), d(v)), Decimal::one());
        assert_eq!(calc_skew(d(v), Decimal::zero()), Decimal::one());
    }
}

#[test]
fn test_apy_compounding() {
    let apy = calc_apy(d("1.0"));
    assert!((apy - d("1.692")).abs() < d("0.001"), "got {}", apy);
}
