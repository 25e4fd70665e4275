use core_types::ReturnPercent;
use rust_decimal::Decimal;

/// Absolute gain of `current` over `baseline`. Saturates instead of overflowing.
pub fn gain(current: Decimal, baseline: Decimal) -> Decimal {
    current.saturating_sub(baseline)
}

/// Return of `current` relative to `baseline`, in percent.
///
/// * `baseline > 0`: `(current - baseline) / baseline * 100`.
/// * `baseline == 0` and `current > 0`: `Unbounded`.
/// * anything else: `Finite(0)`.
///
/// A ratio too large for `Decimal` is reported as `Unbounded` when positive.
/// A loss that large saturates at `Finite(Decimal::MIN)`, the same way [`gain`] saturates.
pub fn percent_return(current: Decimal, baseline: Decimal) -> ReturnPercent {
    if baseline > Decimal::ZERO {
        let delta = gain(current, baseline);
        return match delta
            .checked_div(baseline)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        {
            Some(pct) => ReturnPercent::Finite(pct),
            None if delta.is_sign_positive() => {
                tracing::debug!(%current, %baseline, "Return exceeds decimal range; reporting as unbounded.");
                ReturnPercent::Unbounded
            }
            None => {
                tracing::debug!(%current, %baseline, "Loss exceeds decimal range; saturating.");
                ReturnPercent::Finite(Decimal::MIN)
            }
        };
    }

    if baseline.is_zero() && current > baseline {
        ReturnPercent::Unbounded
    } else {
        ReturnPercent::Finite(Decimal::ZERO)
    }
}
