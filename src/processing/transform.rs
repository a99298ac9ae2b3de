//! Fixed arithmetic/list transformation over three input numbers.

use crate::error::NumericResult;
use crate::types::{Number, OrderedMap};

/// Everything produced by a single [`transform`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformOutput {
    /// Sum of `transformed`. Not consumed by the driver, but part of the
    /// contract and observable through direct calls.
    pub result: Number,
    /// Length-10 intermediate sequence derived from the index parity rule.
    pub sequence: Vec<Number>,
    /// Ordered mapping `{key1: total, key2: d, key3: c}` where `total` is
    /// the sum of `sequence`.
    pub mapping: OrderedMap,
    /// Scaled mapping values, in key order.
    pub transformed: Vec<Number>,
}

/// Run the fixed transformation over `(x, y, z)`.
///
/// Steps:
///
/// 1. `a = x + y`, `b = y * z`, `c = a - b`
/// 2. `d = c * 2` if `c > 0`, otherwise `d = c / 2` (true division, so the
///    halve branch always yields a float and never fails; zero takes the
///    halve branch)
/// 3. `sequence[i] = i * d` for even `i`, `i + d` for odd `i`, `i` in `0..10`
/// 4. `mapping = {key1: sum(sequence), key2: d, key3: c}`
/// 5. `transformed` = scaled mapping values in key order, `result` = their sum
///
/// Deterministic and side-effect free. The only failure mode is integer
/// overflow inside the checked [`Number`] arithmetic.
///
/// ```rust
/// use numeric_processing::processing::transform;
/// use numeric_processing::types::Number;
///
/// let out = transform(Number::Int64(5), Number::Int64(3), Number::Int64(2)).unwrap();
/// assert_eq!(out.mapping.get("key1"), Some(Number::Int64(125)));
/// assert_eq!(out.result, Number::Float64(253.0));
/// ```
pub fn transform(x: Number, y: Number, z: Number) -> NumericResult<TransformOutput> {
    let a = x.add(y)?;
    let b = y.mul(z)?;
    let c = a.sub(b)?;

    let d = if c.as_f64() > 0.0 {
        c.mul(Number::Int64(2))?
    } else {
        c.div(Number::Int64(2))
    };

    let mut sequence = Vec::with_capacity(10);
    for i in 0..10i64 {
        let index = Number::Int64(i);
        let value = if i % 2 == 0 {
            index.mul(d)?
        } else {
            index.add(d)?
        };
        sequence.push(value);
    }

    let mut total = Number::Int64(0);
    for &value in &sequence {
        total = total.add(value)?;
    }

    let mut mapping = OrderedMap::new();
    mapping.insert("key1", total);
    mapping.insert("key2", d);
    mapping.insert("key3", c);

    let mut transformed = Vec::with_capacity(mapping.len());
    let mut result = Number::Int64(0);
    for value in mapping.values() {
        let scaled = scale_value(value)?;
        result = result.add(scaled)?;
        transformed.push(scaled);
    }

    tracing::debug!(?result, entries = mapping.len(), "transform complete");

    Ok(TransformOutput {
        result,
        sequence,
        mapping,
        transformed,
    })
}

/// Scale rule applied to each mapping value: double above 5, halve any other
/// non-zero value, keep zero as integer zero.
fn scale_value(value: Number) -> NumericResult<Number> {
    if value.as_f64() > 5.0 {
        value.mul(Number::Int64(2))
    } else if !value.is_zero() {
        Ok(value.div(Number::Int64(2)))
    } else {
        Ok(Number::Int64(0))
    }
}

#[cfg(test)]
mod tests {
    use super::{scale_value, transform};
    use crate::types::Number;

    fn int(v: i64) -> Number {
        Number::Int64(v)
    }

    #[test]
    fn fixed_triple_produces_expected_intermediates() {
        let out = transform(int(5), int(3), int(2)).unwrap();

        // a=8, b=6, c=2, d=4: even indexes scale, odd indexes shift.
        assert_eq!(
            out.sequence,
            vec![
                int(0),
                int(5),
                int(8),
                int(7),
                int(16),
                int(9),
                int(24),
                int(11),
                int(32),
                int(13),
            ]
        );

        assert_eq!(out.mapping.get("key1"), Some(int(125)));
        assert_eq!(out.mapping.get("key2"), Some(int(4)));
        assert_eq!(out.mapping.get("key3"), Some(int(2)));
        let keys: Vec<&str> = out.mapping.keys().collect();
        assert_eq!(keys, vec!["key1", "key2", "key3"]);

        assert_eq!(
            out.transformed,
            vec![int(250), Number::Float64(2.0), Number::Float64(1.0)]
        );
        assert_eq!(out.result, Number::Float64(253.0));
    }

    #[test]
    fn transform_is_deterministic() {
        let first = transform(int(5), int(3), int(2)).unwrap();
        let second = transform(int(5), int(3), int(2)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn negative_c_takes_halve_branch() {
        // a=3, b=8, c=-5 → d = -5/2 = -2.5 (float)
        let out = transform(int(1), int(2), int(4)).unwrap();
        assert_eq!(out.mapping.get("key2"), Some(Number::Float64(-2.5)));
        assert_eq!(out.sequence[0], Number::Float64(0.0));
        assert_eq!(out.sequence[1], Number::Float64(-1.5));
    }

    #[test]
    fn zero_c_takes_halve_branch() {
        // a=2, b=2, c=0 → d = 0/2 = 0.0, not an error
        let out = transform(int(1), int(1), int(2)).unwrap();
        assert_eq!(out.mapping.get("key2"), Some(Number::Float64(0.0)));
        assert_eq!(out.mapping.get("key3"), Some(int(0)));
    }

    #[test]
    fn scale_value_branches() {
        assert_eq!(scale_value(int(125)).unwrap(), int(250));
        assert_eq!(scale_value(int(4)).unwrap(), Number::Float64(2.0));
        assert_eq!(scale_value(int(0)).unwrap(), int(0));
        assert_eq!(
            scale_value(Number::Float64(0.0)).unwrap(),
            Number::Int64(0)
        );
        assert_eq!(scale_value(int(-4)).unwrap(), Number::Float64(-2.0));
    }

    #[test]
    fn works_with_float_inputs() {
        // a=3.5, b=3.0, c=0.5 > 0 → d = 1.0 (float, doubled)
        let out = transform(Number::Float64(2.0), Number::Float64(1.5), int(2)).unwrap();
        assert_eq!(out.mapping.get("key2"), Some(Number::Float64(1.0)));
        assert_eq!(out.mapping.get("key3"), Some(Number::Float64(0.5)));
    }
}
