//! Center-out column visitation order.

/// Compute the order in which columns are tried: innermost first, and on
/// equal distance from the center the left column before the right one.
///
/// For an odd width the exact center comes first, then the columns alternate
/// left, right moving outward. For an even width the columns pair up
/// symmetrically about the center line, innermost pair first, each pair
/// listed left member before right. The result is a permutation of
/// `[0, cols)`.
pub fn column_order(cols: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(cols);
    match cols {
        0 => {}
        1 => order.push(0),
        _ if cols % 2 == 1 => {
            let center = cols / 2;
            order.push(center);
            for shift in 1..=center {
                order.push(center - shift);
                order.push(center + shift);
            }
        }
        _ => {
            for shift in 0..cols / 2 {
                order.push(cols / 2 - shift - 1);
                order.push(cols / 2 + shift);
            }
        }
    }
    order
}
