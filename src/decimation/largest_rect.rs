use crate::data_types::PlotPoint;

/// Largest-rectangle decimation over parallel x/y arrays.
///
/// Reduces the series to exactly `threshold` points while keeping the first
/// and last points as anchors. Each interior bucket contributes the candidate
/// maximizing the axis-aligned rectangle area spanned against the running
/// anchor: `|anchor.x - candidate.x| * |anchor.y - candidate.y|`. The metric
/// uses only the anchor and the candidate, never a next-bucket reference
/// point; swapping in a triangle-area formula changes which points survive.
///
/// Pure and allocation-bounded, safe to call on every update; callers should
/// memoize on `(data, threshold)` to avoid repeating the linear scan on
/// unchanged input.
pub fn decimate_largest_rect_arrays(x: &[f64], y: &[f64], threshold: usize) -> Vec<PlotPoint> {
    let mut output = Vec::with_capacity(threshold.min(x.len()));
    decimate_largest_rect_arrays_into(x, y, threshold, &mut output);
    output
}

pub fn decimate_largest_rect_arrays_into(
    x: &[f64],
    y: &[f64],
    threshold: usize,
    output: &mut Vec<PlotPoint>,
) {
    if x.is_empty() || y.is_empty() || x.len() != y.len() {
        return;
    }

    if x.len() <= threshold || threshold < 3 {
        output.extend(
            x.iter()
                .zip(y.iter())
                .map(|(x_val, y_val)| PlotPoint::new(*x_val, *y_val)),
        );
        return;
    }

    let n = x.len();
    let buckets = super::bucketing::calculate_index_buckets(n, threshold);

    output.push(PlotPoint::new(x[0], y[0]));

    let mut a_idx = 0;
    for range in buckets {
        let a_x = x[a_idx];
        let a_y = y[a_idx];

        let mut max_area = -1.0;
        // An empty bucket (possible from rounding) re-emits the anchor
        // instead of reading past the slice.
        let mut next_a_idx = a_idx;

        for j in range {
            // NaN coordinates produce a NaN area, which loses every
            // comparison; malformed points are never selected but also
            // never panic.
            let area = (a_x - x[j]).abs() * (a_y - y[j]).abs();
            if area > max_area {
                max_area = area;
                next_a_idx = j;
            }
        }

        a_idx = next_a_idx;
        output.push(PlotPoint::new(x[a_idx], y[a_idx]));
    }

    output.push(PlotPoint::new(x[n - 1], y[n - 1]));
}

/// Slice variant over already-built points. Per-point auxiliary state
/// (`color_op`) rides along with the selected points.
pub fn decimate_largest_rect_slice(data: &[PlotPoint], threshold: usize) -> Vec<PlotPoint> {
    decimate_largest_rect_generic(data, threshold, |p| p.x, |p| p.y)
}

/// Accessor-driven variant for arbitrary point types. Selected elements are
/// cloned wholesale, so fields the accessors never look at pass through
/// untouched.
pub fn decimate_largest_rect_generic<T, FX, FY>(
    data: &[T],
    threshold: usize,
    get_x: FX,
    get_y: FY,
) -> Vec<T>
where
    T: Clone,
    FX: Fn(&T) -> f64,
    FY: Fn(&T) -> f64,
{
    let n = data.len();
    if n <= threshold || threshold < 3 {
        return data.to_vec();
    }

    let buckets = super::bucketing::calculate_index_buckets(n, threshold);

    let mut sampled = Vec::with_capacity(threshold);
    sampled.push(data[0].clone());

    let mut a_idx = 0;
    for range in buckets {
        let a_x = get_x(&data[a_idx]);
        let a_y = get_y(&data[a_idx]);

        let mut max_area = -1.0;
        let mut next_a_idx = a_idx;

        for j in range {
            let area = (a_x - get_x(&data[j])).abs() * (a_y - get_y(&data[j])).abs();
            if area > max_area {
                max_area = area;
                next_a_idx = j;
            }
        }

        a_idx = next_a_idx;
        sampled.push(data[a_idx].clone());
    }

    sampled.push(data[n - 1].clone());
    sampled
}
