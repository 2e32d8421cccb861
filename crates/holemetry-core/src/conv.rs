/// 1-D "same" convolution with zero padding.
///
/// Output has the same length as `signal`. Intended for odd-length kernels
/// centered on `(len - 1) / 2`; with an antisymmetric derivative kernel a
/// rising ramp yields a positive interior response.
pub fn conv_same(signal: &[f64], kernel: &[f64]) -> Vec<f64> {
    let n = signal.len();
    let k = kernel.len();
    if n == 0 || k == 0 {
        return vec![0.0; n];
    }
    let half = (k - 1) / 2;

    let mut out = vec![0.0; n];
    for (i, o) in out.iter_mut().enumerate() {
        let mut acc = 0.0;
        for (j, kv) in kernel.iter().enumerate() {
            let idx = i as isize + half as isize - j as isize;
            if idx >= 0 && (idx as usize) < n {
                acc += signal[idx as usize] * kv;
            }
        }
        *o = acc;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_kernel() {
        let s = [1.0, -2.0, 3.0, 0.5];
        assert_eq!(conv_same(&s, &[1.0]), s.to_vec());
    }

    #[test]
    fn output_length_matches_input() {
        let s = vec![0.0; 17];
        let k = vec![0.2; 5];
        assert_eq!(conv_same(&s, &k).len(), 17);
    }

    #[test]
    fn derivative_kernel_on_ramp_is_positive_in_interior() {
        let s: Vec<f64> = (0..20).map(f64::from).collect();
        // Antisymmetric 3-tap derivative.
        let d = conv_same(&s, &[1.0, 0.0, -1.0]);
        for v in &d[1..19] {
            assert_relative_eq!(*v, 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn box_kernel_averages() {
        let s = [3.0, 3.0, 3.0, 3.0, 3.0];
        let d = conv_same(&s, &[1.0 / 3.0; 3]);
        assert_relative_eq!(d[2], 3.0, epsilon = 1e-12);
    }
}
