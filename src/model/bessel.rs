//! Bessel functions of the first and second kind, orders 0 and 1, plus the
//! zeros of J0. The TM01 cutoff wavenumber comes from the first J0 zero, so
//! the zero finder is the load-bearing part; the rest feeds the diagnostic
//! chart.
//!
//! Evaluation uses the Abramowitz & Stegun rational fits (9.4.x) with the
//! usual split at |x| = 8 between the polynomial and asymptotic branches.

use std::f64::consts::PI;

/// J0(x), first kind order 0.
pub fn j0(x: f64) -> f64 {
    let ax = x.abs();
    if ax < 8.0 {
        let y = x * x;
        let num = 57_568_490_574.0
            + y * (-13_362_590_354.0
                + y * (651_619_640.7
                    + y * (-11_214_424.18 + y * (77_392.330_17 + y * (-184.905_245_6)))));
        let den = 57_568_490_411.0
            + y * (1_029_532_985.0
                + y * (9_494_680.718 + y * (59_272.648_53 + y * (267.853_271_2 + y))));
        num / den
    } else {
        let z = 8.0 / ax;
        let y = z * z;
        let xx = ax - 0.785_398_164;
        let p = 1.0
            + y * (-0.109_862_862_7e-2
                + y * (0.273_451_040_7e-4
                    + y * (-0.207_337_063_9e-5 + y * 0.209_388_721_1e-6)));
        let q = -0.156_249_999_5e-1
            + y * (0.143_048_876_5e-3
                + y * (-0.691_114_765_1e-5
                    + y * (0.762_109_516_1e-6 - y * 0.934_935_152e-7)));
        (0.636_619_772 / ax).sqrt() * (xx.cos() * p - z * xx.sin() * q)
    }
}

/// J1(x), first kind order 1.
pub fn j1(x: f64) -> f64 {
    let ax = x.abs();
    if ax < 8.0 {
        // Odd polynomial in x; the sign falls out of the numerator.
        let y = x * x;
        let num = x
            * (72_362_614_232.0
                + y * (-7_895_059_235.0
                    + y * (242_396_853.1
                        + y * (-2_972_611.439 + y * (15_704.482_60 + y * (-30.160_366_06))))));
        let den = 144_725_228_442.0
            + y * (2_300_535_178.0
                + y * (18_583_304.74 + y * (99_447.433_94 + y * (376.999_139_7 + y))));
        num / den
    } else {
        let z = 8.0 / ax;
        let y = z * z;
        let xx = ax - 2.356_194_491;
        let p = 1.0
            + y * (0.183_105e-2
                + y * (-0.351_639_649_6e-4
                    + y * (0.245_752_017_4e-5 + y * (-0.240_337_019e-6))));
        let q = 0.046_874_999_95
            + y * (-0.200_269_087_3e-3
                + y * (0.844_919_909_6e-5
                    + y * (-0.882_289_87e-6 + y * 0.105_787_412e-6)));
        let ans = (0.636_619_772 / ax).sqrt() * (xx.cos() * p - z * xx.sin() * q);
        if x < 0.0 {
            -ans
        } else {
            ans
        }
    }
}

/// Y0(x), second kind order 0. Defined for x > 0.
pub fn y0(x: f64) -> f64 {
    if x < 8.0 {
        let y = x * x;
        let num = -2_957_821_389.0
            + y * (7_062_834_065.0
                + y * (-512_359_803.6
                    + y * (10_879_881.29 + y * (-86_327.927_57 + y * 228.462_273_3))));
        let den = 40_076_544_269.0
            + y * (745_249_964.8
                + y * (7_189_466.438 + y * (47_447.264_70 + y * (226.103_024_4 + y))));
        num / den + 0.636_619_772 * j0(x) * x.ln()
    } else {
        let z = 8.0 / x;
        let y = z * z;
        let xx = x - 0.785_398_164;
        let p = 1.0
            + y * (-0.109_862_862_7e-2
                + y * (0.273_451_040_7e-4
                    + y * (-0.207_337_063_9e-5 + y * 0.209_388_721_1e-6)));
        let q = -0.156_249_999_5e-1
            + y * (0.143_048_876_5e-3
                + y * (-0.691_114_765_1e-5
                    + y * (0.762_109_516_1e-6 - y * 0.934_935_152e-7)));
        (0.636_619_772 / x).sqrt() * (xx.sin() * p + z * xx.cos() * q)
    }
}

/// Y1(x), second kind order 1. Defined for x > 0.
pub fn y1(x: f64) -> f64 {
    if x < 8.0 {
        let y = x * x;
        let num = x
            * (-0.490_060_494_3e13
                + y * (0.127_527_439_0e13
                    + y * (-0.515_343_813_9e11
                        + y * (0.734_926_455_1e9
                            + y * (-0.423_792_272_6e7 + y * 0.851_193_793_5e4)))));
        let den = 0.249_958_057_0e14
            + y * (0.424_441_966_4e12
                + y * (0.373_365_036_7e10
                    + y * (0.224_590_400_2e8
                        + y * (0.102_042_605_0e6 + y * (0.354_963_288_5e3 + y)))));
        num / den + 0.636_619_772 * (j1(x) * x.ln() - 1.0 / x)
    } else {
        let z = 8.0 / x;
        let y = z * z;
        let xx = x - 2.356_194_491;
        let p = 1.0
            + y * (0.183_105e-2
                + y * (-0.351_639_649_6e-4
                    + y * (0.245_752_017_4e-5 + y * (-0.240_337_019e-6))));
        let q = 0.046_874_999_95
            + y * (-0.200_269_087_3e-3
                + y * (0.844_919_909_6e-5
                    + y * (-0.882_289_87e-6 + y * 0.105_787_412e-6)));
        (0.636_619_772 / x).sqrt() * (xx.sin() * p + z * xx.cos() * q)
    }
}

/// First `n` positive zeros of J0, McMahon estimate refined by Newton steps
/// (J0' = -J1). The first zero p01 sets the TM01 cutoff wavenumber.
pub fn j0_zeros(n: usize) -> Vec<f64> {
    (1..=n)
        .map(|k| {
            let beta = (k as f64 - 0.25) * PI;
            let b2 = beta * beta;
            let mut x = beta + 1.0 / (8.0 * beta) - 31.0 / (384.0 * beta * b2);
            for _ in 0..12 {
                let slope = -j1(x);
                if slope.abs() < 1e-300 {
                    break;
                }
                let step = j0(x) / slope;
                x -= step;
                if step.abs() < 1e-13 {
                    break;
                }
            }
            x
        })
        .collect()
}

/// Sampled J/Y curves and the leading J0 zeros for the diagnostic chart.
/// Independent of the live field computation.
#[derive(Debug, Clone)]
pub struct BesselDiagnostics {
    pub x: Vec<f64>,
    pub j0: Vec<f64>,
    pub j1: Vec<f64>,
    pub y0: Vec<f64>,
    pub y1: Vec<f64>,
    pub zeros: Vec<f64>,
}

impl BesselDiagnostics {
    pub fn compute(x_max: f64, resolution: usize) -> Self {
        let n = resolution.max(2);
        // Start slightly off zero: Y0/Y1 diverge at the origin.
        let x0 = 0.01;
        let x: Vec<f64> = (0..n)
            .map(|i| x0 + (x_max - x0) * i as f64 / (n - 1) as f64)
            .collect();
        Self {
            j0: x.iter().map(|&v| j0(v)).collect(),
            j1: x.iter().map(|&v| j1(v)).collect(),
            y0: x.iter().map(|&v| y0(v)).collect(),
            y1: x.iter().map(|&v| y1(v)).collect(),
            zeros: j0_zeros(5),
            x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_argument_values() {
        assert!((j0(0.0) - 1.0).abs() < 1e-9);
        assert!(j1(0.0).abs() < 1e-9);
        // Reference values, A&S tables.
        assert!((j0(1.0) - 0.765_197_7).abs() < 1e-6);
        assert!((j1(1.0) - 0.440_050_6).abs() < 1e-6);
        assert!((y0(1.0) - 0.088_256_96).abs() < 1e-6);
        assert!((y1(1.0) + 0.781_212_8).abs() < 1e-6);
    }

    #[test]
    fn first_zero_is_p01() {
        let zeros = j0_zeros(1);
        assert!((zeros[0] - 2.404_825_557_695_773).abs() < 1e-9);
        assert!(j0(zeros[0]).abs() < 1e-12);
    }

    #[test]
    fn zeros_increase_and_approach_pi_spacing() {
        let zeros = j0_zeros(5);
        assert_eq!(zeros.len(), 5);
        for pair in zeros.windows(2) {
            assert!(pair[1] > pair[0]);
            let gap = pair[1] - pair[0];
            assert!((gap - PI).abs() < 0.05, "gap {gap} far from pi");
        }
        // Known value of the fifth zero.
        assert!((zeros[4] - 14.930_917_708_487_8).abs() < 1e-8);
    }

    #[test]
    fn diagnostics_are_finite() {
        let diag = BesselDiagnostics::compute(12.0, 300);
        assert_eq!(diag.x.len(), 300);
        for series in [&diag.j0, &diag.j1, &diag.y0, &diag.y1] {
            assert!(series.iter().all(|v| v.is_finite()));
        }
    }
}
