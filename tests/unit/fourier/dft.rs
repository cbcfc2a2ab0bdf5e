use super::*;

const TAU: f64 = std::f64::consts::TAU;

#[test]
fn constant_signal_is_pure_dc() {
    let v = Complex::new(3.0, 4.0);
    let coeffs = fourier_coefficients(&vec![v; 8]).unwrap();
    assert_eq!(coeffs.len(), 8);

    // The interleaved ordering puts DC first.
    assert_eq!(coeffs[0].frequency, 0);
    assert!((coeffs[0].real - 3.0).abs() < 1e-12);
    assert!((coeffs[0].imag - 4.0).abs() < 1e-12);
    assert!((coeffs[0].magnitude - 5.0).abs() < 1e-12);

    for c in &coeffs[1..] {
        assert!(c.magnitude < 1e-12, "bin {} leaked {}", c.frequency, c.magnitude);
    }
}

#[test]
fn frequencies_are_centered_and_interleaved() {
    let samples = vec![Complex::new(1.0, 0.0); 8];
    let coeffs = fourier_coefficients(&samples).unwrap();
    let freqs: Vec<i64> = coeffs.iter().map(|c| c.frequency).collect();
    assert_eq!(freqs, vec![0, -1, 1, -2, 2, -3, 3, -4]);
}

#[test]
fn single_rotation_concentrates_in_one_bin() {
    let samples: Vec<Complex<f64>> = (0..8)
        .map(|n| {
            let angle = TAU * (n as f64) / 8.0;
            Complex::new(angle.cos(), angle.sin())
        })
        .collect();
    let coeffs = fourier_coefficients(&samples).unwrap();
    for c in &coeffs {
        if c.frequency == 1 {
            assert!((c.magnitude - 1.0).abs() < 1e-12);
            assert!(c.phase.abs() < 1e-9);
        } else {
            assert!(c.magnitude < 1e-12);
        }
    }
}

#[test]
fn summing_all_coefficients_reproduces_the_samples() {
    let samples: Vec<Complex<f64>> = [
        (1.0, 2.0),
        (-0.5, 0.25),
        (3.0, -1.0),
        (0.0, 0.0),
        (-2.0, -2.0),
        (0.75, 1.5),
        (1.25, -0.25),
        (-1.0, 4.0),
    ]
    .iter()
    .map(|&(re, im)| Complex::new(re, im))
    .collect();

    let coeffs = fourier_coefficients(&samples).unwrap();
    for (n, sample) in samples.iter().enumerate() {
        let p = reconstruct_point(&coeffs, (n as f64) / 8.0);
        assert!((p.x - sample.re).abs() < 1e-9, "sample {n}: {p:?}");
        assert!((p.y - sample.im).abs() < 1e-9, "sample {n}: {p:?}");
    }
}

#[test]
fn real_cosine_folds_into_one_bin() {
    let samples: Vec<f64> = (0..8).map(|n| (TAU * (n as f64) / 8.0).cos()).collect();
    let coeffs = real_fourier_coefficients(&samples).unwrap();
    assert_eq!(coeffs.len(), 4);
    assert_eq!(coeffs[1].frequency, 1);
    assert!((coeffs[1].magnitude - 1.0).abs() < 1e-12);
    for (i, c) in coeffs.iter().enumerate() {
        if i != 1 {
            assert!(c.magnitude < 1e-12);
        }
    }
}

#[test]
fn non_power_of_two_is_a_validation_error() {
    let samples = vec![Complex::new(0.0, 0.0); 6];
    let err = fourier_coefficients(&samples).unwrap_err();
    assert!(err.to_string().contains("validation error"));
    assert!(real_fourier_coefficients(&[0.0; 3]).is_err());
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(fourier_coefficients(&[]).unwrap().is_empty());
    assert!(real_fourier_coefficients(&[]).unwrap().is_empty());
}

#[test]
fn single_sample_transform_is_identity() {
    let coeffs = fourier_coefficients(&[Complex::new(2.0, -3.0)]).unwrap();
    assert_eq!(coeffs.len(), 1);
    assert_eq!(coeffs[0].frequency, 0);
    assert!((coeffs[0].real - 2.0).abs() < 1e-12);
    assert!((coeffs[0].imag + 3.0).abs() < 1e-12);
}
