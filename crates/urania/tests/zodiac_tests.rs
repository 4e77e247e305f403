use urania::zodiac::{normalize, wrap_degrees, Sign};

fn sample_longitudes() -> Vec<f64> {
    let mut values = vec![
        0.0, -0.0, 1e-12, -1e-12, 29.999_999, 30.0, 359.999_999_999, 360.0, 720.0, -360.0,
        -720.5, 1e6, -1e6, 123.456,
    ];
    let mut x = -1080.0;
    while x <= 1080.0 {
        values.push(x);
        x += 7.3;
    }
    values
}

#[test]
fn test_normalize_range() {
    for x in sample_longitudes() {
        let pos = normalize(x);
        assert!(
            pos.full_degree >= 0.0 && pos.full_degree < 360.0,
            "full_degree out of range for {}: {}",
            x,
            pos.full_degree
        );
        assert!(
            pos.degree >= 0.0 && pos.degree < 30.0,
            "degree out of range for {}: {}",
            x,
            pos.degree
        );
        let expected = Sign::from_index((pos.full_degree / 30.0).floor() as usize);
        assert_eq!(pos.sign, expected, "sign mismatch for {}", x);
        assert_eq!(pos.longitude.to_bits(), x.to_bits());
    }
}

#[test]
fn test_normalize_idempotent() {
    for x in sample_longitudes() {
        let once = normalize(x);
        let twice = normalize(once.full_degree);
        assert_eq!(twice.full_degree, once.full_degree, "for {}", x);
        assert_eq!(twice.sign, once.sign, "for {}", x);
        assert_eq!(twice.degree, once.degree, "for {}", x);
    }
}

#[test]
fn test_positive_modulo() {
    assert_eq!(wrap_degrees(-90.0), 270.0);
    assert_eq!(wrap_degrees(450.0), 90.0);
    assert_eq!(wrap_degrees(-360.0), 0.0);
}
