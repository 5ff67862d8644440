#[cfg(use_f64)]
pub type Float = f64;

#[cfg(not(use_f64))]
pub type Float = f32;

#[cfg(use_f64)]
pub type FloatAsBits = u64;
#[cfg(not(use_f64))]
pub type FloatAsBits = u32;

/// The native two-component vector matching `Float`.
#[cfg(use_f64)]
pub type NativeVec2 = glam::DVec2;
#[cfg(not(use_f64))]
pub type NativeVec2 = glam::Vec2;

/// Reinterpret a `Float` as its bit pattern.
pub fn float_to_bits(f: Float) -> FloatAsBits {
    f.to_bits()
}

/// Reinterpret a bit pattern as a `Float`.
pub fn bits_to_float(ui: FloatAsBits) -> Float {
    Float::from_bits(ui)
}

/// Bump a floating-point value up to the next greater representable
/// floating-point value.
pub fn next_float_up(v: Float) -> Float {
    if v.is_infinite() && v > 0.0 {
        return v;
    }
    let v = if v == -0.0 { 0.0 } else { v };
    let mut ui = float_to_bits(v);
    if v >= 0.0 {
        ui += 1;
    } else {
        ui -= 1;
    }
    bits_to_float(ui)
}

/// Bump a floating-point value down to the next smaller representable
/// floating-point value.
pub fn next_float_down(v: Float) -> Float {
    if v.is_infinite() && v < 0.0 {
        return v;
    }
    let v = if v == 0.0 { -0.0 } else { v };
    let mut ui = float_to_bits(v);
    if v > 0.0 {
        ui -= 1;
    } else {
        ui += 1;
    }
    bits_to_float(ui)
}

// Note - to properly test, cargo test must also be run with the use_f64
// cfg enabled; the default run only covers the f32 implementations.
#[cfg(test)]
mod tests {
    use float_next_after::NextAfter;
    use rand::Rng;

    use super::{bits_to_float, float_to_bits, next_float_down, next_float_up, Float, FloatAsBits};

    #[test]
    fn next_up_down_float() {
        assert!(next_float_up(-0.0) > 0.0);
        assert!(next_float_down(0.0) < 0.0);

        assert_eq!(next_float_up(Float::INFINITY), Float::INFINITY);
        assert!(next_float_down(Float::INFINITY) < Float::INFINITY);

        assert_eq!(next_float_down(Float::NEG_INFINITY), Float::NEG_INFINITY);
        assert!(next_float_up(Float::NEG_INFINITY) > Float::NEG_INFINITY);

        let mut rng = rand::thread_rng();
        for _ in 0..10000 {
            let f: Float = rng.gen();
            if f.is_infinite() {
                continue;
            }
            assert_eq!(f.next_after(Float::INFINITY), next_float_up(f));
            assert_eq!(f.next_after(Float::NEG_INFINITY), next_float_down(f));
        }
    }

    #[test]
    fn float_bits_round_trip() {
        let mut rng = rand::thread_rng();
        for _ in 0..10000 {
            let ui: FloatAsBits = rng.gen();
            let f: Float = bits_to_float(ui);
            if f.is_nan() {
                continue;
            }
            assert_eq!(ui, float_to_bits(f));
        }
    }
}
