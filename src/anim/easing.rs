//! Easing curves, named the way animation configs spell them.
//!
//! `power1` is quadratic, `power2` cubic, `power3` quartic. A bare name
//! such as `power2` means the `out` variant.

use std::f32::consts::{PI, TAU};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::EasingParseError;

/// Maps normalized time `[0, 1]` to eased progress.
///
/// ```
/// use tarot_deck::anim::Easing;
///
/// let ease: Easing = "back.out(1.7)".parse().unwrap();
/// assert_eq!(ease, Easing::BackOut(1.7));
/// assert_eq!(ease.apply(0.0), 0.0);
/// assert_eq!(ease.apply(1.0), 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Easing {
    Linear,
    /// Powers outside `1..=4` behave, print, and serialize as the nearest
    /// supported power.
    PowerIn(u8),
    PowerOut(u8),
    PowerInOut(u8),
    SineInOut,
    /// Overshoot amount.
    BackOut(f32),
    ElasticOut { amplitude: f32, period: f32 },
}

impl Default for Easing {
    fn default() -> Self {
        Easing::PowerOut(1)
    }
}

const MIN_POWER: u8 = 1;
const MAX_POWER: u8 = 4;

fn clamp_power(n: u8) -> u8 {
    n.clamp(MIN_POWER, MAX_POWER)
}

fn exponent(n: u8) -> i32 {
    i32::from(clamp_power(n)) + 1
}

impl Easing {
    /// Eased progress for `t`, clamped to `[0, 1]`. Endpoints are exact.
    ///
    /// Always finite: a curve whose parameters produce NaN or infinity
    /// falls back to linear progress.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        let eased = self.curve(t);
        if eased.is_finite() {
            eased
        } else {
            t
        }
    }

    fn curve(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::PowerIn(n) => t.powi(exponent(n)),
            Easing::PowerOut(n) => 1.0 - (1.0 - t).powi(exponent(n)),
            Easing::PowerInOut(n) => {
                let exp = exponent(n);
                if t < 0.5 {
                    (2.0 * t).powi(exp) * 0.5
                } else {
                    1.0 - (2.0 * (1.0 - t)).powi(exp) * 0.5
                }
            }
            Easing::SineInOut => -((PI * t).cos() - 1.0) * 0.5,
            Easing::BackOut(s) => {
                let u = t - 1.0;
                u * u * ((s + 1.0) * u + s) + 1.0
            }
            Easing::ElasticOut { amplitude, period } => {
                let a = amplitude.max(1.0);
                let shift = period / TAU * (1.0 / a).asin();
                a * 2f32.powf(-10.0 * t) * ((t - shift) * TAU / period).sin() + 1.0
            }
        }
    }
}

impl std::fmt::Display for Easing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Easing::Linear => f.write_str("none"),
            Easing::PowerIn(n) => write!(f, "power{}.in", clamp_power(*n)),
            Easing::PowerOut(n) => write!(f, "power{}.out", clamp_power(*n)),
            Easing::PowerInOut(n) => write!(f, "power{}.inOut", clamp_power(*n)),
            Easing::SineInOut => f.write_str("sine.inOut"),
            Easing::BackOut(s) => write!(f, "back.out({s})"),
            Easing::ElasticOut { amplitude, period } => write!(f, "elastic.out({amplitude}, {period})"),
        }
    }
}

impl FromStr for Easing {
    type Err = EasingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || EasingParseError(s.to_string());
        let trimmed = s.trim();

        let (head, args) = match trimmed.split_once('(') {
            Some((head, rest)) => {
                let inner = rest.strip_suffix(')').ok_or_else(err)?;
                let args = inner
                    .split(',')
                    .map(|a| match a.trim().parse::<f32>() {
                        Ok(v) if v.is_finite() => Ok(v),
                        _ => Err(err()),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                (head, args)
            }
            None => (trimmed, Vec::new()),
        };

        let (family, direction) = head.split_once('.').unwrap_or((head, "out"));
        let arg = |i: usize, default: f32| args.get(i).copied().unwrap_or(default);

        let easing = match (family, direction) {
            ("none" | "linear", _) => Easing::Linear,
            ("sine", "inOut") => Easing::SineInOut,
            ("back", "out") => Easing::BackOut(arg(0, 1.70158)),
            ("elastic", "out") => {
                let period = arg(1, 0.3);
                if period <= 0.0 {
                    return Err(err());
                }
                Easing::ElasticOut {
                    amplitude: arg(0, 1.0),
                    period,
                }
            }
            (power, dir) if power.starts_with("power") => {
                let n: u8 = power["power".len()..].parse().map_err(|_| err())?;
                if !(MIN_POWER..=MAX_POWER).contains(&n) {
                    return Err(err());
                }
                match dir {
                    "in" => Easing::PowerIn(n),
                    "out" => Easing::PowerOut(n),
                    "inOut" => Easing::PowerInOut(n),
                    _ => return Err(err()),
                }
            }
            _ => return Err(err()),
        };
        Ok(easing)
    }
}

impl TryFrom<String> for Easing {
    type Error = EasingParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Easing> for String {
    fn from(easing: Easing) -> Self {
        easing.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 7] = [
        Easing::Linear,
        Easing::PowerIn(2),
        Easing::PowerOut(3),
        Easing::PowerInOut(1),
        Easing::SineInOut,
        Easing::BackOut(1.7),
        Easing::ElasticOut { amplitude: 1.0, period: 0.6 },
    ];

    #[test]
    fn test_endpoints_are_exact() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0, "{ease}");
            assert_eq!(ease.apply(1.0), 1.0, "{ease}");
            assert_eq!(ease.apply(-3.0), 0.0, "{ease}");
            assert_eq!(ease.apply(2.0), 1.0, "{ease}");
        }
    }

    #[test]
    fn test_known_values() {
        assert!((Easing::PowerOut(2).apply(0.5) - 0.875).abs() < 1e-6);
        assert!((Easing::PowerIn(1).apply(0.5) - 0.25).abs() < 1e-6);
        assert!((Easing::SineInOut.apply(0.5) - 0.5).abs() < 1e-6);
        assert!((Easing::PowerInOut(2).apply(0.25) - 0.0625).abs() < 1e-6);
    }

    #[test]
    fn test_back_and_elastic_overshoot() {
        let back_peak = (1..100).map(|i| Easing::BackOut(1.7).apply(i as f32 / 100.0)).fold(0.0, f32::max);
        assert!(back_peak > 1.0);

        let elastic = Easing::ElasticOut { amplitude: 1.0, period: 0.6 };
        let elastic_peak = (1..100).map(|i| elastic.apply(i as f32 / 100.0)).fold(0.0, f32::max);
        assert!(elastic_peak > 1.0);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("power2.out".parse::<Easing>().unwrap(), Easing::PowerOut(2));
        assert_eq!("power2.in".parse::<Easing>().unwrap(), Easing::PowerIn(2));
        assert_eq!("power3".parse::<Easing>().unwrap(), Easing::PowerOut(3));
        assert_eq!("sine.inOut".parse::<Easing>().unwrap(), Easing::SineInOut);
        assert_eq!("none".parse::<Easing>().unwrap(), Easing::Linear);
        assert_eq!(
            "elastic.out(1, 0.6)".parse::<Easing>().unwrap(),
            Easing::ElasticOut { amplitude: 1.0, period: 0.6 }
        );
        assert_eq!("back.out".parse::<Easing>().unwrap(), Easing::BackOut(1.70158));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for bad in ["bounce.out", "power9.out", "power2.sideways", "back.out(x)", "back.out(1.7"] {
            assert_eq!(bad.parse::<Easing>(), Err(EasingParseError(bad.to_string())), "{bad}");
        }
    }

    #[test]
    fn test_parse_rejects_degenerate_arguments() {
        for bad in [
            "elastic.out(1, 0)",
            "elastic.out(1, -0.5)",
            "elastic.out(NaN, 0.6)",
            "elastic.out(1, inf)",
            "back.out(NaN)",
            "back.out(-inf)",
        ] {
            assert_eq!(bad.parse::<Easing>(), Err(EasingParseError(bad.to_string())), "{bad}");
        }

        let json = r#"{"cardEntrance": "elastic.out(1, 0)"}"#;
        assert!(serde_json::from_str::<crate::anim::AnimationEasing>(json).is_err());
    }

    #[test]
    fn test_constructed_degenerate_curves_stay_finite() {
        let flat = Easing::ElasticOut { amplitude: 1.0, period: 0.0 };
        let nan = Easing::BackOut(f32::NAN);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!(flat.apply(t).is_finite(), "{t}");
            assert!(nan.apply(t).is_finite(), "{t}");
        }
        assert_eq!(flat.apply(0.5), 0.5);
    }

    #[test]
    fn test_out_of_range_powers_clamp() {
        assert_eq!(Easing::PowerIn(0).to_string(), "power1.in");
        assert_eq!(Easing::PowerOut(9).to_string(), "power4.out");
        assert_eq!(Easing::PowerIn(0).apply(0.5), Easing::PowerIn(1).apply(0.5));
        assert_eq!(Easing::PowerInOut(200).apply(0.3), Easing::PowerInOut(4).apply(0.3));

        for ease in [Easing::PowerIn(0), Easing::PowerOut(7), Easing::PowerInOut(255)] {
            let json = serde_json::to_string(&ease).unwrap();
            let back: Easing = serde_json::from_str(&json).unwrap();
            assert_eq!(back.apply(0.4), ease.apply(0.4), "{json}");
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for ease in ALL {
            assert_eq!(ease.to_string().parse::<Easing>().unwrap(), ease);
        }
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&Easing::PowerInOut(2)).unwrap();
        assert_eq!(json, "\"power2.inOut\"");
        let back: Easing = serde_json::from_str("\"back.out(1.7)\"").unwrap();
        assert_eq!(back, Easing::BackOut(1.7));
        assert!(serde_json::from_str::<Easing>("\"wobble\"").is_err());
    }
}
