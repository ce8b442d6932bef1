use std::{fmt, str::FromStr, sync::Arc};

use thiserror::Error;

pub type ActivationFn = Arc<dyn Fn(f64) -> f64 + Sync + Send>;

/// ```math
/// f(x) = \frac{1}{1 + e^{-x}}
/// ```
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + f64::exp(-x))
}

/// Steepened logistic curve from the NEAT paper.
///
/// ```math
/// f(x) = \frac{1}{1 + e^{-4.9x}}
/// ```
pub fn neat_sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + f64::exp(-4.9 * x))
}

/// ```math
/// f(x) = x
/// ```
pub fn identity(x: f64) -> f64 {
    x
}

/// A named activation function.
///
/// Built-ins compare equal to each other by kind. A custom activation only equals a clone of itself, even when it borrows a built-in name.
#[derive(Clone)]
pub struct Activation {
    func: ActivationFn,
    source: Source,
}
#[derive(Debug, Clone)]
enum Source {
    Sigmoid,
    NeatSigmoid,
    Identity,
    Custom(&'static str),
}
impl Activation {
    pub fn custom(name: &'static str, func: impl Fn(f64) -> f64 + Sync + Send + 'static) -> Self {
        Self {
            func: Arc::new(func),
            source: Source::Custom(name),
        }
    }

    pub fn sigmoid() -> Self {
        Self::builtin(Source::Sigmoid, sigmoid)
    }
    pub fn neat_sigmoid() -> Self {
        Self::builtin(Source::NeatSigmoid, neat_sigmoid)
    }
    pub fn identity() -> Self {
        Self::builtin(Source::Identity, identity)
    }
    fn builtin(source: Source, func: fn(f64) -> f64) -> Self {
        Self {
            func: Arc::new(func),
            source,
        }
    }

    pub fn apply(&self, x: f64) -> f64 {
        (self.func)(x)
    }

    pub fn name(&self) -> &'static str {
        match self.source {
            Source::Sigmoid => SIGMOID,
            Source::NeatSigmoid => NEAT_SIGMOID,
            Source::Identity => IDENTITY,
            Source::Custom(name) => name,
        }
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self.source, Source::Custom(_))
    }
}
impl Default for Activation {
    fn default() -> Self {
        Self::sigmoid()
    }
}
impl fmt::Debug for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Activation").field(&self.name()).finish()
    }
}
impl PartialEq for Activation {
    fn eq(&self, other: &Self) -> bool {
        match (&self.source, &other.source) {
            (Source::Sigmoid, Source::Sigmoid)
            | (Source::NeatSigmoid, Source::NeatSigmoid)
            | (Source::Identity, Source::Identity) => true,
            (Source::Custom(_), Source::Custom(_)) => Arc::ptr_eq(&self.func, &other.func),
            _ => false,
        }
    }
}
impl FromStr for Activation {
    type Err = ActivationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            SIGMOID => Self::sigmoid(),
            NEAT_SIGMOID => Self::neat_sigmoid(),
            IDENTITY => Self::identity(),
            _ => return Err(ActivationError::Unknown(s.to_string())),
        })
    }
}

const SIGMOID: &str = "sigmoid";
const NEAT_SIGMOID: &str = "neat_sigmoid";
const IDENTITY: &str = "identity";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActivationError {
    #[error("Unknown activation function `{0}`")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rand_distr::{Distribution, Normal};

    use super::*;

    #[test]
    fn zero_is_midpoint() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert_eq!(neat_sigmoid(0.0), 0.5);
    }

    #[test]
    fn sigmoid_at_two() {
        assert!((sigmoid(2.0) - 0.8807970779778823).abs() < 1e-12);
    }

    #[test]
    fn neat_sigmoid_is_steeper() {
        assert!(neat_sigmoid(1.0) > sigmoid(1.0));
        assert!(neat_sigmoid(-1.0) < sigmoid(-1.0));
    }

    #[test]
    fn open_unit_interval() {
        let mut rng = rand::thread_rng();
        let normal = Normal::new(0.0, 3.0).unwrap();
        for _ in 0..1_000 {
            let x: f64 = normal.sample(&mut rng);
            let s = sigmoid(x);
            assert!(0.0 < s && s < 1.0, "sigmoid({x}) = {s}");
            // 4.9 * x stays well inside the non-saturating range
            let x: f64 = rng.gen_range(-5.0..5.0);
            let s = neat_sigmoid(x);
            assert!(0.0 < s && s < 1.0, "neat_sigmoid({x}) = {s}");
        }
    }

    #[test]
    fn test_saturation() {
        let x = f64::MIN;
        let exp = f64::exp(-x);
        assert!(exp.is_infinite());
        assert_eq!(sigmoid(x), 0.0);
        assert_eq!(neat_sigmoid(x), 0.0);

        let x = f64::MAX;
        assert_eq!(f64::exp(-x), 0.0);
        assert_eq!(sigmoid(x), 1.0);
        assert_eq!(neat_sigmoid(x), 1.0);

        assert_eq!(sigmoid(-1000.0), 0.0);
        assert_eq!(sigmoid(1000.0), 1.0);
        assert_eq!(neat_sigmoid(-200.0), 0.0);
        assert_eq!(neat_sigmoid(200.0), 1.0);
    }

    #[test]
    fn nan_propagates() {
        assert!(sigmoid(f64::NAN).is_nan());
        assert!(neat_sigmoid(f64::NAN).is_nan());
    }

    #[test]
    fn parse_builtin() {
        assert_eq!("sigmoid".parse::<Activation>().unwrap(), Activation::sigmoid());
        assert_eq!(
            "neat_sigmoid".parse::<Activation>().unwrap(),
            Activation::neat_sigmoid()
        );
        let identity: Activation = "identity".parse().unwrap();
        assert_eq!(identity.apply(-3.25), -3.25);
    }

    #[test]
    fn parse_unknown() {
        let err = "softplus".parse::<Activation>().unwrap_err();
        assert_eq!(err, ActivationError::Unknown("softplus".to_string()));
    }

    #[test]
    fn default_is_sigmoid() {
        let activation = Activation::default();
        assert_eq!(activation.name(), "sigmoid");
        assert_eq!(activation.apply(0.0), 0.5);
    }

    #[test]
    fn custom_activation() {
        let relu = Activation::custom("relu", |x: f64| x.max(0.0));
        assert_eq!(relu.apply(-1.0), 0.0);
        assert_eq!(relu.apply(2.5), 2.5);
        assert_eq!(format!("{relu:?}"), "Activation(\"relu\")");
        assert!(!relu.is_builtin());
    }

    #[test]
    fn custom_never_equals_builtin() {
        let fake = Activation::custom("identity", |x: f64| x * 100.0);
        assert_eq!(fake.name(), "identity");
        assert_ne!(fake, Activation::identity());
        assert_ne!(Activation::identity(), fake);
        assert_eq!(fake, fake.clone());
        let other = Activation::custom("identity", |x: f64| x * 100.0);
        assert_ne!(fake, other);
    }

    #[test]
    fn builtins_equal_by_kind() {
        assert_eq!(Activation::identity(), Activation::identity());
        assert_ne!(Activation::sigmoid(), Activation::neat_sigmoid());
        assert!(Activation::neat_sigmoid().is_builtin());
    }
}
