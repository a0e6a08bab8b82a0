use std::marker::PhantomData;

use strum::{Display, EnumString};

use crate::{ds::DefaultMap, env::Hashable};

/// A sparse feature vector, produced fresh for every query
pub type Features<K> = DefaultMap<K>;

/// Maps a `(state, action)` pair to a sparse vector of named real features
///
/// Keys absent from the returned vector have value `0.0`.
pub trait FeatureExtractor<S, A> {
    /// The feature name type
    type Key: Hashable;

    fn features(&self, state: &S, action: &A) -> Features<Self::Key>;
}

/// The trivial extractor: one indicator feature per `(state, action)` pair
///
/// A linear approximator over these features is exactly a Q-table.
#[derive(Debug, Clone, Copy)]
pub struct IdentityExtractor<S, A> {
    phantom: PhantomData<fn(&S, &A)>,
}

impl<S, A> IdentityExtractor<S, A> {
    pub fn new() -> Self {
        Self {
            phantom: PhantomData,
        }
    }
}

impl<S, A> Default for IdentityExtractor<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Hashable, A: Hashable> FeatureExtractor<S, A> for IdentityExtractor<S, A> {
    type Key = (S, A);

    fn features(&self, state: &S, action: &A) -> Features<Self::Key> {
        let mut features = Features::new();
        features.set((state.clone(), action.clone()), 1.0);
        features
    }
}

/// States that sit on an integer grid
pub trait Coordinates {
    fn coordinates(&self) -> (i32, i32);
}

/// Feature names shared by the built-in extractors
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FeatureKey<S, A> {
    /// The `(state, action)` pair itself
    Pair(S, A),
    /// The state, regardless of action
    State(S),
    /// The state's column
    X(i32),
    /// The state's row
    Y(i32),
    /// The action, regardless of state
    Action(A),
}

/// Indicator features on the state, its row, its column, and the action
///
/// Row, column and action features recur across many states, which lets weights
/// learned in one cell carry over to cells that were never visited.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateExtractor<S, A> {
    phantom: PhantomData<fn(&S, &A)>,
}

impl<S, A> CoordinateExtractor<S, A> {
    pub fn new() -> Self {
        Self {
            phantom: PhantomData,
        }
    }
}

impl<S, A> Default for CoordinateExtractor<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> FeatureExtractor<S, A> for CoordinateExtractor<S, A>
where
    S: Hashable + Coordinates,
    A: Hashable,
{
    type Key = FeatureKey<S, A>;

    fn features(&self, state: &S, action: &A) -> Features<Self::Key> {
        let (x, y) = state.coordinates();
        [
            FeatureKey::State(state.clone()),
            FeatureKey::X(x),
            FeatureKey::Y(y),
            FeatureKey::Action(action.clone()),
        ]
        .into_iter()
        .map(|k| (k, 1.0))
        .collect()
    }
}

/// Built-in extractor, chosen once when the learner is constructed
///
/// Parses from either the short or the long name, e.g. `"identity"` or
/// `"IdentityExtractor"`. Both variants key their features with [`FeatureKey`], so
/// states must implement [`Coordinates`]; other state types use
/// [`IdentityExtractor`] or their own extractor directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum ExtractorKind {
    #[default]
    #[strum(to_string = "identity", serialize = "IdentityExtractor")]
    Identity,
    #[strum(to_string = "coordinate", serialize = "CoordinateExtractor")]
    Coordinate,
}

impl<S, A> FeatureExtractor<S, A> for ExtractorKind
where
    S: Hashable + Coordinates,
    A: Hashable,
{
    type Key = FeatureKey<S, A>;

    fn features(&self, state: &S, action: &A) -> Features<Self::Key> {
        match self {
            Self::Identity => {
                let mut features = Features::new();
                features.set(FeatureKey::Pair(state.clone(), action.clone()), 1.0);
                features
            }
            Self::Coordinate => CoordinateExtractor::new().features(state, action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct Cell(i32, i32);

    impl Coordinates for Cell {
        fn coordinates(&self) -> (i32, i32) {
            (self.0, self.1)
        }
    }

    #[test]
    fn identity_extractor() {
        let features = IdentityExtractor::new().features(&3_u8, &'n');
        assert_eq!(features.len(), 1, "Exactly one feature");
        assert_eq!(features[&(3, 'n')], 1.0, "Pair feature has value 1");
        assert_eq!(features[&(3, 's')], 0.0, "Other pairs are absent");
    }

    #[test]
    fn coordinate_extractor() {
        let features = CoordinateExtractor::new().features(&Cell(2, 5), &'e');
        assert_eq!(features.len(), 4, "State, x, y and action features");
        assert_eq!(features[&FeatureKey::State(Cell(2, 5))], 1.0);
        assert_eq!(features[&FeatureKey::X(2)], 1.0);
        assert_eq!(features[&FeatureKey::Y(5)], 1.0);
        assert_eq!(features[&FeatureKey::Action('e')], 1.0);
    }

    #[test]
    fn extractor_kind_dispatch() {
        let identity = ExtractorKind::Identity.features(&Cell(0, 1), &'w');
        assert_eq!(identity.len(), 1, "Identity emits one feature");
        assert_eq!(identity[&FeatureKey::Pair(Cell(0, 1), 'w')], 1.0);

        let coordinate = ExtractorKind::Coordinate.features(&Cell(0, 1), &'w');
        assert_eq!(
            coordinate,
            CoordinateExtractor::new().features(&Cell(0, 1), &'w'),
            "Coordinate kind matches the coordinate extractor"
        );
    }

    #[test]
    fn extractor_kind_from_name() {
        let parse = |name: &str| name.parse::<ExtractorKind>().ok();
        assert_eq!(parse("identity"), Some(ExtractorKind::Identity));
        assert_eq!(parse("IdentityExtractor"), Some(ExtractorKind::Identity));
        assert_eq!(parse("CoordinateExtractor"), Some(ExtractorKind::Coordinate));
        assert_eq!(ExtractorKind::Coordinate.to_string(), "coordinate");
        assert!(
            "SimpleExtractor".parse::<ExtractorKind>().is_err(),
            "Unknown names are rejected"
        );
    }
}
