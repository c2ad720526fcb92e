use rand::{seq::SliceRandom, Rng};

use crate::models::Movie;

/// Number of movies returned by [`recommend`]
pub const RECOMMENDATION_COUNT: usize = 3;

/// Picks movies to show as recommendations
///
/// Returns a uniformly random sample of `min(RECOMMENDATION_COUNT, catalog.len())`
/// distinct movies from the catalog. The user's favorites are not consulted.
pub fn recommend<R>(catalog: &[Movie], rng: &mut R) -> Vec<Movie>
where
    R: Rng + ?Sized,
{
    catalog
        .choose_multiple(rng, RECOMMENDATION_COUNT)
        .cloned()
        .collect()
}
