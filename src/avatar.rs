//! # Stand-in Avatars
//!
//! The user API does not keep uploaded files, so a locally chosen image is
//! submitted as one of a fixed set of stock image URLs instead. Which one is
//! decided by an [`IndexSource`] the caller passes in, so tests can pin the
//! choice.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of stock images in the pool.
pub const AVATAR_POOL_SIZE: usize = 12;

/// Picks an index below a bound.
pub trait IndexSource {
    /// Returns a value in `0..len`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Any `FnMut(len) -> index` closure is an index source.
impl<F> IndexSource for F
where
    F: FnMut(usize) -> usize,
{
    fn next_index(&mut self, len: usize) -> usize {
        self(len)
    }
}

/// Index source backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomIndex<R = StdRng> {
    rng: R,
}

impl RandomIndex<StdRng> {
    /// Seeded from the operating system.
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomIndex<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> IndexSource for RandomIndex<R> {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// The fixed set of stock avatar URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarPool {
    urls: Vec<String>,
}

impl AvatarPool {
    /// Builds the pool `<base_url>/1-image.jpg` .. `<base_url>/12-image.jpg`.
    pub fn new(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        let urls = (1..=AVATAR_POOL_SIZE)
            .map(|n| format!("{base_url}/{n}-image.jpg"))
            .collect();
        Self { urls }
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// Stock URL for the 1-based image number, if it exists.
    pub fn url(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|i| self.urls.get(i))
            .map(String::as_str)
    }

    /// Picks a stand-in URL. Out-of-range indexes wrap around.
    pub fn pick(&self, source: &mut impl IndexSource) -> String {
        let index = source.next_index(self.urls.len()) % self.urls.len();
        self.urls[index].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://reqres.in/img/faces";

    #[test]
    fn test_pool_has_twelve_urls() {
        let pool = AvatarPool::new(BASE);
        assert_eq!(pool.urls().len(), AVATAR_POOL_SIZE);
        assert_eq!(pool.url(1), Some("https://reqres.in/img/faces/1-image.jpg"));
        assert_eq!(pool.url(12), Some("https://reqres.in/img/faces/12-image.jpg"));
        assert_eq!(pool.url(0), None);
        assert_eq!(pool.url(13), None);
    }

    #[test]
    fn test_trailing_slash_ignored() {
        assert_eq!(AvatarPool::new("http://img/"), AvatarPool::new("http://img"));
    }

    #[test]
    fn test_pick_uses_injected_source() {
        let pool = AvatarPool::new(BASE);
        let mut fixed = |_len: usize| 4;
        assert_eq!(
            pool.pick(&mut fixed),
            "https://reqres.in/img/faces/5-image.jpg"
        );
    }

    #[test]
    fn test_pick_wraps_out_of_range_index() {
        let pool = AvatarPool::new(BASE);
        let mut wild = |_len: usize| 25;
        assert_eq!(pool.pick(&mut wild), pool.urls()[1]);
    }

    #[test]
    fn test_wraps_any_rng() {
        let pool = AvatarPool::new(BASE);
        let mut wrapped = RandomIndex::new(StdRng::seed_from_u64(9));
        let mut seeded = RandomIndex::seeded(9);
        assert_eq!(pool.pick(&mut wrapped), pool.pick(&mut seeded));
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let pool = AvatarPool::new(BASE);
        let mut a = RandomIndex::seeded(42);
        let mut b = RandomIndex::seeded(42);
        for _ in 0..20 {
            let url = pool.pick(&mut a);
            assert_eq!(url, pool.pick(&mut b));
            assert!(pool.urls().contains(&url));
        }
    }
}
