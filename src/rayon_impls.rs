use crate::{Dictionary, Set};
use rayon::iter::{FromParallelIterator, IntoParallelIterator, ParallelExtend, ParallelIterator};
use std::hash::{BuildHasher, Hash};

// The table is single-threaded: items are produced in parallel, collected, and then
// inserted on the calling thread.

impl<K, V, S> ParallelExtend<(K, V)> for Dictionary<K, V, S>
where
    K: Hash + Eq + Send,
    V: Send,
    S: BuildHasher,
{
    fn par_extend<I>(&mut self, par_iter: I)
    where
        I: IntoParallelIterator<Item = (K, V)>,
    {
        let items: Vec<(K, V)> = par_iter.into_par_iter().collect();
        self.extend(items);
    }
}

impl<K, V, S> FromParallelIterator<(K, V)> for Dictionary<K, V, S>
where
    K: Hash + Eq + Send,
    V: Send,
    S: BuildHasher + Default,
{
    fn from_par_iter<I>(par_iter: I) -> Self
    where
        I: IntoParallelIterator<Item = (K, V)>,
    {
        let mut created_dict = Dictionary::with_hasher(S::default());
        created_dict.par_extend(par_iter);
        created_dict
    }
}

impl<T, S> ParallelExtend<T> for Set<T, S>
where
    T: Hash + Eq + Send,
    S: BuildHasher,
{
    fn par_extend<I>(&mut self, par_iter: I)
    where
        I: IntoParallelIterator<Item = T>,
    {
        let items: Vec<T> = par_iter.into_par_iter().collect();
        self.extend(items);
    }
}

impl<T, S> FromParallelIterator<T> for Set<T, S>
where
    T: Hash + Eq + Send,
    S: BuildHasher + Default,
{
    fn from_par_iter<I>(par_iter: I) -> Self
    where
        I: IntoParallelIterator<Item = T>,
    {
        let mut created_set = Set::with_hasher(S::default());
        created_set.par_extend(par_iter);
        created_set
    }
}
