//! Fixed-capacity CSI/DCS parameter storage.
//!
//! CSI escapes typically have the form `CSI 3 m`, but can also bundle
//! multiple values together: `CSI 3 ; 4 m`. Some sequences additionally use
//! colons to subdivide a parameter, e.g. the extended colour form
//! `CSI 38:2::r:g:b m`. Parameters are stored in one flat array; each
//! parameter records how many contiguous slots belong to its sub-parameter
//! group, so iteration yields one `&[u16]` slice per parameter.

pub(crate) const MAX_PARAMS: usize = 32;

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Params {
    /// Number of sub-parameters for each parameter.
    ///
    /// For each entry in the `params` array, this stores the length of the
    /// param as number of sub-params at the same index as the param in the
    /// `params` array.
    ///
    /// At the subparam positions the length will always be `0`.
    subparams: [u8; MAX_PARAMS],

    /// All parameters and sub-parameters.
    params: [u16; MAX_PARAMS],

    /// Number of sub-parameters in the current parameter.
    current_subparams: u8,

    /// Total number of occupied slots.
    len: usize,
}

impl Params {
    /// Returns the number of occupied slots, counting sub-parameters.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when no parameters are present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns an iterator over all parameters and their sub-parameters.
    #[inline]
    pub fn iter(&self) -> ParamsIter<'_> {
        ParamsIter::new(self)
    }

    /// Returns `true` when all slots are occupied.
    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.len == MAX_PARAMS
    }

    /// Clears all parameters.
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.current_subparams = 0;
        self.len = 0;
    }

    /// Adds an additional parameter.
    #[inline]
    pub(crate) fn push(&mut self, item: u16) {
        let index = self.len - self.current_subparams as usize;
        self.subparams[index] = self.current_subparams + 1;
        self.current_subparams = 0;
        self.params[self.len] = item;
        self.len += 1;
    }

    /// Adds an additional sub-parameter to the current parameter.
    #[inline]
    pub(crate) fn extend(&mut self, item: u16) {
        let index = self.len - self.current_subparams as usize;
        self.subparams[index] = self.current_subparams + 1;
        self.current_subparams += 1;
        self.params[self.len] = item;
        self.len += 1;
    }
}

impl<'a> IntoIterator for &'a Params {
    type IntoIter = ParamsIter<'a>;
    type Item = &'a [u16];

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the parameter groups of a [`Params`].
pub struct ParamsIter<'a> {
    params: &'a Params,
    index: usize,
}

impl<'a> ParamsIter<'a> {
    fn new(params: &'a Params) -> Self {
        Self { params, index: 0 }
    }
}

impl<'a> Iterator for ParamsIter<'a> {
    type Item = &'a [u16];

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.params.len() {
            return None;
        }

        // Get all sub-parameters for this parameter.
        let num_subparams = self.params.subparams[self.index] as usize;
        let param =
            &self.params.params[self.index..self.index + num_subparams];

        // Jump to the next parameter.
        self.index += num_subparams;

        Some(param)
    }
}
