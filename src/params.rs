//! Query parameters merged into the request URL.

use std::collections::HashMap;

use crate::transport::HttpRequest;

/// Extra query parameters for a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Params {
    /// No extra query parameters.
    #[default]
    None,
    /// Query parameters to append to the URL.
    ///
    /// Iteration order over the map is unspecified, so the relative order
    /// of the appended pairs is too.
    Query(HashMap<String, String>),
}

impl Params {
    /// Builds [`Params::Query`] from key/value pairs.
    pub fn query<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::Query(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Appends the parameters to the request URL.
    ///
    /// Existing query pairs are kept; new pairs are added after them, so a
    /// key already present ends up in the URL twice.
    pub fn add_to(&self, request: &mut HttpRequest) {
        match self {
            Self::None => {}
            Self::Query(params) if params.is_empty() => {}
            Self::Query(params) => {
                let mut pairs = request.url.query_pairs_mut();
                for (key, value) in params {
                    pairs.append_pair(key, value);
                }
            }
        }
    }
}
