use url::Url;

/// Name of the address bar parameter that carries the search term.
pub const SEARCH_PARAM: &str = "search";

/// Ordered query parameters as they appear in the address bar.
pub type QueryParams = Vec<(String, String)>;

/// Access to the address bar's query string.
///
/// Writes replace the current entry; they never navigate.
pub trait UrlStatePort {
    fn read(&self) -> QueryParams;
    fn write(&mut self, params: QueryParams);
}

/// In-memory address bar backed by a parsed URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryLocation {
    url: Url,
    writes: usize,
}

impl MemoryLocation {
    pub fn new(url: Url) -> Self {
        Self { url, writes: 0 }
    }

    pub fn parse(raw: &str) -> Result<Self, url::ParseError> {
        Url::parse(raw).map(Self::new)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Number of replace-writes applied so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl UrlStatePort for MemoryLocation {
    fn read(&self) -> QueryParams {
        self.url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }

    fn write(&mut self, params: QueryParams) {
        if params.is_empty() {
            self.url.set_query(None);
        } else {
            self.url.query_pairs_mut().clear().extend_pairs(params);
        }
        self.writes += 1;
    }
}

/// Binds the search term to the `search` parameter of an address bar.
///
/// The port is read exactly once, at construction. Afterwards the synchronizer
/// owns the value and only writes through the port.
#[derive(Debug)]
pub struct QuerySync<P: UrlStatePort> {
    port: P,
    current: String,
}

impl<P: UrlStatePort> QuerySync<P> {
    pub fn new(port: P) -> Self {
        let current = port
            .read()
            .into_iter()
            .find(|(key, _)| key == SEARCH_PARAM)
            .map(|(_, value)| value)
            .unwrap_or_default();
        Self { port, current }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    /// Updates the term and rewrites the address bar in the same step.
    pub fn on_change(&mut self, value: impl Into<String>) -> &str {
        self.current = value.into();
        let params = with_search_param(self.port.read(), &self.current);
        self.port.write(params);
        &self.current
    }
}

/// Sets `search` the way `URLSearchParams::set` does: the first occurrence is
/// replaced in place, later duplicates are dropped, and a missing one is
/// appended.
fn with_search_param(params: QueryParams, value: &str) -> QueryParams {
    let mut replaced = false;
    let mut out: QueryParams = params
        .into_iter()
        .filter_map(|(key, existing)| {
            if key != SEARCH_PARAM {
                return Some((key, existing));
            }
            if replaced {
                return None;
            }
            replaced = true;
            Some((key, value.to_string()))
        })
        .collect();
    if !replaced {
        out.push((SEARCH_PARAM.to_string(), value.to_string()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(raw: &str) -> MemoryLocation {
        MemoryLocation::parse(raw).unwrap()
    }

    #[test]
    fn initial_value_comes_from_search_param() {
        let sync = QuerySync::new(location("http://localhost/?search=batman"));
        assert_eq!(sync.current(), "batman");
        assert_eq!(sync.port().writes(), 0);
    }

    #[test]
    fn missing_param_starts_empty() {
        let sync = QuerySync::new(location("http://localhost/movies?page=2"));
        assert_eq!(sync.current(), "");
    }

    #[test]
    fn change_rewrites_param_and_keeps_others() {
        let mut sync = QuerySync::new(location("http://localhost/movies?lang=en&search=bat&page=2"));
        sync.on_change("batman begins");

        assert_eq!(sync.current(), "batman begins");
        let url = sync.port().url();
        assert_eq!(url.path(), "/movies");
        assert_eq!(url.query(), Some("lang=en&search=batman+begins&page=2"));
        assert_eq!(sync.port().writes(), 1);
    }

    #[test]
    fn change_appends_param_when_absent() {
        let mut sync = QuerySync::new(location("http://localhost/?lang=en"));
        sync.on_change("alien");
        assert_eq!(sync.port().url().query(), Some("lang=en&search=alien"));
    }

    #[test]
    fn duplicate_params_collapse_to_first_position() {
        let mut sync = QuerySync::new(location("http://localhost/?search=a&x=1&search=b"));
        assert_eq!(sync.current(), "a");
        sync.on_change("heat");
        assert_eq!(sync.port().url().query(), Some("search=heat&x=1"));
    }

    #[test]
    fn clearing_keeps_empty_param() {
        let mut sync = QuerySync::new(location("http://localhost/?search=heat"));
        sync.on_change("");
        assert_eq!(sync.port().url().query(), Some("search="));
    }

    #[test]
    fn value_is_not_reread_after_construction() {
        let mut sync = QuerySync::new(location("http://localhost/?search=heat"));
        sync.on_change("heatwave");
        sync.port.url.set_query(Some("search=other"));
        assert_eq!(sync.current(), "heatwave");
    }
}
