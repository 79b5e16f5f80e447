/// One search hit as the movie API describes it. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieSummary {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
    pub media_type: String,
}

/// A successfully parsed search payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResponse {
    /// `Response: "True"`. Movies keep the order the API returned them in.
    Found {
        movies: Vec<MovieSummary>,
        total_results: Option<u32>,
    },
    /// `Response: "False"` with the upstream message, e.g. "Movie not found!".
    Rejected { message: String },
}

/// Result of one request: a payload, or a transport error description.
pub type SearchOutcome = Result<SearchResponse, String>;
