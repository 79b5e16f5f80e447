use crate::MovieSummary;

/// Number of placeholder cards shown while results are loading.
pub const SKELETON_PLACEHOLDERS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub search: String,
    pub debounced: String,
    pub status: RequestStatus,
    pub results: ResultsView,
    pub pulse: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Debouncing,
    Loading,
    Failed,
    Loaded,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultsView {
    /// Fewer than three characters typed.
    #[default]
    Prompt,
    Skeleton {
        placeholders: usize,
    },
    /// Transport failure; rendered as a generic notice.
    Failed,
    /// Upstream message shown verbatim.
    Rejected {
        message: String,
    },
    Grid {
        cards: Vec<MovieCard>,
        total_results: Option<u32>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCard {
    pub key: String,
    pub title: String,
    pub subtitle: String,
    pub poster_url: String,
}

impl MovieCard {
    pub(crate) fn from_summary(movie: &MovieSummary) -> Self {
        Self {
            key: movie.id.clone(),
            title: movie.title.clone(),
            subtitle: format!("{} | {}", movie.year, movie.media_type),
            poster_url: movie.poster_url.clone(),
        }
    }
}
