/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Each request checks out its own connection
    /// or unit of work from here.
    pub pool: fyyur_db::DbPool,
}
