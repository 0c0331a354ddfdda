use axum::Router;

use crate::state::ApiState;

pub mod books;

pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new().merge(books::app::app())
}
