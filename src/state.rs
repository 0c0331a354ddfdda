use std::{ops::Deref, sync::Arc};

use crate::storage::BookStore;

#[derive(Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    pub fn new(book_store: BookStore) -> Self {
        Self {
            inner: Arc::new(ApiStateInner { book_store }),
        }
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

pub struct ApiStateInner {
    book_store: BookStore,
}

impl ApiStateInner {
    pub fn book_store(&self) -> &BookStore {
        &self.book_store
    }
}
