pub mod app;
pub mod book_item;
pub mod create_book;
pub mod delete_book;
pub mod get_book;
pub mod list_books;
