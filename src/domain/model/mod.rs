pub mod book;
pub mod collection;
pub mod isbn;
pub mod publisher;
