pub mod opening_book;
