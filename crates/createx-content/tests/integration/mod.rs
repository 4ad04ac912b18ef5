mod catalog;
mod queries;
mod translations;
