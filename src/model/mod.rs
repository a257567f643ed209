pub mod book;
pub mod dataset;

pub use book::Book;
pub use dataset::Dataset;

#[cfg(test)]
pub mod test_support;
