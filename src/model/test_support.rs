use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::{Book, Dataset};

pub fn make_book(id: &str, title: &str, author: &str, genres: &[&str]) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        image: format!("https://covers.example/{}.jpg", id),
        description: format!("Description of {}", title),
        published: NaiveDate::from_ymd_opt(1990, 3, 14).unwrap(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}

/// Forty books `b1..=b40`. `b7` and `b23` are by `A1`, everything else by
/// `A2`. Even-numbered books are `G1`, multiples of five are also `G2`.
pub fn forty_books() -> Dataset {
    let books = (1..=40)
        .map(|n| {
            let author = if n == 7 || n == 23 { "A1" } else { "A2" };
            let mut genres = Vec::new();
            if n % 2 == 0 {
                genres.push("G1");
            }
            if n % 5 == 0 {
                genres.push("G2");
            }
            make_book(&format!("b{}", n), &format!("Book Number {}", n), author, &genres)
        })
        .collect();

    let authors = BTreeMap::from([
        ("A1".to_string(), "Ada Lovelace".to_string()),
        ("A2".to_string(), "Alan Turing".to_string()),
    ]);
    let genres = BTreeMap::from([
        ("G1".to_string(), "Computing".to_string()),
        ("G2".to_string(), "History".to_string()),
    ]);

    Dataset::new(books, authors, genres).unwrap()
}
