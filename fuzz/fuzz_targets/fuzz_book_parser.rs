#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any input must either parse or stop cleanly - a panic is a bug.
    let parser = bookstream::catalog::BookParser::parse(data);

    // Walk whatever survived to catch panics in the accessors too.
    for book in parser.books() {
        let _ = book.author_count();
        let _ = book.link_count();
        if let Some(links) = book.links.as_deref() {
            for link in links {
                let _ = link.book_url();
            }
        }
    }
});
