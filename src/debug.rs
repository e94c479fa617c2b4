use std::collections::VecDeque;
use std::fmt;

/// Default cap on how many items an eager debug trace fetches.
pub const DEBUG_MAX_COUNT: usize = 100;

/// Debugging adapter that prints the items flowing through a pipeline.
///
/// Inert until the first pull; then it eagerly fetches up to `max_count`
/// items from the inner iterator, prints the optional label followed by each
/// fetched item to stderr, and afterwards replays the fetched items before
/// falling through to the rest of the inner iterator. Nothing is lost or
/// reordered.
///
/// The eager fetch makes the trace come out as one block even when a lazy
/// adapter further down the pipeline only pulls one item at a time; the cap
/// keeps infinite sources usable.
pub struct DebugEager<I: Iterator> {
    source: I,
    label: Option<String>,
    max_count: usize,
    fetched: Option<VecDeque<I::Item>>,
}

impl<I: Iterator> DebugEager<I>
where
    I::Item: fmt::Display,
{
    pub fn new(source: I, label: Option<&str>, max_count: usize) -> DebugEager<I> {
        DebugEager {
            source,
            label: label.map(str::to_string),
            max_count,
            fetched: None,
        }
    }

    fn fetch(&mut self) {
        let mut fetched = VecDeque::new();
        for _ in 0..self.max_count {
            match self.source.next() {
                Some(item) => fetched.push_back(item),
                None => break,
            }
        }
        if let Some(label) = &self.label {
            eprintln!("{label}");
        }
        for item in &fetched {
            eprintln!("{item}");
        }
        self.fetched = Some(fetched);
    }
}

impl<I: Iterator> Iterator for DebugEager<I>
where
    I::Item: fmt::Display,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.fetched.is_none() {
            self.fetch();
        }
        match self.fetched.as_mut().and_then(|fetched| fetched.pop_front()) {
            Some(item) => Some(item),
            None => self.source.next(),
        }
    }
}
