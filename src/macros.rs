/// Compile a regex literal once and hand out a `&'static Regex`.
///
/// Patterns are string literals checked by the test suite, so a bad pattern
/// fails the first test that touches it.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}
