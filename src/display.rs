//! Debug formatting for labeled sequences

use core::fmt;

/// A named sequence rendered as `"<name>: v1 v2 ... \n"`
///
/// Every value is followed by a single space and the line ends with a
/// newline, so an empty sequence renders as `"<name>: \n"`.
///
/// ```
/// use flowmoments::display::LabeledRange;
///
/// let line = LabeledRange::new("data", [1, 2, 3]).to_string();
/// assert_eq!(line, "data: 1 2 3 \n");
/// ```
#[derive(Clone, Debug)]
pub struct LabeledRange<'a, I> {
    name: &'a str,
    values: I,
}

impl<'a, I> LabeledRange<'a, I>
where
    I: IntoIterator + Clone,
    I::Item: fmt::Display,
{
    pub fn new(name: &'a str, values: I) -> Self {
        Self { name, values }
    }
}

impl<I> fmt::Display for LabeledRange<'_, I>
where
    I: IntoIterator + Clone,
    I::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        for value in self.values.clone() {
            write!(f, "{} ", value)?;
        }
        writeln!(f)
    }
}

/// Print a labeled sequence to stdout
#[cfg(feature = "std")]
pub fn print_range<I>(name: &str, values: I)
where
    I: IntoIterator + Clone,
    I::Item: fmt::Display,
{
    print!("{}", LabeledRange::new(name, values));
}
