use std::fmt;


// Formatter that uses a closure
// Useful to avoid a lot of boilerplate when there are multiple ways to Display a struct

pub fn delegate_fmt<F>(fmt_func: F) -> impl fmt::Display where F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result {
    FnFormatter { fmt_func }
}

struct FnFormatter<F> where F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result {
    fmt_func: F,
}

impl<F> fmt::Display for FnFormatter<F> where F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.fmt_func)(fmt)
    }
}


/// Displays each item separated by `sep`, without building an intermediate String
pub fn fmt_join<'a, T>(sep: &'a str, items: &'a [T]) -> impl fmt::Display + 'a where T: fmt::Display {
    delegate_fmt(move |fmt| {
        if let Some((first, rest)) = items.split_first() {
            write!(fmt, "{}", first)?;
            for item in rest.iter() {
                fmt.write_str(sep)?;
                write!(fmt, "{}", item)?;
            }
        }
        Ok(())
    })
}

