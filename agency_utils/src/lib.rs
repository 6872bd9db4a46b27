mod macros;

/// Return the version of the agency backend.
pub fn agency_version() -> &'static str {
    option_env!("AGENCY_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

pub trait Apply {
    /// Applies the function `f` only if `value` is `Some(...)` and provides the
    /// contained value to `f`.
    ///
    /// #### Example
    /// ```rust
    /// # use agency_utils::Apply;
    /// fn greet(greeting: String, name: Option<&str>) -> String {
    ///     greeting.apply_map(name, |slf, name| format!("{slf}, {name}"))
    /// }
    /// assert_eq!(greet("Hi".into(), None), "Hi");
    /// assert_eq!(greet("Hi".into(), Some("Jane")), "Hi, Jane");
    /// ```
    fn apply_map<U>(self, value: Option<U>, f: impl FnOnce(Self, U) -> Self) -> Self
    where
        Self: Sized,
    {
        match value {
            Some(value) => f(self, value),
            None => self,
        }
    }
}

impl<T> Apply for T {}
