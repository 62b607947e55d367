// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Render an optional cell, falling back to the "not available" sentinel.
#[macro_export]
macro_rules! or_na {
    ($opt:expr) => {
        match &$opt {
            ::std::option::Option::Some(v) => ::std::format!("{}", v),
            ::std::option::Option::None => $crate::s!($crate::phone::NOT_AVAILABLE),
        }
    };
}
