// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // s!() -> String::new()
    () => {
        ::std::string::String::new()
    };
    // Literals, consts, &str vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String concatenation shorthand, e.g. join!(BASE_URL, "catalogue/")
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}
