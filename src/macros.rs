#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

macro_rules! probe {
    ($kind:ident, $pat:literal) => {
        $crate::Probe { kind: $crate::ProbeKind::$kind, regex: $crate::regex!($pat) }
    };
}
