macro_rules! id {
    ($(#[$attr:meta])* $ident:ident) => {
        $(#[$attr])*
        #[::nutype::nutype(derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Display,
            FromStr,
            Deref,
            From,
            Into,
            Serialize,
            Deserialize,
        ))]
        pub struct $ident(u64);
    };
}

/// Declares a string newtype whose value is always trimmed.
macro_rules! nutype_string {
    ($(#[$attr:meta])* $ident:ident) => {
        $(#[$attr])*
        #[::nutype::nutype(
            sanitize(trim),
            derive(
                Debug,
                Clone,
                PartialEq,
                Eq,
                PartialOrd,
                Ord,
                Hash,
                Display,
                Deref,
                AsRef,
                From,
                Serialize,
                Deserialize,
            )
        )]
        pub struct $ident(String);
    };
}

pub(crate) use id;
pub(crate) use nutype_string;
