/// Declare a trimmed string newtype with the given nutype validation rules.
macro_rules! nutype_string {
    ($ident:ident($($arg:tt)*)) => {
        #[::nutype::nutype(
            sanitize(trim),
            $($arg)*,
            derive(Debug, Clone, PartialEq, Eq, Hash, TryFrom, Deref, Display, Serialize, Deserialize)
        )]
        pub struct $ident(String);
    };
}

pub(crate) use nutype_string;
