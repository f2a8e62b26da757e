/// Forwards formatting traits of a single-field tuple struct to its field.
#[macro_export]
macro_rules! newtype_fmt_single {
    ($newtype:ident; $trait:ident) => {
        impl std::fmt::$trait for $newtype {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::$trait::fmt(&*self.0, f)
            }
        }
    };
}

#[macro_export]
macro_rules! newtype_fmt {
    ($newtype:ident $(:)?) => {};
    ($newtype:ident: $trait:ident $(,$rest:ident)* $(,)?) => {
        $crate::newtype_fmt_single!($newtype; $trait);
        $crate::newtype_fmt!($newtype: $($rest),*);
    };
}
