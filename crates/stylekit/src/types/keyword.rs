//! Keyword enums.

/// Define a keyword enum with `as_str`, `Display` and `FromStr`.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $css:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// The CSS keyword.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $css ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> $crate::Result<Self> {
                match s {
                    $( $css => Ok($name::$variant), )+
                    other => Err($crate::Error::invalid_keyword($kind, other)),
                }
            }
        }

        impl From<$name> for $crate::types::StyleValue {
            fn from(value: $name) -> Self {
                $crate::types::StyleValue::Str(value.as_str().to_string())
            }
        }

        $crate::types::impl_scalar_from!($name);
    };
}
pub(crate) use keyword_enum;
