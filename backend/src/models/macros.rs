/// Defines a newtype ID wrapper around an owned `String` and generates:
/// - derives (Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)
/// - transparent serde representation (the id is a bare JSON string)
/// - `Display`
/// - `From<String>`, `From<&str>` and `From<$name> for String`
///
/// Usage:
///   define_id_type!(JobId);
#[macro_export]
macro_rules! define_id_type {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub ::std::string::String);

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::write!(f, "{}", self.0)
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(v: ::std::string::String) -> Self {
                $name(v)
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(v: &str) -> Self {
                $name(v.to_string())
            }
        }

        impl ::std::convert::From<$name> for ::std::string::String {
            fn from(v: $name) -> Self {
                v.0
            }
        }

        impl $name {
            pub fn new(value: impl Into<::std::string::String>) -> Self {
                $name(value.into())
            }

            /// Fresh random identifier for records created through intake.
            pub fn generate() -> Self {
                $name(::uuid::Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
    };
}
