//! Helper macro for declaring port error enums.
//!
//! Each variant gets a snake_case constructor whose field parameters accept
//! anything convertible into the field type, and a stable `code()` string
//! used as a structured logging field.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Build [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* }) => {
        ::paste::paste! {
            #[doc = concat!("Build [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*

            /// Stable snake_case name of the variant.
            pub fn code(&self) -> &'static str {
                ::paste::paste! {
                    match self {
                        $( Self::$variant { .. } => stringify!([<$variant:snake>]), )*
                    }
                }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::domain::UserId;

    define_port_error! {
        pub enum ExamplePortError {
            Missing { user_id: UserId } => "user {user_id} is missing",
            Busy => "directory is busy",
            Labelled { message: String, user_id: UserId } => "{message} ({user_id})",
        }
    }

    #[test]
    fn constructors_accept_conversions_for_fields() {
        let err = ExamplePortError::missing(7_u32);
        assert_eq!(err.to_string(), "user 7 is missing");
        assert_eq!(
            err,
            ExamplePortError::Missing {
                user_id: UserId::new(7)
            }
        );
    }

    #[test]
    fn unit_variants_get_constructors() {
        assert_eq!(ExamplePortError::busy().to_string(), "directory is busy");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = ExamplePortError::labelled("stale entry", UserId::new(3));
        assert_eq!(err.to_string(), "stale entry (3)");
    }

    #[rstest]
    #[case(ExamplePortError::missing(1_u32), "missing")]
    #[case(ExamplePortError::busy(), "busy")]
    #[case(ExamplePortError::labelled("x", 2_u32), "labelled")]
    fn codes_are_snake_case_variant_names(
        #[case] err: ExamplePortError,
        #[case] expected: &str,
    ) {
        assert_eq!(err.code(), expected);
    }
}
