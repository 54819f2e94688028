//! Macro generating port error enums with snake_case constructors.
//!
//! ```text
//! define_port_error! {
//!     pub enum StoreError {
//!         Query { message: String } => "query failed: {message}",
//!     }
//! }
//! // StoreError::query("boom"), StoreError::Query { .. }.kind() == "query"
//! ```

macro_rules! define_port_error {
    (@fields $variant:ident ($($params:tt)*) ($($inits:tt)*)) => {
        ::paste::paste! {
            #[doc = "Build [`Self::" $variant "`]."]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (
        @fields $variant:ident ($($params:tt)*) ($($inits:tt)*)
        $field:ident : $ty:ty, $($rest:tt)*
    ) => {
        define_port_error!(
            @fields
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )+
        }

        impl $name {
            $(
                define_port_error!(@fields $variant () () $( $field : $ty, )*);
            )+

            /// Variant name in snake_case, for structured log fields.
            pub fn kind(&self) -> &'static str {
                ::paste::paste! {
                    match self {
                        $( Self::$variant { .. } => stringify!([<$variant:snake>]), )+
                    }
                }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum StoreError {
            Unavailable { message: String } => "store unavailable: {message}",
            Duplicate { book: String, attempts: u32 } => "duplicate in {book} after {attempts}",
        }
    }

    #[test]
    fn constructors_convert_into_field_types() {
        let err = StoreError::unavailable("closed");
        assert_eq!(err.to_string(), "store unavailable: closed");
        assert_eq!(
            StoreError::duplicate("work", 2_u32).to_string(),
            "duplicate in work after 2"
        );
    }

    #[test]
    fn kind_is_snake_case_variant_name() {
        assert_eq!(StoreError::unavailable("x").kind(), "unavailable");
        assert_eq!(StoreError::duplicate("a", 1_u32).kind(), "duplicate");
    }
}
